/// Semantic user intents produced by the key handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    CursorUp,
    CursorDown,

    // Browse mode
    OpenForm,
    DeleteSelected,

    // Insert mode (the form)
    Input(char),
    DeleteChar,
    CycleSlotForward,
    CycleSlotBack,
    Submit,
    CloseForm,
}
