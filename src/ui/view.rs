//! Rendering. Reads state, draws widgets, changes nothing.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::state::{App, Mode};
use crate::models::MealType;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Length(3), // form
            Constraint::Min(5),    // grouped list
            Constraint::Length(3), // help + notice
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_form(frame, app, chunks[1]);
    render_meals(frame, app, chunks[2]);
    render_status(frame, app, chunks[3]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Mealboard")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(24), Constraint::Length(42)])
        .split(area);

    let editing = app.mode == Mode::Insert;
    let name_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    // Block cursor at the end of the draft while editing
    let name_text = if editing {
        format!("{}\u{2588}", app.draft_name)
    } else {
        app.draft_name.clone()
    };
    let name = Paragraph::new(name_text).style(name_style).block(
        Block::default()
            .title("Meal name")
            .borders(Borders::ALL),
    );
    frame.render_widget(name, chunks[0]);

    let mut spans = Vec::new();
    for (i, meal_type) in MealType::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *meal_type == app.draft_type {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(meal_type.as_str(), style));
    }
    let slot = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Slot (Tab)")
            .borders(Borders::ALL),
    );
    frame.render_widget(slot, chunks[1]);
}

fn render_meals(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title("Planned meals").borders(Borders::ALL);

    if app.store.is_empty() {
        let placeholder = Paragraph::new("No meals planned yet. Press 'a' to add the first one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let mut items: Vec<ListItem> = Vec::new();
    let mut row = 0usize;
    for day in app.grouped() {
        items.push(ListItem::new(Line::from(Span::styled(
            day.date.format("%Y-%m-%d").to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))));

        for section in &day.sections {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("  {}", section.meal_type.label()),
                Style::default().fg(Color::Green),
            ))));

            for meal in &section.meals {
                let selected = app.mode == Mode::Browse && row == app.cursor;
                let style = if selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default()
                };
                items.push(ListItem::new(Line::from(Span::styled(
                    format!("    {}", meal.name),
                    style,
                ))));
                row += 1;
            }
        }
    }

    frame.render_widget(List::new(items).block(block), area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let help = match app.mode {
        Mode::Browse => "[a] add  [j/k] move  [d] delete  [q] quit",
        Mode::Insert => "[Enter] add  [Tab] slot  [Esc] back",
    };

    let text = match app.notice.as_deref() {
        Some(notice) if !notice.is_empty() => format!("{}  |  {}", help, notice),
        _ => help.to_string(),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}
