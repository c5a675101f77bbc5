//! Rendering
//!
//! Drawing reads page state only; nothing here mutates the app beyond the
//! cursor position ratatui asks for.

mod detail;
mod form;
mod list;

use ratatui::{prelude::*, widgets::*};
use tui_input::Input;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::app::App;
use crate::pages::Page;

pub(crate) fn title_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub(crate) fn error_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

pub(crate) fn success_style() -> Style {
    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
}

pub(crate) fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Single-line text input with a cursor when `active`
pub(crate) fn render_input(f: &mut Frame, area: Rect, input: &Input, title: &str, active: bool) {
    let style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let width = area.width.max(3) - 3;
    let scroll = input.visual_scroll(width as usize);
    let widget = Paragraph::new(input.value())
        .style(style)
        .scroll((0, scroll as u16))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(widget, area);

    if active {
        f.set_cursor_position((
            area.x + ((input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            area.y + 1,
        ));
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let mut constraints = vec![Constraint::Length(3), Constraint::Min(5)];
    if app.show_logs {
        constraints.push(Constraint::Length(10));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let screen = match &app.page {
        Page::List(_) => "Products".to_string(),
        Page::Detail(p) => format!("Product #{}", p.product_id),
        Page::Create(_) => "Create Product".to_string(),
        Page::Edit(p) => format!("Edit Product #{}", p.product_id),
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Product Catalog Admin ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("| "),
        Span::styled(screen, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" | "),
        Span::styled(app.config().api_url.as_str(), hint_style()),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(title_style()));
    f.render_widget(header, chunks[0]);

    let help = match &app.page {
        Page::List(p) => list::render(f, chunks[1], p),
        Page::Detail(p) => detail::render(f, chunks[1], p),
        Page::Create(p) => form::render_create(f, chunks[1], p),
        Page::Edit(p) => form::render_edit(f, chunks[1], p),
    };

    if app.show_logs {
        let logs = TuiLoggerWidget::default()
            .block(
                Block::default()
                    .title(" Logs (F2) ")
                    .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM))
                    .borders(Borders::ALL),
            )
            .output_separator('|')
            .output_timestamp(Some("%H:%M:%S".to_string()))
            .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
            .output_target(false)
            .output_file(false)
            .output_line(false)
            .style(Style::default().fg(Color::White))
            .state(&app.logger_state);
        f.render_widget(logs, chunks[2]);
    }

    let footer = Paragraph::new(format!(" {help}  F2 logs  Ctrl-C quit")).style(hint_style());
    f.render_widget(footer, chunks[chunks.len() - 1]);
}
