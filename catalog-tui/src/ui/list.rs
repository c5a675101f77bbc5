use ratatui::{prelude::*, widgets::*};

use super::{error_style, hint_style, render_input, title_style};
use crate::event::Loadable;
use crate::pages::ListPage;
use crate::pages::list::DELETE_PROMPT;

pub(super) fn render(f: &mut Frame, area: Rect, page: &ListPage) -> &'static str {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search
            Constraint::Length(1), // Notice
            Constraint::Min(1),    // Table
            Constraint::Length(1), // Count
        ])
        .split(area);

    let toggle = if page.active_only { "[x]" } else { "[ ]" };
    let title = format!(" Search (/)  {toggle} Active only (a) ");
    render_input(f, chunks[0], &page.search, &title, page.searching);

    let notice = if page.confirm_delete.is_some() {
        Line::from(vec![
            Span::styled(DELETE_PROMPT, Style::default().fg(Color::Yellow)),
            Span::raw(" (y/n)"),
        ])
    } else if let Some(msg) = &page.notice {
        Line::from(Span::styled(msg.as_str(), error_style()))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(notice), chunks[1]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(title_style())
        .title(" Products ");

    match &page.products {
        Loadable::Loading => {
            f.render_widget(Paragraph::new("Loading products...").block(block), chunks[2]);
        }
        Loadable::Failed(msg) => {
            let text = vec![
                Line::from(Span::styled(format!("Error: {msg}"), error_style())),
                Line::default(),
                Line::from(Span::styled("Press 'r' to retry", hint_style())),
            ];
            f.render_widget(Paragraph::new(text).block(block), chunks[2]);
        }
        Loadable::Loaded(products) if products.is_empty() => {
            f.render_widget(Paragraph::new(page.empty_message()).block(block), chunks[2]);
        }
        Loadable::Loaded(products) => {
            let header = Row::new([
                "Status", "ID", "Code", "Product Name", "Category", "Brand", "Price", "Images",
                "Actions",
            ])
            .style(Style::default().add_modifier(Modifier::BOLD));

            let rows = products.iter().map(|p| {
                let status_style = if p.show_in_app {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Red)
                };
                Row::new(vec![
                    Cell::from(p.status_label()).style(status_style),
                    Cell::from(p.product_id.to_string()),
                    Cell::from(p.short_code()),
                    Cell::from(p.product_name.as_str()),
                    Cell::from(p.category_name.as_str()),
                    Cell::from(p.brand_name.as_str()),
                    Cell::from(p.display_price()),
                    Cell::from(if p.has_images() { "Yes" } else { "No" }),
                    Cell::from("v e d").style(hint_style()),
                ])
            });

            let widths = [
                Constraint::Length(8),
                Constraint::Length(6),
                Constraint::Length(18),
                Constraint::Min(20),
                Constraint::Length(22),
                Constraint::Length(16),
                Constraint::Length(10),
                Constraint::Length(6),
                Constraint::Length(7),
            ];
            let table = Table::new(rows, widths)
                .header(header)
                .block(block)
                .row_highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("> ");
            let mut state = TableState::default().with_selected(Some(page.selected));
            f.render_stateful_widget(table, chunks[2], &mut state);

            let count = Paragraph::new(format!("Showing {} product(s)", products.len()))
                .style(hint_style());
            f.render_widget(count, chunks[3]);
        }
    }

    if page.searching {
        "Enter/Esc done"
    } else {
        "Up/Down select  Enter view  e edit  d delete  n new  r refresh  q quit"
    }
}
