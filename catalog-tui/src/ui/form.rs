use ratatui::{prelude::*, widgets::*};
use shared::util::format_metric;

use super::{error_style, hint_style, render_input, success_style, title_style};
use crate::event::Loadable;
use crate::form::FieldKind;
use crate::pages::edit::NOT_FOUND_TITLE;
use crate::pages::{CreatePage, EditPage, FormEditor, SaveStatus};

const FORM_HELP: &str =
    "Up/Down move  Enter edit  Left/Right choose  Space toggle  +/- image  s save  Esc back";
const EDITING_HELP: &str = "Enter keep  Esc discard  Ctrl-S save";

fn status_line(status: &SaveStatus) -> Line<'_> {
    match status {
        SaveStatus::Idle => Line::default(),
        SaveStatus::Saving => Line::from(Span::styled("Saving...", hint_style())),
        SaveStatus::Saved(msg) => Line::from(Span::styled(msg.as_str(), success_style())),
        SaveStatus::Failed(msg) => Line::from(Span::styled(msg.as_str(), error_style())),
    }
}

fn render_editor(f: &mut Frame, area: Rect, editor: &FormEditor, title: &str, extra: Option<&str>) {
    let mut constraints = vec![Constraint::Length(1), Constraint::Min(3)];
    if editor.is_editing() {
        constraints.push(Constraint::Length(3));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut banner = status_line(&editor.status);
    if let Some(extra) = extra {
        banner.spans.push(Span::styled(format!("  {extra}"), success_style()));
    }
    f.render_widget(Paragraph::new(banner), chunks[0]);

    let focused = editor.focused();
    let items: Vec<ListItem> = editor
        .fields()
        .into_iter()
        .map(|field| {
            let value = match field.kind() {
                FieldKind::Text => editor.form.text(field).unwrap_or_default().to_string(),
                FieldKind::Choice(_) => {
                    let v = editor.form.text(field).unwrap_or_default();
                    if v.is_empty() {
                        "< select >".to_string()
                    } else {
                        format!("< {v} >")
                    }
                }
                FieldKind::Flag => {
                    if editor.form.flag(field).unwrap_or_default() {
                        "[x]".to_string()
                    } else {
                        "[ ]".to_string()
                    }
                }
            };
            let label_style = if field == focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<16}", field.label()), label_style),
                Span::raw(value),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(title_style())
                .title(title.to_string()),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(editor.focus));
    f.render_stateful_widget(list, chunks[1], &mut state);

    if let Some(input) = &editor.editing {
        let label = format!(" {} ", focused.label());
        render_input(f, chunks[2], input, &label, true);
    }
}

pub(super) fn render_create(f: &mut Frame, area: Rect, page: &CreatePage) -> &'static str {
    let link = page
        .created_id
        .map(|id| format!("Press 'v' to view product #{id}"));
    render_editor(f, area, &page.editor, " Create Product ", link.as_deref());

    if page.editor.is_editing() {
        EDITING_HELP
    } else {
        FORM_HELP
    }
}

pub(super) fn render_edit(f: &mut Frame, area: Rect, page: &EditPage) -> &'static str {
    let product = match &page.product {
        Loadable::Loading => {
            let block = Block::default().borders(Borders::ALL).title(" Edit Product ");
            f.render_widget(Paragraph::new("Loading product...").block(block), area);
            return "b back  q quit";
        }
        Loadable::Failed(msg) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(error_style())
                .title(format!(" {NOT_FOUND_TITLE} "));
            let text = vec![
                Line::from(Span::styled(NOT_FOUND_TITLE, error_style())),
                Line::from(msg.as_str()),
                Line::default(),
                Line::from(Span::styled("Press 'r' to retry or 'b' to go back", hint_style())),
            ];
            f.render_widget(Paragraph::new(text).block(block), area);
            return "r retry  b back  q quit";
        }
        Loadable::Loaded(p) => p,
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_editor(f, chunks[0], &page.editor, " Edit Product ", None);

    let read_only = vec![
        Line::from(format!("Code        {}", product.short_code())),
        Line::from(format!("Product ID  {}", product.product_id)),
        Line::from(format!("Main Boost  {}", format_metric(product.main_boost))),
        Line::from(format!("Popularity  {}", format_metric(product.popularity))),
        Line::from(format!("Price       {}", product.display_price())),
    ];
    let panel = Paragraph::new(read_only).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(hint_style())
            .title(" Read-only "),
    );
    f.render_widget(panel, chunks[1]);

    if page.editor.is_editing() {
        EDITING_HELP
    } else {
        FORM_HELP
    }
}
