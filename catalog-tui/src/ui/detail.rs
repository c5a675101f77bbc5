use catalog_client::images::IMAGE_PLACEHOLDER;
use catalog_client::{ImageStatus, Product};
use ratatui::{prelude::*, widgets::*};
use shared::util::{format_date, format_metric};

use super::{error_style, hint_style, success_style, title_style};
use crate::event::Loadable;
use crate::pages::DetailPage;

fn or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "N/A".to_string(),
    }
}

/// An absent discount reads "None" rather than "N/A"
fn discount_label(discount: Option<&str>) -> String {
    match discount {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => "None".to_string(),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn field<'a>(label: &'a str, value: impl Into<String>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<16}"), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(value.into()),
    ])
}

fn product_lines(p: &Product) -> Vec<Line<'_>> {
    vec![
        field("Product ID", p.product_id.to_string()),
        field("Internal ID", or_na(p.id.as_deref())),
        field("Code", or_na(p.product_code.as_deref())),
        field("Name", or_na(Some(&p.product_name))),
        field("Category", or_na(Some(&p.category_name))),
        field("Brand", or_na(Some(&p.brand_name))),
        field("Brand Logo", or_na(p.brand_logo.as_deref())),
        field("Price", p.display_price()),
        field("Status", p.status_label()),
        field("New Product", yes_no(p.new_product)),
        field("Spare Part", yes_no(p.is_spare_part)),
        field("Discount", discount_label(p.discount.as_deref())),
        field("Main Boost", format_metric(p.main_boost)),
        field("Low Value Flag", format_metric(p.low_value_flag)),
        field("Popularity", format_metric(p.popularity)),
        field("Created", format_date(p.created_at.as_deref())),
        field("Updated", format_date(p.updated_at.as_deref())),
        Line::default(),
        Line::from(Span::styled("Description", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(or_na(p.description.as_deref())),
    ]
}

pub(super) fn render(f: &mut Frame, area: Rect, page: &DetailPage) -> &'static str {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(title_style())
        .title(" Product Details ");

    let product = match &page.product {
        Loadable::Loading => {
            f.render_widget(Paragraph::new("Loading product...").block(block), area);
            return "b back  q quit";
        }
        Loadable::Failed(msg) => {
            let text = vec![
                Line::from(Span::styled(format!("Error: {msg}"), error_style())),
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
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let details = Paragraph::new(product_lines(product))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(details, chunks[0]);

    let images_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(format!(" Images ({}) ", page.images.len()));

    if page.images.is_empty() {
        f.render_widget(Paragraph::new("No images").block(images_block), chunks[1]);
    } else {
        let items: Vec<ListItem> = page
            .images
            .iter()
            .enumerate()
            .map(|(i, (url, status))| {
                let tag = if i == 0 { "[Main] " } else { "" };
                let state = match status {
                    ImageStatus::Pending => Span::styled("checking...", hint_style()),
                    ImageStatus::Loaded => Span::styled("ok", success_style()),
                    ImageStatus::Placeholder => Span::styled(IMAGE_PLACEHOLDER, error_style()),
                };
                ListItem::new(vec![
                    Line::from(vec![Span::styled(tag, Style::default().fg(Color::Yellow)), state]),
                    Line::from(Span::raw(format!("  {url}"))),
                ])
            })
            .collect();
        f.render_widget(List::new(items).block(images_block), chunks[1]);
    }

    "e edit  b back  q quit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values() {
        assert_eq!(discount_label(None), "None");
        assert_eq!(discount_label(Some("")), "None");
        assert_eq!(discount_label(Some("-5%")), "-5%");
        assert_eq!(or_na(None), "N/A");
        assert_eq!(or_na(Some("  ")), "N/A");
    }
}
