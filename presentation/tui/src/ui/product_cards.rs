use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use business::domain::catalog::inline_edit::{DraftField, EditSessions, EditState, ProductDraft};
use business::domain::product::model::Product;

use crate::ui::format::format_inr;
use crate::ui::product_table::EMPTY_MESSAGE;

const DESCRIPTION_LINES: usize = 3;

pub fn render_product_cards(
    frame: &mut Frame,
    area: Rect,
    products: &[&Product],
    edits: &EditSessions,
    selected: usize,
) {
    let block = Block::default().borders(Borders::ALL);
    if products.is_empty() {
        frame.render_widget(
            Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .centered()
                .block(block),
            area,
        );
        return;
    }

    let width = area.width.saturating_sub(6).max(10) as usize;
    let items: Vec<ListItem> = products
        .iter()
        .map(|product| match edits.state(product.id) {
            EditState::Display => ListItem::new(card_lines(product, width)),
            EditState::Editing(draft) => ListItem::new(draft_lines(draft)),
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn card_lines(product: &Product, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(product.title.clone(), Style::default().bold()),
        Line::from(vec![
            Span::styled(format_inr(product.price), Style::default().fg(Color::Green)),
            Span::raw("  "),
            Span::styled(product.category.clone(), Style::default().fg(Color::Cyan)),
        ]),
    ];
    lines.extend(
        clamp_lines(&product.description, width, DESCRIPTION_LINES)
            .into_iter()
            .map(|line| Line::styled(line, Style::default().fg(Color::DarkGray))),
    );
    lines.push(Line::from(""));
    lines
}

fn draft_lines(draft: &ProductDraft) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = DraftField::ALL
        .iter()
        .map(|field| {
            let marker = if draft.focus == *field { "> " } else { "  " };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:?}: ", field), Style::default().bold()),
                Span::styled(draft.value(*field).to_string(), Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();
    if let Some(error) = &draft.error {
        lines.push(Line::styled(error.to_string(), Style::default().fg(Color::Red)));
    }
    lines.push(Line::from(""));
    lines
}

/// Word-wraps `text` to `width` columns and keeps at most `max` lines,
/// marking a cut with an ellipsis.
fn clamp_lines(text: &str, width: usize, max: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max {
        lines.truncate(max);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}
