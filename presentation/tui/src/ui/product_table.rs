use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use url::Url;

use business::domain::catalog::inline_edit::{DraftField, EditSessions, EditState, ProductDraft};
use business::domain::product::model::Product;

use crate::ui::format::format_usd;

pub const EMPTY_MESSAGE: &str = "No products found. Try searching or add a new product.";

const HEADERS: [&str; 6] = ["Image", "Title", "Price", "Category", "Description", "Actions"];

pub fn render_product_table(
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

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
        .style(Style::default().bold())
        .bottom_margin(1);

    let rows = products.iter().map(|product| match edits.state(product.id) {
        EditState::Display => display_row(product),
        EditState::Editing(draft) => editing_row(product, draft),
    });

    let widths = [
        Constraint::Length(18),
        Constraint::Fill(3),
        Constraint::Length(10),
        Constraint::Length(16),
        Constraint::Fill(4),
        Constraint::Length(24),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}

/// Host of the image URL, the closest a terminal gets to the picture.
fn image_host(image: &str) -> String {
    Url::parse(image)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| "-".to_string())
}

fn display_row(product: &Product) -> Row<'static> {
    Row::new(vec![
        Cell::from(image_host(&product.image)).style(Style::default().fg(Color::DarkGray)),
        Cell::from(product.title.clone()),
        Cell::from(format_usd(product.price)),
        Cell::from(product.category.clone()),
        Cell::from(product.description.clone()),
        Cell::from("e Edit | d Delete").style(Style::default().fg(Color::DarkGray)),
    ])
}

fn editing_row(product: &Product, draft: &ProductDraft) -> Row<'static> {
    let actions = match &draft.error {
        Some(error) => Line::from(Span::styled(error.to_string(), Style::default().fg(Color::Red))),
        None => Line::from(Span::styled(
            "Enter Save | Esc Cancel",
            Style::default().fg(Color::Green),
        )),
    };

    Row::new(vec![
        Cell::from(image_host(&product.image)).style(Style::default().fg(Color::DarkGray)),
        draft_cell(draft, DraftField::Title),
        draft_cell(draft, DraftField::Price),
        draft_cell(draft, DraftField::Category),
        draft_cell(draft, DraftField::Description),
        Cell::from(actions),
    ])
}

fn draft_cell(draft: &ProductDraft, field: DraftField) -> Cell<'static> {
    let value = draft.value(field).to_string();
    if draft.focus == field {
        Cell::from(format!("{}_", value)).style(Style::default().fg(Color::Yellow).underlined())
    } else {
        Cell::from(value).style(Style::default().fg(Color::Yellow))
    }
}
