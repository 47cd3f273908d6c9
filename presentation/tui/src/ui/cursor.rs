use ratatui::layout::{Position, Rect};

/// Cursor after `text` inside a bordered single-line input.
///
/// The column is kept on the last inner cell when the text is wider than
/// the input.
pub fn input_cursor(area: Rect, text: &str) -> Position {
    let typed = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let last_inner = area.right().saturating_sub(2).max(area.x.saturating_add(1));
    Position::new(
        area.x.saturating_add(1).saturating_add(typed).min(last_inner),
        area.y.saturating_add(1),
    )
}
