use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use business::domain::catalog::state::PageSummary;

/// Prev, numbered pages and Next. Unavailable ends are dimmed.
pub fn pagination_line(summary: &PageSummary) -> Line<'static> {
    let dimmed = Style::default().fg(Color::DarkGray);
    let active = Style::default().fg(Color::Cyan);

    let mut spans = vec![Span::styled(
        "‹ Prev",
        if summary.current_page > 1 { active } else { dimmed },
    )];
    for page in 1..=summary.total_pages {
        spans.push(Span::raw(" "));
        let style = if page == summary.current_page {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {} ", page), style));
    }
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        "Next ›",
        if summary.current_page < summary.total_pages {
            active
        } else {
            dimmed
        },
    ));

    Line::from(spans)
}

/// Draws nothing when everything fits on a single page.
pub fn render_pagination(frame: &mut Frame, area: Rect, summary: &PageSummary) {
    if summary.total_pages <= 1 {
        return;
    }
    frame.render_widget(Paragraph::new(pagination_line(summary)).centered(), area);
}
