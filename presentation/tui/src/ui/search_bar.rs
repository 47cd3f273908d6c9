use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::cursor::input_cursor;

pub const PLACEHOLDER: &str = "Search products...";

pub fn render_search_bar(frame: &mut Frame, area: Rect, term: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input = if term.is_empty() {
        Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(term)
    };
    frame.render_widget(
        input.block(
            Block::default()
                .title(" Search ")
                .borders(Borders::ALL)
                .border_style(border_style),
        ),
        area,
    );

    if focused {
        frame.set_cursor_position(input_cursor(area, term));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, layout::Position};

    #[test]
    fn should_keep_cursor_in_bar_for_overlong_term() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let term = "a".repeat(70_000);

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_search_bar(frame, area, &term, true)
            })
            .unwrap();

        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(38, 1));
    }

    #[test]
    fn should_show_placeholder_for_empty_term() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_search_bar(frame, area, "", false)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..40).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(row.contains(PLACEHOLDER));
    }
}
