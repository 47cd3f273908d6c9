use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Clear, Paragraph},
};

use business::domain::catalog::form::{FormField, ProductForm};

use crate::ui::cursor::input_cursor;

/// Label, bordered input and error line for each field.
const FIELD_HEIGHT: u16 = 5;

pub fn render_product_form(frame: &mut Frame, form: &ProductForm, focused: FormField) {
    let height = FIELD_HEIGHT * FormField::ALL.len() as u16 + 3;
    let popup_area = popup_rect(60, height, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Add Product ")
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut constraints: Vec<Constraint> = FormField::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Fill(1));
    constraints.push(Constraint::Length(1));
    let areas = Layout::vertical(constraints).split(inner);

    for (index, field) in FormField::ALL.iter().enumerate() {
        render_field(frame, areas[index], form, *field, *field == focused);
    }

    frame.render_widget(
        Paragraph::new("Tab Next field | Enter Add | Esc Cancel")
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
        areas[areas.len() - 1],
    );
}

fn render_field(frame: &mut Frame, area: Rect, form: &ProductForm, field: FormField, focused: bool) {
    let [label_area, input_area, error_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(format!("{}:", field.label())).style(Style::default().bold()),
        label_area,
    );

    let error = form.error(field);
    let border_style = match (focused, error) {
        (_, Some(_)) => Style::default().fg(Color::Red),
        (true, None) => Style::default().fg(Color::Yellow),
        (false, None) => Style::default().fg(Color::DarkGray),
    };
    let value = form.value(field);
    frame.render_widget(
        Paragraph::new(value).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        ),
        input_area,
    );

    if let Some(error) = error {
        frame.render_widget(
            Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red)),
            error_area,
        );
    }

    if focused {
        frame.set_cursor_position(input_cursor(input_area, value));
    }
}

fn popup_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [v_area] = vertical.areas(area);
    let [h_area] = horizontal.areas(v_area);
    h_area
}
