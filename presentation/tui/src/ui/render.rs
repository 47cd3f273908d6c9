use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::{App, Focus, ViewMode};
use crate::ui::pagination::render_pagination;
use crate::ui::product_cards::render_product_cards;
use crate::ui::product_form::render_product_form;
use crate::ui::product_table::render_product_table;
use crate::ui::search_bar::render_search_bar;

pub const TITLE: &str = "Product Management System";
pub const LOADING_MESSAGE: &str = "Loading products...";

pub fn render(frame: &mut Frame, app: &App) {
    if app.catalog().is_loading() {
        render_loading(frame);
        return;
    }

    let catalog = app.catalog();
    let summary = catalog.summary();
    let error = catalog.error().or(app.notice());

    let [header, banner, search, info, main, pager, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(if error.is_some() { 3 } else { 0 }),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(if summary.total_pages > 1 { 1 } else { 0 }),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(TITLE)
            .style(Style::default().fg(Color::Cyan).bold())
            .centered(),
        header,
    );

    if let Some(error) = error {
        frame.render_widget(
            Paragraph::new(error)
                .style(Style::default().fg(Color::Red))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red)),
                ),
            banner,
        );
    }

    render_search_bar(
        frame,
        search,
        catalog.search_term(),
        app.focus() == Focus::Search,
    );

    frame.render_widget(
        Paragraph::new(summary.to_string()).style(Style::default().fg(Color::DarkGray)),
        info,
    );

    let visible = catalog.visible();
    match app.view() {
        ViewMode::Table => {
            render_product_table(frame, main, &visible, app.edits(), app.selected())
        }
        ViewMode::Cards => {
            render_product_cards(frame, main, &visible, app.edits(), app.selected())
        }
    }

    render_pagination(frame, pager, &summary);

    frame.render_widget(
        Paragraph::new(footer_hint(app.focus()))
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
        footer,
    );

    if catalog.is_form_open() {
        render_product_form(frame, app.form(), app.form_focus());
    }
}

fn render_loading(frame: &mut Frame) {
    let [area] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(frame.area());
    frame.render_widget(
        Paragraph::new(LOADING_MESSAGE)
            .style(Style::default().fg(Color::Cyan))
            .centered(),
        area,
    );
}

fn footer_hint(focus: Focus) -> &'static str {
    match focus {
        Focus::List => {
            "/ Search | a Add | e Edit | d Delete | ←→ Page | v View | q Quit"
        }
        Focus::Search => "Type to filter | Enter Done",
        Focus::Form => "Tab Next field | Enter Add | Esc Cancel",
    }
}
