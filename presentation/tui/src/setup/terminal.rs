use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::config::ui_config::UiConfig;
use crate::setup::dependency_injection::DependencyContainer;
use crate::ui::app::App;
use crate::ui::render::render;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct TerminalRunner;

impl TerminalRunner {
    /// Takes over the terminal, loads the catalog and runs the event loop
    /// until the user quits. The terminal is restored on every exit path.
    pub async fn run(config: UiConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let mut terminal = ratatui::init();
        let result = Self::run_app(&mut terminal, config, &container).await;
        ratatui::restore();
        result
    }

    async fn run_app(
        terminal: &mut DefaultTerminal,
        config: UiConfig,
        container: &DependencyContainer,
    ) -> anyhow::Result<()> {
        let mut app = App::new(container, config.view);

        terminal.draw(|frame| render(frame, &app))?;
        let loaded = container.get_all_products.execute().await;
        app.finish_loading(loaded);

        while !app.should_quit() {
            terminal.draw(|frame| render(frame, &app))?;

            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                app.handle_key(key);
            }
        }

        tracing::info!(target: logger::LOG_TARGET, "Catalog closed");
        Ok(())
    }
}
