use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use business::domain::catalog::form::{FormField, ProductForm};
use business::domain::catalog::inline_edit::EditSessions;
use business::domain::catalog::state::CatalogState;
use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductId;

use crate::setup::dependency_injection::DependencyContainer;
use crate::ui::error_mapper::user_message;

/// How the current page of products is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Table,
    Cards,
}

impl ViewMode {
    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Cards,
            ViewMode::Cards => ViewMode::Table,
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "cards" => Ok(ViewMode::Cards),
            other => Err(format!("Invalid view mode: {}", other)),
        }
    }
}

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Search,
    Form,
}

pub struct App {
    catalog: CatalogState,
    form: ProductForm,
    form_focus: FormField,
    edits: EditSessions,
    focus: Focus,
    selected: usize,
    view: ViewMode,
    notice: Option<String>,
    should_quit: bool,
    create_product: Arc<dyn CreateProductUseCase>,
    update_product: Arc<dyn UpdateProductUseCase>,
    delete_product: Arc<dyn DeleteProductUseCase>,
}

impl App {
    pub fn new(container: &DependencyContainer, view: ViewMode) -> Self {
        Self {
            catalog: CatalogState::new(),
            form: ProductForm::new(),
            form_focus: FormField::Title,
            edits: EditSessions::new(),
            focus: Focus::List,
            selected: 0,
            view,
            notice: None,
            should_quit: false,
            create_product: container.create_product.clone(),
            update_product: container.update_product.clone(),
            delete_product: container.delete_product.clone(),
        }
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_focus(&self) -> FormField {
        self.form_focus
    }

    pub fn edits(&self) -> &EditSessions {
        &self.edits
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index of the highlighted product within the current page.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn finish_loading(&mut self, result: Result<Vec<Product>, ProductError>) {
        match result {
            Ok(products) => self.catalog.finish_loading(products),
            Err(error) => self.catalog.fail_loading(user_message(&error)),
        }
        self.selected = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.catalog.is_loading() {
            return;
        }

        match self.focus {
            Focus::List => self.handle_list_key(key.code),
            Focus::Search => self.handle_search_key(key.code),
            Focus::Form => self.handle_form_key(key.code),
        }
    }

    fn selected_id(&self) -> Option<ProductId> {
        self.catalog.visible().get(self.selected).map(|p| p.id)
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Left => self.previous_page(),
            KeyCode::Right => self.next_page(),
            _ => {
                if let Some(id) = self.selected_id()
                    && self.edits.is_editing(id)
                {
                    self.handle_draft_key(id, code);
                } else {
                    self.handle_list_command(code);
                }
            }
        }
    }

    fn handle_list_command(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('k') => self.select_previous(),
            KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('h') => self.previous_page(),
            KeyCode::Char('l') => self.next_page(),
            KeyCode::Char(c @ '1'..='9') => {
                let page = c.to_digit(10).unwrap_or(1) as usize;
                if self.catalog.go_to_page(page) {
                    self.selected = 0;
                }
            }
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('a') => self.open_form(),
            KeyCode::Char('v') => self.view = self.view.toggled(),
            KeyCode::Char('e') | KeyCode::Enter => self.begin_edit(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            _ => {}
        }
    }

    fn handle_draft_key(&mut self, id: ProductId, code: KeyCode) {
        match code {
            KeyCode::Enter => self.save_edit(id),
            KeyCode::Esc => {
                self.edits.cancel(id);
            }
            KeyCode::Tab => {
                if let Some(draft) = self.edits.draft_mut(id) {
                    draft.focus = draft.focus.next();
                }
            }
            KeyCode::BackTab => {
                if let Some(draft) = self.edits.draft_mut(id) {
                    draft.focus = draft.focus.previous();
                }
            }
            KeyCode::Char(c) => {
                if let Some(draft) = self.edits.draft_mut(id) {
                    draft.focused_value_mut().push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(draft) = self.edits.draft_mut(id) {
                    draft.focused_value_mut().pop();
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                let mut term = self.catalog.search_term().to_string();
                term.push(c);
                self.set_search_term(term);
            }
            KeyCode::Backspace => {
                let mut term = self.catalog.search_term().to_string();
                term.pop();
                self.set_search_term(term);
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Down | KeyCode::Tab => {
                self.focus = Focus::List;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.close_form(),
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::Down => self.form_focus = self.form_focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.form_focus = self.form_focus.previous(),
            KeyCode::Char(c) => {
                let mut value = self.form.value(self.form_focus).to_string();
                value.push(c);
                self.form.set_value(self.form_focus, value);
            }
            KeyCode::Backspace => {
                let mut value = self.form.value(self.form_focus).to_string();
                value.pop();
                self.form.set_value(self.form_focus, value);
            }
            _ => {}
        }
    }

    fn set_search_term(&mut self, term: String) {
        self.catalog.set_search_term(term);
        self.selected = 0;
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        let len = self.catalog.visible().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    fn previous_page(&mut self) {
        if self.catalog.previous_page() {
            self.selected = 0;
        }
    }

    fn next_page(&mut self) {
        if self.catalog.next_page() {
            self.selected = 0;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.catalog.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn open_form(&mut self) {
        self.catalog.open_form();
        self.form_focus = FormField::Title;
        self.notice = None;
        self.focus = Focus::Form;
    }

    fn close_form(&mut self) {
        self.catalog.close_form();
        self.focus = Focus::List;
    }

    fn submit_form(&mut self) {
        let Some(params) = self.form.submit() else {
            return;
        };
        match self.create_product.execute(params) {
            Ok(product) => {
                self.catalog.add(product);
                self.focus = Focus::List;
                self.selected = 0;
            }
            Err(error) => self.notice = Some(user_message(&error).to_string()),
        }
    }

    fn begin_edit(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if let Some(product) = self.catalog.products().iter().find(|p| p.id == id) {
            self.edits.begin(product);
        }
    }

    fn save_edit(&mut self, id: ProductId) {
        if let Ok(Some(update)) = self.edits.save(id) {
            let update = self.update_product.execute(UpdateProductParams {
                id: update.id,
                patch: update.patch,
            });
            self.catalog.apply_update(&update);
            self.clamp_selection();
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let id = self.delete_product.execute(DeleteProductParams { id });
        self.catalog.remove(id);
        self.edits.retain_products(self.catalog.products());
        self.clamp_selection();
    }
}
