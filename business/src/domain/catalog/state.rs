//! Single owner of the client-side catalog.
//!
//! Holds the full product list together with the search and paging state.
//! Views read filtered pages from here and send every mutation back through
//! it, so the page invariants are enforced in one place.

use crate::domain::product::model::{Product, ProductUpdate};
use crate::domain::product::value_objects::ProductId;

use super::pagination;
use super::search::filter_products;

/// Counts behind the "Showing X of Y products" line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub shown: usize,
    pub filtered: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

impl std::fmt::Display for PageSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing {} of {} products (Page {} of {})",
            self.shown, self.filtered, self.current_page, self.total_pages
        )
    }
}

#[derive(Debug, Clone)]
pub struct CatalogState {
    products: Vec<Product>,
    search_term: String,
    current_page: usize,
    form_open: bool,
    loading: bool,
    error: Option<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    /// Empty catalog waiting for the initial load.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            form_open: false,
            loading: true,
            error: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn finish_loading(&mut self, products: Vec<Product>) {
        self.products = products;
        self.loading = false;
        self.current_page = 1;
    }

    /// Ends loading with `message` shown and an empty list.
    pub fn fail_loading(&mut self, message: impl Into<String>) {
        self.products.clear();
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Updates the term and always returns to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    pub fn filtered(&self) -> Vec<&Product> {
        filter_products(&self.products, &self.search_term)
    }

    pub fn page_count(&self) -> usize {
        pagination::page_count(self.filtered().len())
    }

    /// Products on the current page.
    pub fn visible(&self) -> Vec<&Product> {
        let filtered = self.filtered();
        pagination::page_slice(&filtered, self.current_page).to_vec()
    }

    pub fn summary(&self) -> PageSummary {
        let filtered = self.filtered();
        PageSummary {
            shown: pagination::page_slice(&filtered, self.current_page).len(),
            filtered: filtered.len(),
            current_page: self.current_page,
            total_pages: pagination::page_count(filtered.len()),
        }
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.page_count()
    }

    /// Moves to `page` if it is within `1..=page_count`.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.page_count() {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.current_page > 1 && self.go_to_page(self.current_page - 1)
    }

    /// Opening the form dismisses any error banner.
    pub fn open_form(&mut self) {
        self.form_open = true;
        self.error = None;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    /// Prepends a locally created product, closes the form and returns to
    /// page 1 so the new entry is on screen.
    ///
    /// An id already present in the catalog is replaced by one past the
    /// current maximum, or by the lowest free id once that saturates.
    /// Returns the id the product was stored under.
    pub fn add(&mut self, mut product: Product) -> ProductId {
        if self.contains(product.id) {
            product.id = self.free_id();
        }
        let id = product.id;
        self.products.insert(0, product);
        self.form_open = false;
        self.current_page = 1;
        id
    }

    /// Merges `update` into the product with the same id.
    ///
    /// Any change to the list returns to page 1, like a new search does.
    pub fn apply_update(&mut self, update: &ProductUpdate) -> bool {
        self.current_page = 1;
        match self.products.iter_mut().find(|p| p.id == update.id) {
            Some(product) => {
                product.apply(&update.patch);
                true
            }
            None => false,
        }
    }

    /// Removes the product with `id` and returns to page 1. Unknown ids leave
    /// the list unchanged.
    pub fn remove(&mut self, id: ProductId) -> bool {
        self.current_page = 1;
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    fn free_id(&self) -> ProductId {
        let max = self.products.iter().map(|p| p.id).max();
        match max {
            Some(max) if max.next() != max => max.next(),
            _ => (1..=i64::MAX)
                .map(ProductId::new)
                .find(|id| !self.contains(*id))
                .unwrap_or(ProductId::new(0)),
        }
    }
}
