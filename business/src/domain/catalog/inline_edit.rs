//! Per-row inline editing.
//!
//! A row is in display mode unless [`EditSessions`] holds a draft for its id.
//! Any number of rows can be edited at the same time; each draft is
//! independent and only reaches the catalog through [`EditSessions::save`].

use std::collections::HashMap;

use crate::domain::product::model::{Product, ProductPatch, ProductUpdate};
use crate::domain::product::value_objects::ProductId;

/// Editable fields of a row, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Price,
    Category,
    Description,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Title,
        DraftField::Price,
        DraftField::Category,
        DraftField::Description,
    ];

    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Price must be a number")]
    PriceNotNumber,
}

/// Local copy of a product's editable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub focus: DraftField,
    pub error: Option<DraftError>,
}

impl ProductDraft {
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            category: product.category.clone(),
            focus: DraftField::Title,
            error: None,
        }
    }

    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Price => &self.price,
            DraftField::Category => &self.category,
            DraftField::Description => &self.description,
        }
    }

    pub fn set_value(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::Price => &mut self.price,
            DraftField::Category => &mut self.category,
            DraftField::Description => &mut self.description,
        };
        *slot = value.into();
        if field == DraftField::Price {
            self.error = None;
        }
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        if self.focus == DraftField::Price {
            self.error = None;
        }
        match self.focus {
            DraftField::Title => &mut self.title,
            DraftField::Price => &mut self.price,
            DraftField::Category => &mut self.category,
            DraftField::Description => &mut self.description,
        }
    }

    /// Turns the draft into a patch of all four editable fields.
    ///
    /// Empty price text commits `0`.
    pub fn to_patch(&self) -> Result<ProductPatch, DraftError> {
        let raw = self.price.trim();
        let price = if raw.is_empty() {
            0.0
        } else {
            raw.parse::<f64>()
                .ok()
                .filter(|p| p.is_finite())
                .ok_or(DraftError::PriceNotNumber)?
        };

        Ok(ProductPatch {
            title: Some(self.title.clone()),
            price: Some(price),
            description: Some(self.description.clone()),
            category: Some(self.category.clone()),
            image: None,
        })
    }
}

/// Edit state of a single row.
#[derive(Debug, PartialEq)]
pub enum EditState<'a> {
    Display,
    Editing(&'a ProductDraft),
}

#[derive(Debug, Default)]
pub struct EditSessions {
    drafts: HashMap<ProductId, ProductDraft>,
}

impl EditSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: ProductId) -> EditState<'_> {
        match self.drafts.get(&id) {
            Some(draft) => EditState::Editing(draft),
            None => EditState::Display,
        }
    }

    pub fn is_editing(&self, id: ProductId) -> bool {
        self.drafts.contains_key(&id)
    }

    /// Seeds a draft from `product`. A row already in edit keeps its draft.
    pub fn begin(&mut self, product: &Product) {
        self.drafts
            .entry(product.id)
            .or_insert_with(|| ProductDraft::from_product(product));
    }

    pub fn draft_mut(&mut self, id: ProductId) -> Option<&mut ProductDraft> {
        self.drafts.get_mut(&id)
    }

    /// Discards the draft of `id`, returning the row to display mode.
    pub fn cancel(&mut self, id: ProductId) -> bool {
        self.drafts.remove(&id).is_some()
    }

    /// Commits the draft of `id`.
    ///
    /// Returns `Ok(None)` when the row is not being edited. On a draft error
    /// the row stays in edit with the error recorded on the draft.
    pub fn save(&mut self, id: ProductId) -> Result<Option<ProductUpdate>, DraftError> {
        let Some(draft) = self.drafts.get_mut(&id) else {
            return Ok(None);
        };

        match draft.to_patch() {
            Ok(patch) => {
                self.drafts.remove(&id);
                Ok(Some(ProductUpdate { id, patch }))
            }
            Err(error) => {
                draft.error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Drops drafts whose product no longer exists.
    pub fn retain_products(&mut self, products: &[Product]) {
        self.drafts
            .retain(|id, _| products.iter().any(|product| product.id == *id));
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}
