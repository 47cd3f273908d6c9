//! Controlled add-product form with field-level validation.
//!
//! Every field is held as the raw text the user typed. [`ProductForm::submit`]
//! validates all fields at once, records one error per failing field and only
//! emits a [`CreateProductParams`] when nothing failed.

use std::collections::BTreeMap;

use url::Url;

use crate::domain::product::use_cases::create::CreateProductParams;

/// Fields of the add form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Price,
    Category,
    Image,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Price,
        FormField::Category,
        FormField::Image,
        FormField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Price => "Price",
            FormField::Category => "Category",
            FormField::Image => "Image URL",
            FormField::Description => "Description",
        }
    }

    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Validation failure of a single form field. Displays as the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Price must be greater than 0")]
    PriceNotPositive,
    #[error("Description is required")]
    DescriptionRequired,
    #[error("Category is required")]
    CategoryRequired,
    #[error("Image URL is required")]
    ImageRequired,
    #[error("Image URL must be a valid URL")]
    ImageInvalid,
}

/// Errors of the last submit, keyed by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(BTreeMap<FormField, FormError>);

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&FormError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: FormField, error: FormError) {
        self.0.insert(field, error);
    }

    fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    title: String,
    price: String,
    description: String,
    category: String,
    image: String,
    errors: FormErrors,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Price => &self.price,
            FormField::Description => &self.description,
            FormField::Category => &self.category,
            FormField::Image => &self.image,
        }
    }

    /// Replaces the text of `field` and clears that field's error.
    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Price => &mut self.price,
            FormField::Description => &mut self.description,
            FormField::Category => &mut self.category,
            FormField::Image => &mut self.image,
        };
        *slot = value.into();
        self.errors.clear(field);
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&FormError> {
        self.errors.get(field)
    }

    /// Checks every field without touching the form.
    pub fn validate(&self) -> Result<CreateProductParams, FormErrors> {
        let mut errors = FormErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.insert(FormField::Title, FormError::TitleRequired);
        }

        let price = parse_price(&self.price);
        if price.is_none() {
            errors.insert(FormField::Price, FormError::PriceNotPositive);
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.insert(FormField::Description, FormError::DescriptionRequired);
        }

        let category = self.category.trim();
        if category.is_empty() {
            errors.insert(FormField::Category, FormError::CategoryRequired);
        }

        let image = self.image.trim();
        if image.is_empty() {
            errors.insert(FormField::Image, FormError::ImageRequired);
        } else if Url::parse(image).is_err() {
            errors.insert(FormField::Image, FormError::ImageInvalid);
        }

        match price {
            Some(price) if errors.is_empty() => Ok(CreateProductParams {
                title: title.to_string(),
                price,
                description: description.to_string(),
                category: category.to_string(),
                image: image.to_string(),
            }),
            _ => Err(errors),
        }
    }

    /// Validates and, on success, returns the payload and resets the form.
    ///
    /// On failure the errors are kept on the form and `None` is returned.
    pub fn submit(&mut self) -> Option<CreateProductParams> {
        match self.validate() {
            Ok(params) => {
                *self = Self::default();
                Some(params)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}

/// A strictly positive, finite price.
fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProductForm {
        let mut form = ProductForm::new();
        form.set_value(FormField::Title, "X");
        form.set_value(FormField::Price, "5");
        form.set_value(FormField::Description, "d");
        form.set_value(FormField::Category, "c");
        form.set_value(FormField::Image, "http://i");
        form
    }

    #[test]
    fn should_emit_trimmed_payload_and_reset_when_valid() {
        // Arrange
        let mut form = filled_form();
        form.set_value(FormField::Title, "  Rain Jacket  ");
        form.set_value(FormField::Price, " 39.99 ");

        // Act
        let params = form.submit();

        // Assert
        assert_eq!(
            params,
            Some(CreateProductParams {
                title: "Rain Jacket".to_string(),
                price: 39.99,
                description: "d".to_string(),
                category: "c".to_string(),
                image: "http://i".to_string(),
            })
        );
        assert_eq!(form, ProductForm::new());
    }

    #[test]
    fn should_block_submit_when_title_is_empty() {
        let mut form = filled_form();
        form.set_value(FormField::Title, "");

        let params = form.submit();

        assert!(params.is_none());
        assert_eq!(form.error(FormField::Title), Some(&FormError::TitleRequired));
        assert_eq!(
            form.error(FormField::Title).map(|e| e.to_string()),
            Some("Title is required".to_string())
        );
        assert_eq!(form.errors().len(), 1);
    }

    #[test]
    fn should_collect_every_error_of_an_empty_form() {
        let mut form = ProductForm::new();

        assert!(form.submit().is_none());

        assert_eq!(form.error(FormField::Title), Some(&FormError::TitleRequired));
        assert_eq!(form.error(FormField::Price), Some(&FormError::PriceNotPositive));
        assert_eq!(
            form.error(FormField::Description),
            Some(&FormError::DescriptionRequired)
        );
        assert_eq!(
            form.error(FormField::Category),
            Some(&FormError::CategoryRequired)
        );
        assert_eq!(form.error(FormField::Image), Some(&FormError::ImageRequired));
    }

    #[test]
    fn should_reject_non_positive_or_unparseable_price() {
        for raw in ["0", "-3", "abc", "NaN", "inf", ""] {
            let mut form = filled_form();
            form.set_value(FormField::Price, raw);
            assert!(form.submit().is_none(), "price {:?} should be rejected", raw);
            assert_eq!(form.error(FormField::Price), Some(&FormError::PriceNotPositive));
        }
    }

    #[test]
    fn should_reject_relative_image_url() {
        let mut form = filled_form();
        form.set_value(FormField::Image, "img/backpack.jpg");

        assert!(form.submit().is_none());
        assert_eq!(form.error(FormField::Image), Some(&FormError::ImageInvalid));
    }

    #[test]
    fn should_clear_only_the_edited_field_error() {
        let mut form = ProductForm::new();
        form.submit();

        form.set_value(FormField::Title, "B");

        assert!(form.error(FormField::Title).is_none());
        assert!(form.error(FormField::Price).is_some());
        assert_eq!(form.errors().len(), 4);
    }

    #[test]
    fn should_accept_resubmission_after_correction() {
        let mut form = filled_form();
        form.set_value(FormField::Title, " ");
        assert!(form.submit().is_none());

        form.set_value(FormField::Title, "X");

        assert!(form.submit().is_some());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn should_keep_values_after_failed_submit() {
        let mut form = filled_form();
        form.set_value(FormField::Category, "");

        form.submit();

        assert_eq!(form.value(FormField::Title), "X");
        assert_eq!(form.value(FormField::Price), "5");
    }

    #[test]
    fn should_cycle_through_fields() {
        assert_eq!(FormField::Title.next(), FormField::Price);
        assert_eq!(FormField::Description.next(), FormField::Title);
        assert_eq!(FormField::Title.previous(), FormField::Description);
    }
}
