use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Validated payload emitted by the add form.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductParams {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

/// Fabricates a new product locally. Nothing is sent to the remote catalog.
pub trait CreateProductUseCase: Send + Sync {
    fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
