use crate::domain::product::model::{ProductPatch, ProductUpdate};
use crate::domain::product::value_objects::ProductId;

pub struct UpdateProductParams {
    pub id: ProductId,
    pub patch: ProductPatch,
}

/// Shapes a local update. Nothing is sent to the remote catalog.
pub trait UpdateProductUseCase: Send + Sync {
    fn execute(&self, params: UpdateProductParams) -> ProductUpdate;
}
