use crate::domain::product::value_objects::ProductId;

pub struct DeleteProductParams {
    pub id: ProductId,
}

/// Shapes a local delete. Nothing is sent to the remote catalog.
pub trait DeleteProductUseCase: Send + Sync {
    fn execute(&self, params: DeleteProductParams) -> ProductId;
}
