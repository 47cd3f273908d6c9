use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::product::model::ProductUpdate;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    fn execute(&self, params: UpdateProductParams) -> ProductUpdate {
        self.logger
            .info(&format!("Updating local product: {}", params.id));
        if params.patch.is_empty() {
            self.logger
                .debug(&format!("Update for product {} carries no fields", params.id));
        }
        ProductUpdate {
            id: params.id,
            patch: params.patch,
        }
    }
}
