use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::value_objects::ProductId;

pub struct DeleteProductUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    fn execute(&self, params: DeleteProductParams) -> ProductId {
        self.logger
            .info(&format!("Deleting local product: {}", params.id));
        params.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    #[test]
    fn should_echo_deleted_id() {
        let mut logger = MockLog::new();
        logger.expect_info().times(1).returning(|_| ());
        let use_case = DeleteProductUseCaseImpl {
            logger: Arc::new(logger),
        };

        let id = use_case.execute(DeleteProductParams {
            id: ProductId::new(11),
        });

        assert_eq!(id, ProductId::new(11));
    }
}
