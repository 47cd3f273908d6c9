use std::sync::Arc;

use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::value_objects::{ProductId, Rating};

pub struct CreateProductUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl CreateProductUseCaseImpl {
    /// Timestamp-derived id for a locally created product.
    fn generate_id() -> ProductId {
        ProductId::new(Utc::now().timestamp_millis())
    }
}

impl CreateProductUseCase for CreateProductUseCaseImpl {
    fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating local product: {}", params.title));

        let product = Product::new(NewProductProps {
            id: Self::generate_id(),
            title: params.title,
            price: params.price,
            description: params.description,
            category: params.category,
            image: params.image,
            rating: Some(Rating::unrated()),
        })?;

        self.logger
            .info(&format!("Local product created with id: {}", product.id));
        Ok(product)
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

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(title: &str) -> CreateProductParams {
        CreateProductParams {
            title: title.to_string(),
            price: 5.0,
            description: "d".to_string(),
            category: "c".to_string(),
            image: "http://i".to_string(),
        }
    }

    #[test]
    fn should_create_product_with_generated_id_and_default_rating() {
        let use_case = CreateProductUseCaseImpl {
            logger: mock_logger(),
        };
        let before = Utc::now().timestamp_millis();

        let product = use_case.execute(params("X")).unwrap();

        assert!(product.id.value() >= before);
        assert_eq!(product.title, "X");
        assert_eq!(product.price, 5.0);
        assert_eq!(product.description, "d");
        assert_eq!(product.category, "c");
        assert_eq!(product.image, "http://i");
        assert_eq!(
            product.rating,
            Some(Rating {
                rate: 0.0,
                count: 0
            })
        );
    }

    #[test]
    fn should_reject_product_when_title_is_empty() {
        let use_case = CreateProductUseCaseImpl {
            logger: mock_logger(),
        };

        let result = use_case.execute(params(""));

        assert!(matches!(result.unwrap_err(), ProductError::TitleEmpty));
    }
}
