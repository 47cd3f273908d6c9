use std::sync::Arc;

use fakestore::{FakeStoreClient, ProductRepositoryFakeStore};
use logger::TracingLogger;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::DeleteProductUseCase;
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::update::UpdateProductUseCase;

use crate::config::api_config::ApiConfig;

pub struct DependencyContainer {
    pub get_all_products: Arc<dyn GetAllProductsUseCase>,
    pub create_product: Arc<dyn CreateProductUseCase>,
    pub update_product: Arc<dyn UpdateProductUseCase>,
    pub delete_product: Arc<dyn DeleteProductUseCase>,
}

impl DependencyContainer {
    pub fn new(api: &ApiConfig) -> Self {
        let client = FakeStoreClient::new(api.base_url.clone(), api.timeout);
        let repository = Arc::new(ProductRepositoryFakeStore::new(client));
        Self::with_repository(repository, Arc::new(TracingLogger))
    }

    pub fn with_repository(
        repository: Arc<dyn ProductRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let get_all_products = Arc::new(GetAllProductsUseCaseImpl {
            repository,
            logger: logger.clone(),
        });
        let create_product = Arc::new(CreateProductUseCaseImpl {
            logger: logger.clone(),
        });
        let update_product = Arc::new(UpdateProductUseCaseImpl {
            logger: logger.clone(),
        });
        let delete_product = Arc::new(DeleteProductUseCaseImpl { logger });

        Self {
            get_all_products,
            create_product,
            update_product,
            delete_product,
        }
    }
}
