use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use crate::client::FakeStoreClient;
use crate::entity::ProductEntity;

pub struct ProductRepositoryFakeStore {
    client: FakeStoreClient,
}

impl ProductRepositoryFakeStore {
    pub fn new(client: FakeStoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryFakeStore {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let response = self
            .client
            .client
            .get(self.client.products_url())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|_| RepositoryError::network())?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::unexpected_status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|_| RepositoryError::network())?;

        let entities: Vec<ProductEntity> =
            serde_json::from_str(&body).map_err(|_| RepositoryError::decode())?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
