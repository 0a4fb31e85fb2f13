use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product, ProductChanges};
use super::value_objects::ProductId;

/// Storage port for products.
///
/// Implementations own all persisted state and must return products from
/// `get_products` in ascending identifier order. Identifiers are assigned by
/// the store on `create_product` and never reused.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_products(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_product_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn create_product(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn update_product(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError>;
    /// Fails with `NotFound` when the product does not exist, including on a second delete.
    async fn delete_product(&self, id: ProductId) -> Result<(), RepositoryError>;
}
