use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

/// Partial update: `None` leaves the stored value untouched,
/// `description: Some(None)` clears it.
pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<Option<String>>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
