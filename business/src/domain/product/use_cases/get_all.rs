use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::pagination::{PageRequest, PaginatedProductList};

pub struct GetProductsParams {
    pub page: PageRequest,
}

#[async_trait]
pub trait GetProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetProductsParams)
    -> Result<PaginatedProductList, ProductError>;
}
