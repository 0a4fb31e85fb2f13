use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::pagination::PaginatedProductList;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetProductsParams, GetProductsUseCase};

pub struct GetProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsUseCase for GetProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsParams,
    ) -> Result<PaginatedProductList, ProductError> {
        self.logger.info(&format!(
            "Fetching products page {} (size {})",
            params.page.page(),
            params.page.size_page()
        ));

        // Count and slice come from the same snapshot.
        let snapshot = self.repository.get_products().await?;
        let page = PaginatedProductList::from_snapshot(snapshot, &params.page);

        self.logger.info(&format!(
            "Returning {} of {} products",
            page.items.len(),
            page.total_items
        ));
        Ok(page)
    }
}
