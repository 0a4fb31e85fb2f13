use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductChanges, ProductChangesProps};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let changes = ProductChanges::new(ProductChangesProps {
            name: params.name,
            price: params.price,
            description: params.description,
        })
        .inspect_err(|e| self.logger.warn(&format!("Rejected product changes: {}", e)))?;

        if changes.is_empty() {
            self.logger
                .debug(&format!("No fields supplied for product {}", params.id));
        }

        let updated_product = self.repository.update_product(params.id, &changes).await?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::NewProduct;
    use crate::domain::product::value_objects::ProductId;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_products(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_product_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
            async fn create_product(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
            async fn update_product(&self, id: ProductId, changes: &ProductChanges) -> Result<Product, RepositoryError>;
            async fn delete_product(&self, id: ProductId) -> Result<(), RepositoryError>;
        }
    }

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

    fn existing(id: ProductId) -> Product {
        let now = Utc::now();
        Product::from_repository(
            id,
            "Old Name".to_string(),
            15.0,
            Some("Original description".to_string()),
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_update_only_supplied_fields() {
        let product_id = ProductId::new(8);
        let mut mock_repo = MockProductRepo::new();

        mock_repo
            .expect_update_product()
            .withf(move |id, changes| {
                *id == product_id
                    && changes.name.as_deref() == Some("New Name")
                    && changes.price.is_none()
                    && changes.description.is_none()
            })
            .times(1)
            .returning(|id, changes| Ok(existing(id).with_changes(changes, Utc::now())));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: product_id,
                name: Some("New Name".to_string()),
                price: None,
                description: None,
            })
            .await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.name, "New Name");
        assert_eq!(product.price, 15.0);
        assert_eq!(
            product.description.as_deref(),
            Some("Original description")
        );
    }

    #[tokio::test]
    async fn should_reject_update_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_update_product().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(1),
                name: Some("  ".to_string()),
                price: None,
                description: None,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_reject_update_when_price_is_invalid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_update_product().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(1),
                name: None,
                price: Some(-5.0),
                description: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::PriceInvalid));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update_product()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(77),
                name: Some("Something".to_string()),
                price: None,
                description: None,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
