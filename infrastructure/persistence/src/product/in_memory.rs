use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, ProductChanges};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

#[derive(Default)]
struct Store {
    products: BTreeMap<ProductId, Product>,
    last_id: i64,
}

/// Process-local product store. Contents are lost on shutdown.
///
/// Ids come from a counter that only moves forward, so deleted ids are never
/// handed out again. The map is keyed by id, which keeps listing in creation order.
#[derive(Default)]
pub struct ProductRepositoryInMemory {
    store: RwLock<Store>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn get_product_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let store = self.store.read().await;
        store
            .products
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut store = self.store.write().await;
        store.last_id = store
            .last_id
            .checked_add(1)
            .ok_or(RepositoryError::DatabaseError)?;

        let now = Utc::now();
        let stored = Product::from_repository(
            ProductId::new(store.last_id),
            product.name.clone(),
            product.price,
            product.description.clone(),
            now,
            now,
        );
        store.products.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn update_product(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError> {
        let mut store = self.store.write().await;
        let existing = store
            .products
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound)?;

        *existing = existing.with_changes(changes, Utc::now());

        Ok(existing.clone())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        store
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::{NewProductProps, ProductChangesProps};

    fn new_product(name: &str) -> NewProduct {
        NewProduct::new(NewProductProps {
            name: name.to_string(),
            price: 12.5,
            description: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_assign_sequential_ids_starting_at_one() {
        let repo = ProductRepositoryInMemory::new();

        let first = repo.create_product(&new_product("First")).await.unwrap();
        let second = repo.create_product(&new_product("Second")).await.unwrap();

        assert_eq!(first.id, ProductId::new(1));
        assert_eq!(second.id, ProductId::new(2));
    }

    #[tokio::test]
    async fn should_round_trip_created_product() {
        let repo = ProductRepositoryInMemory::new();

        let created = repo.create_product(&new_product("Headset")).await.unwrap();
        let fetched = repo.get_product_by_id(created.id).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_keep_position_and_id_after_update() {
        let repo = ProductRepositoryInMemory::new();
        for name in ["A", "B", "C"] {
            repo.create_product(&new_product(name)).await.unwrap();
        }
        let changes = ProductChanges::new(ProductChangesProps {
            name: Some("B2".to_string()),
            price: None,
            description: Some(Some("renamed".to_string())),
        })
        .unwrap();

        let updated = repo
            .update_product(ProductId::new(2), &changes)
            .await
            .unwrap();
        let names: Vec<String> = repo
            .get_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(updated.id, ProductId::new(2));
        assert_eq!(updated.price, 12.5);
        assert_eq!(updated.description.as_deref(), Some("renamed"));
        assert_eq!(names, vec!["A", "B2", "C"]);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_unknown_id() {
        let repo = ProductRepositoryInMemory::new();

        let result = repo
            .update_product(ProductId::new(1), &ProductChanges::default())
            .await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn should_fail_second_delete_and_never_reuse_id() {
        let repo = ProductRepositoryInMemory::new();
        let created = repo.create_product(&new_product("Temp")).await.unwrap();

        assert!(repo.delete_product(created.id).await.is_ok());
        assert!(matches!(
            repo.delete_product(created.id).await,
            Err(RepositoryError::NotFound)
        ));

        let next = repo.create_product(&new_product("Next")).await.unwrap();
        assert_eq!(next.id, ProductId::new(2));
        assert!(repo.get_products().await.unwrap().len() == 1);
    }
}
