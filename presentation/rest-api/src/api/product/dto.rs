use chrono::{DateTime, Utc};
use poem_openapi::{Object, types::MaybeUndefined};

use business::domain::product::model::Product;
use business::domain::product::pagination::PaginatedProductList;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Unit price (must be zero or positive)
    pub price: f64,
    /// Free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

/// Fields left out of the body keep their stored value.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// New product name (cannot be empty)
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// New unit price (must be zero or positive)
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// New description, `null` removes it
    pub description: MaybeUndefined<String>,
}

/// Outer `None` keeps the stored description, `Some(None)` clears it.
pub fn description_change(description: MaybeUndefined<String>) -> Option<Option<String>> {
    match description {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(description) => Some(Some(description)),
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            price: product.price,
            description: product.description,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PaginatedProductListResponse {
    /// Products on the requested page
    pub items: Vec<ProductResponse>,
    /// Number of products across all pages
    pub total_items: u64,
}

impl From<PaginatedProductList> for PaginatedProductListResponse {
    fn from(page: PaginatedProductList) -> Self {
        Self {
            items: page.items.into_iter().map(|p| p.into()).collect(),
            total_items: page.total_items as u64,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}
