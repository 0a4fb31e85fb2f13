use chrono::{DateTime, Utc};

use super::errors::ProductError;
use super::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: f64,
        description: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            description,
            created_at,
            updated_at,
        }
    }

    /// Returns a copy with the supplied changes applied and `updated_at` set to `now`.
    pub fn with_changes(&self, changes: &ProductChanges, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id,
            name: changes.name.clone().unwrap_or_else(|| self.name.clone()),
            price: changes.price.unwrap_or(self.price),
            description: match &changes.description {
                Some(description) => description.clone(),
                None => self.description.clone(),
            },
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

pub struct NewProductProps {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

/// Validated input for a product that has not been stored yet.
/// Identifier and timestamps are assigned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

impl NewProduct {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        validate_name(&props.name)?;
        validate_price(props.price)?;

        Ok(Self {
            name: props.name.trim().to_string(),
            price: props.price,
            description: props.description,
        })
    }
}

pub struct ProductChangesProps {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<Option<String>>,
}

/// Validated partial update. `None` fields are left untouched.
/// `description: Some(None)` clears the stored description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<Option<String>>,
}

impl ProductChanges {
    pub fn new(props: ProductChangesProps) -> Result<Self, ProductError> {
        if let Some(name) = &props.name {
            validate_name(name)?;
        }
        if let Some(price) = props.price {
            validate_price(price)?;
        }

        Ok(Self {
            name: props.name.map(|n| n.trim().to_string()),
            price: props.price,
            description: props.description,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.description.is_none()
    }
}

fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::PriceInvalid);
    }
    Ok(())
}
