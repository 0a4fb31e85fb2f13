use super::errors::ProductError;
use super::model::Product;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_SIZE_PAGE: u32 = 10;
pub const MAX_SIZE_PAGE: u32 = 100;

/// A validated, 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, size_page: u32) -> Result<Self, ProductError> {
        if page == 0 {
            return Err(ProductError::InvalidPage);
        }
        if size_page == 0 || size_page > MAX_SIZE_PAGE {
            return Err(ProductError::InvalidPageSize);
        }
        Ok(Self { page, size_page })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size_page(&self) -> u32 {
        self.size_page
    }

    /// Index of the first item of this page, or `None` on overflow.
    pub fn offset(&self) -> Option<usize> {
        let previous_pages = usize::try_from(self.page - 1).ok()?;
        previous_pages.checked_mul(self.size_page as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size_page: DEFAULT_SIZE_PAGE,
        }
    }
}

/// One page of products plus the size of the unpaged collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedProductList {
    pub items: Vec<Product>,
    pub total_items: usize,
}

impl PaginatedProductList {
    /// Slices `[offset, offset + size_page)` out of a full, ordered snapshot.
    /// A window past the end yields an empty page, not an error.
    pub fn from_snapshot(products: Vec<Product>, request: &PageRequest) -> Self {
        let total_items = products.len();
        let items = match request.offset() {
            Some(start) if start < total_items => products
                .into_iter()
                .skip(start)
                .take(request.size_page() as usize)
                .collect(),
            _ => Vec::new(),
        };

        Self { items, total_items }
    }
}
