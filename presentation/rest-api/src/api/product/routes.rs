use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::pagination::{DEFAULT_PAGE, DEFAULT_SIZE_PAGE, PageRequest};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetProductsParams, GetProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse, malformed_request};
use crate::api::product::dto::{
    CreateProductRequest, MessageResponse, PaginatedProductListResponse, ProductResponse,
    UpdateProductRequest, description_change,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_products_use_case: Arc<dyn GetProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_products_use_case: Arc<dyn GetProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_products_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product management API
///
/// Endpoints for creating, reading, updating, and deleting products.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Returns one page of products in creation order, plus the total number
    /// of products. Pages past the end are empty rather than an error.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products(
        &self,
        /// Page number, starting at 1 (default: 1)
        page: Query<Option<u32>>,
        /// Products per page, 1 to 100 (default: 10)
        size_page: Query<Option<u32>>,
    ) -> GetProductsResponse {
        let page = match PageRequest::new(
            page.0.unwrap_or(DEFAULT_PAGE),
            size_page.0.unwrap_or(DEFAULT_SIZE_PAGE),
        ) {
            Ok(page) => page,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return GetProductsResponse::BadRequest(json);
            }
        };

        match self
            .get_products_use_case
            .execute(GetProductsParams { page })
            .await
        {
            Ok(list) => GetProductsResponse::Ok(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetProductsResponse::BadRequest(json),
                    _ => GetProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns a single product by its unique identifier.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i64>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(id.0),
            })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a new product
    ///
    /// The identifier is assigned by the server and returned in the body.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            price: body.0.price,
            description: body.0.description,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                CreateProductResponse::BadRequest(json)
            }
        }
    }

    /// Update a product
    ///
    /// Changes only the fields present in the body. A `null` description
    /// removes it.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<i64>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let params = UpdateProductParams {
            id: ProductId::new(id.0),
            name: body.0.name,
            price: body.0.price,
            description: description_change(body.0.description),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Permanently removes a product. Deleting it again returns 404.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<i64>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams {
                id: ProductId::new(id.0),
            })
            .await
        {
            Ok(()) => DeleteProductResponse::Ok(Json(MessageResponse {
                message: "Product deleted successfully".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "get_products_bad_request")]
pub enum GetProductsResponse {
    #[oai(status = 200)]
    Ok(Json<PaginatedProductListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn get_products_bad_request(err: poem::Error) -> GetProductsResponse {
    GetProductsResponse::BadRequest(malformed_request(&err))
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "get_product_by_id_bad_request")]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn get_product_by_id_bad_request(err: poem::Error) -> GetProductByIdResponse {
    GetProductByIdResponse::BadRequest(malformed_request(&err))
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "create_product_bad_request")]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

fn create_product_bad_request(err: poem::Error) -> CreateProductResponse {
    CreateProductResponse::BadRequest(malformed_request(&err))
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "update_product_bad_request")]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn update_product_bad_request(err: poem::Error) -> UpdateProductResponse {
    UpdateProductResponse::BadRequest(malformed_request(&err))
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "delete_product_bad_request")]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn delete_product_bad_request(err: poem::Error) -> DeleteProductResponse {
    DeleteProductResponse::BadRequest(malformed_request(&err))
}
