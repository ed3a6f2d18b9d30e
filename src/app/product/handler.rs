//! 产品处理器

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use super::{
    model::{validate_request, ProductRequest, ProductResponse},
    service::ProductService,
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductService>,
}

impl AppState {
    pub fn new(product_service: impl ProductService + 'static) -> Self {
        Self {
            product_service: Arc::new(product_service),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub id: String,
}

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductResponse>), CoreError> {
    let Json(request) = payload?;
    validate_request(&request).map_err(CoreError::Validation)?;

    let product = state.product_service.create_product(request)?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn get_product(
    State(state): State<AppState>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<ProductResponse>, CoreError> {
    let Query(query) = query?;
    let product = state.product_service.get_product_by_id(&query.id)?;
    Ok(Json(product))
}

/// 诊断用端点，总是返回未归类错误
pub async fn trigger_generic_error() -> Result<Json<String>, CoreError> {
    Err(anyhow::anyhow!("This is a generic error triggered by the controller.").into())
}

pub async fn fallback() -> CoreError {
    CoreError::NotFound("Resource not found".to_string())
}
