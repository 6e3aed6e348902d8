//! 产品处理器

use axum::{
    extract::{Path, State},
    response::Json,
};

use super::{model::Product, service::ProductService};
use crate::core::response::Outcome;

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

pub async fn list_products(State(state): State<AppState>) -> Outcome<Vec<Product>> {
    state.product_service.list_products()
}

pub async fn get_product(State(state): State<AppState>, Path(id): Path<i32>) -> Outcome<Product> {
    state.product_service.get_product(id)
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<Product>,
) -> Outcome<Product> {
    state.product_service.create_product(payload)
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<Product>,
) -> Outcome<()> {
    state.product_service.update_product(id, payload)
}

pub async fn delete_product(State(state): State<AppState>, Path(id): Path<i32>) -> Outcome<()> {
    state.product_service.delete_product(id)
}
