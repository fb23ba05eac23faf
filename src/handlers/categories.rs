// src/handlers/categories.rs

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::company::CompanyContext,
    models::finance::{Category, CategoryKind},
};

#[derive(Debug, Deserialize)]
pub struct ListCategoriesParams {
    pub kind: Option<CategoryKind>,
}

// As categorias são fixas (semeadas na migração); a API só lista.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "Categorias em ordem alfabética", body = Vec<Category>)
    ),
    params(
        ("x-company-id" = Uuid, Header, description = "ID da empresa"),
        ("kind" = Option<String>, Query, description = "Filtro: revenue ou expense")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_categories(
    State(app_state): State<AppState>,
    _company: CompanyContext,
    Query(params): Query<ListCategoriesParams>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = app_state
        .finance_service
        .list_categories(params.kind)
        .await?;

    Ok(Json(categories))
}
