// src/handlers/companies.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    db::company_repo::CompanyFields,
    middleware::auth::AuthenticatedUser,
    models::company::Company,
};

// O "formulário" de empresa (criação e edição usam os mesmos campos).
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPayload {
    #[validate(length(min = 1, message = "O nome da empresa é obrigatório."))]
    pub name: String,
    pub cnpj: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
}

impl CompanyPayload {
    fn as_fields(&self) -> CompanyFields<'_> {
        CompanyFields {
            name: &self.name,
            cnpj: self.cnpj.as_deref(),
            phone: self.phone.as_deref(),
            email: self.email.as_deref(),
            address: self.address.as_deref(),
            city: self.city.as_deref(),
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/companies",
    tag = "Companies",
    request_body = CompanyPayload,
    responses(
        (status = 201, description = "Empresa criada", body = Company),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_company(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CompanyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let company = app_state
        .company_service
        .create_company(user.0.id, payload.as_fields())
        .await?;

    Ok((StatusCode::CREATED, Json(company)))
}

#[utoipa::path(
    get,
    path = "/api/companies",
    tag = "Companies",
    responses(
        (status = 200, description = "Empresas do usuário, mais recentes primeiro", body = Vec<Company>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_companies(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<Company>>, AppError> {
    let companies = app_state.company_service.list_companies(user.0.id).await?;
    Ok(Json(companies))
}

#[utoipa::path(
    put,
    path = "/api/companies/{id}",
    tag = "Companies",
    request_body = CompanyPayload,
    params(("id" = Uuid, Path, description = "ID da empresa")),
    responses(
        (status = 200, description = "Empresa atualizada", body = Company),
        (status = 403, description = "Apenas administradores editam"),
        (status = 404, description = "Empresa não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_company(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CompanyPayload>,
) -> Result<Json<Company>, AppError> {
    if !user.0.can_edit() {
        return Err(AppError::Forbidden);
    }
    payload.validate().map_err(AppError::ValidationError)?;

    let company = app_state
        .company_service
        .update_company(id, user.0.id, payload.as_fields())
        .await?;

    Ok(Json(company))
}

// A exclusão apaga também todas as receitas e despesas da empresa.
#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    tag = "Companies",
    params(("id" = Uuid, Path, description = "ID da empresa")),
    responses(
        (status = 204, description = "Empresa e lançamentos excluídos"),
        (status = 403, description = "Apenas administradores excluem"),
        (status = 404, description = "Empresa não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_company(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !user.0.can_edit() {
        return Err(AppError::Forbidden);
    }

    app_state
        .company_service
        .delete_company(id, user.0.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
