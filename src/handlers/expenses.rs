// src/handlers/expenses.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{error::AppError, period::YearMonth},
    config::AppState,
    middleware::{auth::AuthenticatedUser, company::CompanyContext},
    models::finance::{Transaction, TransactionKind, TransactionPayload, TransactionWithCategory},
};

const KIND: TransactionKind = TransactionKind::Expense;

#[derive(Debug, Deserialize)]
pub struct ListExpensesParams {
    // Filtro opcional 'yyyy-MM'.
    pub month: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/expenses",
    tag = "Expenses",
    request_body = TransactionPayload,
    responses(
        (status = 201, description = "Despesa criada", body = Transaction),
        (status = 401, description = "Não autorizado"),
        (status = 403, description = "Sem acesso à empresa")
    ),
    params(("x-company-id" = Uuid, Header, description = "ID da empresa")),
    security(("api_jwt" = []))
)]
pub async fn create_expense(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    company: CompanyContext,
    Json(payload): Json<TransactionPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let expense = app_state
        .finance_service
        .create_transaction(KIND, company.0, user.0.id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(expense)))
}

#[utoipa::path(
    get,
    path = "/api/expenses",
    tag = "Expenses",
    responses(
        (status = 200, description = "Despesas da empresa, mais recentes primeiro", body = Vec<TransactionWithCategory>)
    ),
    params(
        ("x-company-id" = Uuid, Header, description = "ID da empresa"),
        ("month" = Option<String>, Query, description = "Filtro de mês (yyyy-MM)")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_expenses(
    State(app_state): State<AppState>,
    company: CompanyContext,
    Query(params): Query<ListExpensesParams>,
) -> Result<Json<Vec<TransactionWithCategory>>, AppError> {
    let month = params
        .month
        .as_deref()
        .map(str::parse::<YearMonth>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let expenses = app_state
        .finance_service
        .list_transactions(KIND, company.0, month)
        .await?;

    Ok(Json(expenses))
}

#[utoipa::path(
    put,
    path = "/api/expenses/{id}",
    tag = "Expenses",
    request_body = TransactionPayload,
    params(
        ("id" = Uuid, Path, description = "ID da despesa"),
        ("x-company-id" = Uuid, Header, description = "ID da empresa")
    ),
    responses(
        (status = 200, description = "Despesa atualizada", body = Transaction),
        (status = 403, description = "Apenas administradores editam"),
        (status = 404, description = "Despesa não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_expense(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    company: CompanyContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<TransactionPayload>,
) -> Result<Json<Transaction>, AppError> {
    if !user.0.can_edit() {
        return Err(AppError::Forbidden);
    }
    payload.validate().map_err(AppError::ValidationError)?;

    let expense = app_state
        .finance_service
        .update_transaction(KIND, company.0, id, &payload)
        .await?;

    Ok(Json(expense))
}

#[utoipa::path(
    delete,
    path = "/api/expenses/{id}",
    tag = "Expenses",
    params(
        ("id" = Uuid, Path, description = "ID da despesa"),
        ("x-company-id" = Uuid, Header, description = "ID da empresa")
    ),
    responses(
        (status = 204, description = "Despesa excluída"),
        (status = 403, description = "Apenas administradores excluem"),
        (status = 404, description = "Despesa não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_expense(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    company: CompanyContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !user.0.can_edit() {
        return Err(AppError::Forbidden);
    }

    app_state
        .finance_service
        .delete_transaction(KIND, company.0, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
