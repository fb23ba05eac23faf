// src/middleware/company.rs

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{common::error::AppError, config::AppState, middleware::auth::authenticate};

// O cabeçalho que carrega a "empresa selecionada" pelo cliente.
const COMPANY_ID_HEADER: &str = "x-company-id";

// A empresa que o usuário quer acessar nesta requisição.
#[derive(Debug, Clone, Copy)]
pub struct CompanyContext(pub Uuid);

fn parse_company_header(headers: &HeaderMap) -> Result<Uuid, AppError> {
    let value = headers.get(COMPANY_ID_HEADER).ok_or_else(|| {
        AppError::BadRequest("O cabeçalho X-Company-Id é obrigatório.".to_string())
    })?;

    let value_str = value.to_str().map_err(|_| {
        AppError::BadRequest("Cabeçalho X-Company-Id contém caracteres inválidos.".to_string())
    })?;

    Uuid::parse_str(value_str).map_err(|_| {
        AppError::BadRequest("Cabeçalho X-Company-Id inválido (não é um UUID).".to_string())
    })
}

/// Autentica o usuário E verifica se a empresa do cabeçalho pertence a ele.
/// Esta é a verificação de autorização de todas as rotas de empresa.
pub async fn company_guard(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(&app_state, request.headers()).await?;
    let company_id = parse_company_header(request.headers())?;

    let allowed = app_state
        .company_repo
        .check_company_owner(user.id, company_id)
        .await?;

    if !allowed {
        return Err(AppError::CompanyAccessDenied);
    }

    request.extensions_mut().insert(user);
    request.extensions_mut().insert(CompanyContext(company_id));
    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for CompanyContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Dentro das rotas protegidas o guard já validou e injetou o contexto.
        if let Some(context) = parts.extensions.get::<CompanyContext>() {
            return Ok(*context);
        }

        parse_company_header(&parts.headers).map(CompanyContext)
    }
}
