// src/models/finance.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "transaction_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pendente,  // Ainda não realizado
    Recebido,  // Receita realizada
    Pago,      // Despesa realizada
    Cancelado,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "category_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Revenue,
    Expense,
}

// Distingue as duas tabelas nos pontos em que elas se misturam
// (transações recentes, baixa de pendências).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Revenue,
    Expense,
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,

    #[schema(example = "Serviços")]
    pub name: String,

    pub kind: CategoryKind,
}

// Uma linha de receita ou despesa. As duas tabelas têm o mesmo formato;
// o endpoint determina de qual tabela a linha veio.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,

    #[schema(ignore)]
    pub company_id: Uuid,

    #[schema(ignore)]
    pub user_id: Option<Uuid>,

    #[schema(example = "Serviço de velório")]
    pub description: String,

    #[schema(example = "1500.00")]
    pub amount: Decimal,

    pub date: NaiveDate,
    pub status: TransactionStatus,

    pub category_id: Option<Uuid>,
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Linha de listagem com o nome da categoria já resolvido (LEFT JOIN).
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionWithCategory {
    pub id: Uuid,

    #[schema(ignore)]
    pub company_id: Uuid,

    #[schema(ignore)]
    pub user_id: Option<Uuid>,

    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub status: TransactionStatus,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- Payloads (formulários de receita/despesa) ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub description: String,

    #[schema(example = "250.00")]
    pub amount: Decimal,

    pub date: NaiveDate,

    // Ausente no formulário de criação: entra como 'pendente'.
    pub status: Option<TransactionStatus>,

    pub category_id: Option<Uuid>,
    pub notes: Option<String>,
}

// Linha enxuta consumida pelo gerador de saldos.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MonthEntry {
    pub description: String,
    pub amount: Decimal,
}

// --- Geração de "Saldo anterior" ---

// Resumo devolvido pelo gerador de saldos: quantos meses foram varridos,
// quantas linhas entraram e quantas foram puladas (linha existente, saldo
// zero ou falha de consulta).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaldoGenerationReport {
    pub months_processed: u32,
    pub inserted: u32,
    pub skipped: u32,
    pub message: String,
}
