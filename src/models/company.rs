// src/models/company.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// A empresa (estabelecimento) dona das receitas e despesas.
// Um usuário pode ter várias; a "selecionada" viaja no cabeçalho X-Company-Id.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Uuid,

    #[schema(ignore)]
    pub user_id: Uuid,

    #[schema(example = "Funerária Central")]
    pub name: String,

    #[schema(example = "12.345.678/0001-90")]
    pub cnpj: Option<String>,

    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,

    pub created_at: DateTime<Utc>,
}
