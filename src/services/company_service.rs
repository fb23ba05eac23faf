// src/services/company_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CompanyRepository, FinanceRepository},
    db::company_repo::CompanyFields,
    models::{company::Company, finance::TransactionKind},
};

#[derive(Clone)]
pub struct CompanyService {
    company_repo: CompanyRepository,
    finance_repo: FinanceRepository,
    pool: PgPool,
}

impl CompanyService {
    pub fn new(
        company_repo: CompanyRepository,
        finance_repo: FinanceRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            company_repo,
            finance_repo,
            pool,
        }
    }

    pub async fn create_company(
        &self,
        user_id: Uuid,
        fields: CompanyFields<'_>,
    ) -> Result<Company, AppError> {
        self.company_repo.create(user_id, fields).await
    }

    pub async fn list_companies(&self, user_id: Uuid) -> Result<Vec<Company>, AppError> {
        self.company_repo.list_by_user(user_id).await
    }

    pub async fn update_company(
        &self,
        company_id: Uuid,
        user_id: Uuid,
        fields: CompanyFields<'_>,
    ) -> Result<Company, AppError> {
        self.company_repo.update(company_id, user_id, fields).await
    }

    /// Exclui a empresa e todos os seus lançamentos na mesma transação.
    pub async fn delete_company(&self, company_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        // Primeiro os lançamentos, depois a empresa (FK).
        self.finance_repo
            .delete_all_by_company(&mut *tx, TransactionKind::Revenue, company_id)
            .await?;
        self.finance_repo
            .delete_all_by_company(&mut *tx, TransactionKind::Expense, company_id)
            .await?;

        let deleted = self
            .company_repo
            .delete(&mut *tx, company_id, user_id)
            .await?;

        if deleted == 0 {
            // Rollback automático no drop da transação.
            return Err(AppError::CompanyNotFound);
        }

        tx.commit().await?;

        tracing::info!("🗑️ Empresa {} excluída com seus lançamentos.", company_id);
        Ok(())
    }
}
