// src/services/finance_service.rs

use uuid::Uuid;

use crate::{
    common::{error::AppError, period::YearMonth},
    db::FinanceRepository,
    models::finance::{
        Category, CategoryKind, Transaction, TransactionKind, TransactionPayload,
        TransactionStatus, TransactionWithCategory,
    },
};

#[derive(Clone)]
pub struct FinanceService {
    repo: FinanceRepository,
}

impl FinanceService {
    pub fn new(repo: FinanceRepository) -> Self {
        Self { repo }
    }

    pub async fn list_categories(
        &self,
        kind: Option<CategoryKind>,
    ) -> Result<Vec<Category>, AppError> {
        self.repo.list_categories(kind).await
    }

    pub async fn create_transaction(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
        user_id: Uuid,
        payload: &TransactionPayload,
    ) -> Result<Transaction, AppError> {
        self.repo
            .create(kind, company_id, Some(user_id), payload)
            .await
    }

    pub async fn list_transactions(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
        month: Option<YearMonth>,
    ) -> Result<Vec<TransactionWithCategory>, AppError> {
        let range = month.map(|m| (m.first_day(), m.last_day()));
        self.repo.list(kind, company_id, range).await
    }

    pub async fn update_transaction(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
        id: Uuid,
        payload: &TransactionPayload,
    ) -> Result<Transaction, AppError> {
        self.repo.update(kind, company_id, id, payload).await
    }

    pub async fn delete_transaction(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
        id: Uuid,
    ) -> Result<(), AppError> {
        let deleted = self.repo.delete(kind, company_id, id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// Baixa de pendência: receita vira 'recebido', despesa vira 'pago'.
    pub async fn settle_transaction(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
        id: Uuid,
    ) -> Result<TransactionStatus, AppError> {
        let new_status = settled_status(kind);

        let updated = self
            .repo
            .settle_pending(kind, company_id, id, new_status)
            .await?;

        if updated == 0 {
            // Não existe ou já não está mais pendente.
            return Err(AppError::NotFound);
        }

        Ok(new_status)
    }
}

fn settled_status(kind: TransactionKind) -> TransactionStatus {
    match kind {
        TransactionKind::Revenue => TransactionStatus::Recebido,
        TransactionKind::Expense => TransactionStatus::Pago,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baixa_usa_o_status_da_tabela_certa() {
        assert_eq!(
            settled_status(TransactionKind::Revenue),
            TransactionStatus::Recebido
        );
        assert_eq!(
            settled_status(TransactionKind::Expense),
            TransactionStatus::Pago
        );
    }
}
