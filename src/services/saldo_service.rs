// src/services/saldo_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{error::AppError, period::YearMonth},
    db::FinanceRepository,
    models::finance::{MonthEntry, SaldoGenerationReport, TransactionKind},
};

// Descrição gravada na linha de transporte. A checagem de duplicidade e a
// exclusão da soma casam por substring, sem diferenciar maiúsculas.
pub const SALDO_DESCRIPTION: &str = "Saldo anterior conta";
const SALDO_MARKER: &str = "saldo anterior";

// Quantos meses cada chamada varre.
const MONTHS_TO_GENERATE: u32 = 12;

/// Gera as linhas de "Saldo anterior": o saldo apurado no mês M entra como
/// receita 'recebido' datada do dia 1º do mês M+1.
///
/// A checagem "já existe linha no mês de destino?" e a inserção não são
/// transacionais; duas chamadas simultâneas podem duplicar a linha.
#[derive(Clone)]
pub struct SaldoAnteriorService {
    repo: FinanceRepository,
}

impl SaldoAnteriorService {
    pub fn new(repo: FinanceRepository) -> Self {
        Self { repo }
    }

    pub async fn generate(
        &self,
        company_id: Uuid,
        start_month: YearMonth,
        acting_user: Option<Uuid>,
    ) -> Result<SaldoGenerationReport, AppError> {
        let mut month = start_month;
        let mut inserted = 0u32;
        let mut skipped = 0u32;

        for _ in 0..MONTHS_TO_GENERATE {
            let target = month.next();

            match self
                .process_month(company_id, acting_user, month, target)
                .await
            {
                Ok(true) => inserted += 1,
                Ok(false) => skipped += 1,
                // Falha em um mês não interrompe os demais.
                Err(e) => {
                    tracing::error!("Erro ao gerar saldo anterior de {}: {}", month, e);
                    skipped += 1;
                }
            }

            month = target;
        }

        tracing::info!(
            "✓ Geração de saldos concluída para a empresa {}: {} inseridos, {} pulados.",
            company_id,
            inserted,
            skipped
        );

        Ok(SaldoGenerationReport {
            months_processed: MONTHS_TO_GENERATE,
            inserted,
            skipped,
            message: "Saldos anteriores gerados com sucesso!".to_string(),
        })
    }

    // Um passo do gerador: apura o mês `month` e decide a inserção em `target`.
    async fn process_month(
        &self,
        company_id: Uuid,
        acting_user: Option<Uuid>,
        month: YearMonth,
        target: YearMonth,
    ) -> Result<bool, AppError> {
        let revenues = self
            .repo
            .month_entries(
                TransactionKind::Revenue,
                company_id,
                month.first_day(),
                month.last_day(),
            )
            .await?;

        let expenses = self
            .repo
            .month_entries(
                TransactionKind::Expense,
                company_id,
                month.first_day(),
                month.last_day(),
            )
            .await?;

        let balance = month_balance(&revenues, &expenses);

        let insertion_date = target.first_day();
        let already_exists = self.repo.saldo_exists(company_id, insertion_date).await?;

        if !should_insert(balance, already_exists) {
            if already_exists {
                tracing::debug!("Saldo anterior já existe em {}; pulando.", target);
            }
            return Ok(false);
        }

        self.repo
            .insert_saldo(
                company_id,
                acting_user,
                insertion_date,
                SALDO_DESCRIPTION,
                balance,
            )
            .await?;

        tracing::info!(
            "✓ Saldo anterior de R$ {:.2} criado para {}",
            balance,
            target.label_pt()
        );

        Ok(true)
    }
}

fn is_saldo_anterior(description: &str) -> bool {
    description.to_lowercase().contains(SALDO_MARKER)
}

/// Saldo do mês: receitas (excluindo linhas de transporte) menos despesas.
fn month_balance(revenues: &[MonthEntry], expenses: &[MonthEntry]) -> Decimal {
    let total_revenues: Decimal = revenues
        .iter()
        .filter(|entry| !is_saldo_anterior(&entry.description))
        .map(|entry| entry.amount)
        .sum();

    let total_expenses: Decimal = expenses.iter().map(|entry| entry.amount).sum();

    total_revenues - total_expenses
}

// Só insere se o mês de destino ainda não tem a linha e o saldo não é zero.
fn should_insert(balance: Decimal, already_exists: bool) -> bool {
    !already_exists && !balance.is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(description: &str, amount: i64) -> MonthEntry {
        MonthEntry {
            description: description.to_string(),
            amount: Decimal::from(amount),
        }
    }

    #[test]
    fn saldo_do_mes_soma_receitas_menos_despesas() {
        let revenues = vec![entry("Serviço de velório", 1000), entry("Venda de urna", 500)];
        let expenses = vec![entry("Fornecedor", 300)];

        assert_eq!(month_balance(&revenues, &expenses), Decimal::from(1200));
    }

    #[test]
    fn linhas_de_saldo_anterior_ficam_fora_da_soma() {
        let revenues = vec![
            entry("Saldo anterior conta", 900),
            entry("SALDO ANTERIOR conta", 800),
            entry("ajuste saldo ANTERIOR", 700),
            entry("Serviço", 100),
        ];
        let expenses = vec![entry("Despesa", 40)];

        assert_eq!(month_balance(&revenues, &expenses), Decimal::from(60));
    }

    #[test]
    fn saldo_pode_ser_negativo() {
        let revenues = vec![entry("Serviço", 100)];
        let expenses = vec![entry("Folha", 350)];

        assert_eq!(month_balance(&revenues, &expenses), Decimal::from(-250));
    }

    #[test]
    fn nao_insere_com_saldo_zero() {
        assert!(!should_insert(Decimal::ZERO, false));
    }

    #[test]
    fn nao_insere_quando_linha_ja_existe() {
        assert!(!should_insert(Decimal::from(1200), true));
        // Mesmo com saldo zero e linha existente, nada a fazer.
        assert!(!should_insert(Decimal::ZERO, true));
    }

    #[test]
    fn insere_com_saldo_nao_zero_e_mes_livre() {
        assert!(should_insert(Decimal::from(1200), false));
        assert!(should_insert(Decimal::from(-50), false));
    }
}
