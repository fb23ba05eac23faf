#[path = "common/mod.rs"]
mod common;

use chrono::{Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use financeiro_backend::common::error::AppError;
use financeiro_backend::db::{CompanyRepository, FinanceRepository};
use financeiro_backend::models::finance::{
    CategoryKind, TransactionKind, TransactionPayload, TransactionStatus,
};
use financeiro_backend::services::{
    company_service::CompanyService, finance_service::FinanceService,
    pendency_service::PendencyService,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn payload(description: &str, amount: i64, entry_date: NaiveDate) -> TransactionPayload {
    TransactionPayload {
        description: description.to_string(),
        amount: Decimal::from(amount),
        date: entry_date,
        status: None,
        category_id: None,
        notes: None,
    }
}

#[tokio::test]
async fn receitas_crud_com_categoria() {
    let ctx = match common::setup().await {
        Some(c) => c,
        None => return,
    };
    let (user_id, company_id) = common::seed_user_and_company(&ctx).await;

    let service = FinanceService::new(FinanceRepository::new(ctx.pool.clone()));

    // Categorias semeadas pela migração.
    let categories = service
        .list_categories(Some(CategoryKind::Revenue))
        .await
        .unwrap();
    assert!(!categories.is_empty());
    assert!(categories.iter().all(|c| c.kind == CategoryKind::Revenue));
    let category = &categories[0];

    let mut create = payload("Serviço de velório", 1500, date(2026, 8, 3));
    create.category_id = Some(category.id);
    create.notes = Some("Plano família".to_string());

    let created = service
        .create_transaction(TransactionKind::Revenue, company_id, user_id, &create)
        .await
        .unwrap();
    assert_eq!(created.status, TransactionStatus::Pendente);
    assert_eq!(created.amount, Decimal::from(1500));

    let listed = service
        .list_transactions(TransactionKind::Revenue, company_id, None)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].category_name.as_deref(), Some(category.name.as_str()));

    // Atualização muda valor e confirma o recebimento.
    let mut update = payload("Serviço de velório", 1800, date(2026, 8, 3));
    update.status = Some(TransactionStatus::Recebido);
    let updated = service
        .update_transaction(TransactionKind::Revenue, company_id, created.id, &update)
        .await
        .unwrap();
    assert_eq!(updated.amount, Decimal::from(1800));
    assert_eq!(updated.status, TransactionStatus::Recebido);

    service
        .delete_transaction(TransactionKind::Revenue, company_id, created.id)
        .await
        .unwrap();
    let listed = service
        .list_transactions(TransactionKind::Revenue, company_id, None)
        .await
        .unwrap();
    assert!(listed.is_empty());

    common::teardown(Some(ctx)).await;
}

#[tokio::test]
async fn filtro_de_mes_na_listagem() {
    let ctx = match common::setup().await {
        Some(c) => c,
        None => return,
    };
    let (user_id, company_id) = common::seed_user_and_company(&ctx).await;

    let service = FinanceService::new(FinanceRepository::new(ctx.pool.clone()));

    service
        .create_transaction(
            TransactionKind::Expense,
            company_id,
            user_id,
            &payload("Aluguel julho", 2000, date(2026, 7, 5)),
        )
        .await
        .unwrap();
    service
        .create_transaction(
            TransactionKind::Expense,
            company_id,
            user_id,
            &payload("Aluguel agosto", 2000, date(2026, 8, 5)),
        )
        .await
        .unwrap();

    let august = service
        .list_transactions(
            TransactionKind::Expense,
            company_id,
            Some("2026-08".parse().unwrap()),
        )
        .await
        .unwrap();

    assert_eq!(august.len(), 1);
    assert_eq!(august[0].description, "Aluguel agosto");

    common::teardown(Some(ctx)).await;
}

#[tokio::test]
async fn baixa_de_pendencia_por_tipo() {
    let ctx = match common::setup().await {
        Some(c) => c,
        None => return,
    };
    let (user_id, company_id) = common::seed_user_and_company(&ctx).await;

    let service = FinanceService::new(FinanceRepository::new(ctx.pool.clone()));

    let revenue = service
        .create_transaction(
            TransactionKind::Revenue,
            company_id,
            user_id,
            &payload("Mensalidade", 400, date(2026, 8, 1)),
        )
        .await
        .unwrap();
    let expense = service
        .create_transaction(
            TransactionKind::Expense,
            company_id,
            user_id,
            &payload("Energia", 250, date(2026, 8, 1)),
        )
        .await
        .unwrap();

    let revenue_status = service
        .settle_transaction(TransactionKind::Revenue, company_id, revenue.id)
        .await
        .unwrap();
    assert_eq!(revenue_status, TransactionStatus::Recebido);

    let expense_status = service
        .settle_transaction(TransactionKind::Expense, company_id, expense.id)
        .await
        .unwrap();
    assert_eq!(expense_status, TransactionStatus::Pago);

    // Segunda baixa do mesmo lançamento: nada mais pendente.
    let second = service
        .settle_transaction(TransactionKind::Revenue, company_id, revenue.id)
        .await;
    assert!(matches!(second, Err(AppError::NotFound)));

    common::teardown(Some(ctx)).await;
}

#[tokio::test]
async fn estatisticas_de_pendencias_contam_vencidas() {
    let ctx = match common::setup().await {
        Some(c) => c,
        None => return,
    };
    let (user_id, company_id) = common::seed_user_and_company(&ctx).await;

    let finance = FinanceService::new(FinanceRepository::new(ctx.pool.clone()));
    let today = Utc::now().date_naive();
    let overdue_date = today.checked_sub_days(Days::new(5)).unwrap();
    let future_date = today.checked_add_days(Days::new(5)).unwrap();

    finance
        .create_transaction(
            TransactionKind::Revenue,
            company_id,
            user_id,
            &payload("Mensalidade atrasada", 300, overdue_date),
        )
        .await
        .unwrap();
    finance
        .create_transaction(
            TransactionKind::Expense,
            company_id,
            user_id,
            &payload("Boleto futuro", 120, future_date),
        )
        .await
        .unwrap();
    // Lançamento já recebido não é pendência.
    let mut settled = payload("Recebido ontem", 999, overdue_date);
    settled.status = Some(TransactionStatus::Recebido);
    finance
        .create_transaction(TransactionKind::Revenue, company_id, user_id, &settled)
        .await
        .unwrap();

    let pendencies = PendencyService::new(FinanceRepository::new(ctx.pool.clone()));
    let stats = pendencies.stats(company_id).await.unwrap();

    assert_eq!(stats.total, 2);
    assert_eq!(stats.overdue, 1);
    assert_eq!(stats.revenue_pending, 1);
    assert_eq!(stats.expense_pending, 1);
    assert_eq!(stats.total_revenue, Decimal::from(300));
    assert_eq!(stats.total_expense, Decimal::from(120));

    let listed = pendencies.list(company_id).await.unwrap();
    assert_eq!(listed.revenues.len(), 1);
    assert_eq!(listed.expenses.len(), 1);

    common::teardown(Some(ctx)).await;
}

#[tokio::test]
async fn exclusao_de_empresa_leva_os_lancamentos_junto() {
    let ctx = match common::setup().await {
        Some(c) => c,
        None => return,
    };
    let (user_id, company_id) = common::seed_user_and_company(&ctx).await;

    let finance_repo = FinanceRepository::new(ctx.pool.clone());
    let company_repo = CompanyRepository::new(ctx.pool.clone());
    let finance = FinanceService::new(finance_repo.clone());

    finance
        .create_transaction(
            TransactionKind::Revenue,
            company_id,
            user_id,
            &payload("Serviço", 100, date(2026, 8, 1)),
        )
        .await
        .unwrap();
    finance
        .create_transaction(
            TransactionKind::Expense,
            company_id,
            user_id,
            &payload("Material", 40, date(2026, 8, 2)),
        )
        .await
        .unwrap();

    let service = CompanyService::new(company_repo.clone(), finance_repo, ctx.pool.clone());
    service.delete_company(company_id, user_id).await.unwrap();

    assert!(company_repo.find_by_id(company_id).await.unwrap().is_none());

    let remaining: i64 = sqlx::query_scalar(
        "SELECT (SELECT COUNT(*) FROM revenues WHERE company_id = $1) + (SELECT COUNT(*) FROM expenses WHERE company_id = $1)",
    )
    .bind(company_id)
    .fetch_one(&ctx.pool)
    .await
    .unwrap();
    assert_eq!(remaining, 0);

    common::teardown(Some(ctx)).await;
}

#[tokio::test]
async fn empresa_so_pertence_ao_dono() {
    let ctx = match common::setup().await {
        Some(c) => c,
        None => return,
    };
    let (user_id, company_id) = common::seed_user_and_company(&ctx).await;

    let company_repo = CompanyRepository::new(ctx.pool.clone());
    assert!(company_repo
        .check_company_owner(user_id, company_id)
        .await
        .unwrap());

    // Outro usuário não enxerga a empresa.
    let intruder = Uuid::new_v4();
    assert!(!company_repo
        .check_company_owner(intruder, company_id)
        .await
        .unwrap());

    // E a lista de empresas do dono traz a que foi semeada.
    let companies = company_repo.list_by_user(user_id).await.unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].id, company_id);

    common::teardown(Some(ctx)).await;
}
