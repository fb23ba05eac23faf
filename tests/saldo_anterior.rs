#[path = "common/mod.rs"]
mod common;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use financeiro_backend::common::period::YearMonth;
use financeiro_backend::db::FinanceRepository;
use financeiro_backend::models::finance::{TransactionKind, TransactionPayload};
use financeiro_backend::services::saldo_service::SaldoAnteriorService;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

async fn add_entry(
    pool: &PgPool,
    kind: TransactionKind,
    company_id: Uuid,
    description: &str,
    amount: i64,
    entry_date: NaiveDate,
) {
    let repo = FinanceRepository::new(pool.clone());
    let payload = TransactionPayload {
        description: description.to_string(),
        amount: Decimal::from(amount),
        date: entry_date,
        status: None,
        category_id: None,
        notes: None,
    };
    repo.create(kind, company_id, None, &payload).await.unwrap();
}

// Todas as linhas de transporte da empresa, em ordem de data.
async fn saldo_rows(pool: &PgPool, company_id: Uuid) -> Vec<(Decimal, NaiveDate, String)> {
    sqlx::query_as::<_, (Decimal, NaiveDate, String)>(
        r#"
        SELECT amount, date, status::text
        FROM revenues
        WHERE company_id = $1 AND description ILIKE '%saldo anterior%'
        ORDER BY date ASC
        "#,
    )
    .bind(company_id)
    .fetch_all(pool)
    .await
    .unwrap()
}

#[tokio::test]
async fn saldo_do_mes_entra_no_primeiro_dia_do_mes_seguinte() {
    let ctx = match common::setup().await {
        Some(c) => c,
        None => return,
    };
    let (user_id, company_id) = common::seed_user_and_company(&ctx).await;

    add_entry(
        &ctx.pool,
        TransactionKind::Revenue,
        company_id,
        "Serviço de velório",
        1000,
        date(2025, 11, 5),
    )
    .await;
    add_entry(
        &ctx.pool,
        TransactionKind::Revenue,
        company_id,
        "Venda de urna",
        500,
        date(2025, 11, 20),
    )
    .await;
    add_entry(
        &ctx.pool,
        TransactionKind::Expense,
        company_id,
        "Fornecedor",
        300,
        date(2025, 11, 10),
    )
    .await;

    let service = SaldoAnteriorService::new(FinanceRepository::new(ctx.pool.clone()));
    let start: YearMonth = "2025-11".parse().unwrap();
    let report = service
        .generate(company_id, start, Some(user_id))
        .await
        .unwrap();

    assert_eq!(report.months_processed, 12);
    assert_eq!(report.inserted, 1);

    let rows = saldo_rows(&ctx.pool, company_id).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0, Decimal::from(1200));
    assert_eq!(rows[0].1, date(2025, 12, 1));
    assert_eq!(rows[0].2, "recebido");

    common::teardown(Some(ctx)).await;
}

#[tokio::test]
async fn duas_execucoes_seguidas_sao_idempotentes() {
    let ctx = match common::setup().await {
        Some(c) => c,
        None => return,
    };
    let (user_id, company_id) = common::seed_user_and_company(&ctx).await;

    add_entry(
        &ctx.pool,
        TransactionKind::Revenue,
        company_id,
        "Serviço",
        800,
        date(2025, 11, 3),
    )
    .await;

    let service = SaldoAnteriorService::new(FinanceRepository::new(ctx.pool.clone()));
    let start: YearMonth = "2025-11".parse().unwrap();

    let first = service
        .generate(company_id, start, Some(user_id))
        .await
        .unwrap();
    let second = service
        .generate(company_id, start, Some(user_id))
        .await
        .unwrap();

    assert_eq!(first.inserted, 1);
    assert_eq!(second.inserted, 0);

    let rows = saldo_rows(&ctx.pool, company_id).await;
    assert_eq!(rows.len(), 1);

    common::teardown(Some(ctx)).await;
}

#[tokio::test]
async fn saldo_zero_nao_gera_linha() {
    let ctx = match common::setup().await {
        Some(c) => c,
        None => return,
    };
    let (user_id, company_id) = common::seed_user_and_company(&ctx).await;

    add_entry(
        &ctx.pool,
        TransactionKind::Revenue,
        company_id,
        "Serviço",
        300,
        date(2025, 11, 3),
    )
    .await;
    add_entry(
        &ctx.pool,
        TransactionKind::Expense,
        company_id,
        "Fornecedor",
        300,
        date(2025, 11, 8),
    )
    .await;

    let service = SaldoAnteriorService::new(FinanceRepository::new(ctx.pool.clone()));
    let start: YearMonth = "2025-11".parse().unwrap();
    let report = service
        .generate(company_id, start, Some(user_id))
        .await
        .unwrap();

    assert_eq!(report.inserted, 0);
    assert!(saldo_rows(&ctx.pool, company_id).await.is_empty());

    common::teardown(Some(ctx)).await;
}

#[tokio::test]
async fn linha_existente_bloqueia_nova_insercao() {
    let ctx = match common::setup().await {
        Some(c) => c,
        None => return,
    };
    let (user_id, company_id) = common::seed_user_and_company(&ctx).await;

    // Linha de transporte pré-existente no dia 1º do mês de destino.
    add_entry(
        &ctx.pool,
        TransactionKind::Revenue,
        company_id,
        "Saldo anterior conta",
        999,
        date(2025, 12, 1),
    )
    .await;
    add_entry(
        &ctx.pool,
        TransactionKind::Revenue,
        company_id,
        "Serviço",
        1000,
        date(2025, 11, 3),
    )
    .await;

    let service = SaldoAnteriorService::new(FinanceRepository::new(ctx.pool.clone()));
    let start: YearMonth = "2025-11".parse().unwrap();
    let report = service
        .generate(company_id, start, Some(user_id))
        .await
        .unwrap();

    // Mesmo com saldo de novembro em 1000, dezembro já estava ocupado.
    assert_eq!(report.inserted, 0);

    let rows = saldo_rows(&ctx.pool, company_id).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0, Decimal::from(999));
    assert_eq!(rows[0].1, date(2025, 12, 1));

    common::teardown(Some(ctx)).await;
}

#[tokio::test]
async fn descricoes_de_saldo_anterior_ficam_fora_da_soma() {
    let ctx = match common::setup().await {
        Some(c) => c,
        None => return,
    };
    let (user_id, company_id) = common::seed_user_and_company(&ctx).await;

    // Qualquer caixa conta: a exclusão é por substring, sem diferenciar maiúsculas.
    add_entry(
        &ctx.pool,
        TransactionKind::Revenue,
        company_id,
        "SALDO ANTERIOR ajuste",
        500,
        date(2025, 11, 5),
    )
    .await;
    add_entry(
        &ctx.pool,
        TransactionKind::Revenue,
        company_id,
        "Serviço",
        100,
        date(2025, 11, 12),
    )
    .await;
    add_entry(
        &ctx.pool,
        TransactionKind::Expense,
        company_id,
        "Material",
        30,
        date(2025, 11, 15),
    )
    .await;

    let service = SaldoAnteriorService::new(FinanceRepository::new(ctx.pool.clone()));
    let start: YearMonth = "2025-11".parse().unwrap();
    service
        .generate(company_id, start, Some(user_id))
        .await
        .unwrap();

    let rows = saldo_rows(&ctx.pool, company_id).await;
    let december: Vec<_> = rows
        .iter()
        .filter(|(_, row_date, _)| *row_date == date(2025, 12, 1))
        .collect();

    assert_eq!(december.len(), 1);
    // 100 de receita comum - 30 de despesa; os 500 marcados ficam de fora.
    assert_eq!(december[0].0, Decimal::from(70));

    common::teardown(Some(ctx)).await;
}

#[tokio::test]
async fn cada_mes_tem_sua_propria_checagem_de_insercao() {
    let ctx = match common::setup().await {
        Some(c) => c,
        None => return,
    };
    let (user_id, company_id) = common::seed_user_and_company(&ctx).await;

    add_entry(
        &ctx.pool,
        TransactionKind::Revenue,
        company_id,
        "Serviço",
        1000,
        date(2025, 11, 3),
    )
    .await;
    add_entry(
        &ctx.pool,
        TransactionKind::Revenue,
        company_id,
        "Venda avulsa",
        50,
        date(2025, 12, 10),
    )
    .await;

    let service = SaldoAnteriorService::new(FinanceRepository::new(ctx.pool.clone()));
    let start: YearMonth = "2025-11".parse().unwrap();
    let report = service
        .generate(company_id, start, Some(user_id))
        .await
        .unwrap();

    // Novembro gera 1000 em 01/12; dezembro soma só a venda avulsa (o
    // transporte recém-criado fica fora) e gera 50 em 01/01; janeiro em
    // diante zera e não insere mais nada.
    assert_eq!(report.months_processed, 12);
    assert_eq!(report.inserted, 2);

    let rows = saldo_rows(&ctx.pool, company_id).await;
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].0, rows[0].1), (Decimal::from(1000), date(2025, 12, 1)));
    assert_eq!((rows[1].0, rows[1].1), (Decimal::from(50), date(2026, 1, 1)));

    common::teardown(Some(ctx)).await;
}
