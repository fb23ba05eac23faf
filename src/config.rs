// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{CompanyRepository, DashboardRepository, FinanceRepository, UserRepository},
    services::{
        auth::AuthService, cashflow_service::CashFlowService, company_service::CompanyService,
        dashboard_service::DashboardService, finance_service::FinanceService,
        pendency_service::PendencyService, report_service::ReportService,
        saldo_service::SaldoAnteriorService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: String,

    pub company_repo: CompanyRepository,

    pub auth_service: AuthService,
    pub company_service: CompanyService,
    pub finance_service: FinanceService,
    pub saldo_service: SaldoAnteriorService,
    pub dashboard_service: DashboardService,
    pub cashflow_service: CashFlowService,
    pub pendency_service: PendencyService,
    pub report_service: ReportService,
}

impl AppState {
    // Carrega as configurações e monta o estado da aplicação
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");
        let fonts_dir = env::var("FONTS_DIR").unwrap_or_else(|_| "./fonts".to_string());

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let company_repo = CompanyRepository::new(db_pool.clone());
        let finance_repo = FinanceRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo, jwt_secret.clone());
        let company_service = CompanyService::new(
            company_repo.clone(),
            finance_repo.clone(),
            db_pool.clone(),
        );
        let finance_service = FinanceService::new(finance_repo.clone());
        let saldo_service = SaldoAnteriorService::new(finance_repo.clone());
        let dashboard_service =
            DashboardService::new(finance_repo.clone(), dashboard_repo.clone());
        let cashflow_service = CashFlowService::new(finance_repo.clone());
        let pendency_service = PendencyService::new(finance_repo);
        let report_service =
            ReportService::new(dashboard_repo, company_repo.clone(), fonts_dir);

        Ok(Self {
            db_pool,
            jwt_secret,
            company_repo,
            auth_service,
            company_service,
            finance_service,
            saldo_service,
            dashboard_service,
            cashflow_service,
            pendency_service,
            report_service,
        })
    }
}
