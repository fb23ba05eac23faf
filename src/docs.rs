// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,

        // --- Users ---
        handlers::auth::get_me,

        // --- Companies ---
        handlers::companies::create_company,
        handlers::companies::list_companies,
        handlers::companies::update_company,
        handlers::companies::delete_company,

        // --- Revenues ---
        handlers::revenues::create_revenue,
        handlers::revenues::list_revenues,
        handlers::revenues::update_revenue,
        handlers::revenues::delete_revenue,

        // --- Expenses ---
        handlers::expenses::create_expense,
        handlers::expenses::list_expenses,
        handlers::expenses::update_expense,
        handlers::expenses::delete_expense,

        // --- Categories ---
        handlers::categories::list_categories,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::get_monthly_chart,
        handlers::dashboard::get_recent_transactions,

        // --- CashFlow ---
        handlers::cashflow::get_cashflow,

        // --- Pendencies ---
        handlers::pendencies::list_pendencies,
        handlers::pendencies::get_pendency_stats,
        handlers::pendencies::settle_pendency,

        // --- Reports ---
        handlers::reports::get_report,
        handlers::reports::export_report_txt,
        handlers::reports::export_report_pdf,

        // --- Saldo anterior ---
        handlers::saldo::generate_saldo,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::UserRole,
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Companies ---
            models::company::Company,
            handlers::companies::CompanyPayload,

            // --- Finance ---
            models::finance::TransactionStatus,
            models::finance::CategoryKind,
            models::finance::TransactionKind,
            models::finance::Category,
            models::finance::Transaction,
            models::finance::TransactionWithCategory,
            models::finance::TransactionPayload,
            models::finance::SaldoGenerationReport,
            handlers::saldo::GenerateSaldoPayload,

            // --- Dashboard / CashFlow / Pendencies ---
            models::dashboard::DashboardSummary,
            models::dashboard::MonthlyChartEntry,
            models::dashboard::RecentTransaction,
            models::dashboard::DailyFlowEntry,
            models::dashboard::CashFlowResponse,
            models::dashboard::PendenciesResponse,
            models::dashboard::PendencyStats,

            // --- Reports ---
            models::reports::ReportPeriod,
            models::reports::CategoryTotal,
            models::reports::ReportSummary,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Dados do Usuário e Perfil"),
        (name = "Companies", description = "Gestão de Empresas"),
        (name = "Revenues", description = "Receitas"),
        (name = "Expenses", description = "Despesas"),
        (name = "Categories", description = "Categorias de Lançamento"),
        (name = "Dashboard", description = "Indicadores e Gráficos do Painel"),
        (name = "CashFlow", description = "Fluxo de Caixa Diário"),
        (name = "Pendencies", description = "Pendências e Baixas"),
        (name = "Reports", description = "Relatórios e Exportação"),
        (name = "SaldoAnterior", description = "Geração de Saldos Anteriores")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
