// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use financeiro_backend::{
    config::AppState,
    docs::ApiDoc,
    handlers,
    middleware::{auth::auth_guard, company::company_guard},
};

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Rotas de usuário (protegidas pelo middleware de autenticação)
    let user_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Empresas: só exigem usuário autenticado (a seleção de empresa
    // acontece justamente aqui).
    let company_routes = Router::new()
        .route(
            "/",
            post(handlers::companies::create_company).get(handlers::companies::list_companies),
        )
        .route(
            "/{id}",
            put(handlers::companies::update_company)
                .delete(handlers::companies::delete_company),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Lançamentos: exigem o cabeçalho X-Company-Id validado contra o dono.
    let finance_routes = Router::new()
        .route(
            "/revenues",
            post(handlers::revenues::create_revenue).get(handlers::revenues::list_revenues),
        )
        .route(
            "/revenues/{id}",
            put(handlers::revenues::update_revenue).delete(handlers::revenues::delete_revenue),
        )
        .route(
            "/expenses",
            post(handlers::expenses::create_expense).get(handlers::expenses::list_expenses),
        )
        .route(
            "/expenses/{id}",
            put(handlers::expenses::update_expense).delete(handlers::expenses::delete_expense),
        )
        .route("/categories", get(handlers::categories::list_categories))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            company_guard,
        ));

    // Painel, fluxo de caixa, pendências e relatórios.
    let insight_routes = Router::new()
        .route("/dashboard/summary", get(handlers::dashboard::get_summary))
        .route(
            "/dashboard/monthly-chart",
            get(handlers::dashboard::get_monthly_chart),
        )
        .route(
            "/dashboard/recent",
            get(handlers::dashboard::get_recent_transactions),
        )
        .route("/cashflow", get(handlers::cashflow::get_cashflow))
        .route("/pendencies", get(handlers::pendencies::list_pendencies))
        .route(
            "/pendencies/stats",
            get(handlers::pendencies::get_pendency_stats),
        )
        .route(
            "/pendencies/{kind}/{id}/settle",
            post(handlers::pendencies::settle_pendency),
        )
        .route("/reports", get(handlers::reports::get_report))
        .route(
            "/reports/export/txt",
            get(handlers::reports::export_report_txt),
        )
        .route(
            "/reports/export/pdf",
            get(handlers::reports::export_report_pdf),
        )
        .route(
            "/saldo-anterior/generate",
            post(handlers::saldo::generate_saldo),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            company_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api/companies", company_routes)
        .nest("/api", finance_routes)
        .nest("/api", insight_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
