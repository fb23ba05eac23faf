pub mod auth;
pub mod cashflow_service;
pub mod company_service;
pub mod dashboard_service;
pub mod finance_service;
pub mod pendency_service;
pub mod report_service;
pub mod saldo_service;
