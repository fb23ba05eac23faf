pub mod user_repo;
pub use user_repo::UserRepository;
pub mod company_repo;
pub use company_repo::CompanyRepository;
pub mod finance_repo;
pub use finance_repo::FinanceRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
