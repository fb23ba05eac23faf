pub mod auth;
pub mod cashflow;
pub mod categories;
pub mod companies;
pub mod dashboard;
pub mod expenses;
pub mod pendencies;
pub mod reports;
pub mod revenues;
pub mod saldo;
