// Exposto como biblioteca para que o binário e os testes de integração
// compartilhem os mesmos módulos.

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
