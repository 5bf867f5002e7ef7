// src/lib.rs

use sea_orm::DatabaseConnection;
use services::awesome_api::AwesomeApiService;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub awesome_api: AwesomeApiService,
    pub config: Config,
}

pub mod entities {
    pub mod prelude;
    pub mod cotacoes;
}

pub mod services {
    pub mod awesome_api;
    pub mod quote_store;
}

pub mod handlers {
    pub mod cotacao;
}

pub mod models {
    pub mod cotacao;
}

pub mod client;
pub mod config;
