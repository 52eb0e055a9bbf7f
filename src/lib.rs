pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod llm;
pub mod logging;
pub mod scraper;

use std::sync::Arc;
use config::Config;
use gateway::Gateway;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: Arc<Gateway>,
}

impl AppState {
    pub fn new(config: Config) -> error::Result<Self> {
        let gateway = Gateway::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            gateway: Arc::new(gateway),
        })
    }
}
