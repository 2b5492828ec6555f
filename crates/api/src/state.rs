use std::sync::Arc;

use infra::db::Db;

use crate::config::ServiceConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(db: Db, config: ServiceConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
