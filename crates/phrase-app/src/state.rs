use std::sync::Arc;

use phrase_config::Config;
use tokio::sync::RwLock;

use crate::session::Session;
use crate::status::AppStatus;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub session: RwLock<Session>,
    pub status: AppStatus,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let session = Session::new(&config.ui);

        Self {
            config: Arc::new(RwLock::new(config)),
            session: RwLock::new(session),
            status: AppStatus::new(),
        }
    }
}
