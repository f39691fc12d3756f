use std::sync::Arc;

use weather_core::{Config, TickHandler};

/// Immutable state shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ticks: Arc<dyn TickHandler>,
}

impl AppState {
    pub fn new(config: Config, ticks: Arc<dyn TickHandler>) -> Self {
        Self { config: Arc::new(config), ticks }
    }
}
