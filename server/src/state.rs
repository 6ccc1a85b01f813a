use std::{path::Path, sync::Arc};

use signpost::store::Store;
use tracing::{info, warn};

use super::config::Config;

pub struct State {
    pub config: Config,
    pub store: Store,
}

impl State {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        let store = match Store::load(Path::new(&config.data_path)) {
            Ok(store) => {
                info!("Loaded {} spots from {}", store.len(), config.data_path);
                store
            }
            Err(err) => {
                warn!("Could not load {}: {err}, using seed data", config.data_path);
                Store::seed()
            }
        };

        Arc::new(Self { config, store })
    }
}
