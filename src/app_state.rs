use crate::{
    config::Config,
    store::{SteamStore, StoreCatalog},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StoreCatalog>,
}

impl AppState {
    pub fn new(store: impl StoreCatalog + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(SteamStore::from_config(config)?))
    }
}
