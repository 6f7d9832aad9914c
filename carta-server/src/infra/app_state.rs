use std::{fmt, sync::Arc};

use carta_core::{
    AssetStore, CatalogDatabase, CatalogEngine, QueryFacade, SessionGate,
};

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: CatalogDatabase,
    pub engine: CatalogEngine,
    pub queries: QueryFacade,
    pub gate: Arc<SessionGate>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        db: CatalogDatabase,
        assets: Arc<dyn AssetStore>,
        gate: Arc<SessionGate>,
        config: Arc<Config>,
    ) -> Self {
        let engine = CatalogEngine::new(db.backend_arc(), assets);
        let queries = QueryFacade::new(db.backend_arc());
        Self {
            db,
            engine,
            queries,
            gate,
            config,
        }
    }
}
