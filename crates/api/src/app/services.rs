use std::sync::Arc;

use hireboard_store::{ApplicationStore, CompanyStore, JobStore, MemoryStore, UserStore};

/// Store handles shared by all handlers.
///
/// One handle per entity, all backed by the same in-memory store. The trait
/// objects keep handlers decoupled from the concrete storage.
pub struct AppServices {
    pub users: Arc<dyn UserStore>,
    pub companies: Arc<dyn CompanyStore>,
    pub jobs: Arc<dyn JobStore>,
    pub applications: Arc<dyn ApplicationStore>,
}

pub fn build_services() -> AppServices {
    let store = Arc::new(MemoryStore::new());

    AppServices {
        users: store.clone(),
        companies: store.clone(),
        jobs: store.clone(),
        applications: store,
    }
}
