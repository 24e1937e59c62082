use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::stats_service::StatsService;

/// Assembles app-facing services over a storage backend.
#[derive(Clone)]
pub struct AppServices {
    stats: Arc<StatsService>,
}

impl AppServices {
    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock) -> Self {
        let stats = Arc::new(StatsService::new(clock, Arc::clone(&storage.sessions)));
        Self { stats }
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::from_storage(&Storage::in_memory(), clock)
    }

    #[must_use]
    pub fn stats(&self) -> Arc<StatsService> {
        Arc::clone(&self.stats)
    }
}
