use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Instant;

use axum::extract::FromRef;

use crate::config::Config;
use crate::models::site::SiteLocation;
use crate::models::sizing::SizingResponse;
use crate::services::location_service::HttpLocationService;

/// Presentation-layer state. Core functions never see it; controllers read
/// values out of it and pass them in as plain arguments.
#[derive(Clone)]
pub struct AppState {
    /// Last site opened from the catalog or resolved by a lookup
    pub selected: Arc<RwLock<Option<SiteLocation>>>,
    /// Last successful sizing; cleared when a sizing request fails
    pub last_sizing: Arc<RwLock<Option<SizingResponse>>>,
    /// Offline mode flag, toggled at runtime via API
    pub offline_mode: Arc<AtomicBool>,
    pub locator: Arc<HttpLocationService>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(offline_mode_default: bool, locator: HttpLocationService) -> Self {
        Self {
            selected: Arc::new(RwLock::new(None)),
            last_sizing: Arc::new(RwLock::new(None)),
            offline_mode: Arc::new(AtomicBool::new(offline_mode_default)),
            locator: Arc::new(locator),
            started_at: Instant::now(),
        }
    }

    pub fn is_offline(&self) -> bool {
        self.offline_mode.load(Ordering::Relaxed)
    }

    pub fn set_offline(&self, value: bool) {
        self.offline_mode.store(value, Ordering::Relaxed);
    }

    /// Last completed selection wins.
    pub fn select(&self, site: SiteLocation) {
        if let Ok(mut selected) = self.selected.write() {
            tracing::info!(site = %site.name, source = ?site.source, "site selected");
            *selected = Some(site);
        }
    }

    pub fn selected(&self) -> Option<SiteLocation> {
        self.selected.read().ok().and_then(|s| s.clone())
    }

    pub fn set_last_sizing(&self, response: SizingResponse) {
        if let Ok(mut last) = self.last_sizing.write() {
            *last = Some(response);
        }
    }

    pub fn clear_last_sizing(&self) {
        if let Ok(mut last) = self.last_sizing.write() {
            *last = None;
        }
    }

    pub fn last_sizing(&self) -> Option<SizingResponse> {
        self.last_sizing.read().ok().and_then(|s| s.clone())
    }
}

/// Router state. Handlers extract `State<AppState>` and/or `State<Config>`
/// via `FromRef`.
#[derive(Clone)]
pub struct SharedState {
    pub app: AppState,
    pub config: Config,
}

impl FromRef<SharedState> for AppState {
    fn from_ref(shared: &SharedState) -> Self {
        shared.app.clone()
    }
}

impl FromRef<SharedState> for Config {
    fn from_ref(shared: &SharedState) -> Self {
        shared.config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;
    use crate::services::catalog;

    fn state() -> AppState {
        AppState::new(false, HttpLocationService::from_config(&ProviderConfig::default()))
    }

    #[test]
    fn test_selection_replaced_by_latest() {
        let s = state();
        assert!(s.selected().is_none());
        s.select(catalog::find("yuma").unwrap().unwrap());
        s.select(catalog::find("luxor").unwrap().unwrap());
        assert_eq!(s.selected().unwrap().id, "luxor");
    }

    #[test]
    fn test_offline_toggle() {
        let s = state();
        assert!(!s.is_offline());
        s.set_offline(true);
        assert!(s.clone().is_offline());
    }
}
