use crate::config::CatApiConfig;
use crate::error::AppError;
use crate::services::CatApiService;
use cat_gallery::{PhotoEntity, UiState};
use dioxus::prelude::*;

/// Owner of the photo screen state
#[derive(Clone, Copy, PartialEq)]
pub struct CatViewModel {
    pub ui_state: Signal<UiState>,
}

impl CatViewModel {
    /// Replaces the state with Loading, then with the outcome of one fetch
    pub async fn load(mut self, service: CatApiService) {
        self.ui_state.set(UiState::Loading);
        let next = state_from(service.fetch_photos().await);
        self.ui_state.set(next);
    }
}

/// Collapses a fetch result into the screen state
pub fn state_from(result: Result<Vec<PhotoEntity>, AppError>) -> UiState {
    match result {
        Ok(photos) => UiState::Success(photos),
        Err(e) => {
            log::error!("Loading cat photos failed: {} ({})", e, e.user_message());
            UiState::Error
        }
    }
}

/// Creates the view-model and starts loading on mount.
///
/// The fetch runs on the calling component's scope and is dropped with it.
pub fn use_cat_view_model(config: CatApiConfig) -> CatViewModel {
    let ui_state = use_signal(|| UiState::Loading);
    let view_model = CatViewModel { ui_state };

    use_effect(move || {
        let service = CatApiService::new(config.clone());
        spawn(view_model.load(service));
    });

    view_model
}
