//! # Cat Gallery
//!
//! State-driven photo grid components for Dioxus.
//!
//! This crate provides:
//! - `UiState`, the loading / success / error value a screen renders
//! - `PhotoScreen`, which renders exactly one view per state
//! - A responsive photo grid with stable per-photo keys
//! - An image component with placeholder, crossfade and fallback graphic
//!
//! ## Separation of Concerns
//!
//! This crate does **not** fetch photo lists, translate strings or bundle
//! assets. The application produces the `UiState` and passes labels and
//! graphic sources in as props.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use cat_gallery::{PhotoEntity, PhotoScreen, UiState};
//!
//! PhotoScreen {
//!     ui_state: UiState::Success(vec![
//!         PhotoEntity::new("1", "https://x/cat1.jpg"),
//!         PhotoEntity::new("2", "https://x/cat2.jpg"),
//!     ]),
//! }
//! ```

pub mod components;
pub mod image;
pub mod layout;
pub mod models;

pub use components::{
    AsyncImage, ErrorScreen, LoadingScreen, PhotoCell, PhotoScreen, PhotoScreenProps, PhotosGrid,
    ScreenGraphics, ScreenLabels,
};
pub use image::{ContentScale, ImageLayers, ImageLoad, ImageRequest, ImageState, DEFAULT_CROSSFADE};
pub use layout::GridLayout;
pub use models::{duplicate_ids, unique_by_id, PhotoEntity, RenderPath, UiState};
