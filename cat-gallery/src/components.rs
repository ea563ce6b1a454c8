//! Dioxus components for the photo screen
//!
//! The components render whatever `UiState` they are handed. Strings and
//! graphics come in through props so the caller decides on localization
//! and asset bundling.

use dioxus::prelude::*;

use crate::image::{ContentScale, ImageLayers, ImageLoad, ImageRequest, ImageState};
use crate::layout::GridLayout;
use crate::models::{duplicate_ids, unique_by_id, PhotoEntity, UiState};

/// Text shown by the photo screen
#[derive(Clone, PartialEq, Debug)]
pub struct ScreenLabels {
    /// Description announced for every photo
    pub cat_image: String,
    pub loading: String,
    pub error_loading: String,
    pub problem_with_connection: String,
}

impl Default for ScreenLabels {
    fn default() -> Self {
        Self {
            cat_image: "Cat image".to_string(),
            loading: "Loading".to_string(),
            error_loading: "Error loading".to_string(),
            problem_with_connection: "Problem with connection".to_string(),
        }
    }
}

/// Image sources for the static graphics
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ScreenGraphics {
    /// Full screen loading indicator
    pub loader: String,
    /// Shown in a cell while its photo loads
    pub placeholder: String,
    /// Shown in a cell whose photo failed
    pub broken_image: String,
    /// Full screen error graphic
    pub connection_error: String,
}

/// Props for the PhotoScreen component
#[derive(Props, Clone, PartialEq)]
pub struct PhotoScreenProps {
    /// Current state, owned by the caller
    pub ui_state: UiState,
    #[props(default)]
    pub labels: ScreenLabels,
    #[props(default)]
    pub graphics: ScreenGraphics,
    #[props(default)]
    pub layout: GridLayout,
}

/// Renders the loading indicator, the photo grid or the error message
/// depending on the state variant.
///
/// # Example
/// ```rust,ignore
/// PhotoScreen {
///     ui_state: UiState::Success(vec![PhotoEntity::new("1", "https://x/cat1.jpg")]),
///     labels: ScreenLabels::default(),
///     graphics: ScreenGraphics {
///         loader: "loader.svg".to_string(),
///         placeholder: "loading_img.svg".to_string(),
///         broken_image: "ic_broken_image.svg".to_string(),
///         connection_error: "ic_connection_error.svg".to_string(),
///     },
/// }
/// ```
#[component]
pub fn PhotoScreen(props: PhotoScreenProps) -> Element {
    let PhotoScreenProps {
        ui_state,
        labels,
        graphics,
        layout,
    } = props;

    match ui_state {
        UiState::Loading => rsx! {
            LoadingScreen { loader: graphics.loader, description: labels.loading }
        },
        UiState::Success(photos) => rsx! {
            PhotosGrid {
                photos,
                layout,
                description: labels.cat_image,
                placeholder: graphics.placeholder,
                fallback: graphics.broken_image,
            }
        },
        UiState::Error => rsx! {
            ErrorScreen {
                graphic: graphics.connection_error,
                description: labels.error_loading,
                message: labels.problem_with_connection,
            }
        },
    }
}

/// Responsive grid of photo cells, one per photo id in the given order
#[component]
pub fn PhotosGrid(
    photos: Vec<PhotoEntity>,
    #[props(default)] layout: GridLayout,
    /// Description announced for every cell
    description: String,
    placeholder: String,
    fallback: String,
) -> Element {
    let mut columns = use_signal(|| None::<usize>);

    // Keys must be unique among siblings, so repeats of an id are dropped
    let duplicates = duplicate_ids(&photos);
    let photos = if duplicates.is_empty() {
        photos
    } else {
        log::warn!(
            "Photo grid received duplicate ids {:?}, showing only the first of each",
            duplicates
        );
        unique_by_id(photos)
    };

    let grid_style = layout.grid_style(columns());
    let cell_style = layout.cell_style();

    rsx! {
        div {
            class: "photos-grid",
            style: "{grid_style}",
            onresize: move |evt: Event<ResizeData>| {
                if let Ok(size) = evt.get_content_box_size() {
                    let count = layout.columns_for(size.width);
                    if columns() != Some(count) {
                        log::debug!("Photo grid is {}px wide, using {} columns", size.width, count);
                        columns.set(Some(count));
                    }
                }
            },
            for photo in photos {
                PhotoCell {
                    key: "{photo.id}",
                    photo,
                    style: cell_style.clone(),
                    description: description.clone(),
                    placeholder: placeholder.clone(),
                    fallback: fallback.clone(),
                }
            }
        }
    }
}

/// A single grid cell showing one photo
#[component]
pub fn PhotoCell(
    photo: PhotoEntity,
    /// Box style supplied by the grid
    style: String,
    description: String,
    placeholder: String,
    fallback: String,
) -> Element {
    let request = ImageRequest::new(photo.url.clone())
        .crossfade(true)
        .placeholder(placeholder)
        .error(fallback)
        .content_scale(ContentScale::Crop);

    rsx! {
        div {
            class: "photo-cell",
            "data-photo-id": "{photo.id}",
            style: "{style}",
            AsyncImage { request, description }
        }
    }
}

/// Image that shows a placeholder while loading and a fallback on failure.
///
/// The load state lives in this component only; a failure never reaches
/// the parent.
#[component]
pub fn AsyncImage(request: ImageRequest, description: String) -> Element {
    let mut load = use_signal(|| ImageLoad::new(request.url.clone()));
    let state = load.read().state_for(&request.url);
    let ImageLayers {
        placeholder,
        placeholder_style,
        error_image,
        image_mounted,
        image_style,
        overlay_style,
    } = request.layers(state);

    let loaded_url = request.url.clone();
    let failed_url = request.url.clone();

    rsx! {
        div {
            class: "async-image",
            style: "position: relative; width: 100%; height: 100%;",
            if let Some(src) = placeholder {
                img {
                    class: "async-image__placeholder",
                    src: "{src}",
                    alt: "",
                    style: "{placeholder_style}",
                }
            }
            if image_mounted {
                img {
                    class: "async-image__image",
                    src: "{request.url}",
                    alt: "{description}",
                    style: "{image_style}",
                    onload: move |_| {
                        load.write().record(&loaded_url, ImageState::Success);
                    },
                    onerror: move |_| {
                        log::debug!("Image failed to load: {}", failed_url);
                        load.write().record(&failed_url, ImageState::Error);
                    },
                }
            }
            if let Some(src) = error_image {
                img {
                    class: "async-image__error",
                    src: "{src}",
                    alt: "{description}",
                    style: "{overlay_style}",
                }
            }
        }
    }
}

/// Centered loading indicator filling the available space
#[component]
pub fn LoadingScreen(loader: String, description: String) -> Element {
    rsx! {
        div {
            class: "loading-screen",
            style: "display: flex; align-items: center; justify-content: center; width: 100%; height: 100%;",
            img { src: "{loader}", alt: "{description}" }
        }
    }
}

/// Centered error graphic with a fixed message
#[component]
pub fn ErrorScreen(graphic: String, description: String, message: String) -> Element {
    rsx! {
        div {
            class: "error-screen",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; width: 100%; height: 100%;",
            img { src: "{graphic}", alt: "{description}" }
            p { class: "error-screen__message", "{message}" }
        }
    }
}
