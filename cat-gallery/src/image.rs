//! Image requests and per-image load state
//!
//! Fetching, decoding and caching are done by the platform image element.
//! This module only decides what is visible for a request in a given state.

use std::time::Duration;

/// Crossfade duration used when crossfade is switched on without a duration
pub const DEFAULT_CROSSFADE: Duration = Duration::from_millis(100);

/// How an image is scaled into its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentScale {
    /// Fill the box, cropping the overflow
    #[default]
    Crop,
}

impl ContentScale {
    pub fn object_fit(self) -> &'static str {
        match self {
            ContentScale::Crop => "cover",
        }
    }
}

/// Load state of one image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageState {
    Loading,
    Success,
    Error,
}

/// A request for a remote image with its placeholder and fallback graphics
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest {
    pub url: String,
    /// `None` disables the crossfade
    pub crossfade: Option<Duration>,
    pub placeholder: Option<String>,
    pub error_image: Option<String>,
    pub content_scale: ContentScale,
}

/// What to draw for a request in a given state
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLayers {
    /// Graphic shown until the image arrives
    pub placeholder: Option<String>,
    pub placeholder_style: String,
    /// Graphic replacing the image after a failure
    pub error_image: Option<String>,
    /// Whether the image element is mounted at all
    pub image_mounted: bool,
    pub image_style: String,
    pub overlay_style: String,
}

impl ImageRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            crossfade: None,
            placeholder: None,
            error_image: None,
            content_scale: ContentScale::default(),
        }
    }

    pub fn crossfade(mut self, enabled: bool) -> Self {
        self.crossfade = enabled.then_some(DEFAULT_CROSSFADE);
        self
    }

    pub fn placeholder(mut self, src: impl Into<String>) -> Self {
        self.placeholder = Some(src.into());
        self
    }

    pub fn error(mut self, src: impl Into<String>) -> Self {
        self.error_image = Some(src.into());
        self
    }

    pub fn content_scale(mut self, scale: ContentScale) -> Self {
        self.content_scale = scale;
        self
    }

    pub fn layers(&self, state: ImageState) -> ImageLayers {
        let fit = self.content_scale.object_fit();
        let overlay_style = format!(
            "position: absolute; inset: 0; width: 100%; height: 100%; object-fit: {};",
            fit
        );

        let loaded = state == ImageState::Success;
        let transition = match self.crossfade {
            Some(duration) => format!(" transition: opacity {}ms ease-in-out;", duration.as_millis()),
            None => String::new(),
        };
        let image_style = format!("{} opacity: {};{}", overlay_style, u8::from(loaded), transition);
        let placeholder_style =
            format!("{} opacity: {};{}", overlay_style, u8::from(!loaded), transition);

        // With a crossfade the placeholder fades out while the image fades in
        let placeholder = match state {
            ImageState::Loading => self.placeholder.clone(),
            ImageState::Success if self.crossfade.is_some() => self.placeholder.clone(),
            _ => None,
        };

        ImageLayers {
            placeholder,
            placeholder_style,
            error_image: match state {
                ImageState::Error => self.error_image.clone(),
                _ => None,
            },
            image_mounted: state != ImageState::Error,
            image_style,
            overlay_style,
        }
    }
}

/// Outcome of the most recent load, remembered together with its URL.
///
/// A cell whose URL changes reads as loading again until the new image
/// reports back.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLoad {
    url: String,
    state: ImageState,
}

impl ImageLoad {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            state: ImageState::Loading,
        }
    }

    pub fn state_for(&self, url: &str) -> ImageState {
        if self.url == url {
            self.state
        } else {
            ImageState::Loading
        }
    }

    pub fn record(&mut self, url: &str, state: ImageState) {
        if self.url != url {
            self.url = url.to_string();
        }
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_request() -> ImageRequest {
        ImageRequest::new("https://x/cat1.jpg")
            .crossfade(true)
            .placeholder("loading_img.svg")
            .error("ic_broken_image.svg")
            .content_scale(ContentScale::Crop)
    }

    #[test]
    fn test_request_builder() {
        let request = cat_request();
        assert_eq!(request.url, "https://x/cat1.jpg");
        assert_eq!(request.crossfade, Some(DEFAULT_CROSSFADE));
        assert_eq!(request.placeholder.as_deref(), Some("loading_img.svg"));
        assert_eq!(request.error_image.as_deref(), Some("ic_broken_image.svg"));
        assert_eq!(request.content_scale, ContentScale::Crop);

        let plain = ImageRequest::new("u").crossfade(false);
        assert_eq!(plain.crossfade, None);
    }

    #[test]
    fn test_loading_layers() {
        let layers = cat_request().layers(ImageState::Loading);
        assert_eq!(layers.placeholder.as_deref(), Some("loading_img.svg"));
        assert_eq!(layers.error_image, None);
        assert!(layers.image_mounted);
        assert!(layers.image_style.contains("opacity: 0;"));
        assert!(layers.image_style.contains("object-fit: cover;"));
        assert!(layers.placeholder_style.contains("opacity: 1;"));
    }

    #[test]
    fn test_success_layers_fade_in() {
        let layers = cat_request().layers(ImageState::Success);
        assert!(layers.image_mounted);
        assert!(layers.image_style.contains("opacity: 1;"));
        assert!(layers.image_style.contains("transition: opacity 100ms"));
        assert_eq!(layers.error_image, None);

        // The placeholder fades out over the same duration instead of
        // staying visible under the photo
        assert_eq!(layers.placeholder.as_deref(), Some("loading_img.svg"));
        assert!(layers.placeholder_style.contains("opacity: 0;"));
        assert!(layers.placeholder_style.contains("transition: opacity 100ms"));

        let no_fade = ImageRequest::new("u").placeholder("p").layers(ImageState::Success);
        assert_eq!(no_fade.placeholder, None);
        assert!(!no_fade.image_style.contains("transition"));
    }

    #[test]
    fn test_error_layers_show_fallback() {
        let layers = cat_request().layers(ImageState::Error);
        assert!(!layers.image_mounted);
        assert_eq!(layers.placeholder, None);
        assert_eq!(layers.error_image.as_deref(), Some("ic_broken_image.svg"));
    }

    #[test]
    fn test_image_load_transitions() {
        let mut load = ImageLoad::new("a");
        assert_eq!(load.state_for("a"), ImageState::Loading);

        load.record("a", ImageState::Success);
        assert_eq!(load.state_for("a"), ImageState::Success);

        // New URL for the same cell starts over
        assert_eq!(load.state_for("b"), ImageState::Loading);
        load.record("b", ImageState::Error);
        assert_eq!(load.state_for("b"), ImageState::Error);
        assert_eq!(load.state_for("a"), ImageState::Loading);
    }

    #[test]
    fn test_failure_stays_in_its_cell() {
        let mut first = ImageLoad::new("https://x/cat1.jpg");
        let mut second = ImageLoad::new("https://x/cat2.jpg");

        second.record("https://x/cat2.jpg", ImageState::Success);
        first.record("https://x/cat1.jpg", ImageState::Error);

        let request = cat_request();
        let failed = request.layers(first.state_for("https://x/cat1.jpg"));
        assert_eq!(failed.error_image.as_deref(), Some("ic_broken_image.svg"));
        assert_eq!(second.state_for("https://x/cat2.jpg"), ImageState::Success);
    }
}
