use std::collections::HashSet;

/// A single displayable photo
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoEntity {
    /// Unique within one photo list, used as the render key
    pub id: String,
    /// Remote image location
    pub url: String,
}

impl PhotoEntity {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

/// What the photo screen should currently show.
///
/// Produced and replaced wholesale by the owner of the screen; the
/// components only ever read it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Loading,
    /// Photos in display order
    Success(Vec<PhotoEntity>),
    /// Any failure, without detail
    Error,
}

/// The view `PhotoScreen` renders for a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPath {
    Loading,
    Grid,
    Error,
}

impl UiState {
    pub fn render_path(&self) -> RenderPath {
        match self {
            UiState::Loading => RenderPath::Loading,
            UiState::Success(_) => RenderPath::Grid,
            UiState::Error => RenderPath::Error,
        }
    }
}

/// Returns the ids that occur more than once, in order of first repetition
pub fn duplicate_ids(photos: &[PhotoEntity]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    photos
        .iter()
        .filter(|p| !seen.insert(p.id.as_str()) && reported.insert(p.id.as_str()))
        .map(|p| p.id.as_str())
        .collect()
}

/// Keeps the first photo of every id and drops later repeats
pub fn unique_by_id(photos: Vec<PhotoEntity>) -> Vec<PhotoEntity> {
    let mut seen = HashSet::new();
    photos
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_path_matches_variant() {
        assert_eq!(UiState::Loading.render_path(), RenderPath::Loading);
        assert_eq!(UiState::Success(vec![]).render_path(), RenderPath::Grid);
        assert_eq!(UiState::Error.render_path(), RenderPath::Error);
    }

    #[test]
    fn test_default_state_is_loading() {
        assert_eq!(UiState::default(), UiState::Loading);
    }

    #[test]
    fn test_photo_equality_is_structural() {
        let a = PhotoEntity::new("1", "https://x/cat1.jpg");
        let b = PhotoEntity::new("1", "https://x/cat1.jpg");
        assert_eq!(a, b);
        assert_ne!(a, PhotoEntity::new("1", "https://x/other.jpg"));

        let state_a = UiState::Success(vec![a]);
        let state_b = UiState::Success(vec![b]);
        assert_eq!(state_a, state_b);
    }

    #[test]
    fn test_duplicate_ids() {
        let photos = vec![
            PhotoEntity::new("a", "u1"),
            PhotoEntity::new("b", "u2"),
            PhotoEntity::new("a", "u3"),
            PhotoEntity::new("a", "u4"),
            PhotoEntity::new("c", "u5"),
        ];
        assert_eq!(duplicate_ids(&photos), vec!["a"]);
        assert!(duplicate_ids(&photos[..2]).is_empty());
    }

    #[test]
    fn test_unique_by_id_keeps_first() {
        let photos = vec![
            PhotoEntity::new("a", "u1"),
            PhotoEntity::new("b", "u2"),
            PhotoEntity::new("a", "u3"),
            PhotoEntity::new("c", "u4"),
        ];
        assert_eq!(
            unique_by_id(photos),
            vec![
                PhotoEntity::new("a", "u1"),
                PhotoEntity::new("b", "u2"),
                PhotoEntity::new("c", "u4"),
            ]
        );
    }
}
