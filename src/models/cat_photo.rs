use cat_gallery::PhotoEntity;
use serde::{Deserialize, Serialize};

/// A photo record as returned by the cat image API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatPhoto {
    pub id: String,
    pub url: String,
    // Cells use a fixed aspect ratio, so the size is informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl From<CatPhoto> for PhotoEntity {
    fn from(photo: CatPhoto) -> Self {
        PhotoEntity::new(photo.id, photo.url)
    }
}

/// Parses an API response body into photos, keeping the server order
pub fn parse_photos(body: &str) -> Result<Vec<PhotoEntity>, serde_json::Error> {
    let photos: Vec<CatPhoto> = serde_json::from_str(body)?;
    Ok(photos.into_iter().map(PhotoEntity::from).collect())
}
