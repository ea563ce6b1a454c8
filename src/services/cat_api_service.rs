use crate::config::CatApiConfig;
use crate::error::AppError;
use crate::models::parse_photos;
use cat_gallery::PhotoEntity;

/// Client for the remote cat photo list
pub struct CatApiService {
    config: CatApiConfig,
}

impl CatApiService {
    pub fn new(config: CatApiConfig) -> Self {
        Self { config }
    }

    /// Endpoint returning one page of random photos
    pub fn photos_url(&self) -> String {
        format!(
            "{}/images/search?limit={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.limit
        )
    }

    /// Fetches the photo list in server order
    pub async fn fetch_photos(&self) -> Result<Vec<PhotoEntity>, AppError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent(concat!("CatPhotos/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Network(format!("Client build failed: {}", e)))?;

        let url = self.photos_url();
        log::debug!("Fetching photos from {}", url);

        let response = client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Server(format!(
                "Server returned status: {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

        let photos = parse_photos(&body)?;
        log::info!("Fetched {} photos", photos.len());
        Ok(photos)
    }
}
