pub mod cat_api_service;

pub use cat_api_service::CatApiService;
