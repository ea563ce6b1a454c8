pub mod cat_photo;

pub use cat_photo::parse_photos;
