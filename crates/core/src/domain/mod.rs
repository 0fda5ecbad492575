//! Catalog entities.

pub mod category;
pub mod image;
pub mod product;

pub use category::Category;
pub use image::Image;
pub use product::{CreateProduct, Product};
