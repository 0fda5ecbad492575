//! Products and the payload used to create them.
//!
//! `category_id` is text while [`Category::id`](super::Category) is numeric.
//! The `productos` table stores it that way, so the mismatch is carried
//! through unchanged until the schema owner settles on one representation.
//!
//! JSON keys follow the catalog's wire format (`nombre`, `talle`, ...),
//! the same names the `productos` columns use.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;

use super::Image;

/// A sellable catalog item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the database on insert; `0` before persistence.
    pub id: DbId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "talle")]
    pub size: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "id_categoria")]
    pub category_id: String,
    /// Never filled by the creation path.
    #[serde(rename = "imagenes", default)]
    pub images: Vec<Image>,
}

/// Request payload for creating a product.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "nombre is required"))]
    pub name: String,
    #[serde(rename = "talle", default)]
    pub size: String,
    #[serde(rename = "descripcion")]
    #[validate(length(min = 1, message = "descripcion is required"))]
    pub description: String,
    #[serde(rename = "precio")]
    #[validate(range(min = 0.0, message = "precio must not be negative"))]
    pub price: f64,
    #[serde(rename = "id_categoria")]
    #[validate(length(min = 1, message = "id_categoria is required"))]
    pub category_id: String,
}

impl From<CreateProduct> for Product {
    fn from(input: CreateProduct) -> Self {
        Self {
            id: 0,
            name: input.name,
            size: input.size,
            description: input.description,
            price: input.price,
            category_id: input.category_id,
            images: Vec::new(),
        }
    }
}
