use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;

use super::Product;

/// A grouping label for products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Category {
    pub id: DbId,
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "nombre is required"))]
    pub name: String,
    #[serde(rename = "descripcion")]
    #[validate(length(min = 1, message = "descripcion is required"))]
    pub description: String,
    /// Never filled by the creation path.
    #[serde(rename = "productos", default)]
    pub products: Vec<Product>,
}
