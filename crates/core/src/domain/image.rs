use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;

/// A titled URL attached to a product or a category.
///
/// Not written by the product creation path; kept so read paths can hang
/// images off [`Product`](super::Product).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Image {
    pub id: DbId,
    #[serde(rename = "id_producto")]
    pub product_id: DbId,
    #[serde(rename = "id_categoria")]
    pub category_id: DbId,
    #[serde(rename = "titulo")]
    #[validate(length(min = 1, message = "titulo is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,
}
