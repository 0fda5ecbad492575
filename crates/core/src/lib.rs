//! Domain types shared by every StreetFlow crate.
//!
//! Holds the catalog entities (products, categories, images), the common
//! error type and primitive aliases. Nothing here touches the database.

pub mod domain;
pub mod error;
pub mod types;
