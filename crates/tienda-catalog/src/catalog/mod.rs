//! Product catalog module.
//!
//! Contains the product record types and the derived availability
//! classification.

mod availability;
mod product;

pub use availability::Availability;
pub use product::{Category, ColorEntry, ProductRecord, SizeVariant};
