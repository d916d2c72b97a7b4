//! Shared types for the WASM API
//!
//! Edit results are re-exported from the styler; this adds the small
//! records that only exist for the JS side.

pub use crate::styler::{CaretEdit, EditResult};

/// One entry of a `<select>` dropdown
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct KindOption {
    pub value: String,
    pub label: String,
}

/// Size preset entry, keyed by its pixel edge
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SizeOption {
    pub value: u32,
    pub label: String,
}
