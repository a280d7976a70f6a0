//! Attribute normalization, validation and rendering.

pub use vellum_attributes::*;
