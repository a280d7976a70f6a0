//! Tag values, the begin/end lifecycle and the tag factory.

pub use vellum_tags::*;
