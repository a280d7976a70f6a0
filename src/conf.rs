//! Settings loading.

pub use vellum_conf::*;
