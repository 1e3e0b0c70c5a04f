//! Constants for bid estimation

pub mod materials;

pub use materials::builtin_catalog;
