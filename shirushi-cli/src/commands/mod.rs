//! Command implementations

pub mod label;

pub use label::LabelArgs;
