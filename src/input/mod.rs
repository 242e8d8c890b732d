//! Input-control models for settings forms

pub mod prefix;

pub use prefix::{PrefixInput, PrefixedValue, split_prefixed_value};
