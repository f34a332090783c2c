//! Helpers built on the vocabulary and limits.

pub mod frequency;
pub mod validation;
