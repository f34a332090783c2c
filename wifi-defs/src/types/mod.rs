//! Type definitions and constants.
//!
//! This module contains the 802.11 protocol limits used by the vocabulary
//! and validation helpers.

pub mod constants;
