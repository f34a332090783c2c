//! Wi-Fi vocabulary types.
//!
//! Each submodule covers one area of the 802.11 vocabulary. Enumerations
//! share the [`WifiCode`](code::WifiCode) contract; bit-set families live in
//! [`flags`].

#[macro_use]
pub mod code;

pub mod btm;
pub mod cipher;
pub mod eap;
pub mod error;
pub mod flags;
pub mod iface;
pub mod power_save;
pub mod security;
pub mod twt;
