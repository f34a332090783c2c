//! IEEE 802.11 (Wi-Fi) protocol vocabulary.
//!
//! This crate provides the shared definitions a Wi-Fi management stack
//! passes between its layers (driver, supplicant glue, management API):
//!
//! - Security types, EAP methods, WPA3-Enterprise modes and cipher suites
//! - Interface states, modes, link generations, bands and bandwidths
//! - Power save parameters and their failure reasons
//! - Target Wake Time (TWT) negotiation codes and failure reasons
//! - Bit-set families for operational modes, sniffer filters and
//!   configuration masks
//! - Protocol limits and validation helpers built on them
//!
//! # Example
//!
//! ```rust
//! use wifi_defs::{IfaceState, SecurityType, WifiCode, twt_err_code_str};
//!
//! // Codes reported by firmware are untrusted
//! let state = IfaceState::from_code(6).unwrap_or(IfaceState::Disconnected);
//! assert!(state.is_associated());
//!
//! // Labels for display
//! assert_eq!(SecurityType::SaeH2e.to_string(), "WPA3-SAE-H2E");
//! assert_eq!(twt_err_code_str(5), "Peer not HE capable");
//! assert_eq!(twt_err_code_str(42), "<unknown>");
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return `Result<T, WifiError>`. Lookups of untrusted
//! codes come in two flavors: `TryFrom<u32>` / [`WifiCode::from_code`] for
//! callers that need to know, and [`WifiCode::label_for_code`] /
//! [`twt_err_code_str`] / [`ps_config_err_code_str`] for logging paths that
//! just want a printable string.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade for logging. To see
//! log output, add a logging implementation like `env_logger`.

// Internal implementation modules
mod util;

// Public API modules
pub mod models;
pub mod types;

// Re-exported public API
pub use models::btm::BtmQueryReason;
pub use models::cipher::{
    CIPHERS, CipherCapabilities, CipherDesc, CipherType, EapCipherConfig, GROUP_MGMT_CIPHERS,
    GroupMgmtCipherType, cipher_name, group_mgmt_cipher_name,
};
pub use models::code::WifiCode;
pub use models::eap::{EapConfig, EnterpriseCredentials};
pub use models::error::WifiError;
pub use models::flags::{ApConfigParams, OperationalModes, PacketFilter, StaConfigParams};
pub use models::iface::{
    ConnStatus, FrequencyBand, FrequencyBandwidth, IfaceMode, IfaceState, LinkMode, ScanType,
    conn_status_to_result,
};
pub use models::power_save::{
    PowerSave, PsExitStrategy, PsMode, PsParamFailReason, PsParamType, PsParams, PsWakeupMode,
    ps_config_err_code_str,
};
pub use models::security::{
    EapTlsCipherType, EapType, MfpOptions, SecurityType, Wpa3EnterpriseType,
};
pub use models::twt::{
    TwtFailReason, TwtNegotiationType, TwtOperation, TwtSetupCmd, TwtSetupRespStatus,
    TwtTeardownStatus, twt_err_code_str,
};
pub use util::frequency::{band_from_freq, channel_from_freq, freq_from_channel};
pub use util::validation::{
    validate_channel, validate_country_code, validate_interface_index, validate_listen_interval,
    validate_mac_addr, validate_password, validate_ssid,
};

/// A specialized `Result` type for Wi-Fi vocabulary operations.
pub type Result<T> = std::result::Result<T, WifiError>;
