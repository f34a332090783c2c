use thiserror::Error;

use crate::models::power_save::PsParamFailReason;
use crate::models::twt::TwtFailReason;

/// Errors produced when converting, validating, or interpreting Wi-Fi
/// vocabulary values.
///
/// # Examples
///
/// ```rust
/// use wifi_defs::{IfaceMode, WifiError};
///
/// match IfaceMode::try_from(42) {
///     Ok(mode) => println!("mode: {mode}"),
///     Err(WifiError::UnknownCode { kind, code }) => {
///         eprintln!("driver reported unknown {kind} {code}");
///     }
///     Err(e) => eprintln!("error: {e}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WifiError {
    /// A numeric code outside the vocabulary was supplied.
    #[error("unknown {kind} code: {code}")]
    UnknownCode {
        /// Vocabulary the code was looked up in.
        kind: &'static str,
        /// The offending code.
        code: u32,
    },

    /// A label that names no member of the vocabulary was supplied.
    #[error("unknown {kind} label: {label}")]
    UnknownLabel {
        /// Vocabulary the label was looked up in.
        kind: &'static str,
        /// The offending label.
        label: String,
    },

    /// The SSID is empty or longer than the 802.11 limit.
    #[error("invalid SSID: {0}")]
    InvalidSsid(String),

    /// The password does not fit the security type's length rules.
    #[error("invalid password: {0}")]
    InvalidPassword(String),

    /// The channel is outside `1..=233` and is not the "any" sentinel.
    #[error("invalid channel: {0}")]
    InvalidChannel(u16),

    /// The power save listen interval is out of range.
    #[error("invalid listen interval: {0}")]
    InvalidListenInterval(u32),

    /// The country code is not two ASCII letters.
    #[error("invalid country code: {0}")]
    InvalidCountryCode(String),

    /// The network interface index is out of range.
    #[error("invalid interface index: {0}")]
    InvalidInterfaceIndex(u32),

    /// The MAC address could not be parsed.
    #[error("invalid MAC address: {0}")]
    InvalidMacAddr(String),

    /// Enterprise identity or password violates the length limits.
    #[error("invalid enterprise credentials: {0}")]
    InvalidCredentials(String),

    /// Authentication with the access point failed (wrong password).
    #[error("authentication failed")]
    AuthFailed,

    /// The connection attempt timed out.
    #[error("connection timeout")]
    Timeout,

    /// The requested access point was not found.
    #[error("AP not found")]
    ApNotFound,

    /// The connection attempt failed for an unspecified reason.
    #[error("connection failed")]
    ConnectFailed,

    /// A power save parameter request was rejected.
    #[error("power save configuration failed: {0}")]
    PowerSave(PsParamFailReason),

    /// A Target Wake Time operation was rejected.
    #[error("TWT operation failed: {0}")]
    Twt(TwtFailReason),
}
