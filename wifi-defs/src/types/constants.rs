//! Protocol limits and fixed values shared across the crate.
//!
//! The numeric values are part of the wire/API contract with drivers and
//! must not change.

/// Length limits for identifiers and secrets.
pub mod limits {
    /// Length of the country code string.
    pub const COUNTRY_CODE_LEN: usize = 2;
    /// Maximum SSID length in bytes.
    pub const SSID_MAX_LEN: usize = 32;
    /// Minimum WPA passphrase length.
    pub const PSK_MIN_LEN: usize = 8;
    /// Maximum PSK length (64 means a raw hex key).
    pub const PSK_MAX_LEN: usize = 64;
    /// Maximum SAE password length.
    pub const SAE_PSWD_MAX_LEN: usize = 128;
    /// MAC address length in bytes.
    pub const MAC_ADDR_LEN: usize = 6;
    /// Maximum enterprise identity length.
    pub const ENT_IDENTITY_MAX_LEN: usize = 64;
    /// Maximum enterprise password length.
    pub const ENT_PSWD_MAX_LEN: usize = 128;
}

/// Channel numbering.
pub mod channel {
    /// Lowest channel number.
    pub const MIN: u16 = 1;
    /// Highest channel number.
    pub const MAX: u16 = 233;
    /// Sentinel meaning "any channel".
    pub const ANY: u16 = 255;
}

/// Power save listen interval bounds, in (short) beacon intervals.
pub mod listen_interval {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 65535;
}

/// Network interface index bounds.
pub mod interface_index {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 255;
}

/// Fallback labels returned for codes outside a vocabulary.
pub mod labels {
    /// Returned by the error-code tables for out-of-range codes.
    pub const UNKNOWN_ERR_CODE: &str = "<unknown>";
    /// Returned by the enumeration label lookups for out-of-range codes.
    pub const UNKNOWN_LABEL: &str = "UNKNOWN";
}

/// WiFi frequency constants (MHz)
pub mod frequency {
    pub const BAND_2_4_START: u32 = 2412;
    pub const BAND_2_4_END: u32 = 2472;
    pub const BAND_2_4_CH14: u32 = 2484;
    pub const BAND_2_4_BASE: u32 = 2407;
    pub const BAND_5_START: u32 = 5160;
    pub const BAND_5_END: u32 = 5885;
    pub const BAND_5_BASE: u32 = 5000;
    pub const BAND_6_START: u32 = 5955;
    pub const BAND_6_END: u32 = 7115;
    pub const BAND_6_BASE: u32 = 5950;
    /// 6GHz channel 2 sits below channel 1, off the regular numbering.
    pub const BAND_6_CH2: u32 = 5935;
    pub const CHANNEL_SPACING: u32 = 5;
}

/// First disconnect reason code overlaid on the connect status space.
pub const DISCONNECT_STATUS_BASE: u32 = 5;
