//! Input validation against the 802.11 limits.
//!
//! These checks run before a request reaches a driver, so that callers get
//! a specific error instead of an opaque firmware rejection.

use log::debug;

use crate::Result;
use crate::models::error::WifiError;
use crate::models::security::SecurityType;
use crate::types::constants::{channel, interface_index, limits, listen_interval};

/// Validates an SSID.
///
/// SSIDs are 1 to 32 bytes. Non-UTF-8 SSIDs exist on air but cannot be
/// represented by a `&str`, so callers holding raw bytes should check the
/// length themselves.
pub fn validate_ssid(ssid: &str) -> Result<()> {
    if ssid.is_empty() {
        return Err(WifiError::InvalidSsid("SSID cannot be empty".into()));
    }

    if ssid.len() > limits::SSID_MAX_LEN {
        debug!("rejecting SSID of {} bytes", ssid.len());
        return Err(WifiError::InvalidSsid(format!(
            "SSID too long: {} bytes (max {})",
            ssid.len(),
            limits::SSID_MAX_LEN
        )));
    }

    Ok(())
}

/// Validates a password for the given security type.
///
/// - PSK family and WAPI: 8 to 63 characters, or exactly 64 hex digits
/// - SAE family: 1 to 128 characters
/// - WPA/WPA2/WPA3 auto: 8 to 128 characters
/// - WEP: 5 or 13 characters, or 10 or 26 hex digits
/// - Open: must be empty
/// - Enterprise and DPP: not checked here
pub fn validate_password(security: SecurityType, password: &str) -> Result<()> {
    let len = password.len();

    let result = match security {
        SecurityType::None if !password.is_empty() => Err(WifiError::InvalidPassword(
            "open networks take no password".into(),
        )),
        SecurityType::WpaAutoPersonal => {
            check_range(len, limits::PSK_MIN_LEN, limits::SAE_PSWD_MAX_LEN)
        }
        s if s.is_sae() => check_range(len, 1, limits::SAE_PSWD_MAX_LEN),
        s if s.is_psk() || s == SecurityType::Wapi => {
            if len == limits::PSK_MAX_LEN {
                check_hex(password)
            } else {
                check_range(len, limits::PSK_MIN_LEN, limits::PSK_MAX_LEN - 1)
            }
        }
        SecurityType::Wep => match len {
            5 | 13 => Ok(()),
            10 | 26 => check_hex(password),
            _ => Err(WifiError::InvalidPassword(format!(
                "WEP key must be 5 or 13 characters, or 10 or 26 hex digits (got {len})"
            ))),
        },
        _ => Ok(()),
    };

    if let Err(e) = &result {
        debug!("rejecting {security} password: {e}");
    }
    result
}

fn check_range(len: usize, min: usize, max: usize) -> Result<()> {
    if (min..=max).contains(&len) {
        Ok(())
    } else {
        Err(WifiError::InvalidPassword(format!(
            "length {len} outside {min}..={max}"
        )))
    }
}

fn check_hex(password: &str) -> Result<()> {
    if password.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(WifiError::InvalidPassword("raw key must be hex digits".into()))
    }
}

/// Validates a channel number: `1..=233`, or `255` for any channel.
pub fn validate_channel(ch: u16) -> Result<()> {
    if ch == channel::ANY || (channel::MIN..=channel::MAX).contains(&ch) {
        Ok(())
    } else {
        Err(WifiError::InvalidChannel(ch))
    }
}

/// Validates a power save listen interval.
pub fn validate_listen_interval(interval: u32) -> Result<()> {
    if (listen_interval::MIN..=listen_interval::MAX).contains(&interval) {
        Ok(())
    } else {
        Err(WifiError::InvalidListenInterval(interval))
    }
}

/// Validates a regulatory country code: two ASCII letters.
pub fn validate_country_code(code: &str) -> Result<()> {
    if code.len() == limits::COUNTRY_CODE_LEN && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(WifiError::InvalidCountryCode(code.to_owned()))
    }
}

/// Validates a network interface index.
pub fn validate_interface_index(index: u32) -> Result<()> {
    if (interface_index::MIN..=interface_index::MAX).contains(&index) {
        Ok(())
    } else {
        Err(WifiError::InvalidInterfaceIndex(index))
    }
}

/// Parses a MAC address written as six hex octets separated by `:` or `-`.
///
/// ```rust
/// use wifi_defs::validate_mac_addr;
///
/// let mac = validate_mac_addr("00:1a:2B:3c:4d:5e").unwrap();
/// assert_eq!(mac, [0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]);
/// assert!(validate_mac_addr("00:1a:2b").is_err());
/// ```
pub fn validate_mac_addr(mac: &str) -> Result<[u8; limits::MAC_ADDR_LEN]> {
    let invalid = || WifiError::InvalidMacAddr(mac.to_owned());

    let mut out = [0u8; limits::MAC_ADDR_LEN];
    let mut octets = mac.split([':', '-']);

    for slot in &mut out {
        let octet = octets.next().ok_or_else(invalid)?;
        if octet.len() != 2 || !octet.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        *slot = u8::from_str_radix(octet, 16).map_err(|_| invalid())?;
    }

    if octets.next().is_some() {
        return Err(invalid());
    }

    Ok(out)
}
