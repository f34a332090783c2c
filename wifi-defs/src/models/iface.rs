//! Interface vocabulary: connection progress, roles, PHY generations,
//! bands, bandwidths, scan types and connect results.

use log::warn;

use crate::Result;
use crate::models::code::WifiCode;
use crate::models::error::WifiError;
use crate::types::constants::{DISCONNECT_STATUS_BASE, channel};

wifi_code_enum! {
    /// Wi-Fi interface states, in connection progress order.
    ///
    /// The order is part of the contract: "at least associated" style checks
    /// compare states directly.
    ///
    /// ```rust
    /// use wifi_defs::IfaceState;
    ///
    /// assert!(IfaceState::FourWayHandshake > IfaceState::Associated);
    /// assert!(IfaceState::Completed.is_associated());
    /// assert!(!IfaceState::Scanning.is_associated());
    /// ```
    #[derive(PartialOrd, Ord)]
    pub enum IfaceState ("interface state") {
        /// Interface is disconnected.
        Disconnected = 0 => "DISCONNECTED",
        /// Interface is administratively disabled.
        InterfaceDisabled = 1 => "INTERFACE_DISABLED",
        /// No enabled networks in the configuration.
        Inactive = 2 => "INACTIVE",
        /// Interface is scanning for networks.
        Scanning = 3 => "SCANNING",
        /// Authentication with a network is in progress.
        Authenticating = 4 => "AUTHENTICATING",
        /// Association with a network is in progress.
        Associating = 5 => "ASSOCIATING",
        /// Association with a network completed.
        Associated = 6 => "ASSOCIATED",
        /// 4-way handshake with a network is in progress.
        FourWayHandshake = 7 => "4WAY_HANDSHAKE",
        /// Group key exchange with a network is in progress.
        GroupHandshake = 8 => "GROUP_HANDSHAKE",
        /// All authentication completed, ready to pass data.
        Completed = 9 => "COMPLETED",
    }
}

// Ordinal comparisons on IfaceState depend on this.
const _: () = assert!(
    (IfaceState::Disconnected as u8) < (IfaceState::InterfaceDisabled as u8)
        && (IfaceState::InterfaceDisabled as u8) < (IfaceState::Inactive as u8)
        && (IfaceState::Inactive as u8) < (IfaceState::Scanning as u8)
        && (IfaceState::Scanning as u8) < (IfaceState::Authenticating as u8)
        && (IfaceState::Authenticating as u8) < (IfaceState::Associating as u8)
        && (IfaceState::Associating as u8) < (IfaceState::Associated as u8)
        && (IfaceState::Associated as u8) < (IfaceState::FourWayHandshake as u8)
        && (IfaceState::FourWayHandshake as u8) < (IfaceState::GroupHandshake as u8)
        && (IfaceState::GroupHandshake as u8) < (IfaceState::Completed as u8)
);

impl IfaceState {
    /// Returns `true` once association has completed.
    pub fn is_associated(self) -> bool {
        self >= Self::Associated
    }

    /// Returns `true` while an association attempt is in flight.
    pub fn is_connecting(self) -> bool {
        (Self::Authenticating..=Self::GroupHandshake).contains(&self)
    }

    /// Returns `true` when the link is ready to pass data.
    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

wifi_code_enum! {
    /// Wi-Fi interface roles.
    pub enum IfaceMode ("interface mode") {
        /// Infrastructure station mode.
        Infra = 0 => "STATION",
        /// IBSS (ad-hoc) station mode.
        Ibss = 1 => "ADHOC",
        /// Access point mode.
        Ap = 2 => "ACCESS POINT",
        /// P2P group owner mode.
        P2pGo = 3 => "P2P GROUP OWNER",
        /// P2P group formation mode.
        P2pGroupFormation = 4 => "P2P GROUP FORMATION",
        /// 802.11s mesh mode.
        Mesh = 5 => "MESH",
    }
}

impl IfaceMode {
    /// Returns `true` for roles that beacon and accept stations.
    pub fn is_ap_like(self) -> bool {
        matches!(self, Self::Ap | Self::P2pGo)
    }
}

wifi_code_enum! {
    /// Wi-Fi link generations.
    #[derive(PartialOrd, Ord)]
    pub enum LinkMode ("link mode") {
        /// 802.11 (legacy).
        Wifi0 = 0 => "WIFI 0 (802.11)",
        /// 802.11b.
        Wifi1 = 1 => "WIFI 1 (802.11b)",
        /// 802.11a.
        Wifi2 = 2 => "WIFI 2 (802.11a)",
        /// 802.11g.
        Wifi3 = 3 => "WIFI 3 (802.11g)",
        /// 802.11n.
        Wifi4 = 4 => "WIFI 4 (802.11n/HT)",
        /// 802.11ac.
        Wifi5 = 5 => "WIFI 5 (802.11ac/VHT)",
        /// 802.11ax.
        Wifi6 = 6 => "WIFI 6 (802.11ax/HE)",
        /// 802.11ax in the 6 GHz band.
        Wifi6E = 7 => "WIFI 6E (802.11ax 6GHz/HE)",
        /// 802.11be.
        Wifi7 = 8 => "WIFI 7 (802.11be/EHT)",
    }
}

impl LinkMode {
    /// IEEE amendment that defines this generation.
    pub fn standard(self) -> &'static str {
        match self {
            Self::Wifi0 => "802.11",
            Self::Wifi1 => "802.11b",
            Self::Wifi2 => "802.11a",
            Self::Wifi3 => "802.11g",
            Self::Wifi4 => "802.11n",
            Self::Wifi5 => "802.11ac",
            Self::Wifi6 | Self::Wifi6E => "802.11ax",
            Self::Wifi7 => "802.11be",
        }
    }

    /// Returns `true` for HE (802.11ax) capable generations, the minimum for
    /// Target Wake Time.
    pub fn is_he_capable(self) -> bool {
        self >= Self::Wifi6
    }
}

wifi_code_enum! {
    /// Operational frequency bands.
    pub enum FrequencyBand ("frequency band") {
        /// 2.4 GHz band.
        Band2_4Ghz = 0 => "2.4GHz",
        /// 5 GHz band.
        Band5Ghz = 1 => "5GHz",
        /// 6 GHz band (Wi-Fi 6E, extends to 7 GHz).
        Band6Ghz = 2 => "6GHz",
    }
}

impl FrequencyBand {
    /// Returns `true` if `ch` is a valid channel number in this band.
    ///
    /// 6GHz channels are odd: `4n + 1` for 20 MHz and `4n + 3` for the
    /// wider center channels. Channel 2 is the only even one.
    pub fn contains_channel(self, ch: u16) -> bool {
        match self {
            Self::Band2_4Ghz => (1..=14).contains(&ch),
            Self::Band5Ghz => (32..=177).contains(&ch),
            Self::Band6Ghz => {
                ch == 2 || (ch % 2 == 1 && (channel::MIN..=channel::MAX).contains(&ch))
            }
        }
    }
}

wifi_code_enum! {
    /// Operational channel bandwidths.
    pub enum FrequencyBandwidth ("frequency bandwidth") {
        /// 20 MHz.
        Mhz20 = 1 => "20 MHz",
        /// 40 MHz.
        Mhz40 = 2 => "40 MHz",
        /// 80 MHz.
        Mhz80 = 3 => "80 MHz",
    }
}

impl FrequencyBandwidth {
    /// Width in MHz.
    pub fn mhz(self) -> u32 {
        match self {
            Self::Mhz20 => 20,
            Self::Mhz40 => 40,
            Self::Mhz80 => 80,
        }
    }
}

wifi_code_enum! {
    /// Scan types.
    #[derive(Default)]
    pub enum ScanType ("scan type") {
        /// Active scanning (probe requests).
        #[default]
        Active = 0 => "Active",
        /// Passive scanning (listen for beacons).
        Passive = 1 => "Passive",
    }
}

wifi_code_enum! {
    /// Connect result codes.
    ///
    /// Codes from [`ConnStatus::DISCONNECT_STATUS_BASE`] upward carry
    /// disconnect reasons in the same event field.
    pub enum ConnStatus ("connect status") {
        /// Connection successful.
        Success = 0 => "Connection successful",
        /// Generic failure.
        Fail = 1 => "Connection failed",
        /// Wrong password; the usual cause of a 4-way handshake failure.
        WrongPassword = 2 => "Wrong password",
        /// Connection timed out.
        Timeout = 3 => "Connection timeout",
        /// AP not found.
        ApNotFound = 4 => "AP not found",
    }
}

impl ConnStatus {
    /// First disconnect status code.
    pub const DISCONNECT_STATUS_BASE: u32 = DISCONNECT_STATUS_BASE;

    /// Maps a connect result to `Ok(())` or the matching error.
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Success => Ok(()),
            Self::Fail => Err(WifiError::ConnectFailed),
            Self::WrongPassword => Err(WifiError::AuthFailed),
            Self::Timeout => Err(WifiError::Timeout),
            Self::ApNotFound => Err(WifiError::ApNotFound),
        }
    }
}

/// Converts a raw connect status code into a result.
///
/// Codes outside the connect status range, including disconnect reasons,
/// are reported as a generic connection failure.
pub fn conn_status_to_result(code: u32) -> Result<()> {
    match ConnStatus::from_code(code) {
        Some(status) => status.into_result(),
        None => {
            warn!("unexpected connect status code {code}");
            Err(WifiError::ConnectFailed)
        }
    }
}
