//! Bit-set families passed to interface configuration calls.
//!
//! These are distinct types from the enumerations so that a mask cannot be
//! mistaken for a single code.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::models::error::WifiError;

bitflags! {
    /// Interface operational modes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct OperationalModes: u8 {
        /// Station mode.
        const STA = 1 << 0;
        /// Monitor mode.
        const MONITOR = 1 << 1;
        /// TX injection mode.
        const TX_INJECTION = 1 << 2;
        /// Promiscuous mode.
        const PROMISCUOUS = 1 << 3;
        /// AP mode.
        const AP = 1 << 4;
        /// Soft AP mode.
        const SOFTAP = 1 << 5;
    }

    /// Sniffer packet filter settings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PacketFilter: u8 {
        /// Management, data and control frames.
        const ALL = 1 << 0;
        /// Management frames only.
        const MGMT = 1 << 1;
        /// Data frames only.
        const DATA = 1 << 2;
        /// Control frames only.
        const CTRL = 1 << 3;
    }

    /// AP mode configuration parameters present in a request.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ApConfigParams: u8 {
        /// `ap_max_inactivity`.
        const MAX_INACTIVITY = 1 << 0;
        /// `max_num_sta`.
        const MAX_NUM_STA = 1 << 1;
        /// Bandwidth.
        const BANDWIDTH = 1 << 2;
        /// HT capabilities.
        const HT_CAPAB = 1 << 3;
        /// VHT capabilities.
        const VHT_CAPAB = 1 << 4;
    }

    /// Station mode configuration parameters present in a request.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct StaConfigParams: u8 {
        /// Opportunistic key caching.
        const OKC = 1 << 0;
    }
}

macro_rules! impl_from_raw {
    ($($flags:ty => $kind:literal),+ $(,)?) => {
        $(
            impl $flags {
                /// Parses a raw mask, rejecting undefined bits.
                pub fn from_raw(bits: u8) -> Result<Self> {
                    Self::from_bits(bits).ok_or(WifiError::UnknownCode {
                        kind: $kind,
                        code: u32::from(bits),
                    })
                }
            }
        )+
    };
}

impl_from_raw! {
    OperationalModes => "operational mode mask",
    PacketFilter => "packet filter mask",
    ApConfigParams => "AP config parameter mask",
    StaConfigParams => "STA config parameter mask",
}

impl OperationalModes {
    /// Returns `true` if the mask puts the radio in a sniffing mode.
    pub fn is_sniffing(self) -> bool {
        self.intersects(Self::MONITOR | Self::PROMISCUOUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitflags::Flags;

    fn assert_single_bits<F: Flags<Bits = u8>>() {
        let mut seen = 0u8;
        for flag in F::FLAGS {
            let bits = flag.value().bits();
            assert_eq!(bits.count_ones(), 1, "{} must be a single bit", flag.name());
            assert_eq!(seen & bits, 0, "{} overlaps another flag", flag.name());
            seen |= bits;
        }
    }

    #[test]
    fn no_shared_bits() {
        assert_single_bits::<OperationalModes>();
        assert_single_bits::<PacketFilter>();
        assert_single_bits::<ApConfigParams>();
        assert_single_bits::<StaConfigParams>();
    }

    #[test]
    fn bit_positions() {
        assert_eq!(OperationalModes::STA.bits(), 0x01);
        assert_eq!(OperationalModes::SOFTAP.bits(), 0x20);
        assert_eq!(PacketFilter::CTRL.bits(), 0x08);
        assert_eq!(ApConfigParams::VHT_CAPAB.bits(), 0x10);
        assert_eq!(StaConfigParams::OKC.bits(), 0x01);
    }

    #[test]
    fn raw_masks() {
        let modes = OperationalModes::from_raw(0x0a).unwrap();
        assert_eq!(modes, OperationalModes::MONITOR | OperationalModes::PROMISCUOUS);
        assert!(modes.is_sniffing());
        assert!(!OperationalModes::STA.is_sniffing());

        assert_eq!(
            OperationalModes::from_raw(0x40),
            Err(WifiError::UnknownCode {
                kind: "operational mode mask",
                code: 0x40
            })
        );
        assert!(PacketFilter::from_raw(0x10).is_err());
        assert_eq!(
            ApConfigParams::from_raw(0x05).unwrap(),
            ApConfigParams::MAX_INACTIVITY | ApConfigParams::BANDWIDTH
        );
        assert_eq!(
            ApConfigParams::from_raw(0x20),
            Err(WifiError::UnknownCode {
                kind: "AP config parameter mask",
                code: 0x20
            })
        );
        assert_eq!(StaConfigParams::from_raw(0x01).unwrap(), StaConfigParams::OKC);
        assert!(StaConfigParams::from_raw(0x02).is_err());
        assert_eq!(
            PacketFilter::from_raw(0x06).unwrap(),
            PacketFilter::MGMT | PacketFilter::DATA
        );
    }
}
