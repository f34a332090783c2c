//! Cipher descriptors for pairwise, group and group-management ciphers.
//!
//! A descriptor pairs a supplicant capability bit with the cipher name the
//! supplicant configuration expects.

use std::borrow::Cow;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::models::code::WifiCode;
use crate::models::security::{EapTlsCipherType, Wpa3EnterpriseType};

bitflags! {
    /// Cipher capability bits as reported by the supplicant.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CipherCapabilities: u32 {
        /// AES in counter mode with CBC-MAC (CCMP-128).
        const CCMP = 1 << 4;
        /// BIP with AES-128-CMAC.
        const BIP = 1 << 5;
        /// 128-bit Galois/Counter Mode Protocol.
        const GCMP = 1 << 6;
        /// 256-bit Galois/Counter Mode Protocol.
        const GCMP_256 = 1 << 8;
        /// BIP with 128-bit GMAC.
        const BIP_GMAC_128 = 1 << 11;
        /// BIP with 256-bit GMAC.
        const BIP_GMAC_256 = 1 << 12;
    }
}

wifi_code_enum! {
    /// Group and pairwise cipher types.
    pub enum CipherType ("cipher") {
        /// AES in counter mode with CBC-MAC (CCMP-128).
        Ccmp = 0 => "CCMP",
        /// 128-bit Galois/Counter Mode Protocol.
        Gcmp = 1 => "GCMP",
        /// 256-bit Galois/Counter Mode Protocol.
        Gcmp256 = 2 => "GCMP-256",
    }
}

impl CipherType {
    /// Capability bit advertising this cipher.
    pub fn capability(self) -> CipherCapabilities {
        match self {
            Self::Ccmp => CipherCapabilities::CCMP,
            Self::Gcmp => CipherCapabilities::GCMP,
            Self::Gcmp256 => CipherCapabilities::GCMP_256,
        }
    }
}

wifi_code_enum! {
    /// Group management (broadcast/multicast integrity) cipher types.
    pub enum GroupMgmtCipherType ("group management cipher") {
        /// BIP with AES-128-CMAC.
        Bip = 0 => "AES-128-CMAC",
        /// BIP with 128-bit GMAC.
        BipGmac128 = 1 => "BIP-GMAC-128",
        /// BIP with 256-bit GMAC.
        BipGmac256 = 2 => "BIP-GMAC-256",
    }
}

impl GroupMgmtCipherType {
    /// Capability bit advertising this cipher.
    pub fn capability(self) -> CipherCapabilities {
        match self {
            Self::Bip => CipherCapabilities::BIP,
            Self::BipGmac128 => CipherCapabilities::BIP_GMAC_128,
            Self::BipGmac256 => CipherCapabilities::BIP_GMAC_256,
        }
    }
}

/// A capability bit paired with the cipher's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CipherDesc {
    /// Cipher capability.
    pub capa: CipherCapabilities,
    /// Cipher name string.
    pub name: &'static str,
}

/// Pairwise/group ciphers, strongest first.
pub static CIPHERS: [CipherDesc; 3] = [
    CipherDesc {
        capa: CipherCapabilities::GCMP_256,
        name: "GCMP-256",
    },
    CipherDesc {
        capa: CipherCapabilities::CCMP,
        name: "CCMP",
    },
    CipherDesc {
        capa: CipherCapabilities::GCMP,
        name: "GCMP",
    },
];

/// Group management ciphers.
pub static GROUP_MGMT_CIPHERS: [CipherDesc; 3] = [
    CipherDesc {
        capa: CipherCapabilities::BIP,
        name: "AES-128-CMAC",
    },
    CipherDesc {
        capa: CipherCapabilities::BIP_GMAC_128,
        name: "BIP-GMAC-128",
    },
    CipherDesc {
        capa: CipherCapabilities::BIP_GMAC_256,
        name: "BIP-GMAC-256",
    },
];

impl CipherDesc {
    /// Descriptors from `table` whose capability is present in `caps`.
    pub fn supported_by(
        table: &'static [CipherDesc],
        caps: CipherCapabilities,
    ) -> impl Iterator<Item = &'static CipherDesc> {
        table.iter().filter(move |desc| caps.contains(desc.capa))
    }
}

/// Name of the first pairwise/group cipher advertised in `caps`.
pub fn cipher_name(caps: CipherCapabilities) -> Option<&'static str> {
    CipherDesc::supported_by(&CIPHERS, caps)
        .next()
        .map(|desc| desc.name)
}

/// Name of the first group management cipher advertised in `caps`.
pub fn group_mgmt_cipher_name(caps: CipherCapabilities) -> Option<&'static str> {
    CipherDesc::supported_by(&GROUP_MGMT_CIPHERS, caps)
        .next()
        .map(|desc| desc.name)
}

/// Supplicant cipher parameters for an enterprise connection.
///
/// Filled in by callers, or resolved from a WPA3-Enterprise mode with
/// [`EapCipherConfig::for_wpa3_enterprise`], and handed to the
/// authentication layer unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EapCipherConfig {
    /// Key management type string.
    pub key_mgmt: Cow<'static, str>,
    /// OpenSSL cipher string.
    pub openssl_ciphers: Option<Cow<'static, str>>,
    /// Group cipher string.
    pub group_cipher: Cow<'static, str>,
    /// Pairwise cipher string.
    pub pairwise_cipher: Cow<'static, str>,
    /// Group management cipher string.
    pub group_mgmt_cipher: Cow<'static, str>,
    /// TLS feature flags.
    pub tls_flags: Option<Cow<'static, str>>,
}

impl EapCipherConfig {
    /// Suite parameters for a WPA3-Enterprise mode.
    ///
    /// Returns `None` for [`Wpa3EnterpriseType::Na`], where the caller's own
    /// WPA2-Enterprise settings apply. `tls_cipher` only matters for
    /// Suite-B-192.
    pub fn for_wpa3_enterprise(
        wpa3: Wpa3EnterpriseType,
        tls_cipher: EapTlsCipherType,
    ) -> Option<Self> {
        let config = match wpa3 {
            Wpa3EnterpriseType::Na => return None,
            Wpa3EnterpriseType::SuiteB => Self {
                key_mgmt: Cow::Borrowed("WPA-EAP-SUITE-B"),
                openssl_ciphers: Some(Cow::Borrowed("SUITEB128")),
                group_cipher: Cow::Borrowed(CipherType::Gcmp.label()),
                pairwise_cipher: Cow::Borrowed(CipherType::Gcmp.label()),
                group_mgmt_cipher: Cow::Borrowed(GroupMgmtCipherType::BipGmac128.label()),
                tls_flags: Some(Cow::Borrowed("[SUITEB]")),
            },
            Wpa3EnterpriseType::SuiteB192 => {
                let openssl = match tls_cipher {
                    EapTlsCipherType::EccP384 => "ECDHE-ECDSA-AES256-GCM-SHA384",
                    EapTlsCipherType::Rsa3k => "DHE-RSA-AES256-GCM-SHA384",
                    EapTlsCipherType::None => "SUITEB192",
                };
                Self {
                    key_mgmt: Cow::Borrowed("WPA-EAP-SUITE-B-192"),
                    openssl_ciphers: Some(Cow::Borrowed(openssl)),
                    group_cipher: Cow::Borrowed(CipherType::Gcmp256.label()),
                    pairwise_cipher: Cow::Borrowed(CipherType::Gcmp256.label()),
                    group_mgmt_cipher: Cow::Borrowed(GroupMgmtCipherType::BipGmac256.label()),
                    tls_flags: Some(Cow::Borrowed("[SUITEB]")),
                }
            }
            Wpa3EnterpriseType::Only => Self {
                key_mgmt: Cow::Borrowed("WPA-EAP-SHA256"),
                openssl_ciphers: None,
                group_cipher: Cow::Borrowed(CipherType::Ccmp.label()),
                pairwise_cipher: Cow::Borrowed(CipherType::Ccmp.label()),
                group_mgmt_cipher: Cow::Borrowed(GroupMgmtCipherType::Bip.label()),
                tls_flags: None,
            },
        };
        Some(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_names_match_enum_labels() {
        for cipher in [CipherType::Ccmp, CipherType::Gcmp, CipherType::Gcmp256] {
            let desc = CIPHERS
                .iter()
                .find(|d| d.capa == cipher.capability())
                .expect("every cipher has a descriptor");
            assert_eq!(desc.name, cipher.to_string());
        }
        for cipher in [
            GroupMgmtCipherType::Bip,
            GroupMgmtCipherType::BipGmac128,
            GroupMgmtCipherType::BipGmac256,
        ] {
            let desc = GROUP_MGMT_CIPHERS
                .iter()
                .find(|d| d.capa == cipher.capability())
                .expect("every cipher has a descriptor");
            assert_eq!(desc.name, cipher.to_string());
        }
    }

    #[test]
    fn capability_bits_are_distinct() {
        let mut seen = CipherCapabilities::empty();
        for flag in CipherCapabilities::all().iter() {
            assert!(!seen.intersects(flag));
            assert_eq!(flag.bits().count_ones(), 1);
            seen |= flag;
        }
    }

    #[test]
    fn strongest_cipher_is_preferred() {
        let caps = CipherCapabilities::CCMP | CipherCapabilities::GCMP_256;
        assert_eq!(cipher_name(caps), Some("GCMP-256"));
        assert_eq!(cipher_name(CipherCapabilities::GCMP), Some("GCMP"));
        assert_eq!(cipher_name(CipherCapabilities::BIP), None);
    }

    #[test]
    fn group_mgmt_lookup() {
        let caps = CipherCapabilities::CCMP | CipherCapabilities::BIP_GMAC_256;
        assert_eq!(group_mgmt_cipher_name(caps), Some("BIP-GMAC-256"));
        assert_eq!(group_mgmt_cipher_name(CipherCapabilities::empty()), None);
        assert_eq!(
            CipherDesc::supported_by(&GROUP_MGMT_CIPHERS, CipherCapabilities::all()).count(),
            3
        );
    }

    #[test]
    fn suite_b_192_uses_gcmp_256() {
        let config = EapCipherConfig::for_wpa3_enterprise(
            Wpa3EnterpriseType::SuiteB192,
            EapTlsCipherType::EccP384,
        )
        .expect("suite-b-192 has parameters");
        assert_eq!(config.key_mgmt, "WPA-EAP-SUITE-B-192");
        assert_eq!(config.pairwise_cipher, "GCMP-256");
        assert_eq!(config.group_mgmt_cipher, "BIP-GMAC-256");
        assert_eq!(
            config.openssl_ciphers.as_deref(),
            Some("ECDHE-ECDSA-AES256-GCM-SHA384")
        );
    }

    #[test]
    fn rsa_suite_b_192_uses_dhe() {
        let config = EapCipherConfig::for_wpa3_enterprise(
            Wpa3EnterpriseType::SuiteB192,
            EapTlsCipherType::Rsa3k,
        )
        .expect("suite-b-192 has parameters");
        assert_eq!(
            config.openssl_ciphers.as_deref(),
            Some("DHE-RSA-AES256-GCM-SHA384")
        );
    }

    #[test]
    fn wpa3_only_and_na() {
        let config =
            EapCipherConfig::for_wpa3_enterprise(Wpa3EnterpriseType::Only, EapTlsCipherType::None)
                .expect("wpa3-only has parameters");
        assert_eq!(config.group_mgmt_cipher, "AES-128-CMAC");
        assert!(config.tls_flags.is_none());

        assert!(
            EapCipherConfig::for_wpa3_enterprise(Wpa3EnterpriseType::Na, EapTlsCipherType::None)
                .is_none()
        );
    }
}
