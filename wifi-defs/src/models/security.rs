//! Security vocabulary: authentication and key management schemes, EAP
//! methods, WPA3-Enterprise modes and management frame protection.

use crate::types::constants::limits;

wifi_code_enum! {
    /// IEEE 802.11 security types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wifi_defs::{SecurityType, WifiCode};
    ///
    /// let security: SecurityType = "wpa3-sae-h2e".parse().unwrap();
    /// assert_eq!(security, SecurityType::SaeH2e);
    /// assert!(security.is_sae());
    /// assert_eq!(security.code(), 4);
    /// ```
    pub enum SecurityType ("security type") {
        /// No security.
        None = 0 => "OPEN",
        /// WPA2-PSK security.
        Psk = 1 => "WPA2-PSK",
        /// WPA2-PSK-SHA256 security.
        PskSha256 = 2 => "WPA2-PSK-SHA256",
        /// WPA3-SAE security with hunting-and-pecking loop.
        Sae = 3 => "WPA3-SAE-HNP",
        /// WPA3-SAE security with hash-to-element.
        SaeH2e = 4 => "WPA3-SAE-H2E",
        /// WPA3-SAE with both hunting-and-pecking and hash-to-element enabled.
        SaeAuto = 5 => "WPA3-SAE-AUTO",
        /// GB 15629.11-2003 WAPI security.
        Wapi = 6 => "WAPI",
        /// EAP-TLS enterprise security.
        Eap = 7 => "EAP-TLS",
        /// WEP security.
        Wep = 8 => "WEP",
        /// WPA-PSK security.
        WpaPsk = 9 => "WPA-PSK",
        /// WPA/WPA2/WPA3 PSK security.
        WpaAutoPersonal = 10 => "WPA/WPA2/WPA3 PSK",
        /// Device Provisioning Protocol.
        Dpp = 11 => "DPP",
        /// EAP-PEAP with MSCHAPv2 inner authentication.
        EapPeapMschapv2 = 12 => "EAP-PEAP-MSCHAPV2",
        /// EAP-PEAP with GTC inner authentication.
        EapPeapGtc = 13 => "EAP-PEAP-GTC",
        /// EAP-TTLS with MSCHAPv2 inner authentication.
        EapTtlsMschapv2 = 14 => "EAP-TTLS-MSCHAPV2",
        /// EAP-PEAP with TLS inner authentication.
        EapPeapTls = 15 => "EAP-PEAP-TLS",
        /// Fast transition PSK.
        FtPsk = 16 => "FT-PSK",
        /// Fast transition SAE.
        FtSae = 17 => "FT-SAE",
        /// Fast transition EAP.
        FtEap = 18 => "FT-EAP",
        /// Fast transition EAP with SHA-384.
        FtEapSha384 = 19 => "FT-EAP-SHA384",
        /// SAE extended key (group-dependent hashing).
        SaeExtKey = 20 => "WPA3-SAE-EXT-KEY",
    }
}

impl SecurityType {
    /// Alias: SAE with the hunting-and-pecking loop is the plain SAE code.
    pub const SAE_HNP: Self = Self::Sae;
    /// Alias: EAP-TLS is the plain EAP code.
    pub const EAP_TLS: Self = Self::Eap;

    /// Returns `true` for open networks.
    pub fn is_open(self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` for the SAE (WPA3-Personal) family.
    pub fn is_sae(self) -> bool {
        matches!(
            self,
            Self::Sae | Self::SaeH2e | Self::SaeAuto | Self::FtSae | Self::SaeExtKey
        )
    }

    /// Returns `true` for schemes keyed by a pre-shared passphrase.
    pub fn is_psk(self) -> bool {
        matches!(
            self,
            Self::Psk | Self::PskSha256 | Self::WpaPsk | Self::FtPsk | Self::WpaAutoPersonal
        )
    }

    /// Returns `true` for personal (non-802.1X) secured networks.
    pub fn is_personal(self) -> bool {
        self.is_psk() || self.is_sae() || matches!(self, Self::Wapi | Self::Wep | Self::Dpp)
    }

    /// Returns `true` for 802.1X enterprise schemes.
    pub fn is_enterprise(self) -> bool {
        matches!(
            self,
            Self::Eap
                | Self::EapPeapMschapv2
                | Self::EapPeapGtc
                | Self::EapTtlsMschapv2
                | Self::EapPeapTls
                | Self::FtEap
                | Self::FtEapSha384
        )
    }

    /// Returns `true` for 802.11r fast transition variants.
    pub fn is_fast_transition(self) -> bool {
        matches!(
            self,
            Self::FtPsk | Self::FtSae | Self::FtEap | Self::FtEapSha384
        )
    }

    /// Longest password accepted for this security type, if it takes one.
    ///
    /// Mixed-mode personal networks may run SAE, so they accept the longer
    /// SAE limit.
    pub fn max_password_len(self) -> Option<usize> {
        match self {
            Self::WpaAutoPersonal => Some(limits::SAE_PSWD_MAX_LEN),
            s if s.is_sae() => Some(limits::SAE_PSWD_MAX_LEN),
            s if s.is_psk() => Some(limits::PSK_MAX_LEN),
            Self::Wapi => Some(limits::PSK_MAX_LEN),
            Self::Wep => Some(26),
            _ => None,
        }
    }
}

wifi_code_enum! {
    /// EAP method types, numbered as on the wire (IANA EAP registry).
    pub enum EapType ("EAP type") {
        /// No EAP method.
        None = 0 => "NONE",
        /// Generic Token Card, RFC 3748 section 5.
        Gtc = 6 => "GTC",
        /// EAP-TLS, RFC 5216.
        Tls = 13 => "TLS",
        /// EAP-TTLS, RFC 5281.
        Ttls = 21 => "TTLS",
        /// Protected EAP.
        Peap = 25 => "PEAP",
        /// EAP-MSCHAPv2.
        Mschapv2 = 26 => "MSCHAPV2",
    }
}

wifi_code_enum! {
    /// WPA3-Enterprise modes (WFA WPA3 specification v3.4, section 3).
    pub enum Wpa3EnterpriseType ("WPA3 enterprise type") {
        /// Not WPA3-Enterprise: WPA2-Enterprise or a personal mode.
        Na = 0 => "NA",
        /// Suite-B (PMF required).
        SuiteB = 1 => "WPA3-SuiteB",
        /// Suite-B-192 (PMF required).
        SuiteB192 = 2 => "WPA3-SuiteB-192",
        /// WPA3-Enterprise only (PMF required, WPA2-Enterprise disabled).
        Only = 3 => "WPA3-Enterprise-Only",
    }
}

impl Wpa3EnterpriseType {
    /// Returns `true` if this mode requires management frame protection.
    pub fn requires_mfp(self) -> bool {
        !matches!(self, Self::Na)
    }
}

wifi_code_enum! {
    /// TLS cipher families used by EAP-TLS in Suite-B-192 mode.
    pub enum EapTlsCipherType ("EAP-TLS cipher") {
        /// No specific cipher family.
        None = 0 => "NONE",
        /// ECDH and ECDSA on P-384.
        EccP384 = 1 => "ECC-P384",
        /// ECDH and RSA with keys of 3072 bits or more.
        Rsa3k = 2 => "RSA-3K",
    }
}

wifi_code_enum! {
    /// IEEE 802.11w management frame protection options.
    #[derive(Default)]
    pub enum MfpOptions ("MFP option") {
        /// MFP disabled.
        Disable = 0 => "Disable",
        /// MFP optional.
        #[default]
        Optional = 1 => "Optional",
        /// MFP required.
        Required = 2 => "Required",
    }
}

impl MfpOptions {
    /// Minimum MFP setting for a security type.
    ///
    /// SAE and the WPA3-Enterprise suites cannot run without protected
    /// management frames.
    pub fn minimum_for(security: SecurityType, wpa3: Wpa3EnterpriseType) -> Self {
        if security.is_sae() || wpa3.requires_mfp() {
            Self::Required
        } else {
            Self::Disable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WifiCode;

    #[test]
    fn security_codes_are_dense() {
        for (idx, security) in SecurityType::ALL.iter().enumerate() {
            assert_eq!(security.code() as usize, idx);
        }
        assert_eq!(SecurityType::MAX, SecurityType::SaeExtKey);
        assert_eq!(SecurityType::unknown_code(), 21);
    }

    #[test]
    fn aliases_share_codes() {
        assert_eq!(SecurityType::SAE_HNP, SecurityType::Sae);
        assert_eq!(SecurityType::EAP_TLS.code(), 7);
        assert_eq!(SecurityType::EAP_TLS.label(), "EAP-TLS");
    }

    #[test]
    fn security_labels() {
        assert_eq!(SecurityType::None.label(), "OPEN");
        assert_eq!(SecurityType::WpaAutoPersonal.label(), "WPA/WPA2/WPA3 PSK");
        assert_eq!(SecurityType::FtEapSha384.label(), "FT-EAP-SHA384");
        assert_eq!(SecurityType::label_for_code(99), "UNKNOWN");
    }

    #[test]
    fn sae_h2e_round_trips_through_label() {
        let label = SecurityType::SaeH2e.label();
        assert_eq!(SecurityType::from_label(label), Some(SecurityType::SaeH2e));
    }

    #[test]
    fn classification_is_disjoint() {
        for &security in SecurityType::ALL {
            let classes = [
                security.is_open(),
                security.is_personal(),
                security.is_enterprise(),
            ];
            assert_eq!(
                classes.iter().filter(|c| **c).count(),
                1,
                "{security} must be in exactly one class"
            );
        }
    }

    #[test]
    fn password_limits() {
        assert_eq!(SecurityType::Psk.max_password_len(), Some(64));
        assert_eq!(SecurityType::SaeExtKey.max_password_len(), Some(128));
        assert_eq!(SecurityType::WpaAutoPersonal.max_password_len(), Some(128));
        assert_eq!(SecurityType::None.max_password_len(), None);
        assert_eq!(SecurityType::EapPeapGtc.max_password_len(), None);
    }

    #[test]
    fn eap_types_use_wire_values() {
        assert_eq!(EapType::Gtc.code(), 6);
        assert_eq!(EapType::Peap.code(), 25);
        assert_eq!(EapType::from_code(26), Some(EapType::Mschapv2));
        assert_eq!(EapType::from_code(7), None);
        assert_eq!(EapType::unknown_code(), 27);
    }

    #[test]
    fn mfp_minimum() {
        assert_eq!(
            MfpOptions::minimum_for(SecurityType::SaeH2e, Wpa3EnterpriseType::Na),
            MfpOptions::Required
        );
        assert_eq!(
            MfpOptions::minimum_for(SecurityType::Eap, Wpa3EnterpriseType::SuiteB192),
            MfpOptions::Required
        );
        assert_eq!(
            MfpOptions::minimum_for(SecurityType::Psk, Wpa3EnterpriseType::Na),
            MfpOptions::Disable
        );
        assert_eq!(MfpOptions::default(), MfpOptions::Optional);
    }
}
