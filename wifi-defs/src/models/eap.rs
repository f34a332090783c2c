//! Enterprise (802.1X) configuration values.

use std::borrow::Cow;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::models::code::WifiCode;
use crate::models::error::WifiError;
use crate::models::security::{EapType, SecurityType};
use crate::types::constants::limits;

/// How an enterprise security type maps onto supplicant EAP settings.
///
/// # Examples
///
/// ```rust
/// use wifi_defs::{EapConfig, EapType, SecurityType};
///
/// let config = EapConfig::for_security(SecurityType::EapPeapMschapv2).unwrap();
/// assert_eq!(config.eap_type_phase1, EapType::Peap);
/// assert_eq!(config.method, "PEAP");
/// assert_eq!(config.phase2.as_deref(), Some("auth=MSCHAPV2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EapConfig {
    /// Security type.
    pub security: SecurityType,
    /// EAP method type of phase 1.
    pub eap_type_phase1: EapType,
    /// EAP method type of phase 2.
    pub eap_type_phase2: EapType,
    /// EAP method string.
    pub method: Cow<'static, str>,
    /// Phase 2 setting string.
    pub phase2: Option<Cow<'static, str>>,
}

const PHASE2_AUTH_PREFIX: &str = "auth=";

static EAP_CONFIGS: [EapConfig; 5] = [
    EapConfig {
        security: SecurityType::Eap,
        eap_type_phase1: EapType::Tls,
        eap_type_phase2: EapType::None,
        method: Cow::Borrowed("TLS"),
        phase2: None,
    },
    EapConfig {
        security: SecurityType::EapPeapMschapv2,
        eap_type_phase1: EapType::Peap,
        eap_type_phase2: EapType::Mschapv2,
        method: Cow::Borrowed("PEAP"),
        phase2: Some(Cow::Borrowed("auth=MSCHAPV2")),
    },
    EapConfig {
        security: SecurityType::EapPeapGtc,
        eap_type_phase1: EapType::Peap,
        eap_type_phase2: EapType::Gtc,
        method: Cow::Borrowed("PEAP"),
        phase2: Some(Cow::Borrowed("auth=GTC")),
    },
    EapConfig {
        security: SecurityType::EapTtlsMschapv2,
        eap_type_phase1: EapType::Ttls,
        eap_type_phase2: EapType::Mschapv2,
        method: Cow::Borrowed("TTLS"),
        phase2: Some(Cow::Borrowed("auth=MSCHAPV2")),
    },
    EapConfig {
        security: SecurityType::EapPeapTls,
        eap_type_phase1: EapType::Peap,
        eap_type_phase2: EapType::Tls,
        method: Cow::Borrowed("PEAP"),
        phase2: Some(Cow::Borrowed("auth=TLS")),
    },
];

impl EapConfig {
    /// Built-in EAP settings for an enterprise security type.
    ///
    /// Returns `None` for non-enterprise types and for the fast transition
    /// variants, whose inner method is chosen by the caller.
    pub fn for_security(security: SecurityType) -> Option<&'static EapConfig> {
        EAP_CONFIGS.iter().find(|config| config.security == security)
    }

    /// Every built-in row.
    pub fn all() -> &'static [EapConfig] {
        &EAP_CONFIGS
    }

    /// Parses the inner method back out of the phase 2 string.
    pub fn phase2_method(&self) -> Option<EapType> {
        let auth = self.phase2.as_deref()?.strip_prefix(PHASE2_AUTH_PREFIX)?;
        EapType::from_label(auth)
    }

    /// Returns `true` if the outer method tunnels an inner method.
    pub fn is_tunneled(&self) -> bool {
        matches!(self.eap_type_phase1, EapType::Peap | EapType::Ttls)
    }
}

/// User credentials for an enterprise connection.
///
/// # Examples
///
/// ```rust
/// use wifi_defs::EnterpriseCredentials;
///
/// let creds = EnterpriseCredentials {
///     identity: "user@example.com".into(),
///     password: "hunter22".into(),
///     anonymous_identity: Some("anonymous@example.com".into()),
/// };
/// assert!(creds.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterpriseCredentials {
    /// User identity (usually email or username).
    pub identity: String,
    /// Password for authentication.
    pub password: String,
    /// Anonymous outer identity.
    pub anonymous_identity: Option<String>,
}

impl EnterpriseCredentials {
    /// Checks the identity and password against the 802.1X length limits.
    ///
    /// The password may be empty for certificate-only methods such as
    /// EAP-TLS.
    pub fn validate(&self) -> Result<()> {
        if self.identity.trim().is_empty() {
            debug!("rejecting enterprise credentials: empty identity");
            return Err(WifiError::InvalidCredentials(
                "identity cannot be empty".into(),
            ));
        }

        if self.identity.len() > limits::ENT_IDENTITY_MAX_LEN {
            return Err(WifiError::InvalidCredentials(format!(
                "identity too long: {} bytes (max {})",
                self.identity.len(),
                limits::ENT_IDENTITY_MAX_LEN
            )));
        }

        if let Some(anon) = &self.anonymous_identity
            && anon.len() > limits::ENT_IDENTITY_MAX_LEN
        {
            return Err(WifiError::InvalidCredentials(format!(
                "anonymous identity too long: {} bytes (max {})",
                anon.len(),
                limits::ENT_IDENTITY_MAX_LEN
            )));
        }

        if self.password.len() > limits::ENT_PSWD_MAX_LEN {
            return Err(WifiError::InvalidCredentials(format!(
                "password too long: {} bytes (max {})",
                self.password.len(),
                limits::ENT_PSWD_MAX_LEN
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_is_enterprise() {
        for config in EapConfig::all() {
            assert!(config.security.is_enterprise());
        }
    }

    #[test]
    fn eap_tls_has_no_phase2() {
        let config = EapConfig::for_security(SecurityType::EAP_TLS).unwrap();
        assert_eq!(config.eap_type_phase1, EapType::Tls);
        assert_eq!(config.eap_type_phase2, EapType::None);
        assert!(config.phase2.is_none());
        assert!(config.phase2_method().is_none());
        assert!(!config.is_tunneled());
    }

    #[test]
    fn phase2_string_agrees_with_phase2_type() {
        for config in EapConfig::all().iter().filter(|c| c.phase2.is_some()) {
            assert_eq!(config.phase2_method(), Some(config.eap_type_phase2));
            assert!(config.is_tunneled());
        }
    }

    #[test]
    fn non_enterprise_has_no_row() {
        assert!(EapConfig::for_security(SecurityType::Psk).is_none());
        assert!(EapConfig::for_security(SecurityType::FtEap).is_none());
    }

    #[test]
    fn credentials_limits() {
        let mut creds = EnterpriseCredentials {
            identity: "a".repeat(64),
            password: "p".repeat(128),
            anonymous_identity: None,
        };
        assert!(creds.validate().is_ok());

        creds.identity.push('a');
        assert!(matches!(
            creds.validate(),
            Err(WifiError::InvalidCredentials(_))
        ));

        creds.identity = "user".into();
        creds.password.push('p');
        assert!(creds.validate().is_err());
    }

    #[test]
    fn empty_identity_rejected() {
        let creds = EnterpriseCredentials::default();
        assert_eq!(
            creds.validate(),
            Err(WifiError::InvalidCredentials(
                "identity cannot be empty".into()
            ))
        );
    }
}
