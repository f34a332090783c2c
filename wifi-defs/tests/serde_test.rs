//! Serialization of vocabulary values and configuration objects.

use wifi_defs::{
    EapCipherConfig, EapConfig, EapTlsCipherType, IfaceState, OperationalModes, PsParams,
    PsWakeupMode, SecurityType, Wpa3EnterpriseType,
};

#[test]
fn enums_serialize_by_variant_name() {
    let json = serde_json::to_string(&IfaceState::FourWayHandshake).unwrap();
    assert_eq!(json, "\"FourWayHandshake\"");

    let back: SecurityType = serde_json::from_str("\"SaeH2e\"").unwrap();
    assert_eq!(back, SecurityType::SaeH2e);
}

#[test]
fn flags_serialize_as_names() {
    let modes = OperationalModes::STA | OperationalModes::MONITOR;
    let json = serde_json::to_string(&modes).unwrap();
    assert_eq!(json, "\"STA | MONITOR\"");

    let back: OperationalModes = serde_json::from_str(&json).unwrap();
    assert_eq!(back, modes);
}

#[test]
fn power_save_params_from_config() {
    let json = r#"{
        "param_type": "WakeupMode",
        "enabled": "Enabled",
        "listen_interval": 3,
        "wakeup_mode": "ListenInterval",
        "mode": "Legacy",
        "exit_strategy": "EveryTim",
        "timeout_ms": 50,
        "fail_reason": null
    }"#;
    let params: PsParams = serde_json::from_str(json).unwrap();
    assert_eq!(params.wakeup_mode, PsWakeupMode::ListenInterval);
    assert!(params.validate().is_ok());
}

#[test]
fn eap_config_is_owned_after_deserialize() {
    let builtin = EapConfig::for_security(SecurityType::EapPeapGtc).unwrap();
    let json = serde_json::to_string(builtin).unwrap();
    let back: EapConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, builtin);
}

#[test]
fn cipher_config_keeps_optional_fields() {
    let config =
        EapCipherConfig::for_wpa3_enterprise(Wpa3EnterpriseType::Only, EapTlsCipherType::None)
            .unwrap();
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["key_mgmt"], "WPA-EAP-SHA256");
    assert!(value["tls_flags"].is_null());
}
