//! Power save vocabulary and the power save parameter request.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::models::code::WifiCode;
use crate::models::error::WifiError;
use crate::types::constants::labels::UNKNOWN_ERR_CODE;
use crate::types::constants::listen_interval;

wifi_code_enum! {
    /// Power save states.
    #[derive(Default)]
    pub enum PowerSave ("power save state") {
        /// Power save disabled.
        Disabled = 0 => "Power save disabled",
        /// Power save enabled.
        #[default]
        Enabled = 1 => "Power save enabled",
    }
}

impl From<bool> for PowerSave {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

wifi_code_enum! {
    /// Power save modes.
    ///
    /// WMM power save has to be configured before connecting, as ADDTS
    /// action frames are not supported.
    #[derive(Default)]
    pub enum PsMode ("power save mode") {
        /// Legacy power save mode.
        #[default]
        Legacy = 0 => "Legacy power save",
        /// WMM power save mode.
        Wmm = 1 => "WMM power save",
    }
}

wifi_code_enum! {
    /// Power save parameters that can be configured individually.
    #[derive(Default)]
    pub enum PsParamType ("power save parameter") {
        /// Power save state.
        #[default]
        State = 0 => "state",
        /// Listen interval, in (short) beacon intervals.
        ListenInterval = 1 => "listen interval",
        /// Wakeup mode.
        WakeupMode = 2 => "wakeup mode",
        /// Power save mode.
        Mode = 3 => "mode",
        /// Exit strategy.
        ExitStrategy = 4 => "exit strategy",
        /// Inactivity timeout.
        Timeout = 5 => "timeout",
    }
}

wifi_code_enum! {
    /// Power save wakeup modes.
    #[derive(Default)]
    pub enum PsWakeupMode ("power save wakeup mode") {
        /// DTIM based wakeup.
        #[default]
        Dtim = 0 => "PS wakeup mode DTIM",
        /// Listen interval based wakeup.
        ListenInterval = 1 => "PS wakeup mode listen interval",
    }
}

wifi_code_enum! {
    /// Power save exit strategies.
    #[derive(Default)]
    pub enum PsExitStrategy ("power save exit strategy") {
        /// Driver-specific algorithm.
        CustomAlgo = 0 => "Custom algorithm",
        /// Exit on every TIM.
        #[default]
        EveryTim = 1 => "Every TIM",
    }
}

wifi_code_enum! {
    /// Reasons a power save parameter request was rejected.
    pub enum PsParamFailReason ("power save failure reason") {
        /// Unspecified error.
        Unspecified = 0 => "Unspecified",
        /// Command execution failed.
        CmdExecFail = 1 => "Command Execution failed",
        /// Parameter not supported.
        OperationNotSupported = 2 => "Operation not supported",
        /// Unable to get interface status.
        UnableToGetIfaceStatus = 3 => "Unable to get iface status",
        /// Device not connected to an AP.
        DeviceNotConnected = 4 => "Cannot set parameters while device not connected",
        /// Device already connected to an AP.
        DeviceConnected = 5 => "Cannot set parameters while device connected",
        /// Listen interval out of range.
        ListenIntervalRangeInvalid = 6 => "Parameter out of range",
        /// Invalid exit strategy.
        InvalidExitStrategy = 7 => "Invalid exit strategy",
    }
}

impl PsParamFailReason {
    /// Text reported for this reason by [`ps_config_err_code_str`].
    pub fn description(self) -> &'static str {
        ps_config_err_code_str(self.code() as i16)
    }
}

/// Power save configuration error texts, indexed by failure code.
///
/// There is no row for [`PsParamFailReason::InvalidExitStrategy`].
static PS_PARAM_CONFIG_ERR_CODES: [&str; 7] = [
    "Unspecified",
    "Command Execution failed",
    "Operation not supported",
    "Unable to get iface status",
    "Cannot set parameters while device not connected",
    "Cannot set parameters while device connected",
    "Parameter out of range",
];

/// Returns the text for a power save configuration error code.
///
/// Codes come from firmware and are not trusted: negative codes and codes
/// past the end of the table yield `"<unknown>"`.
///
/// ```rust
/// use wifi_defs::ps_config_err_code_str;
///
/// assert_eq!(ps_config_err_code_str(6), "Parameter out of range");
/// assert_eq!(ps_config_err_code_str(7), "<unknown>");
/// assert_eq!(ps_config_err_code_str(-1), "<unknown>");
/// ```
pub fn ps_config_err_code_str(err_no: i16) -> &'static str {
    usize::try_from(err_no)
        .ok()
        .and_then(|idx| PS_PARAM_CONFIG_ERR_CODES.get(idx))
        .copied()
        .unwrap_or(UNKNOWN_ERR_CODE)
}

/// A power save parameter request, and the reply carrying its outcome.
///
/// Only the field named by `param_type` is applied by the driver; the rest
/// keep their defaults.
///
/// # Examples
///
/// ```rust
/// use wifi_defs::{PsParams, PsParamType, PsWakeupMode};
///
/// let params = PsParams::default()
///     .with_wakeup_mode(PsWakeupMode::ListenInterval)
///     .with_listen_interval(10);
/// assert_eq!(params.param_type, PsParamType::ListenInterval);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsParams {
    /// Which parameter this request sets.
    pub param_type: PsParamType,
    /// Power save state.
    pub enabled: PowerSave,
    /// Listen interval in (short) beacon intervals.
    pub listen_interval: u32,
    /// Wakeup mode.
    pub wakeup_mode: PsWakeupMode,
    /// Power save mode.
    pub mode: PsMode,
    /// Exit strategy.
    pub exit_strategy: PsExitStrategy,
    /// Inactivity timeout in milliseconds.
    pub timeout_ms: u32,
    /// Failure reason filled in by the driver on rejection.
    pub fail_reason: Option<PsParamFailReason>,
}

impl Default for PsParams {
    /// Returns the default power save parameters.
    ///
    /// Defaults:
    /// - `enabled`: `Enabled`
    /// - `listen_interval`: `0` (use DTIM)
    /// - `wakeup_mode`: `Dtim`
    /// - `mode`: `Legacy`
    /// - `exit_strategy`: `EveryTim`
    /// - `timeout_ms`: `100`
    fn default() -> Self {
        Self {
            param_type: PsParamType::default(),
            enabled: PowerSave::default(),
            listen_interval: 0,
            wakeup_mode: PsWakeupMode::default(),
            mode: PsMode::default(),
            exit_strategy: PsExitStrategy::default(),
            timeout_ms: 100,
            fail_reason: None,
        }
    }
}

impl PsParams {
    /// Requests a power save state change.
    pub fn with_enabled(mut self, enabled: PowerSave) -> Self {
        self.param_type = PsParamType::State;
        self.enabled = enabled;
        self
    }

    /// Requests a listen interval change.
    pub fn with_listen_interval(mut self, interval: u32) -> Self {
        self.param_type = PsParamType::ListenInterval;
        self.listen_interval = interval;
        self
    }

    /// Requests a wakeup mode change.
    pub fn with_wakeup_mode(mut self, mode: PsWakeupMode) -> Self {
        self.param_type = PsParamType::WakeupMode;
        self.wakeup_mode = mode;
        self
    }

    /// Requests a power save mode change.
    pub fn with_mode(mut self, mode: PsMode) -> Self {
        self.param_type = PsParamType::Mode;
        self.mode = mode;
        self
    }

    /// Requests an exit strategy change.
    pub fn with_exit_strategy(mut self, strategy: PsExitStrategy) -> Self {
        self.param_type = PsParamType::ExitStrategy;
        self.exit_strategy = strategy;
        self
    }

    /// Requests an inactivity timeout change.
    pub fn with_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.param_type = PsParamType::Timeout;
        self.timeout_ms = timeout_ms;
        self
    }

    /// Checks the parameter named by `param_type` before it is sent.
    pub fn validate(&self) -> Result<()> {
        if self.param_type == PsParamType::ListenInterval
            && !(listen_interval::MIN..=listen_interval::MAX).contains(&self.listen_interval)
        {
            debug!(
                "rejecting power save request: listen interval {} out of range",
                self.listen_interval
            );
            return Err(WifiError::PowerSave(
                PsParamFailReason::ListenIntervalRangeInvalid,
            ));
        }
        Ok(())
    }

    /// Converts the driver's reply into a result.
    pub fn outcome(&self) -> Result<()> {
        match self.fail_reason {
            Some(reason) => Err(WifiError::PowerSave(reason)),
            None => Ok(()),
        }
    }

    /// Text for the driver-reported failure, if any.
    pub fn fail_description(&self) -> Option<&'static str> {
        self.fail_reason.map(PsParamFailReason::description)
    }
}
