//! Target Wake Time (802.11ax) negotiation vocabulary.

use crate::models::code::WifiCode;
use crate::types::constants::labels::UNKNOWN_ERR_CODE;

wifi_code_enum! {
    /// TWT operations.
    pub enum TwtOperation ("TWT operation") {
        /// TWT setup.
        Setup = 0 => "TWT setup",
        /// TWT teardown.
        Teardown = 1 => "TWT teardown",
    }
}

wifi_code_enum! {
    /// TWT negotiation types.
    pub enum TwtNegotiationType ("TWT negotiation type") {
        /// Individual TWT agreement.
        Individual = 0 => "TWT individual negotiation",
        /// Broadcast TWT.
        Broadcast = 1 => "TWT broadcast negotiation",
        /// Wake TBTT negotiation.
        WakeTbtt = 2 => "TWT wake TBTT negotiation",
    }
}

wifi_code_enum! {
    /// TWT setup commands, as carried in the TWT element.
    pub enum TwtSetupCmd ("TWT setup command") {
        /// Request; the AP chooses parameters.
        Request = 0 => "TWT request",
        /// Suggest; parameters can be changed by the AP.
        Suggest = 1 => "TWT suggest",
        /// Demand; parameters cannot be changed by the AP.
        Demand = 2 => "TWT demand",
        /// Grouping of TWT flows.
        Grouping = 3 => "TWT grouping",
        /// Parameters accepted by the AP.
        Accept = 4 => "TWT accept",
        /// Alternate parameters suggested by the AP.
        Alternate = 5 => "TWT alternate",
        /// Parameters dictated by the AP.
        Dictate = 6 => "TWT dictate",
        /// Parameters rejected by the AP.
        Reject = 7 => "TWT reject",
    }
}

impl TwtSetupCmd {
    /// Returns `true` for commands a requesting station sends.
    pub fn is_request(self) -> bool {
        matches!(
            self,
            Self::Request | Self::Suggest | Self::Demand | Self::Grouping
        )
    }

    /// Returns `true` for commands the responding AP sends.
    pub fn is_response(self) -> bool {
        !self.is_request()
    }
}

wifi_code_enum! {
    /// Whether a TWT setup request was answered.
    pub enum TwtSetupRespStatus ("TWT response status") {
        /// Response received.
        Received = 0 => "TWT response received",
        /// Response not received.
        NotReceived = 1 => "TWT response not received",
    }
}

wifi_code_enum! {
    /// TWT teardown status.
    pub enum TwtTeardownStatus ("TWT teardown status") {
        /// Teardown succeeded.
        Success = 0 => "TWT teardown success",
        /// Teardown failed.
        Failed = 1 => "TWT teardown failed",
    }
}

wifi_code_enum! {
    /// Reasons a TWT operation was rejected.
    pub enum TwtFailReason ("TWT failure reason") {
        /// Unspecified error.
        Unspecified = 0 => "Unspecified",
        /// Command execution failed.
        CmdExecFail = 1 => "Command Execution failed",
        /// Operation not supported.
        OperationNotSupported = 2 => "Operation not supported",
        /// Unable to get interface status.
        UnableToGetIfaceStatus = 3 => "Unable to get iface status",
        /// Device not connected to an AP.
        DeviceNotConnected = 4 => "Device not connected",
        /// Peer not HE (802.11ax) capable.
        PeerNotHeCapab = 5 => "Peer not HE capable",
        /// Peer not TWT capable.
        PeerNotTwtCapab = 6 => "Peer not TWT capable",
        /// A TWT flow is already in progress.
        OperationInProgress = 7 => "Operation already in progress",
        /// Invalid negotiated flow id.
        InvalidFlowId = 8 => "Invalid negotiated flow id",
        /// IP address not assigned or configured.
        IpNotAssigned = 9 => "IP address not assigned",
        /// Flow already exists.
        FlowAlreadyExists = 10 => "Flow already exists",
    }
}

impl TwtFailReason {
    /// Text reported for this reason by [`twt_err_code_str`].
    pub fn description(self) -> &'static str {
        twt_err_code_str(self.code() as i16)
    }
}

/// TWT error texts, indexed by failure code.
static TWT_ERR_CODES: [&str; 11] = [
    "Unspecified",
    "Command Execution failed",
    "Operation not supported",
    "Unable to get iface status",
    "Device not connected",
    "Peer not HE capable",
    "Peer not TWT capable",
    "Operation already in progress",
    "Invalid negotiated flow id",
    "IP address not assigned",
    "Flow already exists",
];

/// Returns the text for a TWT error code.
///
/// Codes come from firmware and are not trusted: negative codes and codes
/// past the end of the table yield `"<unknown>"`.
///
/// ```rust
/// use wifi_defs::twt_err_code_str;
///
/// assert_eq!(twt_err_code_str(5), "Peer not HE capable");
/// assert_eq!(twt_err_code_str(11), "<unknown>");
/// ```
pub fn twt_err_code_str(err_no: i16) -> &'static str {
    usize::try_from(err_no)
        .ok()
        .and_then(|idx| TWT_ERR_CODES.get(idx))
        .copied()
        .unwrap_or(UNKNOWN_ERR_CODE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reason_has_a_row() {
        assert_eq!(TWT_ERR_CODES.len(), TwtFailReason::count());
        for &reason in TwtFailReason::ALL {
            assert_eq!(reason.description(), reason.label());
        }
    }

    #[test]
    fn peer_not_he_capable() {
        assert_eq!(
            twt_err_code_str(TwtFailReason::PeerNotHeCapab.code() as i16),
            "Peer not HE capable"
        );
    }

    #[test]
    fn out_of_range_codes_are_unknown() {
        assert_eq!(twt_err_code_str(11), "<unknown>");
        assert_eq!(twt_err_code_str(-1), "<unknown>");
        assert_eq!(twt_err_code_str(i16::MIN), "<unknown>");
        assert_eq!(twt_err_code_str(i16::MAX), "<unknown>");
    }

    #[test]
    fn setup_command_direction() {
        let requests: Vec<_> = TwtSetupCmd::ALL
            .iter()
            .filter(|cmd| cmd.is_request())
            .collect();
        assert_eq!(requests.len(), 4);
        assert!(TwtSetupCmd::Dictate.is_response());
        assert!(!TwtSetupCmd::Grouping.is_response());
    }

    #[test]
    fn labels() {
        assert_eq!(TwtOperation::Teardown.label(), "TWT teardown");
        assert_eq!(
            TwtNegotiationType::WakeTbtt.label(),
            "TWT wake TBTT negotiation"
        );
        assert_eq!(TwtSetupCmd::Reject.to_string(), "TWT reject");
        assert_eq!(TwtSetupCmd::label_for_code(8), "UNKNOWN");
        assert_eq!(TwtTeardownStatus::Failed.code(), 1);
        assert_eq!(TwtSetupRespStatus::from_code(1), Some(TwtSetupRespStatus::NotReceived));
    }
}
