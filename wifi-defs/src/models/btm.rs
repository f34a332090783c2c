//! 802.11v BSS transition management codes.

wifi_code_enum! {
    /// IEEE 802.11v BSS transition management query reasons.
    ///
    /// Codes are wire values from IEEE Std 802.11v-2011, Table 7-43x
    /// (Transition and Transition Query reasons).
    pub enum BtmQueryReason ("BTM query reason") {
        /// Unspecified.
        Unspecified = 0 => "Unspecified",
        /// Low RSSI.
        LowRssi = 16 => "Low RSSI",
        /// Leaving ESS.
        LeavingEss = 20 => "Leaving ESS",
    }
}
