//! Shared contract for the numeric Wi-Fi vocabularies.
//!
//! Every enumeration in this crate is a closed set of members with a stable
//! numeric code and a stable human-readable label. Codes arriving from the
//! outside (firmware events, driver replies) are untrusted, so conversion
//! from a raw code is always fallible, while conversion from a member to its
//! label is total.

use crate::types::constants::labels::UNKNOWN_LABEL;

/// A closed Wi-Fi enumeration with stable codes and labels.
///
/// Implementations are generated by the crate-internal `wifi_code_enum!`
/// macro; the provided methods derive the sentinel concepts (`MAX`,
/// "unknown", count) from [`ALL`](WifiCode::ALL) instead of hidden marker
/// members.
///
/// # Example
///
/// ```rust
/// use wifi_defs::{SecurityType, WifiCode};
///
/// assert_eq!(SecurityType::SaeH2e.label(), "WPA3-SAE-H2E");
/// assert_eq!(SecurityType::from_code(4), Some(SecurityType::SaeH2e));
/// assert_eq!(SecurityType::label_for_code(200), "UNKNOWN");
/// assert_eq!(SecurityType::unknown_code(), SecurityType::MAX.code() + 1);
/// ```
pub trait WifiCode: Copy + Eq + Sized + 'static {
    /// Short name of the vocabulary, used in error messages.
    const KIND: &'static str;

    /// Every member, in ascending code order.
    const ALL: &'static [Self];

    /// The highest real member.
    const MAX: Self;

    /// Returns the numeric code of this member.
    fn code(self) -> u32;

    /// Returns the human-readable label of this member.
    fn label(self) -> &'static str;

    /// Looks up the member carrying `code`, if any.
    fn from_code(code: u32) -> Option<Self>;

    /// Looks up a member by its label, ignoring ASCII case and surrounding
    /// whitespace.
    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.label().eq_ignore_ascii_case(label))
    }

    /// Number of real members.
    fn count() -> usize {
        Self::ALL.len()
    }

    /// The first code past [`MAX`](WifiCode::MAX).
    ///
    /// Callers use it to represent "not yet determined" without picking a
    /// magic number of their own; it never names a real member.
    fn unknown_code() -> u32 {
        Self::MAX.code() + 1
    }

    /// Returns `true` if `code` names a real member.
    fn is_valid_code(code: u32) -> bool {
        Self::from_code(code).is_some()
    }

    /// Returns the label for `code`, or `"UNKNOWN"` for codes outside the
    /// vocabulary.
    fn label_for_code(code: u32) -> &'static str {
        Self::from_code(code).map_or(UNKNOWN_LABEL, Self::label)
    }
}

/// Declares a Wi-Fi enumeration and its [`WifiCode`] plumbing.
///
/// Generates the `#[repr(u8)]` enum with explicit discriminants plus
/// `WifiCode`, `Display`, `FromStr`, `TryFrom<u32>` and `From<Self> for u32`.
/// Members must be listed in ascending code order.
macro_rules! wifi_code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal => $label:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $code,
            )+
        }

        impl $crate::models::code::WifiCode for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const MAX: Self = Self::ALL[Self::ALL.len() - 1];

            fn code(self) -> u32 {
                self as u32
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            fn from_code(code: u32) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad($crate::models::code::WifiCode::label(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::models::error::WifiError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::models::code::WifiCode>::from_label(s).ok_or_else(|| {
                    $crate::models::error::WifiError::UnknownLabel {
                        kind: $kind,
                        label: s.to_owned(),
                    }
                })
            }
        }

        impl ::std::convert::TryFrom<u32> for $name {
            type Error = $crate::models::error::WifiError;

            fn try_from(code: u32) -> ::std::result::Result<Self, Self::Error> {
                <Self as $crate::models::code::WifiCode>::from_code(code)
                    .ok_or($crate::models::error::WifiError::UnknownCode { kind: $kind, code })
            }
        }

        impl ::std::convert::From<$name> for u32 {
            fn from(value: $name) -> u32 {
                $crate::models::code::WifiCode::code(value)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    wifi_code_enum! {
        /// Sparse vocabulary used to exercise the macro.
        enum Sample ("sample") {
            /// First.
            Low = 0 => "Low",
            /// Second.
            Mid = 7 => "Mid value",
            /// Last.
            High = 9 => "HIGH",
        }
    }

    #[test]
    fn max_is_last_member() {
        assert_eq!(Sample::MAX, Sample::High);
        assert_eq!(Sample::count(), 3);
    }

    #[test]
    fn unknown_code_follows_max() {
        assert_eq!(Sample::unknown_code(), 10);
        assert!(!Sample::is_valid_code(Sample::unknown_code()));
    }

    #[test]
    fn sparse_codes_resolve() {
        assert_eq!(Sample::from_code(7), Some(Sample::Mid));
        assert_eq!(Sample::from_code(1), None);
        assert_eq!(Sample::label_for_code(8), "UNKNOWN");
    }

    #[test]
    fn labels_match_case_insensitively() {
        assert_eq!(Sample::from_label("high"), Some(Sample::High));
        assert_eq!(Sample::from_label("  mid VALUE "), Some(Sample::Mid));
        assert_eq!(Sample::from_label("nope"), None);
    }

    #[test]
    fn from_str_and_try_from_report_kind() {
        let err = "nope".parse::<Sample>().unwrap_err();
        assert_eq!(err.to_string(), "unknown sample label: nope");

        let err = Sample::try_from(3).unwrap_err();
        assert_eq!(err.to_string(), "unknown sample code: 3");
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Sample::Mid.to_string(), "Mid value");
        assert_eq!(u32::from(Sample::High), 9);
    }
}
