//! Conversions between channel numbers, center frequencies and bands.

use crate::models::iface::FrequencyBand;
use crate::types::constants::frequency;

/// Converts a Wi-Fi frequency in MHz to a channel number.
///
/// Supports 2.4GHz (channels 1-14), 5GHz, and 6GHz bands.
/// Returns `None` for frequencies outside known Wi-Fi bands, off the 5 MHz
/// channel grid, or that do not name a channel of their band.
pub fn channel_from_freq(mhz: u32) -> Option<u16> {
    let band = band_from_freq(mhz)?;
    let ch = match mhz {
        frequency::BAND_2_4_CH14 => 14,
        frequency::BAND_6_CH2 => 2,
        _ => {
            let offset = mhz - band_base(band);
            if offset % frequency::CHANNEL_SPACING != 0 {
                return None;
            }
            offset / frequency::CHANNEL_SPACING
        }
    };
    let ch = u16::try_from(ch).ok()?;
    // Only channels whose center is exactly `mhz`
    (freq_from_channel(band, ch) == Some(mhz)).then_some(ch)
}

/// Returns the band a center frequency belongs to.
pub fn band_from_freq(mhz: u32) -> Option<FrequencyBand> {
    match mhz {
        frequency::BAND_2_4_START..=frequency::BAND_2_4_END | frequency::BAND_2_4_CH14 => {
            Some(FrequencyBand::Band2_4Ghz)
        }
        frequency::BAND_5_START..=frequency::BAND_5_END => Some(FrequencyBand::Band5Ghz),
        frequency::BAND_6_CH2 | frequency::BAND_6_START..=frequency::BAND_6_END => {
            Some(FrequencyBand::Band6Ghz)
        }
        _ => None,
    }
}

/// Converts a channel number in `band` to its center frequency in MHz.
pub fn freq_from_channel(band: FrequencyBand, ch: u16) -> Option<u32> {
    if !band.contains_channel(ch) {
        return None;
    }
    let mhz = match (band, ch) {
        (FrequencyBand::Band2_4Ghz, 14) => frequency::BAND_2_4_CH14,
        (FrequencyBand::Band6Ghz, 2) => frequency::BAND_6_CH2,
        _ => band_base(band) + u32::from(ch) * frequency::CHANNEL_SPACING,
    };
    Some(mhz)
}

fn band_base(band: FrequencyBand) -> u32 {
    match band {
        FrequencyBand::Band2_4Ghz => frequency::BAND_2_4_BASE,
        FrequencyBand::Band5Ghz => frequency::BAND_5_BASE,
        FrequencyBand::Band6Ghz => frequency::BAND_6_BASE,
    }
}
