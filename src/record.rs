//! ChannelStatus records and validity policy
use serde::Deserialize;

use crate::constants::ELEVATION_DNU;

/// One `ChannelStatus_1` row: a (time, satellite, receiver channel)
/// observation, as written by `sbf2stf`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ChannelStatusRecord {
    /// GPS week number (WNc)
    #[serde(rename = "CHST_WNC", alias = "WNc")]
    pub week: u32,
    /// Time of week, in seconds
    #[serde(rename = "CHST_TOW", alias = "TOW")]
    pub tow: f64,
    /// SBF satellite identifier
    #[serde(rename = "CHST_SVID", alias = "SVID")]
    pub svid: u16,
    /// Elevation angle in degrees. May be the Do-Not-Use value.
    #[serde(rename = "CHST_Elevation", alias = "Elevation")]
    pub elevation: f64,
    /// Azimuth angle in degrees, clockwise from North
    #[serde(rename = "CHST_Azimuth", alias = "Azimuth")]
    pub azimuth: f64,
}

impl ChannelStatusRecord {
    pub fn new(week: u32, tow: f64, svid: u16, elevation: f64, azimuth: f64) -> Self {
        Self {
            week,
            tow,
            svid,
            elevation,
            azimuth,
        }
    }
}

/// Defines which elevation angles describe a real observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidityPolicy {
    /// Sentinel the receiver writes when elevation is not known
    pub do_not_use: f64,
    /// Lowest acceptable elevation (degrees)
    pub min_elevation: f64,
    /// Highest acceptable elevation (degrees)
    pub max_elevation: f64,
}

impl Default for ValidityPolicy {
    fn default() -> Self {
        Self {
            do_not_use: ELEVATION_DNU,
            min_elevation: -90.0,
            max_elevation: 90.0,
        }
    }
}

impl ValidityPolicy {
    /// Restricts the policy to elevations above given mask (degrees)
    pub fn with_elevation_mask(&self, mask: f64) -> Self {
        let mut s = *self;
        s.min_elevation = mask;
        s
    }
    /// Returns true if this elevation angle is usable
    pub fn is_valid(&self, elevation: f64) -> bool {
        elevation.is_finite()
            && elevation != self.do_not_use
            && elevation >= self.min_elevation
            && elevation <= self.max_elevation
    }
}

/// Marks rows with a usable elevation. Output has the same length
/// and order as `records`.
pub fn filter_valid(records: &[ChannelStatusRecord], policy: &ValidityPolicy) -> Vec<bool> {
    records
        .iter()
        .map(|rec| policy.is_valid(rec.elevation))
        .collect()
}

/// Retains rows marked valid, preserving their relative order.
/// Rows beyond the mask length are dropped.
pub fn valid_subset(records: &[ChannelStatusRecord], mask: &[bool]) -> Vec<ChannelStatusRecord> {
    records
        .iter()
        .zip(mask.iter())
        .filter_map(|(rec, valid)| if *valid { Some(*rec) } else { None })
        .collect()
}
