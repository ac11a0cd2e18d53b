//! Per satellite elevation / azimuth tracks
use itertools::Itertools;

use crate::{constants::SECONDS_PER_HOUR, record::ChannelStatusRecord};

/// Selects the "hourly" samples of a track
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum HourlyMatch {
    /// `tow % 3600 == 0`, strictly
    #[default]
    Exact,
    /// Distance to the closest full hour does not exceed given seconds
    Tolerance(f64),
}

impl HourlyMatch {
    /// Returns true if this time of week (seconds) is considered a full hour
    pub fn matches(&self, tow: f64) -> bool {
        let rem = tow % SECONDS_PER_HOUR;
        match self {
            Self::Exact => rem == 0.0,
            Self::Tolerance(dt) => {
                let rem = rem.abs();
                rem.min(SECONDS_PER_HOUR - rem) <= dt.abs()
            },
        }
    }
}

/// Angles of one satellite through time.
/// `tow`, `elevation` and `azimuth` are index aligned,
/// and so are the three `hourly_` sequences.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SatelliteTrack {
    /// SBF satellite identifier
    pub svid: u16,
    /// Time of week (seconds)
    pub tow: Vec<f64>,
    /// Elevation (degrees)
    pub elevation: Vec<f64>,
    /// Azimuth (degrees)
    pub azimuth: Vec<f64>,
    pub hourly_tow: Vec<f64>,
    pub hourly_elevation: Vec<f64>,
    pub hourly_azimuth: Vec<f64>,
}

impl SatelliteTrack {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.tow.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tow.is_empty()
    }
    /// Number of hourly samples
    pub fn hourly_len(&self) -> usize {
        self.hourly_tow.len()
    }
    /// Iterates (tow, elevation, azimuth) triplets
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.tow
            .iter()
            .zip(self.elevation.iter())
            .zip(self.azimuth.iter())
            .map(|((t, e), a)| (*t, *e, *a))
    }
    /// Iterates hourly (tow, elevation, azimuth) triplets
    pub fn hourly_samples(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.hourly_tow
            .iter()
            .zip(self.hourly_elevation.iter())
            .zip(self.hourly_azimuth.iter())
            .map(|((t, e), a)| (*t, *e, *a))
    }
    fn push(&mut self, rec: &ChannelStatusRecord) {
        self.tow.push(rec.tow);
        self.elevation.push(rec.elevation);
        self.azimuth.push(rec.azimuth);
    }
    fn push_hourly(&mut self, rec: &ChannelStatusRecord) {
        self.hourly_tow.push(rec.tow);
        self.hourly_elevation.push(rec.elevation);
        self.hourly_azimuth.push(rec.azimuth);
    }
}

/// Satellite identifiers present in `records`, in first seen order.
pub fn distinct_satellites(records: &[ChannelStatusRecord]) -> Vec<u16> {
    records.iter().map(|rec| rec.svid).unique().collect()
}

/// Extracts the track of `svid`. An unknown `svid` gives an empty track.
pub fn track_for_satellite(
    svid: u16,
    records: &[ChannelStatusRecord],
    hourly: HourlyMatch,
) -> SatelliteTrack {
    let mut track = SatelliteTrack {
        svid,
        ..Default::default()
    };
    for rec in records.iter().filter(|rec| rec.svid == svid) {
        track.push(rec);
        if hourly.matches(rec.tow) {
            track.push_hourly(rec);
        }
    }
    track
}

/// Extracts one track per identifier, preserving `svids` order.
pub fn build_all_tracks(
    svids: &[u16],
    records: &[ChannelStatusRecord],
    hourly: HourlyMatch,
) -> Vec<SatelliteTrack> {
    svids
        .iter()
        .map(|svid| {
            let track = track_for_satellite(*svid, records, hourly);
            trace!(
                "svid={} - {} samples, {} hourly",
                svid,
                track.len(),
                track.hourly_len()
            );
            track
        })
        .collect()
}
