#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::type_complexity)]

/*
 * sbf-skyview is shipped under both Apache-2.0 and MIT License.
 */

//! Septentrio Binary Format (SBF) sky-view toolkit.
//!
//! The SBF log is converted to a tabular text format (STF) by the
//! external `sbf2stf` program. This crate parses the `ChannelStatus_1`
//! table, extracts per satellite elevation/azimuth tracks and renders
//! them on a polar sky-view. A generic polar contour renderer is also
//! provided.

extern crate gnss_rs as gnss;

#[macro_use]
extern crate log;

pub mod converter;
pub mod gnss_time;
pub mod plot;
pub mod polar;
pub mod record;
pub mod stf;
pub mod sv;
pub mod track;

mod constants;
mod error;

#[cfg(test)]
mod tests;

/// Package to include all basic structures
pub mod prelude {
    pub use crate::{
        converter::{Converter, Sbf2Stf},
        error::Error,
        gnss_time::{date_string, hour_of_day, utc_from_week_tow, DateFormat},
        plot::{render_polar_contour, skyview, Figure, Plot},
        polar::PolarSurface,
        record::{filter_valid, valid_subset, ChannelStatusRecord, ValidityPolicy},
        stf::{parse_channel_status, StfBlock},
        sv::svid_to_sv,
        track::{
            build_all_tracks, distinct_satellites, track_for_satellite, HourlyMatch,
            SatelliteTrack,
        },
    };
    // pub re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Epoch, TimeScale};
}
