//! SBF and rendition constants

/// ChannelStatus Do-Not-Use elevation value (i1 field)
pub(crate) const ELEVATION_DNU: f64 = -128.0;

pub(crate) const SECONDS_PER_HOUR: f64 = 3600.0;

pub(crate) const SECONDS_PER_DAY: f64 = 86400.0;

/// Number of filled levels of the polar contour
pub(crate) const CONTOUR_LEVELS: usize = 30;

/// Default conversion program
pub(crate) const SBF2STF: &str = "sbf2stf";

/// Environment variable overriding the conversion program
pub(crate) const SBF2STF_ENV: &str = "SBF2STF";
