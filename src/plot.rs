//! Plotly rendition
use std::path::Path;

use plotly::{
    common::{ColorBar, ColorScale, ColorScalePalette, Marker, Mode, Position, Title},
    Layout, Plot as Plotly, ScatterPolar, Trace,
};

use crate::{
    constants::CONTOUR_LEVELS,
    gnss_time::hour_of_day,
    polar::PolarSurface,
    prelude::Error,
    sv::svid_label,
    track::SatelliteTrack,
};

/// Plotly polar axes start East and turn counter clockwise.
/// Converts a compass angle (North up, clockwise) to that convention.
fn compass_to_polar(azimuth: f64) -> f64 {
    (90.0 - azimuth).rem_euclid(360.0)
}

/// Hourly marker annotation
fn hour_label(tow: f64) -> String {
    format!("{}h", hour_of_day(tow))
}

pub struct Plot {
    plotly: Plotly,
    plot_id: String,
    nb_traces: usize,
}

impl Plot {
    /// Adds one [Trace] to self
    pub fn add_trace(&mut self, t: Box<dyn Trace>) {
        self.plotly.add_trace(t);
        self.nb_traces += 1;
    }
    /// Number of traces stacked so far
    pub fn nb_traces(&self) -> usize {
        self.nb_traces
    }
    pub fn plot_id(&self) -> &str {
        &self.plot_id
    }
    /// Builds new Polar plot
    pub fn new_polar(plot_id: &str, title: &str, show_legend: bool) -> Self {
        let layout = Layout::new()
            .title(Title::with_text(title))
            .show_legend(show_legend)
            .auto_size(true);
        let mut plotly = Plotly::new();
        plotly.set_layout(layout);
        Self {
            plotly,
            plot_id: plot_id.to_string(),
            nb_traces: 0,
        }
    }
    /// Builds new Skyplot
    pub fn sky_plot(plot_id: &str, title: &str) -> Self {
        Self::new_polar(plot_id, title, true)
    }
    /// Renders self as a standalone HTML page
    pub fn to_html(&self) -> String {
        self.plotly.to_html()
    }
    /// Renders self into given file
    pub fn write_html<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        std::fs::write(path, self.to_html())?;
        Ok(())
    }
    /// Opens self in the default web browser
    pub fn show(&self) {
        self.plotly.show();
    }
}

/// Outcome of [render_polar_contour]
pub struct Figure {
    /// Reshaped (azimuth, zenith) grid
    pub surface: PolarSurface,
    pub plot: Plot,
}

/// Polar filled contour of `values`, North up, azimuth turning clockwise.
/// `values` must be `azimuths.len() * zeniths.len()` long, stored
/// azimuth major (all zeniths of the first azimuth, then the second azimuth..).
///
/// Only the data is rotated: angular tick labels keep plotly's convention
/// (East = 0°, counter clockwise) and are not compass bearings.
/// North is up but labeled 90°.
pub fn render_polar_contour(
    values: &[f64],
    azimuths: &[f64],
    zeniths: &[f64],
) -> Result<Figure, Error> {
    let surface = PolarSurface::new(values, azimuths, zeniths)?;
    let (theta, r) = surface.mesh();

    let theta = theta
        .iter()
        .flatten()
        .map(|t| compass_to_polar(t.to_degrees()))
        .collect::<Vec<_>>();
    let r = r.into_iter().flatten().collect::<Vec<_>>();

    let (min, max) = surface.range();
    let levels = surface.levels(CONTOUR_LEVELS);

    let trace = ScatterPolar::new(theta, r)
        .mode(Mode::Markers)
        .show_legend(false)
        .marker(
            Marker::new()
                .size(12)
                .color_array(levels)
                .color_scale(ColorScale::Palette(ColorScalePalette::YlOrRd))
                .cmin(min)
                .cmax(max)
                .show_scale(true)
                .color_bar(ColorBar::new().title(Title::with_text("Pixel reflectance"))),
        );

    let mut plot = Plot::new_polar("polar-contour", "Polar contour", false);
    plot.add_trace(trace);

    Ok(Figure { surface, plot })
}

/// Sky-view of all tracks: radius is the zenith angle (horizon on the rim),
/// hourly samples are marked and labeled with their GPST hour of day.
///
/// Like [render_polar_contour], angular tick labels are plotly's
/// (East = 0°, counter clockwise), not compass bearings.
pub fn skyview(tracks: &[SatelliteTrack], date: &str) -> Plot {
    let mut plot = Plot::sky_plot("skyview", &format!("Skyview {}", date));

    for track in tracks.iter().filter(|track| !track.is_empty()) {
        let label = svid_label(track.svid);

        let theta = track
            .azimuth
            .iter()
            .map(|az| compass_to_polar(*az))
            .collect::<Vec<_>>();
        let rho = track
            .elevation
            .iter()
            .map(|el| 90.0 - el)
            .collect::<Vec<_>>();
        let txt = track
            .samples()
            .map(|(tow, el, az)| format!("{} tow={} el={:.1}° az={:.1}°", label, tow, el, az))
            .collect::<Vec<_>>();

        let trace = ScatterPolar::new(theta, rho)
            .mode(Mode::Lines)
            .web_gl_mode(true)
            .connect_gaps(false)
            .hover_text_array(txt)
            .legend_group(&label)
            .name(&label);
        plot.add_trace(trace);

        if track.hourly_len() == 0 {
            continue;
        }

        let theta = track
            .hourly_azimuth
            .iter()
            .map(|az| compass_to_polar(*az))
            .collect::<Vec<_>>();
        let rho = track
            .hourly_elevation
            .iter()
            .map(|el| 90.0 - el)
            .collect::<Vec<_>>();
        let hours = track
            .hourly_tow
            .iter()
            .map(|tow| hour_label(*tow))
            .collect::<Vec<_>>();

        let trace = ScatterPolar::new(theta, rho)
            .mode(Mode::MarkersText)
            .text_array(hours)
            .text_position(Position::TopCenter)
            .marker(Marker::new().size(6))
            .show_legend(false)
            .legend_group(&label)
            .name(&format!("{} (hourly)", label));
        plot.add_trace(trace);
    }

    plot
}
