//! Polar contour rendition of a synthetic surface:
//! value is the zenith angle itself, so levels draw concentric rings.
use sbf_skyview::prelude::*;

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

pub fn main() -> Result<(), Error> {
    env_logger::init();

    let azimuths = linspace(0.0, 360.0, 13);
    let zeniths = linspace(0.0, 90.0, 15);

    println!("azimuths = {:?}", azimuths);
    println!("zeniths = {:?}", zeniths);

    let mut values = Vec::with_capacity(azimuths.len() * zeniths.len());
    for _ in azimuths.iter() {
        for zenith in zeniths.iter() {
            values.push(*zenith);
        }
    }

    let figure = render_polar_contour(&values, &azimuths, &zeniths)?;
    figure.plot.write_html("plotPolarContour.html")?;
    println!("plotPolarContour.html generated");
    Ok(())
}
