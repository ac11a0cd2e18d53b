//! Polar (azimuth, zenith) surfaces
use crate::prelude::Error;

/// Rectangular grid over azimuth x zenith.
/// Values are stored azimuth major, zenith minor:
/// value (i, j) is `values[i * zeniths.len() + j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarSurface {
    /// Azimuth angles (degrees, clockwise from North)
    pub azimuths: Vec<f64>,
    /// Zenith angles, used as radii
    pub zeniths: Vec<f64>,
    values: Vec<f64>,
}

impl PolarSurface {
    /// Reshapes flat `values` onto the (azimuths, zeniths) grid.
    ///
    /// Typically `values` was produced by
    ///
    /// ```
    /// let azimuths = [0.0_f64, 90.0, 180.0, 270.0];
    /// let zeniths = [0.0_f64, 45.0, 90.0];
    /// let mut values = Vec::new();
    /// for azimuth in azimuths.iter() {
    ///     for zenith in zeniths.iter() {
    ///         values.push(azimuth + zenith);
    ///     }
    /// }
    /// use sbf_skyview::prelude::PolarSurface;
    /// let surface = PolarSurface::new(&values, &azimuths, &zeniths)
    ///     .unwrap();
    /// assert_eq!(surface.value(1, 2), Some(180.0));
    /// ```
    pub fn new(values: &[f64], azimuths: &[f64], zeniths: &[f64]) -> Result<Self, Error> {
        if values.len() != azimuths.len() * zeniths.len() {
            return Err(Error::ShapeMismatch {
                values: values.len(),
                azimuths: azimuths.len(),
                zeniths: zeniths.len(),
            });
        }
        if azimuths.is_empty() || zeniths.is_empty() {
            return Err(Error::DegenerateGrid);
        }
        Ok(Self {
            azimuths: azimuths.to_vec(),
            zeniths: zeniths.to_vec(),
            values: values.to_vec(),
        })
    }
    /// (azimuths, zeniths) grid dimensions
    pub fn shape(&self) -> (usize, usize) {
        (self.azimuths.len(), self.zeniths.len())
    }
    /// Value at (azimuth index, zenith index)
    pub fn value(&self, i: usize, j: usize) -> Option<f64> {
        let (n_az, n_zen) = self.shape();
        if i < n_az && j < n_zen {
            Some(self.values[i * n_zen + j])
        } else {
            None
        }
    }
    /// All values of the i-th azimuth
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        let n_zen = self.zeniths.len();
        self.values.get(i * n_zen..(i + 1) * n_zen)
    }
    /// Iterates the grid rows, azimuth first
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks(self.zeniths.len())
    }
    /// Azimuths in radians
    pub fn theta(&self) -> Vec<f64> {
        self.azimuths.iter().map(|az| az.to_radians()).collect()
    }
    /// Mesh over (azimuth, zenith): returns (theta, r), each with
    /// one row per azimuth and one column per zenith.
    pub fn mesh(&self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let theta = self
            .theta()
            .iter()
            .map(|t| vec![*t; self.zeniths.len()])
            .collect();
        let r = self.azimuths.iter().map(|_| self.zeniths.clone()).collect();
        (theta, r)
    }
    /// (min, max) values
    pub fn range(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(*v), max.max(*v))
            })
    }
    /// Quantizes every value into one of `n` filled levels, spread
    /// evenly over [Self::range]. Returns the lower bound of each
    /// value's level, in storage order.
    pub fn levels(&self, n: usize) -> Vec<f64> {
        let (min, max) = self.range();
        let n = n.max(1);
        let span = max - min;
        if !span.is_finite() || span == 0.0 {
            return vec![min; self.values.len()];
        }
        let step = span / n as f64;
        self.values
            .iter()
            .map(|v| {
                let level = (((v - min) / step).floor() as usize).min(n - 1);
                min + level as f64 * step
            })
            .collect()
    }
}
