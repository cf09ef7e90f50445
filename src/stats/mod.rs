//! Histogram binning and Gaussian kernel density estimation
//!
//! Feeds the figure-level histogram helpers: data is binned (or smoothed)
//! here, then handed to the regular plot path as x/y columns.

use anyhow::{Result, bail};

/// Post-binning normalization applied to histogram values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// Divide all values by the given coefficient
    Factor(f64),
    /// Rescale so the tallest bin is 1
    ByMax,
}

/// Options for [`histogram`]
#[derive(Debug, Clone)]
pub struct HistogramOptions {
    /// Number of equal-width bins
    pub bins: usize,
    /// Bin range; defaults to the data range
    pub range: Option<(f64, f64)>,
    pub normalization: Option<Normalization>,
    /// Replace bin counts with a Gaussian KDE evaluated at the bin centers
    pub kde: bool,
    /// KDE bandwidth; defaults to Scott's rule
    pub kde_bandwidth: Option<f64>,
    /// Also write the raw input data next to the binned dataset
    pub dump_data: bool,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            bins: 10,
            range: None,
            normalization: None,
            kde: false,
            kde_bandwidth: None,
            dump_data: false,
        }
    }
}

/// Bin 1-D data into equal-width bins.
///
/// Returns the bin centers and the (optionally smoothed and normalized)
/// values. Values falling exactly on the upper edge are counted in the last
/// bin.
pub fn histogram(data: &[f64], options: &HistogramOptions) -> Result<(Vec<f64>, Vec<f64>)> {
    if data.is_empty() {
        bail!("Cannot histogram an empty dataset");
    }
    if options.bins == 0 {
        bail!("Histogram needs at least one bin");
    }

    let (mut lo, mut hi) = match options.range {
        Some((lo, hi)) => (lo, hi),
        None => data.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        }),
    };
    if !(lo.is_finite() && hi.is_finite()) {
        bail!("Histogram range is not finite");
    }
    if lo > hi {
        bail!("Histogram range is inverted: {} > {}", lo, hi);
    }
    if lo == hi {
        // Degenerate range, widen it around the single value
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / options.bins as f64;
    let mut counts = vec![0.0_f64; options.bins];
    for &value in data {
        if value < lo || value > hi {
            continue;
        }
        let bin = (((value - lo) / width) as usize).min(options.bins - 1);
        counts[bin] += 1.0;
    }

    let centers: Vec<f64> =
        (0..options.bins).map(|i| lo + width * (i as f64 + 0.5)).collect();

    let mut values = if options.kde {
        let bandwidth = match options.kde_bandwidth {
            Some(bw) if bw > 0.0 => bw,
            Some(bw) => bail!("KDE bandwidth must be positive, got {}", bw),
            None => scott_bandwidth(data),
        };
        gaussian_kde(data, &centers, bandwidth)
    } else {
        counts
    };

    match options.normalization {
        Some(Normalization::Factor(coeff)) => {
            if coeff == 0.0 {
                bail!("Normalization coefficient cannot be zero");
            }
            for v in &mut values {
                *v /= coeff;
            }
        }
        Some(Normalization::ByMax) => {
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            if max > 0.0 {
                for v in &mut values {
                    *v /= max;
                }
            }
        }
        None => {}
    }

    Ok((centers, values))
}

/// Scott's rule bandwidth: sigma * n^(-1/5)
fn scott_bandwidth(data: &[f64]) -> f64 {
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let variance = data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let sigma = variance.sqrt();
    if sigma > 0.0 { sigma * n.powf(-0.2) } else { 1.0 }
}

/// Evaluate a Gaussian KDE of `data` at the given points
fn gaussian_kde(data: &[f64], points: &[f64], bandwidth: f64) -> Vec<f64> {
    let n = data.len() as f64;
    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    points
        .iter()
        .map(|&p| {
            let sum: f64 =
                data.iter().map(|&v| (-0.5 * ((p - v) / bandwidth).powi(2)).exp()).sum();
            norm * sum
        })
        .collect()
}
