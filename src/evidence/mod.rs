//! The four marginal-likelihood estimators. Each approximates the integral
//! of the dataset likelihood weighted by the prior, either by a Riemann sum
//! over the precomputed quantile grids or by plain Monte Carlo over fresh
//! prior draws. Sampling from the prior itself makes the unweighted average
//! an unbiased estimate; no importance correction is needed.
//!
//! Per-observation densities are accumulated as products in the linear
//! domain. For datasets much larger than the reference size those products
//! can underflow to zero, silently biasing the sums low for extreme
//! parameter cells; this matches the reference numerical behavior and is
//! kept as the comparison baseline rather than moved to log-domain
//! accumulation.

use nalgebra::DVector;
use rand::Rng;

use crate::prob::{stddev_of_precision, GaussParams, Prior};
use crate::quad::QuantileGrid;
use crate::Error;

/// Prior draws per Monte Carlo estimate in the reference configuration.
pub const SAMPLE_REPEAT_NUM: usize = 2_000_000;

/// Flattened cartesian product of the mean and precision grids: every
/// Gaussian parameter pair the quadrature estimators visit. The precision
/// grid's p = 0 level carries precision 0, whose infinite scale makes every
/// density under it zero; the cell then contributes nothing to the sums.
fn component_grid(grid: &QuantileGrid) -> Vec<GaussParams> {
    let mut comps = Vec::with_capacity(grid.means.len() * grid.precisions.len());
    for &mean in &grid.means {
        for &precision in &grid.precisions {
            comps.push(GaussParams { mean, stddev: stddev_of_precision(precision) });
        }
    }
    comps
}

/// Riemann-sum approximation of the pooled-model evidence: the dataset
/// likelihood averaged over every (mean, precision) cell of the quantile
/// grid.
pub fn one_component_by_quadrature(data: &DVector<f64>, grid: &QuantileGrid) -> f64 {
    let comps = component_grid(grid);
    let total: f64 = comps
        .iter()
        .map(|params| data.iter().map(|&x| params.density(x)).product::<f64>())
        .sum();
    total / comps.len() as f64
}

/// Riemann sum over the five-dimensional prior grid (mean and precision for
/// each component, plus the mixing coefficient). The five hand-nested loops
/// of the direct rendering collapse to a cartesian walk over the flattened
/// component grid paired with the mixing grid. Per-observation component
/// densities are tabulated first, so each of the 20x20x10x10x40 cells
/// combines two rows of the table instead of re-evaluating the Gaussian pdf.
pub fn two_component_by_quadrature(data: &DVector<f64>, grid: &QuantileGrid) -> f64 {
    let comps = component_grid(grid);
    let densities: Vec<Vec<f64>> = comps
        .iter()
        .map(|params| data.iter().map(|&x| params.density(x)).collect())
        .collect();
    let mut total = 0.0;
    for dens1 in &densities {
        for dens2 in &densities {
            for &mix_coef in &grid.mix_coefs {
                let mut cell = 1.0;
                for (d1, d2) in dens1.iter().zip(dens2.iter()) {
                    cell *= mix_coef * d1 + (1.0 - mix_coef) * d2;
                }
                total += cell;
            }
        }
    }
    total / (densities.len() * densities.len() * grid.mix_coefs.len()) as f64
}

/// Monte Carlo estimate of the pooled-model evidence: the dataset likelihood
/// averaged over `repeats` parameter draws from the prior.
pub fn one_component_by_sampling<R>(
    data: &DVector<f64>,
    prior: &Prior,
    repeats: usize,
    rng: &mut R
) -> Result<f64, Error>
where
    R: Rng + ?Sized
{
    let mut total = 0.0;
    for _ in 0..repeats {
        let params = prior.sample_gauss(rng)?;
        total += data.iter().map(|&x| params.density(x)).product::<f64>();
    }
    Ok(total / repeats as f64)
}

/// Monte Carlo estimate of the differ-model evidence, averaging mixture
/// likelihoods over `repeats` mixture parameter draws from the prior.
pub fn two_component_by_sampling<R>(
    data: &DVector<f64>,
    prior: &Prior,
    repeats: usize,
    rng: &mut R
) -> Result<f64, Error>
where
    R: Rng + ?Sized
{
    let mut total = 0.0;
    for _ in 0..repeats {
        let params = prior.sample_mixture(rng)?;
        total += data.iter().map(|&x| params.density(x)).product::<f64>();
    }
    Ok(total / repeats as f64)
}
