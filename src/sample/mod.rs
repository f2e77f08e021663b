use nalgebra::DVector;
use rand::Rng;
use rand_distr::Distribution;

use crate::prob::{GaussParams, MixtureParams};

/// Observations per synthetic dataset in the reference configuration.
pub const DATA_N: usize = 40;

/// n independent draws from a single Gaussian component. Each call builds a
/// fresh vector owned by the caller; nothing is accumulated across calls.
pub fn generate_one_component<R>(params: &GaussParams, n: usize, rng: &mut R) -> DVector<f64>
where
    R: Rng + ?Sized
{
    DVector::from_iterator(n, (0..n).map(|_| params.sample(rng)))
}

/// n independent draws from the two-component mixture: each observation
/// selects a component with probability `mix_coef`, then draws from it.
pub fn generate_two_component<R>(params: &MixtureParams, n: usize, rng: &mut R) -> DVector<f64>
where
    R: Rng + ?Sized
{
    DVector::from_iterator(n, (0..n).map(|_| params.sample(rng)))
}

pub fn sample_mean(data: &DVector<f64>) -> f64 {
    data.mean()
}

/// Population variance (n divisor), matching the per-trial summary output.
pub fn sample_variance(data: &DVector<f64>) -> f64 {
    data.variance()
}
