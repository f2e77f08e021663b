use crate::prob::Prior;

/// Tabulated quantiles of the prior over component means.
pub const GAUSS_GRID_N: usize = 20;

/// Tabulated quantiles of the precision prior.
pub const GAMMA_GRID_N: usize = 10;

/// Tabulated quantiles of the mixing-coefficient prior.
pub const JBETA_GRID_N: usize = 40;

/// Discretized inverse CDFs of the three priors, evaluated at fixed
/// probability levels. The grids depend only on the prior hyperparameters,
/// never on observed data, so one precomputation at startup serves every
/// trial.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileGrid {

    /// Candidate component means, at levels (i+1)/(N+1). The open levels
    /// stay clear of the unbounded Gaussian tails at p = 0 and p = 1.
    pub means: Vec<f64>,

    /// Candidate precisions, at levels i/N. Level 0 maps to precision 0,
    /// which the density evaluator turns into a zero-density cell.
    pub precisions: Vec<f64>,

    /// Candidate mixing coefficients over the lower symmetric half of the
    /// Beta prior, at levels i/(2N). Component labels are arbitrary, so
    /// swapping them maps the untabulated upper half onto these cells;
    /// averaging over the half grid already renders the full prior mass.
    pub mix_coefs: Vec<f64>,

}

impl QuantileGrid {

    /// Tabulates all three grids. Idempotent: the same prior yields
    /// bit-identical grids on every call.
    pub fn precompute(prior: &Prior) -> Self {
        let means = (0..GAUSS_GRID_N)
            .map(|i| prior.mean_quantile((i + 1) as f64 / (GAUSS_GRID_N + 1) as f64))
            .collect();
        let precisions = (0..GAMMA_GRID_N)
            .map(|i| prior.precision_quantile(i as f64 / GAMMA_GRID_N as f64))
            .collect();
        let mix_coefs = (0..JBETA_GRID_N)
            .map(|i| prior.mix_quantile(0.5 * i as f64 / JBETA_GRID_N as f64))
            .collect();
        QuantileGrid { means, precisions, mix_coefs }
    }

}
