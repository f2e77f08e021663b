use rand::Rng;
use rand_distr::Distribution;
use statrs::distribution::{Beta, ContinuousCDF, Gamma, Normal};

use super::{GaussParams, MixtureParams};
use crate::Error;

/// Generative prior over model parameters: component means are drawn from a
/// Gaussian, component precisions from a Gamma (converted to standard
/// deviations via stddev = 1/sqrt(precision)), and the mixing coefficient
/// from a Beta. The reference configuration uses Normal(0, 4),
/// Gamma(shape 1/2, rate 2) and the Jeffreys prior Beta(1/2, 1/2).
///
/// Both the samplers and the quantile (inverse CDF) sources are built once
/// at construction, so every draw and every grid tabulation sees the same
/// hyperparameters. All sampling goes through an explicitly passed generator;
/// the prior holds no random state of its own, and callers that need
/// independent streams (tests, future threading) just pass independent
/// generators.
#[derive(Debug, Clone)]
pub struct Prior {
    mean_sampler: rand_distr::Normal<f64>,
    prec_sampler: rand_distr::Gamma<f64>,
    mix_sampler: rand_distr::Beta<f64>,
    mean_quantiles: Normal,
    prec_quantiles: Gamma,
    mix_quantiles: Beta,
}

impl Prior {

    /// `mean_prior` carries the location and scale of the Gaussian prior
    /// over component means. The precision prior follows the shape/rate
    /// convention; rand_distr parameterizes Gamma by scale, so the rate is
    /// inverted once here.
    pub fn new(
        mean_prior: GaussParams,
        prec_shape: f64,
        prec_rate: f64,
        mix_a: f64,
        mix_b: f64
    ) -> Result<Self, Error> {
        Ok(Prior {
            mean_sampler: rand_distr::Normal::new(mean_prior.mean, mean_prior.stddev)
                .map_err(|_| Error::InvalidHyperparameters)?,
            prec_sampler: rand_distr::Gamma::new(prec_shape, 1.0 / prec_rate)
                .map_err(|_| Error::InvalidHyperparameters)?,
            mix_sampler: rand_distr::Beta::new(mix_a, mix_b)
                .map_err(|_| Error::InvalidHyperparameters)?,
            mean_quantiles: Normal::new(mean_prior.mean, mean_prior.stddev)
                .map_err(|_| Error::InvalidHyperparameters)?,
            prec_quantiles: Gamma::new(prec_shape, prec_rate)
                .map_err(|_| Error::InvalidHyperparameters)?,
            mix_quantiles: Beta::new(mix_a, mix_b)
                .map_err(|_| Error::InvalidHyperparameters)?,
        })
    }

    /// Draw a mean and a precision from the prior, returned as the Gaussian
    /// parameter pair they induce. A precision draw that collapses to zero
    /// is propagated as a fault rather than silently clamped.
    pub fn sample_gauss<R>(&self, rng: &mut R) -> Result<GaussParams, Error>
    where
        R: Rng + ?Sized
    {
        let mean = self.mean_sampler.sample(rng);
        let precision = self.prec_sampler.sample(rng);
        GaussParams::from_precision(mean, precision)
    }

    /// Draw a mixing coefficient and two independent component parameter
    /// pairs from the prior.
    pub fn sample_mixture<R>(&self, rng: &mut R) -> Result<MixtureParams, Error>
    where
        R: Rng + ?Sized
    {
        let mix_coef = self.mix_sampler.sample(rng);
        let comp1 = self.sample_gauss(rng)?;
        let comp2 = self.sample_gauss(rng)?;
        Ok(MixtureParams::new(mix_coef, comp1, comp2))
    }

    /// Inverse CDF of the prior over component means. p must lie in [0, 1].
    pub fn mean_quantile(&self, p: f64) -> f64 {
        self.mean_quantiles.inverse_cdf(p)
    }

    /// Inverse CDF of the precision prior. p = 0 maps to the distribution's
    /// lower bound, precision 0.
    pub fn precision_quantile(&self, p: f64) -> f64 {
        self.prec_quantiles.inverse_cdf(p)
    }

    /// Inverse CDF of the mixing-coefficient prior.
    pub fn mix_quantile(&self, p: f64) -> f64 {
        self.mix_quantiles.inverse_cdf(p)
    }

}

impl Default for Prior {

    fn default() -> Self {
        Prior::new(GaussParams::new(0.0, 4.0), 0.5, 2.0, 0.5, 0.5)
            .expect("reference hyperparameters are valid")
    }

}
