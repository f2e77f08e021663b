use rand::Rng;
pub use rand_distr::Distribution;

use crate::Error;

/// Location/scale pair identifying one Gaussian component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussParams {
    pub mean: f64,
    pub stddev: f64,
}

impl GaussParams {

    pub fn new(mean: f64, stddev: f64) -> Self {
        debug_assert!(stddev > 0.0, "stddev must be strictly positive");
        GaussParams { mean, stddev }
    }

    /// Builds the parameter pair from a precision (inverse variance) draw,
    /// which is how the prior parameterizes dispersion. A non-positive
    /// precision has no valid standard deviation and is rejected.
    pub fn from_precision(mean: f64, precision: f64) -> Result<Self, Error> {
        if precision <= 0.0 {
            return Err(Error::DegeneratePrecision(precision));
        }
        Ok(GaussParams::new(mean, stddev_of_precision(precision)))
    }

    /// Gaussian probability density evaluated at x.
    pub fn density(&self, x: f64) -> f64 {
        let z = (x - self.mean) / self.stddev;
        (-0.5 * z * z).exp() / (self.stddev * (2.0 * std::f64::consts::PI).sqrt())
    }

}

/// stddev = 1/sqrt(precision). The quadrature grid feeds precision 0 through
/// here on purpose: the infinite scale evaluates to zero density, so the
/// boundary cell contributes nothing to the Riemann sum.
pub fn stddev_of_precision(precision: f64) -> f64 {
    1.0 / precision.sqrt()
}

impl rand_distr::Distribution<f64> for GaussParams {

    fn sample<R>(&self, rng: &mut R) -> f64
    where
        R: Rng + ?Sized
    {
        let z: f64 = rng.sample(rand_distr::StandardNormal);
        z * self.stddev + self.mean
    }

}
