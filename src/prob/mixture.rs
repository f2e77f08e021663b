use rand::Rng;
use rand_distr::Distribution;

use super::GaussParams;

/// Two-component Gaussian mixture. `mix_coef` is the prior weight of the
/// first component; the labels carry no meaning of their own, so swapping
/// the components while replacing `mix_coef` by `1 - mix_coef` leaves the
/// distribution unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixtureParams {
    pub mix_coef: f64,
    pub comp1: GaussParams,
    pub comp2: GaussParams,
}

impl MixtureParams {

    pub fn new(mix_coef: f64, comp1: GaussParams, comp2: GaussParams) -> Self {
        debug_assert!((0.0..=1.0).contains(&mix_coef));
        MixtureParams { mix_coef, comp1, comp2 }
    }

    /// Mixture density: the convex combination of the component densities.
    pub fn density(&self, x: f64) -> f64 {
        self.mix_coef * self.comp1.density(x) + (1.0 - self.mix_coef) * self.comp2.density(x)
    }

}

impl Distribution<f64> for MixtureParams {

    /// One draw: select the first component with probability `mix_coef`,
    /// then draw from the selected Gaussian.
    fn sample<R>(&self, rng: &mut R) -> f64
    where
        R: Rng + ?Sized
    {
        let u: f64 = rng.gen();
        if u < self.mix_coef {
            self.comp1.sample(rng)
        } else {
            self.comp2.sample(rng)
        }
    }

}
