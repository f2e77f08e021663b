use std::fmt;

use indicatif::{ProgressBar, ProgressStyle};
use nalgebra::DVector;
use rand::Rng;

use crate::evidence;
use crate::prob::Prior;
use crate::quad::QuantileGrid;
use crate::sample::{self, generate_one_component, generate_two_component, sample_mean, sample_variance};
use crate::Error;

/// Run-time knobs of the experiment. `Default` is the reference
/// configuration; tests shrink the dataset size and Monte Carlo repeats to
/// keep debug builds fast.
#[derive(Debug, Clone, Copy)]
pub struct TrialConfig {

    /// Datasets generated per model.
    pub datasets_n: usize,

    /// Observations per dataset.
    pub data_n: usize,

    /// Prior draws per Monte Carlo evidence estimate.
    pub mc_repeats: usize,

    /// Draw a progress bar and per-trial report lines on the console.
    pub report: bool,

}

impl Default for TrialConfig {

    fn default() -> Self {
        TrialConfig {
            datasets_n: 10,
            data_n: sample::DATA_N,
            mc_repeats: evidence::SAMPLE_REPEAT_NUM,
            report: true,
        }
    }

}

/// The four evidence estimates computed for one dataset.
#[derive(Debug, Clone, Copy)]
pub struct TrialEvidence {
    pub pooled_sampling: f64,
    pub differ_sampling: f64,
    pub pooled_quadrature: f64,
    pub differ_quadrature: f64,
}

impl TrialEvidence {

    /// Strict inequality: a tie favors neither model.
    pub fn sampling_favors_pooled(&self) -> bool {
        self.pooled_sampling > self.differ_sampling
    }

    pub fn quadrature_favors_pooled(&self) -> bool {
        self.pooled_quadrature > self.differ_quadrature
    }

}

/// How often each estimator favored the pooled model, split by which model
/// actually generated the data. Favoring pooled is correct on
/// pooled-generated data and incorrect on mixture-generated data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub datasets_n: usize,
    pub sampling_favors_pooled_on_pooled: usize,
    pub quadrature_favors_pooled_on_pooled: usize,
    pub sampling_favors_pooled_on_differ: usize,
    pub quadrature_favors_pooled_on_differ: usize,
}

impl Tally {

    pub fn sampling_correct_on_pooled(&self) -> usize {
        self.sampling_favors_pooled_on_pooled
    }

    pub fn sampling_correct_on_differ(&self) -> usize {
        self.datasets_n - self.sampling_favors_pooled_on_differ
    }

    pub fn quadrature_correct_on_pooled(&self) -> usize {
        self.quadrature_favors_pooled_on_pooled
    }

    pub fn quadrature_correct_on_differ(&self) -> usize {
        self.datasets_n - self.quadrature_favors_pooled_on_differ
    }

}

impl fmt::Display for Tally {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "By sampling:   pooled data, correct selection {}/{}",
            self.sampling_correct_on_pooled(), self.datasets_n
        )?;
        writeln!(
            f,
            "               differ data, correct selection {}/{}",
            self.sampling_correct_on_differ(), self.datasets_n
        )?;
        writeln!(
            f,
            "By quadrature: pooled data, correct selection {}/{}",
            self.quadrature_correct_on_pooled(), self.datasets_n
        )?;
        write!(
            f,
            "               differ data, correct selection {}/{}",
            self.quadrature_correct_on_differ(), self.datasets_n
        )
    }
}

/// Full experiment: `datasets_n` pooled-generated trials followed by
/// `datasets_n` mixture-generated trials. Each trial draws true parameters
/// from the prior, generates a fresh dataset it alone owns, hands it
/// read-only to all four estimators and records which model each estimator
/// pair favored.
pub fn run_trials<R>(config: &TrialConfig, prior: &Prior, rng: &mut R) -> Result<Tally, Error>
where
    R: Rng + ?Sized
{
    let grid = QuantileGrid::precompute(prior);
    let mut tally = Tally { datasets_n: config.datasets_n, ..Default::default() };
    let bar = progress_bar(config);

    report(&bar, config, "Data generated with one component".to_string());
    for _ in 0..config.datasets_n {
        let params = prior.sample_gauss(rng)?;
        report(&bar, config, format!(
            "generating data with: (mean,stddev) = ({:4.2},{:4.2})",
            params.mean, params.stddev
        ));
        let data = generate_one_component(&params, config.data_n, rng);
        let ev = estimate_all(&data, &grid, prior, config, rng)?;
        report_evidence(&bar, config, &data, &ev);
        if ev.sampling_favors_pooled() {
            tally.sampling_favors_pooled_on_pooled += 1;
        }
        if ev.quadrature_favors_pooled() {
            tally.quadrature_favors_pooled_on_pooled += 1;
        }
        bar.inc(1);
    }

    report(&bar, config, "Data generated with two components".to_string());
    for _ in 0..config.datasets_n {
        let params = prior.sample_mixture(rng)?;
        report(&bar, config, format!(
            "generating data with: m; (mean1,stddev1); (mean2,stddev2) = {:5.3}; ({:4.2},{:4.2}); ({:4.2},{:4.2})",
            params.mix_coef,
            params.comp1.mean, params.comp1.stddev,
            params.comp2.mean, params.comp2.stddev
        ));
        let data = generate_two_component(&params, config.data_n, rng);
        let ev = estimate_all(&data, &grid, prior, config, rng)?;
        report_evidence(&bar, config, &data, &ev);
        if ev.sampling_favors_pooled() {
            tally.sampling_favors_pooled_on_differ += 1;
        }
        if ev.quadrature_favors_pooled() {
            tally.quadrature_favors_pooled_on_differ += 1;
        }
        bar.inc(1);
    }

    bar.finish_and_clear();
    Ok(tally)
}

fn estimate_all<R>(
    data: &DVector<f64>,
    grid: &QuantileGrid,
    prior: &Prior,
    config: &TrialConfig,
    rng: &mut R
) -> Result<TrialEvidence, Error>
where
    R: Rng + ?Sized
{
    Ok(TrialEvidence {
        pooled_sampling: evidence::one_component_by_sampling(data, prior, config.mc_repeats, rng)?,
        differ_sampling: evidence::two_component_by_sampling(data, prior, config.mc_repeats, rng)?,
        pooled_quadrature: evidence::one_component_by_quadrature(data, grid),
        differ_quadrature: evidence::two_component_by_quadrature(data, grid),
    })
}

fn progress_bar(config: &TrialConfig) -> ProgressBar {
    if !config.report {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new((config.datasets_n * 2) as u64);
    bar.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} datasets [{elapsed}]"));
    bar
}

fn report(bar: &ProgressBar, config: &TrialConfig, msg: String) {
    if config.report {
        bar.println(msg);
    }
}

fn report_evidence(bar: &ProgressBar, config: &TrialConfig, data: &DVector<f64>, ev: &TrialEvidence) {
    if !config.report {
        return;
    }
    bar.println(format!(
        "sample mean {:+.3}, variance {:.3}",
        sample_mean(data), sample_variance(data)
    ));
    bar.println(format!(
        "integrals by sampling: ({:e}, {:e})  by quadrature: ({:e}, {:e})",
        ev.pooled_sampling, ev.differ_sampling,
        ev.pooled_quadrature, ev.differ_quadrature
    ));
}
