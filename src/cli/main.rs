use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::clap::ErrorKind;
use structopt::StructOpt;

use gausspool::prob::Prior;
use gausspool::trial::{run_trials, TrialConfig};
use gausspool::Error;

/// Compare the Bayesian evidence of pooled versus two-component Gaussian
/// models over repeated synthetic datasets.
#[derive(StructOpt, Debug)]
#[structopt(name = "gausspool")]
struct Opt {

    /// Number of datasets to generate per model.
    datasets_n: Option<String>,

}

/// Conventional "command line usage error" status.
const EX_USAGE: i32 = 64;

/// Environment variable holding the seed of the pseudo-random stream. Unset
/// means seed from entropy.
const SEED_VAR: &str = "GAUSSPOOL_SEED";

fn main() {
    let datasets_n = match cli_datasets_n() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(EX_USAGE);
        }
    };
    if let Err(e) = run(datasets_n) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// The single optional positional argument: datasets per generator type,
/// default 10. Non-numeric, zero or extra arguments are usage errors.
fn cli_datasets_n() -> Result<usize, Error> {
    let opt = match Opt::from_iter_safe(std::env::args()) {
        Ok(opt) => opt,
        Err(e) if e.kind == ErrorKind::HelpDisplayed || e.kind == ErrorKind::VersionDisplayed => {
            e.exit()
        }
        Err(_) => return Err(Error::Usage),
    };
    match opt.datasets_n {
        None => Ok(10),
        Some(s) => match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(Error::Usage),
        },
    }
}

fn run(datasets_n: usize) -> anyhow::Result<()> {
    let mut rng = match seed_from_env()? {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let prior = Prior::default();
    let config = TrialConfig { datasets_n, ..Default::default() };

    println!("Starting computation for {} datasets each ...", datasets_n);
    let tally = run_trials(&config, &prior, &mut rng)
        .context("trial run failed")?;
    println!("{}", tally);
    Ok(())
}

/// An unset seed variable means seed from entropy; a set but malformed one
/// is reported rather than silently discarded, since it would otherwise
/// quietly lose reproducibility.
fn seed_from_env() -> anyhow::Result<Option<u64>> {
    match std::env::var(SEED_VAR) {
        Err(_) => Ok(None),
        Ok(raw) => parse_seed(&raw).map(Some),
    }
}

fn parse_seed(raw: &str) -> anyhow::Result<u64> {
    raw.parse::<u64>()
        .with_context(|| format!("{} must be an unsigned integer, got {:?}", SEED_VAR, raw))
}
