use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::SeedableRng;

use gausspool::evidence;
use gausspool::prob::*;
use gausspool::quad::*;
use gausspool::sample::*;
use gausspool::trial::{run_trials, TrialConfig};

const EPS: f64 = 10E-8;

#[test]
fn gaussian_density_normalizes() {
    let params = GaussParams::new(1.5, 0.8);
    let step = 1E-3;
    let total: f64 = (-20_000..20_000)
        .map(|i| params.density(params.mean + i as f64 * step) * step)
        .sum();
    assert!((total - 1.0).abs() < 1E-4);
}

#[test]
fn mixture_density_degenerates_to_its_components() {
    let comp1 = GaussParams::new(-1.0, 0.5);
    let comp2 = GaussParams::new(2.0, 1.5);
    let all1 = MixtureParams::new(1.0, comp1, comp2);
    let all2 = MixtureParams::new(0.0, comp1, comp2);
    for &x in &[-3.0, -1.0, 0.0, 0.7, 2.0, 5.0] {
        assert!((all1.density(x) - comp1.density(x)).abs() < EPS);
        assert!((all2.density(x) - comp2.density(x)).abs() < EPS);
    }
}

#[test]
fn degenerate_precision_is_rejected() {
    assert!(GaussParams::from_precision(0.0, 0.0).is_err());
    assert!(GaussParams::from_precision(0.0, -1.0).is_err());
    let params = GaussParams::from_precision(0.0, 4.0).unwrap();
    assert!((params.stddev - 0.5).abs() < EPS);
}

#[test]
fn gaussian_grid_is_monotone() {
    let grid = QuantileGrid::precompute(&Prior::default());
    for pair in grid.means.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn grid_shapes_and_bounds() {
    let grid = QuantileGrid::precompute(&Prior::default());
    assert_eq!(grid.means.len(), GAUSS_GRID_N);
    assert_eq!(grid.precisions.len(), GAMMA_GRID_N);
    assert_eq!(grid.mix_coefs.len(), JBETA_GRID_N);
    // The Gamma grid opens at the distribution's lower bound, and the Beta
    // grid covers only the lower symmetric half.
    assert!(grid.precisions[0].abs() < EPS);
    assert!(grid.mix_coefs[0].abs() < EPS);
    assert!(grid.mix_coefs.iter().all(|&m| m < 0.5));
    assert!(grid.precisions.iter().all(|&p| p >= 0.0));
}

#[test]
fn precompute_is_idempotent() {
    let prior = Prior::default();
    let first = QuantileGrid::precompute(&prior);
    let second = QuantileGrid::precompute(&prior);
    assert_eq!(first, second);
}

#[test]
fn generator_labels_select_the_right_component() {
    let near = GaussParams::new(0.0, 1.0);
    let far = GaussParams::new(100.0, 0.01);
    let mut rng = StdRng::seed_from_u64(11);
    let only_first = generate_two_component(&MixtureParams::new(1.0, near, far), 50, &mut rng);
    assert!(only_first.iter().all(|&x| x < 50.0));
    let only_second = generate_two_component(&MixtureParams::new(0.0, near, far), 50, &mut rng);
    assert!(only_second.iter().all(|&x| x > 50.0));
}

#[test]
fn evidence_is_positive_and_finite_on_a_fixed_dataset() {
    let prior = Prior::default();
    let grid = QuantileGrid::precompute(&prior);
    let mut rng = StdRng::seed_from_u64(7);
    let truth = GaussParams::new(0.0, 1.0);
    let data = generate_one_component(&truth, DATA_N, &mut rng);

    let by_quadrature = evidence::one_component_by_quadrature(&data, &grid);
    let by_sampling = evidence::one_component_by_sampling(&data, &prior, 20_000, &mut rng).unwrap();
    assert!(by_quadrature.is_finite() && by_quadrature > 0.0);
    assert!(by_sampling.is_finite() && by_sampling > 0.0);
}

#[test]
fn evidence_of_an_empty_dataset_is_one() {
    let prior = Prior::default();
    let grid = QuantileGrid::precompute(&prior);
    let empty = DVector::<f64>::zeros(0);
    let mut rng = StdRng::seed_from_u64(3);
    assert!((evidence::one_component_by_quadrature(&empty, &grid) - 1.0).abs() < EPS);
    assert!((evidence::one_component_by_sampling(&empty, &prior, 100, &mut rng).unwrap() - 1.0).abs() < EPS);
}

#[test]
fn unimodal_data_favors_pooled_by_quadrature() {
    let prior = Prior::default();
    let grid = QuantileGrid::precompute(&prior);
    // All-identical observations: as unimodal as data gets. The mixture
    // density at each cell is a convex combination of component densities,
    // so its likelihood product can never beat the best single component.
    let data = DVector::from_element(12, 0.3);
    let pooled = evidence::one_component_by_quadrature(&data, &grid);
    let differ = evidence::two_component_by_quadrature(&data, &grid);
    assert!(pooled > differ);
}

#[test]
fn monte_carlo_is_reproducible_for_a_fixed_seed() {
    let prior = Prior::default();
    let data = DVector::from_vec(vec![-0.4, 0.1, 0.3, 1.2, -0.8]);
    let mut rng1 = StdRng::seed_from_u64(9);
    let mut rng2 = StdRng::seed_from_u64(9);
    let first = evidence::two_component_by_sampling(&data, &prior, 5_000, &mut rng1).unwrap();
    let second = evidence::two_component_by_sampling(&data, &prior, 5_000, &mut rng2).unwrap();
    assert_eq!(first, second);
    assert!(first.is_finite() && first > 0.0);
}

#[test]
fn single_trial_run_is_reproducible_and_bounded() {
    let prior = Prior::default();
    let config = TrialConfig {
        datasets_n: 1,
        data_n: 10,
        mc_repeats: 2_000,
        report: false,
    };
    let first = run_trials(&config, &prior, &mut StdRng::seed_from_u64(42)).unwrap();
    let second = run_trials(&config, &prior, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(first, second);
    assert!(first.quadrature_favors_pooled_on_pooled <= 1);
    assert!(first.sampling_favors_pooled_on_pooled <= 1);
    assert!(first.sampling_correct_on_differ() <= 1);
    assert!(first.quadrature_correct_on_differ() <= 1);
}

#[test]
fn sample_summaries_match_hand_values() {
    let data = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
    assert!((sample_mean(&data) - 2.5).abs() < EPS);
    assert!((sample_variance(&data) - 1.25).abs() < EPS);
}
