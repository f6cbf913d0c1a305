//! Behavior of the single-spin-flip Metropolis driver.

use ising2d::{attempt_flip, run_metropolis, IsingError, Lattice};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_metropolis_acceptance_rate() {
    // Deterministic RNG so the test is repeatable.
    let mut rng = ChaCha20Rng::seed_from_u64(0xDEADBEEF);

    // Build lattice with the same RNG.
    let mut lattice = Lattice::random_with(&mut rng, 8);

    let temperature = 2.269; // near-critical, so both accepts and rejects occur
    let n_steps = 1_000;

    let stats = run_metropolis(&mut lattice, temperature, n_steps, &mut rng).unwrap();
    let acc_rate = stats.acceptance_rate();

    // Near the critical temperature we expect a rate strictly between 0 %
    // and 100 %. The bounds are generous enough to cope with RNG variance
    // while still catching pathological behaviour.
    assert!(
        (0.01..=0.99).contains(&acc_rate),
        "Acceptance rate {acc_rate:.3} is outside plausible range"
    );
}

#[test]
fn test_zero_steps_is_a_no_op() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let mut lattice = Lattice::random_with(&mut rng, 8);
    let before = lattice.clone();

    let stats = run_metropolis(&mut lattice, 1.5, 0, &mut rng).unwrap();

    assert_eq!(lattice, before, "Zero steps must leave the lattice unchanged");
    assert_eq!(stats.steps, 0);
    assert_eq!(stats.accepted, 0);
    assert_eq!(stats.acceptance_rate(), 0.0);
}

#[test]
fn test_energy_lowering_flip_is_always_accepted() {
    // A lone defect in an aligned lattice: flipping it back has dE = -8,
    // which must be accepted no matter what the RNG produces.
    let mut rng = ChaCha20Rng::seed_from_u64(999);
    let mut lattice = Lattice::aligned(4);
    lattice.flip(1, 1);

    let info = attempt_flip(&mut lattice, 1, 1, 0.5, &mut rng);

    assert!(info.accepted);
    assert_eq!(info.delta_e, -8.0);
    assert_eq!(lattice.spin(1, 1), 1);
    assert_eq!(lattice.magnetization(), 1.0);
}

#[test]
fn test_energy_raising_flip_is_rejected_at_near_zero_temperature() {
    // dE = 8 at T = 1e-3 gives exp(-8000), which underflows to exactly 0,
    // so the strict `<` comparison can never accept.
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let mut lattice = Lattice::aligned(4);

    for _ in 0..100 {
        let info = attempt_flip(&mut lattice, 0, 0, 1e-3, &mut rng);
        assert!(!info.accepted);
        assert_eq!(info.delta_e, 8.0);
    }
    assert_eq!(lattice.magnetization(), 1.0);
}

#[test]
fn test_defect_heals_at_low_temperature() {
    // Near T = 0 the only acceptable move is healing the defect; everything
    // else has an acceptance probability that underflows to zero.
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let mut lattice = Lattice::aligned(8);
    lattice.flip(3, 3);

    run_metropolis(&mut lattice, 1e-3, 20_000, &mut rng).unwrap();

    assert_eq!(lattice.magnetization(), 1.0, "Defect should have healed");
}

#[test]
fn test_high_temperature_accepts_almost_everything() {
    // At T = 1e6 even dE = 8 is accepted with probability exp(-8e-6).
    let mut rng = ChaCha20Rng::seed_from_u64(123);
    let mut lattice = Lattice::aligned(8);

    let stats = run_metropolis(&mut lattice, 1e6, 10_000, &mut rng).unwrap();

    assert!(
        stats.acceptance_rate() > 0.99,
        "Acceptance rate {:.4} too low for the high-temperature limit",
        stats.acceptance_rate()
    );
}

#[test]
fn test_spins_stay_in_domain_after_long_run() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let mut lattice = Lattice::random_with(&mut rng, 16);

    run_metropolis(&mut lattice, 2.269, 50_000, &mut rng).unwrap();

    assert!(lattice.spins().iter().all(|&s| s == 1 || s == -1));
}

#[test]
fn test_cold_lattice_stays_magnetized_below_critical_temperature() {
    // T = 1.0 is deep in the ordered phase; a cold start should keep
    // |m| close to 1 (equilibrium value is ~0.999).
    let mut rng = ChaCha20Rng::seed_from_u64(77);
    let mut lattice = Lattice::aligned(16);

    run_metropolis(&mut lattice, 1.0, 50 * 16 * 16, &mut rng).unwrap();

    assert!(
        lattice.magnetization().abs() > 0.9,
        "Magnetization {} collapsed below the critical temperature",
        lattice.magnetization()
    );
}

#[test]
fn test_invalid_temperature_fails_before_any_mutation() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let mut lattice = Lattice::random_with(&mut rng, 8);
    let before = lattice.clone();

    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = run_metropolis(&mut lattice, bad, 1_000, &mut rng).unwrap_err();
        assert!(matches!(err, IsingError::InvalidTemperature(_)));
        assert_eq!(lattice, before, "Failed run must leave the lattice untouched");
    }
}

#[test]
fn test_same_seed_reproduces_the_trajectory() {
    let run = |seed: u64| {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut lattice = Lattice::random_with(&mut rng, 8);
        let stats = run_metropolis(&mut lattice, 2.0, 5_000, &mut rng).unwrap();
        (lattice, stats.accepted)
    };

    let (lattice_a, accepted_a) = run(0xC0FFEE);
    let (lattice_b, accepted_b) = run(0xC0FFEE);

    assert_eq!(lattice_a, lattice_b);
    assert_eq!(accepted_a, accepted_b);
}
