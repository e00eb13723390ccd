//! End-to-end runs of the tick driver against hand-built populations

use hotbed_core::creature::{Creature, Predator, Prey, Species};
use hotbed_core::{Environment, SimConfig, Simulation};

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_single_predator_eats_single_prey() {
    let bug = Predator::new(10, 10, 10);
    let bug_id = bug.id();
    let env = Environment::new(vec![bug], vec![Prey::new(1, 1)], 5, 100).unwrap();
    let mut sim = Simulation::seeded(env, 1);

    let summary = sim.step();

    // Tick 0 raises heat to 6, still below the predator's resistance
    assert_eq!(summary.start.heat, 5);
    assert_eq!(summary.end.heat, 6);

    let env = sim.environment();
    assert_eq!(env.find_predator(bug_id).map(|b| b.age()), Some(1));
    assert_eq!(summary.prey_deaths.eaten, 1);
    // The only prey was eaten before the prey phase, so none remain
    assert_eq!(env.prey_count(), 0);
    assert_eq!(summary.end.prey, 0);
}

#[test]
fn test_predator_dies_from_heat() {
    let bug = Predator::new(10, 10, 10);
    let aphid = Prey::new(1, 1);
    let aphid_id = aphid.id();
    let env = Environment::new(vec![bug], vec![aphid], 15, 100).unwrap();
    let mut sim = Simulation::seeded(env, 1);

    let summary = sim.step();

    assert_eq!(summary.end.predators, 0);
    assert_eq!(summary.predator_deaths.heat, 1);
    assert_eq!(summary.prey_deaths.eaten, 0);
    // The original prey survives the predator phase and ages
    let env = sim.environment();
    assert_eq!(env.find_prey(aphid_id).map(|a| a.age()), Some(1));
    assert_eq!(env.prey_count(), 1 + summary.prey_births);
}

#[test]
fn test_prey_only_population() {
    let prey: Vec<Prey> = (0..5).map(|i| Prey::new(i, i)).collect();
    let env = Environment::new(vec![], prey, 9, 2000).unwrap();
    let mut sim = Simulation::seeded(env, 2024);

    let mut last_prey = 5;
    sim.run(10, |summary| {
        assert_eq!(summary.start.predators, 0);
        assert_eq!(summary.end.predators, 0);
        assert_eq!(summary.predator_births, 0);
        // Far below capacity, nothing is culled
        assert_eq!(summary.prey_deaths.crowding, 0);
        assert_eq!(summary.start.prey, last_prey);
        last_prey = summary.end.prey;
    });

    assert_eq!(sim.environment().predator_count(), 0);
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_heat_follows_interval_schedule() {
    let env = Environment::new(vec![], vec![], 0, 10).unwrap();
    let mut sim = Simulation::seeded(env, 0);

    sim.run(23, |summary| {
        let expected_rise = if summary.tick % 5 == 0 { 1 } else { 0 };
        assert_eq!(summary.end.heat - summary.start.heat, expected_rise);
    });

    // Ticks 0, 5, 10, 15, 20
    assert_eq!(sim.census().heat, 5);
}

#[test]
fn test_heat_death_is_deterministic() {
    for seed in 0..20 {
        let weak = Predator::new(3, 50, 50);
        let weak_id = weak.id();
        let strong = Predator::new(50, 50, 50);
        let prey: Vec<Prey> = (0..50).map(|_| Prey::new(0, 0)).collect();
        let env = Environment::new(vec![weak, strong], prey, 4, 1000).unwrap();
        let mut sim = Simulation::seeded(env, seed);

        sim.step();

        assert!(!sim.environment().contains(weak_id, Species::Predator));
    }
}

#[test]
fn test_predators_age_out_at_ten() {
    let mut bug = Predator::new(1000, 1000, 1000);
    for _ in 0..9 {
        bug.grow_older();
    }
    let bug_id = bug.id();
    let prey: Vec<Prey> = (0..10).map(|_| Prey::new(0, 0)).collect();
    let env = Environment::new(vec![bug], prey, 0, 10_000).unwrap();
    let mut sim = Simulation::seeded(env, 9);

    // Still acts at age 9
    let summary = sim.step();
    assert_eq!(summary.predator_deaths.total(), 0);
    assert_eq!(sim.environment().find_predator(bug_id).map(|b| b.age()), Some(10));

    // Dies of age before the survival check at 10
    let summary = sim.step();
    assert!(summary.predator_deaths.old_age >= 1);
    assert!(sim.environment().find_predator(bug_id).is_none());
}

#[test]
fn test_prey_lifespan_is_five_ticks() {
    let aphid = Prey::new(0, 0);
    let aphid_id = aphid.id();
    let env = Environment::new(vec![], vec![aphid], 0, 1_000_000).unwrap();
    let mut sim = Simulation::seeded(env, 4);

    for _ in 0..5 {
        sim.step();
    }
    assert_eq!(sim.environment().find_prey(aphid_id).map(|a| a.age()), Some(5));

    sim.step();
    assert!(sim.environment().find_prey(aphid_id).is_none());
}

#[test]
fn test_default_run_keeps_counts_consistent() {
    let config = SimConfig {
        seed: Some(7),
        ..Default::default()
    };
    let mut sim = Simulation::from_config(&config).unwrap();

    let mut previous_end = sim.census();
    sim.run(config.ticks, |summary| {
        assert_eq!(summary.start, previous_end);

        let predators = summary.start.predators + summary.predator_births
            - summary.predator_deaths.total();
        let prey = summary.start.prey + summary.prey_births - summary.prey_deaths.total();
        assert_eq!(summary.end.predators, predators);
        assert_eq!(summary.end.prey, prey);

        previous_end = summary.end;
    });

    assert_eq!(sim.tick(), config.ticks);
}

#[test]
fn test_offspring_traits_track_parents_over_run() {
    let config = SimConfig {
        initial_predators: 30,
        initial_prey: 300,
        ticks: 15,
        seed: Some(123),
        ..Default::default()
    };
    let mut sim = Simulation::from_config(&config).unwrap();
    sim.run(config.ticks, |_| {});

    // Mutation drifts traits by at most 2 per generation from the 0..=16 seed range
    let max_drift = 2 * config.ticks as i32;
    for bug in sim.environment().predators() {
        assert!(bug.speed() >= -max_drift && bug.speed() <= 16 + max_drift);
        assert!(bug.camouflage() >= -max_drift && bug.camouflage() <= 16 + max_drift);
    }
}
