//! End-to-end runs of the tour GA.

use u_tour::distance::DistanceMatrix;
use u_tour::ga::{BestTracking, Chromosome, GaConfig, GaEngine, Replacement};
use u_tour::models::{Point, TourSolver};
use u_tour::TourError;

fn unit_square() -> Vec<Point> {
    vec![
        Point::new(1, 0.0, 0.0, 0.0),
        Point::new(2, 1.0, 0.0, 0.0),
        Point::new(3, 1.0, 1.0, 0.0),
        Point::new(4, 0.0, 1.0, 0.0),
    ]
}

/// Twelve points on two stacked hexagons; forces a lexicographic prefix start.
fn stacked_hexagons() -> Vec<Point> {
    let mut points = Vec::new();
    for layer in 0..2 {
        for k in 0..6 {
            let angle = std::f64::consts::PI / 3.0 * k as f64;
            points.push(Point::new(
                points.len() + 1,
                10.0 * angle.cos(),
                10.0 * angle.sin(),
                layer as f64 * 5.0,
            ));
        }
    }
    points
}

#[test]
fn unit_square_reaches_optimal_length() {
    for seed in [1, 2, 3] {
        let mut engine =
            GaEngine::new(unit_square(), GaConfig::quick().with_seed(seed)).expect("valid input");
        let result = engine.run().expect("run");
        assert!(
            (result.best_fitness - 4.0).abs() < 1e-10,
            "seed {seed}: expected 4.0, got {}",
            result.best_fitness
        );
        let mut ids = result.best_ids().to_vec();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}

#[test]
fn single_point_is_invalid_input() {
    let err = GaEngine::new(vec![Point::new(1, 2.0, 3.0, 4.0)], GaConfig::quick())
        .err()
        .expect("must reject");
    assert!(matches!(err, TourError::InvalidInput { .. }), "got {err}");
}

#[test]
fn duplicate_coordinates_are_distinct_stops() {
    let points = vec![
        Point::new(1, 0.0, 0.0, 0.0),
        Point::new(2, 0.0, 0.0, 0.0),
        Point::new(3, 1.0, 0.0, 0.0),
        Point::new(4, 1.0, 1.0, 0.0),
        Point::new(5, 0.0, 1.0, 0.0),
    ];
    let dm = DistanceMatrix::from_points(&points);
    assert_eq!(dm.get(0, 1), 0.0);
    assert!((Chromosome::score(&[0, 1, 2, 3, 4], &dm) - 4.0).abs() < 1e-10);

    let config = GaConfig::default()
        .with_max_generations(25)
        .with_replacement(Replacement::Refill)
        .with_seed(4);
    let mut engine = GaEngine::new(points, config).expect("valid input");
    let result = engine.run().expect("run").clone();

    assert!((result.best_fitness - 4.0).abs() < 1e-10);
    let mut ids = result.best_ids().to_vec();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    for chromosome in engine.population() {
        chromosome.validate(5).expect("permutation");
        let rescored = Chromosome::score(chromosome.genes(), engine.distances());
        assert!((chromosome.fitness() - rescored).abs() < 1e-10);
    }
}

#[test]
fn refill_run_keeps_every_tour_valid() {
    let points = stacked_hexagons();
    let n = points.len();
    let config = GaConfig::default()
        .with_max_generations(100)
        .with_replacement(Replacement::Refill)
        .with_seed(2024);
    let mut engine = GaEngine::new(points, config).expect("valid input");
    engine.initialize().expect("init");
    let initial = engine.best_result().expect("initialized").fitness();

    let result = engine.run().expect("run").clone();
    assert_eq!(result.generations, 100);
    assert!(!result.collapsed);
    assert!(result.best_fitness <= initial);
    result.best.validate(n).expect("best is a permutation");
    for chromosome in engine.population() {
        chromosome.validate(n).expect("permutation");
    }
}

#[test]
fn running_minimum_reports_lowest_elite_ever_recorded() {
    let config = GaConfig::default()
        .with_max_generations(60)
        .with_replacement(Replacement::Refill)
        .with_mutation_rate_percent(100)
        .with_seed(77);
    let mut engine = GaEngine::new(stacked_hexagons(), config).expect("valid input");
    engine.initialize().expect("init");
    let initial_best = engine.best_result().expect("initialized").fitness();
    let result = engine.run().expect("run").clone();
    let history = &result.elite_history;

    let lowest = history.iter().copied().fold(initial_best, f64::min);
    assert_eq!(result.best_fitness, lowest);
    assert_eq!(history[0], initial_best);
    assert_eq!(result.best_recorded_elite(), Some(lowest));
    assert!(history.windows(2).any(|w| w[1] > w[0]), "expected a generation elite worse than its predecessor: {history:?}");

    let rescored = Chromosome::score(result.best.genes(), engine.distances());
    assert!((rescored - result.best_fitness).abs() < 1e-10);
}

#[test]
fn first_recorded_matches_reference_reporting() {
    let base = GaConfig::default()
        .with_max_generations(40)
        .with_replacement(Replacement::Refill)
        .with_seed(12);

    let mut reference = GaEngine::new(
        stacked_hexagons(),
        base.clone().with_best_tracking(BestTracking::FirstRecorded),
    )
    .expect("valid input");
    let first = reference.run().expect("run").clone();
    assert_eq!(first.best_fitness, first.elite_history[0]);

    let mut tracked = GaEngine::new(stacked_hexagons(), base).expect("valid input");
    let running = tracked.run().expect("run").clone();
    assert!(running.best_fitness <= first.best_fitness);
}

#[test]
fn default_half_pool_run_stops_when_population_collapses() {
    let mut engine =
        GaEngine::new(stacked_hexagons(), GaConfig::default().with_seed(5)).expect("valid input");
    let result = engine.run().expect("run");
    assert!(result.collapsed);
    assert!(result.generations < 10);
    assert_eq!(result.best_ids().len(), 12);
}

#[test]
fn result_serializes() {
    let mut engine =
        GaEngine::new(unit_square(), GaConfig::quick().with_seed(1)).expect("valid input");
    let result = engine.run().expect("run");
    let json = serde_json::to_value(result).expect("serialize");
    assert_eq!(json["best_ids"].as_array().map(Vec::len), Some(4));
    assert!(json["elapsed"].is_object());
}
