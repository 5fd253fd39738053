use ant_colony_tsp::{
    AcoError, Colony, ColonyConfig, CostModel, InitialPheromone, Point, RewardPolicy, StartNode,
    is_permutation, parse_points,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn unit_square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 0.0),
    ]
}

#[test]
fn unit_square_converges_to_perimeter() {
    let model = CostModel::from_points(&unit_square()).unwrap();
    let colony = Colony::new(ColonyConfig {
        ant_count: 10,
        generations: 100,
        alpha: 1.0,
        beta: 2.0,
        rho: 0.5,
        q: 1.0,
        reward: RewardPolicy::Cycle,
        ..Default::default()
    })
    .unwrap();
    let solution = colony.solve(&model, &mut SmallRng::seed_from_u64(42)).unwrap();
    assert!(is_permutation(&solution.tour, 4));
    assert!((solution.cost - 4.0).abs() < 1e-9, "cost {}", solution.cost);
}

#[test]
fn unit_square_from_city_text() {
    let points = parse_points("0 0\n0 1\n1 1\n1 0\n").unwrap();
    let model = CostModel::from_points(&points).unwrap();
    let colony = Colony::new(ColonyConfig::default()).unwrap();
    let solution = colony
        .solve_parallel(&model, &mut SmallRng::seed_from_u64(3))
        .unwrap();
    assert!((solution.cost - 4.0).abs() < 1e-9);
}

#[test]
fn two_nodes_always_give_the_only_tour() {
    let model = CostModel::from_matrix(vec![vec![0.0, 2.5], vec![2.5, 0.0]]).unwrap();
    let settings = [(0.0, 0.0, 1.0), (1.0, 2.0, 0.5), (5.0, 0.0, 0.01), (0.0, 9.0, 1.0)];
    for (alpha, beta, rho) in settings {
        for reward in [RewardPolicy::Cycle, RewardPolicy::Quality, RewardPolicy::Density] {
            let colony = Colony::new(ColonyConfig {
                ant_count: 3,
                generations: 5,
                alpha,
                beta,
                rho,
                reward,
                ..Default::default()
            })
            .unwrap();
            let solution = colony.solve(&model, &mut SmallRng::seed_from_u64(1)).unwrap();
            assert!(solution.tour == vec![0, 1] || solution.tour == vec![1, 0]);
            assert_eq!(solution.cost, 5.0);
        }
    }
}

#[test]
fn same_seed_same_answer() {
    let points: Vec<Point> = (0..12)
        .map(|k| Point::new((k * 7 % 12) as f64, (k * 5 % 11) as f64))
        .collect();
    let model = CostModel::from_points(&points).unwrap();
    let colony = Colony::new(ColonyConfig {
        ant_count: 5,
        generations: 30,
        initial_pheromone: InitialPheromone::Unit,
        start: StartNode::Fixed(0),
        reward: RewardPolicy::Density,
        ..Default::default()
    })
    .unwrap();
    let a = colony.solve(&model, &mut SmallRng::seed_from_u64(77)).unwrap();
    let b = colony.solve(&model, &mut SmallRng::seed_from_u64(77)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.tour[0], 0);
}

#[test]
fn invalid_problems_fail_before_solving() {
    assert!(matches!(
        CostModel::from_points(&[Point::new(0.0, 0.0)]),
        Err(AcoError::InvalidInput { .. })
    ));
    assert!(matches!(
        Colony::new(ColonyConfig {
            q: 0.0,
            ..Default::default()
        }),
        Err(AcoError::InvalidInput { .. })
    ));
}

fn distinct_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::hash_set((0i32..50, 0i32..50), 2..12).prop_map(|cells| {
        cells
            .into_iter()
            .map(|(x, y)| Point::new(x as f64, y as f64))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn solutions_are_permutations(points in distinct_points(), seed in any::<u64>()) {
        let model = CostModel::from_points(&points).unwrap();
        let colony = Colony::new(ColonyConfig {
            ant_count: 4,
            generations: 5,
            ..Default::default()
        })
        .unwrap();
        let solution = colony.solve(&model, &mut SmallRng::seed_from_u64(seed)).unwrap();
        prop_assert!(is_permutation(&solution.tour, points.len()));
        prop_assert!(solution.history.windows(2).all(|w| w[1] <= w[0]));
        prop_assert!((solution.cost - model.tour_cost(&solution.tour)).abs() < 1e-9);
    }

    #[test]
    fn reverse_traversal_costs_the_same(points in distinct_points(), seed in any::<u64>()) {
        let model = CostModel::from_points(&points).unwrap();
        let colony = Colony::new(ColonyConfig {
            ant_count: 1,
            generations: 1,
            ..Default::default()
        })
        .unwrap();
        let solution = colony.solve(&model, &mut SmallRng::seed_from_u64(seed)).unwrap();
        let reversed: Vec<usize> = solution.tour.iter().rev().copied().collect();
        prop_assert!((model.tour_cost(&reversed) - solution.cost).abs() < 1e-9);
    }
}
