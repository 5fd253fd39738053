use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use ant_colony_tsp::{
    Colony, ColonyConfig, CostModel, InitialPheromone, Point, RewardPolicy, StartNode,
    load_points, run_solve_phase,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Reward {
    Cycle,
    Quality,
    Density,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Initial {
    InverseSquare,
    Unit,
}

#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// City file with one `x y` pair per line. Defaults to the unit square.
    #[arg(short, long)]
    cities: Option<PathBuf>,

    #[arg(long, default_value_t = 10)]
    ants: usize,

    #[arg(short, long, default_value_t = 100)]
    generations: usize,

    #[arg(long, default_value_t = 1.0)]
    alpha: f64,

    #[arg(long, default_value_t = 2.0)]
    beta: f64,

    #[arg(long, default_value_t = 0.5)]
    rho: f64,

    #[arg(long, default_value_t = 1.0)]
    q: f64,

    #[arg(long, value_enum, default_value_t = Reward::Cycle)]
    reward: Reward,

    #[arg(long, value_enum, default_value_t = Initial::InverseSquare)]
    initial_pheromone: Initial,

    /// Start every ant at this node instead of a random one.
    #[arg(long)]
    start: Option<usize>,

    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Build each generation's tours on all cores.
    #[arg(long)]
    parallel: bool,

    /// Print the best cost after every generation.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> ColonyConfig {
        ColonyConfig {
            ant_count: self.ants,
            generations: self.generations,
            alpha: self.alpha,
            beta: self.beta,
            rho: self.rho,
            q: self.q,
            reward: match self.reward {
                Reward::Cycle => RewardPolicy::Cycle,
                Reward::Quality => RewardPolicy::Quality,
                Reward::Density => RewardPolicy::Density,
            },
            initial_pheromone: match self.initial_pheromone {
                Initial::InverseSquare => InitialPheromone::InverseSquare,
                Initial::Unit => InitialPheromone::Unit,
            },
            start: self.start.map_or(StartNode::Random, StartNode::Fixed),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let points = match &args.cities {
        Some(path) => load_points(path)?,
        None => vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ],
    };
    let model = CostModel::from_points(&points)?;
    let colony = Colony::new(args.config())?;

    println!(
        "Solving {} cities with {} ants over {} generations",
        model.node_count(),
        args.ants,
        args.generations
    );
    let (solution, elapsed) = run_solve_phase(&colony, &model, args.seed, args.parallel)?;

    if args.verbose {
        for (generation, cost) in solution.history.iter().enumerate() {
            println!("generation #{}, best cost: {:.6}", generation, cost);
        }
    }
    println!("Best cost: {:.6}", solution.cost);
    println!("Best tour: {:?}", solution.tour);
    println!("Solve phase latency: {:?}", elapsed);
    Ok(())
}
