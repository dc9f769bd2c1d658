//! Terminal A* demo.
//!
//! Loads a map layout (or generates a random one), searches from `S` to `F`
//! and prints the map with the path marked.
//!
//! Run: cargo run --bin pathfind -- --map demos/maps/maze.txt

use std::io;
use std::path::PathBuf;

use clap::Parser;
use waygrid_core::{MAX_SIZE, Map2D};
use waygrid_demos::{generate_map, render};
use waygrid_paths::{AStarPathfinder, Connectivity, GridPather, SearchConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Find a path across a grid map with A*")]
struct Cli {
    /// Map layout file (`.` floor, `#` wall, `1`-`9` costly floor, `S` start, `F` finish).
    #[arg(long)]
    map: Option<PathBuf>,

    /// Width of a generated map.
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(i32).range(1..=i64::from(MAX_SIZE)))]
    width: i32,

    /// Height of a generated map.
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(i32).range(1..=i64::from(MAX_SIZE)))]
    height: i32,

    /// Percentage of walls in a generated map.
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u8).range(0..=100))]
    walls: u8,

    /// Seed for map generation.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Only allow horizontal and vertical steps.
    #[arg(long)]
    four: bool,

    /// Stop once the cheapest open estimate exceeds this cost.
    #[arg(long)]
    max_cost: Option<f32>,

    /// Stop after expanding this many cells.
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Print without colours.
    #[arg(long)]
    no_color: bool,
}

fn load_map(cli: &Cli) -> Result<Map2D, Box<dyn std::error::Error>> {
    match &cli.map {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            Ok(Map2D::from_layout(&text)?)
        }
        None => Ok(generate_map(cli.width, cli.height, cli.walls, cli.seed)?),
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let map = load_map(cli)?;
    let (Some(start), Some(finish)) = (map.start(), map.finish()) else {
        return Err("map must mark a start (S) and a finish (F)".into());
    };

    let config = SearchConfig {
        connectivity: if cli.four {
            Connectivity::Four
        } else {
            Connectivity::Eight
        },
        max_cost: cli.max_cost,
        max_expansions: cli.max_expansions,
    };
    log::info!("searching {start} -> {finish} with {config:?}");

    let pather = GridPather::new(&map, config.connectivity);
    let result = AStarPathfinder::new(config).compute_path(&pather, start, finish)?;

    let mut stdout = io::stdout();
    let path = result.as_ref().map_or(&[][..], |r| r.path.as_slice());
    render(&map, path, !cli.no_color, &mut stdout)?;

    let Some(res) = result else {
        return Err(format!("no path from {start} to {finish}").into());
    };
    println!(
        "cost {:.2}, {} steps, {} cells expanded",
        res.cost(),
        res.steps(),
        res.expanded
    );
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
