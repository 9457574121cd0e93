//! Command-line planner.
//!
//! Usage:
//!   marga plan --image office.png --start 12,40 --end 310,95 --svg out.svg
//!   marga plan --image office.png --random-endpoints --waypoints 200 --seed 7
//!   marga project session.yaml --algorithm astar

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use marga::io::export_svg;
use marga::{Coord2D, MargaConfig, Room, RoomConfig, RoomError, SearchAlgorithm};

/// Room-domain path planner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (defaults to configs/marga.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a path on a floor-plan image
    Plan(PlanArgs),
    /// Open a saved project and plan between its start and end
    Project(ProjectArgs),
}

/// Overrides shared by every subcommand
#[derive(Args, Debug)]
struct PlannerArgs {
    /// Robot diameter in pixels
    #[arg(long)]
    clearance: Option<u32>,

    /// Search algorithm: dijkstra or astar
    #[arg(short, long, value_parser = parse_algorithm)]
    algorithm: Option<SearchAlgorithm>,

    /// Write an SVG rendering of the result
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Print planning timings
    #[arg(long)]
    stats: bool,
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Floor-plan image (PNG or BMP)
    #[arg(short, long)]
    image: PathBuf,

    /// Start pixel as x,y
    #[arg(short, long, value_parser = parse_coord)]
    start: Option<Coord2D>,

    /// End pixel as x,y
    #[arg(short, long, value_parser = parse_coord)]
    end: Option<Coord2D>,

    /// Pick start and end at random navigable pixels
    #[arg(long)]
    random_endpoints: bool,

    /// Number of random waypoints to scatter
    #[arg(short, long, default_value_t = 0)]
    waypoints: usize,

    /// Seed for random placement
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Save the session as a project file
    #[arg(long)]
    save: Option<PathBuf>,

    #[command(flatten)]
    planner: PlannerArgs,
}

#[derive(Args, Debug)]
struct ProjectArgs {
    /// Project YAML file
    file: PathBuf,

    #[command(flatten)]
    planner: PlannerArgs,
}

fn parse_coord(s: &str) -> Result<Coord2D, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", s))?;
    let x = x.trim().parse::<i32>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<i32>().map_err(|e| e.to_string())?;
    Ok(Coord2D::new(x, y))
}

fn parse_algorithm(s: &str) -> Result<SearchAlgorithm, String> {
    match s.to_ascii_lowercase().as_str() {
        "dijkstra" => Ok(SearchAlgorithm::Dijkstra),
        "astar" | "a*" => Ok(SearchAlgorithm::AStar),
        other => Err(format!("unknown algorithm '{}'", other)),
    }
}

fn room_config(cli_config: Option<&PathBuf>, planner: &PlannerArgs) -> Result<RoomConfig, RoomError> {
    let config = match cli_config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            MargaConfig::load(path)?
        }
        None => MargaConfig::load_default()?,
    };

    let mut room_config = config.to_room_config();
    if let Some(clearance) = planner.clearance {
        room_config.clearance = clearance;
    }
    if let Some(algorithm) = planner.algorithm {
        room_config.algorithm = algorithm;
    }
    Ok(room_config)
}

fn plan_and_report(room: &mut Room, planner: &PlannerArgs) -> Result<(), RoomError> {
    let (Some(start), Some(end)) = (room.start(), room.end()) else {
        warn!("Start and end must both be placed before planning");
        return Ok(());
    };

    let path = room.generate_path();
    let trajectory = room.smooth(&path);

    if path.reaches(start) {
        println!(
            "{} path {} -> {}: {} nodes, length {:.2}",
            room.algorithm(),
            start,
            end,
            path.len(),
            path.length()
        );
        for point in &path.points {
            println!("  {}", point);
        }
        println!(
            "Trajectory: {} samples, {} collisions",
            trajectory.points.len(),
            trajectory.collisions.len()
        );
    } else {
        println!("No path from {} to {}", start, end);
    }

    if planner.stats {
        println!("{}", room.stats());
    }
    if let Some(svg) = &planner.svg {
        export_svg(room, &path, &trajectory, svg)?;
        info!("SVG written to {:?}", svg);
    }
    Ok(())
}

/// Endpoints go first so scattered waypoints cannot take their pixels
fn place_points(room: &mut Room, args: &PlanArgs, rng: &mut StdRng) {
    if args.random_endpoints && !room.randomize_endpoints(rng) {
        warn!("Could not place random endpoints");
    }
    if let Some(start) = args.start {
        if !room.set_start(start) {
            warn!("Start {} is not navigable", start);
        }
    }
    if let Some(end) = args.end {
        if !room.set_end(end) {
            warn!("End {} is not navigable", end);
        }
    }
    if args.waypoints > 0 {
        let placed = room.scatter_waypoints(args.waypoints, rng);
        info!("Placed {} random waypoints", placed);
    }
}

fn run_plan(cli_config: Option<&PathBuf>, args: &PlanArgs) -> Result<(), RoomError> {
    let config = room_config(cli_config, &args.planner)?;
    let mut room = Room::from_image_file(&args.image, config)?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    place_points(&mut room, args, &mut rng);

    plan_and_report(&mut room, &args.planner)?;

    if let Some(save) = &args.save {
        room.save_project(save)?;
        info!("Project saved to {:?}", save);
    }
    Ok(())
}

fn run_project(cli_config: Option<&PathBuf>, args: &ProjectArgs) -> Result<(), RoomError> {
    let config = room_config(cli_config, &args.planner)?;
    let mut room = Room::open_project(&args.file, config)?;
    info!(
        "Opened {:?}: {} waypoints",
        args.file,
        room.waypoint_count()
    );
    plan_and_report(&mut room, &args.planner)
}

fn main() -> Result<(), RoomError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Plan(args) => run_plan(cli.config.as_ref(), args),
        Command::Project(args) => run_project(cli.config.as_ref(), args),
    }
}
