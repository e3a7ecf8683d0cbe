use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path as FsPath, PathBuf};
use std::time::Instant;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use geopath::config::{AngleUnit, FileConfig};
use geopath::geometry::{
    BoundingBox, Coordinate, bearing, bounding_box, is_point_in_box, outer_bounding_box, p2l, p2p,
    to_compass_degrees,
};
use geopath::io::{load_path, save_path, to_json};

/// Spherical geo math and GPS track simplification
///
/// Examples:
///   # Distance in meters between two points (lat,lng)
///   geopath distance --from 51.2194,-3.94915 --to 51.2192,-3.94935
///
///   # Compass bearing in degrees
///   geopath bearing --from 51.2194,-3.94915 --to 51.2392,-3.95935 --degrees
///
///   # Thin a track, dropping points closer than 5m to their neighbours' chord
///   geopath simplify ride.json -t 5 -o ride.simplified.json
///
///   # Bounding box of several tracks and the box around all of them
///   geopath bbox a.json b.json
#[derive(Parser, Debug)]
#[command(name = "geopath")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches geopath.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Great-circle distance in meters
    Distance {
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Initial bearing from one point to another
    Bearing {
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        to: Coordinate,
        /// Print a compass heading in degrees instead of radians
        #[arg(long)]
        degrees: bool,
    },

    /// Signed distance in meters of a point from the line start -> end
    CrossTrack {
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        start: Coordinate,
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        end: Coordinate,
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        point: Coordinate,
    },

    /// Simplify one or more JSON tracks
    Simplify {
        /// Input files: arrays of points or GeoJSON LineStrings
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Tolerance in meters (defaults to the config value, then 5)
        #[arg(short = 't', long)]
        tolerance: Option<f64>,
        /// Output file; only valid with a single input. Without it a single
        /// input is printed to stdout and multiple inputs are written next
        /// to the originals as <name>.simplified.json
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Bounding box of each track and of all tracks together
    Bbox {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Check whether a point lies inside a box (edges count as inside)
    InBox {
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        point: Coordinate,
        /// MINLAT,MAXLAT,MINLNG,MAXLNG
        #[arg(long = "box", value_parser = parse_box, allow_hyphen_values = true)]
        bbox: BoundingBox,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match args.config {
        Some(ref config_path) => FileConfig::from_file(config_path)?,
        None => FileConfig::load().unwrap_or_default(),
    };

    let verbose = args.verbose || file_config.verbose;
    setup_logging(verbose);
    debug!(?file_config, "Loaded configuration");

    match args.command {
        Command::Distance { from, to } => {
            println!("{:.8}", p2p(&from, &to));
        }
        Command::Bearing { from, to, degrees } => {
            let radians = bearing(&from, &to);
            if degrees || file_config.angle_unit == AngleUnit::Degrees {
                println!("{:.8}", to_compass_degrees(radians));
            } else {
                println!("{:.8}", radians);
            }
        }
        Command::CrossTrack { start, end, point } => {
            println!("{:.8}", p2l(&start, &end, &point));
        }
        Command::Simplify {
            inputs,
            tolerance,
            output,
        } => {
            let tolerance = tolerance.unwrap_or(file_config.tolerance);
            if output.is_some() && inputs.len() > 1 {
                bail!("--output can only be used with a single input file");
            }
            run_simplify(&inputs, tolerance, output, file_config.pretty)?;
        }
        Command::Bbox { inputs } => {
            run_bbox(&inputs, file_config.pretty)?;
        }
        Command::InBox { point, bbox } => {
            println!("{}", is_point_in_box(&point, &bbox));
        }
    }

    Ok(())
}

fn run_simplify(
    inputs: &[PathBuf],
    tolerance: f64,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let total_start = Instant::now();

    for input in inputs {
        let spinner = create_spinner(&format!("Simplifying {}...", input.display()));
        let start = Instant::now();

        let mut path = load_path(input)?;
        let before = path.len();
        path.simplify(tolerance)
            .with_context(|| format!("Failed to simplify {:?}", input))?;

        spinner.finish_and_clear();
        info!(
            "{}: {} -> {} points (ratio {:.3}, tolerance {}m) [{:.1}s]",
            input.display(),
            before,
            path.len(),
            path.simplification_ratio(),
            tolerance,
            start.elapsed().as_secs_f32()
        );

        match (&output, inputs.len()) {
            (Some(out), _) => save_path(out, &path, pretty)?,
            (None, 1) => println!("{}", to_json(path.points(), pretty)?),
            (None, _) => save_path(&simplified_name(input), &path, pretty)?,
        }
    }

    debug!("Done in {:.1}s", total_start.elapsed().as_secs_f32());
    Ok(())
}

fn run_bbox(inputs: &[PathBuf], pretty: bool) -> Result<()> {
    let mut boxes = Vec::with_capacity(inputs.len());

    for input in inputs {
        let path = load_path(input)?;
        let bbox = bounding_box(path.points());
        info!("{}: {}", input.display(), to_json(&bbox, false)?);
        boxes.push(bbox);
    }

    let outer = outer_bounding_box(&boxes);
    println!("{}", to_json(&outer, pretty)?);
    Ok(())
}

fn simplified_name(input: &FsPath) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "path".to_string());
    input.with_file_name(format!("{}.simplified.json", stem))
}

/// Parse "LAT,LNG"
fn parse_coordinate(s: &str) -> std::result::Result<Coordinate, String> {
    let values = parse_numbers(s, 2)?;
    Ok(Coordinate::new(values[0], values[1]))
}

/// Parse "MINLAT,MAXLAT,MINLNG,MAXLNG"
fn parse_box(s: &str) -> std::result::Result<BoundingBox, String> {
    let v = parse_numbers(s, 4)?;
    Ok(BoundingBox {
        min_lat: v[0],
        max_lat: v[1],
        min_lng: v[2],
        max_lng: v[3],
    })
}

fn parse_numbers(s: &str, expected: usize) -> std::result::Result<Vec<f64>, String> {
    let values = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| format!("{} is Not a Number", part.trim()))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if values.len() != expected {
        return Err(format!(
            "expected {} comma-separated numbers, got {}",
            expected,
            values.len()
        ));
    }
    Ok(values)
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    // Only fails if a subscriber is already installed
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(
            parse_coordinate("51.2194,-3.94915").unwrap(),
            Coordinate::new(51.2194, -3.94915)
        );
        assert_eq!(
            parse_coordinate(" 51.2194 , -3.94915 ").unwrap(),
            Coordinate::new(51.2194, -3.94915)
        );
        assert!(parse_coordinate("51.2194").is_err());
        assert_eq!(
            parse_coordinate("51.2194,abc").unwrap_err(),
            "abc is Not a Number"
        );
    }

    #[test]
    fn test_parse_box() {
        let bbox = parse_box("51,52,-1,0").unwrap();
        assert_eq!(bbox.min_lat, 51.0);
        assert_eq!(bbox.max_lng, 0.0);
        assert!(parse_box("51,52,-1").is_err());
    }

    #[test]
    fn test_simplified_name() {
        assert_eq!(
            simplified_name(FsPath::new("tracks/ride.json")),
            PathBuf::from("tracks/ride.simplified.json")
        );
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "geopath",
            "simplify",
            "a.json",
            "b.json",
            "-t",
            "10",
        ])
        .unwrap();
        match args.command {
            Command::Simplify {
                inputs, tolerance, ..
            } => {
                assert_eq!(inputs.len(), 2);
                assert_eq!(tolerance, Some(10.0));
            }
            other => panic!("unexpected command {:?}", other),
        }

        let args = Args::try_parse_from([
            "geopath",
            "in-box",
            "--point",
            "51,-0.5",
            "--box",
            "51,52,-1,0",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::InBox { .. }));
    }
}
