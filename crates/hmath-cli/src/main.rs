//! hmath - inspect 4x4 graphics transforms from the command line
//!
//! Builds camera and object matrices with the hmath kernel and prints them
//! in row layout, or as JSON for scripting.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Settings;

#[derive(Parser)]
#[command(name = "hmath")]
#[command(author, version, about = "Inspect 4x4 graphics transforms")]
#[command(long_about = "
Builds, composes, inverts and applies column-major 4x4 matrices.
Matrices print in row layout; pass --json for machine-readable columns.

Examples:
  hmath identity
  hmath perspective --fov 90 --aspect 1.777 --near 0.1 --far 100 --degrees
  hmath look-at --eye 0,2,5 --center 0,0,0 --up 0,1,0
  hmath compose t:0,1,0 ry:45 s:2 --degrees
  hmath invert 1,0,0,0,0,1,0,0,0,0,1,0,3,4,5,1
  hmath apply --matrix 1,0,0,0,0,1,0,0,0,0,1,0,3,4,5,1 --point 1,1,1
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Read angles in degrees instead of radians
    #[arg(long, global = true)]
    degrees: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the identity matrix
    Identity,

    /// Build a right-handed perspective projection
    #[command(visible_alias = "p")]
    Perspective(PerspectiveArgs),

    /// Build a right-handed view matrix
    #[command(name = "look-at", visible_alias = "view")]
    LookAt(LookAtArgs),

    /// Compose rotations, translations and scales onto the identity
    #[command(visible_alias = "c")]
    Compose(ComposeArgs),

    /// Invert a matrix given as 16 column-major floats
    #[command(visible_alias = "inv")]
    Invert(InvertArgs),

    /// Multiply a point by a matrix
    Apply(ApplyArgs),
}

#[derive(Args)]
struct PerspectiveArgs {
    /// Vertical field of view
    #[arg(long, allow_negative_numbers = true)]
    fov: f32,

    /// Width / height
    #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
    aspect: f32,

    /// Near plane distance
    #[arg(long, default_value = "0.1", allow_negative_numbers = true)]
    near: f32,

    /// Far plane distance
    #[arg(long, default_value = "100.0", allow_negative_numbers = true)]
    far: f32,
}

#[derive(Args)]
struct LookAtArgs {
    /// Camera position as x,y,z
    #[arg(long, allow_hyphen_values = true)]
    eye: String,

    /// Target position as x,y,z
    #[arg(long, default_value = "0,0,0", allow_hyphen_values = true)]
    center: String,

    /// Up hint as x,y,z
    #[arg(long, default_value = "0,1,0", allow_hyphen_values = true)]
    up: String,
}

#[derive(Args)]
struct ComposeArgs {
    /// Operations applied left to right: rx:A ry:A rz:A t:x,y,z s:k
    #[arg(required = true)]
    ops: Vec<String>,
}

#[derive(Args)]
struct InvertArgs {
    /// 16 comma-separated floats, column-major
    #[arg(allow_hyphen_values = true)]
    matrix: String,
}

#[derive(Args)]
struct ApplyArgs {
    /// 16 comma-separated floats, column-major
    #[arg(short, long, allow_hyphen_values = true)]
    matrix: String,

    /// Point as x,y,z or x,y,z,w (w defaults to 1)
    #[arg(short, long, allow_hyphen_values = true)]
    point: String,
}

/// Installs the stderr subscriber. `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings {
        json: cli.json,
        degrees: cli.degrees,
    };

    match cli.command {
        Commands::Identity => commands::identity::run(settings),
        Commands::Perspective(args) => commands::perspective::run(args, settings),
        Commands::LookAt(args) => commands::look_at::run(args, settings),
        Commands::Compose(args) => commands::compose::run(args, settings),
        Commands::Invert(args) => commands::invert::run(args, settings),
        Commands::Apply(args) => commands::apply::run(args, settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["hmath", "-vv", "--json", "identity"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        assert!(!cli.degrees);
        assert!(matches!(cli.command, Commands::Identity));
    }

    #[test]
    fn test_parse_perspective() {
        let cli = Cli::try_parse_from([
            "hmath", "perspective", "--fov", "90", "--aspect", "2", "--degrees",
        ])
        .unwrap();
        assert!(cli.degrees);
        let Commands::Perspective(args) = cli.command else {
            panic!("expected perspective");
        };
        assert_eq!(args.fov, 90.0);
        assert_eq!(args.aspect, 2.0);
        assert_eq!(args.near, 0.1);
        assert_eq!(args.far, 100.0);
    }

    #[test]
    fn test_parse_look_at_defaults() {
        let cli = Cli::try_parse_from(["hmath", "look-at", "--eye", "-1,2,5"]).unwrap();
        let Commands::LookAt(args) = cli.command else {
            panic!("expected look-at");
        };
        assert_eq!(args.eye, "-1,2,5");
        assert_eq!(args.center, "0,0,0");
        assert_eq!(args.up, "0,1,0");
    }

    #[test]
    fn test_parse_compose_ops() {
        let cli = Cli::try_parse_from(["hmath", "compose", "t:-1,0,0", "rz:-30", "s:2"]).unwrap();
        let Commands::Compose(args) = cli.command else {
            panic!("expected compose");
        };
        assert_eq!(args.ops, ["t:-1,0,0", "rz:-30", "s:2"]);
    }

    #[test]
    fn test_parse_global_flags_after_ops() {
        let cli =
            Cli::try_parse_from(["hmath", "compose", "t:0,1,0", "ry:45", "s:2", "--degrees"]).unwrap();
        assert!(cli.degrees);
        let Commands::Compose(args) = cli.command else {
            panic!("expected compose");
        };
        assert_eq!(args.ops, ["t:0,1,0", "ry:45", "s:2"]);
    }

    #[test]
    fn test_parse_perspective_negative_planes() {
        let cli = Cli::try_parse_from([
            "hmath", "perspective", "--fov", "1", "--near", "-1", "--far", "10",
        ])
        .unwrap();
        let Commands::Perspective(args) = cli.command else {
            panic!("expected perspective");
        };
        assert_eq!(args.near, -1.0);
        assert_eq!(args.far, 10.0);
    }

    #[test]
    fn test_parse_invert_negative_matrix() {
        let m = "-1,0,0,0,0,1,0,0,0,0,1,0,0,0,0,1";
        let cli = Cli::try_parse_from(["hmath", "inv", m]).unwrap();
        let Commands::Invert(args) = cli.command else {
            panic!("expected invert");
        };
        assert_eq!(args.matrix, m);
    }

    #[test]
    fn test_compose_requires_ops() {
        assert!(Cli::try_parse_from(["hmath", "compose"]).is_err());
    }
}
