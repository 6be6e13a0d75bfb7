use std::path::PathBuf;

/// Civic map toolkit CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "civicmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the viewBox that fits a set of SVG paths
    Viewbox(ViewboxArgs),

    /// Render a county or national map as SVG
    Render(RenderArgs),

    /// Filter the national leader roster
    Roster(RosterArgs),

    /// Fetch a payload from the backend API
    #[cfg(feature = "download")]
    Fetch(FetchArgs),
}

#[derive(clap::Args, Debug)]
pub struct ViewboxArgs {
    /// Path data strings, e.g. "M0 0L10 0L10 10Z"
    pub paths: Vec<String>,

    /// JSON file holding an array of path strings or objects with "svgPath"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Fail on the first malformed path instead of skipping it
    #[arg(long)]
    pub strict: bool,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// County detail JSON (or a county list with --counties)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output SVG file, defaults to "./map.svg"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Input is a county list rather than a county detail payload
    #[arg(long)]
    pub counties: bool,

    /// Name of the shape to highlight
    #[arg(long)]
    pub highlight: Option<String>,

    /// Output width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Output height in pixels
    #[arg(long, default_value_t = 500)]
    pub height: u32,

    /// Padding around the shapes, in path units
    #[arg(long, default_value_t = 0.0, value_parser = parse_padding)]
    pub padding: f64,
}

/// Padding must be a finite, non-negative number.
fn parse_padding(s: &str) -> Result<f64, String> {
    let padding: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !padding.is_finite() || padding < 0.0 {
        return Err(format!("expected a finite, non-negative number, got {s}"));
    }
    Ok(padding)
}

#[derive(clap::Args, Debug)]
pub struct RosterArgs {
    /// Roster JSON as returned by /presidents
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Case-insensitive name substring
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Exact position, or "All Leaders"
    #[arg(short, long, default_value = "All Leaders")]
    pub position: String,

    /// Only leaders in office during this year
    #[arg(short, long)]
    pub year: Option<i32>,
}

#[cfg(feature = "download")]
#[derive(clap::Args, Debug)]
pub struct FetchArgs {
    /// Backend base URL
    #[arg(long, env = "CIVICMAP_API_URL")]
    pub api_url: String,

    /// Output JSON file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub resource: Resource,
}

#[cfg(feature = "download")]
#[derive(clap::Subcommand, Debug)]
pub enum Resource {
    /// All counties with their outlines
    Counties,

    /// One county with leaders and constituencies
    County {
        id: u64,
    },

    /// Look up the leaders for a place
    Search {
        place: String,
    },

    /// National leader history
    Presidents,
}
