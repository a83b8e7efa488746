//! umatrix CLI - U-Matrix rendering for SOM codebooks
//!
//! Command-line interface for rendering and inspecting U-Matrices.

use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use umatrix::{codebook, GridShape, Result, Topology, UMatrix, UMatrixConfig};

#[derive(Parser)]
#[command(name = "umatrix")]
#[command(version)]
#[command(about = "U-Matrix rendering for Self-Organizing Maps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the U-Matrix of a codebook as SVG
    Render {
        #[command(flatten)]
        map: MapArgs,

        /// Title shown above the map
        #[arg(short, long, default_value = "U-Matrix")]
        title: String,

        /// Output SVG file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the per-unit dissimilarity field
    Field {
        #[command(flatten)]
        map: MapArgs,
    },
}

#[derive(Args)]
struct MapArgs {
    /// Codebook JSON file (array of weight vectors, row-major grid order)
    #[arg(short, long)]
    codebook: PathBuf,

    /// Number of grid rows
    #[arg(long)]
    rows: usize,

    /// Number of grid columns
    #[arg(long)]
    cols: usize,

    /// Grid unit shape (rectangle, hexagon)
    #[arg(long, default_value = "rectangle")]
    topology: String,

    /// Configuration JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas units per grid step (overrides config)
    #[arg(long)]
    scale: Option<f64>,

    /// Canvas margin (overrides config)
    #[arg(long)]
    offset: Option<f64>,

    /// Grid-space neighbor radius (overrides config)
    #[arg(long)]
    radius: Option<f64>,
}

impl MapArgs {
    fn shape(&self) -> Result<GridShape> {
        let topology: Topology = self.topology.parse()?;
        Ok(GridShape::new(topology, self.rows, self.cols))
    }

    fn config(&self) -> Result<UMatrixConfig> {
        let mut config = match &self.config {
            Some(path) => UMatrixConfig::from_file(path)?,
            None => UMatrixConfig::default(),
        };
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if let Some(offset) = self.offset {
            config.offset = offset;
        }
        if let Some(radius) = self.radius {
            config.neighbor_radius = radius;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Render { map, title, output } => render(map, title, output),
        Commands::Field { map } => print_field(map),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn render(map: MapArgs, title: String, output: Option<PathBuf>) -> Result<()> {
    let shape = map.shape()?;
    let config = map.config()?;
    let codebook = codebook::load_json(&map.codebook)?;
    info!(
        "Loaded codebook {} ({} units, {} dimensions)",
        map.codebook.display(),
        codebook.nrows(),
        codebook.ncols()
    );

    // Compute before touching the output so a failed render creates no file
    let document = UMatrix::compute(&codebook, &shape, &config)?.to_document(&title);

    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(&path)?);
            document.write_to(&mut writer)?;
            info!("Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            document.write_to(&mut lock)?;
        }
    }

    Ok(())
}

fn print_field(map: MapArgs) -> Result<()> {
    let shape = map.shape()?;
    let config = map.config()?;
    let codebook = codebook::load_json(&map.codebook)?;

    let umatrix = UMatrix::compute(&codebook, &shape, &config)?;

    println!(
        "Grid: {}x{} {} ({} units)",
        shape.rows,
        shape.cols,
        shape.topology,
        umatrix.units().len()
    );
    println!("Max distance: {:.6}", umatrix.max_distance());
    println!();
    println!("{:>6} {:>5} {:>5} {:>10} {:>9} {:>9}", "unit", "row", "col", "neighbors", "mean", "intensity");

    for (i, unit) in umatrix.units().iter().enumerate() {
        println!(
            "{:>6} {:>5} {:>5} {:>10} {:>9.4} {:>9}{}",
            i,
            i / shape.cols,
            i % shape.cols,
            unit.neighbors,
            unit.dissimilarity,
            unit.intensity,
            if unit.is_isolated() { "  (isolated)" } else { "" }
        );
    }

    Ok(())
}
