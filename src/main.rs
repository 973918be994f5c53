use std::io::Read;

use clap::Parser;
use cmap::LayoutConfig;
use cmap::graph_layout::{
    DEFAULT_MAX_NODES_PER_ROW, DEFAULT_SPACING_X, DEFAULT_SPACING_Y, DEFAULT_SUB_ROW_SPACING_Y,
};

#[derive(Parser)]
#[command(name = "cmap", about = "Lay out a JSON node/edge graph as a draw.io concept map")]
struct Cli {
    /// Input JSON file (reads from stdin if not provided)
    file: Option<std::path::PathBuf>,

    /// Write the diagram here instead of stdout
    #[arg(long, short = 'o')]
    output: Option<std::path::PathBuf>,

    /// Print the level/coordinate table instead of XML
    #[arg(long)]
    levels: bool,

    /// Horizontal distance between nodes in a row
    #[arg(long, default_value_t = DEFAULT_SPACING_X)]
    spacing_x: f64,

    /// Vertical distance between levels
    #[arg(long, default_value_t = DEFAULT_SPACING_Y)]
    spacing_y: f64,

    /// Vertical distance between wrapped rows of one level
    #[arg(long, default_value_t = DEFAULT_SUB_ROW_SPACING_Y)]
    sub_row_spacing: f64,

    /// Nodes per row before a level wraps
    #[arg(long, default_value_t = DEFAULT_MAX_NODES_PER_ROW)]
    max_per_row: usize,

    /// Log every layout pass to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let input = match &cli.file {
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("ERROR: failed to read {}: {e}", path.display());
            std::process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).unwrap_or_else(|e| {
                eprintln!("ERROR: failed to read stdin: {e}");
                std::process::exit(1);
            });
            buf
        }
    };

    let config = LayoutConfig {
        spacing_x: cli.spacing_x,
        spacing_y: cli.spacing_y,
        sub_row_spacing_y: cli.sub_row_spacing,
        max_nodes_per_row: cli.max_per_row,
        ..LayoutConfig::default()
    };

    let result = if cli.levels {
        cmap::levels_report(&input, &config).map(|table| table + "\n")
    } else {
        cmap::convert_with_config(&input, &config)
    };

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &output) {
                eprintln!("ERROR: failed to write {}: {e}", path.display());
                std::process::exit(1);
            }
            tracing::info!(path = %path.display(), bytes = output.len(), "diagram written");
        }
        None => print!("{output}"),
    }
}
