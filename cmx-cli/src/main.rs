//! CMX - Complex matrices
//! Command-line interface for building and combining complex matrices

mod parse;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cmx_core::{Builder, Discipline, Matrix, RenderConfig, parts, render};
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::parse::{parse_element, parse_grid};

#[derive(Parser)]
#[command(name = "cmx")]
#[command(author = "Silvano Neto <dev@silvanoneto.com>")]
#[command(version = "2026.1.16")]
#[command(about = "CMX - complex matrices from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Build inputs as mutable matrices
    #[arg(long, global = true)]
    mutable: bool,

    /// Output style (defaults to the style of the input discipline)
    #[arg(long, value_enum, global = true)]
    style: Option<Style>,

    /// Fixed number of decimal places
    #[arg(long, global = true)]
    precision: Option<usize>,

    /// Text written before each row
    #[arg(long, global = true, allow_hyphen_values = true)]
    row_prefix: Option<String>,

    /// Text written after each row
    #[arg(long, global = true, allow_hyphen_values = true)]
    row_suffix: Option<String>,

    /// Text written between elements of a row
    #[arg(long, global = true, allow_hyphen_values = true)]
    separator: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a matrix
    Show {
        /// Matrix text, e.g. "1+1i, 2; 3, 4i"
        #[arg(value_name = "M", allow_hyphen_values = true)]
        matrix: String,
    },

    /// Render the transposed view of a matrix
    Transpose {
        #[arg(value_name = "M", allow_hyphen_values = true)]
        matrix: String,
    },

    /// Multiply every element by a complex factor
    Scale {
        #[arg(value_name = "M", allow_hyphen_values = true)]
        matrix: String,

        /// Complex factor, e.g. "0+1i"
        #[arg(value_name = "FACTOR", allow_hyphen_values = true)]
        factor: String,
    },

    /// Element-wise sum of two matrices
    Add {
        #[arg(value_name = "A", allow_hyphen_values = true)]
        left: String,

        #[arg(value_name = "B", allow_hyphen_values = true)]
        right: String,
    },

    /// Matrix product
    Dot {
        #[arg(value_name = "A", allow_hyphen_values = true)]
        left: String,

        #[arg(value_name = "B", allow_hyphen_values = true)]
        right: String,
    },

    /// Change the shape, keeping the overlap and zero-filling the rest
    Resize {
        #[arg(value_name = "M", allow_hyphen_values = true)]
        matrix: String,

        #[arg(value_name = "ROWS")]
        rows: usize,

        #[arg(value_name = "COLUMNS")]
        columns: usize,
    },

    /// Print the real and imaginary grids
    Parts {
        #[arg(value_name = "M", allow_hyphen_values = true)]
        matrix: String,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Style {
    Inline,
    Braces,
    Lines,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cmx=info,cmx_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let discipline = if cli.mutable {
        Discipline::Mutable
    } else {
        Discipline::Immutable
    };
    let config = build_config(cli, discipline);
    tracing::debug!(%discipline, "building inputs");

    let result = match &cli.command {
        Commands::Show { matrix } => build(discipline, matrix, "M")?,
        Commands::Transpose { matrix } => build(discipline, matrix, "M")?.transpose(),
        Commands::Scale { matrix, factor } => {
            let factor = parse_element(factor).context("Failed to parse FACTOR")?;
            build(discipline, matrix, "M")?.scale(factor)
        }
        Commands::Add { left, right } => {
            let a = build(discipline, left, "A")?;
            let b = build(discipline, right, "B")?;
            a.add(b.as_ref())?
        }
        Commands::Dot { left, right } => {
            let a = build(discipline, left, "A")?;
            let b = build(discipline, right, "B")?;
            a.dot(b.as_ref())?
        }
        Commands::Resize {
            matrix,
            rows,
            columns,
        } => build(discipline, matrix, "M")?.resize(*rows, *columns),
        Commands::Parts { matrix } => {
            let m = build(discipline, matrix, "M")?;
            let (re, im) = parts(m.as_ref());
            println!("{} {:?}", "real:".cyan(), re);
            println!("{} {:?}", "imag:".cyan(), im);
            return Ok(());
        }
    };

    let (rows, columns) = result.dim();
    tracing::info!(rows, columns, discipline = %result.discipline(), "result");
    println!("{}", render(result.as_ref(), &config).trim_end());

    Ok(())
}

fn build(discipline: Discipline, text: &str, name: &str) -> Result<Box<dyn Matrix>> {
    let grid = parse_grid(text).with_context(|| format!("Failed to parse {}", name))?;
    let matrix = discipline
        .build(grid)
        .with_context(|| format!("Failed to build {}", name))?;
    Ok(matrix)
}

fn build_config(cli: &Cli, discipline: Discipline) -> RenderConfig {
    // Start with preset
    let mut config = match cli.style {
        Some(Style::Inline) => RenderConfig::inline(),
        Some(Style::Braces) => RenderConfig::braces(),
        Some(Style::Lines) => RenderConfig::lines(),
        None => match discipline {
            Discipline::Immutable => RenderConfig::inline(),
            Discipline::Mutable => RenderConfig::braces(),
        },
    };

    // Apply overrides
    if let Some(prefix) = &cli.row_prefix {
        config.row_prefix = prefix.clone();
    }

    if let Some(suffix) = &cli.row_suffix {
        config.row_suffix = suffix.clone();
    }

    if let Some(separator) = &cli.separator {
        config.column_separator = separator.clone();
    }

    config.precision = cli.precision;

    config
}
