//! `thicket` - compute the thickness of a graph.
//!
//! Reads an edge list (one `a b` pair per line) or, with `--matrix`, a 0/1
//! adjacency matrix, from a file or stdin, and prints the thickness and a
//! witnessing split into planar layers.
//!
//! ```bash
//! thicket graph.txt
//! thicket --matrix --json -j 4 < k5.txt
//! thicket --config thicket.toml graph.txt
//! ```

mod report;

use std::fmt::Display;
use std::fs;
use std::io::{self, Read, Write};
use std::process;

use serde::{Deserialize, Serialize};
use thicket_core::{edges_from_adjacency_matrix, parse_adjacency_matrix, parse_edge_list};
use thicket_partition::{PartitionerConfig, ThicknessPartitioner, ThicknessResult};
use thicket_planar::LrPlanarity;

use crate::report::OutputFormat;

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Deserialize, Default)]
struct Config {
    #[serde(default)]
    partitioner: PartitionerConfig,
    #[serde(default)]
    output: OutputConfig,
}

#[derive(Debug, Deserialize, Default)]
struct OutputConfig {
    #[serde(default)]
    format: OutputFormat,
}

fn load_config(args: &Args) -> Config {
    let Some(path) = &args.config_path else {
        return Config::default();
    };
    match fs::read_to_string(path) {
        Ok(contents) => match basic_toml::from_str(&contents) {
            Ok(cfg) => {
                log::info!("Loaded config from {}", path);
                cfg
            }
            Err(e) => {
                log::warn!("Failed to parse config {}: {}", path, e);
                Config::default()
            }
        },
        Err(e) => {
            log::warn!("Failed to read config {}: {}", path, e);
            Config::default()
        }
    }
}

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Debug, Default)]
struct Args {
    config_path: Option<String>,
    input: Option<String>,
    matrix: bool,
    threads: Option<usize>,
    json: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut result = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                result.config_path = Some(required_value(&args, i, "--config"));
            }
            "--threads" | "-j" => {
                i += 1;
                let value = required_value(&args, i, "--threads");
                match value.parse::<usize>() {
                    Ok(n) if n > 0 => result.threads = Some(n),
                    _ => usage_error(&format!("invalid thread count: {}", value)),
                }
            }
            "--matrix" | "-m" => result.matrix = true,
            "--json" => result.json = true,
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            other if other.starts_with('-') && other != "-" => {
                usage_error(&format!("Unknown argument: {}", other));
            }
            path => {
                if result.input.is_some() {
                    usage_error("only one input file may be given");
                }
                result.input = Some(path.to_string());
            }
        }
        i += 1;
    }

    result
}

fn required_value(args: &[String], i: usize, flag: &str) -> String {
    match args.get(i) {
        Some(v) => v.clone(),
        None => usage_error(&format!("{} needs a value", flag)),
    }
}

fn usage_error(msg: &str) -> ! {
    eprintln!("{}", msg);
    print_help();
    process::exit(2);
}

fn print_help() {
    println!("thicket - graph thickness calculator");
    println!();
    println!("USAGE:");
    println!("    thicket [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE, or stdin when FILE is absent or '-'.");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>     TOML configuration file");
    println!("    -m, --matrix            Input is a 0/1 adjacency matrix");
    println!("    -j, --threads <N>       Worker threads for the search");
    println!("        --json              Print the result as JSON");
    println!("    -h, --help              Print help information");
    println!();
    println!("CONFIGURATION:");
    println!("    [partitioner] threads, euler_lower_bound");
    println!("    [output] format = \"text\" | \"json\"");
    println!();
    println!("Set RUST_LOG=debug to follow the search.");
}

// ============================================================================
// Main
// ============================================================================

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(p) => fs::read_to_string(p),
    }
}

fn emit<N: Display + Serialize>(
    result: &ThicknessResult<N>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let out = match format {
        OutputFormat::Text => report::text(result),
        OutputFormat::Json => report::json(result)? + "\n",
    };
    io::stdout().write_all(out.as_bytes())?;
    Ok(())
}

fn run(args: &Args, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut partitioner_config = config.partitioner;
    if let Some(threads) = args.threads {
        partitioner_config.threads = threads;
    }
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let text = read_input(args.input.as_deref())?;
    let partitioner = ThicknessPartitioner::with_config(LrPlanarity, partitioner_config);

    if args.matrix {
        let matrix = parse_adjacency_matrix(&text)?;
        let edges = edges_from_adjacency_matrix(&matrix)?;
        log::info!("{} nodes, {} edges", matrix.len(), edges.len());
        emit(&partitioner.compute(edges)?, format)
    } else {
        let edges = parse_edge_list(&text)?;
        log::info!("{} edges", edges.len());
        emit(&partitioner.compute(edges)?, format)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = parse_args();
    let config = load_config(&args);
    log::debug!(
        "threads={} euler_lower_bound={}",
        args.threads.unwrap_or(config.partitioner.threads),
        config.partitioner.euler_lower_bound
    );

    if let Err(e) = run(&args, config) {
        log::error!("{}", e);
        process::exit(1);
    }
}
