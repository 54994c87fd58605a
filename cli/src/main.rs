use clap::{ArgAction, Parser, Subcommand};
use dicecount::{analyze, compute_table, Config, Query};
use encoding_rs::Encoding;
use std::{fs, path::Path, path::PathBuf};
use tracing::Level;

mod render;

#[derive(Subcommand)]
enum Cmd {
    /// Count the ways with both counters and print the full report
    Analyze {
        /// Number of dice thrown
        #[arg(long, default_value_t = 3)]
        rolls: i32,
        /// Sum the dice should add up to
        #[arg(long, default_value_t = 10)]
        target: i32,
        /// Only run the table, leave out the recursive baseline
        #[arg(long, default_value_t = false)]
        skip_recursive: bool,
        /// Print the report as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the ways table for every roll count and partial sum
    Table {
        /// Number of dice thrown
        #[arg(long, default_value_t = 3)]
        rolls: i32,
        /// Largest partial sum to tabulate
        #[arg(long, default_value_t = 10)]
        target: i32,
    },
    /// Analyze every query in a JSON file, one JSON report per line
    Batch {
        /// Path to a JSON array of {"rolls": .., "target_sum": ..}
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Parser)]
#[command(name = "dicecount")]
#[command(about = "Count the ways dice can add up to a target")]
struct Cli {
    /// YAML file overriding the default query bounds
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Cmd,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn read_text_auto(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path)?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        Ok(String::from_utf8(bytes)?)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match cli.config.as_ref() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.cmd {
        Cmd::Analyze {
            rolls,
            target,
            skip_recursive,
            json,
        } => {
            config.skip_recursive |= skip_recursive;
            let report = analyze(Query::new(rolls, target), &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::render_report(&report));
            }
        }
        Cmd::Table { rolls, target } => {
            config.check(Query::new(rolls, target))?;
            let table = compute_table(rolls, target)?;
            print!("{}", render::render_table(&table));
        }
        Cmd::Batch { file } => {
            let text = read_text_auto(&file)?;
            let queries: Vec<Query> = serde_json::from_str(&text)?;
            tracing::info!(count = queries.len(), "running batch");
            for query in queries {
                let report = analyze(query, &config)?;
                println!("{}", serde_json::to_string(&report)?);
            }
        }
    }
    Ok(())
}
