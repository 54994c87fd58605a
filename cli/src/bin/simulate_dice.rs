use clap::Parser;
use dicecount::{compute_table, estimate, total_combinations, Query};

#[derive(Parser)]
#[command(name = "simulate-dice")]
#[command(about = "Monte Carlo sim: throw the dice many times and compare with the exact count")]
struct Args {
    /// Number of dice thrown per sample
    #[arg(long, default_value_t = 3)]
    rolls: i32,

    /// Sum to look for
    #[arg(long, default_value_t = 10)]
    target: i32,

    /// Number of samples
    #[arg(long, default_value_t = 100_000)]
    samples: u64,

    /// RNG seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Print the estimate as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let query = Query::new(args.rolls, args.target);
    let exact_ways = compute_table(args.rolls, args.target)?.answer();
    let exact = exact_ways as f64 / total_combinations(args.rolls as u32) as f64 * 100.0;
    let est = estimate(query, args.samples, args.seed)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&est)?);
        return Ok(());
    }

    println!("simulate-dice results");
    println!("---------------------");
    println!("rolls:              {}", args.rolls);
    println!("target:             {}", args.target);
    println!("samples:            {}", est.samples);
    println!("seed:               {}", args.seed);
    println!();
    println!("hits:               {}", est.hits);
    println!("estimated chance:   {:.2}%", est.percentage);
    println!("exact chance:       {:.2}%", exact);
    println!("difference:         {:+.2}%", est.percentage - exact);

    Ok(())
}
