use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use solsort_bench::config::{BenchConfig, ResolvedOutputs};
use solsort_bench::logging::init_logging;
use solsort_bench::trials::TrialRunner;
use solsort_core::Card;

/// Solitaire sort harness: sort one hand of cards or benchmark many shuffles.
#[derive(Debug, Parser)]
#[command(
    name = "solsort-bench",
    author,
    version,
    about = "Best-effort card sorting by playing solitaire"
)]
struct Cli {
    /// Path to a YAML configuration file. Defaults apply when omitted.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the RNG seed used for shuffling.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Override the number of trials to play.
    #[arg(long, value_name = "COUNT")]
    trials: Option<usize>,

    /// Override the per-game turn budget.
    #[arg(long, value_name = "TURNS")]
    max_turns: Option<usize>,

    /// Exit after validating the configuration.
    #[arg(long)]
    validate_only: bool,

    /// Cards to sort once, e.g. `3 A K 10 #20`. Runs trials when empty.
    #[arg(value_name = "CARDS")]
    cards: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match cli.config.as_ref() {
        Some(path) => BenchConfig::from_path(path)?,
        None => BenchConfig::default(),
    };

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    if let Some(trials) = cli.trials {
        config.trials.count = trials;
    }

    if let Some(max_turns) = cli.max_turns {
        config.rules.max_turns = max_turns;
    }

    config.validate()?;

    let cards = cli
        .cards
        .iter()
        .map(|text| {
            text.parse::<Card>()
                .with_context(|| format!("invalid card '{text}'"))
        })
        .collect::<anyhow::Result<Vec<Card>>>()?;

    if cli.validate_only {
        println!(
            "Configuration '{}' is valid; nothing was played.",
            config.run_id
        );
        return Ok(());
    }

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let logging_guard = init_logging(&config.logging, &outputs)?;

    if !cards.is_empty() {
        let report = solsort_bot::sort_report(
            &cards,
            config.rules,
            &mut seeded_rng(config.seed),
        )?;
        let rendered: Vec<String> = report.output.iter().map(Card::to_string).collect();
        println!("{}", rendered.join(" "));
        println!(
            "{:?} after {} turn{} ({:?})",
            report.outcome.status,
            report.outcome.turns,
            if report.outcome.turns == 1 { "" } else { "s" },
            report.outcome.termination
        );
        return Ok(());
    }

    let run_id = config.run_id.clone();
    let summary = TrialRunner::new(config, outputs).run()?;
    println!(
        "Trials complete for '{run_id}': {} games, {} won ({:.1}%) -> {}",
        summary.trials,
        summary.wins,
        summary.win_rate() * 100.0,
        summary.jsonl_path.display()
    );
    println!("Summary table: {}", summary.summary_path.display());
    if let Some(telemetry_path) = logging_guard.telemetry_path.as_ref() {
        println!("Telemetry log: {}", telemetry_path.display());
    }

    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> rand::rngs::StdRng {
    use rand::SeedableRng;
    match seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_entropy(),
    }
}
