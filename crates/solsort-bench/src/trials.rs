use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;
use solsort_bot::{SortError, TerminationReason, sort_report};
use solsort_core::Card;
use solsort_core::model::deck::Deck;
use thiserror::Error;
use tracing::{Level, event};

use crate::config::{BenchConfig, ResolvedOutputs};

/// Plays `trials.count` games on freshly shuffled reference decks.
pub struct TrialRunner {
    config: BenchConfig,
    outputs: ResolvedOutputs,
}

/// Totals for one run, also rendered as the Markdown summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub run_id: String,
    pub trials: usize,
    pub wins: usize,
    pub total_turns: usize,
    pub terminations: BTreeMap<String, usize>,
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
}

impl RunSummary {
    pub fn win_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.wins as f64 / self.trials as f64
        }
    }

    pub fn mean_turns(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.trials as f64
        }
    }

    fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# Trial summary: {}\n\n", self.run_id));
        out.push_str("| metric | value |\n|---|---|\n");
        out.push_str(&format!("| trials | {} |\n", self.trials));
        out.push_str(&format!("| wins | {} |\n", self.wins));
        out.push_str(&format!("| win rate | {:.3} |\n", self.win_rate()));
        out.push_str(&format!("| mean turns | {:.1} |\n", self.mean_turns()));
        out.push_str("\n## Terminations\n\n| reason | games |\n|---|---|\n");
        for (reason, count) in &self.terminations {
            out.push_str(&format!("| {reason} | {count} |\n"));
        }
        out
    }
}

#[derive(Debug, Serialize)]
struct TrialRow<'a> {
    run_id: &'a str,
    trial: usize,
    seed: u64,
    input: Vec<String>,
    output: Vec<String>,
    won: bool,
    termination: TerminationReason,
    turns: usize,
}

impl TrialRunner {
    pub fn new(config: BenchConfig, outputs: ResolvedOutputs) -> Self {
        Self { config, outputs }
    }

    /// Execute every trial, streaming JSONL rows to disk.
    pub fn run(&self) -> Result<RunSummary, TrialError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut rng = StdRng::seed_from_u64(self.config.seed.unwrap_or(0));
        let mut summary = RunSummary {
            run_id: self.config.run_id.clone(),
            trials: 0,
            wins: 0,
            total_turns: 0,
            terminations: BTreeMap::new(),
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
        };

        for trial in 0..self.config.trials.count {
            let seed = rng.next_u64();
            let mut trial_rng = StdRng::seed_from_u64(seed);
            let input = Deck::shuffled(
                Deck::reference(self.config.trials.deck_size).cards().to_vec(),
                &mut trial_rng,
            );
            let report = sort_report(input.cards(), self.config.rules, &mut trial_rng)?;
            let outcome = &report.outcome;

            summary.trials += 1;
            summary.total_turns += outcome.turns;
            if outcome.is_win() {
                summary.wins += 1;
            }
            *summary
                .terminations
                .entry(termination_label(outcome.termination).to_string())
                .or_default() += 1;

            let row = TrialRow {
                run_id: &self.config.run_id,
                trial,
                seed,
                input: labels(input.cards()),
                output: labels(&report.output),
                won: outcome.is_win(),
                termination: outcome.termination,
                turns: outcome.turns,
            };
            serde_json::to_writer(&mut writer, &row)?;
            writer.write_all(b"\n")?;

            event!(
                target: "solsort_bench::trial",
                Level::DEBUG,
                trial,
                seed,
                won = outcome.is_win(),
                turns = outcome.turns,
            );
        }

        writer.flush()?;
        fs::write(&self.outputs.summary_md, summary.to_markdown())?;
        Ok(summary)
    }
}

fn termination_label(reason: TerminationReason) -> &'static str {
    match reason {
        TerminationReason::Won => "won",
        TerminationReason::NoMoves => "no_moves",
        TerminationReason::TurnLimit => "turn_limit",
        TerminationReason::Repetition => "repetition",
    }
}

fn labels(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::to_string).collect()
}

fn ensure_parent(path: Option<&Path>) -> Result<(), TrialError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum TrialError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize trial row: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("game execution failed: {0}")]
    Sort(#[from] SortError),
}
