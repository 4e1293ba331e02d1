//! Life Plan CLI
//!
//! Command-line front-end for the questionnaire and projection

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_plan::answers::AnswerKind;
use life_plan::report::{format_display_units, write_csv_file};
use life_plan::{
    Assumptions, HomeSummary, MeanSource, ProjectionConfig, ProjectionEngine, ProjectionResult,
    QuestionnaireSession, RandomSource, ResultStore, SimRng, SubmitOutcome,
};

#[derive(Parser, Debug)]
#[command(name = "life-plan", version, about = "Lifetime asset projection from a short questionnaire")]
struct Cli {
    /// JSON file holding the last completed result
    #[arg(long, global = true, default_value = life_plan::storage::DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer the questionnaire and print the projection
    Run {
        /// Answers in question order; missing ones are read from stdin
        answers: Vec<String>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Use the central value of every random draw
        #[arg(long, conflicts_with = "seed")]
        deterministic: bool,

        /// Directory with expense_brackets.csv and life_event_costs.csv
        #[arg(long)]
        assumptions: Option<PathBuf>,

        /// Last simulated age
        #[arg(long, default_value_t = 90, value_parser = clap::value_parser!(u32).range(1..=150))]
        last_age: u32,

        /// Write the yearly table to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Show the summary of the last completed run
    Last,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let store = ResultStore::new(&cli.data_file);

    match cli.command {
        Command::Last => {
            let summary = store.home_summary().context("reading last simulation")?;
            print_summary(&summary);
        }
        Command::Run {
            answers,
            seed,
            deterministic,
            assumptions,
            last_age,
            csv,
        } => {
            let assumptions = match assumptions {
                Some(dir) => Assumptions::from_csv_path(&dir)
                    .with_context(|| format!("loading assumptions from {}", dir.display()))?,
                None => Assumptions::default_plan(),
            };
            let config = ProjectionConfig {
                last_age,
                ..ProjectionConfig::default()
            };
            let engine = ProjectionEngine::new(assumptions, config);

            let result = if deterministic {
                run_questionnaire(QuestionnaireSession::new(engine, MeanSource), &answers)?
            } else {
                let rng = match seed {
                    Some(seed) => SimRng::seeded(seed),
                    None => SimRng::from_entropy(),
                };
                run_questionnaire(QuestionnaireSession::new(engine, rng), &answers)?
            };

            let Some(result) = result else {
                println!("Questionnaire not completed; nothing saved.");
                return Ok(());
            };

            print_result(&result);

            if let Some(path) = csv {
                write_csv_file(&result, &path)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("\nYearly table written to: {}", path.display());
            }

            let saved = store
                .save_simulation_result(&result)
                .context("saving simulation result")?;
            println!("Saved to {} at {}", store.path().display(), saved.timestamp);
        }
    }

    Ok(())
}

/// Feed command-line answers, then prompt on stdin, until complete
fn run_questionnaire<R: RandomSource>(
    mut session: QuestionnaireSession<R>,
    answers: &[String],
) -> Result<Option<ProjectionResult>> {
    let mut provided = answers.iter();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let initial = session.preview();
    println!(
        "Starting projection: final assets {} (x10,000)\n",
        display(initial.final_assets())
    );

    while let Some(question) = session.current_question() {
        let hint = match question.kind {
            AnswerKind::Number => "number".to_string(),
            AnswerKind::YesNo => "yes/no".to_string(),
            AnswerKind::Choice(options) => options.join("/"),
        };

        let raw = match provided.next() {
            Some(answer) => answer.clone(),
            None => {
                print!("{} [{}] ", question.prompt, hint);
                io::stdout().flush()?;
                match lines.next() {
                    Some(line) => line.context("reading answer")?,
                    None => return Ok(None),
                }
            }
        };

        match session.submit(&raw) {
            Some(SubmitOutcome::Preview(preview)) => {
                println!(
                    "  -> final assets {} (peak {})",
                    display(preview.final_assets()),
                    display(preview.total_savings)
                );
            }
            Some(SubmitOutcome::Completed { preview, result }) => {
                println!("  -> final assets {}", display(preview.final_assets()));
                return Ok(Some(result));
            }
            None => break,
        }
    }

    Ok(None)
}

fn display(amount: i64) -> String {
    format_display_units(amount as f64)
}

fn print_result(result: &ProjectionResult) {
    println!(
        "\nProjection from age {} ({} years, amounts x10,000):",
        result.start_age,
        result.years()
    );
    println!("{:>4} {:>10} {:>10} {:>10} {:>12}", "Age", "Income", "Expense", "Net", "Assets");
    println!("{}", "-".repeat(50));

    for row in result.yearly_rows() {
        println!(
            "{:>4} {:>10} {:>10} {:>10} {:>12}",
            row.age,
            display(row.income),
            display(row.expense),
            display(row.net),
            display(row.assets)
        );
    }

    println!("\nSummary (x10,000):");
    println!("  Peak Assets: {}", display(result.total_savings));
    println!("  Mean Yearly Savings: {}", format_display_units(result.yearly_savings));
    println!("  Final Assets: {}", display(result.final_assets()));
    if !result.life_events.is_empty() {
        println!("  Life Events: {:?}", result.life_events);
    }
    println!("  Advice: {}", result.advice);
}

fn print_summary(summary: &HomeSummary) {
    println!("Last simulation: {}", summary.timestamp);
    println!("  Peak Assets: {} (x10,000)", display(summary.total_savings));
    println!(
        "  Mean Yearly Savings: {} (x10,000)",
        format_display_units(summary.yearly_savings)
    );
    println!("  Advice: {}", summary.advice);

    if let Some((start_age, trajectory)) = &summary.trajectory {
        for (offset, assets) in trajectory.iter().enumerate().step_by(5) {
            println!("  Age {:>3}: {:>12}", *start_age as usize + offset, display(*assets));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_age_is_bounded() {
        let cli = Cli::try_parse_from(["life-plan", "run", "--last-age", "100"]).unwrap();
        assert!(matches!(cli.command, Command::Run { last_age: 100, .. }));

        assert!(Cli::try_parse_from(["life-plan", "run", "--last-age", "4000000000"]).is_err());
        assert!(Cli::try_parse_from(["life-plan", "run", "--last-age", "0"]).is_err());
    }

    #[test]
    fn test_data_file_after_subcommand() {
        let cli = Cli::try_parse_from(["life-plan", "last", "--data-file", "other.json"]).unwrap();
        assert_eq!(cli.data_file, PathBuf::from("other.json"));
        assert!(matches!(cli.command, Command::Last));
    }
}
