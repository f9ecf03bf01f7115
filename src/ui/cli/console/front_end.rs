use crate::session::Session;
use crate::streams::generators::DEFAULT_P;
use crate::ui::cli::console::render::{history_table, progress_line, seed_line};
use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

const TRIALS_MIN: u64 = 1;
const TRIALS_MAX: u64 = 1000;
const TRIALS_DEFAULT: u64 = 10;

/// Cosmetic pacing between printed samples; the core never sleeps.
const SAMPLE_DELAY: Duration = Duration::from_millis(5);

/// Interactive coin-toss console: prompts for a trial count, runs an
/// experiment, replays the mean progression, and prints the session history.
pub fn run<D: PromptDriver>(driver: &D) -> Result<()> {
    println!("Tossing a Coin\n");

    let p = driver.ask_f64(
        "Success probability?",
        "Chance of heads on each toss",
        DEFAULT_P,
        Some(0.0),
        Some(1.0),
    )?;
    let mut session = Session::new(p)?;
    println!("{}", seed_line());

    loop {
        let trials = driver.ask_u64(
            "Number of trials?",
            "Tosses to simulate in this experiment",
            TRIALS_DEFAULT,
            Some(TRIALS_MIN),
            Some(TRIALS_MAX),
        )?;

        println!("Running the experiment of {trials} trials.");
        let (tx, rx) = mpsc::channel();
        let record = session.run_experiment_with_progress(trials, tx)?;
        for sample in rx {
            println!("{}", progress_line(&sample));
            thread::sleep(SAMPLE_DELAY);
        }
        println!(
            "\nExperiment {} finished: mean {:.6} over {} trials.\n",
            record.id, record.mean, record.trial_count
        );
        println!("{}", history_table(session.log().snapshot()));

        let again = driver.ask_bool(
            "Run another experiment?",
            "History is kept for this session only",
            true,
        )?;
        if !again {
            break;
        }
    }

    Ok(())
}
