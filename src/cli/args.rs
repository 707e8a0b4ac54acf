use std::path::PathBuf;

use clap::Parser;

use otter_world::config::{Config, ConfigOption};

/// Answer a questionnaire, and find a world consistent with the answers.
#[derive(Parser, Debug)]
#[command(name = "otter_world", version, about, long_about = None)]
pub(super) struct Args {
    /// The questionnaire to read.
    pub path: Option<PathBuf>,

    /// The seed for the source of randomness.
    #[arg(long)]
    pub seed: Option<u64>,

    /// The probability of valuing an atom true when freely choosing a value.
    #[arg(long, value_name = "PROBABILITY")]
    pub polarity_lean: Option<f64>,

    /// The probability of choosing a random atom to value, rather than the lowest.
    #[arg(long, value_name = "PROBABILITY")]
    pub random_decision_bias: Option<f64>,

    /// Prefer false values when committing to a world, for a smaller world.
    #[arg(long)]
    pub optimize: bool,

    /// The number of consistent answers a question needs to be asked.
    #[arg(long, value_name = "COUNT")]
    pub min_options: Option<usize>,

    /// Always choose the first answer offered, without asking.
    #[arg(long)]
    pub first: bool,

    /// Write the committed world as JSON.
    #[arg(long)]
    pub json: bool,

    /// Print help as markdown.
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Sets an option, or explains the bounds of the option.
fn set<T: Clone + PartialOrd + std::fmt::Display>(option: &mut ConfigOption<T>, value: Option<T>) -> Result<(), String> {
    let Some(value) = value else {
        return Ok(());
    };
    let (min, max) = option.min_max();
    match option.set(value.clone()) {
        true => Ok(()),
        false => Err(format!("{} must be between {min} and {max}, not {value}", option.name)),
    }
}

impl Args {
    /// The configuration requested by the arguments.
    pub(super) fn config(&self) -> Result<Config, String> {
        let mut config = Config::default();

        set(&mut config.seed, self.seed)?;
        set(&mut config.polarity_lean, self.polarity_lean)?;
        set(&mut config.random_decision_bias, self.random_decision_bias)?;
        set(&mut config.min_options, self.min_options)?;
        config.optimize.value = self.optimize;

        Ok(config)
    }
}
