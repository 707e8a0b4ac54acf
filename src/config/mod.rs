/*!
Configuration of a world, and of the oracle within.

All configuration is contained in a [Config], which is cloned into a [context](crate::context) when the context is created.
Each option is a [ConfigOption], carrying bounds checked by [set](ConfigOption::set) and the cli.

The default configuration gives deterministic solves, with free decisions made true on the lowest atom without a value.
*/

mod config_option;
pub use config_option::ConfigOption;

/// Representation for the probability of choosing `true`.
pub type PolarityLean = f64;

/// Representation for the probability of making a random decision.
pub type RandomDecisionBias = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The probability of assigning positive polarity to an atom when freely choosing a value.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The probability of choosing a random atom without a value, rather than the lowest.
    pub random_decision_bias: ConfigOption<RandomDecisionBias>,

    /// The seed for the source of randomness.
    pub seed: ConfigOption<u64>,

    /// When committing, prefer to value atoms false when free to choose.
    ///
    /// This gives smaller worlds, as only what is required is made true.
    pub optimize: ConfigOption<bool>,

    /// The time limit for a solve, with zero for no limit.
    pub time_limit: ConfigOption<std::time::Duration>,

    /// The number of consistent answers a question needs to be asked during a dialogue.
    pub min_options: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 1.0,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },

            optimize: ConfigOption {
                name: "optimize",
                min: false,
                max: true,
                value: false,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: std::time::Duration::from_secs(0),
                max: std::time::Duration::MAX,
                value: std::time::Duration::from_secs(0),
            },

            min_options: ConfigOption {
                name: "min_options",
                min: 1,
                max: usize::MAX,
                value: 2,
            },
        }
    }
}

impl Config {
    /// The time limit of a solve, if some limit is set.
    pub fn time_limit(&self) -> Option<std::time::Duration> {
        match self.time_limit.value.is_zero() {
            true => None,
            false => Some(self.time_limit.value),
        }
    }
}
