// crates/check_dependent_docstrings/src/config.rs

use clap::ArgMatches;

/// Runtime configuration composed from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub files: String, // raw, unsplit --files value
    pub verbose: bool,
}

impl AppConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            files: matches
                .get_one::<String>("files")
                .cloned()
                .unwrap_or_default(),
            verbose: matches.get_flag("verbose"),
        }
    }
}
