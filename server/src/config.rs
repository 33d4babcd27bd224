use std::env;
use std::time::Duration;

/// Returns the value of the named environment variable if it exists or panics.
pub fn get_variable(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("must define {} environment variable", name))
}

/// Returns the simulated submission delay read from
/// `HUB_SUBMISSION_DELAY_MS`.
pub fn get_submission_delay() -> Duration {
    Duration::from_millis(
        get_variable("HUB_SUBMISSION_DELAY_MS")
            .parse()
            .expect("parse HUB_SUBMISSION_DELAY_MS as u64"),
    )
}
