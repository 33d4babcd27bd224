use std::sync::Arc;
use std::time::Duration;

use log::Logger;

use crate::contact::Outbox;
use crate::library::Library;
use crate::urls::Urls;

#[derive(Clone)]
pub struct Environment {
    pub logger: Arc<Logger>,
    pub library: Arc<dyn Library + Send + Sync>,
    pub outbox: Arc<dyn Outbox + Send + Sync>,
    pub urls: Arc<Urls>,
    pub config: Config,
}

impl Environment {
    pub fn new(
        logger: Arc<Logger>,
        library: Arc<dyn Library + Send + Sync>,
        outbox: Arc<dyn Outbox + Send + Sync>,
        urls: Arc<Urls>,
        config: Config,
    ) -> Self {
        Self {
            logger,
            library,
            outbox,
            urls,
            config,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// How long the contact-form stub waits before reporting success.
    pub(crate) submission_delay: Duration,
}

impl Config {
    pub fn new(submission_delay: Duration) -> Self {
        Self { submission_delay }
    }

    pub fn submission_delay(&self) -> Duration {
        self.submission_delay
    }
}
