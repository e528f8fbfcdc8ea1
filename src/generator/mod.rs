pub mod control;
pub mod nearby;
pub mod runner;
pub mod templates;

pub use self::control::{Progress, SearchControl, SearchEvent, SearchHandle, SearchPhase, SearchSink};
pub use self::runner::{SearchOutcome, SearchRequest, SearchSummary};

use self::control::ChannelSink;

use crate::config::ScoringConfig;
use crate::error::DfResult;
use crate::number::DigitString;
use serde::{Deserialize, Serialize};
use std::sync::{mpsc, Arc};
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedNumber {
    pub number: String,
    pub score: u8,
}

/// Tier-targeted search and nearby suggestions over one configuration snapshot.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: Arc<ScoringConfig>,
}

impl Generator {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Runs a search on the calling thread, streaming events into `sink`.
    pub fn generate<S: SearchSink + ?Sized>(
        &self,
        req: &SearchRequest,
        control: &SearchControl,
        sink: &mut S,
    ) -> DfResult<SearchSummary> {
        runner::run_search(&self.config, req, control, sink)
    }

    /// Blocking convenience: all matches in emission order plus the summary.
    pub fn collect(&self, req: &SearchRequest) -> DfResult<(Vec<GeneratedNumber>, SearchSummary)> {
        let mut events = Vec::new();
        let summary = self.generate(req, &SearchControl::new(), &mut events)?;
        let found = events
            .into_iter()
            .filter_map(|e| match e {
                SearchEvent::Found(n) => Some(n),
                _ => None,
            })
            .collect();
        Ok((found, summary))
    }

    pub fn spawn(&self, req: SearchRequest) -> DfResult<SearchHandle> {
        self.spawn_with_control(req, Arc::new(SearchControl::new()))
    }

    /// Starts the search on a dedicated worker thread. The request is
    /// validated up front so bad input fails here, not inside the worker.
    pub fn spawn_with_control(
        &self,
        req: SearchRequest,
        control: Arc<SearchControl>,
    ) -> DfResult<SearchHandle> {
        req.validate()?;

        let (tx, rx) = mpsc::channel();
        let mut sink = ChannelSink::new(tx);
        let config = Arc::clone(&self.config);
        let worker_control = Arc::clone(&control);

        let worker = thread::Builder::new()
            .name("digitforge-search".to_string())
            .spawn(move || runner::run_search(&config, &req, &worker_control, &mut sink))?;

        Ok(SearchHandle::new(control, rx, worker))
    }

    pub fn suggest_nearby(&self, number: &str, count: usize) -> DfResult<Vec<GeneratedNumber>> {
        let number = DigitString::parse(number)?;
        Ok(nearby::suggest_nearby(&number, count, &self.config))
    }
}
