use super::runner::SearchSummary;
use super::GeneratedNumber;
use crate::consts::PAUSE_POLL;
use crate::error::{DfResult, DigitForgeError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::JoinHandle;
use std::time::Duration;
use strum_macros::Display;
use tracing::debug;

/// Cooperative cancel/pause flags shared between a search and its owner.
///
/// One control per run. Cancel is sticky: once set, every later checkpoint
/// returns `false`, including a checkpoint that is currently paused.
#[derive(Debug, Default)]
pub struct SearchControl {
    cancelled: AtomicBool,
    paused: AtomicBool,
    gate: Mutex<()>,
    wake: Condvar,
}

impl SearchControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.wake.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
        self.wake.notify_all();
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// Poll point for the search loop. Blocks while paused, waking at least
    /// every [`PAUSE_POLL`]. Returns `false` once cancelled.
    pub(crate) fn checkpoint(&self) -> bool {
        if self.is_paused() {
            let mut guard = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
            while self.is_paused() && !self.is_cancelled() {
                guard = match self.wake.wait_timeout(guard, PAUSE_POLL) {
                    Ok((g, _)) => g,
                    Err(poisoned) => poisoned.into_inner().0,
                };
            }
        }
        !self.is_cancelled()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchPhase {
    Templates,
    Random,
}

impl SearchPhase {
    /// Share of the overall run this phase is assumed to cover, as (start, span).
    fn span(self) -> (f64, f64) {
        match self {
            Self::Templates => (0.15, 0.55),
            Self::Random => (0.70, 0.30),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub phase: SearchPhase,
    pub processed: u64,
    pub total: u64,
    /// `processed / total` within the current phase.
    pub fraction: f64,
    pub found: usize,
    /// Requested match count, so `found / limit` renders from the event alone.
    pub limit: usize,
    /// `None` until enough of the run has elapsed to extrapolate.
    pub eta: Option<Duration>,
}

impl Progress {
    pub(crate) fn new(
        phase: SearchPhase,
        processed: u64,
        total: u64,
        found: usize,
        limit: usize,
        elapsed: Duration,
    ) -> Self {
        let fraction = if total == 0 {
            1.0
        } else {
            (processed as f64 / total as f64).min(1.0)
        };
        let (start, span) = phase.span();
        Self {
            phase,
            processed,
            total,
            fraction,
            found,
            limit,
            eta: estimate_remaining(elapsed, start + span * fraction),
        }
    }

    /// Estimated completion of the whole run in `0.0..=1.0`.
    pub fn overall(&self) -> f64 {
        let (start, span) = self.phase.span();
        start + span * self.fraction
    }
}

fn estimate_remaining(elapsed: Duration, overall: f64) -> Option<Duration> {
    if overall <= 0.0 || elapsed.is_zero() {
        return None;
    }
    let spent = elapsed.as_secs_f64();
    let remaining = (spent / overall - spent).max(0.0);
    Some(Duration::from_secs_f64(remaining))
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    Found(GeneratedNumber),
    Progress(Progress),
    /// Always the last event of a run.
    Completed(SearchSummary),
}

/// Receives events synchronously on the search thread.
pub trait SearchSink {
    fn emit(&mut self, event: SearchEvent);
}

// Unbounded: a slow consumer never throttles the search.
impl SearchSink for Sender<SearchEvent> {
    fn emit(&mut self, event: SearchEvent) {
        // A dropped receiver just means nobody is listening any more.
        let _ = self.send(event);
    }
}

/// Channel sink used by spawned searches. Notes the first event that finds
/// the receiver gone; the run itself continues to its normal end.
pub(crate) struct ChannelSink {
    tx: Sender<SearchEvent>,
    disconnected: bool,
}

impl ChannelSink {
    pub(crate) fn new(tx: Sender<SearchEvent>) -> Self {
        Self {
            tx,
            disconnected: false,
        }
    }
}

impl SearchSink for ChannelSink {
    fn emit(&mut self, event: SearchEvent) {
        if self.tx.send(event).is_err() && !self.disconnected {
            self.disconnected = true;
            debug!("Search event receiver dropped; later events are discarded");
        }
    }
}

impl SearchSink for Vec<SearchEvent> {
    fn emit(&mut self, event: SearchEvent) {
        self.push(event);
    }
}

/// A search running on a worker thread.
pub struct SearchHandle {
    control: Arc<SearchControl>,
    events: Receiver<SearchEvent>,
    worker: JoinHandle<DfResult<SearchSummary>>,
}

impl SearchHandle {
    pub(crate) fn new(
        control: Arc<SearchControl>,
        events: Receiver<SearchEvent>,
        worker: JoinHandle<DfResult<SearchSummary>>,
    ) -> Self {
        Self {
            control,
            events,
            worker,
        }
    }

    pub fn control(&self) -> &Arc<SearchControl> {
        &self.control
    }

    pub fn events(&self) -> &Receiver<SearchEvent> {
        &self.events
    }

    pub fn cancel(&self) {
        self.control.cancel();
    }

    pub fn pause(&self) {
        self.control.pause();
    }

    pub fn resume(&self) {
        self.control.resume();
    }

    pub fn join(self) -> DfResult<SearchSummary> {
        self.worker
            .join()
            .map_err(|_| DigitForgeError::Worker("search thread panicked".to_string()))?
    }

    /// Drains every event until the worker finishes, returning the matches in
    /// emission order.
    pub fn wait(self) -> DfResult<(Vec<GeneratedNumber>, SearchSummary)> {
        let found = self
            .events
            .iter()
            .filter_map(|event| match event {
                SearchEvent::Found(n) => Some(n),
                _ => None,
            })
            .collect();
        let summary = self.join()?;
        Ok((found, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_cancel_wakes_paused_checkpoint() {
        let control = Arc::new(SearchControl::new());
        control.pause();

        let c = control.clone();
        let waiter = thread::spawn(move || c.checkpoint());

        thread::sleep(Duration::from_millis(60));
        control.cancel();
        assert!(!waiter.join().unwrap());
    }

    #[test]
    fn test_checkpoint_passes_when_running() {
        let control = SearchControl::new();
        let start = Instant::now();
        assert!(control.checkpoint());
        assert!(start.elapsed() < PAUSE_POLL);
    }

    #[test]
    fn test_channel_sink_survives_dropped_receiver() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut sink = ChannelSink::new(tx);
        let p = Progress::new(SearchPhase::Templates, 1, 2, 0, 1, Duration::ZERO);

        sink.emit(SearchEvent::Progress(p.clone()));
        assert!(!sink.disconnected);
        assert!(matches!(rx.try_recv(), Ok(SearchEvent::Progress(_))));

        drop(rx);
        sink.emit(SearchEvent::Progress(p.clone()));
        assert!(sink.disconnected);
        sink.emit(SearchEvent::Progress(p));
        assert!(sink.disconnected);
    }

    #[test]
    fn test_progress_eta() {
        let p = Progress::new(SearchPhase::Random, 0, 100, 0, 5, Duration::from_secs(7));
        assert_eq!(p.limit, 5);
        assert!((p.overall() - 0.7).abs() < 1e-12);
        let eta = p.eta.unwrap();
        assert!((eta.as_secs_f64() - 3.0).abs() < 1e-6);

        let p = Progress::new(SearchPhase::Templates, 0, 10, 0, 5, Duration::ZERO);
        assert_eq!(p.eta, None);
    }
}
