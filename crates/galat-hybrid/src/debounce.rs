//! Keystroke debouncing.
//!
//! [`Debouncer`] is a plain two-state machine driven by explicit instants, so
//! it can be stepped deterministically. [`drive`] runs it on the tokio timer
//! against a stream of raw query values.
use futures::{Stream, StreamExt};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{sleep_until, Instant};
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebounceState {
    Idle,
    /// A single scheduled commit. Replacing it is the only way to cancel it.
    Pending { query: String, deadline: Instant },
}

/// Turns a rapidly changing raw query into committed queries.
///
/// A non-blank raw query schedules a commit `interval` after it arrives and
/// replaces any commit already scheduled. A blank one commits immediately.
/// The committed query therefore only moves once typing has paused for the
/// full interval.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    raw_query: String,
    committed_query: String,
    state: DebounceState,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self { interval, raw_query: String::new(), committed_query: String::new(), state: DebounceState::Idle }
    }

    pub fn from_millis(interval_ms: u64) -> Self {
        Self::new(Duration::from_millis(interval_ms))
    }

    /// Records a raw query change at `now`.
    ///
    /// Returns the committed query when the change commits on the spot (blank
    /// input), `None` when a commit was scheduled instead.
    pub fn set_query(&mut self, raw: impl Into<String>, now: Instant) -> Option<String> {
        let raw = raw.into();
        self.cancel();
        self.raw_query.clone_from(&raw);
        if raw.trim().is_empty() {
            trace!("blank query, committing immediately");
            return Some(self.commit(raw));
        }
        let deadline = now + self.interval;
        trace!(query = %raw, ?deadline, "commit scheduled");
        self.state = DebounceState::Pending { query: raw, deadline };
        None
    }

    /// Fires the scheduled commit if its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = matches!(&self.state, DebounceState::Pending { deadline, .. } if *deadline <= now);
        if !due {
            return None;
        }
        match std::mem::replace(&mut self.state, DebounceState::Idle) {
            DebounceState::Pending { query, .. } => Some(self.commit(query)),
            DebounceState::Idle => None,
        }
    }

    /// Drops the scheduled commit, if any. Returns whether one was dropped.
    pub fn cancel(&mut self) -> bool {
        let was_pending = matches!(self.state, DebounceState::Pending { .. });
        if was_pending {
            trace!("pending commit cancelled");
        }
        self.state = DebounceState::Idle;
        was_pending
    }

    fn commit(&mut self, query: String) -> String {
        self.state = DebounceState::Idle;
        self.committed_query.clone_from(&query);
        query
    }

    pub fn deadline(&self) -> Option<Instant> {
        match &self.state {
            DebounceState::Pending { deadline, .. } => Some(*deadline),
            DebounceState::Idle => None,
        }
    }

    /// True while a commit is scheduled; drives the "searching…" indicator.
    pub fn is_searching(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    pub fn state(&self) -> &DebounceState {
        &self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    pub fn committed_query(&self) -> &str {
        &self.committed_query
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebounceEvent {
    /// A commit is now pending for this raw query.
    Searching(String),
    Committed(String),
}

/// Runs `debouncer` against a stream of raw query values on the tokio clock.
///
/// Emits `Searching` whenever a commit gets scheduled and `Committed` whenever
/// one fires. When the input ends, a commit still pending fires at its
/// deadline before this returns. Returns early if the receiver is gone.
pub async fn drive<S>(debouncer: &mut Debouncer, mut keystrokes: S, events: UnboundedSender<DebounceEvent>)
where
    S: Stream<Item = String> + Unpin,
{
    let mut input_open = true;
    loop {
        let deadline = debouncer.deadline();
        if !input_open && deadline.is_none() {
            return;
        }
        let timer = sleep_until(deadline.unwrap_or_else(Instant::now));
        tokio::select! {
            next = keystrokes.next(), if input_open => match next {
                Some(raw) => {
                    let event = match debouncer.set_query(raw.clone(), Instant::now()) {
                        Some(committed) => DebounceEvent::Committed(committed),
                        None => DebounceEvent::Searching(raw),
                    };
                    if events.send(event).is_err() {
                        return;
                    }
                }
                None => input_open = false,
            },
            () = timer, if deadline.is_some() => {
                if let Some(committed) = debouncer.poll(Instant::now()) {
                    if events.send(DebounceEvent::Committed(committed)).is_err() {
                        return;
                    }
                }
            }
        }
    }
}
