//! Widget state and the submit transition.
//!
//! `Idle -> Validating -> (Error | Fetching)`, `Fetching -> (Success | Error)`,
//! and any settled state goes back to `Validating` on the next submission.
//!
//! State sits behind a mutex that is never held across an await, so the view
//! can be rendered while a fetch is outstanding. Every valid submission takes
//! a new sequence token; a resolution whose token is no longer the latest is
//! dropped instead of overwriting newer state.

use parking_lot::Mutex;
use std::fmt;
use tracing::{debug, warn};

use crate::{
    clock::Clock,
    fetcher::WeatherFetcher,
    format::{format_condition, format_location, format_temperature},
    model::WeatherResult,
};

/// User-facing error. Every fetch failure collapses to `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMessage {
    EmptyInput,
    NotFound,
}

impl ErrorMessage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorMessage::EmptyInput => "Please Enter a Valid Location",
            ErrorMessage::NotFound => "Not found. Please Try Again.",
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the widget shows, minus the derived strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetState {
    pub query: String,
    pub result: Option<WeatherResult>,
    pub error: Option<ErrorMessage>,
    pub busy: bool,
}

/// How a call to [`Widget::submit`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; no request was made.
    Rejected,
    Loaded,
    Failed,
    /// A newer submission was issued before this one resolved.
    Superseded,
}

/// The three result lines, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLines {
    pub temperature: String,
    pub condition: String,
    pub location: String,
}

/// Render-ready view of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub query: String,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub error_line: Option<String>,
    pub result_lines: Option<ResultLines>,
}

impl WidgetState {
    /// Derive the view. An error hides any stored result.
    pub fn view(&self, clock: &dyn Clock) -> WidgetView {
        let result_lines = match (&self.error, &self.result) {
            (None, Some(result)) => Some(ResultLines {
                temperature: format_temperature(result.temperature, &result.unit),
                condition: format_condition(&result.description),
                location: format_location(&result.location, clock),
            }),
            _ => None,
        };

        WidgetView {
            query: self.query.clone(),
            submit_enabled: !self.busy,
            submit_label: if self.busy { "Loading..." } else { "Search" },
            error_line: self.error.map(|e| e.to_string()),
            result_lines,
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: WidgetState,
    latest: u64,
}

#[derive(Debug)]
pub struct Widget<F> {
    fetcher: F,
    inner: Mutex<Inner>,
}

impl<F: WeatherFetcher> Widget<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher, inner: Mutex::new(Inner::default()) }
    }

    #[cfg(test)]
    fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Input binding; called on every keystroke. Stored untrimmed.
    pub fn set_query(&self, text: impl Into<String>) {
        self.inner.lock().state.query = text.into();
    }

    pub fn query(&self) -> String {
        self.inner.lock().state.query.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.inner.lock().state.busy
    }

    pub fn snapshot(&self) -> WidgetState {
        self.inner.lock().state.clone()
    }

    pub fn view(&self, clock: &dyn Clock) -> WidgetView {
        self.snapshot().view(clock)
    }

    /// Submit whatever is currently in the input.
    pub async fn submit_query(&self) -> SubmitOutcome {
        let query = self.query();
        self.submit(&query).await
    }

    /// Validate `raw_query`, fetch, and record the outcome.
    ///
    /// Never fails: every error ends up in [`WidgetState::error`].
    pub async fn submit(&self, raw_query: &str) -> SubmitOutcome {
        let location = raw_query.trim();

        if location.is_empty() {
            let mut inner = self.inner.lock();
            // Anything still in flight must not land on top of this error.
            inner.latest += 1;
            inner.state.error = Some(ErrorMessage::EmptyInput);
            inner.state.result = None;
            inner.state.busy = false;
            return SubmitOutcome::Rejected;
        }

        let token = {
            let mut inner = self.inner.lock();
            inner.latest += 1;
            inner.state.error = None;
            inner.state.busy = true;
            inner.latest
        };
        let _busy = BusyGuard { inner: &self.inner, token };

        debug!(location, token, "fetching current weather");
        let fetched = self.fetcher.fetch_weather(location).await;

        let mut inner = self.inner.lock();
        if inner.latest != token {
            debug!(location, token, latest = inner.latest, "discarding stale weather response");
            return SubmitOutcome::Superseded;
        }

        match fetched {
            Ok(result) => {
                debug!(location, token, temperature = result.temperature, "weather loaded");
                inner.state.result = Some(result);
                inner.state.error = None;
                SubmitOutcome::Loaded
            }
            Err(err) => {
                warn!(location, token, error = %err, "weather fetch failed");
                inner.state.error = Some(ErrorMessage::NotFound);
                inner.state.result = None;
                SubmitOutcome::Failed
            }
        }
    }
}

/// Clears the busy flag when a submission ends, however it ends,
/// unless a newer submission owns it by then.
struct BusyGuard<'a> {
    inner: &'a Mutex<Inner>,
    token: u64,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let mut inner = self.inner.lock();
        if inner.latest == self.token {
            inner.state.busy = false;
        }
    }
}
