//! Fetch-and-display state shared by the weather cards

use std::future::Future;

use eframe::egui;
use tokio::task::JoinHandle;

use crate::state::StateEvent;
use crate::task::{drain_finished, take_finished};
use crate::weather::{SearchQuery, WeatherError};

/// What a card currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState<T> {
    Loading,
    /// Fixed, card-specific sentence
    Error(String),
    Ready(T),
}

impl<T> RenderState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
impl<T> RenderState<T> {
    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Ready(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Result of one fetch, tagged with the load that issued it
struct Settled<T> {
    generation: u64,
    result: Result<T, WeatherError>,
}

/// One card's fetch lifecycle.
///
/// Every `load` bumps the generation; a settlement from an older generation is
/// discarded so the card only ever shows data for the latest query.
pub struct CardState<T> {
    /// Card name for logs and status messages
    name: &'static str,
    /// Sentence shown on any failure
    error_message: String,
    render: RenderState<T>,
    /// Query of the latest load
    query: Option<SearchQuery>,
    /// Generation of the latest load
    generation: u64,
    /// Fetch issued by the latest load, until collected
    latest: Option<JoinHandle<Settled<T>>>,
    /// Superseded fetches not yet collected
    superseded: Vec<JoinHandle<Settled<T>>>,
}

impl<T: Send + 'static> CardState<T> {
    pub fn new(name: &'static str, error_message: impl Into<String>) -> Self {
        Self {
            name,
            error_message: error_message.into(),
            render: RenderState::Loading,
            query: None,
            generation: 0,
            latest: None,
            superseded: Vec::new(),
        }
    }

    pub fn render(&self) -> &RenderState<T> {
        &self.render
    }

    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    /// Whether any fetch (current or superseded) is still running
    pub fn has_pending(&self) -> bool {
        self.latest.is_some() || !self.superseded.is_empty()
    }

    /// Start a new fetch cycle for `query`.
    ///
    /// Previous fetches keep running; their results are dropped when they settle.
    pub fn load<F>(&mut self, query: SearchQuery, fetch: F) -> StateEvent
    where
        F: Future<Output = Result<T, WeatherError>> + Send + 'static,
    {
        self.generation += 1;
        let generation = self.generation;

        tracing::debug!("{} card: loading {} (generation {})", self.name, query, generation);

        self.render = RenderState::Loading;
        let event = StateEvent::StatusMessage(format!("Fetching {} for {}...", self.name, query));
        self.query = Some(query);

        let handle = tokio::spawn(async move {
            Settled {
                generation,
                result: fetch.await,
            }
        });
        if let Some(previous) = self.latest.replace(handle) {
            self.superseded.push(previous);
        }

        event
    }

    /// Apply a finished fetch. Returns `None` when `generation` is stale.
    pub fn settle(
        &mut self,
        generation: u64,
        result: Result<T, WeatherError>,
    ) -> Option<StateEvent> {
        if generation != self.generation {
            tracing::debug!(
                "{} card: discarding stale result (generation {}, latest {})",
                self.name,
                generation,
                self.generation
            );
            return None;
        }

        let query = self
            .query
            .as_ref()
            .map(|q| q.to_string())
            .unwrap_or_default();

        match result {
            Ok(payload) => {
                self.render = RenderState::Ready(payload);
                Some(StateEvent::StatusMessage(format!(
                    "Updated {} for {}",
                    self.name, query
                )))
            }
            Err(e) => {
                self.render = RenderState::Error(self.error_message.clone());
                let message = if e.is_not_found() {
                    format!("No {} for {}: location not found", self.name, query)
                } else {
                    format!("Failed to fetch {} for {}: {}", self.name, query, e)
                };
                Some(StateEvent::LogError(message))
            }
        }
    }

    /// Collect finished fetches; call once per frame
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<StateEvent> {
        let mut events = Vec::new();

        for finished in drain_finished(&mut self.superseded) {
            match finished {
                Ok(settled) => {
                    if let Some(event) = self.settle(settled.generation, settled.result) {
                        events.push(event);
                    }
                }
                Err(e) => tracing::warn!("Superseded {} task failed: {}", self.name, e),
            }
        }

        match take_finished(&mut self.latest) {
            Some(Ok(settled)) => {
                if let Some(event) = self.settle(settled.generation, settled.result) {
                    events.push(event);
                }
            }
            Some(Err(e)) => {
                self.render = RenderState::Error(self.error_message.clone());
                events.push(StateEvent::LogError(format!(
                    "{} task panicked: {}",
                    self.name, e
                )));
            }
            None => {}
        }

        if self.has_pending() {
            ctx.request_repaint();
        }

        events
    }
}
