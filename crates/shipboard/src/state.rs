//! Application state shared by all request handlers.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local};

use shipboard_core::cruise::CruiseConfig;
use shipboard_core::ics::IcsDocumentBuilder;
use shipboard_core::storage::EventRepository;

use crate::{config::Config, mock_data::generate_demo_events, storage::InMemoryRepository};

/// Source of "now" in the observer's local time zone.
pub type Clock = Arc<dyn Fn() -> DateTime<FixedOffset> + Send + Sync>;

/// Shared application state.
///
/// Cloned for each request handler. The cruise configuration and the ICS
/// builder are immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Event repository.
    pub event_repo: Arc<dyn EventRepository>,
    /// The current sailing.
    pub cruise: Arc<CruiseConfig>,
    /// Renders `.ics` downloads.
    pub ics: Arc<IcsDocumentBuilder>,
    clock: Clock,
}

impl AppState {
    /// Creates state with an empty in-memory repository and the system clock.
    pub fn new(cruise: CruiseConfig, calendar_name: impl Into<String>) -> Self {
        Self {
            event_repo: Arc::new(InMemoryRepository::new()),
            cruise: Arc::new(cruise),
            ics: Arc::new(IcsDocumentBuilder::new(calendar_name)),
            clock: Arc::new(|| Local::now().fixed_offset()),
        }
    }

    /// Creates state from the loaded configuration.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let state = Self::new(config.cruise_config()?, config.calendar_name.clone());

        if config.seed_demo_events {
            state.seed_demo_events().await?;
        }

        Ok(state)
    }

    /// Replaces the clock (useful for testing).
    pub fn with_clock(
        mut self,
        clock: impl Fn() -> DateTime<FixedOffset> + Send + Sync + 'static,
    ) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Current time in the observer's local time zone.
    pub fn now(&self) -> DateTime<FixedOffset> {
        (self.clock)()
    }

    /// Fills the repository with the demo schedule for this sailing.
    pub async fn seed_demo_events(&self) -> anyhow::Result<()> {
        let events = generate_demo_events(&self.cruise);
        let count = events.len();

        for event in &events {
            self.event_repo.create_event(event).await?;
        }

        tracing::info!(count, "Seeded demo events");
        Ok(())
    }
}
