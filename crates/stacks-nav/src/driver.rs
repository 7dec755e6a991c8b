//! Async host loop around the [`Coordinator`].
//!
//! Events are handled strictly in arrival order on the driver's task.
//! Lookups run on spawned tasks, each bounded by the configured timeout, and
//! report back through the same queue as UI events. Nothing else suspends.

use std::sync::Arc;
use std::time::Duration;

use stacks_catalog::{CatalogError, CatalogLookup};
use tokio::sync::mpsc;

use crate::coordinator::Coordinator;
use crate::error::NavError;
use crate::event::{AppEvent, Effect, LookupTicket};
use crate::history::History;
use crate::view::Renderer;

/// Cloneable handle for feeding events into a running [`Driver`].
#[derive(Debug, Clone)]
pub struct EventSender(mpsc::UnboundedSender<AppEvent>);

impl EventSender {
    /// Queue an event.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::QueueClosed`] if the driver has been dropped.
    pub fn send(&self, event: AppEvent) -> Result<(), NavError> {
        self.0.send(event).map_err(|_| NavError::QueueClosed)
    }
}

pub struct Driver<L, H, R> {
    coordinator: Coordinator<H>,
    lookup: Arc<L>,
    renderer: R,
    timeout: Duration,
    tx: mpsc::UnboundedSender<AppEvent>,
    rx: mpsc::UnboundedReceiver<AppEvent>,
    in_flight: usize,
}

impl<L, H, R> Driver<L, H, R>
where
    L: CatalogLookup,
    H: History,
    R: Renderer,
{
    pub fn new(coordinator: Coordinator<H>, lookup: L, renderer: R, timeout: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            coordinator,
            lookup: Arc::new(lookup),
            renderer,
            timeout,
            tx,
            rx,
            in_flight: 0,
        }
    }

    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender(self.tx.clone())
    }

    #[must_use]
    pub const fn coordinator(&self) -> &Coordinator<H> {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut Coordinator<H> {
        &mut self.coordinator
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Lookups and detail fetches started but not yet handled.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Handle one event now, perform its effects, and render.
    pub fn dispatch(&mut self, event: AppEvent) -> Vec<Effect> {
        if event.is_settlement() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        let effects = self.coordinator.handle(event);
        for effect in &effects {
            self.perform(effect);
        }
        self.renderer.render(&self.coordinator.view());
        effects
    }

    /// Wait for the next queued event and dispatch it.
    pub async fn step(&mut self) -> Option<Vec<Effect>> {
        let event = self.rx.recv().await?;
        Some(self.dispatch(event))
    }

    /// Dispatch queued events until every started lookup has reported back.
    pub async fn run_until_settled(&mut self) {
        while self.in_flight > 0 {
            if self.step().await.is_none() {
                break;
            }
        }
    }

    /// Dispatch events for as long as the driver lives.
    pub async fn run(&mut self) {
        while self.step().await.is_some() {}
    }

    fn perform(&mut self, effect: &Effect) {
        match effect {
            Effect::IssueLookup(ticket) => self.spawn_lookup(ticket.clone()),
            Effect::FetchDetail { identifier } => self.spawn_detail(identifier.clone()),
            Effect::PromptSignIn => tracing::debug!("sign-in prompt raised"),
        }
    }

    fn spawn_lookup(&mut self, ticket: LookupTicket) {
        self.in_flight += 1;
        let lookup = Arc::clone(&self.lookup);
        let tx = self.tx.clone();
        let timeout = self.timeout;
        tokio::spawn(async move {
            let LookupTicket { seq, request } = ticket;
            let event = match tokio::time::timeout(timeout, lookup.search(&request)).await {
                Ok(outcome) => AppEvent::LookupSettled { seq, outcome },
                Err(_) => AppEvent::LookupTimedOut {
                    seq,
                    after_secs: timeout.as_secs(),
                },
            };
            // A closed queue means the driver is gone; nobody is waiting.
            let _ = tx.send(event);
        });
    }

    fn spawn_detail(&mut self, identifier: String) {
        self.in_flight += 1;
        let lookup = Arc::clone(&self.lookup);
        let tx = self.tx.clone();
        let timeout = self.timeout;
        tokio::spawn(async move {
            let outcome = tokio::time::timeout(timeout, lookup.work(&identifier))
                .await
                .unwrap_or(Err(CatalogError::TimedOut {
                    secs: timeout.as_secs(),
                }));
            let _ = tx.send(AppEvent::DetailSettled {
                identifier,
                outcome,
            });
        });
    }
}
