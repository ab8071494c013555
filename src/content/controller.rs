use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    content::{
        prompts::Prompts,
        slot::{ContentSlot, SlotKind, SlotStatus},
    },
    foundation::error::{BloomError, BloomResult},
    service::{ServiceError, TextFetchService},
};

#[derive(Debug)]
struct FetchOutcome {
    kind: SlotKind,
    generation: u64,
    result: Result<String, ServiceError>,
}

/// Owns the poem and reassurance slots and the request policy around them.
///
/// Requests run as spawned tokio tasks; their outcomes come back over a channel and are applied
/// only when the owner calls [`pump`](Self::pump), [`try_pump`](Self::try_pump) or
/// [`settle`](Self::settle). Slot state therefore only changes on the owner's event loop.
///
/// Every dispatch bumps the slot's generation. An outcome whose generation is no longer current
/// was superseded by a later [`force_request`](Self::force_request) and is discarded on arrival.
pub struct ContentRequestController {
    service: Arc<dyn TextFetchService>,
    prompts: Prompts,
    slots: [ContentSlot; 2],
    generations: [u64; 2],
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl std::fmt::Debug for ContentRequestController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentRequestController")
            .field("prompts", &self.prompts)
            .field("slots", &self.slots)
            .field("generations", &self.generations)
            .finish_non_exhaustive()
    }
}

impl ContentRequestController {
    /// Controller with both slots empty.
    pub fn new(service: Arc<dyn TextFetchService>, prompts: Prompts) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            service,
            prompts,
            slots: Default::default(),
            generations: [0; 2],
            outcome_tx,
            outcome_rx,
        }
    }

    /// Prompts and fallbacks in use.
    pub fn prompts(&self) -> &Prompts {
        &self.prompts
    }

    /// Read access to a slot.
    pub fn slot(&self, kind: SlotKind) -> &ContentSlot {
        &self.slots[kind.index()]
    }

    /// True while any slot is loading.
    pub fn is_loading(&self) -> bool {
        self.slots.iter().any(ContentSlot::is_loading)
    }

    /// Request `kind` once: dispatches only if the slot is still empty.
    ///
    /// Returns whether a request was dispatched. Outside a tokio runtime the request cannot run
    /// and the slot settles on its fallback immediately.
    #[tracing::instrument(skip(self))]
    pub fn ensure_requested(&mut self, kind: SlotKind) -> bool {
        if self.slot(kind).status() != SlotStatus::Empty {
            tracing::trace!(status = ?self.slot(kind).status(), "slot already requested");
            return false;
        }
        self.dispatch(kind);
        true
    }

    /// Request a fresh generation for `kind`, superseding any current or in-flight text.
    ///
    /// Only slots that allow retry (the reassurance) accept this.
    #[tracing::instrument(skip(self))]
    pub fn force_request(&mut self, kind: SlotKind) -> BloomResult<()> {
        if !kind.allows_retry() {
            return Err(BloomError::validation(format!(
                "slot {kind:?} cannot be re-requested"
            )));
        }
        self.dispatch(kind);
        Ok(())
    }

    fn dispatch(&mut self, kind: SlotKind) {
        let idx = kind.index();
        self.generations[idx] += 1;
        let generation = self.generations[idx];
        self.slots[idx].begin_loading();

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(err) => {
                let err = ServiceError::Network(format!("cannot spawn request: {err}"));
                self.fall_back(kind, &err);
                return;
            }
        };

        let service = Arc::clone(&self.service);
        let prompt = self.prompts.prompt(kind);
        let tx = self.outcome_tx.clone();
        tracing::debug!(?kind, generation, "dispatching text request");

        handle.spawn(async move {
            let result = service.request_text(&prompt).await;
            // The receiver lives as long as the controller; a send error means it is gone.
            let _ = tx.send(FetchOutcome {
                kind,
                generation,
                result,
            });
        });
    }

    /// Wait for the next outcome that changes a slot and apply it.
    ///
    /// Returns the slot that settled, or `None` immediately when nothing is loading.
    pub async fn pump(&mut self) -> Option<SlotKind> {
        while self.is_loading() {
            let outcome = self.outcome_rx.recv().await?;
            let kind = outcome.kind;
            if self.apply(outcome) {
                return Some(kind);
            }
        }
        None
    }

    /// Apply every outcome that has already arrived, without waiting.
    ///
    /// Returns the number of slots that changed.
    pub fn try_pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            if self.apply(outcome) {
                applied += 1;
            }
        }
        applied
    }

    /// Pump until no slot is loading.
    pub async fn settle(&mut self) {
        while self.pump().await.is_some() {}
    }

    fn apply(&mut self, outcome: FetchOutcome) -> bool {
        let idx = outcome.kind.index();
        if outcome.generation != self.generations[idx] {
            tracing::debug!(
                kind = ?outcome.kind,
                generation = outcome.generation,
                current = self.generations[idx],
                "discarding superseded text response"
            );
            return false;
        }
        if !self.slots[idx].is_loading() {
            return false;
        }

        match outcome.result {
            Ok(text) if !text.trim().is_empty() => {
                self.slots[idx].resolve(text.trim().to_string());
            }
            Ok(_) => self.fall_back(outcome.kind, &ServiceError::EmptyResponse),
            Err(err) => self.fall_back(outcome.kind, &err),
        }
        true
    }

    fn fall_back(&mut self, kind: SlotKind, err: &ServiceError) {
        tracing::warn!(?kind, error = %err, "text request failed; using fallback");
        let text = self.prompts.fallback(kind);
        self.slots[kind.index()].fall_back(text);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/controller.rs"]
mod tests;
