use std::sync::Arc;

use crate::{
    canopy::{cache::LandingCanopy, generator::LeafPoint},
    config::BloomConfig,
    content::{
        controller::ContentRequestController,
        slot::{ContentSlot, SlotKind, SlotStatus},
    },
    foundation::error::{BloomError, BloomResult},
    service::TextFetchService,
    view::machine::{Transition, ViewAction, ViewState, ViewStateMachine},
};

/// One run of the greeting experience: navigation, generated text and the landing canopy.
///
/// This is the surface a renderer talks to. Navigation goes through
/// [`dispatch`](Self::dispatch), which also fires the entry effect of the edge it takes.
#[derive(Debug)]
pub struct Session {
    machine: ViewStateMachine,
    content: ContentRequestController,
    canopy: LandingCanopy,
}

impl Session {
    /// Start on the landing screen with empty slots.
    pub fn new(config: &BloomConfig, service: Arc<dyn TextFetchService>) -> BloomResult<Self> {
        Ok(Self {
            machine: ViewStateMachine::new(),
            content: ContentRequestController::new(service, config.prompts()),
            canopy: LandingCanopy::new(config.canopy)?,
        })
    }

    /// Current screen.
    pub fn view(&self) -> ViewState {
        self.machine.state()
    }

    /// Recipient's name.
    pub fn recipient(&self) -> &str {
        self.content.prompts().recipient()
    }

    /// Navigate, then ensure the destination's content slot.
    ///
    /// Must be called inside a tokio runtime (the entry effect spawns the request).
    #[tracing::instrument(skip(self))]
    pub fn dispatch(&mut self, action: ViewAction) -> BloomResult<Transition> {
        let transition = self.machine.dispatch(action)?;
        if let Some(kind) = transition.entry_effect() {
            self.content.ensure_requested(kind);
        }
        Ok(transition)
    }

    /// The "request reassurance" button on the letter screen.
    pub fn request_reassurance(&mut self) -> BloomResult<()> {
        if self.view() != ViewState::Apology {
            return Err(BloomError::transition(format!(
                "reassurance can only be requested on Apology, not {:?}",
                self.view()
            )));
        }
        self.content.force_request(SlotKind::Reassurance)
    }

    /// The memoized landing canopy.
    pub fn canopy(&self) -> &[LeafPoint] {
        self.canopy.leaves()
    }

    /// Read access to a content slot.
    pub fn slot(&self, kind: SlotKind) -> &ContentSlot {
        self.content.slot(kind)
    }

    /// True while any text request is in flight.
    pub fn is_loading(&self) -> bool {
        self.content.is_loading()
    }

    /// Wait for the next slot update; `None` when nothing is loading.
    pub async fn pump(&mut self) -> Option<SlotKind> {
        self.content.pump().await
    }

    /// Apply already-arrived updates without waiting.
    pub fn try_pump(&mut self) -> usize {
        self.content.try_pump()
    }

    /// Wait until no text request is in flight.
    pub async fn settle(&mut self) {
        self.content.settle().await
    }

    /// Serializable view of everything a renderer reads, except the leaves themselves.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            view: self.view(),
            loading: self.is_loading(),
            recipient: self.recipient().to_string(),
            leaf_count: self.canopy().len(),
            poem: SlotSnapshot::from(self.slot(SlotKind::Poem)),
            reassurance: SlotSnapshot::from(self.slot(SlotKind::Reassurance)),
        }
    }
}

/// Point-in-time state of a session.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionSnapshot {
    /// Current screen.
    pub view: ViewState,
    /// Any request in flight.
    pub loading: bool,
    /// Recipient's name.
    pub recipient: String,
    /// Number of leaves in the canopy.
    pub leaf_count: usize,
    /// Poem slot.
    pub poem: SlotSnapshot,
    /// Reassurance slot.
    pub reassurance: SlotSnapshot,
}

/// Point-in-time state of one slot.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotSnapshot {
    /// Fetch status.
    pub status: SlotStatus,
    /// Displayable text, absent while empty or loading.
    pub text: Option<String>,
}

impl From<&ContentSlot> for SlotSnapshot {
    fn from(slot: &ContentSlot) -> Self {
        Self {
            status: slot.status(),
            text: slot.visible_text().map(str::to_string),
        }
    }
}
