/// Which generated text a slot holds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    /// Birthday poem shown on the greeting card.
    Poem,
    /// Reassurance sentence shown under the apology letter.
    Reassurance,
}

impl SlotKind {
    /// Both slots, in index order.
    pub const ALL: [SlotKind; 2] = [SlotKind::Poem, SlotKind::Reassurance];

    pub(crate) fn index(self) -> usize {
        match self {
            SlotKind::Poem => 0,
            SlotKind::Reassurance => 1,
        }
    }

    /// Whether the user can explicitly ask for a fresh generation.
    pub fn allows_retry(self) -> bool {
        matches!(self, SlotKind::Reassurance)
    }
}

/// Fetch lifecycle of a slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    /// Never requested.
    #[default]
    Empty,
    /// A request is in flight.
    Loading,
    /// The service produced text.
    Ready,
    /// The request failed; the slot holds its fallback text.
    FailedWithFallback,
}

/// One piece of generated text plus its fetch status.
///
/// Only the content controller mutates slots; everyone else gets `&ContentSlot`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContentSlot {
    text: String,
    status: SlotStatus,
}

impl ContentSlot {
    /// Current status.
    pub fn status(&self) -> SlotStatus {
        self.status
    }

    /// Stored text; empty unless the slot is `Ready` or `FailedWithFallback`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text to display, or `None` while empty or loading.
    pub fn visible_text(&self) -> Option<&str> {
        match self.status {
            SlotStatus::Ready | SlotStatus::FailedWithFallback => Some(&self.text),
            SlotStatus::Empty | SlotStatus::Loading => None,
        }
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == SlotStatus::Loading
    }

    pub(crate) fn begin_loading(&mut self) {
        self.status = SlotStatus::Loading;
        self.text.clear();
    }

    pub(crate) fn resolve(&mut self, text: String) {
        self.status = SlotStatus::Ready;
        self.text = text;
    }

    pub(crate) fn fall_back(&mut self, text: impl Into<String>) {
        self.status = SlotStatus::FailedWithFallback;
        self.text = text.into();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/slot.rs"]
mod tests;
