use std::str::FromStr;

use crate::{
    content::slot::SlotKind,
    foundation::error::{BloomError, BloomResult},
};

/// The screen currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// The heart tree.
    #[default]
    Landing,
    /// The birthday card with the generated poem.
    Greeting,
    /// The letter with the generated reassurance.
    Apology,
}

impl ViewState {
    /// Slot whose content this screen needs on entry.
    pub fn entry_slot(self) -> Option<SlotKind> {
        match self {
            ViewState::Landing => None,
            ViewState::Greeting => Some(SlotKind::Poem),
            ViewState::Apology => Some(SlotKind::Reassurance),
        }
    }

    /// Triggers accepted from this screen.
    pub fn available_actions(self) -> &'static [ViewAction] {
        match self {
            ViewState::Landing => &[ViewAction::Enter],
            ViewState::Greeting => &[ViewAction::PersonalMessage, ViewAction::Back],
            ViewState::Apology => &[ViewAction::Back, ViewAction::Done],
        }
    }
}

/// User-issued navigation trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewAction {
    /// Open the greeting card from the tree.
    Enter,
    /// Open the letter from the greeting card.
    PersonalMessage,
    /// Go one screen back.
    Back,
    /// Close the letter and return to the tree.
    Done,
}

impl ViewAction {
    /// Canonical command name.
    pub fn name(self) -> &'static str {
        match self {
            ViewAction::Enter => "enter",
            ViewAction::PersonalMessage => "message",
            ViewAction::Back => "back",
            ViewAction::Done => "done",
        }
    }
}

impl FromStr for ViewAction {
    type Err = BloomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enter" => Ok(ViewAction::Enter),
            "message" | "personal_message" | "personal-message" => {
                Ok(ViewAction::PersonalMessage)
            }
            "back" => Ok(ViewAction::Back),
            "done" => Ok(ViewAction::Done),
            other => Err(BloomError::validation(format!("unknown action '{other}'"))),
        }
    }
}

/// Destination of `action` from `from`, if the pair is a valid edge.
pub fn next_state(from: ViewState, action: ViewAction) -> Option<ViewState> {
    match (from, action) {
        (ViewState::Landing, ViewAction::Enter) => Some(ViewState::Greeting),
        (ViewState::Greeting, ViewAction::PersonalMessage) => Some(ViewState::Apology),
        (ViewState::Greeting, ViewAction::Back) => Some(ViewState::Landing),
        (ViewState::Apology, ViewAction::Back) => Some(ViewState::Greeting),
        (ViewState::Apology, ViewAction::Done) => Some(ViewState::Landing),
        _ => None,
    }
}

/// A completed edge of the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Screen before the trigger.
    pub from: ViewState,
    /// Trigger that fired.
    pub action: ViewAction,
    /// Screen after the trigger.
    pub to: ViewState,
}

impl Transition {
    /// Slot to ensure as the entry effect of this edge.
    pub fn entry_effect(&self) -> Option<SlotKind> {
        self.to.entry_slot()
    }
}

/// Holds the single current [`ViewState`]; [`dispatch`](Self::dispatch) is its only mutator.
#[derive(Clone, Debug, Default)]
pub struct ViewStateMachine {
    state: ViewState,
}

impl ViewStateMachine {
    /// Machine starting on the landing screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current screen.
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Apply `action`. Invalid triggers leave the state untouched and return an error.
    pub fn dispatch(&mut self, action: ViewAction) -> BloomResult<Transition> {
        let from = self.state;
        let to = next_state(from, action).ok_or_else(|| {
            BloomError::transition(format!("'{}' is not available on {from:?}", action.name()))
        })?;
        self.state = to;
        tracing::debug!(?from, ?to, ?action, "view transition");
        Ok(Transition { from, action, to })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/machine.rs"]
mod tests;
