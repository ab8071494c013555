use crate::content::slot::SlotKind;

/// Recipient used when no name is configured.
pub const DEFAULT_RECIPIENT: &str = "Alisha";

/// Fixed prompts and fallback texts, personalised with the recipient's name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompts {
    recipient: String,
}

impl Default for Prompts {
    fn default() -> Self {
        Self::new(DEFAULT_RECIPIENT)
    }
}

impl Prompts {
    /// Prompts for `recipient`; a blank name falls back to [`DEFAULT_RECIPIENT`].
    pub fn new(recipient: impl Into<String>) -> Self {
        let recipient = recipient.into();
        let recipient = match recipient.trim() {
            "" => DEFAULT_RECIPIENT.to_string(),
            name => name.to_string(),
        };
        Self { recipient }
    }

    /// The recipient's name.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Prompt sent to the text service for `kind`.
    pub fn prompt(&self, kind: SlotKind) -> String {
        let name = &self.recipient;
        match kind {
            SlotKind::Poem => format!(
                "Write a beautiful, very short (under 25 words), and sophisticated birthday poem \
                 for {name}. Focus on their kind soul and the light they bring to the world."
            ),
            SlotKind::Reassurance => format!(
                "Write a short, gentle sentence of reassurance for a friend named {name}, telling \
                 them that their feelings are valid and the friendship is a safe space. Keep it \
                 under 20 words."
            ),
        }
    }

    /// Text stored when the request for `kind` fails.
    pub fn fallback(&self, kind: SlotKind) -> String {
        match kind {
            SlotKind::Poem => format!(
                "In the dance of life, you shine the brightest {}. Happy Birthday to my amazing \
                 friend.",
                self.recipient
            ),
            SlotKind::Reassurance => "I value you more than words can express.".to_string(),
        }
    }
}
