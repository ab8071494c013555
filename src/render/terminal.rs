use crate::{
    render::prose::{APOLOGY_LETTER, GREETING_BODY, LANDING_TITLE},
    session::{SessionSnapshot, SlotSnapshot},
    view::machine::ViewState,
};

/// Shown in place of slot text while a request is in flight.
pub const LOADING_MARK: &str = "~ composing ~";

/// Plain-text rendering of the current screen, ending with the available commands.
pub fn render_screen(snapshot: &SessionSnapshot) -> String {
    let name = &snapshot.recipient;
    let mut lines: Vec<String> = Vec::new();

    match snapshot.view {
        ViewState::Landing => {
            lines.push(LANDING_TITLE.to_uppercase());
            lines.push(format!("a tree of {} hearts", snapshot.leaf_count));
            lines.push(String::new());
            lines.push(format!("[enter]    Enter {name}'s Heart"));
        }
        ViewState::Greeting => {
            lines.push(format!("HAPPY BIRTHDAY {}", name.to_uppercase()));
            lines.push("To My Dearest Friend".to_string());
            lines.push(String::new());
            lines.push(GREETING_BODY.to_string());
            lines.push(String::new());
            lines.push(slot_line(&snapshot.poem));
            lines.push(String::new());
            lines.push("[message]  A Personal Message".to_string());
            lines.push("[back]     Back to Tree".to_string());
        }
        ViewState::Apology => {
            lines.push("SINCERE APOLOGY".to_string());
            lines.push(format!("For {name}..."));
            lines.push(String::new());
            for paragraph in APOLOGY_LETTER {
                lines.push(paragraph.to_string());
                lines.push(String::new());
            }
            lines.push(slot_line(&snapshot.reassurance));
            lines.push(String::new());
            lines.push("[reassure] Request Reassurance".to_string());
            lines.push("[back]     Back".to_string());
            lines.push("[done]     Done".to_string());
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn slot_line(slot: &SlotSnapshot) -> String {
    match &slot.text {
        Some(text) => format!("  \"{text}\""),
        None => format!("  {LOADING_MARK}"),
    }
}
