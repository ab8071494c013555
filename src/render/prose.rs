//! Fixed screen copy.

/// Landing screen subtitle.
pub const LANDING_TITLE: &str = "Heart of Eternal Bloom";

/// Greeting card body.
pub const GREETING_BODY: &str = "Happy Birthday! My heart is so full just thinking about the \
amazing person you are. You save lives by day and make mine better by night just by being in \
it. I hope this year treats you with the gentleness you deserve and brings you more smiles than \
you can count. You're truly one of a kind.";

/// Apology letter paragraphs.
pub const APOLOGY_LETTER: [&str; 8] = [
    "Hey, I want to sincerely apologize for everything that happened yesterday. I've been \
thinking about it a lot, and I understand why you're upset. The situation was confusing, and I \
didn't handle it the right way.",
    "I should have been clearer from the beginning, and that's on me. She is genuinely just my \
girl best friend, nothing more than that. There has never been anything romantic between us at \
all.",
    "I didn't ask my friends to message you, and I didn't expect them to do that. But even so, I \
take full responsibility for it.",
    "I know how it must have looked from your side, and I'm really sorry for putting you in that \
position. You didn't deserve to feel angry, uncomfortable, or disrespected.",
    "My intention was never to hurt you or make you doubt anything. You mean a lot to me, and \
your feelings truly matter to me. If I were in your place, I'd probably feel the same way.",
    "I should've communicated better and reassured you earlier. I promise to be more careful and \
clear moving forward. I don't want misunderstandings to come between us.",
    "I value what we have, and I don't want this to define us. I hope you can see that my heart \
is in the right place.",
    "I'm really sorry for the stress and frustration this caused you. All I ask is a chance to \
talk it through properly. I care about you, and I want to make things right.",
];
