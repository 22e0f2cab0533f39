/// User intents coming from `[data-action]` buttons and the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Summon,
    Next,
    Close,
    ToggleQuality,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Summon,
        Action::Next,
        Action::Close,
        Action::ToggleQuality,
    ];

    /// Parse a `data-action` attribute value.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim() {
            "summon" => Some(Action::Summon),
            "next" => Some(Action::Next),
            "close" => Some(Action::Close),
            "quality" => Some(Action::ToggleQuality),
            _ => None,
        }
    }

    pub fn attr(self) -> &'static str {
        match self {
            Action::Summon => "summon",
            Action::Next => "next",
            Action::Close => "close",
            Action::ToggleQuality => "quality",
        }
    }
}

/// Keyboard binding. Enter and Space only advance while the dialogue is open
/// so they keep their default behavior otherwise.
#[inline]
pub fn action_for_key(key: &str, dialogue_open: bool) -> Option<Action> {
    match key {
        "Escape" | "Esc" if dialogue_open => Some(Action::Close),
        "Enter" | " " | "Spacebar" if dialogue_open => Some(Action::Next),
        "q" | "Q" => Some(Action::ToggleQuality),
        _ => None,
    }
}
