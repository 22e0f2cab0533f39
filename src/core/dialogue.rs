use crate::constants::{REVEAL_MAX_SEC, REVEAL_SEC_PER_CHAR};

pub const SENTINEL_LINES: &[&str] = &[
    "Signal acquired. I keep watch over the core.",
    "Every electron here follows its orbit exactly. Nothing drifts unless I allow it.",
    "Scroll deeper and the shells open. Bring your own light.",
    "The glow you see is only what escapes. The rest stays inside.",
];

/// Typewriter progress for one line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub elapsed: f32,
    pub duration: f32,
    pub total: usize,
    /// Characters committed to the display so far.
    pub shown: usize,
}

impl Reveal {
    pub fn new(total_chars: usize) -> Self {
        Self {
            elapsed: 0.0,
            duration: reveal_duration(total_chars),
            total: total_chars,
            shown: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }

    /// Advance by `dt` and return the new committed count if it changed.
    pub fn step(&mut self, dt: f32) -> Option<usize> {
        if self.is_done() {
            return None;
        }
        self.elapsed += dt.max(0.0);
        let frac = if self.duration > 0.0 {
            (self.elapsed / self.duration).min(1.0)
        } else {
            1.0
        };
        let shown = ((self.total as f32 * frac).floor() as usize).min(self.total);
        if shown != self.shown {
            self.shown = shown;
            Some(shown)
        } else {
            None
        }
    }
}

/// Reveal time grows with line length up to a fixed ceiling.
#[inline]
pub fn reveal_duration(chars: usize) -> f32 {
    (chars as f32 * REVEAL_SEC_PER_CHAR).min(REVEAL_MAX_SEC)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogueMode {
    Closed,
    Open,
}

#[derive(Clone, Debug)]
pub struct Dialogue {
    lines: &'static [&'static str],
    index: usize,
    mode: DialogueMode,
    reveal: Option<Reveal>,
}

impl Default for Dialogue {
    fn default() -> Self {
        Self::new(SENTINEL_LINES)
    }
}

impl Dialogue {
    pub fn new(lines: &'static [&'static str]) -> Self {
        Self {
            lines,
            index: 0,
            mode: DialogueMode::Closed,
            reveal: None,
        }
    }

    pub fn mode(&self) -> DialogueMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode == DialogueMode::Open
    }

    pub fn line_index(&self) -> usize {
        self.index
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn reveal(&self) -> Option<&Reveal> {
        self.reveal.as_ref()
    }

    pub fn current_line(&self) -> &'static str {
        self.lines.get(self.index).copied().unwrap_or("")
    }

    pub fn open(&mut self) {
        self.mode = DialogueMode::Open;
        self.index = 0;
        self.restart_reveal();
    }

    pub fn advance(&mut self) {
        if !self.is_open() || self.lines.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.lines.len();
        self.restart_reveal();
    }

    /// Close and drop any in-flight reveal.
    pub fn close(&mut self) {
        self.mode = DialogueMode::Closed;
        self.reveal = None;
    }

    /// Advance the reveal; returns the text to display when it changed.
    pub fn tick(&mut self, dt: f32) -> Option<&'static str> {
        let line = self.current_line();
        let shown = self.reveal.as_mut()?.step(dt)?;
        Some(prefix_chars(line, shown))
    }

    /// Text currently committed to the display.
    pub fn visible_text(&self) -> &'static str {
        match (&self.reveal, self.mode) {
            (Some(r), DialogueMode::Open) => prefix_chars(self.current_line(), r.shown),
            _ => "",
        }
    }

    fn restart_reveal(&mut self) {
        self.reveal = Some(Reveal::new(self.current_line().chars().count()));
    }
}

/// First `n` characters of `s`, respecting UTF-8 boundaries.
pub fn prefix_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
