//! Typewriter text reveal.
//!
//! [`TypewriterSession`] is the state machine (`Idle -> Revealing -> Done`)
//! holding the captured text and the reveal cursor. [`run`] drives a session
//! against a [`TextSurface`] with any async sleep primitive, so the same code
//! runs on browser timers and on a virtual clock in tests.

use std::future::Future;

use serde::Deserialize;

/// Display target the typewriter writes into.
pub trait TextSurface {
    /// Current visible text.
    fn text(&self) -> String;
    /// Replace the visible text.
    fn set_text(&self, text: &str);
}

/// Lifecycle phase of a [`TypewriterSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    Idle,
    Revealing,
    Done,
}

/// When the target is blanked relative to the start delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearMode {
    /// Blank as soon as the effect is started, then wait out the delay.
    #[default]
    Immediately,
    /// Keep the original text visible until the delay has elapsed.
    AfterDelay,
}

/// Page lifecycle signal that starts the effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartTrigger {
    /// `DOMContentLoaded`
    #[default]
    ContentReady,
    /// `load` (all resources fetched)
    Loaded,
}

/// Typewriter configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Selector of the tagline element.
    pub selector: String,
    /// Delay between two revealed characters.
    pub interval_ms: u32,
    /// Delay before the first interval starts.
    pub start_delay_ms: u32,
    pub clear: ClearMode,
    pub trigger: StartTrigger,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            selector: ".tagline".to_string(),
            interval_ms: 50,
            start_delay_ms: 2000,
            clear: ClearMode::Immediately,
            trigger: StartTrigger::ContentReady,
        }
    }
}

/// One typewriter run over a captured string.
///
/// The cursor counts `char`s, so multi-byte characters are revealed whole.
#[derive(Debug, Clone)]
pub struct TypewriterSession {
    source: String,
    /// Byte offset just past each character of `source`.
    ends: Vec<usize>,
    revealed: usize,
    phase: TypewriterPhase,
}

impl TypewriterSession {
    /// Creates an idle session over `source`.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let ends = source.char_indices().map(|(i, c)| i + c.len_utf8()).collect();
        Self {
            source,
            ends,
            revealed: 0,
            phase: TypewriterPhase::Idle,
        }
    }

    /// Captures the surface's current text as the session source.
    pub fn capture(surface: &impl TextSurface) -> Self {
        Self::new(surface.text())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of characters in the source.
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == TypewriterPhase::Done
    }

    /// Number of characters revealed so far.
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// The committed prefix.
    pub fn revealed(&self) -> &str {
        match self.revealed {
            0 => "",
            n => &self.source[..self.ends[n - 1]],
        }
    }

    /// `Idle -> Revealing`, or straight to `Done` for an empty source.
    ///
    /// Returns `true` if ticks are needed. Has no effect outside `Idle`.
    pub fn start(&mut self) -> bool {
        if self.phase == TypewriterPhase::Idle {
            self.phase = if self.is_empty() {
                TypewriterPhase::Done
            } else {
                TypewriterPhase::Revealing
            };
        }
        self.phase == TypewriterPhase::Revealing
    }

    /// Reveals the next character.
    ///
    /// Returns the character just revealed, or `None` when not revealing.
    pub fn tick(&mut self) -> Option<char> {
        if self.phase != TypewriterPhase::Revealing {
            return None;
        }

        let start = self.revealed.checked_sub(1).map_or(0, |i| self.ends[i]);
        let ch = self.source[start..].chars().next()?;
        self.revealed += 1;
        if self.revealed == self.len() {
            self.phase = TypewriterPhase::Done;
        }
        Some(ch)
    }
}

/// Drives `session` to completion against `surface`.
///
/// Timeline, with `sleep` as the only suspension point:
/// 1. blank the surface (unless [`ClearMode::AfterDelay`])
/// 2. sleep `start_delay_ms` if non-zero
/// 3. blank the surface (if [`ClearMode::AfterDelay`])
/// 4. until done: sleep `interval_ms`, reveal one character, write the prefix
///
/// No sleep is requested after the last character.
pub async fn run<S, D, F>(
    surface: &S,
    mut session: TypewriterSession,
    config: &TypewriterConfig,
    mut sleep: D,
) -> TypewriterSession
where
    S: TextSurface + ?Sized,
    D: FnMut(u32) -> F,
    F: Future<Output = ()>,
{
    if config.clear == ClearMode::Immediately {
        surface.set_text("");
    }
    if config.start_delay_ms > 0 {
        sleep(config.start_delay_ms).await;
    }
    if config.clear == ClearMode::AfterDelay {
        surface.set_text("");
    }

    if !session.start() {
        return session;
    }

    while !session.is_done() {
        sleep(config.interval_ms).await;
        if session.tick().is_some() {
            surface.set_text(session.revealed());
        }
    }

    session
}
