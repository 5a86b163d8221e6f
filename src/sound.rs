//! Sound cue gating and keystroke debounce.
//!
//! Audio synthesis belongs to the rendering layer; this module decides
//! *whether* a cue should play, from the user's preferences and the cue's
//! channel. Keystroke cues are additionally debounced (90ms trailing) so a
//! burst of typing produces one tick. The debounce delays sound feedback
//! only; the filtering pipeline recomputes synchronously on every
//! keystroke regardless.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Trailing debounce window for keystroke cues.
pub const KEY_DEBOUNCE: Duration = Duration::from_millis(90);

/// UI events that carry a sound cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Hover,
    Click,
    Select,
    Open,
    Tab,
    Toggle,
    Reset,
    Focus,
    Key,
}

/// Preference channels a cue can be muted through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundChannel {
    Cards,
    Tabs,
    Typing,
}

impl SoundCue {
    pub fn channel(&self) -> SoundChannel {
        match self {
            SoundCue::Hover | SoundCue::Click | SoundCue::Select | SoundCue::Open => {
                SoundChannel::Cards
            }
            SoundCue::Tab | SoundCue::Toggle | SoundCue::Reset => SoundChannel::Tabs,
            SoundCue::Focus | SoundCue::Key => SoundChannel::Typing,
        }
    }
}

/// Per-channel mute toggles. All on by default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChannelToggles {
    pub cards: bool,
    pub tabs: bool,
    pub typing: bool,
}

impl Default for ChannelToggles {
    fn default() -> ChannelToggles {
        ChannelToggles {
            cards: true,
            tabs: true,
            typing: true,
        }
    }
}

impl ChannelToggles {
    fn admits(&self, channel: SoundChannel) -> bool {
        match channel {
            SoundChannel::Cards => self.cards,
            SoundChannel::Tabs => self.tabs,
            SoundChannel::Typing => self.typing,
        }
    }
}

/// Persisted sound preferences. Sound is opt-in: disabled until the user
/// turns it on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SoundPrefs {
    pub enabled: bool,
    pub volume: f32,
    pub channels: ChannelToggles,
}

impl Default for SoundPrefs {
    fn default() -> SoundPrefs {
        SoundPrefs {
            enabled: false,
            volume: 0.4,
            channels: ChannelToggles::default(),
        }
    }
}

impl SoundPrefs {
    /// Whether a cue should reach the synthesizer at all.
    pub fn admits(&self, cue: SoundCue) -> bool {
        self.enabled && self.channels.admits(cue.channel())
    }
}

/// Trailing debounce: each keystroke pushes the deadline out; the cue fires
/// once the window elapses with no further keystrokes.
#[derive(Debug, Clone)]
pub struct KeyDebounce {
    window: Duration,
    deadline: Option<Instant>,
}

impl Default for KeyDebounce {
    fn default() -> KeyDebounce {
        KeyDebounce::new(KEY_DEBOUNCE)
    }
}

impl KeyDebounce {
    pub fn new(window: Duration) -> KeyDebounce {
        KeyDebounce {
            window,
            deadline: None,
        }
    }

    /// Record a keystroke at `now`, resetting the trailing window.
    pub fn note_keystroke(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Poll at `now`: true exactly once per settled burst.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending cue, e.g. on unmount.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
