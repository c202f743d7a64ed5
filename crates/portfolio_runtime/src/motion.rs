//! Pure timing and movement helpers behind the animated surfaces.
//!
//! Everything here is plain math over scroll positions and tick counts, so
//! the animated components stay thin wrappers that only schedule timers and
//! apply the computed values.

use std::time::Duration;

pub const WELCOME_TYPE_INTERVAL: Duration = Duration::from_millis(260);
pub const WELCOME_HOLD: Duration = Duration::from_millis(4000);
pub const WELCOME_EXIT: Duration = Duration::from_millis(1000);
pub const WELCOME_SITE_HANDLE: &str = "kslportfolio";

pub const HERO_TYPE_INTERVAL: Duration = Duration::from_millis(100);
pub const HERO_ERASE_INTERVAL: Duration = Duration::from_millis(50);
pub const HERO_HOLD: Duration = Duration::from_millis(2000);

/// Phase of the looping hero typewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    /// Revealing one more character per tick.
    Typing,
    /// Showing the whole word before erasing starts.
    Holding,
    /// Removing one character per tick.
    Erasing,
}

/// Looping typewriter over a fixed word list.
///
/// Drive it by waiting [`TypingCycle::delay`], calling
/// [`TypingCycle::advance`], and rendering [`TypingCycle::visible_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingCycle {
    word_index: usize,
    visible_chars: usize,
    phase: TypingPhase,
}

impl TypingCycle {
    pub fn new() -> Self {
        Self {
            word_index: 0,
            visible_chars: 0,
            phase: TypingPhase::Typing,
        }
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// How long to wait before the next [`TypingCycle::advance`] call.
    pub fn delay(&self) -> Duration {
        match self.phase {
            TypingPhase::Typing => HERO_TYPE_INTERVAL,
            TypingPhase::Holding => HERO_HOLD,
            TypingPhase::Erasing => HERO_ERASE_INTERVAL,
        }
    }

    /// Currently revealed prefix of the active word.
    pub fn visible_text(&self, words: &[&'static str]) -> &'static str {
        let Some(word) = words.get(self.word_index % words.len().max(1)) else {
            return "";
        };
        typed_prefix(word, self.visible_chars)
    }

    /// Moves the cycle one tick forward.
    pub fn advance(&mut self, words: &[&'static str]) {
        if words.is_empty() {
            return;
        }
        let word_len = words[self.word_index % words.len()].chars().count();
        match self.phase {
            TypingPhase::Typing => {
                self.visible_chars = (self.visible_chars + 1).min(word_len);
                if self.visible_chars == word_len {
                    self.phase = TypingPhase::Holding;
                }
            }
            TypingPhase::Holding => {
                self.phase = TypingPhase::Erasing;
            }
            TypingPhase::Erasing => {
                self.visible_chars = self.visible_chars.saturating_sub(1);
                if self.visible_chars == 0 {
                    self.word_index = (self.word_index + 1) % words.len();
                    self.phase = TypingPhase::Typing;
                }
            }
        }
    }
}

impl Default for TypingCycle {
    fn default() -> Self {
        Self::new()
    }
}

/// First `ticks` characters of `text`, clamped to its length.
pub fn typed_prefix(text: &str, ticks: usize) -> &str {
    match text.char_indices().nth(ticks) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// True once the one-shot welcome typewriter has revealed all of `text`.
pub fn welcome_typing_done(text: &str, ticks: usize) -> bool {
    ticks >= text.chars().count()
}

/// Anchor offsets for the four backdrop blobs, in CSS pixels.
pub const BACKDROP_ANCHORS: [(f64, f64); 4] =
    [(-4.0, 0.0), (-4.0, 0.0), (20.0, -8.0), (20.0, -8.0)];

/// Drift of one backdrop blob at the given scroll position.
pub fn backdrop_offset(scroll_y: f64, blob_index: usize) -> (f64, f64) {
    let angle = scroll_y / 100.0 + blob_index as f64 * 0.5;
    let (anchor_x, anchor_y) = BACKDROP_ANCHORS[blob_index % BACKDROP_ANCHORS.len()];
    (anchor_x + angle.sin() * 340.0, anchor_y + angle.cos() * 40.0)
}

/// The navbar switches to its solid treatment shortly after scrolling starts.
pub fn navbar_is_solid(scroll_y: f64) -> bool {
    scroll_y > 20.0
}

/// Section whose highlight band contains the scroll position.
///
/// `sections` pairs an anchor id with the section's document top and height.
/// Bands start 550px ahead of the section so the highlight flips while the
/// section is still sliding into view.
pub fn active_section(
    scroll_y: f64,
    sections: &[(&'static str, f64, f64)],
) -> Option<&'static str> {
    sections
        .iter()
        .find(|(_, top, height)| {
            let band_start = top - 550.0;
            scroll_y >= band_start && scroll_y < band_start + height
        })
        .map(|(id, _, _)| *id)
}

/// Scroll offset that parks a section just under the fixed navbar.
pub fn section_scroll_target(section_top: f64) -> f64 {
    (section_top - 100.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const WORDS: [&str; 2] = ["Ada", "Grace"];

    #[test]
    fn typing_cycle_types_holds_erases_and_wraps() {
        let mut cycle = TypingCycle::new();
        assert_eq!(cycle.visible_text(&WORDS), "");
        assert_eq!(cycle.delay(), HERO_TYPE_INTERVAL);

        for expected in ["A", "Ad", "Ada"] {
            cycle.advance(&WORDS);
            assert_eq!(cycle.visible_text(&WORDS), expected);
        }
        assert_eq!(cycle.phase(), TypingPhase::Holding);
        assert_eq!(cycle.delay(), HERO_HOLD);

        cycle.advance(&WORDS);
        assert_eq!(cycle.phase(), TypingPhase::Erasing);
        assert_eq!(cycle.delay(), HERO_ERASE_INTERVAL);

        for expected in ["Ad", "A", ""] {
            cycle.advance(&WORDS);
            assert_eq!(cycle.visible_text(&WORDS), expected);
        }
        assert_eq!(cycle.phase(), TypingPhase::Typing);

        cycle.advance(&WORDS);
        assert_eq!(cycle.visible_text(&WORDS), "G");
    }

    #[test]
    fn typed_prefix_clamps_to_the_text() {
        assert_eq!(typed_prefix("portfolio", 0), "");
        assert_eq!(typed_prefix("portfolio", 4), "port");
        assert_eq!(typed_prefix("portfolio", 99), "portfolio");
        assert!(!welcome_typing_done("portfolio", 8));
        assert!(welcome_typing_done("portfolio", 9));
    }

    #[test]
    fn backdrop_blobs_start_from_their_anchors() {
        let (x, y) = backdrop_offset(0.0, 0);
        assert_eq!(x, -4.0);
        assert_eq!(y, 40.0);

        let (x2, y2) = backdrop_offset(0.0, 2);
        assert!((x2 - (20.0 + 1.0_f64.sin() * 340.0)).abs() < 1e-9);
        assert!((y2 - (-8.0 + 1.0_f64.cos() * 40.0)).abs() < 1e-9);
    }

    #[test]
    fn navbar_goes_solid_past_the_threshold() {
        assert!(!navbar_is_solid(0.0));
        assert!(!navbar_is_solid(20.0));
        assert!(navbar_is_solid(20.5));
    }

    #[test]
    fn active_section_tracks_the_scroll_band() {
        let sections = [
            ("Home", 0.0, 800.0),
            ("About", 800.0, 900.0),
            ("Portofolio", 1700.0, 1200.0),
        ];

        assert_eq!(active_section(0.0, &sections), Some("Home"));
        assert_eq!(active_section(300.0, &sections), Some("About"));
        assert_eq!(active_section(1200.0, &sections), Some("Portofolio"));
        assert_eq!(active_section(9000.0, &sections), None);
    }

    #[test]
    fn section_scroll_target_clears_the_navbar() {
        assert_eq!(section_scroll_target(800.0), 700.0);
        assert_eq!(section_scroll_target(40.0), 0.0);
    }
}
