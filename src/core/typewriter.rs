//! Typewriter text effect: types a sentence, holds, deletes it, and moves
//! straight on to the next sentence in the list.
//!
//! Driven entirely by elapsed time so it can be advanced from the same frame
//! ticker as the logo loop, and tested without a clock.

use std::time::Duration;

/// Timing and cursor settings.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeWriterConfig {
    pub typing_speed: Duration,
    pub deleting_speed: Duration,
    /// Hold after a sentence is fully typed.
    pub pause_duration: Duration,
    pub show_cursor: bool,
    pub cursor_char: char,
    /// Half-period of the cursor blink.
    pub cursor_blink: Duration,
}

impl Default for TypeWriterConfig {
    fn default() -> Self {
        Self {
            typing_speed: Duration::from_millis(50),
            deleting_speed: Duration::from_millis(30),
            pause_duration: Duration::from_millis(2000),
            show_cursor: true,
            cursor_char: '|',
            cursor_blink: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Emitted when a sentence has been typed and fully deleted again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceComplete {
    pub sentence: String,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct TypeWriter {
    sentences: Vec<String>,
    config: TypeWriterConfig,
    index: usize,
    /// Number of chars of the current sentence on screen.
    shown: usize,
    phase: Phase,
    /// Time accumulated toward the next step in the current phase.
    pending: Duration,
    /// Time accumulated toward the next cursor toggle.
    blink_elapsed: Duration,
    cursor_on: bool,
}

impl TypeWriter {
    pub fn new(sentences: Vec<String>, config: TypeWriterConfig) -> Self {
        Self {
            sentences,
            config,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            pending: Duration::ZERO,
            blink_elapsed: Duration::ZERO,
            cursor_on: true,
        }
    }

    /// Index of the sentence currently being typed or deleted.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The visible prefix of the current sentence.
    pub fn text(&self) -> &str {
        let Some(sentence) = self.sentences.get(self.index) else {
            return "";
        };
        match sentence.char_indices().nth(self.shown) {
            Some((byte, _)) => &sentence[..byte],
            None => sentence,
        }
    }

    /// The cursor glyph, when it is currently visible.
    pub fn cursor(&self) -> Option<char> {
        (self.config.show_cursor && self.cursor_on && !self.sentences.is_empty())
            .then_some(self.config.cursor_char)
    }

    /// Advance by `elapsed`, returning every sentence completed on the way.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<SentenceComplete> {
        let mut completed = Vec::new();
        if self.sentences.is_empty() {
            return completed;
        }

        self.advance_cursor(elapsed);
        self.pending += elapsed;

        loop {
            let step = self.step_duration();
            if self.pending < step {
                break;
            }
            self.pending -= step;
            if let Some(done) = self.step() {
                completed.push(done);
            }
        }
        completed
    }

    fn advance_cursor(&mut self, elapsed: Duration) {
        if self.config.cursor_blink.is_zero() {
            return;
        }
        self.blink_elapsed += elapsed;
        let period = self.config.cursor_blink.as_nanos();
        let toggles = self.blink_elapsed.as_nanos() / period;
        if toggles % 2 == 1 {
            self.cursor_on = !self.cursor_on;
        }
        let rest = self.blink_elapsed.as_nanos() % period;
        self.blink_elapsed = Duration::from_nanos(rest as u64);
    }

    fn step_duration(&self) -> Duration {
        // A zero step would spin forever.
        let d = match self.phase {
            Phase::Typing => self.config.typing_speed,
            Phase::Deleting => self.config.deleting_speed,
            Phase::Holding => self.config.pause_duration,
        };
        d.max(Duration::from_millis(1))
    }

    fn current_len(&self) -> usize {
        self.sentences
            .get(self.index)
            .map_or(0, |s| s.chars().count())
    }

    fn step(&mut self) -> Option<SentenceComplete> {
        match self.phase {
            Phase::Typing => {
                if self.shown < self.current_len() {
                    self.shown += 1;
                }
                if self.shown >= self.current_len() {
                    self.phase = Phase::Holding;
                }
                None
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                None
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown > 0 {
                    return None;
                }
                let done = SentenceComplete {
                    sentence: self.sentences[self.index].clone(),
                    index: self.index,
                };
                self.index = (self.index + 1) % self.sentences.len();
                self.phase = Phase::Typing;
                tracing::trace!(index = done.index, "typewriter sentence complete");
                Some(done)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn writer(sentences: &[&str]) -> TypeWriter {
        let config = TypeWriterConfig {
            typing_speed: ms(100),
            deleting_speed: ms(10),
            pause_duration: ms(1000),
            ..TypeWriterConfig::default()
        };
        TypeWriter::new(sentences.iter().map(|s| s.to_string()).collect(), config)
    }

    #[test]
    fn types_one_char_per_interval() {
        let mut w = writer(&["Boba"]);
        assert_eq!(w.text(), "");
        w.advance(ms(99));
        assert_eq!(w.text(), "");
        w.advance(ms(1));
        assert_eq!(w.text(), "B");
        w.advance(ms(300));
        assert_eq!(w.text(), "Boba");
    }

    #[test]
    fn holds_then_deletes_then_completes() {
        let mut w = writer(&["Boba", "Dimsum"]);
        assert!(w.advance(ms(400)).is_empty());
        assert!(w.advance(ms(999)).is_empty());
        assert_eq!(w.text(), "Boba");
        w.advance(ms(1));
        w.advance(ms(10));
        assert_eq!(w.text(), "Bob");
        let done = w.advance(ms(30));
        assert_eq!(
            done,
            vec![SentenceComplete {
                sentence: "Boba".into(),
                index: 0
            }]
        );
        assert_eq!(w.index(), 1);
        assert_eq!(w.text(), "");
        // The next sentence starts one typing interval later, with no rest.
        w.advance(ms(99));
        assert_eq!(w.text(), "");
        w.advance(ms(1));
        assert_eq!(w.text(), "D");
    }

    #[test]
    fn large_jump_processes_every_completion() {
        let mut w = writer(&["ab", "cd"]);
        // One cycle: 2*100 type + 1000 hold + 2*10 delete = 1220ms.
        let done = w.advance(ms(1220 * 2));
        let indices: Vec<usize> = done.iter().map(|d| d.index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(w.index(), 0);
    }

    #[test]
    fn multibyte_text_is_sliced_on_char_boundaries() {
        let mut w = writer(&["héllo"]);
        w.advance(ms(200));
        assert_eq!(w.text(), "hé");
    }

    #[test]
    fn empty_list_is_inert() {
        let mut w = writer(&[]);
        assert!(w.advance(ms(10_000)).is_empty());
        assert_eq!(w.text(), "");
        assert_eq!(w.cursor(), None);
    }

    #[test]
    fn cursor_blinks_on_half_period() {
        let mut w = writer(&["x"]);
        assert_eq!(w.cursor(), Some('|'));
        w.advance(ms(500));
        assert_eq!(w.cursor(), None);
        w.advance(ms(250));
        assert_eq!(w.cursor(), None);
        w.advance(ms(250));
        assert_eq!(w.cursor(), Some('|'));
        w.advance(ms(1000));
        assert_eq!(w.cursor(), Some('|'));
    }

    #[test]
    fn hidden_cursor_never_shows() {
        let config = TypeWriterConfig {
            show_cursor: false,
            ..TypeWriterConfig::default()
        };
        let w = TypeWriter::new(vec!["x".into()], config);
        assert_eq!(w.cursor(), None);
    }
}
