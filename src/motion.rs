/// Text reveal sequencing
///
/// Headings are split into positioned tokens by a pure function, and a
/// `Motion` value maps elapsed time to a per-token opacity. Nothing here
/// knows about the rendering surface; the UI just asks for opacities.
///
/// `Motion` is created once by the application at startup and passed to
/// the views that animate.

use std::time::{Duration, Instant};

use crate::config::MotionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// Whitespace-separated words
    Words,
    /// Individual non-whitespace characters
    Glyphs,
}

/// One piece of split text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Position in the reveal sequence (0-based)
    pub index: usize,
    /// Byte offset of the token in the source string
    pub offset: usize,
    pub content: String,
}

/// Split `text` into tokens; whitespace is never a token
pub fn split(text: &str, granularity: Granularity) -> Vec<Token> {
    match granularity {
        Granularity::Words => text
            .split_whitespace()
            .enumerate()
            .map(|(index, word)| Token {
                index,
                offset: word.as_ptr() as usize - text.as_ptr() as usize,
                content: word.to_string(),
            })
            .collect(),
        Granularity::Glyphs => text
            .char_indices()
            .filter(|(_, c)| !c.is_whitespace())
            .enumerate()
            .map(|(index, (offset, c))| Token {
                index,
                offset,
                content: c.to_string(),
            })
            .collect(),
    }
}

#[derive(Debug, Clone)]
pub struct Motion {
    enabled: bool,
    stagger: Duration,
    fade: Duration,
    started: Option<Instant>,
}

impl Motion {
    pub fn init(config: MotionConfig) -> Self {
        Self {
            enabled: config.enabled,
            stagger: Duration::from_millis(config.stagger_ms),
            fade: Duration::from_millis(config.fade_ms),
            started: None,
        }
    }

    /// (Re)start the sequence at `now`
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
    }

    /// Time until the last of `count` tokens is fully shown
    pub fn total(&self, count: usize) -> Duration {
        self.stagger * count.saturating_sub(1) as u32 + self.fade
    }

    /// Opacity of token `index` after `elapsed`, eased out (0.0 ..= 1.0)
    pub fn progress(&self, index: usize, elapsed: Duration) -> f32 {
        if !self.enabled {
            return 1.0;
        }
        let begin = self.stagger * index as u32;
        if elapsed < begin {
            return 0.0;
        }
        if self.fade.is_zero() {
            return 1.0;
        }
        let t = ((elapsed - begin).as_secs_f32() / self.fade.as_secs_f32()).clamp(0.0, 1.0);
        1.0 - (1.0 - t) * (1.0 - t)
    }

    pub fn opacity(&self, index: usize, now: Instant) -> f32 {
        match self.started {
            Some(started) => self.progress(index, now.saturating_duration_since(started)),
            None if self.enabled => 0.0,
            None => 1.0,
        }
    }

    /// Whether frames are still needed for a sequence of `count` tokens
    pub fn is_running(&self, count: usize, now: Instant) -> bool {
        match self.started {
            Some(started) if self.enabled => now.saturating_duration_since(started) < self.total(count),
            _ => false,
        }
    }
}
