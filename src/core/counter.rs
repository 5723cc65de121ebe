//! Stat counter animation
//!
//! A counter counts linearly from 0 to its `data-target` value. Each frame
//! adds `target / frames`; the displayed value is the floor of the running
//! total and the last frame snaps to the exact target.

/// Text a counter must show to be eligible for animation
pub const IDLE_COUNTER_TEXT: &str = "0";

/// Parse a `data-target` attribute the way the page expects: optional sign,
/// then leading decimal digits; anything after the digits is ignored.
///
/// Narrower than `parseInt`: there is no `0x` radix detection, so `"0x10"`
/// reads as 0, and values outside `i64` yield `None` (the counter is left
/// alone) rather than a rounded float.
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    rest[..digits_end].parse::<i64>().ok().map(|n| n * sign)
}

/// Whether a counter currently showing `text` should start animating
pub fn should_animate(text: &str) -> bool {
    text == IDLE_COUNTER_TEXT
}

/// One frame of a counter animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    /// No further frames follow this one
    pub finished: bool,
}

/// Running state of a single counter
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, frames: f64) -> Self {
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
            finished: false,
        }
    }

    /// Advance by one frame. Returns `None` once the animation has finished.
    pub fn next_frame(&mut self) -> Option<CounterFrame> {
        if self.finished {
            return None;
        }

        self.current += self.increment;
        if self.current < self.target as f64 {
            Some(CounterFrame {
                text: (self.current.floor() as i64).to_string(),
                finished: false,
            })
        } else {
            self.finished = true;
            Some(CounterFrame {
                text: self.target.to_string(),
                finished: true,
            })
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = CounterFrame;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_frame()
    }
}
