//! Decorative effects of the portfolio variant: floating particles and the
//! typed-out code block.

use crate::constants::{
    PARTICLE_BASE_SECS, PARTICLE_DELAY_STEP_SECS, PARTICLE_PULL, PARTICLE_REACH_PX,
    PARTICLE_STEP_SECS, TYPING_CHAR_MS, TYPING_LINE_PAUSE_MS,
};

/// CSS `animation` shorthand for the particle at `index`.
#[must_use]
pub fn particle_animation(index: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let secs = PARTICLE_BASE_SECS + PARTICLE_STEP_SECS * index as f64;
    format!("float {secs}s ease-in-out infinite")
}

#[must_use]
pub fn particle_delay(index: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let secs = PARTICLE_DELAY_STEP_SECS * index as f64;
    format!("{secs}s")
}

/// Translation pulling a particle toward the pointer, or `None` when the
/// pointer is out of reach. `dx`/`dy` are measured from the particle centre.
#[must_use]
pub fn particle_pull(dx: f64, dy: f64) -> Option<String> {
    let distance = dx.hypot(dy);
    if distance >= PARTICLE_REACH_PX {
        return None;
    }
    let force = (PARTICLE_REACH_PX - distance) / PARTICLE_REACH_PX;
    Some(format!(
        "translate({}px, {}px)",
        dx * force * PARTICLE_PULL,
        dy * force * PARTICLE_PULL
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingStep {
    /// Show `line` and wait `delay_ms` before the next step.
    Reveal { line: usize, delay_ms: u32 },
    Done,
}

/// Walks code lines character by character. Each character costs
/// `TYPING_CHAR_MS`; finishing a line costs `TYPING_LINE_PAUSE_MS`.
#[derive(Debug, Clone)]
pub struct TypingSchedule {
    line_lengths: Vec<usize>,
    line: usize,
    char: usize,
}

impl TypingSchedule {
    #[must_use]
    pub const fn new(line_lengths: Vec<usize>) -> Self {
        Self {
            line_lengths,
            line: 0,
            char: 0,
        }
    }

    /// Advance one tick.
    pub fn step(&mut self) -> TypingStep {
        let Some(&len) = self.line_lengths.get(self.line) else {
            return TypingStep::Done;
        };
        let line = self.line;
        if self.char < len {
            self.char += 1;
            TypingStep::Reveal {
                line,
                delay_ms: TYPING_CHAR_MS,
            }
        } else {
            self.line += 1;
            self.char = 0;
            TypingStep::Reveal {
                line,
                delay_ms: TYPING_LINE_PAUSE_MS,
            }
        }
    }
}
