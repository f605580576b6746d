//! Outline builder: turns a theme's narrative beats into timed steps.

use serde::Serialize;

/// Floor for a single step's estimated screen time, in seconds.
pub const MIN_STEP_SECONDS: u32 = 8;

/// Assumed speaking rate used to size a step from its word count.
pub const WORDS_PER_BEAT_UNIT: f64 = 3.5;

/// Seconds added per unit of [`WORDS_PER_BEAT_UNIT`] words.
pub const SECONDS_PER_BEAT_UNIT: u32 = 2;

/// One step of an idea outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineStep {
    /// 1-based position in the outline.
    pub step: u32,
    pub description: String,
    pub estimated_time: String,
}

/// Number of whitespace-delimited tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated screen time for a beat, never below [`MIN_STEP_SECONDS`].
pub fn estimate_seconds(beat: &str) -> u32 {
    let units = (word_count(beat) as f64 / WORDS_PER_BEAT_UNIT).round() as u32;
    (units * SECONDS_PER_BEAT_UNIT).max(MIN_STEP_SECONDS)
}

/// Build an outline with one step per beat, in beat order.
pub fn build_outline<S: AsRef<str>>(beats: &[S], duration: &str) -> Vec<OutlineStep> {
    beats
        .iter()
        .zip(1u32..)
        .map(|(beat, step)| {
            let beat = beat.as_ref();
            OutlineStep {
                step,
                description: beat.to_string(),
                estimated_time: format!(
                    "{:02}s of the {duration} runtime",
                    estimate_seconds(beat)
                ),
            }
        })
        .collect()
}
