//! Idea composer.
//!
//! Resolves a [`Selection`] against the [`Catalog`], draws a hook and a
//! call-to-action from a [`ChoiceSource`], and assembles the [`Idea`]
//! record returned to clients.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::CoreError;
use crate::outline::{build_outline, OutlineStep};
use crate::types::{iso_timestamp, Timestamp};
use crate::wrap::{fill, SUMMARY_WIDTH};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_THEME: &str = "education";
pub const DEFAULT_PLATFORM: &str = "youtube";
pub const DEFAULT_TONE: &str = "beginner";
pub const DEFAULT_PACING: &str = "steady";

// ---------------------------------------------------------------------------
// Randomness
// ---------------------------------------------------------------------------

/// Source of uniform choices.
///
/// Production code wraps a real RNG in [`RngChoice`]; tests substitute a
/// fixed sequence to pin the hook and call-to-action.
pub trait ChoiceSource {
    /// Return an index in `0..len`. Callers guarantee `len >= 1`.
    fn pick(&mut self, len: usize) -> usize;
}

/// [`ChoiceSource`] backed by any [`rand::Rng`].
pub struct RngChoice<R>(pub R);

impl<R: rand::Rng> ChoiceSource for RngChoice<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

fn choose<'a, C: ChoiceSource + ?Sized>(source: &mut C, items: &[&'a str]) -> &'a str {
    items[source.pick(items.len())]
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The four identifiers an idea is generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub theme: String,
    pub platform: String,
    pub tone: String,
    pub pacing: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
            tone: DEFAULT_TONE.to_string(),
            pacing: DEFAULT_PACING.to_string(),
        }
    }
}

/// Platform block embedded in an [`Idea`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    pub name: String,
    pub duration: String,
    pub cta: String,
}

/// A generated video idea.
#[derive(Debug, Clone, Serialize)]
pub struct Idea {
    pub title: String,
    pub hook: String,
    pub platform: PlatformInfo,
    /// Resolved tone guidance, not the tone identifier.
    pub tone: String,
    /// Pacing display label.
    pub pacing: String,
    pub summary: String,
    pub outline: Vec<OutlineStep>,
    pub visuals: Vec<String>,
    pub audio: Vec<String>,
    pub call_to_action: String,
    pub generated_at: String,
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Title for a hook: questions become exclamations.
pub fn derive_title(hook: &str) -> String {
    if hook.contains('?') {
        hook.replace('?', "!")
    } else {
        hook.to_string()
    }
}

fn unknown(field: &'static str, value: &str) -> CoreError {
    CoreError::UnknownOption {
        field,
        value: value.to_string(),
    }
}

/// Generate an idea stamped with the current time.
pub fn generate_idea<C: ChoiceSource + ?Sized>(
    catalog: &Catalog,
    selection: &Selection,
    source: &mut C,
) -> Result<Idea, CoreError> {
    generate_idea_at(catalog, selection, source, chrono::Utc::now())
}

/// Generate an idea stamped with `now`.
///
/// Fails with [`CoreError::UnknownOption`] on the first selection field
/// (theme, platform, tone, pacing) that is not in the catalog. Nothing is
/// drawn from `source` unless theme, platform, and tone all resolve.
pub fn generate_idea_at<C: ChoiceSource + ?Sized>(
    catalog: &Catalog,
    selection: &Selection,
    source: &mut C,
    now: Timestamp,
) -> Result<Idea, CoreError> {
    let theme = catalog
        .theme(&selection.theme)
        .ok_or_else(|| unknown("theme", &selection.theme))?;
    let platform = catalog
        .platform(&selection.platform)
        .ok_or_else(|| unknown("platform", &selection.platform))?;
    let tone = catalog
        .tone(&selection.tone)
        .ok_or_else(|| unknown("tone", &selection.tone))?;

    let hook = choose(source, theme.hooks);
    let call_to_action = choose(source, catalog.calls_to_action());

    let pacing = catalog
        .pacing(&selection.pacing)
        .ok_or_else(|| unknown("pacing", &selection.pacing))?;

    let summary = fill(
        &format!(
            "Craft a {name} piece built around the hook \"{hook}\". \
             Target a {tone_id} audience: {hint} {copy} \
             Keep the runtime near {duration} and close with: {call_to_action}.",
            name = platform.name,
            tone_id = tone.id,
            hint = tone.hint,
            copy = pacing.copy,
            duration = platform.duration,
        ),
        SUMMARY_WIDTH,
    );

    Ok(Idea {
        title: derive_title(hook),
        hook: hook.to_string(),
        platform: PlatformInfo {
            name: platform.name.to_string(),
            duration: platform.duration.to_string(),
            cta: platform.cta.to_string(),
        },
        tone: tone.hint.to_string(),
        pacing: pacing.label.to_string(),
        summary,
        outline: build_outline(theme.beats, platform.duration),
        visuals: theme.visuals.iter().map(|v| v.to_string()).collect(),
        audio: theme.audio.iter().map(|a| a.to_string()).collect(),
        call_to_action: call_to_action.to_string(),
        generated_at: iso_timestamp(now),
    })
}

/// Draw every selection field uniformly from the catalog.
pub fn random_selection<C: ChoiceSource + ?Sized>(catalog: &Catalog, source: &mut C) -> Selection {
    let theme = &catalog.themes()[source.pick(catalog.themes().len())];
    let platform = &catalog.platforms()[source.pick(catalog.platforms().len())];
    let tone = &catalog.tones()[source.pick(catalog.tones().len())];
    let pacing = &catalog.pacings()[source.pick(catalog.pacings().len())];

    Selection {
        theme: theme.id.to_string(),
        platform: platform.id.to_string(),
        tone: tone.id.to_string(),
        pacing: pacing.id.to_string(),
    }
}
