//! Compiled-in option catalog.
//!
//! Themes, platforms, audience tones, pacings, and generic calls-to-action
//! that ideas are composed from. Declaration order is significant: it is the
//! order the options endpoint reports and the order the client renders.
//!
//! The catalog does no validation of its own. Lookups return `Option` and
//! callers decide how to treat an absent entry.

// ---------------------------------------------------------------------------
// Entry types
// ---------------------------------------------------------------------------

/// A content theme with its hook, beat, and production-direction lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub hooks: &'static [&'static str],
    pub beats: &'static [&'static str],
    pub visuals: &'static [&'static str],
    pub audio: &'static [&'static str],
}

/// A publishing platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub id: &'static str,
    pub name: &'static str,
    /// Free-text target runtime, e.g. `"45-60 seconds"`.
    pub duration: &'static str,
    /// Platform-specific call-to-action style hint.
    pub cta: &'static str,
}

/// Audience tone and the framing guidance that goes with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub id: &'static str,
    pub hint: &'static str,
}

/// Editing rhythm category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub id: &'static str,
    pub label: &'static str,
    /// Editing guidance interpolated into the idea summary.
    pub copy: &'static str,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Immutable set of selectable options.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct Catalog {
    themes: &'static [Theme],
    platforms: &'static [Platform],
    tones: &'static [Tone],
    pacings: &'static [Pacing],
    calls_to_action: &'static [&'static str],
}

impl Catalog {
    /// The built-in catalog shipped with the service.
    pub fn builtin() -> Self {
        Self {
            themes: THEMES,
            platforms: PLATFORMS,
            tones: TONES,
            pacings: PACINGS,
            calls_to_action: CALLS_TO_ACTION,
        }
    }

    pub fn themes(&self) -> &[Theme] {
        self.themes
    }

    pub fn platforms(&self) -> &[Platform] {
        self.platforms
    }

    pub fn tones(&self) -> &[Tone] {
        self.tones
    }

    pub fn pacings(&self) -> &[Pacing] {
        self.pacings
    }

    pub fn calls_to_action(&self) -> &[&'static str] {
        self.calls_to_action
    }

    pub fn theme(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    pub fn platform(&self, id: &str) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    pub fn tone(&self, id: &str) -> Option<&Tone> {
        self.tones.iter().find(|t| t.id == id)
    }

    pub fn pacing(&self, id: &str) -> Option<&Pacing> {
        self.pacings.iter().find(|p| p.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Display label for a bare identifier: first letter upper-cased.
///
/// Used for themes and tones, whose identifiers double as labels.
pub fn display_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Built-in data
// ---------------------------------------------------------------------------

const THEMES: &[Theme] = &[
    Theme {
        id: "education",
        hooks: &[
            "What if learning your next skill only took five minutes?",
            "3 lessons your teacher never told you about",
            "This micro-class might change your career overnight",
        ],
        beats: &[
            "Relatable challenge learners face today",
            "Break down the topic into a visual, snackable metaphor",
            "Provide one practical exercise viewers can try immediately",
            "Wrap with a reflection question to drive comments",
        ],
        visuals: &[
            "Clean infographics with animated callouts",
            "Split-screen expert demo with captioned steps",
            "Lightweight motion graphics highlighting stats",
        ],
        audio: &[
            "Calm, upbeat background track at -18 LUFS",
            "Soft whoosh and sparkle sound design on transitions",
            "Tight voiceover pacing with 0.3s pauses between sections",
        ],
    },
    Theme {
        id: "entertainment",
        hooks: &[
            "3 binge-worthy releases you can't miss this weekend",
            "What happens when a fan theory actually comes true?",
            "The behind-the-scenes twist everyone is talking about",
        ],
        beats: &[
            "Open with a trending headline or clip that sparks curiosity",
            "Break down the plot or performance highlights with punchy lower-thirds",
            "Drop a behind-the-scenes fact or quote to surprise viewers",
            "Wrap with a watchlist recommendation and invite hot takes in comments",
        ],
        visuals: &[
            "Rapid montage of posters or stills with neon overlays",
            "Picture-in-picture reaction shots synced to key moments",
            "Animated ticker for cast names, release dates, and streaming platforms",
        ],
        audio: &[
            "Upbeat pop or synth track that hits on scene transitions",
            "Subtle crowd or studio ambience layered beneath commentary",
            "Voiceover with energetic emphasis and playful pauses for effect",
        ],
    },
    Theme {
        id: "travel",
        hooks: &[
            "This hidden gem is only two hours from the city",
            "Stop scrolling and imagine waking up here tomorrow",
            "A weekend escape that feels like crossing continents",
        ],
        beats: &[
            "Show the travel problem you're solving (budget, time, experience)",
            "Reveal location with cinematic b-roll and map overlays",
            "Break down top three experiences with estimated costs",
            "Finish with packing or booking pro-tip viewers can screenshot",
        ],
        visuals: &[
            "Drone-inspired establishing shots with parallax text",
            "POV walking footage layered with playful stickers",
            "Texture-rich food close-ups with shallow depth-of-field",
        ],
        audio: &[
            "Rhythmic travel beat with percussion hits on cuts",
            "Nature ambience stem to fill quiet transitions",
            "Voiceover with smiley tone and crisp consonants",
        ],
    },
    Theme {
        id: "gaming",
        hooks: &[
            "Can you beat this boss without taking any damage?",
            "The speedrun trick pros won't tell you about",
            "Build the ultimate loadout using this underrated combo",
        ],
        beats: &[
            "Kick off with an on-screen challenge countdown",
            "Reveal the strategy while replaying highlight moments",
            "Add split-second overlays for button inputs or gear stats",
            "Close with a viewer challenge and call for stitched duos",
        ],
        visuals: &[
            "HUD-inspired frames with neon accent lighting",
            "Slow-motion replays with motion blur and chromatic aberration",
            "Stylized glitch transitions between clips",
        ],
        audio: &[
            "Trap or drum-and-bass loop side-chained to commentary",
            "Layered controller clicks subtly mixed underneath",
            "Energetic delivery with emphasis on hype phrases",
        ],
    },
    Theme {
        id: "wellness",
        hooks: &[
            "Take a 60-second reset with me",
            "Breathe in for 4, hold for 4, out for 4\u{2014}ready?",
            "You only need the space beside your desk for this routine",
        ],
        beats: &[
            "Invite the viewer to pause and mirror your breathing",
            "Guide through a grounded routine with soft lower-thirds",
            "Share one science-backed insight to build credibility",
            "Encourage journaling or hydration as a follow-up micro-habit",
        ],
        visuals: &[
            "Soft gradients with floating particle animations",
            "Close-up of calm facial expressions and hand movements",
            "Minimalist typography with high legibility",
        ],
        audio: &[
            "Lo-fi piano textures with warm vinyl noise",
            "ASMR-inspired foley for tactile movements",
            "Gentle voiceover with deliberate pacing and whispered sibilants",
        ],
    },
];

const PLATFORMS: &[Platform] = &[
    Platform {
        id: "youtube",
        name: "YouTube",
        duration: "6-8 minutes",
        cta: "Invite viewers to subscribe and drop their own twists in the comments",
    },
    Platform {
        id: "shorts",
        name: "YouTube Shorts",
        duration: "45-60 seconds",
        cta: "Ask for a double-tap and encourage sharing the short with a friend",
    },
    Platform {
        id: "tiktok",
        name: "TikTok",
        duration: "35-50 seconds",
        cta: "Prompt viewers to stitch their attempt and follow for part two",
    },
    Platform {
        id: "reels",
        name: "Instagram Reels",
        duration: "50-75 seconds",
        cta: "Encourage a save for later and a DM to someone who needs the reminder",
    },
];

const TONES: &[Tone] = &[
    Tone {
        id: "beginner",
        hint: "Keep explanations crystal clear and friendly for first-time viewers.",
    },
    Tone {
        id: "intermediate",
        hint: "Balance insights with jargon\u{2014}they already know the basics.",
    },
    Tone {
        id: "expert",
        hint: "Deliver fast-paced breakdowns with data or references to stand out.",
    },
];

const PACINGS: &[Pacing] = &[
    Pacing {
        id: "steady",
        label: "Balanced",
        copy: "Use mid-tempo editing\u{2014}clean cuts every 3\u{2013}4 seconds to keep a conversational feel.",
    },
    Pacing {
        id: "fast",
        label: "Fast-paced",
        copy: "Accelerate the pacing with snappy jump cuts and kinetic text for each keyword.",
    },
    Pacing {
        id: "calm",
        label: "Calming",
        copy: "Lean into longer holds and cross-dissolves so viewers can breathe between beats.",
    },
];

const CALLS_TO_ACTION: &[&str] = &[
    "Drop a comment with the next problem you want solved",
    "Tag a friend who needs to try this",
    "Download the free checklist linked in bio",
    "Screenshot the breakdown and build along with me",
];
