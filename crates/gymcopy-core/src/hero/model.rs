//! Hero-section domain model.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, VariantNames};

pub const DEFAULT_STYLE: &str = "transformation";
pub const DEFAULT_EMOTION: &str = "empowerment";
pub const DEFAULT_MARTIAL_ART: &str = "MMA";
pub const DEFAULT_GYM_NAME: &str = "Our Gym";
pub const DEFAULT_TIME_FRAME: &str = "90 days";
pub const DEFAULT_MEMBERS_COUNT: u32 = 500;
pub const DEFAULT_CTA_URL: &str = "#free-trial";

/// Emotional angle accepted on the command line.
///
/// The generator checks the emotion against the headline style names, not
/// this set. Every value here also names a style, so none is coerced.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Emotion {
    Empowerment,
    Community,
    Transformation,
    Competition,
}

/// Input to the hero copy generator. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroRequest {
    /// Headline style name; unknown names fall back to `transformation`
    pub style: String,
    pub emotion: String,
    pub martial_art: String,
    pub gym_name: String,
    pub time_frame: String,
    pub members_count: u32,
    pub cta_url: String,
}

impl Default for HeroRequest {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE.to_string(),
            emotion: DEFAULT_EMOTION.to_string(),
            martial_art: DEFAULT_MARTIAL_ART.to_string(),
            gym_name: DEFAULT_GYM_NAME.to_string(),
            time_frame: DEFAULT_TIME_FRAME.to_string(),
            members_count: DEFAULT_MEMBERS_COUNT,
            cta_url: DEFAULT_CTA_URL.to_string(),
        }
    }
}

/// Generated hero-section copy and its visual metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub headline: String,
    pub subheadline: String,
    pub body_copy: String,
    pub cta_text: String,
    pub cta_url: String,
    pub background_image: String,
    pub overlay_opacity: f64,
    pub text_color: String,
    pub button_color: String,
    pub style_notes: String,
}

/// A hero copy with a regenerated headline and CTA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroVariation {
    /// `hero_<n>`, 1-based
    pub variation_id: String,
    #[serde(flatten)]
    pub copy: HeroCopy,
}

/// Multi-variant output: the base copy plus its variations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroBundle {
    pub primary: HeroCopy,
    pub variations: Vec<HeroVariation>,
}
