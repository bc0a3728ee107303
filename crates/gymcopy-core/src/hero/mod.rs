//! Hero-section copy generation.
//!
//! # Module Structure
//!
//! - `model`: `HeroRequest`, `HeroCopy`, `HeroVariation`, `HeroBundle`, `Emotion`
//! - `generator`: `HeroGenerator` (single copy, variations, bundles)

mod generator;
mod model;

pub use generator::{
    BUTTON_COLOR, HeroGenerator, OVERLAY_OPACITY, TEXT_COLOR, VARIATION_MARTIAL_ART,
    VARIATION_TIME_FRAME,
};
pub use model::{
    DEFAULT_CTA_URL, DEFAULT_EMOTION, DEFAULT_GYM_NAME, DEFAULT_MARTIAL_ART,
    DEFAULT_MEMBERS_COUNT, DEFAULT_STYLE, DEFAULT_TIME_FRAME, Emotion, HeroBundle, HeroCopy,
    HeroRequest, HeroVariation,
};
