//! Hero copy generation.
//!
//! Each section is a uniform random pick from the template catalog followed by
//! placeholder substitution. The random source is owned by the generator, so
//! a seeded generator reproduces its output exactly.

use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use strum::IntoEnumIterator;

use super::model::{DEFAULT_STYLE, HeroBundle, HeroCopy, HeroRequest, HeroVariation};
use crate::error::{GymCopyError, Result};
use crate::template::catalog::{
    self, BODY_TIME_FRAME, CTA_FIXED_VALUES, HEADLINE_FIXED_VALUES, SUBHEADLINE_FIXED_VALUES,
    SUBHEADLINE_FOCUS,
};
use crate::template::{CtaCategory, HeadlineStyle, Replacements, fill_template, title_case};

pub const OVERLAY_OPACITY: f64 = 0.6;
pub const TEXT_COLOR: &str = "#ffffff";
pub const BUTTON_COLOR: &str = "#dc2626";

/// Martial art and time frame used for every variation headline.
pub const VARIATION_MARTIAL_ART: &str = "MMA";
pub const VARIATION_TIME_FRAME: &str = "90 days";

const STYLE_CHECKLIST: &[&str] = &[
    "Use bold, confident typography",
    "Include high-quality training action shots",
    "Consider video background for dynamic feel",
    "Ensure mobile responsiveness",
    "Test different emotional triggers",
    "Add subtle animations for engagement",
    "Include social proof near CTA",
];

/// Generates hero-section copy from the static template catalog.
pub struct HeroGenerator<R = StdRng> {
    rng: R,
}

impl HeroGenerator<StdRng> {
    /// Creates a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a generator whose output is fully determined by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for HeroGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> HeroGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates one hero section for `request`.
    ///
    /// Unknown styles fall back to `transformation`. An emotion is kept only
    /// when it also names a headline style; otherwise it is recorded as
    /// `transformation`. Fails with [`GymCopyError::TemplateNotFound`] when
    /// the style has no body copy (`competition`).
    pub fn generate(&mut self, request: &HeroRequest) -> Result<HeroCopy> {
        let style = resolve_style(&request.style);
        // Emotion is checked against the headline style names.
        let emotion = match HeadlineStyle::from_str(&request.emotion) {
            Ok(_) => request.emotion.as_str(),
            Err(_) => {
                tracing::warn!(
                    emotion = %request.emotion,
                    "Emotion is not a headline style, using 'transformation'"
                );
                DEFAULT_STYLE
            }
        };

        let headline = self.headline(style, &request.martial_art, &request.time_frame)?;
        let subheadline = self.subheadline(request.members_count)?;
        let body_copy = self.body_copy(style, request)?;
        let cta_text = self.cta(CtaCategory::LowRisk)?;

        tracing::debug!(%style, emotion, "Generated hero copy");

        Ok(HeroCopy {
            headline,
            subheadline,
            body_copy,
            cta_text,
            cta_url: request.cta_url.clone(),
            background_image: format!("/images/hero-{}-martial-arts.jpg", style),
            overlay_opacity: OVERLAY_OPACITY,
            text_color: TEXT_COLOR.to_string(),
            button_color: BUTTON_COLOR.to_string(),
            style_notes: style_notes(style, emotion),
        })
    }

    /// Produces `count` variations of `base`.
    ///
    /// Variation `i` regenerates the headline with the `i`-th headline style
    /// and the CTA with the `i`-th CTA category, both cycling from the start
    /// once exhausted. Headlines use [`VARIATION_MARTIAL_ART`] and
    /// [`VARIATION_TIME_FRAME`]. Everything else is copied from `base`.
    pub fn variations(&mut self, base: &HeroCopy, count: usize) -> Result<Vec<HeroVariation>> {
        let styles: Vec<HeadlineStyle> = HeadlineStyle::iter().collect();
        let categories: Vec<CtaCategory> = CtaCategory::iter().collect();

        (0..count)
            .map(|i| {
                let mut copy = base.clone();
                copy.headline = self.headline(
                    styles[i % styles.len()],
                    VARIATION_MARTIAL_ART,
                    VARIATION_TIME_FRAME,
                )?;
                copy.cta_text = self.cta(categories[i % categories.len()])?;
                Ok(HeroVariation {
                    variation_id: format!("hero_{}", i + 1),
                    copy,
                })
            })
            .collect()
    }

    /// Generates the primary copy and `count` variations of it.
    pub fn bundle(&mut self, request: &HeroRequest, count: usize) -> Result<HeroBundle> {
        let primary = self.generate(request)?;
        let variations = self.variations(&primary, count)?;
        Ok(HeroBundle {
            primary,
            variations,
        })
    }

    fn headline(
        &mut self,
        style: HeadlineStyle,
        martial_art: &str,
        time_frame: &str,
    ) -> Result<String> {
        let template = self.pick(
            catalog::headline_templates(style),
            "headline",
            style.as_ref(),
        )?;
        Ok(fill_template(
            template,
            &headline_replacements(martial_art, time_frame),
        ))
    }

    fn subheadline(&mut self, members_count: u32) -> Result<String> {
        let templates = catalog::subheadline_templates(SUBHEADLINE_FOCUS).ok_or_else(|| {
            GymCopyError::template_not_found("subheadline", SUBHEADLINE_FOCUS)
        })?;
        let template = self.pick(templates, "subheadline", SUBHEADLINE_FOCUS)?;

        let mut replacements = Replacements::new().with("number", members_count);
        replacements.extend(SUBHEADLINE_FIXED_VALUES.iter().copied());
        Ok(fill_template(template, &replacements))
    }

    fn body_copy(&mut self, style: HeadlineStyle, request: &HeroRequest) -> Result<String> {
        let templates = catalog::body_focus(style)
            .and_then(catalog::body_templates)
            .ok_or_else(|| GymCopyError::template_not_found("body_copy", style.to_string()))?;
        let template = self.pick(templates, "body_copy", style.as_ref())?;

        let replacements = Replacements::new()
            .with("gym_name", &request.gym_name)
            .with("number", request.members_count)
            .with("timeframe", BODY_TIME_FRAME);
        Ok(fill_template(template, &replacements))
    }

    fn cta(&mut self, category: CtaCategory) -> Result<String> {
        let template = self.pick(catalog::cta_templates(category), "cta", category.as_ref())?;
        let replacements: Replacements = CTA_FIXED_VALUES.iter().copied().collect();
        Ok(fill_template(template, &replacements))
    }

    fn pick(
        &mut self,
        templates: &'static [&'static str],
        category: &str,
        key: &str,
    ) -> Result<&'static str> {
        let template = templates
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| GymCopyError::template_not_found(category, key))?;
        tracing::debug!(category, key, template, "Picked template");
        Ok(template)
    }
}

fn resolve_style(style: &str) -> HeadlineStyle {
    HeadlineStyle::from_str(style).unwrap_or_else(|_| {
        tracing::warn!(style, "Unknown headline style, using 'transformation'");
        HeadlineStyle::Transformation
    })
}

/// The caller's `timeframe` and `martial_art`, then the fixed headline values.
fn headline_replacements(martial_art: &str, time_frame: &str) -> Replacements {
    let mut replacements = Replacements::new()
        .with("timeframe", time_frame)
        .with("martial_art", martial_art);
    replacements.extend(HEADLINE_FIXED_VALUES.iter().copied());
    replacements
}

/// `Style: <Style> - Focus on <emotion>` followed by the implementation checklist.
fn style_notes(style: HeadlineStyle, emotion: &str) -> String {
    let mut notes = format!("Style: {} - Focus on {}", title_case(style.as_ref()), emotion);
    for item in STYLE_CHECKLIST {
        notes.push_str("\n- ");
        notes.push_str(item);
    }
    notes
}
