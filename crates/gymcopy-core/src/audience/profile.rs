//! Builds an [`AudienceProfile`] from a persona, age group, and goal.

use std::str::FromStr;

use strum::IntoEnumIterator;

use super::catalog::{self, DEFAULT_MOTIVATION, to_owned_list};
use super::model::{AudienceProfile, Persona};
use crate::error::{GymCopyError, Result};

/// Analyzes a persona for the given age group and goal.
///
/// `persona` and `age_group` are whitelisted against the catalog: an unknown
/// persona, or an age bracket the persona does not define, fails with
/// [`GymCopyError::InvalidArgument`]. `goal` is free text, case-folded before
/// the motivation lookup; unrecognised goals fall back to `fitness`.
///
/// The returned profile has no `copy_strategy`; see
/// [`render_strategy`](super::render_strategy).
///
/// # Examples
///
/// ```
/// use gymcopy_core::audience::analyze_persona;
///
/// let profile = analyze_persona("beginner", "26-35", "Confidence").unwrap();
/// assert_eq!(profile.primary_motivation.category, "self_defense");
/// ```
pub fn analyze_persona(persona: &str, age_group: &str, goal: &str) -> Result<AudienceProfile> {
    let persona = Persona::from_str(persona).map_err(|_| {
        GymCopyError::invalid_argument(format!(
            "Persona must be one of: {}",
            Persona::iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })?;

    let record = catalog::persona_record(persona);
    let Some(demographic_goals) = record.goals_for(age_group) else {
        return Err(GymCopyError::invalid_argument(format!(
            "Age group '{}' not valid for persona '{}'. Expected one of: {}",
            age_group,
            persona,
            record.age_group_keys().collect::<Vec<_>>().join(", ")
        )));
    };

    let folded_goal = goal.trim().to_lowercase();
    let category = catalog::motivation_category_for_goal(&folded_goal).unwrap_or_else(|| {
        tracing::debug!(goal = %folded_goal, "Unrecognised goal, using default motivation");
        DEFAULT_MOTIVATION
    });

    tracing::debug!(%persona, age_group, category, "Building audience profile");

    Ok(AudienceProfile {
        persona,
        age_group: age_group.to_string(),
        primary_goal: goal.to_string(),
        demographic_goals: to_owned_list(demographic_goals),
        pain_points: to_owned_list(record.pain_points),
        desires: to_owned_list(record.desires),
        primary_motivation: catalog::motivation_record(category),
        messaging_focus: to_owned_list(catalog::messaging_focus(persona)),
        emotional_levers: to_owned_list(catalog::emotional_levers(persona)),
        objection_handlers: catalog::objection_handlers(persona)
            .iter()
            .map(|(objection, responses)| (*objection, responses.iter().copied()))
            .collect(),
        copy_strategy: None,
    })
}
