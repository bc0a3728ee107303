//! Markdown copywriting strategy for an [`AudienceProfile`].

use std::fmt::Write;

use super::model::AudienceProfile;
use crate::template::title_case;

const DEFAULT_JOURNEY: &str = "transformation";
const DEFAULT_PAIN_POINT: &str = "where you are";
const DEFAULT_DESIRE: &str = "where you want to be";
const DEFAULT_OBJECTION: &str = "safety concerns";
const POWER_WORD_LIMIT: usize = 5;

fn first_or<'a>(items: &'a [String], fallback: &'a str) -> &'a str {
    items.first().map(String::as_str).unwrap_or(fallback)
}

/// Renders the strategy stored in `copy_strategy` by
/// `audience-analyzer --strategy`.
///
/// The text starts and ends with a newline.
pub fn render_strategy(profile: &AudienceProfile) -> String {
    let motivation = &profile.primary_motivation;
    let power_words: Vec<&str> = motivation
        .triggers
        .iter()
        .take(POWER_WORD_LIMIT)
        .map(String::as_str)
        .collect();

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "# 🎯 Copy Strategy for {} ({})",
        title_case(profile.persona.as_ref()),
        profile.age_group
    );
    let _ = writeln!(out, "\n## Primary Focus\n{}", profile.messaging_focus.join(", "));
    let _ = writeln!(
        out,
        "\n## Key Emotional Journey\n{}",
        first_or(&profile.emotional_levers, DEFAULT_JOURNEY)
    );
    let _ = writeln!(
        out,
        "\n## Core Message\n\"From {} to {}\"",
        first_or(&profile.pain_points, DEFAULT_PAIN_POINT),
        first_or(&profile.desires, DEFAULT_DESIRE)
    );
    let _ = writeln!(out, "\n## Power Words to Use\n{}", power_words.join(", "));
    let _ = writeln!(
        out,
        "\n## Benefits to Highlight\n{}",
        motivation.benefits.join(", ")
    );
    let _ = writeln!(
        out,
        "\n## Objection Handling Priority\nMost common: {}",
        profile
            .objection_handlers
            .top_priority()
            .unwrap_or(DEFAULT_OBJECTION)
    );
    out
}
