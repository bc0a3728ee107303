//! Static persona and motivation catalogs.

use super::model::{MotivationRecord, Persona, PersonaRecord};

/// Motivation category used when a goal keyword is not recognised.
pub const DEFAULT_MOTIVATION: &str = "fitness";

const BEGINNER: PersonaRecord = PersonaRecord {
    name: "beginner",
    age_groups: &[
        ("18-25", &["fitness", "self_defense", "confidence"]),
        ("26-35", &["stress_relief", "weight_loss", "community"]),
        ("36-45", &["health", "new_challenge", "discipline"]),
        ("46+", &["mobility", "mental_health", "lifelong_learning"]),
    ],
    pain_points: &[
        "feeling unsafe or vulnerable",
        "boring gym routines",
        "lack of discipline",
        "social isolation",
        "low self-confidence",
    ],
    desires: &[
        "self-defense skills",
        "physical fitness",
        "mental toughness",
        "belonging to community",
        "personal growth",
    ],
};

const COMPETITOR: PersonaRecord = PersonaRecord {
    name: "competitor",
    age_groups: &[
        ("18-25", &["mma_debut", "amateur_fights", "skill_development"]),
        ("26-30", &["professional_fights", "sponsorship", "championships"]),
        ("31-35", &["coaching", "legacy", "high_level_competition"]),
    ],
    pain_points: &[
        "plateau in skills",
        "lack of quality training partners",
        "inadequate coaching",
        "limited competition opportunities",
        "injury recovery",
    ],
    desires: &[
        "championship titles",
        "professional contracts",
        "skill mastery",
        "recognition",
        "fight record improvement",
    ],
};

const HOBBYIST: PersonaRecord = PersonaRecord {
    name: "hobbyist",
    age_groups: &[
        ("25-35", &["fitness_with_purpose", "skill_building", "stress_relief"]),
        ("36-50", &["maintenance", "enjoyment", "social_connection"]),
        ("51+", &["health_benefits", "mental_clarity", "lifelong_activity"]),
    ],
    pain_points: &[
        "sedentary lifestyle",
        "work-related stress",
        "lack of engaging hobbies",
        "feeling out of shape",
        "limited social activities",
    ],
    desires: &[
        "enjoyable workout",
        "skill progression",
        "social community",
        "stress management",
        "physical health",
    ],
};

pub fn persona_record(persona: Persona) -> &'static PersonaRecord {
    match persona {
        Persona::Beginner => &BEGINNER,
        Persona::Competitor => &COMPETITOR,
        Persona::Hobbyist => &HOBBYIST,
    }
}

/// Goal keyword (lowercase) → motivation category.
const GOAL_MOTIVATIONS: &[(&str, &str)] = &[
    ("fitness", "fitness"),
    ("weight_loss", "fitness"),
    ("competition", "competition"),
    ("self_defense", "self_defense"),
    ("confidence", "self_defense"),
    ("community", "community"),
    ("belonging", "community"),
    ("discipline", "discipline"),
    ("focus", "discipline"),
    ("stress_relief", "fitness"),
    ("new_challenge", "discipline"),
    ("skill_development", "competition"),
];

/// Looks up the motivation category for an already case-folded goal.
pub fn motivation_category_for_goal(goal: &str) -> Option<&'static str> {
    GOAL_MOTIVATIONS
        .iter()
        .find(|(keyword, _)| *keyword == goal)
        .map(|(_, category)| *category)
}

struct MotivationEntry {
    category: &'static str,
    triggers: &'static [&'static str],
    benefits: &'static [&'static str],
    emotional_core: &'static str,
}

const MOTIVATIONS: &[MotivationEntry] = &[
    MotivationEntry {
        category: "fitness",
        triggers: &["transform", "sculpt", "forge", "build", "unleash"],
        benefits: &["strength", "endurance", "flexibility", "conditioning"],
        emotional_core: "empowerment through physical capability",
    },
    MotivationEntry {
        category: "self_defense",
        triggers: &["protect", "defend", "secure", "confident", "ready"],
        benefits: &["awareness", "technique", "composure", "capability"],
        emotional_core: "peace of mind and personal security",
    },
    MotivationEntry {
        category: "competition",
        triggers: &["dominate", "conquer", "victory", "championship", "legacy"],
        benefits: &["skill", "strategy", "performance", "excellence"],
        emotional_core: "recognition and achievement",
    },
    MotivationEntry {
        category: "community",
        triggers: &["brotherhood", "sisterhood", "family", "together", "support"],
        benefits: &["camaraderie", "friendship", "belonging", "growth"],
        emotional_core: "connection and mutual support",
    },
    MotivationEntry {
        category: "discipline",
        triggers: &["master", "control", "focus", "dedication", "commitment"],
        benefits: &["consistency", "routine", "improvement", "mastery"],
        emotional_core: "self-control and personal growth",
    },
];

/// Returns the motivation record for `category`, or the default category's
/// record when the category is unknown.
pub fn motivation_record(category: &str) -> MotivationRecord {
    let entry = MOTIVATIONS
        .iter()
        .find(|entry| entry.category == category)
        .or_else(|| {
            MOTIVATIONS
                .iter()
                .find(|entry| entry.category == DEFAULT_MOTIVATION)
        })
        .unwrap_or(&MOTIVATIONS[0]);

    MotivationRecord {
        category: entry.category.to_string(),
        triggers: to_owned_list(entry.triggers),
        benefits: to_owned_list(entry.benefits),
        emotional_core: entry.emotional_core.to_string(),
    }
}

pub fn motivation_categories() -> impl Iterator<Item = &'static str> {
    MOTIVATIONS.iter().map(|entry| entry.category)
}

const MESSAGING_FOCUS: &[(Persona, &[&str])] = &[
    (
        Persona::Beginner,
        &[
            "safety and welcome",
            "progressive learning",
            "community support",
            "transformative results",
            "no experience needed",
        ],
    ),
    (
        Persona::Competitor,
        &[
            "elite coaching",
            "proven results",
            "advanced techniques",
            "competition preparation",
            "performance optimization",
        ],
    ),
    (
        Persona::Hobbyist,
        &[
            "enjoyable experience",
            "skill progression",
            "health benefits",
            "social atmosphere",
            "flexible scheduling",
        ],
    ),
];

const EMOTIONAL_LEVERS: &[(Persona, &[&str])] = &[
    (
        Persona::Beginner,
        &[
            "fear → confidence",
            "confusion → clarity",
            "weakness → strength",
            "isolation → belonging",
            "doubt → self-belief",
        ],
    ),
    (
        Persona::Competitor,
        &[
            "plateau → breakthrough",
            "frustration → mastery",
            "anxiety → readiness",
            "good → great",
            "local → recognized",
        ],
    ),
    (
        Persona::Hobbyist,
        &[
            "boredom → excitement",
            "stress → relief",
            "sedentary → active",
            "alone → connected",
            "routine → adventure",
        ],
    ),
];

type ObjectionTable = &'static [(&'static str, &'static [&'static str])];

/// Objections per persona, highest priority first.
const OBJECTION_HANDLERS: &[(Persona, ObjectionTable)] = &[
    (
        Persona::Beginner,
        &[
            (
                "not_fit_enough",
                &[
                    "Everyone starts somewhere - we meet you where you are",
                    "Fitness is the result, not the requirement",
                    "We have beginner programs designed for all fitness levels",
                ],
            ),
            (
                "too_intimidating",
                &[
                    "Our community is known for being welcoming and supportive",
                    "You'll train with other beginners in introductory classes",
                    "No egos, just growth - that's our culture",
                ],
            ),
            (
                "afraid_of_injury",
                &[
                    "Safety is our top priority with certified instructors",
                    "Progressive skill building minimizes risk",
                    "Proper technique before intensity",
                ],
            ),
        ],
    ),
    (
        Persona::Competitor,
        &[
            (
                "already_have_gym",
                &[
                    "See what's missing from your current training",
                    "Complement your existing skills with our expertise",
                    "One visit will show you the difference in coaching",
                ],
            ),
            (
                "too_expensive",
                &[
                    "Investment in your fighting career",
                    "Compare to what you're losing without proper training",
                    "Championship earnings offset training costs",
                ],
            ),
        ],
    ),
    (
        Persona::Hobbyist,
        &[
            (
                "not_enough_time",
                &[
                    "Flexible class schedules for busy professionals",
                    "Quality over quantity - 3 classes per week for results",
                    "Stress relief that makes you more productive",
                ],
            ),
            (
                "too_old",
                &[
                    "Age is just a number on our mats",
                    "We have members in their 60s training safely",
                    "Adapted techniques for all ages and abilities",
                ],
            ),
        ],
    ),
];

fn lookup_or_beginner<T: Copy>(table: &[(Persona, T)], persona: Persona) -> Option<T> {
    table
        .iter()
        .find(|(p, _)| *p == persona)
        .or_else(|| table.iter().find(|(p, _)| *p == Persona::Beginner))
        .map(|(_, value)| *value)
}

pub fn messaging_focus(persona: Persona) -> &'static [&'static str] {
    lookup_or_beginner(MESSAGING_FOCUS, persona).unwrap_or(&[])
}

pub fn emotional_levers(persona: Persona) -> &'static [&'static str] {
    lookup_or_beginner(EMOTIONAL_LEVERS, persona).unwrap_or(&[])
}

pub fn objection_handlers(persona: Persona) -> ObjectionTable {
    lookup_or_beginner(OBJECTION_HANDLERS, persona).unwrap_or(&[])
}

pub(crate) fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_goal_maps_to_a_known_motivation() {
        let categories: Vec<&str> = motivation_categories().collect();
        for (goal, category) in GOAL_MOTIVATIONS {
            assert!(
                categories.contains(category),
                "goal '{goal}' maps to unknown category '{category}'"
            );
        }
    }

    #[test]
    fn test_unknown_motivation_falls_back_to_fitness() {
        assert_eq!(motivation_record("juggling").category, "fitness");
    }

    #[test]
    fn test_every_persona_has_messaging_entries() {
        for persona in Persona::iter() {
            assert!(!messaging_focus(persona).is_empty());
            assert!(!emotional_levers(persona).is_empty());
            assert!(!objection_handlers(persona).is_empty());
        }
    }

    #[test]
    fn test_persona_record_names_match_enum() {
        for persona in Persona::iter() {
            assert_eq!(persona_record(persona).name, persona.to_string());
        }
    }

    #[test]
    fn test_age_group_keys_are_per_persona() {
        let keys = |persona| persona_record(persona).age_group_keys().collect::<Vec<_>>();
        assert_eq!(keys(Persona::Beginner), ["18-25", "26-35", "36-45", "46+"]);
        assert_eq!(keys(Persona::Competitor), ["18-25", "26-30", "31-35"]);
        assert_eq!(keys(Persona::Hobbyist), ["25-35", "36-50", "51+"]);
        assert!(persona_record(Persona::Competitor).goals_for("26-35").is_none());
    }

    #[test]
    fn test_goal_mapping_values() {
        let cases = [
            ("fitness", "fitness"),
            ("weight_loss", "fitness"),
            ("stress_relief", "fitness"),
            ("confidence", "self_defense"),
            ("belonging", "community"),
            ("discipline", "discipline"),
            ("focus", "discipline"),
            ("new_challenge", "discipline"),
            ("skill_development", "competition"),
        ];
        for (goal, category) in cases {
            assert_eq!(motivation_category_for_goal(goal), Some(category), "{goal}");
        }
        assert_eq!(motivation_category_for_goal("health"), None);
    }

    #[test]
    fn test_motivation_category_order() {
        let categories: Vec<&str> = motivation_categories().collect();
        assert_eq!(
            categories,
            ["fitness", "self_defense", "competition", "community", "discipline"]
        );
        let discipline = motivation_record("discipline");
        assert_eq!(
            discipline.triggers,
            ["master", "control", "focus", "dedication", "commitment"]
        );
        assert_eq!(discipline.emotional_core, "self-control and personal growth");
    }

    #[test]
    fn test_objections_are_listed_by_priority() {
        let first = |persona| objection_handlers(persona)[0].0;
        assert_eq!(first(Persona::Beginner), "not_fit_enough");
        assert_eq!(first(Persona::Competitor), "already_have_gym");
        assert_eq!(first(Persona::Hobbyist), "not_enough_time");
        assert!(objection_handlers(Persona::Beginner)
            .iter()
            .all(|(_, responses)| responses.len() == 3));
    }

    #[test]
    fn test_beginner_tables_pin_catalog_text() {
        let record = persona_record(Persona::Beginner);
        assert_eq!(record.pain_points[0], "feeling unsafe or vulnerable");
        assert_eq!(record.desires[0], "self-defense skills");
        assert_eq!(messaging_focus(Persona::Beginner)[4], "no experience needed");
        assert_eq!(emotional_levers(Persona::Beginner)[0], "fear → confidence");
    }
}
