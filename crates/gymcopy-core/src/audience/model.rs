//! Audience domain model.
//!
//! Personas describe the people a gym landing page speaks to; motivations
//! describe why they walk through the door.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, VariantNames};

/// Audience segment a landing page is written for.
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
pub enum Persona {
    /// New to martial arts, looking for a safe place to start
    Beginner,
    /// Training toward tournaments and rank
    Competitor,
    /// Trains for enjoyment, fitness, and balance
    Hobbyist,
}

/// Age brackets accepted by `audience-analyzer --age`.
///
/// The catalog keys its demographic goals by its own bracket strings, which
/// only partly overlap with these: competitor defines `18-25`, `26-30` and
/// `31-35`; hobbyist defines `25-35`, `36-50` and `51+`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    VariantNames,
)]
pub enum AgeGroup {
    #[serde(rename = "18-25")]
    #[strum(serialize = "18-25")]
    From18To25,
    #[serde(rename = "26-35")]
    #[strum(serialize = "26-35")]
    From26To35,
    #[serde(rename = "36-45")]
    #[strum(serialize = "36-45")]
    From36To45,
    #[serde(rename = "46+")]
    #[strum(serialize = "46+")]
    Over46,
}

/// Static demographic and psychological attributes of a persona.
#[derive(Debug, Clone, Copy)]
pub struct PersonaRecord {
    pub name: &'static str,
    /// Goals per age bracket. Brackets absent here are undefined for the persona.
    pub age_groups: &'static [(&'static str, &'static [&'static str])],
    pub pain_points: &'static [&'static str],
    pub desires: &'static [&'static str],
}

impl PersonaRecord {
    pub fn goals_for(&self, age_group: &str) -> Option<&'static [&'static str]> {
        self.age_groups
            .iter()
            .find(|(group, _)| *group == age_group)
            .map(|(_, goals)| *goals)
    }

    pub fn age_group_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.age_groups.iter().map(|(group, _)| *group)
    }
}

/// Emotional triggers and benefits attached to a goal category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationRecord {
    pub category: String,
    pub triggers: Vec<String>,
    pub benefits: Vec<String>,
    pub emotional_core: String,
}

/// Objection → ordered responses, in priority order.
///
/// Serialized as a JSON object whose keys keep catalog order, so the first
/// key is the objection to handle first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectionHandlers {
    entries: Vec<(String, Vec<String>)>,
}

impl ObjectionHandlers {
    /// The highest-priority objection.
    pub fn top_priority(&self) -> Option<&str> {
        self.entries.first().map(|(objection, _)| objection.as_str())
    }

    pub fn get(&self, objection: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == objection)
            .map(|(_, responses)| responses.as_slice())
    }

    pub fn contains_key(&self, objection: &str) -> bool {
        self.get(objection).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, responses)| (key.as_str(), responses.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: IntoIterator<Item = R>, R: Into<String>> FromIterator<(K, V)>
    for ObjectionHandlers
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, responses)| {
                    (key.into(), responses.into_iter().map(Into::into).collect())
                })
                .collect(),
        }
    }
}

impl Serialize for ObjectionHandlers {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (objection, responses) in &self.entries {
            map.serialize_entry(objection, responses)?;
        }
        map.end()
    }
}

/// Composed analysis for one `(persona, age_group, goal)` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudienceProfile {
    pub persona: Persona,
    pub age_group: String,
    pub primary_goal: String,
    pub demographic_goals: Vec<String>,
    pub pain_points: Vec<String>,
    pub desires: Vec<String>,
    pub primary_motivation: MotivationRecord,
    pub messaging_focus: Vec<String>,
    pub emotional_levers: Vec<String>,
    pub objection_handlers: ObjectionHandlers,
    /// Text strategy, present when requested with `--strategy`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_strategy: Option<String>,
}
