//! Audience domain module.
//!
//! # Module Structure
//!
//! - `model`: `Persona`, `AgeGroup`, catalog records, `ObjectionHandlers`, and `AudienceProfile`
//! - `catalog`: static persona, motivation, and messaging tables
//! - `profile`: the profile builder (`analyze_persona`)
//! - `strategy`: the Markdown copy strategy

pub mod catalog;
mod model;
mod profile;
mod strategy;

// Re-export public API
pub use model::{
    AgeGroup, AudienceProfile, MotivationRecord, ObjectionHandlers, Persona, PersonaRecord,
};
pub use profile::analyze_persona;
pub use strategy::render_strategy;
