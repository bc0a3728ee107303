//! Template domain module.
//!
//! # Module Structure
//!
//! - `filler`: `{placeholder}` substitution (`fill_template`, `Replacements`)
//! - `catalog`: static headline / subheadline / body / CTA template tables

pub mod catalog;
mod filler;

pub use catalog::{CtaCategory, HeadlineStyle};
pub use filler::{Replacements, fill_template, placeholders, title_case};
