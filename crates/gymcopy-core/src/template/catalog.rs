//! Static template tables for hero-section copy.
//!
//! Headlines are keyed by [`HeadlineStyle`], CTAs by [`CtaCategory`].
//! Subheadline and body copy sets are keyed by their own focus names; the
//! generator always takes subheadlines from the `community` focus and maps a
//! style to its body set with [`body_focus`].

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, VariantNames};

/// Headline style. Declaration order is the cyclic order used for variations.
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
pub enum HeadlineStyle {
    Transformation,
    Empowerment,
    Community,
    Competition,
    Results,
}

/// CTA category. Declaration order is the cyclic order used for variations.
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
pub enum CtaCategory {
    LowRisk,
    ValueStack,
    Urgency,
    Direct,
}

pub fn headline_templates(style: HeadlineStyle) -> &'static [&'static str] {
    match style {
        HeadlineStyle::Transformation => &[
            "Transform Your Body & Mind in {timeframe}",
            "From {starting_point} to {end_state} in {timeframe}",
            "Become the {identity} You Were Meant to Be",
            "{action} Your {inner_quality} in {timeframe}",
            "The {timeframe} Transformation That Changes Everything",
        ],
        HeadlineStyle::Empowerment => &[
            "Unleash Your Inner {warrior_type}",
            "Discover the {power_type} You Never Knew You Had",
            "{emotion} Your Life Through Martial Arts",
            "Where {ordinary_people} Become {extraordinary}",
            "Step Into Your Power at {gym_name}",
        ],
        HeadlineStyle::Community => &[
            "More Than a Gym - It's Your {family_type}",
            "Join the {community_type} That Lifts You Higher",
            "Where {motivation} Meets {support}",
            "Your {journey} Starts With {community}",
            "The {community} That Changes Lives",
        ],
        HeadlineStyle::Competition => &[
            "Champions Are Forged, Not Born",
            "{number}% of Champions Start Right Here",
            "Where {beginners} Become {competitors}",
            "The Path to {achievement} Starts Here",
            "Training That Builds {champions}",
        ],
        HeadlineStyle::Results => &[
            "Get {result_type} in {timeframe} - Guaranteed",
            "The Proven System for {specific_result}",
            "{number}+ Transformations Can't Be Wrong",
            "Real Results for Real People",
            "Why Settle for {lesser_result} When You Can Have {better_result}",
        ],
    }
}

/// Headline placeholders filled from fixed values, applied after the
/// caller's `timeframe` and `martial_art`.
pub const HEADLINE_FIXED_VALUES: &[(&str, &str)] = &[
    ("gym_name", "Our Gym"),
    ("action", "Forge"),
    ("inner_quality", "Inner Warrior"),
    ("starting_point", "Zero"),
    ("end_state", "Hero"),
    ("identity", "Champion"),
    ("warrior_type", "Warrior"),
    ("power_type", "Fighting Spirit"),
    ("emotion", "Transform"),
    ("ordinary_people", "Ordinary People"),
    ("extraordinary", "Extraordinary Warriors"),
    ("family_type", "Fight Family"),
    ("community_type", "Brotherhood of Warriors"),
    ("motivation", "Discipline"),
    ("support", "Unwavering Support"),
    ("journey", "Journey"),
    ("community", "Community"),
    ("result_type", "Fight-Ready"),
    ("specific_result", "Lasting Transformation"),
    ("number", "500"),
    ("lesser_result", "Average Fitness"),
    ("better_result", "Warrior Fitness"),
    ("achievement", "Greatness"),
    ("champions", "Champions"),
    ("beginners", "Beginners"),
    ("competitors", "Competitors"),
];

/// Subheadline focus used for every generated hero.
pub const SUBHEADLINE_FOCUS: &str = "community";

const SUBHEADLINE_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "no_experience",
        &[
            "No Experience Needed - Just Bring Your Heart",
            "Perfect for Complete Beginners",
            "Start Your Journey Today, No Prior Training Required",
            "Where Every Black Belt Was Once a White Belt",
            "Your First Step on the Mat is the Hardest - We'll Help",
        ],
    ),
    (
        "community",
        &[
            "Join {number}+ Members Who've Already Transformed",
            "Train With a Community That Pushes You to Excel",
            "Where Friendship and Growth Go Hand-in-Hand",
            "Your New Family Awaits on the Mats",
            "Experience the Power of Training Together",
        ],
    ),
    (
        "results",
        &[
            "See Results in Your First {number} Classes",
            "Our System Has Delivered {number}+ Transformations",
            "Average Member Loses {number} lbs in {timeframe}",
            "{number}% of Members Report Increased Confidence",
            "Real Change Happens Here - Every Day",
        ],
    ),
    (
        "expertise",
        &[
            "Train With {credential} Coaches Who Care",
            "{years} Years of Proven Results",
            "Home to {number}+ Champions and Counting",
            "Where Technique Meets Practical Application",
            "The Gold Standard in {martial_art} Training",
        ],
    ),
];

/// Subheadline placeholders filled from fixed values, applied after the
/// member count.
pub const SUBHEADLINE_FIXED_VALUES: &[(&str, &str)] = &[
    ("gym_name", "Our Gym"),
    ("credential", "Expert"),
    ("years", "15"),
    ("martial_art", "MMA"),
];

pub fn subheadline_templates(focus: &str) -> Option<&'static [&'static str]> {
    lookup(SUBHEADLINE_TEMPLATES, focus)
}

pub fn subheadline_focuses() -> impl Iterator<Item = &'static str> {
    SUBHEADLINE_TEMPLATES.iter().map(|(focus, _)| *focus)
}

const BODY_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "transformation",
        &[
            "Stop scrolling through fitness apps that promise results but deliver nothing. Step onto our mats and discover the warrior within you. Our proven system has transformed {number}+ everyday people into confident, disciplined martial artists.",
            "You're stronger than you think. But strength without direction is just potential. At {gym_name}, we channel that potential into real, lasting change - body, mind, and spirit.",
            "The journey of a thousand miles begins with a single step. Your first step onto our mats could be the most important decision you make this year. Transform your life, one class at a time.",
        ],
    ),
    (
        "overcoming_fear",
        &[
            "Fear holds most people back from what they truly want. We create a safe, supportive environment where you can face your fears and discover your true capabilities. No judgment, just growth.",
            "What if you could walk through life with unshakable confidence? That's not just possible - it's our standard result. We'll help you build the courage and skills to handle whatever life throws at you.",
            "Intimidation keeps millions from experiencing martial arts. That's why we've built the most welcoming, beginner-friendly program around. Your comfort zone ends where growth begins - we'll help you cross that line.",
        ],
    ),
    (
        "community_bond",
        &[
            "In a world of digital isolation, find your tribe. The bonds forged on the training mat last a lifetime. You're not just joining a gym - you're joining a family that will push you, support you, and celebrate your victories.",
            "Success is impossible alone. Every transformation story starts with someone saying 'I'll help you get there.' Our community becomes your greatest asset in this journey of growth.",
            "Show up for yourself, but stay for the family. The magic happens when individual determination meets collective support. That's where real transformation occurs.",
        ],
    ),
    (
        "practical_benefits",
        &[
            "Self-defense isn't just about fighting - it's about awareness, confidence, and having options when you need them most. Our practical curriculum teaches skills that work both on and off the streets.",
            "Fitness that matters. Instead of endless cardio machines, you'll build functional strength, real coordination, and cardiovascular conditioning while learning skills that could save your life.",
            "The discipline you learn here spreads to every area of your life. Our members report better careers, stronger relationships, and unshakable confidence - all from the lessons learned on the mat.",
        ],
    ),
];

/// Body placeholder filled with a fixed time frame, whatever the request says.
pub const BODY_TIME_FRAME: &str = "90 days";

/// Body copy set used for `style`. `None` means the style has no body copy.
pub fn body_focus(style: HeadlineStyle) -> Option<&'static str> {
    match style {
        HeadlineStyle::Transformation => Some("transformation"),
        HeadlineStyle::Empowerment => Some("overcoming_fear"),
        HeadlineStyle::Community => Some("community_bond"),
        HeadlineStyle::Results => Some("practical_benefits"),
        HeadlineStyle::Competition => None,
    }
}

pub fn body_templates(focus: &str) -> Option<&'static [&'static str]> {
    lookup(BODY_TEMPLATES, focus)
}

pub fn body_focuses() -> impl Iterator<Item = &'static str> {
    BODY_TEMPLATES.iter().map(|(focus, _)| *focus)
}

pub fn cta_templates(category: CtaCategory) -> &'static [&'static str] {
    match category {
        CtaCategory::LowRisk => &[
            "Start Your Free Trial Today",
            "Try Your First Class Free",
            "No Commitment - Just Results",
            "Experience the Difference Risk-Free",
            "Your Journey Starts with a Free Class",
        ],
        CtaCategory::ValueStack => &[
            "Free Trial + Personal Assessment + Training Plan",
            "Get Your Free Class + Training Guide + Nutrition Tips",
            "Start Free: Trial Class + Goal Setting + Progress Tracking",
            "Complete Beginner Package: Free Class + Equipment + Training Plan",
            "Your First Week Free + Personal Roadmap",
        ],
        CtaCategory::Urgency => &[
            "Only {number} Trial Spots Left This Week",
            "New Beginner Class Starting {date} - Reserve Your Spot",
            "Limited Time: {offer}",
            "Join {number} Others Who Start This Month",
            "Next Assessment Call: {time} - Book Now",
        ],
        CtaCategory::Direct => &[
            "Book Your Free Class Now",
            "Start Training Today",
            "Claim Your Free Trial",
            "Get Started Immediately",
            "Join Now - No Experience Needed",
        ],
    }
}

/// CTA placeholder constants.
pub const CTA_FIXED_VALUES: &[(&str, &str)] = &[
    ("number", "5"),
    ("date", "Monday"),
    ("offer", "50% Off First Month"),
    ("time", "3 PM"),
];

fn lookup(
    table: &'static [(&'static str, &'static [&'static str])],
    key: &str,
) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, templates)| *templates)
}
