use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use clap::builder::PossibleValuesParser;
use gymcopy_core::config::GymCopyConfig;
use gymcopy_core::hero::{Emotion, HeroBundle, HeroCopy, HeroGenerator, HeroRequest};
use gymcopy_core::template::HeadlineStyle;
use serde::Serialize;
use strum::VariantNames;

use crate::output;

#[derive(Parser, Debug)]
#[command(name = "hero-generator")]
#[command(about = "Generate hero-section copy for a martial-arts gym landing page", long_about = None)]
pub struct HeroArgs {
    /// Headline style [default: transformation]
    #[arg(long, value_parser = PossibleValuesParser::new(HeadlineStyle::VARIANTS.iter().copied()))]
    pub style: Option<String>,

    /// Emotional tone [default: empowerment]
    #[arg(long, value_parser = PossibleValuesParser::new(Emotion::VARIANTS.iter().copied()))]
    pub emotion: Option<String>,

    /// Martial art named in the primary headline [default: MMA]
    #[arg(long)]
    pub martial_art: Option<String>,

    /// Gym name used in body copy [default: Our Gym]
    #[arg(long)]
    pub gym_name: Option<String>,

    /// Promised time frame in the primary headline [default: 90 days]
    #[arg(long = "timeframe")]
    pub time_frame: Option<String>,

    /// Member count quoted in the copy
    #[arg(long = "members")]
    pub members_count: Option<u32>,

    /// Number of variations; more than 1 wraps output as {primary, variations}
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub variations: u32,

    /// Seed for reproducible template selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file [default: <config dir>/gymcopy/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl HeroArgs {
    /// Layers command-line flags over the config file defaults.
    pub fn resolve(&self, config: GymCopyConfig) -> (HeroRequest, Option<u64>) {
        let mut request = config.hero;
        if let Some(style) = &self.style {
            request.style = style.clone();
        }
        if let Some(emotion) = &self.emotion {
            request.emotion = emotion.clone();
        }
        if let Some(martial_art) = &self.martial_art {
            request.martial_art = martial_art.clone();
        }
        if let Some(gym_name) = &self.gym_name {
            request.gym_name = gym_name.clone();
        }
        if let Some(time_frame) = &self.time_frame {
            request.time_frame = time_frame.clone();
        }
        if let Some(members_count) = self.members_count {
            request.members_count = members_count;
        }
        (request, self.seed.or(config.seed))
    }
}

/// Output document: a single copy, or `{primary, variations}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HeroOutput {
    Single(HeroCopy),
    Bundle(HeroBundle),
}

/// Generates the output for `args`. More than one variation wraps the copy
/// as `{primary, variations}`.
pub fn generate(args: &HeroArgs) -> Result<HeroOutput> {
    let config = GymCopyConfig::load(args.config.as_deref())?;
    let (request, seed) = args.resolve(config);
    tracing::debug!(?request, ?seed, "Resolved hero request");

    let mut generator = match seed {
        Some(seed) => HeroGenerator::from_seed(seed),
        None => HeroGenerator::new(),
    };

    let output = if args.variations > 1 {
        HeroOutput::Bundle(generator.bundle(&request, args.variations as usize)?)
    } else {
        HeroOutput::Single(generator.generate(&request)?)
    };
    Ok(output)
}

pub fn run(args: &HeroArgs) -> Result<()> {
    match generate(args)? {
        HeroOutput::Single(copy) => output::emit_json(&copy, args.output.as_deref(), "Hero copy"),
        HeroOutput::Bundle(bundle) => {
            output::emit_json(&bundle, args.output.as_deref(), "Hero copy")
        }
    }
}
