use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use clap::builder::PossibleValuesParser;
use gymcopy_core::audience::{AgeGroup, AudienceProfile, Persona, analyze_persona, render_strategy};
use strum::VariantNames;

use crate::output;

#[derive(Parser, Debug)]
#[command(name = "audience-analyzer")]
#[command(about = "Analyze a martial-arts gym audience persona", long_about = None)]
pub struct AudienceArgs {
    /// Audience persona
    #[arg(long, value_parser = PossibleValuesParser::new(Persona::VARIANTS.iter().copied()))]
    pub persona: String,

    /// Age group (competitor also defines 26-30/31-35 and hobbyist
    /// 25-35/36-50/51+, which the library accepts but this flag does not)
    #[arg(long, value_parser = PossibleValuesParser::new(AgeGroup::VARIANTS.iter().copied()))]
    pub age: String,

    /// Primary goal (free text, case-insensitive)
    #[arg(long)]
    pub goal: String,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Add a copywriting strategy to the analysis and print it afterwards
    #[arg(short, long)]
    pub strategy: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

const BANNER_WIDTH: usize = 50;

/// Builds the profile for `args`, with `copy_strategy` filled in when
/// `--strategy` is set.
pub fn analyze(args: &AudienceArgs) -> Result<AudienceProfile> {
    let mut profile = analyze_persona(&args.persona, &args.age, &args.goal)?;
    if args.strategy {
        profile.copy_strategy = Some(render_strategy(&profile));
    }
    Ok(profile)
}

/// The banner and strategy printed after the JSON output.
pub fn strategy_banner(strategy: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("\n{rule}\nCOPYWRITING STRATEGY\n{rule}\n{strategy}")
}

pub fn run(args: &AudienceArgs) -> Result<()> {
    let profile = analyze(args)?;
    output::emit_json(&profile, args.output.as_deref(), "Analysis")?;

    if let Some(strategy) = &profile.copy_strategy {
        println!("{}", strategy_banner(strategy));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AudienceArgs {
        AudienceArgs::try_parse_from(std::iter::once("audience-analyzer").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_parse_required_flags() {
        let args = parse(&["--persona", "beginner", "--age", "46+", "--goal", "Health"]);
        assert_eq!(args.persona, "beginner");
        assert_eq!(args.age, "46+");
        assert_eq!(args.goal, "Health");
        assert!(args.output.is_none());
        assert!(!args.strategy);
    }

    #[test]
    fn test_unknown_persona_rejected_by_parser() {
        let result = AudienceArgs::try_parse_from([
            "audience-analyzer",
            "--persona",
            "ninja",
            "--age",
            "18-25",
            "--goal",
            "fitness",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_goal_rejected_by_parser() {
        let result =
            AudienceArgs::try_parse_from(["audience-analyzer", "--persona", "beginner", "--age", "18-25"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_age_group_not_defined_for_persona_fails() {
        let args = parse(&["--persona", "competitor", "--age", "36-45", "--goal", "competition"]);
        let err = analyze(&args).unwrap_err();
        assert!(err.to_string().contains("Age group '36-45' not valid for persona 'competitor'"));
    }

    #[test]
    fn test_hobbyist_brackets_are_not_accepted_by_flag() {
        let result = AudienceArgs::try_parse_from([
            "audience-analyzer",
            "--persona",
            "hobbyist",
            "--age",
            "36-50",
            "--goal",
            "fitness",
        ]);
        assert!(result.is_err());

        let args = parse(&["--persona", "hobbyist", "--age", "36-45", "--goal", "fitness"]);
        assert!(analyze(&args).unwrap_err().to_string().contains("25-35, 36-50, 51+"));
    }

    #[test]
    fn test_strategy_flag_fills_copy_strategy() {
        let args = parse(&["--persona", "beginner", "--age", "18-25", "--goal", "fitness", "-s"]);
        let profile = analyze(&args).unwrap();
        let strategy = profile.copy_strategy.as_deref().unwrap();
        assert!(strategy.contains("# 🎯 Copy Strategy for Beginner (18-25)"));

        let without = parse(&["--persona", "beginner", "--age", "18-25", "--goal", "fitness"]);
        assert!(analyze(&without).unwrap().copy_strategy.is_none());
    }

    #[test]
    fn test_strategy_banner_layout() {
        let banner = strategy_banner("\n# 🎯 Copy Strategy\n");
        let rule = "=".repeat(50);
        assert_eq!(
            banner,
            format!("\n{rule}\nCOPYWRITING STRATEGY\n{rule}\n\n# 🎯 Copy Strategy\n")
        );
    }

    #[test]
    fn test_run_writes_profile_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let path_str = path.to_str().unwrap();
        let args = parse(&[
            "--persona",
            "beginner",
            "--age",
            "26-35",
            "--goal",
            "confidence",
            "--output",
            path_str,
            "--strategy",
        ]);

        run(&args).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["persona"], "beginner");
        assert_eq!(json["primary_motivation"]["category"], "self_defense");
        assert!(json["copy_strategy"]
            .as_str()
            .unwrap()
            .contains("Most common: not_fit_enough"));
    }
}
