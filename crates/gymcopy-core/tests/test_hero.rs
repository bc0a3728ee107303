use gymcopy_core::hero::{HeroGenerator, HeroRequest};
use gymcopy_core::template::{HeadlineStyle, Replacements, catalog, fill_template, placeholders};
use strum::IntoEnumIterator;

fn request(style: &str) -> HeroRequest {
    HeroRequest {
        style: style.to_string(),
        ..HeroRequest::default()
    }
}

#[test]
fn test_every_style_except_competition_generates() {
    for style in HeadlineStyle::iter() {
        let result = HeroGenerator::from_seed(0).generate(&request(style.as_ref()));
        match style {
            HeadlineStyle::Competition => {
                assert!(result.unwrap_err().is_template_not_found());
            }
            _ => {
                let copy = result.unwrap();
                assert_eq!(
                    copy.background_image,
                    format!("/images/hero-{style}-martial-arts.jpg")
                );
            }
        }
    }
}

#[test]
fn test_bundle_serializes_primary_and_flat_variations() {
    let bundle = HeroGenerator::from_seed(17)
        .bundle(&HeroRequest::default(), 3)
        .unwrap();
    let json = serde_json::to_value(&bundle).unwrap();

    assert!(json["primary"]["headline"].is_string());
    let variations = json["variations"].as_array().unwrap();
    assert_eq!(variations.len(), 3);
    assert_eq!(variations[2]["variation_id"], "hero_3");
    assert_eq!(variations[2]["cta_url"], "#free-trial");
    assert!(variations[2].get("copy").is_none());
}

#[test]
fn test_copy_json_keeps_field_order() {
    let copy = HeroGenerator::from_seed(6)
        .generate(&HeroRequest::default())
        .unwrap();
    let json = serde_json::to_string(&copy).unwrap();

    let fields = [
        "headline",
        "subheadline",
        "body_copy",
        "cta_text",
        "cta_url",
        "background_image",
        "overlay_opacity",
        "text_color",
        "button_color",
        "style_notes",
    ];
    let positions: Vec<usize> = fields
        .iter()
        .map(|field| json.find(&format!("\"{field}\":")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{json}");
}

#[test]
fn test_seeded_bundles_are_reproducible() {
    let request = request("results");
    let first = HeroGenerator::from_seed(99).bundle(&request, 6).unwrap();
    let second = HeroGenerator::from_seed(99).bundle(&request, 6).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generated_sections_leave_no_known_placeholders() {
    let request = HeroRequest {
        gym_name: "Harbor BJJ".to_string(),
        ..HeroRequest::default()
    };
    for seed in 0..32 {
        let copy = HeroGenerator::from_seed(seed).generate(&request).unwrap();
        for text in [&copy.headline, &copy.subheadline, &copy.body_copy, &copy.cta_text] {
            assert!(placeholders(text).is_empty(), "unresolved in: {text}");
        }
    }
}

#[test]
fn test_fixed_headline_table_covers_every_headline_placeholder() {
    let mut all_keys = Replacements::new()
        .with("timeframe", "x")
        .with("martial_art", "x");
    all_keys.extend(catalog::HEADLINE_FIXED_VALUES.iter().copied());

    for style in HeadlineStyle::iter() {
        for template in catalog::headline_templates(style) {
            assert!(placeholders(&fill_template(template, &all_keys)).is_empty(), "{template}");
        }
    }
}
