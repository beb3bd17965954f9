// Options parsing, speed presets, palette, surface and pointer inputs.

use glam::DVec2;
use tagcloud_core::{
    Palette, PointerState, SceneConfig, SpeedPreset, SurfaceError, SurfaceSize, TagSpec,
};

#[test]
fn speed_presets_map_to_multipliers() {
    assert_eq!(SpeedPreset::from_name("slow").multiplier(), 0.3);
    assert_eq!(SpeedPreset::from_name("normal").multiplier(), 1.0);
    assert_eq!(SpeedPreset::from_name("fast").multiplier(), 2.0);
}

#[test]
fn unknown_preset_falls_back_to_normal() {
    assert_eq!(SpeedPreset::from_name("bogus"), SpeedPreset::Normal);
    assert_eq!(
        SpeedPreset::from("bogus").multiplier(),
        SpeedPreset::Normal.multiplier()
    );
    assert_eq!(SpeedPreset::from_name("FAST"), SpeedPreset::Normal);
}

#[test]
fn options_default_when_empty() {
    let cfg: SceneConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, SceneConfig::default());
    assert_eq!(cfg.base_radius(), 200.0);
    assert_eq!(cfg.speed(), 1.0);
    assert_eq!(cfg.direction, 135.0);
    assert!(cfg.keep);
    assert!(cfg.use_container_inline_styles);
}

#[test]
fn options_use_camel_case_names() {
    let cfg: SceneConfig = serde_json::from_str(
        r#"{ "radius": 250, "maxSpeed": "fast", "initSpeed": "slow",
             "direction": 90, "keep": false, "useContainerInlineStyles": false }"#,
    )
    .unwrap();
    assert_eq!(cfg.base_radius(), 250.0);
    assert_eq!(cfg.max_speed, SpeedPreset::Fast);
    assert_eq!(cfg.init_speed, SpeedPreset::Slow);
    assert_eq!(cfg.direction, 90.0);
    assert!(!cfg.keep);
    assert!(!cfg.use_container_inline_styles);
    assert_eq!(cfg.speed(), 2.0);
}

#[test]
fn non_string_speed_means_normal() {
    for raw in [
        r#"{ "maxSpeed": 3 }"#,
        r#"{ "maxSpeed": null }"#,
        r#"{ "maxSpeed": true }"#,
        r#"{ "maxSpeed": { "value": "fast" } }"#,
        r#"{ "maxSpeed": ["fast"] }"#,
        r#"{ "maxSpeed": "warp" }"#,
    ] {
        let cfg: SceneConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(cfg.max_speed, SpeedPreset::Normal, "input {raw}");
    }
}

#[test]
fn unusable_radius_falls_back_to_default() {
    assert_eq!(SceneConfig::default().with_radius(0.0).base_radius(), 200.0);
    assert_eq!(SceneConfig::default().with_radius(-5.0).base_radius(), 200.0);
    assert_eq!(SceneConfig::default().with_radius(f64::NAN).base_radius(), 200.0);
    assert_eq!(SceneConfig::default().with_radius(80.0).base_radius(), 80.0);
    let cfg: SceneConfig = serde_json::from_str(r#"{ "radius": null }"#).unwrap();
    assert_eq!(cfg.base_radius(), 200.0);
}

#[test]
fn loosely_typed_options_are_coerced() {
    let cfg: SceneConfig = serde_json::from_str(
        r#"{ "radius": "250", "direction": "45", "keep": 1, "useContainerInlineStyles": "yes" }"#,
    )
    .unwrap();
    assert_eq!(cfg.base_radius(), 250.0);
    assert_eq!(cfg.direction, 45.0);
    assert!(cfg.keep);
    assert!(cfg.use_container_inline_styles);

    let cfg: SceneConfig = serde_json::from_str(
        r#"{ "radius": "wide", "direction": 0, "keep": 0, "useContainerInlineStyles": "" }"#,
    )
    .unwrap();
    assert_eq!(cfg.base_radius(), 200.0);
    assert_eq!(cfg.direction, 135.0);
    assert!(!cfg.keep);
    assert!(!cfg.use_container_inline_styles);
}

#[test]
fn null_flags_are_false_and_objects_true() {
    let cfg: SceneConfig =
        serde_json::from_str(r#"{ "keep": null, "useContainerInlineStyles": {} }"#).unwrap();
    assert!(!cfg.keep);
    assert!(cfg.use_container_inline_styles);
    let cfg: SceneConfig = serde_json::from_str(r#"{ "radius": [1], "direction": true }"#).unwrap();
    assert_eq!(cfg.base_radius(), 200.0);
    assert_eq!(cfg.direction, 135.0);
}

#[test]
fn tag_list_parses_with_optional_href() {
    let tags: Vec<TagSpec> =
        serde_json::from_str(r#"[{ "name": "rust", "href": "/tags/rust/" }, { "name": "wasm" }]"#)
            .unwrap();
    assert_eq!(tags[0], TagSpec::new("rust", "/tags/rust/"));
    assert_eq!(tags[1], TagSpec::new("wasm", ""));
    assert!(serde_json::from_str::<Vec<TagSpec>>(r#"[{ "href": "/x" }]"#).is_err());
}

#[test]
fn seeded_palette_is_reproducible() {
    let mut a = Palette::seeded(7);
    let mut b = Palette::seeded(7);
    let xs: Vec<String> = (0..32).map(|_| a.pick()).collect();
    let ys: Vec<String> = (0..32).map(|_| b.pick()).collect();
    assert_eq!(xs, ys);
    assert!(xs.iter().all(|c| a.colors().contains(c)));
}

#[test]
fn custom_palette_only_yields_its_colors() {
    let mut p = Palette::with_colors(vec!["red".into(), "blue".into()], 1);
    for _ in 0..50 {
        let c = p.pick();
        assert!(c == "red" || c == "blue", "unexpected {c}");
    }
}

#[test]
fn empty_custom_palette_uses_defaults() {
    let p = Palette::with_colors(Vec::new(), 1);
    assert_eq!(p.colors().len(), 20);
}

#[test]
fn surface_rejects_bad_measurements() {
    assert!(matches!(
        SurfaceSize::new(f64::NAN, 10.0),
        Err(SurfaceError::NonFinite { .. })
    ));
    assert!(matches!(
        SurfaceSize::new(10.0, f64::INFINITY),
        Err(SurfaceError::NonFinite { .. })
    ));
    assert!(matches!(
        SurfaceSize::new(-1.0, 10.0),
        Err(SurfaceError::Negative { .. })
    ));
    assert!(SurfaceSize::new(0.0, 0.0).is_ok());
}

#[test]
fn responsive_radius_uses_shorter_side() {
    let s = SurfaceSize::new(800.0, 400.0).unwrap();
    assert!((s.responsive_radius() - 140.0).abs() < 1e-9);
    assert_eq!(SurfaceSize::new(0.0, 300.0).unwrap().responsive_radius(), 0.0);
}

#[test]
fn pointer_move_normalizes_around_center() {
    let s = SurfaceSize::new(400.0, 200.0).unwrap();
    let mut p = PointerState::default();
    p.moved(300.0, 50.0, s);
    assert!(p.active);
    assert!((p.offset - DVec2::new(0.5, -0.5)).length() < 1e-12);

    p.moved(0.0, 200.0, s);
    assert_eq!(p.offset, DVec2::new(-1.0, 1.0));

    // outside the surface (pointer capture) is clamped
    p.moved(1000.0, -1000.0, s);
    assert_eq!(p.offset, DVec2::new(1.0, -1.0));
}

#[test]
fn pointer_on_empty_surface_stays_centered() {
    let mut p = PointerState::default();
    p.moved(12.0, 34.0, SurfaceSize::default());
    assert_eq!(p.offset, DVec2::ZERO);
    assert!(p.active);
}

#[test]
fn pointer_leave_resets_offset() {
    let s = SurfaceSize::new(100.0, 100.0).unwrap();
    let mut p = PointerState::default();
    p.entered();
    assert!(p.active);
    p.moved(90.0, 10.0, s);
    p.left();
    assert!(!p.active);
    assert_eq!(p.offset, DVec2::ZERO);
}
