use astrochart::{AstroChart, ChartConfig, ChartController, ChartData, ConfigError, Planet};
use std::io::Write;

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
chart_radius = 250.0
collision_threshold_degrees = 3.0

[[aspects]]
name = "conjunction"
exact_angle = 0.0
orb = 10.0

[[aspects]]
name = "quincunx"
exact_angle = 150.0
orb = 2.0
"#
    )
    .unwrap();

    let config = ChartConfig::load(file.path()).unwrap();
    assert_eq!(config.chart_radius, 250.0);
    assert_eq!(config.collision_threshold_degrees, 3.0);
    assert_eq!(config.inner_radius_ratio, 0.5);
    assert_eq!(config.aspects.len(), 2);
    assert_eq!(config.aspects[1].name, "quincunx");

    let chart = AstroChart::new(config).unwrap();
    let aspects = chart.compute_aspects(&[Planet::new("Sun", 0.0), Planet::new("Moon", 151.0)]);
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].aspect_type, "quincunx");
}

#[test]
fn test_load_missing_file() {
    let err = ChartConfig::load("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_invalid_toml() {
    let err = ChartConfig::from_toml_str("chart_radius = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_out_of_range_values() {
    for text in [
        "inner_radius_ratio = 1.5",
        "max_cluster_arc_degrees = 400.0",
        "collision_threshold_degrees = -2.0",
        "overflow_tier_spacing = 0.0",
        "[[aspects]]\nname = \"\"\nexact_angle = 0.0\norb = 1.0",
        "[[aspects]]\nname = \"odd\"\nexact_angle = 200.0\norb = 1.0",
    ] {
        let err = ChartConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "accepted: {}", text);
    }
}

#[test]
fn test_threshold_from_config_drives_layout() {
    let config = ChartConfig::from_toml_str("collision_threshold_degrees = 8.0").unwrap();
    let chart = AstroChart::new(config).unwrap();
    let data = ChartData::new(
        vec![Planet::new("Sun", 40.0), Planet::new("Moon", 46.0)],
        (0..12).map(|i| i as f64 * 30.0).collect(),
    );
    let scene = chart.render(&data).unwrap();
    let points = scene.placed_points();
    assert!((points[1].display_angle - points[0].display_angle - 8.0).abs() < 1e-9);
}

#[test]
fn test_tiny_threshold_renders() {
    let config = ChartConfig::from_toml_str("collision_threshold_degrees = 1e-300").unwrap();
    let chart = AstroChart::new(config).unwrap();
    let data = ChartData::new(
        vec![Planet::new("Sun", 10.0), Planet::new("Moon", 10.0)],
        (0..12).map(|i| i as f64 * 30.0).collect(),
    );
    let scene = chart.render(&data).unwrap();
    assert_eq!(scene.placed_points().len(), 2);
}

#[test]
fn test_controller_rejects_invalid_config() {
    let config = ChartConfig {
        inner_radius_ratio: 1.5,
        ..ChartConfig::default()
    };
    let err = ChartController::new(config).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(ChartController::new(ChartConfig::default()).is_ok());
}

#[test]
fn test_shipped_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../configs/chart.toml");
    let config = ChartConfig::load(path).unwrap();
    assert_eq!(config, ChartConfig::default());
}
