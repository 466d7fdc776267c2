use astrochart::geometry::{RadiusTier, ZodiacSign};
use astrochart::{AstroChart, ChartConfig, ChartData, Planet};
use serde_json::json;

fn even_cusps(start: f64) -> Vec<f64> {
    (0..12).map(|i| (start + i as f64 * 30.0) % 360.0).collect()
}

fn sample_chart() -> ChartData {
    ChartData::new(
        vec![
            Planet::new("Sun", 0.0),
            Planet::new("Moon", 90.0),
            Planet::new("Mars", 200.0).with_speed(-0.3),
        ],
        even_cusps(0.0),
    )
}

#[test]
fn test_render_end_to_end() {
    let chart = AstroChart::default();
    let scene = chart.render(&sample_chart()).unwrap();

    assert_eq!(scene.placed_points().len(), 3);
    assert_eq!(scene.cusp_rays().len(), 12);
    for (i, ray) in scene.cusp_rays().iter().enumerate() {
        assert_eq!(ray.house as usize, i + 1);
        assert!((ray.angle - i as f64 * 30.0).abs() < 1e-9);
    }

    // Same classification as the standalone calculator
    let expected = chart.compute_aspects(&sample_chart().planets);
    assert_eq!(scene.aspects(), expected.as_slice());
    assert_eq!(scene.aspects().len(), 1);
    assert_eq!(scene.aspects()[0].aspect_type, "square");
    assert_eq!(scene.aspect_lines().len(), 1);
}

#[test]
fn test_placed_point_labels() {
    let scene = AstroChart::default().render(&sample_chart()).unwrap();
    let mars = &scene.placed_points()[2];
    assert_eq!(mars.name, "Mars");
    assert!(mars.retrograde);
    assert_eq!(mars.sign, ZodiacSign::Libra);
    assert!((mars.sign_degree - 20.0).abs() < 1e-9);
    assert_eq!(mars.house, 7);
    assert_eq!(mars.tier, RadiusTier::Outer);
    assert_eq!(mars.display_angle, mars.true_angle);
}

#[test]
fn test_true_angles_survive_collision_resolution() {
    let data = ChartData::new(
        vec![Planet::new("Venus", 10.0), Planet::new("Mercury", 10.5)],
        even_cusps(0.0),
    );
    let scene = AstroChart::default().render(&data).unwrap();
    let points = scene.placed_points();

    assert_eq!(points[0].true_angle, 10.0);
    assert_eq!(points[1].true_angle, 10.5);
    assert!((points[1].display_angle - points[0].display_angle).abs() >= 5.0 - 1e-9);

    // Aspects use true longitudes, not display angles
    assert_eq!(scene.aspects().len(), 1);
    assert_eq!(scene.aspects()[0].aspect_type, "conjunction");
    assert!((scene.aspects()[0].separation - 0.5).abs() < 1e-9);
}

#[test]
fn test_angles_are_relative_to_first_cusp() {
    let data = ChartData::new(vec![Planet::new("Sun", 25.0)], even_cusps(15.0));
    let scene = AstroChart::default().render(&data).unwrap();
    assert!((scene.placed_points()[0].true_angle - 10.0).abs() < 1e-9);
    assert_eq!(scene.cusp_rays()[0].angle, 0.0);
    assert!((scene.cusp_rays()[11].angle - 330.0).abs() < 1e-9);
}

#[test]
fn test_geometry_of_scene() {
    let config = ChartConfig {
        chart_radius: 200.0,
        inner_radius_ratio: 0.25,
        rotation_degrees: 0.0,
        ..ChartConfig::default()
    };
    let chart = AstroChart::new(config).unwrap();
    let scene = chart.render(&sample_chart()).unwrap();

    let sun = &scene.placed_points()[0];
    assert!((sun.position.x - 200.0).abs() < 1e-6);
    assert!(sun.position.y.abs() < 1e-6);

    let asc = &scene.cusp_rays()[0];
    assert!((asc.start.x - 50.0).abs() < 1e-6);
    assert!((asc.end.x - 200.0).abs() < 1e-6);

    let line = &scene.aspect_lines()[0];
    assert!((line.from.x - 50.0).abs() < 1e-6);
    assert!((line.to.y - 50.0).abs() < 1e-6);
}

#[test]
fn test_wrapping_is_handled_by_engine() {
    let data = ChartData::new(vec![Planet::new("Sun", 370.0), Planet::new("Moon", -80.0)], even_cusps(0.0));
    let scene = AstroChart::default().render(&data).unwrap();
    assert!((scene.placed_points()[0].true_angle - 10.0).abs() < 1e-9);
    assert!((scene.placed_points()[1].true_angle - 280.0).abs() < 1e-9);
    assert_eq!(scene.aspects()[0].aspect_type, "square");
}

#[test]
fn test_render_rejects_invalid_data() {
    let data = ChartData::new(vec![], vec![0.0; 5]);
    let err = AstroChart::default().render(&data).unwrap_err();
    assert_eq!(
        err.messages(),
        &[
            "Planets data is missing or invalid.".to_string(),
            "Cusps array must have exactly 12 elements.".to_string(),
        ]
    );
    assert_eq!(
        err.to_string(),
        "Planets data is missing or invalid. Cusps array must have exactly 12 elements."
    );
}

#[test]
fn test_render_rejects_non_finite_longitude() {
    let data = ChartData::new(vec![Planet::new("Sun", f64::INFINITY)], even_cusps(0.0));
    let err = AstroChart::default().render(&data).unwrap_err();
    assert_eq!(
        err.messages(),
        &["Planet at index 0 must have a string name and a numeric longitude.".to_string()]
    );
}

#[test]
fn test_render_json() {
    let value = json!({
        "planets": [
            {"name": "Sun", "longitude": 0.0},
            {"name": "Moon", "longitude": 90.0},
            {"name": "Mars", "longitude": 200.0, "speed": -0.3},
        ],
        "cusps": even_cusps(0.0),
    });
    let chart = AstroChart::default();
    let from_json = chart.render_json(&value).unwrap();
    let from_typed = chart.render(&sample_chart()).unwrap();
    assert_eq!(from_json, from_typed);
}

#[test]
fn test_render_json_absent_data() {
    let err = AstroChart::default()
        .render_json(&serde_json::Value::Null)
        .unwrap_err();
    assert_eq!(err.messages(), &["Data is not set".to_string()]);
}

#[test]
fn test_scene_serializes() {
    let scene = AstroChart::default().render(&sample_chart()).unwrap();
    let value = serde_json::to_value(&scene).unwrap();
    assert_eq!(value["placed_points"].as_array().unwrap().len(), 3);
    assert_eq!(value["cusp_rays"].as_array().unwrap().len(), 12);
    assert_eq!(value["placed_points"][2]["sign"], "libra");
    assert_eq!(value["placed_points"][0]["tier"], "outer");
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = ChartConfig {
        chart_radius: -1.0,
        ..ChartConfig::default()
    };
    assert!(AstroChart::new(config).is_err());
}
