use sunball_engine::Scene;

#[test]
fn sky_manifest_smoke_round_trips_through_the_facade() {
    let mut scene = Scene::new(800.0, 600.0);

    let json = scene.get_sky_manifest_json();
    assert!(json.contains("\"dawn\""));
    assert!(json.contains("\"night\""));

    // A palette exported by one scene loads into another.
    let mut other = Scene::new(400.0, 300.0);
    other.load_sky_manifest(json).expect("default manifest should load");

    // Default day gradient matches the stock preset.
    other.update_celestial(10, 0);
    assert_eq!(
        other.sky_css_gradient(),
        "linear-gradient(to top, #2196F3, #BBDEFB)"
    );
}

#[test]
fn sky_manifest_smoke_rejects_malformed_json() {
    let mut scene = Scene::new(800.0, 600.0);
    assert!(scene.load_sky_manifest("{not json".to_string()).is_err());
    assert!(scene
        .load_sky_manifest("{\"gradients\":[]}".to_string())
        .is_err());
}
