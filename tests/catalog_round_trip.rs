use std::sync::Arc;

use chronoscape::scene::{Catalog, EnvironmentalParams, HistoricalPeriod, SceneSelector};

#[test]
fn index_maps_to_unmodified_record_plus_adaptation() {
    let catalog = Arc::new(Catalog::standard());
    let selector = SceneSelector::new(catalog.clone());
    let params = EnvironmentalParams::new(18.0, HistoricalPeriod::Other, "indoor", "dawn");

    for i in 0..catalog.len() {
        let rendered = selector.render_scene(i, &params);
        assert_eq!(&rendered.scene, catalog.record(i));
        assert_eq!(rendered.adaptation.temperature_influence, 18.0);
        assert_eq!(rendered.adaptation.time_of_day, "dawn");
        assert_eq!(rendered.adaptation.weather_condition, "cool and crisp");
    }
}
