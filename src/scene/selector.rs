use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use super::catalog::{period_bias, Catalog, SceneRecord};
use super::env::{weather_condition, EnvironmentalParams};
use super::weights::{compute_weights, WeightVector};

/// Environment-derived annotation attached to every rendered scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adaptation {
    pub temperature_influence: f32,
    pub time_of_day: String,
    pub weather_condition: String,
}

/// A catalog record plus its per-call adaptation block. Created per call,
/// discarded after consumption.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedScene {
    #[serde(flatten)]
    pub scene: SceneRecord,
    pub adaptation: Adaptation,
}

/// Stateless scene selection pipeline over a shared immutable catalog.
/// The RNG is injected per call, so concurrent callers need no
/// coordination and tests can seed the draw.
pub struct SceneSelector {
    catalog: Arc<Catalog>,
}

impl SceneSelector {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn weights_for(&self, params: &EnvironmentalParams) -> WeightVector {
        compute_weights(params.temperature_c, &period_bias(params.period))
    }

    /// Catalog lookup plus the environmental adaptation block. Index is
    /// always in range given the 4-slot weight invariant.
    pub fn render_scene(&self, index: usize, params: &EnvironmentalParams) -> RenderedScene {
        let scene = self.catalog.record(index).clone();
        RenderedScene {
            scene,
            adaptation: Adaptation {
                temperature_influence: params.temperature_c,
                time_of_day: params.time_of_day.clone(),
                weather_condition: weather_condition(params.temperature_c).to_string(),
            },
        }
    }

    /// The public entry point: derive weights, draw once, render.
    pub fn generate_scene<R: Rng + ?Sized>(
        &self,
        params: &EnvironmentalParams,
        rng: &mut R,
    ) -> RenderedScene {
        let weights = self.weights_for(params);
        let index = weights.sample_index(rng);
        debug!(
            period = params.period.label(),
            temperature_c = params.temperature_c,
            weights = ?weights.as_array(),
            index,
            "scene selected"
        );
        self.render_scene(index, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::env::HistoricalPeriod;
    use rand::{rngs::SmallRng, SeedableRng};

    fn selector() -> SceneSelector {
        SceneSelector::new(Arc::new(Catalog::standard()))
    }

    #[test]
    fn render_passes_record_through_unmodified() {
        let sel = selector();
        let params =
            EnvironmentalParams::new(25.0, HistoricalPeriod::Roman, "outdoor", "afternoon");
        for i in 0..sel.catalog().len() {
            let rendered = sel.render_scene(i, &params);
            assert_eq!(&rendered.scene, sel.catalog().record(i));
            assert_eq!(rendered.adaptation.time_of_day, "afternoon");
            assert_eq!(rendered.adaptation.temperature_influence, 25.0);
        }
    }

    #[test]
    fn generate_always_lands_in_catalog() {
        let sel = selector();
        let params =
            EnvironmentalParams::new(22.0, HistoricalPeriod::Other, "indoor", "midday");
        let mut rng = SmallRng::seed_from_u64(99);
        let names: Vec<String> = sel
            .catalog()
            .records()
            .iter()
            .map(|r| r.scene_name.clone())
            .collect();
        for _ in 0..200 {
            let rendered = sel.generate_scene(&params, &mut rng);
            assert!(names.contains(&rendered.scene.scene_name));
        }
    }
}
