use serde::{Deserialize, Serialize};

use super::env::HistoricalPeriod;
use super::weights::SCENE_COUNT;

/// One fixed historical vignette: asset cue identifiers plus descriptive
/// text. Read-only reference data for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRecord {
    pub scene_name: String,
    pub audio_cue: String,
    pub visual_cue: String,
    pub olfactory_cue: String,
    pub period: HistoricalPeriod,
    pub description: String,
}

/// The fixed 4-entry scene catalog. Constructed once and shared by
/// reference into the selector; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    records: Vec<SceneRecord>,
}

impl Catalog {
    /// The standard vignette set. Index order matters: the period bias
    /// table addresses these slots positionally.
    pub fn standard() -> Self {
        let records = vec![
            SceneRecord {
                scene_name: "forum_romanum".into(),
                audio_cue: "audio/forum_crowd_latin.ogg".into(),
                visual_cue: "visual/forum_colonnade_noon".into(),
                olfactory_cue: "scent/incense_and_dust".into(),
                period: HistoricalPeriod::Roman,
                description: "The forum at full market swing: orators on the rostra, \
                              vendors calling over the crowd, sun on travertine."
                    .into(),
            },
            SceneRecord {
                scene_name: "medieval_market".into(),
                audio_cue: "audio/market_bells_carts.ogg".into(),
                visual_cue: "visual/timbered_square_banners".into(),
                olfactory_cue: "scent/woodsmoke_and_bread".into(),
                period: HistoricalPeriod::Medieval,
                description: "A walled-town market square under guild banners, \
                              cartwheels on cobbles and bells marking the hour."
                    .into(),
            },
            SceneRecord {
                scene_name: "paleolithic_cave".into(),
                audio_cue: "audio/cave_fire_drums.ogg".into(),
                visual_cue: "visual/ochre_handprints_firelight".into(),
                olfactory_cue: "scent/tallow_and_charcoal".into(),
                period: HistoricalPeriod::Paleolithic,
                description: "Firelight moving across ochre handprints deep in the \
                              cave, a hide drum somewhere behind the hearth."
                    .into(),
            },
            SceneRecord {
                scene_name: "harborside_dusk".into(),
                audio_cue: "audio/harbor_gulls_rigging.ogg".into(),
                visual_cue: "visual/quay_lanterns_masts".into(),
                olfactory_cue: "scent/brine_and_tar".into(),
                period: HistoricalPeriod::Other,
                description: "A timeless working harbor at dusk: rigging creaks, \
                              lanterns come up along the quay."
                    .into(),
            },
        ];
        debug_assert_eq!(records.len(), SCENE_COUNT);
        Self { records }
    }

    pub fn record(&self, index: usize) -> &SceneRecord {
        &self.records[index]
    }

    pub fn records(&self) -> &[SceneRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Fixed per-period bias rows over the catalog slots. Every row gives the
/// harborside slot a 0.2 ambient share; unknown periods get the flat row.
pub fn period_bias(period: HistoricalPeriod) -> [f32; SCENE_COUNT] {
    match period {
        HistoricalPeriod::Roman => [0.6, 0.1, 0.1, 0.2],
        HistoricalPeriod::Medieval => [0.1, 0.6, 0.1, 0.2],
        HistoricalPeriod::Paleolithic => [0.1, 0.1, 0.6, 0.2],
        HistoricalPeriod::Other => [0.25; SCENE_COUNT],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_exactly_four_records() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), SCENE_COUNT);
    }

    #[test]
    fn bias_rows_sum_to_one() {
        for period in [
            HistoricalPeriod::Roman,
            HistoricalPeriod::Medieval,
            HistoricalPeriod::Paleolithic,
            HistoricalPeriod::Other,
        ] {
            let sum: f32 = period_bias(period).iter().sum();
            assert!((sum - 1.0).abs() < 1e-6, "{period:?} bias sums to {sum}");
        }
    }

    #[test]
    fn bias_peaks_on_matching_slot() {
        assert_eq!(
            period_bias(HistoricalPeriod::Paleolithic),
            [0.1, 0.1, 0.6, 0.2]
        );
        let roman = period_bias(HistoricalPeriod::Roman);
        assert!(roman[0] > roman[1] && roman[0] > roman[2] && roman[0] > roman[3]);
    }
}
