use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// Recognized historical-period labels. Anything else collapses to `Other`,
/// which carries the equal-weight bias row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoricalPeriod {
    Roman,
    Paleolithic,
    Medieval,
    Other,
}

impl Serialize for HistoricalPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for HistoricalPeriod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

impl HistoricalPeriod {
    /// Parse a free-form label. Unrecognized labels are a documented
    /// fallback, not an error.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "roman" => Self::Roman,
            "paleolithic" => Self::Paleolithic,
            "medieval" => Self::Medieval,
            other => {
                debug!(label = other, "unknown period label, using equal bias");
                Self::Other
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Roman => "roman",
            Self::Paleolithic => "paleolithic",
            Self::Medieval => "medieval",
            Self::Other => "other",
        }
    }
}

/// Immutable per-request input bundle. `location_type` and `time_of_day`
/// are opaque labels passed through to the rendered scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentalParams {
    pub temperature_c: f32,
    pub period: HistoricalPeriod,
    pub location_type: String,
    pub time_of_day: String,
}

impl EnvironmentalParams {
    pub fn new(
        temperature_c: f32,
        period: HistoricalPeriod,
        location_type: impl Into<String>,
        time_of_day: impl Into<String>,
    ) -> Self {
        Self {
            temperature_c,
            period,
            location_type: location_type.into(),
            time_of_day: time_of_day.into(),
        }
    }
}

/// Weather label from temperature thresholds. Strictly greater than 30 is
/// hot and strictly greater than 20 is pleasant, so the boundary values
/// themselves fall into the cooler bucket.
pub fn weather_condition(temperature_c: f32) -> &'static str {
    if temperature_c > 30.0 {
        "hot and sun-baked"
    } else if temperature_c > 20.0 {
        "pleasant and mild"
    } else {
        "cool and crisp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_parse() {
        assert_eq!(HistoricalPeriod::from_label("roman"), HistoricalPeriod::Roman);
        assert_eq!(
            HistoricalPeriod::from_label("  Paleolithic "),
            HistoricalPeriod::Paleolithic
        );
        assert_eq!(
            HistoricalPeriod::from_label("MEDIEVAL"),
            HistoricalPeriod::Medieval
        );
    }

    #[test]
    fn unknown_labels_fall_back() {
        assert_eq!(HistoricalPeriod::from_label("jurassic"), HistoricalPeriod::Other);
        assert_eq!(HistoricalPeriod::from_label(""), HistoricalPeriod::Other);
    }
}
