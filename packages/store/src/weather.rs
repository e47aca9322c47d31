//! Weather snapshot for a takeoff site and the compass-direction helper.

use serde::{Deserialize, Deserializer, Serialize};

/// Current conditions at a site as returned by `POST /api/weather`.
///
/// Every field is optional: the backend omits what it does not know.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default)]
    pub wind_direction: Option<WindDirection>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub cloud_coverage: Option<String>,
}

impl WeatherSnapshot {
    pub fn is_empty(&self) -> bool {
        self == &WeatherSnapshot::default()
    }
}

/// Wind direction as sent by the backend: degrees, or an already-formatted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WindDirection {
    Degrees(f64),
    Label(String),
}

impl WindDirection {
    /// Compass label for display. Numeric angles, including numbers sent as
    /// text, go through [`compass_label`]; other labels are shown as sent.
    pub fn label(&self) -> String {
        match self {
            WindDirection::Degrees(angle) => compass_label(*angle).to_string(),
            WindDirection::Label(label) => match label.trim().parse::<f64>() {
                Ok(angle) => compass_label(angle).to_string(),
                Err(_) => label.clone(),
            },
        }
    }
}

/// Map an angle in degrees to an 8-point compass label.
///
/// Each sector's upper bound is inclusive (`22.5` is `N`, `67.5` is `NE`).
/// Angles outside `[0, 360)` yield `N/A`.
pub fn compass_label(angle: f64) -> &'static str {
    const SECTORS: [(f64, &str); 8] = [
        (22.5, "N"),
        (67.5, "NE"),
        (112.5, "E"),
        (157.5, "SE"),
        (202.5, "S"),
        (247.5, "SW"),
        (292.5, "W"),
        (337.5, "NW"),
    ];

    if !(0.0..360.0).contains(&angle) {
        return "N/A";
    }
    SECTORS
        .iter()
        .find(|(upper, _)| angle <= *upper)
        .map_or("N", |(_, label)| label)
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_sector_boundaries() {
        assert_eq!(compass_label(0.0), "N");
        assert_eq!(compass_label(22.5), "N");
        assert_eq!(compass_label(22.6), "NE");
        assert_eq!(compass_label(45.0), "NE");
        assert_eq!(compass_label(67.5), "NE");
        assert_eq!(compass_label(90.0), "E");
        assert_eq!(compass_label(180.0), "S");
        assert_eq!(compass_label(270.0), "W");
        assert_eq!(compass_label(337.5), "NW");
        assert_eq!(compass_label(337.6), "N");
        assert_eq!(compass_label(359.9), "N");
    }

    #[test]
    fn test_compass_out_of_range() {
        assert_eq!(compass_label(360.0), "N/A");
        assert_eq!(compass_label(-1.0), "N/A");
        assert_eq!(compass_label(f64::NAN), "N/A");
    }

    #[test]
    fn test_snapshot_from_backend_json() {
        let snapshot: WeatherSnapshot = serde_json::from_str(
            r#"{"temperature": 17.5, "weather": "맑음", "wind_direction": 45, "wind_speed": 3.2, "cloud_coverage": 20}"#,
        )
        .unwrap();
        assert_eq!(snapshot.temperature, Some(17.5));
        assert_eq!(snapshot.wind_direction.as_ref().unwrap().label(), "NE");
        assert_eq!(snapshot.cloud_coverage.as_deref(), Some("20"));

        let labelled: WeatherSnapshot =
            serde_json::from_str(r#"{"wind_direction": "SSW", "cloud_coverage": "많음"}"#).unwrap();
        assert_eq!(labelled.wind_direction.unwrap().label(), "SSW");
        assert_eq!(labelled.cloud_coverage.as_deref(), Some("많음"));
    }

    #[test]
    fn test_numeric_text_direction_is_converted() {
        let snapshot: WeatherSnapshot =
            serde_json::from_str(r#"{"wind_direction": "45"}"#).unwrap();
        assert_eq!(snapshot.wind_direction.unwrap().label(), "NE");
        assert_eq!(WindDirection::Label(" 22.5 ".to_string()).label(), "N");
        assert_eq!(WindDirection::Label("400".to_string()).label(), "N/A");
        assert_eq!(WindDirection::Label("NNE".to_string()).label(), "NNE");
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot: WeatherSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
        assert!(snapshot.wind_direction.is_none());
    }
}
