use serde::{Deserialize, Serialize};

// =============================================================================
// Enums
// =============================================================================

/// Sky condition shown on the weather card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkyCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
}

impl SkyCondition {
    /// Display label, e.g. `Partly Cloudy`.
    pub fn label(&self) -> &'static str {
        match self {
            SkyCondition::Sunny => "Sunny",
            SkyCondition::PartlyCloudy => "Partly Cloudy",
            SkyCondition::Cloudy => "Cloudy",
            SkyCondition::Rainy => "Rainy",
        }
    }
}

// =============================================================================
// Snapshot Structs
// =============================================================================

/// One entry in the short-range forecast strip.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub high_c: i32,
    pub low_c: i32,
    pub condition: SkyCondition,
}

/// Current conditions plus a three-day outlook for one location.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub temperature_c: i32,
    pub condition: SkyCondition,
    pub humidity_pct: u8,
    pub wind_kmh: u32,
    pub forecast: Vec<ForecastDay>,
}

impl WeatherSnapshot {
    /// The bundled sample snapshot, shown until a live feed is wired up.
    pub fn sample() -> Self {
        Self {
            location: "Delhi, India".to_string(),
            temperature_c: 28,
            condition: SkyCondition::PartlyCloudy,
            humidity_pct: 65,
            wind_kmh: 12,
            forecast: vec![
                ForecastDay {
                    day: "Today".to_string(),
                    high_c: 32,
                    low_c: 24,
                    condition: SkyCondition::Sunny,
                },
                ForecastDay {
                    day: "Tomorrow".to_string(),
                    high_c: 29,
                    low_c: 22,
                    condition: SkyCondition::Rainy,
                },
                ForecastDay {
                    day: "Thu".to_string(),
                    high_c: 26,
                    low_c: 20,
                    condition: SkyCondition::Cloudy,
                },
            ],
        }
    }

    /// Current temperature as displayed, e.g. `28°C`.
    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature_c)
    }
}

// =============================================================================
// Tests
// =============================================================================
