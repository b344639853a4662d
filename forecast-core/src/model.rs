use serde::{Deserialize, Serialize};

/// One frontend-ready forecast entry.
///
/// Values are already rounded and formatted; consumers render them as-is.
/// Serialized field names match the shape the frontend expects
/// (`tempF`, `windSpeed`, `iconDescription`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastEntry {
    /// City name, taken once from the provider response and applied to every entry.
    pub city: String,

    /// Calendar date in the local time zone, e.g. `11/14/2023`.
    pub date: String,

    /// Provider icon code; empty when the sample carries no weather descriptor.
    pub icon: String,

    /// Human-readable condition text; empty when the sample carries no descriptor.
    pub icon_description: String,

    /// Temperature in Fahrenheit, rounded to the nearest degree.
    pub temp_f: i32,

    /// Wind speed in mph, rounded to the nearest integer.
    pub wind_speed: i32,

    /// Relative humidity, 0–100.
    pub humidity: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_frontend_field_names() {
        let entry = ForecastEntry {
            city: "Paris".to_string(),
            date: "11/14/2023".to_string(),
            icon: "01d".to_string(),
            icon_description: "clear sky".to_string(),
            temp_f: 69,
            wind_speed: 7,
            humidity: 54,
        };

        let value = serde_json::to_value(&entry).expect("entry must serialize");

        assert_eq!(value["city"], "Paris");
        assert_eq!(value["tempF"], 69);
        assert_eq!(value["windSpeed"], 7);
        assert_eq!(value["iconDescription"], "clear sky");
        assert_eq!(value["humidity"], 54);
    }
}
