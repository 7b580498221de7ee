use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    codes::{self, Category},
    de::{nullable, object, objects},
};

/// Location and key for a single lookup.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub location: String,
    pub api_key: String,
}

impl WeatherQuery {
    pub fn new(location: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { location: location.into(), api_key: api_key.into() }
    }
}

/// One `{"value": "..."}` style entry from `weatherDesc` / `weatherIconUrl`.
pub type ValueMap = HashMap<String, String>;

/// Present conditions at the queried location.
///
/// Quantities stay as the text the API sent; see the accessor methods for
/// parsed views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentCondition {
    #[serde(deserialize_with = "nullable")]
    pub cloudcover: String,
    #[serde(deserialize_with = "nullable")]
    pub humidity: String,
    #[serde(deserialize_with = "nullable")]
    pub observation_time: String,
    #[serde(rename = "precipMM", deserialize_with = "nullable")]
    pub precip_mm: String,
    #[serde(deserialize_with = "nullable")]
    pub pressure: String,
    #[serde(rename = "temp_C", deserialize_with = "nullable")]
    pub temp_c: String,
    #[serde(rename = "temp_F", deserialize_with = "nullable")]
    pub temp_f: String,
    #[serde(deserialize_with = "nullable")]
    pub visibility: String,
    #[serde(rename = "weatherCode", deserialize_with = "nullable")]
    pub weather_code: String,
    #[serde(rename = "weatherDesc", deserialize_with = "nullable")]
    pub weather_desc: Vec<ValueMap>,
    #[serde(rename = "weatherIconUrl", deserialize_with = "nullable")]
    pub weather_icon_url: Vec<ValueMap>,
    #[serde(rename = "winddir16Point", deserialize_with = "nullable")]
    pub winddir_16_point: String,
    #[serde(rename = "winddirDegree", deserialize_with = "nullable")]
    pub winddir_degree: String,
    #[serde(rename = "windspeedKmph", deserialize_with = "nullable")]
    pub windspeed_kmph: String,
    #[serde(rename = "windspeedMiles", deserialize_with = "nullable")]
    pub windspeed_miles: String,
}

/// One historical (or forecast) day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PastWeatherDay {
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    #[serde(rename = "precipMM", deserialize_with = "nullable")]
    pub precip_mm: String,
    #[serde(rename = "tempMaxC", deserialize_with = "nullable")]
    pub temp_max_c: String,
    #[serde(rename = "tempMaxF", deserialize_with = "nullable")]
    pub temp_max_f: String,
    #[serde(rename = "tempMinC", deserialize_with = "nullable")]
    pub temp_min_c: String,
    #[serde(rename = "tempMinF", deserialize_with = "nullable")]
    pub temp_min_f: String,
    #[serde(rename = "weatherCode", deserialize_with = "nullable")]
    pub weather_code: String,
    #[serde(rename = "weatherDesc", deserialize_with = "nullable")]
    pub weather_desc: Vec<ValueMap>,
    #[serde(rename = "weatherIconUrl", deserialize_with = "nullable")]
    pub weather_icon_url: Vec<ValueMap>,
    #[serde(rename = "winddir16Point", deserialize_with = "nullable")]
    pub winddir_16_point: String,
    #[serde(rename = "winddirDegree", deserialize_with = "nullable")]
    pub winddir_degree: String,
    #[serde(deserialize_with = "nullable")]
    pub winddirection: String,
    #[serde(rename = "windspeedKmph", deserialize_with = "nullable")]
    pub windspeed_kmph: String,
    #[serde(rename = "windspeedMiles", deserialize_with = "nullable")]
    pub windspeed_miles: String,
}

/// The API's echo of what was asked for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestEcho {
    #[serde(deserialize_with = "nullable")]
    pub query: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
}

/// Everything decoded from one response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherReport {
    #[serde(deserialize_with = "objects")]
    pub current_condition: Vec<CurrentCondition>,
    #[serde(deserialize_with = "objects")]
    pub request: Vec<RequestEcho>,
    #[serde(deserialize_with = "objects")]
    pub weather: Vec<PastWeatherDay>,
}

impl WeatherReport {
    /// The API sends current conditions as a list holding a single entry.
    pub fn current(&self) -> Option<&CurrentCondition> {
        self.current_condition.first()
    }
}

/// Top-level `{"data": ...}` wrapper.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WeatherEnvelope {
    #[serde(deserialize_with = "object")]
    pub data: WeatherReport,
}

impl CurrentCondition {
    pub fn weather_code(&self) -> Option<i32> {
        parse_code(&self.weather_code)
    }

    pub fn description(&self) -> Option<&str> {
        first_value(&self.weather_desc)
    }

    pub fn icon_url(&self) -> Option<&str> {
        first_value(&self.weather_icon_url)
    }

    pub fn temp_c(&self) -> Option<f64> {
        self.temp_c.trim().parse().ok()
    }

    /// Table description and category, when the code is numeric.
    pub fn condition(&self) -> Option<(&'static str, Category)> {
        self.weather_code().map(codes::describe)
    }
}

impl PastWeatherDay {
    pub fn weather_code(&self) -> Option<i32> {
        parse_code(&self.weather_code)
    }

    pub fn description(&self) -> Option<&str> {
        first_value(&self.weather_desc)
    }

    pub fn icon_url(&self) -> Option<&str> {
        first_value(&self.weather_icon_url)
    }

    /// `date` as a calendar date (`YYYY-MM-DD`).
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    pub fn condition(&self) -> Option<(&'static str, Category)> {
        self.weather_code().map(codes::describe)
    }
}

fn parse_code(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

fn first_value(entries: &[ValueMap]) -> Option<&str> {
    entries.first().and_then(|m| m.get("value")).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_condition_uses_api_field_names() {
        let json = r#"{
            "cloudcover": "75", "humidity": "82", "observation_time": "09:14 AM",
            "precipMM": "0.3", "pressure": "1012", "temp_C": "15", "temp_F": "59",
            "visibility": "10", "weatherCode": "296",
            "weatherDesc": [{"value": "Light rain"}],
            "weatherIconUrl": [{"value": "http://example.invalid/rain.png"}],
            "winddir16Point": "WSW", "winddirDegree": "250",
            "windspeedKmph": "19", "windspeedMiles": "12"
        }"#;

        let cc: CurrentCondition = serde_json::from_str(json).unwrap();

        assert_eq!(cc.precip_mm, "0.3");
        assert_eq!(cc.temp_c, "15");
        assert_eq!(cc.temp_f, "59");
        assert_eq!(cc.winddir_16_point, "WSW");
        assert_eq!(cc.windspeed_miles, "12");
        assert_eq!(cc.weather_code(), Some(296));
        assert_eq!(cc.description(), Some("Light rain"));
        assert_eq!(cc.icon_url(), Some("http://example.invalid/rain.png"));
        assert_eq!(cc.temp_c(), Some(15.0));
        assert_eq!(cc.condition(), Some(("Light rain", Category::Rain)));
    }

    #[test]
    fn past_day_fields_and_helpers() {
        let json = r#"{
            "date": "2012-11-05", "tempMaxC": "9", "tempMinC": "3",
            "weatherCode": "323", "winddirection": "N", "winddir16Point": "NNE"
        }"#;

        let day: PastWeatherDay = serde_json::from_str(json).unwrap();

        assert_eq!(day.temp_max_c, "9");
        assert_eq!(day.temp_min_c, "3");
        assert_eq!(day.winddirection, "N");
        assert_eq!(day.winddir_16_point, "NNE");
        assert_eq!(day.date(), NaiveDate::from_ymd_opt(2012, 11, 5));
        assert_eq!(day.condition(), Some(("Patchy light snow", Category::Snow)));
        assert!(day.weather_desc.is_empty());
        assert_eq!(day.description(), None);
    }

    #[test]
    fn numeric_helpers_do_not_coerce_garbage() {
        let cc = CurrentCondition {
            weather_code: "n/a".into(),
            temp_c: String::new(),
            ..Default::default()
        };

        assert_eq!(cc.weather_code(), None);
        assert_eq!(cc.temp_c(), None);
        assert_eq!(cc.condition(), None);
    }

    #[test]
    fn request_echo_type_field() {
        let echo: RequestEcho =
            serde_json::from_str(r#"{"query": "London, United Kingdom", "type": "City"}"#)
                .unwrap();

        assert_eq!(echo.query, "London, United Kingdom");
        assert_eq!(echo.kind, "City");
    }

    #[test]
    fn field_names_are_case_sensitive() {
        let cc: CurrentCondition = serde_json::from_str(r#"{"Temp_C": "15"}"#).unwrap();
        assert_eq!(cc.temp_c, "");
    }

    #[test]
    fn current_is_first_entry() {
        let report = WeatherReport {
            current_condition: vec![
                CurrentCondition { temp_c: "1".into(), ..Default::default() },
                CurrentCondition { temp_c: "2".into(), ..Default::default() },
            ],
            ..Default::default()
        };

        assert_eq!(report.current().map(|c| c.temp_c.as_str()), Some("1"));
        assert!(WeatherReport::default().current().is_none());
    }
}
