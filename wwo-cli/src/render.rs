use std::fmt::{self, Display};

use wwo_core::{Category, CurrentCondition, PastWeatherDay, WeatherReport};

/// Human-readable rendering of a whole report.
pub fn report(report: &WeatherReport) -> String {
    ReportView(report).to_string()
}

struct ReportView<'a>(&'a WeatherReport);

impl Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        for echo in &report.request {
            writeln!(f, "{} ({})", echo.query, echo.kind)?;
        }

        match report.current() {
            Some(cc) => write_current(f, cc)?,
            None => writeln!(f, "No current conditions reported.")?,
        }

        if !report.weather.is_empty() {
            writeln!(f)?;
            for day in &report.weather {
                write_day(f, day)?;
            }
        }

        Ok(())
    }
}

fn write_current(f: &mut fmt::Formatter<'_>, cc: &CurrentCondition) -> fmt::Result {
    writeln!(f, "Observed {}", cc.observation_time)?;
    writeln!(f, "  {}", condition_label(cc.condition(), cc.description()))?;
    writeln!(f, "  Temperature  {}°C / {}°F", cc.temp_c, cc.temp_f)?;
    writeln!(f, "  Humidity     {}%", cc.humidity)?;
    writeln!(f, "  Cloud cover  {}%", cc.cloudcover)?;
    writeln!(f, "  Precip.      {} mm", cc.precip_mm)?;
    writeln!(f, "  Pressure     {} mb", cc.pressure)?;
    writeln!(f, "  Visibility   {} km", cc.visibility)?;
    writeln!(
        f,
        "  Wind         {} km/h ({} mph) from {} ({}°)",
        cc.windspeed_kmph, cc.windspeed_miles, cc.winddir_16_point, cc.winddir_degree
    )
}

fn write_day(f: &mut fmt::Formatter<'_>, day: &PastWeatherDay) -> fmt::Result {
    let date = match day.date() {
        Some(date) => date.format("%a %d %b %Y").to_string(),
        None => day.date.clone(),
    };

    writeln!(
        f,
        "{date}  {}..{}°C  {} mm  wind {} km/h {}  {}",
        day.temp_min_c,
        day.temp_max_c,
        day.precip_mm,
        day.windspeed_kmph,
        day.winddir_16_point,
        condition_label(day.condition(), day.description()),
    )
}

fn condition_label(
    condition: Option<(&'static str, Category)>,
    api_description: Option<&str>,
) -> String {
    match (condition, api_description) {
        (Some((description, category)), _) => format!("{description} [{category}]"),
        (None, Some(description)) => description.to_owned(),
        (None, None) => "Unknown".to_owned(),
    }
}
