//! Static lookup from World Weather Online condition codes to a human
//! description and a coarse category.
//!
//! Both tables are built once on first access and are read-only afterwards.

use std::{collections::HashMap, fmt, sync::LazyLock};

/// Coarse bucket a condition code falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Rain,
    Snow,
    Clear,
    Covered,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Rain => "rain",
            Category::Snow => "snow",
            Category::Clear => "clear",
            Category::Covered => "covered",
        }
    }

    pub const fn all() -> &'static [Category] {
        &[Category::Rain, Category::Snow, Category::Clear, Category::Covered]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

pub const UNKNOWN_DESCRIPTION: &str = "Unknown";
pub const FALLBACK_CATEGORY: Category = Category::Clear;

const DESCRIPTIONS: &[(i32, &str)] = &[
    (395, "Moderate or heavy snow in area with thunder"),
    (392, "Patchy light snow in area with thunder"),
    (389, "Moderate or heavy rain in area with thunder"),
    (386, "Patchy light rain in area with thunder"),
    (377, "Moderate or heavy showers of ice pellets"),
    (374, "Light showers of ice pellets"),
    (371, "Moderate or heavy snow showers"),
    (368, "Light snow showers"),
    (365, "Moderate or heavy sleet showers"),
    (362, "Light sleet showers"),
    (359, "Torrential rain shower"),
    (356, "Moderate or heavy rain shower"),
    (353, "Light rain shower"),
    (350, "Ice pellets"),
    (338, "Heavy snow"),
    (335, "Patchy heavy snow"),
    (332, "Moderate snow"),
    (329, "Patchy moderate snow"),
    (326, "Light snow"),
    (323, "Patchy light snow"),
    (320, "Moderate or heavy sleet"),
    (317, "Light sleet"),
    (314, "Moderate or Heavy freezing rain"),
    (311, "Light freezing rain"),
    (308, "Heavy rain"),
    (305, "Heavy rain at times"),
    (302, "Moderate rain"),
    (299, "Moderate rain at times"),
    (296, "Light rain"),
    (293, "Patchy light rain"),
    (284, "Heavy freezing drizzle"),
    (281, "Freezing drizzle"),
    (266, "Light drizzle"),
    (263, "Patchy light drizzle"),
    (260, "Freezing fog"),
    (248, "Fog"),
    (230, "Blizzard"),
    (227, "Blowing snow"),
    (200, "Thundery outbreaks in nearby"),
    (185, "Patchy freezing drizzle nearby"),
    (182, "Patchy sleet nearby"),
    (179, "Patchy snow nearby"),
    (176, "Patchy rain nearby"),
    (143, "Mist"),
    (122, "Overcast"),
    (119, "Cloudy"),
    (116, "Partly Cloudy"),
    (113, "Clear/Sunny"),
];

const CATEGORIES: &[(i32, Category)] = &[
    (395, Category::Snow),
    (392, Category::Snow),
    (389, Category::Rain),
    (386, Category::Rain),
    (377, Category::Snow),
    (374, Category::Snow),
    (371, Category::Snow),
    (368, Category::Snow),
    (365, Category::Rain),
    (362, Category::Rain),
    (359, Category::Rain),
    (356, Category::Rain),
    (353, Category::Rain),
    (350, Category::Snow),
    (338, Category::Snow),
    (335, Category::Snow),
    (332, Category::Snow),
    (329, Category::Snow),
    (326, Category::Snow),
    (323, Category::Snow),
    (320, Category::Rain),
    (317, Category::Rain),
    (314, Category::Rain),
    (311, Category::Rain),
    (308, Category::Rain),
    (305, Category::Rain),
    (302, Category::Rain),
    (299, Category::Rain),
    (296, Category::Rain),
    (293, Category::Rain),
    (284, Category::Rain),
    (281, Category::Rain),
    (266, Category::Rain),
    (263, Category::Rain),
    (260, Category::Covered),
    (248, Category::Covered),
    (230, Category::Snow),
    (227, Category::Snow),
    (200, Category::Rain),
    (185, Category::Rain),
    (182, Category::Rain),
    (179, Category::Snow),
    (176, Category::Rain),
    (143, Category::Covered),
    (122, Category::Covered),
    (119, Category::Covered),
    (116, Category::Covered),
    (113, Category::Clear),
];

/// Condition code → description.
pub static WEATHER_TYPES: LazyLock<HashMap<i32, &'static str>> =
    LazyLock::new(|| DESCRIPTIONS.iter().copied().collect());

/// Condition code → category.
pub static WEATHER_CATEGORIES: LazyLock<HashMap<i32, Category>> =
    LazyLock::new(|| CATEGORIES.iter().copied().collect());

/// Look up the description and category of a condition code.
///
/// Unknown codes describe as `"Unknown"` but categorize as [`Category::Clear`].
pub fn describe(code: i32) -> (&'static str, Category) {
    let description = WEATHER_TYPES.get(&code).copied().unwrap_or(UNKNOWN_DESCRIPTION);
    let category = WEATHER_CATEGORIES.get(&code).copied().unwrap_or(FALLBACK_CATEGORY);

    (description, category)
}

/// Every known code with its description and category, ascending by code.
pub fn all() -> impl Iterator<Item = (i32, &'static str, Category)> {
    let mut codes: Vec<i32> = WEATHER_TYPES.keys().copied().collect();
    codes.sort_unstable();

    codes.into_iter().map(|code| {
        let (description, category) = describe(code);
        (code, description, category)
    })
}
