use serde::Serialize;

/// Glyph class for a WMO weather interpretation code (WW).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    Sun,
    Cloud,
    Fog,
    Rain,
    Snow,
    Storm,
    Unknown,
}

impl WeatherIcon {
    /// Ranges are checked in order; the first one containing `code` wins.
    ///
    /// 0 clear sky, 1-3 mainly clear to overcast, 45-48 fog, 51-67 drizzle and
    /// rain, 71-77 snow, 95 and above thunderstorm.
    pub const fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Sun,
            1..=3 => Self::Cloud,
            45..=48 => Self::Fog,
            51..=67 => Self::Rain,
            71..=77 => Self::Snow,
            95.. => Self::Storm,
            _ => Self::Unknown,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Cloud => "cloud",
            Self::Fog => "fog",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Storm => "storm",
            Self::Unknown => "unknown",
        }
    }

    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Sun => "☀️",
            Self::Cloud => "⛅",
            Self::Fog => "🌫️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Storm => "⛈️",
            Self::Unknown => "❓",
        }
    }
}

impl std::fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
