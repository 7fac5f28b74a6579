//! Display surfaces the timeline can be written into.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::DisplayItem;

/// Id of the host element the HTML fragment belongs in.
pub const CONTAINER_ID: &str = "weather-timeline";

/// Message that replaces the whole timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The service answered but had no hourly data.
    NoData,
    /// The request or decoding failed.
    Offline,
}

impl Notice {
    pub const fn message(&self) -> &'static str {
        match self {
            Notice::NoData => "Dati meteo non disponibili.",
            Notice::Offline => "Meteo offline",
        }
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Notice::Offline)
    }
}

/// Container the renderer writes into.
pub trait Timeline {
    /// Remove all content.
    fn clear(&mut self);

    /// Add one hour after the existing ones.
    fn append(&mut self, item: &DisplayItem);

    /// Replace all content with a single message.
    fn show_notice(&mut self, notice: Notice);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
        }
    }

    pub const fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Html]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for OutputFormat {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            _ => Err(anyhow::anyhow!("Unknown output format '{value}'. Supported formats: text, html.")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Item(DisplayItem),
    Notice(Notice),
}

/// Plain-text timeline, one line per hour.
#[derive(Debug, Clone, Default)]
pub struct TextTimeline {
    entries: Vec<Entry>,
    color: bool,
}

impl TextTimeline {
    pub fn new(color: bool) -> Self {
        Self { entries: Vec::new(), color }
    }

    pub fn format_item(item: &DisplayItem) -> String {
        format!(
            "{}:00   {}   {}°C   💧 {}%",
            item.hour,
            item.icon.glyph(),
            item.temperature_c,
            item.precipitation_pct
        )
    }

    pub fn items(&self) -> impl Iterator<Item = &DisplayItem> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Item(item) => Some(item),
            Entry::Notice(_) => None,
        })
    }
}

impl Timeline for TextTimeline {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn append(&mut self, item: &DisplayItem) {
        self.entries.push(Entry::Item(*item));
    }

    fn show_notice(&mut self, notice: Notice) {
        self.entries = vec![Entry::Notice(notice)];
    }
}

impl fmt::Display for TextTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            match entry {
                Entry::Item(item) => f.write_str(&Self::format_item(item))?,
                Entry::Notice(notice) if notice.is_error() && self.color => {
                    write!(f, "\x1b[31m{}\x1b[0m", notice.message())?
                }
                Entry::Notice(notice) => f.write_str(notice.message())?,
            }
        }
        Ok(())
    }
}

/// HTML fragment for the `weather-timeline` element.
#[derive(Debug, Clone, Default)]
pub struct HtmlTimeline {
    children: Vec<String>,
}

impl HtmlTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner_html(&self) -> String {
        self.children.concat()
    }

    /// The fragment wrapped in its container element.
    pub fn document(&self) -> String {
        format!("<div id=\"{CONTAINER_ID}\">\n{}</div>\n", self.inner_html())
    }

    fn item_html(item: &DisplayItem) -> String {
        format!(
            concat!(
                "<div class=\"weather-item\">\n",
                "    <div class=\"weather-time\">{hour}:00</div>\n",
                "    <div class=\"weather-icon\">{icon}</div>\n",
                "    <div class=\"weather-temp\">{temp}°C</div>\n",
                "    <div class=\"weather-rain\">\n",
                "        <span class=\"material-symbols-outlined\" style=\"font-size:12px\">water_drop</span> {rain}%\n",
                "    </div>\n",
                "</div>\n",
            ),
            hour = item.hour,
            icon = item.icon.glyph(),
            temp = item.temperature_c,
            rain = item.precipitation_pct,
        )
    }
}

impl Timeline for HtmlTimeline {
    fn clear(&mut self) {
        self.children.clear();
    }

    fn append(&mut self, item: &DisplayItem) {
        self.children.push(Self::item_html(item));
    }

    fn show_notice(&mut self, notice: Notice) {
        let html = match notice {
            Notice::NoData => format!("<p>{}</p>\n", notice.message()),
            Notice::Offline => {
                format!("<p style=\"color:red; font-size: 0.8rem;\">{}</p>\n", notice.message())
            }
        };
        self.children = vec![html];
    }
}
