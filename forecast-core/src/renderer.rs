use tracing::{error, info};

use crate::{
    model::ForecastQuery,
    provider::ForecastProvider,
    render::{Notice, Timeline},
    timeline::daytime_items,
};

/// What a render attempt put in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Timeline written with this many hours.
    Rendered(usize),
    /// No hourly data; the "no data" notice is shown.
    NoData,
    /// Fetch failed; the offline notice is shown.
    Offline,
}

/// Fetches the Rome forecast and writes its daytime hours into a timeline.
#[derive(Debug)]
pub struct ForecastRenderer {
    provider: Box<dyn ForecastProvider>,
    query: ForecastQuery,
}

impl ForecastRenderer {
    pub fn new(provider: Box<dyn ForecastProvider>) -> Self {
        Self { provider, query: ForecastQuery::rome() }
    }

    /// Issue one request and replace the timeline's content with the result.
    ///
    /// Never fails: errors end up as a notice in the timeline and a line in
    /// the diagnostics log.
    pub async fn render_forecast(&self, timeline: &mut dyn Timeline) -> RenderOutcome {
        match self.provider.fetch_hourly(&self.query).await {
            Ok(Some(hourly)) if !hourly.is_empty() => {
                timeline.clear();

                let items = daytime_items(&hourly);
                for item in &items {
                    timeline.append(item);
                }

                info!(hours = items.len(), "Rendered weather timeline");
                RenderOutcome::Rendered(items.len())
            }
            Ok(_) => {
                timeline.show_notice(Notice::NoData);
                RenderOutcome::NoData
            }
            Err(err) => {
                error!(error = %err, "Weather fetch failed");
                timeline.show_notice(Notice::Offline);
                RenderOutcome::Offline
            }
        }
    }
}
