use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use forecast_core::{
    Config, ForecastRenderer, HtmlTimeline, OutputFormat, RenderOutcome, TextTimeline,
    config::DEFAULT_API_BASE_URL, provider_from_config,
};
use inquire::{Select, Text};
use std::io::IsTerminal;
use tracing::debug;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Hourly weather timeline for Rome")]
pub struct Cli {
    /// Log debug diagnostics to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the forecast and print today's daytime hours (the default).
    Show {
        /// Output format: "text" or "html". Defaults to the configured one.
        #[arg(long)]
        format: Option<String>,

        /// When to colour the offline notice in text output.
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },

    /// Interactively set the API endpoint, output format and timeout.
    Configure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Only when stdout is a terminal.
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let command = self.command.unwrap_or(Command::Show { format: None, color: ColorChoice::Auto });
        match command {
            Command::Show { format, color } => show(format.as_deref(), color).await,
            Command::Configure => configure(),
        }
    }
}

async fn show(format: Option<&str>, color: ColorChoice) -> anyhow::Result<()> {
    let config = Config::load_or_default();

    let format = match format {
        Some(f) => OutputFormat::try_from(f)?,
        None => config.format,
    };
    debug!(format = %format, base_url = %config.api_base_url, "Rendering forecast");

    let provider = provider_from_config(&config)?;
    let renderer = ForecastRenderer::new(provider);

    let outcome = match format {
        OutputFormat::Text => {
            let mut timeline = TextTimeline::new(color.enabled(std::io::stdout().is_terminal()));
            let outcome = renderer.render_forecast(&mut timeline).await;
            println!("{timeline}");
            outcome
        }
        OutputFormat::Html => {
            let mut timeline = HtmlTimeline::new();
            let outcome = renderer.render_forecast(&mut timeline).await;
            print!("{}", timeline.document());
            outcome
        }
    };

    if let RenderOutcome::Rendered(hours) = outcome {
        debug!(hours, "Timeline printed");
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load_or_default();

    config.api_base_url = Text::new("Forecast API base URL:")
        .with_default(&config.api_base_url)
        .with_help_message(&format!("Open-Meteo default: {DEFAULT_API_BASE_URL}"))
        .prompt()
        .context("Failed to read API base URL")?;

    let starting = OutputFormat::all().iter().position(|f| *f == config.format).unwrap_or(0);
    config.format = Select::new("Output format:", OutputFormat::all().to_vec())
        .with_starting_cursor(starting)
        .prompt()
        .context("Failed to read output format")?;

    let current_timeout = config.timeout_secs.map(|t| t.to_string()).unwrap_or_default();
    let timeout = Text::new("Request timeout in seconds (empty for none):")
        .with_default(&current_timeout)
        .prompt()
        .context("Failed to read timeout")?;
    config.timeout_secs = match timeout.trim() {
        "" => None,
        t => Some(t.parse().with_context(|| format!("Invalid timeout '{t}'"))?),
    };

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_show() {
        let cli = Cli::try_parse_from(["forecast"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn show_with_format() {
        let cli = Cli::try_parse_from(["forecast", "-v", "show", "--format", "html"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Command::Show { format, color }) => {
                assert_eq!(format.as_deref(), Some("html"));
                assert_eq!(color, ColorChoice::Auto);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn color_choice() {
        let cli = Cli::try_parse_from(["forecast", "show", "--color", "always"]).unwrap();
        match cli.command {
            Some(Command::Show { color, .. }) => assert_eq!(color, ColorChoice::Always),
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(ColorChoice::Always.enabled(false));
        assert!(!ColorChoice::Never.enabled(true));
        assert!(ColorChoice::Auto.enabled(true));
        assert!(!ColorChoice::Auto.enabled(false));
        assert!(Cli::try_parse_from(["forecast", "show", "--color", "red"]).is_err());
    }

    #[test]
    fn location_is_not_an_argument() {
        assert!(Cli::try_parse_from(["forecast", "show", "Milano"]).is_err());
    }

    #[test]
    fn clap_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
