use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use weather_core::{Config, SystemClock, WeatherApiFetcher, Widget, WidgetView};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Current weather for a city")]
pub struct Cli {
    /// WeatherAPI.com key for this run; beats WEATHER_API_KEY and the config file.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store a WeatherAPI.com key in the config file.
    Configure,

    /// Show the weather for one location and exit.
    Show {
        /// City or location name.
        location: String,
    },

    /// Keep asking for locations until Esc or Ctrl-C.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        if let Some(key) = self.api_key {
            config.set_session_api_key(key);
        }

        match self.command {
            Command::Configure => configure(config),
            Command::Show { location } => {
                let widget = Widget::new(WeatherApiFetcher::new(config));
                widget.set_query(location);
                widget.submit_query().await;

                let view = widget.view(&SystemClock);
                if let Some(error) = view.error_line {
                    bail!(error);
                }
                print!("{}", render(&view));
                Ok(())
            }
            Command::Interactive => interactive(config).await,
        }
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let key = Password::new("WeatherAPI.com key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(key);
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn interactive(config: Config) -> anyhow::Result<()> {
    let widget = Widget::new(WeatherApiFetcher::new(config));

    loop {
        let input = Text::new("Location:")
            .with_placeholder("Enter a City Name")
            .with_initial_value(&widget.query())
            .prompt();

        match input {
            Ok(text) => {
                widget.set_query(text);
                if !widget.query().trim().is_empty() {
                    println!("Loading...");
                }
                widget.submit_query().await;
                print!("{}", render(&widget.view(&SystemClock)));
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read location"),
        }
    }

    Ok(())
}

/// Error line if there is one, otherwise the three result lines.
fn render(view: &WidgetView) -> String {
    if let Some(error) = &view.error_line {
        return format!("{error}\n");
    }

    match &view.result_lines {
        Some(lines) => format!(
            "Temperature: {}\nCondition:   {}\nLocation:    {}\n",
            lines.temperature, lines.condition, lines.location
        ),
        None => String::new(),
    }
}
