use crate::config::toml_config::SiteConfig;
use crate::core::ReservationForm;
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "restaurant-site")]
#[command(about = "Menu, theme and reservation behaviour of a restaurant website")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the menu data file
    #[arg(long, global = true)]
    pub menu_data: Option<String>,

    /// Override the directory holding the theme preference
    #[arg(long, global = true)]
    pub state_dir: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render the menu once for a category and filter set
    Menu {
        /// Active category tab; the first tab when omitted
        #[arg(long)]
        category: Option<String>,

        /// Checked filter chip, repeatable
        #[arg(long = "filter")]
        filters: Vec<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show or toggle the stored theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
    /// Submit a table reservation
    Reserve(ReserveArgs),
    /// Drive the page from stdin, one event per line
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Show,
    Toggle,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ReserveArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    /// HH:MM
    #[arg(long)]
    pub time: String,
    #[arg(long, default_value = "2")]
    pub guests: u32,
    #[arg(long, default_value = "")]
    pub requests: String,
    /// Override the configured reservation endpoint
    #[arg(long)]
    pub endpoint: Option<String>,
}

impl From<&ReserveArgs> for ReservationForm {
    fn from(args: &ReserveArgs) -> Self {
        ReservationForm {
            name: args.name.clone(),
            email: args.email.clone(),
            phone: args.phone.clone(),
            date: args.date.clone(),
            time: args.time.clone(),
            guests: args.guests,
            requests: args.requests.clone(),
        }
    }
}

impl CliConfig {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn site_config(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::from_file(path)?,
            None => SiteConfig::default(),
        };

        if let Some(path) = &self.menu_data {
            config.menu.data_path = path.clone();
        }
        if let Some(dir) = &self.state_dir {
            config.theme.state_dir = dir.clone();
        }
        if let Command::Reserve(ReserveArgs {
            endpoint: Some(url),
            ..
        }) = &self.command
        {
            config.reservation.endpoint = Some(url.clone());
        }

        Ok(config)
    }
}
