use clap::Parser;
use restaurant_site::app::{run_session, start_site};
use restaurant_site::config::cli::{Command, OutputFormat, ReserveArgs, ThemeAction};
use restaurant_site::core::menu::{MenuControls, MenuRenderer};
use restaurant_site::core::reservation::ReservationOutcome;
use restaurant_site::core::theme::ThemeStore;
use restaurant_site::core::{DisplayRegion, ReservationForm};
use restaurant_site::utils::error::ErrorSeverity;
use restaurant_site::utils::{logger, validation::Validate};
use restaurant_site::{
    app::bootstrap::{apply_menu_selection, menu_controls},
    CliConfig, HtmlRegion, JsonFileMenu, LocalStorage, SiteConfig, SiteError, TextRegion,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🍽️ Starting restaurant-site");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.site_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: &CliConfig, config: &SiteConfig) -> Result<(), SiteError> {
    match &cli.command {
        Command::Menu {
            category,
            filters,
            format,
        } => {
            let renderer = MenuRenderer::load(&JsonFileMenu::new(&config.menu.data_path));
            let mut controls = menu_controls(config, renderer.items())?;
            apply_menu_selection(&renderer, &mut controls, category.as_deref(), filters)?;

            match format {
                OutputFormat::Text => {
                    let region = render_once(&renderer, &controls, TextRegion::new());
                    for line in region.lines() {
                        println!("{}", line);
                    }
                }
                OutputFormat::Html => {
                    let region = render_once(&renderer, &controls, HtmlRegion::new());
                    println!("{}", region.markup());
                }
            }
        }
        Command::Theme { action } => {
            let store = ThemeStore::new(LocalStorage::new(&config.theme.state_dir));
            let mut theme = store.initial_theme(config.theme.system_prefers_dark).await;
            if *action == ThemeAction::Toggle {
                theme = theme.toggled();
                store.save(theme).await?;
                tracing::info!("🌓 Theme switched to {}", theme);
            }
            println!("{} (toggle icon: {})", theme, theme.toggle_icon());
        }
        Command::Reserve(args) => reserve(config, args).await?,
        Command::Interactive => {
            let mut site = start_site(config, TextRegion::new()).await?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_session(&mut site, stdin, tokio::io::stdout(), config.autoplay_period()).await?;
        }
    }
    Ok(())
}

fn render_once<R: DisplayRegion>(renderer: &MenuRenderer, controls: &MenuControls, mut region: R) -> R {
    let count = renderer.render_into(controls, &mut region);
    tracing::debug!("Rendered {} menu items", count);
    region
}

async fn reserve(config: &SiteConfig, args: &ReserveArgs) -> Result<(), SiteError> {
    let mut site = start_site(config, TextRegion::new()).await?;
    site.set_draft(ReservationForm::from(args));

    match site.submit_reservation().await? {
        ReservationOutcome::Confirmed => {
            tracing::info!("✅ Reservation submitted");
            println!("✅ Reservation received. We look forward to seeing you!");
        }
        ReservationOutcome::Failed { alert } => {
            eprintln!("❌ {}", alert);
            std::process::exit(2);
        }
    }
    Ok(())
}
