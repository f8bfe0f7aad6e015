use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs, io, sync::Mutex, time::Duration};
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use shopfinder::api::OverpassClient;
use shopfinder::config::{find_config_path, Config, LocationProvider};
use shopfinder::handlers;
use shopfinder::messages::Command;
use shopfinder::model::{Location, Model};
use shopfinder::services::api::{spawn_fetch_service, FetchRequest, FetchResponse};
use shopfinder::services::location::{
    spawn_locator, FixedLocator, IpLocator, LocationError, NoLocator,
};
use shopfinder::{ui, utils};

mod app;

/// Find shops near your current location
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Enable debug logging to <temp dir>/shopfinder-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, gg/G)
    #[arg(long)]
    vim: bool,

    /// Config file (default: <config dir>/shopfinder/config.yaml, then ./config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Initial search radius in meters
    #[arg(short, long)]
    radius: Option<u32>,

    /// Latitude to search around (use with --lon; skips geolocation)
    #[arg(long, requires = "lon")]
    lat: Option<f64>,

    /// Longitude to search around (use with --lat)
    #[arg(long, requires = "lat")]
    lon: Option<f64>,
}

pub struct App {
    pub model: Model,

    config: Config,
    fetch_tx: mpsc::UnboundedSender<FetchRequest>,
    fetch_rx: mpsc::UnboundedReceiver<FetchResponse>,
    location_rx: mpsc::UnboundedReceiver<Result<Location, LocationError>>,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        let timeout = config.request_timeout_secs.map(Duration::from_secs);

        let client = OverpassClient::new(config.overpass_url.clone(), &config.user_agent, timeout)?;
        let (fetch_tx, fetch_rx) = spawn_fetch_service(client);

        // Location is requested once, at mount
        let location_rx = match config.location.provider {
            LocationProvider::Fixed => {
                spawn_locator(FixedLocator::new(config.location.lat, config.location.lon))
            }
            LocationProvider::Ip => spawn_locator(IpLocator::new(
                config.location.ip_lookup_url.clone(),
                &config.user_agent,
                timeout,
            )?),
            LocationProvider::None => spawn_locator(NoLocator),
        };

        let mut model = Model::new(config.default_radius, config.vim_mode);
        model.ui.map_url_base = config.map_url_base.clone();
        model.ui.can_open_links = config.open_command.is_some();
        model.ui.can_copy_links = config.clipboard_command.is_some();

        Ok(Self {
            model,
            config,
            fetch_tx,
            fetch_rx,
            location_rx,
        })
    }

    /// Drain service channels without blocking
    fn process_background(&mut self) {
        while let Ok(result) = self.location_rx.try_recv() {
            let commands = handlers::handle_location_result(&mut self.model, result);
            self.execute(commands);
        }

        while let Ok(response) = self.fetch_rx.try_recv() {
            let commands = handlers::handle_fetch_response(&mut self.model, response);
            self.execute(commands);
        }
    }
}

/// Route tracing output to the debug log file; nothing is installed otherwise
/// so the alternate screen is never written to.
fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let path = utils::get_debug_log_path();
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shopfinder=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug)?;
    debug!("Debug mode enabled");

    let config_path = find_config_path(args.config.as_deref())?;
    if let Some(path) = &config_path {
        debug!("Loading config from: {:?}", path);
    }
    let mut config = Config::load(config_path.as_deref())?;

    // CLI flags win over the config file
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(radius) = args.radius {
        config.default_radius = radius;
    }
    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        config.location.provider = LocationProvider::Fixed;
        config.location.lat = Some(lat);
        config.location.lon = Some(lon);
    }

    info!(
        provider = ?config.location.provider,
        radius = config.default_radius,
        overpass = %config.overpass_url,
        "starting"
    );

    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore the terminal before surfacing any loop error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, &mut app.model);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        app.process_background();

        // Short poll keeps responses flowing in while idle
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                let commands: Vec<Command> = handlers::handle_key(&mut app.model, key);
                app.execute(commands);
            }
        }

        // Let spawned tasks make progress between frames
        tokio::task::yield_now().await;
    }

    Ok(())
}
