//! mc-tui: Maid Connect terminal front-end.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mc_01_lifecycle::AppStore;
use mc_02_backend::{
    AccountService, BackendConfig, InMemoryBackend, ManagedBackendClient, ProfileRecord, Skillset,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

use mc_tui::domain::RedrawGate;
use mc_tui::{ui, App, AppError, Route};

/// Maid Connect: job board for domestic-help workers
#[derive(Parser, Debug)]
#[command(name = "mc-tui")]
#[command(about = "Terminal front-end for Maid Connect")]
struct Args {
    /// Run against an in-memory backend with a demo account
    /// (demo@maidconnect.test / demo1234)
    #[arg(long)]
    demo: bool,

    /// Write logs here (the terminal is owned by the UI)
    #[arg(long, default_value = "mc-tui.log")]
    log_file: PathBuf,

    /// Initial route, e.g. /auth or /dashboard
    #[arg(long, default_value = "/")]
    route: String,
}

const DEMO_EMAIL: &str = "demo@maidconnect.test";
const DEMO_PASSWORD: &str = "demo1234";

fn init_tracing(path: &PathBuf) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;
    Ok(())
}

fn account_service(demo: bool) -> Result<AccountService, AppError> {
    let config = BackendConfig::from_env();
    if demo {
        let backend = InMemoryBackend::new().with_account(DEMO_EMAIL, DEMO_PASSWORD, |id| {
            Some(ProfileRecord {
                user_id: id.to_string(),
                full_name: Some("Demo Worker".to_string()),
                username: Some(DEMO_EMAIL.to_string()),
                skillset: Some(Skillset::default()),
                experience_years: Some(0),
                ..Default::default()
            })
        });
        info!("Using in-memory backend");
        return Ok(AccountService::from_backend(
            Arc::new(backend),
            config.id_proof_bucket,
        ));
    }

    config.validate()?;
    let bucket = config.id_proof_bucket.clone();
    let client = ManagedBackendClient::new(config)?;
    info!("Using managed backend");
    Ok(AccountService::from_backend(Arc::new(client), bucket))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_file)?;
    info!(version = mc_tui::VERSION, demo = args.demo, route = %args.route, "Starting");

    // Fail before touching the terminal.
    let service = account_service(args.demo)?;
    let mut app = App::new(AppStore::new(), Route::parse(&args.route));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, &mut app, &service).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("event loop failed")?;
    info!("Exiting");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    service: &AccountService,
) -> Result<(), AppError> {
    let mut redraw = RedrawGate::new(app.store.subscribe());
    loop {
        if redraw.should_draw() {
            terminal.draw(|frame| ui::render(frame, &*app))?;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Only handle key press events (not release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    redraw.mark_dirty();
                    if let Some(command) = app.handle_key(key) {
                        // Show the busy state while the backend call runs.
                        terminal.draw(|frame| ui::render(frame, &*app))?;
                        app.execute(service, command).await;
                    }
                }
                Event::Resize(..) => redraw.mark_dirty(),
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
