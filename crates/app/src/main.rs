use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, ProgressService, TopicCatalog};
use storage::repository::Storage;
use trail_core::model::UserId;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidUser { raw: String },
    InvalidFixturesPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidUser { raw } => write!(f, "invalid --user value: {raw}"),
            ArgsError::InvalidFixturesPath { raw } => {
                write!(f, "invalid --fixtures value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    user_id: UserId,
    catalog: Arc<TopicCatalog>,
    progress: Arc<ProgressService>,
}

impl UiApp for DesktopApp {
    fn current_user_id(&self) -> UserId {
        self.user_id.clone()
    }

    fn catalog(&self) -> Arc<TopicCatalog> {
        Arc::clone(&self.catalog)
    }

    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

struct Args {
    db_url: String,
    fixtures_path: PathBuf,
    user_id: UserId,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--fixtures <path>] [--user <id>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:trail.sqlite3");
    eprintln!("  --fixtures fixtures/fixed-income.json");
    eprintln!("  --user local");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRAIL_DB_URL, TRAIL_FIXTURES, TRAIL_USER");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("TRAIL_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://trail.sqlite3".into(), normalize_sqlite_url);
        let mut fixtures_path = std::env::var("TRAIL_FIXTURES")
            .ok()
            .map_or_else(|| PathBuf::from("fixtures/fixed-income.json"), PathBuf::from);
        let mut user_id = std::env::var("TRAIL_USER")
            .ok()
            .and_then(|value| UserId::new(value).ok())
            .unwrap_or_else(|| UserId::new("local").expect("default user id"));

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--fixtures" => {
                    let value = require_value(args, "--fixtures")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidFixturesPath { raw: value });
                    }
                    fixtures_path = PathBuf::from(value);
                }
                "--user" => {
                    let value = require_value(args, "--user")?;
                    user_id = UserId::new(value.clone())
                        .map_err(|_| ArgsError::InvalidUser { raw: value })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            fixtures_path,
            user_id,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<TopicCatalog, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("cannot read fixtures file {}: {e}", path.display()),
        )
    })?;
    let catalog = TopicCatalog::from_json_str(&json)?;
    Ok(catalog)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;

    let catalog = Arc::new(load_catalog(&parsed.fixtures_path)?);
    tracing::info!(topics = catalog.len(), user = %parsed.user_id, "catalog loaded");

    let clock = Clock::default_clock();
    let progress = Arc::new(ProgressService::new(
        clock,
        Arc::clone(&storage.user_topics),
    ));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        user_id: parsed.user_id,
        catalog,
        progress,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Trail")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
