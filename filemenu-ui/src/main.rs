mod logging;
mod render;
mod settings;

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use filemenu_core::{
    Clock, EnglishRelativeTime, FileActionFilter, FileEntry, FixedClock, LockAwareMenuPresenter,
    SystemClock,
};
use render::{OutputFormat, render_menu};
use settings::{SettingsSnapshot, read_settings_snapshot};

#[derive(Debug, Parser)]
#[command(name = "filemenu")]
#[command(version, about = "Print the lock-aware action menu for a file snapshot", long_about = None)]
struct Cli {
    /// File snapshot as JSON; read from stdin when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Reference time in seconds since the epoch instead of the wall clock
    #[arg(long, allow_negative_numbers = true)]
    now: Option<i64>,

    /// Current user id, overrides FILEMENU_USER
    #[arg(short, long)]
    user: Option<String>,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    show_settings: bool,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let mut settings = read_settings_snapshot();
    if let Some(user) = &cli.user {
        settings.user_id = user.clone();
    }
    if cli.show_settings {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    let file = read_snapshot(cli.file.as_ref())?;
    let output = build_menu_output(&file, &settings, cli.now, cli.format)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn read_snapshot(path: Option<&PathBuf>) -> anyhow::Result<FileEntry> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read snapshot from stdin")?;
            raw
        }
    };
    serde_json::from_str(&raw).context("invalid file snapshot json")
}

fn build_menu_output(
    file: &FileEntry,
    settings: &SettingsSnapshot,
    now_secs: Option<i64>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let strings = settings.string_catalog()?;
    let formatter = EnglishRelativeTime::new(settings.relative_style);
    let fixed_clock = now_secs.map(|secs| FixedClock(secs.saturating_mul(1_000)));
    let clock: &dyn Clock = match &fixed_clock {
        Some(clock) => clock as &dyn Clock,
        None => &SystemClock,
    };
    let filter = FileActionFilter::new(settings.filter_context());
    let menu = LockAwareMenuPresenter::new(&strings, &formatter, clock)
        .with_group_dividers(settings.group_dividers)
        .build(file, &filter);
    tracing::info!(
        path = %file.remote_path,
        visible = menu.visible_entries().count(),
        "menu built"
    );
    render_menu(&menu, format)
}
