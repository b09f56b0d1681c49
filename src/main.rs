// SliceTTY: Interactive String Slicing Explorer

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use slicetty::cli::Cli;
use slicetty::config::Config;
use slicetty::snapshot::SliceSnapshot;
use slicetty::ui::{render_plain, App};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_file.as_deref(), cli.print || cli.list_presets)?;

    let config_result = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    let config = match config_result {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            tracing::warn!("using default configuration: {}", e);
            Config::default()
        }
    };

    let presets = config.preset_library();

    if cli.list_presets {
        for preset in presets.iter() {
            println!(
                "{:<10} text{:<10} {:?}  {}",
                preset.key,
                preset.params.notation(preset.text.chars().count()),
                preset.text,
                preset.description
            );
        }
        return Ok(());
    }

    let (form, active_preset) = match cli.initial_form(&config, &presets) {
        Ok(initial) => initial,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Available examples: {}", presets.keys().join(", "));
            std::process::exit(1);
        }
    };

    if cli.print {
        print!("{}", render_plain(&SliceSnapshot::compute(&form)));
        return Ok(());
    }

    tracing::info!("starting TUI with text {:?}", form.text);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(form, presets, active_preset).with_tips(config.show_tips);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// Logs go to `log_file` when given, otherwise to stderr in non-interactive
/// modes. While the TUI owns the terminal without a log file nothing is logged.
fn init_tracing(log_file: Option<&Path>, non_interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    } else if non_interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    Ok(())
}
