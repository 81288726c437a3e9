//! festejo - Bilingual Graduation Weekend Guide
//!
//! # Usage
//!
//! ```bash
//! # Run the guide
//! festejo
//!
//! # With verbose logging (written to stderr)
//! RUST_LOG=debug festejo
//! ```
//!
//! # Keys
//!
//! - `1`-`4`, `←`/`→`, `Tab`: switch pages
//! - `l`: toggle language (English / Español)
//! - `↑`/`↓`, `PgUp`/`PgDn`: scroll
//! - `q`, `Esc`: quit
//!
//! # Files
//!
//! - State: `$XDG_CONFIG_HOME/festejo/state.toml`
//! - Intro marker: `$XDG_RUNTIME_DIR/festejo/intro-shown`

use std::io::{self, stdout, Stdout};

use anyhow::Result;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use festejo_tui::App;

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let mut terminal = init()?;
    let result = App::new().run(&mut terminal).await;
    restore()?;
    result
}

/// Stderr logging, quiet unless RUST_LOG says otherwise
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn init() -> io::Result<Tui> {
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

fn restore() -> io::Result<()> {
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}
