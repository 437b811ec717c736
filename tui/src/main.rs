//! Chat Bubbles Entry Point
//!
//! Usage:
//!   chat-bubbles [OPTIONS]
//!
//! Options:
//!   --theme <light|dark>   Starting palette
//!   --animation-ms <MS>    Expand/collapse animation length
//!   --preview              Print light/dark previews as text and exit
//!   --width <CELLS>        Preview width
//!
//! CLI options override `CHAT_BUBBLES_*` environment variables.

use std::io::{self, IsTerminal};
use std::panic;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chat_bubbles::preview::{preview_text, PREVIEW_WIDTH};
use chat_bubbles::sample_data::conversation_sample;
use chat_bubbles::{App, AppConfig, ThemeMode};

/// Chat Bubbles - expandable message bubbles in the terminal
#[derive(Parser, Debug)]
#[command(name = "chat-bubbles")]
#[command(about = "A scrollable chat list with expandable message bubbles")]
struct Args {
    /// Starting palette (light or dark)
    #[arg(long)]
    theme: Option<ThemeMode>,

    /// Expand/collapse animation length in milliseconds
    #[arg(long)]
    animation_ms: Option<u64>,

    /// Print the light and dark previews as plain text and exit
    #[arg(long, default_value_t = false)]
    preview: bool,

    /// Preview width in cells
    #[arg(long, default_value_t = PREVIEW_WIDTH)]
    width: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never land on the alternate screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = AppConfig::from_env().with_overrides(args.theme, args.animation_ms);

    if args.preview {
        print!("{}", preview_text(args.width));
        return Ok(());
    }

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: chat-bubbles requires a terminal (TTY)");
        eprintln!();
        eprintln!("Use --preview to print the previews without one.");
        std::process::exit(1);
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    tracing::info!(
        theme = %config.theme,
        animation_ms = config.animation.as_millis() as u64,
        "Starting"
    );

    let mut app = App::new(&config, conversation_sample().to_vec());
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    // Propagate any errors
    result
}
