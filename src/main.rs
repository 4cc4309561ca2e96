#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use maze_explorer::simulation::{
    agent::{Explorer, StepOutcome},
    environment::Grid,
    generator::generate_maze,
    loader::load_maze,
    params::{
        DEFAULT_ITEM_COUNT, DEFAULT_MAZE_COLS, DEFAULT_MAZE_ROWS, DEFAULT_TICK_MS,
        HEADLESS_TICK_MS,
    },
};
use maze_explorer::ui::{draw_ui, hud_line, take_frame};

/// Depth-first maze explorer that collects every reachable item.
#[derive(Parser, Debug)]
#[command(name = "maze_explorer", version)]
#[command(
    about = "Explore a maze depth-first and collect every reachable item",
    long_about = "Reads a maze file ('rows cols' header, then rows of W . T M) or generates one, \
                  then walks it cell by cell until every reachable cell has been explored."
)]
struct Cli {
    /// Maze file to explore. A generated maze is used when omitted.
    maze: Option<PathBuf>,

    /// Generate a maze of the given size instead of reading a file.
    #[arg(long, value_name = "ROWSxCOLS", value_parser = parse_size, conflicts_with = "maze")]
    generate: Option<(usize, usize)>,

    /// Number of items placed in a generated maze.
    #[arg(long, default_value_t = DEFAULT_ITEM_COUNT)]
    items: usize,

    /// Seed for maze generation. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between steps in milliseconds.
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Print frames to stdout instead of running the terminal UI.
    #[arg(long)]
    headless: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "warn", env = "MAZE_LOG")]
    log_level: String,
}

fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (rows, cols) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got '{s}'"))?;
    let rows = rows
        .trim()
        .parse()
        .map_err(|e| format!("invalid row count '{rows}': {e}"))?;
    let cols = cols
        .trim()
        .parse()
        .map_err(|e| format!("invalid column count '{cols}': {e}"))?;
    Ok((rows, cols))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level; logs go to stderr so frames stay clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .init();

    let grid = build_grid(&cli)?;
    let mut explorer = Explorer::new(grid).context("maze cannot be explored")?;

    if cli.headless {
        let tick_rate = Duration::from_millis(cli.tick_ms.unwrap_or(HEADLESS_TICK_MS));
        run_headless(&mut explorer, tick_rate);
        return Ok(());
    }

    let tick_rate = Duration::from_millis(cli.tick_ms.unwrap_or(DEFAULT_TICK_MS));

    // Setup Terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut explorer, tick_rate);

    // Restore Terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    println!("You've collected {} items!", explorer.item_count());
    Ok(())
}

fn build_grid(cli: &Cli) -> anyhow::Result<Grid> {
    if let Some(path) = &cli.maze {
        return load_maze(path).with_context(|| format!("loading maze from {}", path.display()));
    }
    let (rows, cols) = cli.generate.unwrap_or((DEFAULT_MAZE_ROWS, DEFAULT_MAZE_COLS));
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(rows, cols, seed, "generating maze");
    generate_maze(rows, cols, cli.items, seed).context("generating maze")
}

fn run_headless(explorer: &mut Explorer, tick_rate: Duration) {
    loop {
        thread::sleep(tick_rate);
        for line in take_frame(explorer) {
            println!("{line}");
        }
        println!();
        if explorer.step() == StepOutcome::Finished {
            break;
        }
    }
    println!("You've collected {} items!", explorer.item_count());
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    explorer: &mut Explorer,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    let mut frame_lines = take_frame(explorer);
    loop {
        // 1. Update
        if last_tick.elapsed() >= tick_rate {
            if !explorer.is_done() {
                explorer.step();
                frame_lines = take_frame(explorer);
            }
            last_tick = Instant::now();
        }

        // 2. Render
        let hud = hud_line(explorer);
        terminal.draw(|f| draw_ui(f, frame_lines.clone(), &hud))?;

        // 3. Input
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.code == KeyCode::Char('q') {
                    return Ok(());
                }
            }
        }
    }
}
