//! Terminal front-end for the unscramble game.
//!
//! Renders the latest snapshot and turns each input line into intents.
//! Type a guess and press Enter to check it, `:skip` to skip, `:quit` to
//! leave. Logging goes to stderr and follows `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use tracing::info;

use unscramble::{Engine, GameConfig, Snapshot, MAX_ROUNDS};

/// Unscramble the word before the rounds run out.
#[derive(Parser)]
#[command(name = "unscramble")]
#[command(about = "A word-unscrambling game", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Words per session
    #[arg(long, default_value_t = MAX_ROUNDS)]
    rounds: u32,
}

enum Command<'a> {
    Guess(&'a str),
    Skip,
    Quit,
}

fn parse(line: &str) -> Command<'_> {
    match line.trim() {
        ":skip" | ":s" => Command::Skip,
        ":quit" | ":q" => Command::Quit,
        guess => Command::Guess(guess),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Turn one input line into intents.
///
/// Once the session is over the line answers the play-again prompt:
/// `y` replays, anything else exits.
fn handle_line(engine: &mut Engine, line: &str) -> Flow {
    if engine.snapshot().is_session_over {
        if line.trim().eq_ignore_ascii_case("y") {
            engine.replay();
            return Flow::Continue;
        }
        return Flow::Exit;
    }

    match parse(line) {
        Command::Quit => return Flow::Exit,
        Command::Skip => {
            engine.skip();
        }
        Command::Guess(guess) => {
            engine.update_guess(guess);
            engine.check();
        }
    }
    Flow::Continue
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::new().with_max_rounds(cli.rounds);
    config.seed = cli.seed;

    let mut engine = Engine::new(config, Default::default())?;
    let total = engine.config().total_score();
    let mut snapshots = engine.subscribe();
    info!(seed = engine.seed(), "starting terminal session");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        let snap: Arc<Snapshot> = Arc::clone(&snapshots.borrow_and_update());
        render(&mut stdout, &snap, total)?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        if handle_line(&mut engine, &line) == Flow::Exit {
            break;
        }
    }

    println!("Bye!");
    Ok(())
}

fn render(out: &mut impl Write, snap: &Snapshot, total: u32) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    writeln!(out, "{}", "Unscramble".bold())?;
    writeln!(out, "---------------------------------------------")?;
    writeln!(
        out,
        "Word {}/{}    Score {}",
        snap.round_number, snap.max_rounds, snap.score
    )?;
    writeln!(out)?;
    writeln!(out, "    {}", snap.scrambled_word.as_str().bold().cyan())?;
    writeln!(out, "    {}", snap.definition.as_str().italic())?;
    writeln!(out)?;

    if snap.is_session_over {
        writeln!(out, "{}", "Congratulations!".bold().green())?;
        writeln!(out, "You scored {}/{}", snap.score, total)?;
        write!(out, "Play again? [y/N] ")?;
    } else {
        if snap.guess_is_invalid {
            writeln!(out, "{}", "Wrong guess! Try again.".red())?;
        }
        writeln!(out, "Type your answer, :skip to skip, :quit to leave.")?;
        write!(out, "> ")?;
    }

    out.flush()
}
