//! Terminal anagram riddle quiz.
//!
//! Presents one riddle at a time, checks the chosen option and animates
//! the question's letters rearranging into the answer.

mod anim;
mod app;
mod fx;
mod ui;

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, queue,
    style::ResetColor,
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use rand::{rngs::StdRng, SeedableRng};
use riddle_core::{QuizSession, Riddle};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;

const BUILTIN_DECK: &str = include_str!("../assets/riddles.md");

#[derive(Debug, Parser)]
#[command(
    name = "riddle-diary",
    about = "An anagram riddle quiz for the terminal"
)]
struct Args {
    /// Riddle deck to load (.md/.txt deck or .json array); built-in deck when omitted
    #[arg(long)]
    riddles: Option<PathBuf>,

    /// Seed for option shuffling; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Target frames per second
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Disable the fog background
    #[arg(long)]
    no_effects: bool,

    /// Write tracing output to this file (stdout belongs to the quiz)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let riddles = load_deck(args.riddles.as_deref())?;
    info!(count = riddles.len(), "deck loaded");
    let session = QuizSession::new(riddles).context("deck has no riddles")?;

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (width, height) = terminal::size()?;
    let mut app = App::new(session, rng, !args.no_effects, width, height);

    let mut out = io::stdout();
    execute!(out, EnterAlternateScreen, cursor::Hide, DisableLineWrap)?;
    terminal::enable_raw_mode()?;

    let result = run(&mut out, &mut app, args.fps.max(1));

    execute!(
        out,
        ResetColor,
        Clear(ClearType::All),
        cursor::Show,
        EnableLineWrap,
        LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;

    let stats = app.stats();
    println!(
        "solved {} of {} riddles ({} guessed, {} revealed, {} wrong guesses)",
        stats.guessed + stats.revealed,
        stats.total,
        stats.guessed,
        stats.revealed,
        stats.wrong_attempts
    );
    result
}

fn run(out: &mut impl Write, app: &mut App, fps: u32) -> anyhow::Result<()> {
    let frame = Duration::from_nanos(1_000_000_000u64 / fps as u64);
    let mut last = Instant::now();

    loop {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
                Event::Resize(w, h) => app.resize(w, h),
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = (now - last).as_secs_f32().min(0.1);
        last = now;
        app.update(dt);
        if app.should_quit() {
            info!("quit");
            return Ok(());
        }

        execute!(out, BeginSynchronizedUpdate)?;
        queue!(out, Clear(ClearType::All))?;
        if app.effects {
            app.fog.draw(out)?;
        }
        ui::draw(out, app)?;
        queue!(out, ResetColor)?;
        out.flush()?;
        execute!(out, EndSynchronizedUpdate)?;

        let elapsed = last.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
    }
}

fn load_deck(path: Option<&Path>) -> anyhow::Result<Vec<Riddle>> {
    let Some(path) = path else {
        return riddle_core::parse(BUILTIN_DECK).context("parsing built-in deck");
    };

    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let riddles: Vec<Riddle> = if is_json {
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))?
    } else {
        riddle_core::parse(&content).with_context(|| format!("parsing {}", path.display()))?
    };

    // A JSON deck skips the deck parser's checks; enforce the same shape.
    for riddle in &riddles {
        if riddle.options.len() < 2 || !riddle.options.contains(&riddle.answer) {
            bail!(
                "riddle {} must list its answer among at least two options",
                riddle.id
            );
        }
    }
    if riddles.is_empty() {
        bail!("{} contains no riddles", path.display());
    }
    Ok(riddles)
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_deck_parses_and_is_well_formed() {
        let riddles = load_deck(None).unwrap();
        assert_eq!(riddles.len(), 11);
        let ids: Vec<String> = riddles.iter().map(|r| r.id.clone()).collect();
        let expected: Vec<String> = (1..=11).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
        for riddle in &riddles {
            assert!(riddle.options.contains(&riddle.answer), "{}", riddle.id);
            assert!(riddle.options.len() >= 2, "{}", riddle.id);
        }
    }

    #[test]
    fn builtin_riddles_are_case_insensitive_anagrams_up_to_spaces() {
        for riddle in load_deck(None).unwrap() {
            let mut question: Vec<char> = riddle
                .question
                .to_lowercase()
                .chars()
                .filter(|c| *c != ' ')
                .collect();
            let mut answer: Vec<char> = riddle
                .answer
                .to_lowercase()
                .chars()
                .filter(|c| *c != ' ')
                .collect();
            question.sort_unstable();
            answer.sort_unstable();
            assert_eq!(question, answer, "riddle {}", riddle.id);
        }
    }
}
