//! Terminal game runner.
//!
//! One thread: measure the frame time, advance the game, draw, then wait for
//! input until the next frame is due.

use std::fs::File;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::{info, LevelFilter};

use term_tetris::audio::MusicPlayer;
use term_tetris::clock::FrameClock;
use term_tetris::config::Config;
use term_tetris::core::{GameEvent, GameState};
use term_tetris::input::{
    handle_key_event, handle_key_release, should_quit, volume_delta, SoftDropLatch,
};
use term_tetris::term::{
    AudioStatusView, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport,
};
use term_tetris::types::{GameAction, GameStatus};

/// Keep-alive redraw interval while paused or over.
const STATIC_REDRAW_MS: u64 = 500;

fn main() -> Result<()> {
    let config = Config::from_args();
    init_logging(&config)?;
    info!("starting with seed {}", config.seed);

    let mut music = open_music(&config);

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &config, &mut music));

    // Always try to restore terminal state.
    let restored = term.exit();
    result.and(restored)
}

fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

#[cfg(feature = "music")]
fn open_music(config: &Config) -> MusicPlayer {
    use term_tetris::audio::RodioBackend;

    let Some(path) = &config.music else {
        return MusicPlayer::silent(config.volume);
    };
    match RodioBackend::open(path) {
        Ok(backend) => MusicPlayer::new(Box::new(backend), config.volume),
        Err(e) => {
            log::warn!("music disabled: {:#}", e);
            MusicPlayer::silent(config.volume)
        }
    }
}

#[cfg(not(feature = "music"))]
fn open_music(config: &Config) -> MusicPlayer {
    if config.music.is_some() {
        info!("built without the `music` feature; playing silently");
    }
    MusicPlayer::silent(config.volume)
}

fn run(term: &mut TerminalRenderer, config: &Config, music: &mut MusicPlayer) -> Result<()> {
    let mut game = GameState::new(config.seed);
    let mut latch = SoftDropLatch::new().with_release_events(term.key_release_events());

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let started = Instant::now();
    let mut clock = FrameClock::new(started);

    loop {
        let elapsed_ms = clock.tick(Instant::now());

        if let Some(action) = latch.update(elapsed_ms) {
            game.apply_action(action);
        }
        game.update(elapsed_ms);
        for event in game.drain_events() {
            match event {
                GameEvent::Reset => latch.clear(),
                GameEvent::Locked { .. } | GameEvent::LevelUp { .. } | GameEvent::GameOver => {}
            }
        }

        let snap = game.snapshot();
        let is_static = snap.status != GameStatus::Running;
        let audio = AudioStatusView {
            volume: music.volume(),
            started: music.started(),
        };
        let fingerprint = snap.fingerprint() ^ u64::from(audio.volume.to_bits());
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint, is_static) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into_with_audio(&snap, Some(&audio), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        let timeout = clock.until_next(config.frame, Instant::now());
        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if handle_key(key, &mut game, &mut latch, music) == Flow::Quit {
                    info!("quit with score {}", game.score());
                    return Ok(());
                }
            }
            Event::Resize(..) => {
                term.invalidate();
                throttle.reset();
            }
            _ => {}
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn handle_key(
    key: KeyEvent,
    game: &mut GameState,
    latch: &mut SoftDropLatch,
    music: &mut MusicPlayer,
) -> Flow {
    if key.kind == KeyEventKind::Release {
        if handle_key_release(key).is_some() {
            if let Some(action) = latch.release() {
                game.apply_action(action);
            }
        }
        return Flow::Continue;
    }

    if should_quit(key) {
        return Flow::Quit;
    }
    if key.kind == KeyEventKind::Press {
        music.on_key_press();
    }
    if let Some(delta) = volume_delta(key) {
        music.adjust_volume(delta);
        return Flow::Continue;
    }

    match handle_key_event(key) {
        Some(GameAction::SoftDropStart) => {
            if let Some(action) = latch.press() {
                game.apply_action(action);
            }
        }
        // Auto-repeat only matters for held keys like soft drop and moves.
        Some(GameAction::Pause | GameAction::Restart | GameAction::HardDrop)
            if key.kind == KeyEventKind::Repeat => {}
        Some(action) => {
            game.apply_action(action);
        }
        None => {}
    }
    Flow::Continue
}
