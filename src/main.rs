//! Terminal block puzzle runner.
//!
//! Uses crossterm for input and the framebuffer renderer from `term`.
//! Diagnostics are queued while the alternate screen is up and printed to
//! stderr after the terminal is restored.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blocks::core::{GameSnapshot, GameState};
use tui_blocks::engine::{ControlOutcome, Controller};
use tui_blocks::input::{handle_key_event, should_quit};
use tui_blocks::term::{FrameBuffer, GameView, TerminalRenderer, ThemeConfig, Viewport};
use tui_blocks::types::TICK_MS;
use tui_blocks::{EventLog, GameConfig, GameEvent, HighScoreStore};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let mut notes: Vec<String> = Vec::new();

    let (store, err) = HighScoreStore::open(&config.highscore_path);
    if let Some(err) = err {
        notes.push(format!("[Store] {:#}; starting from 0", err));
    }

    let (themes, theme_idx) = load_themes(&config, &mut notes);

    let events = match &config.log_path {
        Some(path) => EventLog::open(path).unwrap_or_else(|err| {
            notes.push(format!("[Log] {:#}", err));
            EventLog::disabled()
        }),
        None => EventLog::disabled(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut app = App {
        game: GameState::new(config.seed, store.best()).with_settle_ms(config.settle_ms),
        controller: Controller::new(),
        store,
        events,
        themes,
        theme_idx,
        notes,
    };
    let result = app.run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    app.events.flush();
    for note in &app.notes {
        eprintln!("{}", note);
    }
    result
}

/// Built-in themes, with an optional file theme first. Returns the start index.
fn load_themes(config: &GameConfig, notes: &mut Vec<String>) -> (Vec<ThemeConfig>, usize) {
    let mut themes = ThemeConfig::builtins();
    let wanted = ThemeConfig::builtin(&config.theme);
    let mut idx = match themes.iter().position(|t| Some(t) == wanted.as_ref()) {
        Some(i) => i,
        None => {
            notes.push(format!("[Theme] unknown theme `{}`, using neon", config.theme));
            0
        }
    };

    if let Some(path) = &config.theme_path {
        match ThemeConfig::load(path) {
            Ok(theme) => {
                themes.insert(0, theme);
                idx = 0;
            }
            Err(err) => notes.push(format!("[Theme] {:#}", err)),
        }
    }
    (themes, idx)
}

struct App {
    game: GameState,
    controller: Controller,
    store: HighScoreStore,
    events: EventLog,
    themes: Vec<ThemeConfig>,
    theme_idx: usize,
    notes: Vec<String>,
}

impl App {
    fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let view = GameView::default();
        let mut snap = GameSnapshot::default();
        let mut fb = FrameBuffer::new(0, 0);

        let mut last_tick = Instant::now();
        let tick_duration = Duration::from_millis(TICK_MS as u64);
        let mut was_over = self.game.game_over();

        self.controller.sync(&self.game);

        loop {
            // Render.
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            self.game.snapshot_into(&mut snap);
            let preview = self.controller.preview(&self.game);
            view.render_into(
                &snap,
                preview.as_ref(),
                &self.themes[self.theme_idx],
                Viewport::new(w, h),
                &mut fb,
            );
            term.draw_swap(&mut fb)?;

            // Input with timeout until next tick.
            let timeout = tick_duration
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = handle_key_event(key) {
                            // Rejected actions need no reaction; the preview already shows why.
                            if let Ok(outcome) = self.controller.apply_action(&mut self.game, action) {
                                self.on_outcome(outcome);
                            }
                        }
                    }
                    Event::Resize(..) => term.invalidate(),
                    _ => {}
                }
            }

            // Tick.
            if last_tick.elapsed() >= tick_duration {
                last_tick = Instant::now();
                if let Some(commit) = self.game.tick(TICK_MS) {
                    self.events
                        .record(&GameEvent::clear_committed(self.game.episode_id(), commit));
                    self.controller.sync(&self.game);
                }
            }

            let over = self.game.game_over();
            if over && !was_over {
                self.events.record(&GameEvent::GameOver {
                    episode_id: self.game.episode_id(),
                    score: self.game.score(),
                    high_score: self.game.high_score(),
                    placements: self.game.placements(),
                });
                self.events.flush();
            }
            was_over = over;
        }
    }

    fn on_outcome(&mut self, outcome: ControlOutcome) {
        match outcome {
            ControlOutcome::Placed(ev) => {
                self.events
                    .record(&GameEvent::placement(self.game.episode_id(), &ev));
                if ev.new_high_score {
                    if let Err(err) = self.store.record(ev.high_score) {
                        self.notes.push(format!("[Store] {:#}", err));
                    }
                }
            }
            ControlOutcome::Restarted => {
                self.events.record(&GameEvent::Restart {
                    episode_id: self.game.episode_id(),
                    seed: self.game.seed(),
                });
            }
            ControlOutcome::ThemeRequested => {
                self.theme_idx = (self.theme_idx + 1) % self.themes.len();
            }
            ControlOutcome::Moved | ControlOutcome::Selected(_) | ControlOutcome::Unchanged => {}
        }
    }
}
