use crate::persistence::{default_scores_path, load_scores, save_scores};
use crate::view::format_ms;
use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use trichroma_core::{Event, EventBus, Leaderboard, Level, ScoreRecord, Session};
use trichroma_data::load_banks;

pub const DEFAULT_RUN_SEED: u64 = 0xC0DE;
const MAX_EVENT_LOG: usize = 200;

pub struct App {
    pub session: Session,
    pub events: EventBus,
    pub leaderboard: Leaderboard,
    pub scores_path: Option<PathBuf>,
    pub level_choice: Level,
    pub cursor: usize,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn bootstrap(assets: &Path, seed: u64) -> Result<Self> {
        let banks = load_banks(&assets.join("puzzles.json")).context("load puzzle banks")?;
        let scores_path = default_scores_path();
        let stored = scores_path
            .as_deref()
            .map(load_scores)
            .unwrap_or_default();
        let mut app = Self {
            session: Session::new(banks, seed),
            events: EventBus::default(),
            leaderboard: Leaderboard::from_records(stored),
            scores_path,
            level_choice: Level::ALL[0],
            cursor: 0,
            event_log: VecDeque::new(),
            status_line: String::new(),
            show_help: false,
            should_quit: false,
        };
        app.new_puzzle();
        app.status_line.clear();
        Ok(app)
    }

    pub fn now_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }

    pub fn card_count(&self) -> usize {
        self.session
            .puzzle()
            .map(|puzzle| puzzle.cards.len())
            .unwrap_or(0)
    }

    pub fn new_puzzle(&mut self) {
        match self.session.load_puzzle(self.level_choice, &mut self.events) {
            Ok(()) => {
                self.status_line = format!("new {} puzzle", self.level_choice.id());
                self.cursor = 0;
            }
            Err(err) => self.status_line = err.to_string(),
        }
        self.flush_events();
    }

    pub fn cycle_level(&mut self, forward: bool) {
        if self.session.is_active() {
            self.status_line = "level is locked during a run".to_string();
            return;
        }
        let position = Level::ALL
            .iter()
            .position(|&level| level == self.level_choice)
            .unwrap_or(0);
        let count = Level::ALL.len();
        let next = if forward {
            (position + 1) % count
        } else {
            (position + count - 1) % count
        };
        self.level_choice = Level::ALL[next];
        self.status_line = format!("level: {}", self.level_choice.id());
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let count = self.card_count();
        if count == 0 {
            return;
        }
        self.cursor = if forward {
            (self.cursor + 1) % count
        } else {
            (self.cursor + count - 1) % count
        };
    }

    pub fn toggle_selected(&mut self) {
        match self.session.toggle_card(self.cursor) {
            Ok(true) => {
                self.status_line = format!("{}/3 cards picked", self.session.selection().len())
            }
            Ok(false) => self.status_line = "already holding 3 cards".to_string(),
            Err(err) => self.status_line = err.to_string(),
        }
    }

    pub fn clear_selection(&mut self) {
        if self.show_help {
            self.show_help = false;
            return;
        }
        self.session.clear_selection();
        self.status_line.clear();
    }

    pub fn start_run(&mut self) {
        match self.session.start_run(Self::now_ms(), &mut self.events) {
            Ok(()) => {
                self.status_line = "run started".to_string();
                self.cursor = 0;
            }
            Err(err) => self.status_line = err.to_string(),
        }
        self.flush_events();
    }

    pub fn reset_run(&mut self) {
        self.session.reset(&mut self.events);
        self.flush_events();
        self.status_line.clear();
        // Drop back to a manual puzzle so the table is never empty.
        self.new_puzzle();
    }

    pub fn submit(&mut self) {
        match self.session.submit(Self::now_ms(), &mut self.events) {
            Ok(true) => {
                self.status_line = "correct".to_string();
                self.cursor = 0;
            }
            Ok(false) => self.status_line = "wrong (+10s)".to_string(),
            Err(err) => self.status_line = err.to_string(),
        }
        self.flush_events();
    }

    fn flush_events(&mut self) {
        let drained: Vec<Event> = self.events.drain().collect();
        for event in drained {
            if let Event::RunFinished { record } = event {
                self.record_finish(record);
            }
            let line = describe_event(&event);
            self.push_log(line);
        }
    }

    fn record_finish(&mut self, record: ScoreRecord) {
        self.status_line = format!(
            "finished in {} (penalty +{})",
            format_ms(record.total_ms),
            format_ms(record.penalty_ms)
        );
        self.leaderboard.add(record);
        if let Some(path) = self.scores_path.clone() {
            if let Err(err) = save_scores(&path, self.leaderboard.records()) {
                self.status_line = format!("score save failed: {err}");
            }
        }
    }

    fn push_log(&mut self, line: String) {
        if self.event_log.len() >= MAX_EVENT_LOG {
            let _ = self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }
}

pub fn describe_event(event: &Event) -> String {
    match event {
        Event::PuzzleLoaded { level, round } => match round {
            Some(round) => format!("round {} puzzle loaded ({})", round + 1, level.id()),
            None => format!("manual puzzle loaded ({})", level.id()),
        },
        Event::RunStarted { level } => format!("run started at {}", level.id()),
        Event::SubmissionJudged { correct, round } => {
            let verdict = if *correct { "correct" } else { "wrong" };
            match round {
                Some(round) => format!("round {} answer {}", round + 1, verdict),
                None => format!("manual answer {}", verdict),
            }
        }
        Event::PenaltyApplied {
            penalty_ms,
            total_penalty_ms,
        } => format!(
            "penalty +{} (total +{})",
            format_ms(*penalty_ms),
            format_ms(*total_penalty_ms)
        ),
        Event::RoundAdvanced { round, level } => {
            format!("advanced to round {} ({})", round + 1, level.id())
        }
        Event::RunFinished { record } => format!(
            "run finished in {} (penalty +{})",
            format_ms(record.total_ms),
            format_ms(record.penalty_ms)
        ),
        Event::RunReset => "run reset".to_string(),
    }
}
