use crate::{
    selection_matches, BankSet, Event, EventBus, Level, Puzzle, RngState, ScoreRecord, Selection,
    ROUND_COUNT,
};
use thiserror::Error;

/// Time added to a run for each wrong submission.
pub const WRONG_PENALTY_MS: u64 = 10_000;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("a run is already in progress")]
    RunActive,
    #[error("no puzzle loaded")]
    NoPuzzle,
    #[error("selection must contain exactly 3 cards")]
    SelectionIncomplete,
    #[error("card index {0} out of range")]
    InvalidCardIndex(usize),
    #[error("no puzzles available for level {0:?}")]
    EmptyBank(Level),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveRun {
    round: usize,
    penalty_ms: u64,
    started_at_ms: u64,
}

/// One player's table: the loaded banks, the puzzle on display, the
/// current selection, and the timed-run state when a run is active.
/// The core never reads a clock; callers pass epoch milliseconds into
/// every operation that needs time.
#[derive(Debug)]
pub struct Session {
    banks: BankSet,
    rng: RngState,
    puzzle: Option<Puzzle>,
    level: Option<Level>,
    selection: Selection,
    run: Option<ActiveRun>,
}

impl Session {
    pub fn new(banks: BankSet, seed: u64) -> Self {
        Self {
            banks,
            rng: RngState::from_seed(seed),
            puzzle: None,
            level: None,
            selection: Selection::default(),
            run: None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }

    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    pub fn level(&self) -> Option<Level> {
        self.level
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// 0-based round of the active run.
    pub fn round(&self) -> Option<usize> {
        self.run.map(|run| run.round)
    }

    pub fn penalty_ms(&self) -> u64 {
        self.run.map(|run| run.penalty_ms).unwrap_or(0)
    }

    /// Live elapsed time including penalties; 0 outside a run. Derived on
    /// every call, never stored.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match self.run {
            Some(run) => now_ms.saturating_sub(run.started_at_ms) + run.penalty_ms,
            None => 0,
        }
    }

    /// Free-play draw from one level's pool; rejected while a run is
    /// active.
    pub fn load_puzzle(&mut self, level: Level, events: &mut EventBus) -> Result<(), RunError> {
        if self.is_active() {
            return Err(RunError::RunActive);
        }
        let puzzle = self
            .banks
            .pick(level, &mut self.rng)
            .ok_or(RunError::EmptyBank(level))?;
        self.install_puzzle(level, puzzle, None, events);
        Ok(())
    }

    /// `Ok(false)` reports an ignored fourth pick.
    pub fn toggle_card(&mut self, index: usize) -> Result<bool, RunError> {
        let puzzle = self.puzzle.as_ref().ok_or(RunError::NoPuzzle)?;
        if index >= puzzle.cards.len() {
            return Err(RunError::InvalidCardIndex(index));
        }
        Ok(self.selection.toggle(index))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Begin a timed run at round 0. Idle only.
    pub fn start_run(&mut self, now_ms: u64, events: &mut EventBus) -> Result<(), RunError> {
        if self.is_active() {
            return Err(RunError::RunActive);
        }
        let level = Level::ALL[0];
        let puzzle = self
            .banks
            .pick(level, &mut self.rng)
            .ok_or(RunError::EmptyBank(level))?;
        self.run = Some(ActiveRun {
            round: 0,
            penalty_ms: 0,
            started_at_ms: now_ms,
        });
        events.push(Event::RunStarted { level });
        self.install_puzzle(level, puzzle, Some(0), events);
        Ok(())
    }

    /// Judge the current selection against the current puzzle. Outside a
    /// run only the verdict is returned. During a run a correct answer
    /// advances the round (finishing and scoring on the last one); a
    /// wrong answer adds the fixed penalty and keeps the same puzzle.
    pub fn submit(&mut self, now_ms: u64, events: &mut EventBus) -> Result<bool, RunError> {
        let puzzle = self.puzzle.as_ref().ok_or(RunError::NoPuzzle)?;
        let picks = self
            .selection
            .as_triple()
            .ok_or(RunError::SelectionIncomplete)?;
        let correct = selection_matches(&puzzle.cards, &puzzle.target, picks);
        events.push(Event::SubmissionJudged {
            correct,
            round: self.round(),
        });

        let Some(run) = self.run else {
            return Ok(correct);
        };

        if !correct {
            if let Some(active) = self.run.as_mut() {
                active.penalty_ms += WRONG_PENALTY_MS;
                events.push(Event::PenaltyApplied {
                    penalty_ms: WRONG_PENALTY_MS,
                    total_penalty_ms: active.penalty_ms,
                });
            }
            return Ok(false);
        }

        let next = run.round + 1;
        if next < ROUND_COUNT {
            let level = Level::ALL[next];
            let puzzle = self
                .banks
                .pick(level, &mut self.rng)
                .ok_or(RunError::EmptyBank(level))?;
            if let Some(active) = self.run.as_mut() {
                active.round = next;
            }
            events.push(Event::RoundAdvanced { round: next, level });
            self.install_puzzle(level, puzzle, Some(next), events);
        } else {
            self.finish(now_ms, events);
        }
        Ok(true)
    }

    /// Back to idle without scoring, from any state.
    pub fn reset(&mut self, events: &mut EventBus) {
        self.run = None;
        self.puzzle = None;
        self.level = None;
        self.selection.clear();
        events.push(Event::RunReset);
    }

    fn finish(&mut self, now_ms: u64, events: &mut EventBus) {
        let Some(run) = self.run.take() else {
            return;
        };
        let total_ms = now_ms.saturating_sub(run.started_at_ms) + run.penalty_ms;
        events.push(Event::RunFinished {
            record: ScoreRecord {
                total_ms,
                penalty_ms: run.penalty_ms,
                ts: now_ms,
            },
        });
    }

    fn install_puzzle(
        &mut self,
        level: Level,
        puzzle: Puzzle,
        round: Option<usize>,
        events: &mut EventBus,
    ) {
        self.puzzle = Some(puzzle);
        self.level = Some(level);
        self.selection.clear();
        events.push(Event::PuzzleLoaded { level, round });
    }
}
