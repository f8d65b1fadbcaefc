use crate::{Level, ScoreRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    PuzzleLoaded {
        level: Level,
        round: Option<usize>,
    },
    RunStarted {
        level: Level,
    },
    SubmissionJudged {
        correct: bool,
        round: Option<usize>,
    },
    PenaltyApplied {
        penalty_ms: u64,
        total_penalty_ms: u64,
    },
    RoundAdvanced {
        round: usize,
        level: Level,
    },
    RunFinished {
        record: ScoreRecord,
    },
    RunReset,
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
