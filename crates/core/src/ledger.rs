use serde::{Deserialize, Serialize};

pub const LEADERBOARD_CAP: usize = 5;

/// Outcome of one completed run. Immutable once added; only list
/// membership changes when better runs push it out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreRecord {
    pub total_ms: u64,
    pub penalty_ms: u64,
    pub ts: u64,
}

/// The best finished runs, ascending by total time, capped at
/// [`LEADERBOARD_CAP`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    records: Vec<ScoreRecord>,
}

impl Leaderboard {
    /// Restores order and cap no matter what state the stored records
    /// were in.
    pub fn from_records(records: Vec<ScoreRecord>) -> Self {
        let mut board = Self { records };
        board.normalize();
        board
    }

    pub fn add(&mut self, record: ScoreRecord) {
        self.records.push(record);
        self.normalize();
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn normalize(&mut self) {
        self.records.sort_by_key(|record| record.total_ms);
        self.records.truncate(LEADERBOARD_CAP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(total_ms: u64) -> ScoreRecord {
        ScoreRecord {
            total_ms,
            penalty_ms: 0,
            ts: total_ms,
        }
    }

    #[test]
    fn keeps_the_best_five_of_six() {
        let mut board = Leaderboard::default();
        for total in [60_000, 30_000, 90_000, 10_000, 50_000, 70_000] {
            board.add(record(total));
        }
        let totals: Vec<u64> = board.records().iter().map(|r| r.total_ms).collect();
        assert_eq!(totals, vec![10_000, 30_000, 50_000, 60_000, 70_000]);
    }

    #[test]
    fn a_record_worse_than_all_five_changes_nothing() {
        let mut board = Leaderboard::default();
        for total in [10_000, 20_000, 30_000, 40_000, 50_000] {
            board.add(record(total));
        }
        let before = board.clone();
        board.add(record(99_000));
        assert_eq!(board, before);
    }

    #[test]
    fn from_records_restores_order_and_cap() {
        let stored = vec![
            record(50_000),
            record(10_000),
            record(40_000),
            record(30_000),
            record(20_000),
            record(60_000),
            record(5_000),
        ];
        let board = Leaderboard::from_records(stored);
        let totals: Vec<u64> = board.records().iter().map(|r| r.total_ms).collect();
        assert_eq!(totals, vec![5_000, 10_000, 20_000, 30_000, 40_000]);
    }

    #[test]
    fn equal_totals_keep_insertion_order() {
        let mut board = Leaderboard::default();
        let first = ScoreRecord {
            total_ms: 10_000,
            penalty_ms: 0,
            ts: 1,
        };
        let second = ScoreRecord {
            total_ms: 10_000,
            penalty_ms: 10_000,
            ts: 2,
        };
        board.add(first);
        board.add(second);
        assert_eq!(board.records(), &[first, second]);
    }
}
