use crate::schema::{BankFile, MIN_CARDS};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use trichroma_core::{solve_all, BankSet, Level};

/// Load a bank file, checking shape only: every level present with a
/// non-empty pool and every puzzle with enough cards. Solvability is the
/// data author's promise; see [`load_banks_verified`] for an audited
/// load.
pub fn load_banks(path: &Path) -> anyhow::Result<BankSet> {
    let mut file: BankFile = load_json(path)?;
    let mut banks = BankSet::new();
    for level in Level::ALL {
        let Some(puzzles) = file.remove(&level) else {
            bail!("missing bank {} in {}", level.id(), path.display());
        };
        if puzzles.is_empty() {
            bail!("empty bank {} in {}", level.id(), path.display());
        }
        for (index, puzzle) in puzzles.iter().enumerate() {
            if puzzle.cards.len() < MIN_CARDS {
                bail!(
                    "bank {} puzzle {} has {} cards, need at least {} in {}",
                    level.id(),
                    index,
                    puzzle.cards.len(),
                    MIN_CARDS,
                    path.display()
                );
            }
        }
        banks.insert(level, puzzles);
    }
    Ok(banks)
}

/// [`load_banks`] plus a solvability audit of every puzzle.
pub fn load_banks_verified(path: &Path) -> anyhow::Result<BankSet> {
    let banks = load_banks(path)?;
    for level in Level::ALL {
        for (index, puzzle) in banks.puzzles(level).iter().enumerate() {
            if solve_all(&puzzle.cards, &puzzle.target).is_empty() {
                bail!(
                    "bank {} puzzle {} admits no solution in {}",
                    level.id(),
                    index,
                    path.display()
                );
            }
        }
    }
    Ok(banks)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
