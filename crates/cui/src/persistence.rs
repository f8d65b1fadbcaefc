use std::fs;
use std::path::{Path, PathBuf};
use trichroma_core::ScoreRecord;

pub fn default_scores_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("TRICHROMA_SCORES") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".trichroma_scores.json"))
}

pub fn load_scores(path: &Path) -> Vec<ScoreRecord> {
    // A missing file or malformed contents is an empty list, never an
    // error.
    let Ok(body) = fs::read_to_string(path) else {
        return Vec::new();
    };
    serde_json::from_str(&body).unwrap_or_default()
}

pub fn save_scores(path: &Path, records: &[ScoreRecord]) -> Result<(), String> {
    let body = serde_json::to_string_pretty(records).map_err(|err| err.to_string())?;
    fs::write(path, body).map_err(|err| err.to_string())
}
