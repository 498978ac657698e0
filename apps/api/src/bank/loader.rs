use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::bank::dsa::DsaBank;
use crate::bank::interview::InterviewBank;
use crate::csv::{parse_records, Record};

const DEFAULT_DSA_CATEGORY: &str = "general";
const DEFAULT_DSA_ID_PREFIX: &str = "dsa";

/// Reads and parses a CSV asset. A missing file yields `None`.
pub async fn load_csv_records(path: &Path) -> Result<Option<Vec<Record>>> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(Some(parse_records(&text))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read CSV asset {}", path.display())),
    }
}

/// Loads the DSA bank from a single CSV file or from every `*.csv` file in a
/// directory. In directory mode a file's stem is the category for rows that
/// carry none and the prefix of ids synthesized for rows without one.
pub async fn load_dsa_bank(path: &Path) -> Result<DsaBank> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("DSA bank not found at {}; serving an empty bank", path.display());
            return Ok(DsaBank::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to stat DSA bank {}", path.display()))
        }
    };

    let mut bank = DsaBank::default();
    if metadata.is_dir() {
        for file in csv_files_in(path).await? {
            let category = file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(DEFAULT_DSA_CATEGORY)
                .to_string();
            if let Some(records) = load_csv_records(&file).await? {
                bank.extend(DsaBank::from_records(&records, &category, &category));
            }
        }
    } else if let Some(records) = load_csv_records(path).await? {
        bank = DsaBank::from_records(&records, DEFAULT_DSA_CATEGORY, DEFAULT_DSA_ID_PREFIX);
    }

    info!(
        "Loaded {} DSA questions in {} categories from {}",
        bank.len(),
        bank.categories().len(),
        path.display()
    );
    Ok(bank)
}

pub async fn load_interview_bank(path: &Path) -> Result<InterviewBank> {
    let Some(records) = load_csv_records(path).await? else {
        warn!(
            "Interview questions not found at {}; serving an empty flow",
            path.display()
        );
        return Ok(InterviewBank::default());
    };

    let bank = InterviewBank::from_records(&records);
    info!(
        "Loaded {} interview questions for {} roles from {}",
        bank.len(),
        bank.roles().len(),
        path.display()
    );
    Ok(bank)
}

/// `*.csv` files directly under `dir`, sorted by name.
async fn csv_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to list {}", dir.display()))?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if is_csv && entry.file_type().await?.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
