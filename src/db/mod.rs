use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::{AuthorDb, Roster};

pub const DEFAULT_ROSTER_FILE: &str = "authors.yaml";

/// Reads YAML, or JSON when the file carries a `.json` extension
fn load_document<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse {}", path.display()))
    } else {
        serde_yaml::from_reader(reader)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster> {
    load_document(path)
}

pub fn load_author_db<P: AsRef<Path>>(path: P) -> Result<AuthorDb> {
    load_document(path)
}

/// Database installed next to the binary: `<exe dir>/../etc/authordb.yaml`
pub fn default_db_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate running executable")?;
    let exe_dir = exe
        .parent()
        .context("Running executable has no parent directory")?;
    Ok(db_path_for(exe_dir))
}

pub fn db_path_for<P: AsRef<Path>>(exe_dir: P) -> PathBuf {
    let exe_dir = exe_dir.as_ref();
    let base = exe_dir.parent().unwrap_or(exe_dir);
    base.join("etc").join("authordb.yaml")
}
