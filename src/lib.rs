use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

pub mod db;
pub mod render;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static DOT_LETTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.(\w)").unwrap());

#[derive(Debug, thiserror::Error)]
pub enum AuthorDbError {
    #[error("Author ID {0} not defined in author database")]
    MissingAuthor(String),

    #[error("Affiliation {label} of author {author} not defined in author database")]
    MissingAffiliation { author: String, label: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorRecord {
    #[serde(rename = "name")]
    pub surname: String,
    pub initials: String,
    #[serde(default)]
    pub orcid: Option<String>,
    #[serde(rename = "affil", default)]
    pub affiliations: Vec<String>,
    #[serde(rename = "altaffil", default)]
    pub alternate_affiliations: Option<Vec<String>>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorDb {
    pub authors: HashMap<String, AuthorRecord>,
    #[serde(default)]
    pub affiliations: HashMap<String, String>,
}

impl AuthorDb {
    pub fn author(&self, id: &str) -> Result<&AuthorRecord, AuthorDbError> {
        self.authors
            .get(id)
            .ok_or_else(|| AuthorDbError::MissingAuthor(id.to_string()))
    }

    pub fn affiliation(&self, author: &str, label: &str) -> Result<&str, AuthorDbError> {
        self.affiliations
            .get(label)
            .map(String::as_str)
            .ok_or_else(|| AuthorDbError::MissingAffiliation {
                author: author.to_string(),
                label: label.to_string(),
            })
    }
}

/// Ordered author identifiers for one paper
pub type Roster = Vec<String>;

/// Spaces in surnames become `~` so TeX never breaks the line inside a name
pub fn tex_surname(surname: &str) -> String {
    WHITESPACE_RE.replace_all(surname, "~").into_owned()
}

/// `A.B.` becomes `A.~B.`; any whitespace becomes `~`
pub fn tex_initials(initials: &str) -> String {
    let spaced = DOT_LETTER_RE.replace_all(initials, ".~$1");
    WHITESPACE_RE.replace_all(&spaced, "~").into_owned()
}
