use clap::ValueEnum;
use std::fmt;

/// House style of the venue the paper is submitted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Style {
    /// AASTeX: `\author[ORCID]{..}` followed by `\affiliation{..}` lines
    #[default]
    Aas,
    /// SPIE: numbered `\affil[n]{..}` lines referenced from each author
    Spie,
    /// ADASS: one combined `\author{..}` with superscript markers, plus listings
    Adass,
}

impl Style {
    pub fn config(self) -> StyleConfig {
        match self {
            Style::Aas => StyleConfig {
                affil_cmd: "affiliation",
                buffer_affil: false,
                buffer_authors: false,
                author_super: false,
            },
            Style::Spie => StyleConfig {
                affil_cmd: "affil",
                buffer_affil: true,
                buffer_authors: false,
                author_super: false,
            },
            Style::Adass => StyleConfig {
                affil_cmd: "affil",
                buffer_affil: true,
                buffer_authors: true,
                author_super: true,
            },
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Style::Aas => "aas",
            Style::Spie => "spie",
            Style::Adass => "adass",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleConfig {
    pub affil_cmd: &'static str,
    /// Affiliation indices go in the author's bracket instead of the ORCID
    pub buffer_affil: bool,
    /// All authors share one `\author{..}` emitted after the pass
    pub buffer_authors: bool,
    /// Indices render as `$^n$`
    pub author_super: bool,
}

impl StyleConfig {
    /// Numbered affiliation line, emitted once per label
    pub fn affil_line(&self, index: usize, address: &str) -> String {
        if self.author_super {
            format!("\\{}{{$^{}${}}}", self.affil_cmd, index, address)
        } else {
            format!("\\{}[{}]{{{}}}", self.affil_cmd, index, address)
        }
    }

    /// Appends one index to an author's marker
    pub fn push_marker(&self, marker: &mut String, sep: &str, index: usize) {
        marker.push_str(sep);
        if self.author_super {
            marker.push_str(&format!("$^{}$", index));
        } else {
            marker.push_str(&index.to_string());
        }
    }

    pub fn author_line(&self, bracket: &str, initials: &str, surname: &str) -> String {
        format!("\\author{}{{{}~{}}}", bracket, initials, surname)
    }
}
