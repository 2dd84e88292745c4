mod address;
mod affiliations;
mod style;

pub use address::{parse_address, Address};
pub use affiliations::AffiliationIndex;
pub use style::{Style, StyleConfig};

use anyhow::Result;
use clap::Args;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::db::{default_db_path, load_author_db, load_roster, DEFAULT_ROSTER_FILE};
use crate::{tex_initials, tex_surname, AuthorDb, AuthorDbError};

#[derive(Args)]
pub struct RenderArgs {
    /// Output style of the target venue
    #[arg(short, long, value_enum, default_value_t = Style::Aas)]
    pub mode: Style,

    /// Ordered list of author IDs for this paper
    #[arg(short, long, default_value = DEFAULT_ROSTER_FILE)]
    pub authors: PathBuf,

    /// Author database [default: <exe dir>/../etc/authordb.yaml]
    #[arg(short, long)]
    pub db: Option<PathBuf>,
}

/// Accumulators threaded through the pass over the roster
#[derive(Debug, Default)]
struct Pass {
    affiliations: AffiliationIndex,
    /// Combined-mode author fragments
    authors: Vec<String>,
    /// Combined-mode first-seen affiliation lines
    affil_lines: Vec<String>,
    paper_authors: Vec<String>,
    index_entries: Vec<String>,
}

impl Pass {
    fn finish<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\\author{{{}}}", join_authors(&self.authors))?;
        write_block(out, &self.affil_lines)?;
        write_block(out, &self.paper_authors)?;
        writeln!(out, "% Yes they said to have these index commands commented out.")?;
        write_block(out, &self.index_entries)
    }
}

/// Lines joined by newlines and always newline terminated, so an empty block
/// still yields one blank line
fn write_block<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    writeln!(out, "{}", lines.join("\n"))
}

fn write_banner<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    writeln!(out, "%% DO NOT EDIT THIS FILE. IT IS GENERATED FROM db2authors")?;
    writeln!(out, "%% Regenerate using:")?;
    writeln!(out, "%%    db2authors --mode {} > authors.tex", style)?;
    writeln!(out)?;
    writeln!(out)
}

/// `X Y and Z`: fragments joined by spaces, with `and` before the last one
pub fn join_authors(fragments: &[String]) -> String {
    match fragments.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(" "), last),
    }
}

/// `Initials Surname` pairs separated by commas, as arXiv wants them
pub fn csv_names(roster: &[String], db: &AuthorDb) -> Result<String, AuthorDbError> {
    let names = roster
        .iter()
        .map(|id| {
            db.author(id)
                .map(|auth| format!("{} {}", auth.initials, auth.surname))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names.join(", "))
}

fn render_author<W: Write>(
    author_id: &str,
    is_last: bool,
    db: &AuthorDb,
    config: &StyleConfig,
    pass: &mut Pass,
    out: &mut W,
) -> Result<()> {
    let auth = db.author(author_id)?;

    let mut new_affils = Vec::new();
    let mut marker = String::new();
    // ADASS puts a comma between the name and its first marker, except for the last author
    let mut sep = if config.author_super && !is_last { "," } else { "" };
    for label in &auth.affiliations {
        let address = db.affiliation(author_id, label)?;
        let (index, first_seen) = pass.affiliations.insert(label);
        if first_seen {
            new_affils.push(config.affil_line(index, address));
        }
        config.push_marker(&mut marker, sep, index);
        sep = ",";
    }

    let orcid = auth.orcid.as_deref().unwrap_or("");
    let bracket = if config.buffer_affil {
        format!("[{}]", marker)
    } else if orcid.is_empty() {
        String::new()
    } else {
        format!("[{}]", orcid)
    };

    let surname = tex_surname(&auth.surname);
    let initials = tex_initials(&auth.initials);

    let address = match auth.affiliations.first() {
        Some(label) => parse_address(db.affiliation(author_id, label)?),
        None => Address::default(),
    };
    pass.paper_authors.push(format!(
        "\\paperauthor{{{}~{}}}{{{}}}{{{}}}{{{}}}{{}}{{{}}}{{{}}}{{{}}}{{{}}}",
        initials,
        surname,
        auth.email.as_deref().unwrap_or(""),
        orcid,
        address.institution,
        address.city,
        address.state,
        address.zipcode,
        address.country
    ));
    pass.index_entries
        .push(format!("%\\aindex{{{},{}}}", surname, initials));

    if config.buffer_authors {
        pass.authors
            .push(format!("{}~{}{}", initials, surname, marker));
        pass.affil_lines.extend(new_affils);
        return Ok(());
    }

    writeln!(out, "{}", config.author_line(&bracket, &initials, &surname))?;
    if config.buffer_affil {
        write_block(out, &new_affils)?;
    } else {
        for alt in auth.alternate_affiliations.iter().flatten() {
            writeln!(out, "\\altaffiliation{{{}}}", alt)?;
        }
        // Every author repeats its own affiliations in full
        for label in &auth.affiliations {
            writeln!(
                out,
                "\\{}{{{}}}",
                config.affil_cmd,
                db.affiliation(author_id, label)?
            )?;
        }
    }
    writeln!(out)?;

    Ok(())
}

/// Writes the banner and the markup for every author in roster order.
///
/// Returns the affiliation index built along the way.
pub fn render<W: Write>(
    roster: &[String],
    db: &AuthorDb,
    style: Style,
    out: &mut W,
) -> Result<AffiliationIndex> {
    let config = style.config();
    write_banner(out, style)?;

    let mut pass = Pass::default();
    for (anum, author_id) in roster.iter().enumerate() {
        debug!("Rendering author {} ({})", anum, author_id);
        let is_last = anum + 1 == roster.len();
        render_author(author_id, is_last, db, &config, &mut pass, out)?;
    }

    if config.buffer_authors {
        pass.finish(out)?;
    }

    info!(
        "Rendered {} authors with {} distinct affiliations",
        roster.len(),
        pass.affiliations.len()
    );

    Ok(pass.affiliations)
}

pub fn run(args: RenderArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("db2authors=info")),
        )
        .try_init()
        .ok();

    let db_path = match args.db {
        Some(path) => path,
        None => default_db_path()?,
    };

    info!("Loading authors from {}", args.authors.display());
    let roster = load_roster(&args.authors)?;
    info!("Loading author database from {}", db_path.display());
    let db = load_author_db(&db_path)?;
    info!(
        "Loaded {} roster entries, {} database authors, {} affiliations",
        roster.len(),
        db.authors.len(),
        db.affiliations.len()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cfg!(feature = "csv-names") {
        writeln!(out, "{}", csv_names(&roster, &db)?)?;
    } else {
        info!("Writing {} style markup", args.mode);
        render(&roster, &db, args.mode, &mut out)?;
    }

    out.flush()?;
    Ok(())
}
