use anyhow::Result;
use clap::Parser;
use db2authors::render;

/// Load the paper's author list and the shared author database and write the
/// author and affiliation TeX markup for the selected venue:
///
///   db2authors > authors.tex
#[derive(Parser)]
#[command(name = "db2authors")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    render: render::RenderArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "db2authors=debug");
    }

    render::run(cli.render)
}
