use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "edeck")]
#[command(author, version, about)]
#[command(long_about = "An interactive viewer for deck slide markup.\n\n\
    Slides position shapes, text, lists, and images in percent coordinates\n\
    and render on a resizable canvas.\n\n\
    Examples:\n  \
    edeck talk.xml                     Present a deck\n  \
    edeck talk.xml --pagesize A4       Present on an A4 canvas\n  \
    edeck talk.xml --page 12           Start on slide 12\n  \
    cat talk.xml | edeck               Read the deck from standard input")]
pub struct Cli {
    /// Deck markup file to present (use - or omit to read standard input)
    pub file: Option<PathBuf>,

    /// Window title (defaults to the deck file name)
    #[arg(long)]
    pub title: Option<String>,

    /// Page size: w,h in points, or one of: Letter, Legal, Tabloid, A2,
    /// A3, A4, A5, ArchA, 4R, Index, Widescreen
    #[arg(long)]
    pub pagesize: Option<String>,

    /// Initial page (1-based; out-of-range values start on page 1)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let config = Config::load_or_default();
        let pagesize = self
            .pagesize
            .or_else(|| config.defaults.and_then(|d| d.pagesize))
            .unwrap_or_else(|| "Letter".to_string());

        let file = self.file.map(|p| p.display().to_string());
        let (filename, default_title) = match file {
            Some(name) if name != "-" => (name.clone(), name),
            _ => ("-".to_string(), "Standard Input".to_string()),
        };
        let title = self.title.unwrap_or(default_title);

        crate::app::run(&filename, &title, &pagesize, self.page)
    }
}
