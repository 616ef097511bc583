//! Command implementations for the timeline CLI.
//!
//! Provides subcommands for rendering a timeline to SVG and for turning the
//! plays CSV export into the JSON series the timeline reads.

use clap::Subcommand;

pub mod aggregate;
pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// Render a count-by-year series as a timeline SVG
    Render {
        /// JSON array of `{year, count}` records
        #[arg(short = 's', long)]
        series: String,

        /// Output path for the SVG document
        #[arg(short = 'o', long)]
        out: String,

        /// JSON file overriding the default layout
        #[arg(short = 'c', long)]
        config: Option<String>,

        /// Window to show, as `START:END` years (default: everything)
        #[arg(short = 'w', long)]
        window: Option<String>,

        /// Highlight, as `START:END:CATEGORY[:exclusive]`; may be repeated
        #[arg(long = "highlight")]
        highlights: Vec<String>,

        /// JSON array of `{year, category, value}` points to draw as lines
        #[arg(long)]
        categories: Option<String>,
    },

    /// Count plays per year (or per year and language) from a plays CSV
    Aggregate {
        /// Plays CSV with `year` and `lang` columns
        #[arg(short = 'p', long)]
        plays: String,

        /// Output path for the JSON array
        #[arg(short = 'o', long)]
        out: String,

        /// Emit `{year, category, value}` per language instead of `{year, count}`
        #[arg(long)]
        by_lang: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            series,
            out,
            config,
            window,
            highlights,
            categories,
        } => render::run_render(&render::RenderArgs {
            series,
            out,
            config,
            window,
            highlights,
            categories,
        }),
        Command::Aggregate { plays, out, by_lang } => {
            aggregate::run_aggregate(&plays, &out, by_lang)
        }
    }
}
