use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orgmap")]
#[command(about = "Analyze language volume and commit authors across a directory of git repositories")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Base directory containing the repositories to analyze")]
    pub base: PathBuf,

    #[arg(long, help = "JSON file mapping language names to hex colors")]
    pub colors: Option<PathBuf>,

    #[arg(long, help = "Path for the generated SVG chart")]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = 800, help = "Chart canvas width in pixels")]
    pub chart_width: u32,

    #[arg(long, default_value_t = 20, help = "Chart canvas height in pixels")]
    pub chart_height: u32,

    #[arg(long, help = "Print the cumulative summary as JSON instead of text")]
    pub json: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::report::exec(self)
    }
}
