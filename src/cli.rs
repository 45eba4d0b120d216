use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "Game_Architecture_Documentation.md";

/// Convert a Markdown document to Word (.docx) using pandoc
#[derive(Parser, Debug)]
#[command(name = "md2docx", version, about)]
pub struct Cli {
    /// Path to the input Markdown file
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output path for the Word document.
    /// Defaults to the input path with a .docx extension.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name or path of the pandoc executable
    #[arg(long, default_value = "pandoc")]
    pub pandoc: String,

    /// Do not ask pandoc for a table of contents
    #[arg(long, default_value_t = false)]
    pub no_toc: bool,

    /// Do not number sections in the generated document
    #[arg(long, default_value_t = false)]
    pub no_number_sections: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn output_path(&self) -> PathBuf {
        match self.output {
            Some(ref path) => path.clone(),
            None => self.input.with_extension("docx"),
        }
    }
}
