use crate::cli::Cli;
use crate::error::ConvertError;
use crate::instructions;
use crate::tool::{self, Invocation, ToolRunner};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Everything one run needs to know, resolved from the command line.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub program: String,
    pub toc: bool,
    pub number_sections: bool,
}

impl ConvertOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            input: cli.input.clone(),
            output: cli.output_path(),
            program: cli.pandoc.clone(),
            toc: !cli.no_toc,
            number_sections: !cli.no_number_sections,
        }
    }

    /// The pandoc command line for this conversion.
    pub fn invocation(&self) -> Invocation {
        let mut invocation = Invocation::new(&self.program)
            .arg(self.input.to_string_lossy())
            .arg("-o")
            .arg(self.output.to_string_lossy())
            .args(["--from", "markdown", "--to", "docx", "--standalone"]);

        if self.toc {
            invocation = invocation.arg("--toc");
        }
        if self.number_sections {
            invocation = invocation.arg("--number-sections");
        }
        invocation
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    Converted(PathBuf),
    /// The user was handed manual instructions instead.
    Fallback(ConvertError),
}

/// Run the conversion tool once. The input must exist before anything is spawned.
pub fn convert(runner: &mut dyn ToolRunner, opts: &ConvertOptions) -> Result<(), ConvertError> {
    if !opts.input.exists() {
        return Err(ConvertError::InputNotFound(opts.input.clone()));
    }

    let invocation = opts.invocation();
    tracing::debug!(program = %invocation.program, args = ?invocation.args, "running conversion");

    let capture = runner.run(&invocation).map_err(|source| ConvertError::Spawn {
        program: opts.program.clone(),
        source,
    })?;

    if capture.success {
        tracing::info!(output = %opts.output.display(), "conversion finished");
        Ok(())
    } else {
        tracing::warn!(code = ?capture.code, "conversion tool exited unsuccessfully");
        Err(ConvertError::ToolFailed {
            code: capture.code,
            stderr: capture.stderr.trim_end().to_string(),
        })
    }
}

/// Probe, convert, and fall back to manual instructions, reporting to `out`.
pub fn run(
    runner: &mut dyn ToolRunner,
    opts: &ConvertOptions,
    out: &mut dyn Write,
) -> io::Result<Outcome> {
    writeln!(out, "Game Architecture Documentation Converter")?;
    writeln!(out, "{}", "=".repeat(50))?;

    let outcome = if tool::probe_tool(runner, &opts.program) {
        writeln!(out, "Pandoc found! Attempting automatic conversion...")?;
        match convert(runner, opts) {
            Ok(()) => {
                writeln!(out, "Successfully converted to {}", opts.output.display())?;
                writeln!(out, "File location: {}", absolute(&opts.output).display())?;
                writeln!(out)?;
                writeln!(out, "Conversion completed successfully!")?;
                writeln!(
                    out,
                    "You can now open the Word document and format it as needed."
                )?;
                Outcome::Converted(opts.output.clone())
            }
            Err(err) => {
                writeln!(out, "{err}")?;
                writeln!(out)?;
                writeln!(
                    out,
                    "Automatic conversion failed. Using manual instructions..."
                )?;
                instructions::print_manual_instructions(out, &opts.input)?;
                Outcome::Fallback(err)
            }
        }
    } else {
        let err = ConvertError::ToolUnavailable(opts.program.clone());
        tracing::info!(program = %opts.program, "conversion tool unavailable");
        writeln!(out, "{err}. Using manual conversion instructions...")?;
        instructions::print_manual_instructions(out, &opts.input)?;
        Outcome::Fallback(err)
    };

    instructions::print_tips(out)?;
    Ok(outcome)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
