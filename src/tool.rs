use std::io;
use std::process::{Command, Stdio};

/// A program plus the arguments to run it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

/// What a finished process left behind.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs external programs to completion. `Err` means the process never started.
pub trait ToolRunner {
    fn run(&mut self, invocation: &Invocation) -> io::Result<Capture>;
}

/// Spawns real child processes, blocking until they exit.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> io::Result<Capture> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output()?;

        Ok(Capture {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Check whether `program` is installed by asking for its version.
pub fn probe_tool(runner: &mut dyn ToolRunner, program: &str) -> bool {
    let invocation = Invocation::new(program).arg("--version");
    match runner.run(&invocation) {
        Ok(capture) if capture.success => {
            tracing::debug!(
                program,
                version = capture.stdout.lines().next().unwrap_or_default(),
                "conversion tool found"
            );
            true
        }
        Ok(capture) => {
            tracing::debug!(program, code = ?capture.code, "version check exited unsuccessfully");
            false
        }
        Err(err) => {
            tracing::debug!(program, error = %err, "conversion tool could not be started");
            false
        }
    }
}
