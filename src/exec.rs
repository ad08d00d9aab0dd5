use std::io;
use std::process::{Command, Output};

use thiserror::Error;

use crate::tokenizer::ParsedCommand;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to materialize shell script: {0}")]
    Script(#[source] io::Error),
}

/// Exit code and captured output of one command run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code of the process, or -1 when it was killed by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    fn from_output(output: Output) -> CommandOutput {
        CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Runs a parsed command and captures its output.
///
/// Commands that need no shell are spawned directly. Anything flagged with
/// `requires_shell` is handed to the platform shell as the original raw
/// text, so operators and expansions keep their meaning.
pub fn run(cmd: &ParsedCommand) -> Result<CommandOutput, ExecError> {
    if cmd.is_empty() {
        return Ok(CommandOutput {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
        });
    }

    let output = if cmd.requires_shell {
        run_in_shell(&cmd.raw)?
    } else {
        Command::new(&cmd.program)
            .args(&cmd.args)
            .output()
            .map_err(|source| ExecError::Spawn {
                program: cmd.program.clone(),
                source,
            })?
    };
    Ok(CommandOutput::from_output(output))
}

#[cfg(unix)]
fn run_in_shell(text: &str) -> Result<Output, ExecError> {
    Command::new("sh")
        .arg("-c")
        .arg(text)
        .output()
        .map_err(|source| ExecError::Spawn {
            program: "sh".to_string(),
            source,
        })
}

/// `cmd.exe` mangles quoting in inline `/C` strings, so the command is
/// written to a batch script first. The `TempDir` guard removes the script
/// and its directory when this function returns, error path included.
#[cfg(windows)]
fn run_in_shell(text: &str) -> Result<Output, ExecError> {
    let dir = tempfile::tempdir().map_err(ExecError::Script)?;
    let script = dir.path().join("command.cmd");
    std::fs::write(&script, format!("@echo off\r\n{text}\r\n")).map_err(ExecError::Script)?;

    Command::new("cmd.exe")
        .arg("/C")
        .arg(&script)
        .output()
        .map_err(|source| ExecError::Spawn {
            program: "cmd.exe".to_string(),
            source,
        })
}
