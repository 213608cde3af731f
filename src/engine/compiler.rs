use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("input file must be a .tex file")]
    InvalidInputKind,
    #[error("file '{0}' not found")]
    InputNotFound(String),
    #[error("failed to launch '{engine}': {source}")]
    EngineNotLaunched {
        engine: String,
        #[source]
        source: std::io::Error,
    },
    #[error("latex compilation failed: {0}")]
    CompilationFailed(ExitStatus),
}

/// Runs the LaTeX engine over `input`, producing `<output>.pdf` in the
/// current working directory. Blocks until the engine exits.
///
/// The input is validated before anything is spawned: it must carry the
/// `.tex` extension and exist on disk.
pub fn compile(input: &Path, output: &str, engine: &str) -> Result<(), CompileError> {
    // Suffix check on the file name, not Path::extension: a file named
    // exactly `.tex` is still a valid input.
    let is_tex = input
        .file_name()
        .and_then(|n| n.to_str())
        .map_or(false, |n| n.ends_with(".tex"));
    if !is_tex {
        return Err(CompileError::InvalidInputKind);
    }
    if !input.exists() {
        return Err(CompileError::InputNotFound(input.display().to_string()));
    }

    let args = arguments(input, output);
    tracing::debug!(engine, ?args, "invoking latex engine");
    let status = Command::new(engine)
        .args(&args)
        .status()
        .map_err(|source| CompileError::EngineNotLaunched {
            engine: engine.to_string(),
            source,
        })?;
    if !status.success() {
        return Err(CompileError::CompilationFailed(status));
    }
    Ok(())
}

// The job name is passed as its own argv element, never through a shell,
// so it cannot inject extra arguments or commands.
fn arguments(input: &Path, output: &str) -> Vec<OsString> {
    vec![
        OsString::from("-shell-escape"),
        OsString::from(format!("-jobname={output}")),
        input.as_os_str().to_os_string(),
    ]
}
