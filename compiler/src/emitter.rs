use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
};

use tracing::warn;

use crate::error::TagEnumError;

/// Environment variable overriding the `rustfmt` binary.
pub const RUSTFMT_ENV: &str = "TAGENUM_RUSTFMT";

/// Source normalization applied to the generated text before it is written.
pub trait Normalize {
    fn normalize(&self, source: &str) -> Result<String, TagEnumError>;
}

/// Pipes the source through `rustfmt` on stdin/stdout.
#[derive(Debug, Clone)]
pub struct Rustfmt {
    pub binary:  PathBuf,
    pub edition: String,
}

impl Rustfmt {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary:  binary.into(),
            edition: "2021".to_string(),
        }
    }

    /// Uses `$TAGENUM_RUSTFMT` when set, `rustfmt` from `PATH` otherwise.
    pub fn from_env() -> Self {
        let binary = std::env::var_os(RUSTFMT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("rustfmt"));
        Self::new(binary)
    }
}

impl Normalize for Rustfmt {
    fn normalize(&self, source: &str) -> Result<String, TagEnumError> {
        let mut child = Command::new(&self.binary)
            .arg("--edition")
            .arg(&self.edition)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| TagEnumError::Format("rustfmt stdin unavailable".to_string()))?;
            stdin.write_all(source.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(TagEnumError::Format(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        String::from_utf8(output.stdout).map_err(|e| TagEnumError::Format(e.to_string()))
    }
}

/// Leaves the source untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl Normalize for Verbatim {
    fn normalize(&self, source: &str) -> Result<String, TagEnumError> {
        Ok(source.to_string())
    }
}

/// Returns the normalized source, or the source as is when normalization fails.
pub fn emit(source: String, normalizer: &dyn Normalize) -> String {
    match normalizer.normalize(&source) {
        Ok(normalized) => normalized,
        Err(err) => {
            // The caller can compile the unformatted output to see the real error.
            warn!("internal error: invalid Rust generated: {}", err);
            warn!("compile the generated file to analyze the error");
            source
        }
    }
}
