/// External rater process invocation
///
/// The contract with the external classifier: it is launched with the image's
/// local path appended as the final argument, writes exactly one line to
/// stdout containing "safe" or "suspicious" to signal its verdict, and on any
/// other outcome may write a diagnostic line to stderr. The exit code is not
/// inspected.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

use super::{Rater, Verdict};

/// A rater that shells out to a configured external program
#[derive(Debug, Clone)]
pub struct ProcessRater {
    program: String,
    args: Vec<String>,
}

impl ProcessRater {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }

    /// The program this rater launches (for status display)
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Rater for ProcessRater {
    fn rate(&self, image: &Path) -> impl std::future::Future<Output = Verdict> + Send {
        run(self.program.clone(), self.args.clone(), image.to_path_buf())
    }
}

/// Launch the rater and classify its one-line report.
///
/// Launch failure folds into the Error verdict path rather than surfacing as
/// a separate state; stderr is only drained when the stdout line matched
/// neither keyword.
async fn run(program: String, args: Vec<String>, image: PathBuf) -> Verdict {
    let spawned = Command::new(&program)
        .args(&args)
        .arg(&image)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) => {
            eprintln!("⚠️  Failed to launch rater '{}': {}", program, e);
            return Verdict::Error(format!("failed to launch rater '{}': {}", program, e));
        }
    };

    let stdout_line = match child.stdout.take() {
        Some(stream) => first_line(stream).await,
        None => String::new(),
    };

    let verdict = match Verdict::from_report(&stdout_line, "") {
        Verdict::Error(_) => {
            let stderr_line = match child.stderr.take() {
                Some(stream) => first_line(stream).await,
                None => String::new(),
            };
            Verdict::from_report(&stdout_line, &stderr_line)
        }
        verdict => verdict,
    };

    // Reap the child in the background; we already have our line and a rater
    // that lingers must not hold the verdict hostage
    tokio::spawn(async move {
        let _ = child.wait().await;
    });

    verdict
}

/// Read the first line of a stream, empty on EOF or read failure
async fn first_line<R: AsyncRead + Unpin>(stream: R) -> String {
    BufReader::new(stream)
        .lines()
        .next_line()
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}
