/// Rating module
///
/// This module handles:
/// - The closed verdict set the rater's output maps into
/// - The one-line subprocess protocol spoken with the external classifier

use std::fmt;
use std::path::Path;

pub mod process;

pub use process::ProcessRater;

/// The classification result for one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The rater's output line contained "safe"
    Safe,
    /// The rater's output line contained "suspicious"
    Suspicious,
    /// Anything else; carries the first line of the rater's stderr
    /// (possibly empty)
    Error(String),
}

impl Verdict {
    /// Classify a rater's report lines into a verdict.
    ///
    /// Matching is substring-based and case-sensitive, in priority order:
    /// "safe" wins over "suspicious" when a line contains both. Any line
    /// matching neither (including an empty one) is an error carrying the
    /// stderr line.
    pub fn from_report(stdout_line: &str, stderr_line: &str) -> Verdict {
        if stdout_line.contains("safe") {
            Verdict::Safe
        } else if stdout_line.contains("suspicious") {
            Verdict::Suspicious
        } else {
            Verdict::Error(stderr_line.trim_end().to_string())
        }
    }

    /// Short label for the history database
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Safe => "safe",
            Verdict::Suspicious => "suspicious",
            Verdict::Error(_) => "error",
        }
    }

    /// Extra detail for the history database (error message, if any)
    pub fn detail(&self) -> Option<&str> {
        match self {
            Verdict::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Safe => write!(f, "Safe"),
            Verdict::Suspicious => write!(f, "Suspicious"),
            Verdict::Error(message) => write!(f, "Error: {}", message),
        }
    }
}

/// The capability a rater provides: classify the image at a local path.
///
/// The shipped implementation shells out to an external process
/// ([`ProcessRater`]), but anything that can produce a [`Verdict`] for a
/// path can stand in.
pub trait Rater {
    fn rate(&self, image: &Path) -> impl std::future::Future<Output = Verdict> + Send;
}
