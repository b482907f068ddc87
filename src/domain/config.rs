// ============================================================================
// Filter Configuration
// Which inputs to read and how eagerly to flush output
// ============================================================================

use std::fmt;
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Input Source
// ============================================================================

/// One source of log lines. Sources are read in turn as a single stream.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A named file, opened when its turn comes
    File(PathBuf),
}

impl InputSource {
    /// Map a command line argument to a source; `-` means standard input.
    pub fn from_arg(arg: impl Into<PathBuf>) -> Self {
        let path = arg.into();
        if path.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(path)
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            InputSource::Stdin => None,
            InputSource::File(path) => Some(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// ============================================================================
// Filter Configuration
// ============================================================================

/// Configuration for a filter run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterConfig {
    /// Inputs in reading order. Empty means standard input only.
    pub sources: Vec<InputSource>,

    /// Flush the writer after every line so interactive consumers see
    /// each line as soon as it is produced
    pub line_buffered: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterConfig {
    /// Read standard input, flushing per line
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            line_buffered: true,
        }
    }

    /// Builder method: Append one source
    pub fn with_source(mut self, source: InputSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Builder method: Append sources from command line arguments
    pub fn with_sources<I, P>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.sources
            .extend(args.into_iter().map(InputSource::from_arg));
        self
    }

    /// Builder method: Enable or disable the per-line flush
    pub fn with_line_buffered(mut self, line_buffered: bool) -> Self {
        self.line_buffered = line_buffered;
        self
    }

    /// Sources to read, with the empty list resolved to standard input
    pub fn effective_sources(&self) -> Vec<InputSource> {
        if self.sources.is_empty() {
            vec![InputSource::Stdin]
        } else {
            self.sources.clone()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for source in &self.sources {
            if let InputSource::File(path) = source {
                if path.as_os_str().is_empty() {
                    return Err("Input file name cannot be empty".to_string());
                }
            }
        }
        Ok(())
    }
}
