
use std::fmt;
use std::io;

/// Fatal conditions only. Guess outcomes are ordinary return values and never
/// surface here.
#[derive(Debug)]
pub enum PuzzleError {
  /// The dictionary has no key with exactly seven distinct phones.
  NoValidChart,
  /// No chart reached the minimum point total within the retry bound.
  DictionaryTooSparse { attempts: u32 },
  DictionaryIo(io::Error),
  DictionaryFormat(String),
}

impl fmt::Display for PuzzleError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    use PuzzleError::*;
    match self {
      NoValidChart => write!(f, "dictionary contains no seven-phone key"),
      DictionaryTooSparse { attempts } =>
        write!(f, "no chart reached the minimum point total in {} attempts", attempts),
      DictionaryIo(e) => write!(f, "could not read game dictionary: {}", e),
      DictionaryFormat(msg) => write!(f, "malformed game dictionary: {}", msg),
    }
  }
}

impl std::error::Error for PuzzleError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      PuzzleError::DictionaryIo(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for PuzzleError {
  fn from(e: io::Error) -> Self {
    PuzzleError::DictionaryIo(e)
  }
}

impl From<serde_json::Error> for PuzzleError {
  fn from(e: serde_json::Error) -> Self {
    PuzzleError::DictionaryFormat(e.to_string())
  }
}
