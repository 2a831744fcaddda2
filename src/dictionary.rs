
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::errors::PuzzleError;
use crate::phones::{phone_set, Phone};

/// One `[pronunciation, word]` pair as it sits in the dictionary file.
#[derive(Deserialize)]
struct RawPair(Vec<String>, String);

/// The precomputed game dictionary: pronunciations grouped by their set of
/// distinct phones. Built offline, loaded once per process, read-only after.
pub struct GameDictionary {
  pub entries: HashMap<Vec<Phone>, Vec<(Vec<Phone>, String)>>,
}

impl GameDictionary {
  /// Loads the JSON emitted by the offline pipeline. Keys are string renderings
  /// of the sorted phone tuple, e.g. `"('s', 't', 'ɛ')"`; values are lists of
  /// `[[phone, ...], word]` pairs.
  pub fn load(path: impl AsRef<Path>) -> Result<GameDictionary, PuzzleError> {
    let raw: HashMap<String, Vec<RawPair>> =
      serde_json::from_reader(BufReader::new(File::open(path)?))?;

    let mut entries = HashMap::new();
    for (raw_key, raw_pairs) in raw {
      let key = parse_tuple_key(&raw_key)?;
      let mut pairs = Vec::with_capacity(raw_pairs.len());
      for RawPair(pron, word) in raw_pairs {
        let pron = pron.iter().map(|t| phone_from_token(t)).collect::<Result<Vec<_>, _>>()?;
        pairs.push((pron, word));
      }
      entries.insert(key, pairs);
    }

    Ok(GameDictionary { entries })
  }

  /// Groups a flat (pronunciation, word) list by phone set. This is the same
  /// grouping the offline pipeline applies before serializing.
  pub fn from_word_list<I>(words: I) -> GameDictionary
  where I: IntoIterator<Item = (Vec<Phone>, String)> {
    let mut entries: HashMap<Vec<Phone>, Vec<(Vec<Phone>, String)>> = HashMap::new();
    for (pron, word) in words {
      entries.entry(phone_set(&pron)).or_default().push((pron, word));
    }
    GameDictionary { entries }
  }

  pub fn lookup(&self, key: &[Phone]) -> Option<&[(Vec<Phone>, String)]> {
    self.entries.get(key).map(|v| v.as_slice())
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

fn phone_from_token(token: &str) -> Result<Phone, PuzzleError> {
  Phone::from_ipa(token)
    .ok_or_else(|| PuzzleError::DictionaryFormat(format!("unrecognized phone: {:?}", token)))
}

/// Parses a key like `"('d', 'i', 'ʃ')"`. The file's sort order is not
/// trusted; the key is re-sorted so lookups built from `Phone`'s own ordering
/// always line up.
fn parse_tuple_key(raw: &str) -> Result<Vec<Phone>, PuzzleError> {
  lazy_static! {
    static ref QUOTED_RE: Regex = Regex::new(r"'([^']+)'").unwrap();
  }

  let mut key = Vec::new();
  for cap in QUOTED_RE.captures_iter(raw) {
    key.push(phone_from_token(&cap[1])?);
  }
  if key.is_empty() {
    return Err(PuzzleError::DictionaryFormat(format!("unparseable key: {:?}", raw)));
  }
  key.sort();
  Ok(key)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;
  use crate::phones::tokenize;
  use Phone::*;

  #[test]
  fn test_parse_tuple_key() {
    assert_eq!(parse_tuple_key("('s', 't', 'ɛ')").unwrap(), vec![S, T, Eh]);
    assert_eq!(parse_tuple_key("('tʃ',)").unwrap(), vec![Ch]);
  }

  #[test]
  fn test_parse_tuple_key_resorts() {
    assert_eq!(parse_tuple_key("('ɛ', 't', 's')").unwrap(), vec![S, T, Eh]);
  }

  #[test]
  fn test_parse_tuple_key_rejects_garbage() {
    assert!(parse_tuple_key("nonsense").is_err());
    assert!(parse_tuple_key("('q',)").is_err());
  }

  #[test]
  fn test_from_word_list_groups_by_phone_set() {
    let dict = GameDictionary::from_word_list(vec![
      (vec![T, Eh, S, T], "test".to_string()),
      (vec![S, Eh, T], "set".to_string()),
      (vec![T, Eh, T, S], "tets".to_string()),
    ]);

    assert_eq!(dict.len(), 1);
    let pairs = dict.lookup(&[S, T, Eh]).unwrap();
    assert_eq!(pairs.len(), 3);
  }

  #[test]
  fn test_load_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
      file,
      r#"{{"('s', 't', 'ɛ')": [[["t", "ɛ", "s", "t"], "test"], [["s", "ɛ", "t"], "set"]], "('dʒ', 'ʌ')": [[["dʒ", "ʌ", "dʒ"], "judge"]]}}"#
    ).unwrap();

    let dict = GameDictionary::load(file.path()).unwrap();
    assert_eq!(dict.len(), 2);

    let key = phone_set(&tokenize("tɛst").unwrap());
    let pairs = dict.lookup(&key).unwrap();
    assert_eq!(pairs[0], (vec![T, Eh, S, T], "test".to_string()));
    assert_eq!(pairs[1], (vec![S, Eh, T], "set".to_string()));

    assert_eq!(dict.lookup(&[Jh, Ah]).unwrap(), &[(vec![Jh, Ah, Jh], "judge".to_string())][..]);
  }

  #[test]
  fn test_load_missing_file() {
    assert!(matches!(
      GameDictionary::load("no/such/game-dict.json"),
      Err(PuzzleError::DictionaryIo(_))
    ));
  }

  #[test]
  fn test_load_rejects_unknown_phone() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"('ξ',)": [[["ξ"], "xi"]]}}"#).unwrap();
    assert!(matches!(
      GameDictionary::load(file.path()),
      Err(PuzzleError::DictionaryFormat(_))
    ));
  }
}
