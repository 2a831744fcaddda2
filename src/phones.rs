
use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::IResult;
use nom::Parser;

// tɛst
// skɛptɪkəl
// dʒʌdʒmənt
/// One phone of the game's guessing alphabet. The inventory is the IPA image of
/// the ARPABET symbols the dictionary pipeline emits, so every pronunciation in
/// a well-formed game dictionary is expressible here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phone {
  B, Ch, D, Dh, F, G, H, Jh, K, L, M, N, Ng, P, R, S, Sh, T, Th, V, W, Y, Z, Zh,
  Aa, Ae, Ah, Ao, Aw, Ay, Eh, Er, Ey, Ih, Iy, Ow, Oy, Uh, Uw,
}

impl Phone {
  pub fn to_ipa(&self) -> String {
    use Phone::*;
    (match self {
      B => "b", Ch => "tʃ", D => "d", Dh => "ð", F => "f", G => "g",
      H => "h", Jh => "dʒ", K => "k", L => "l", M => "m", N => "n",
      Ng => "ŋ", P => "p", R => "ɹ", S => "s", Sh => "ʃ", T => "t",
      Th => "θ", V => "v", W => "w", Y => "j", Z => "z", Zh => "ʒ",
      Aa => "ɑ", Ae => "æ", Ah => "ʌ", Ao => "ɔ", Aw => "aʊ", Ay => "aɪ",
      Eh => "ɛ", Er => "ɹ̩", Ey => "eɪ", Ih => "ɪ", Iy => "i", Ow => "oʊ",
      Oy => "ɔɪ", Uh => "ʊ", Uw => "u",
    }).to_string()
  }

  pub fn from_ipa(text: &str) -> Option<Self> {
    use Phone::*;
    Some(match text {
      "b" => B, "tʃ" => Ch, "d" => D, "ð" => Dh, "f" => F, "g" => G,
      "h" => H, "dʒ" => Jh, "k" => K, "l" => L, "m" => M, "n" => N,
      "ŋ" => Ng, "p" => P, "ɹ" => R, "s" => S, "ʃ" => Sh, "t" => T,
      "θ" => Th, "v" => V, "w" => W, "j" => Y, "z" => Z, "ʒ" => Zh,
      "ɑ" => Aa, "æ" => Ae, "ʌ" => Ah, "ɔ" => Ao, "aʊ" => Aw, "aɪ" => Ay,
      "ɛ" => Eh, "ɹ̩" => Er, "eɪ" => Ey, "ɪ" => Ih, "i" => Iy, "oʊ" => Ow,
      "ɔɪ" => Oy, "ʊ" => Uh, "u" => Uw, _ => return None
    })
  }
}

impl fmt::Display for Phone {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.to_ipa())
  }
}

/// The sorted, deduplicated set of phones in a pronunciation. This is the
/// grouping key of the game dictionary: two words whose pronunciations use the
/// same phones in any order or multiplicity share a key.
pub fn phone_set(pron: &[Phone]) -> Vec<Phone> {
  pron.iter().copied().collect::<BTreeSet<Phone>>().into_iter().collect()
}

pub fn render(pron: &[Phone]) -> String {
  pron.iter().map(|p| p.to_ipa()).join("")
}

pub fn parse_phone(i: &str) -> IResult<&str, Phone> {
  use Phone::*;
  // digraphs before their single-symbol prefixes
  alt((
    alt((
      tag("tʃ").map(|_| Ch),
      tag("dʒ").map(|_| Jh),
      tag("aɪ").map(|_| Ay),
      tag("eɪ").map(|_| Ey),
      tag("ɔɪ").map(|_| Oy),
      tag("oʊ").map(|_| Ow),
      tag("aʊ").map(|_| Aw),
      tag("ɹ̩").map(|_| Er),
    )),
    alt((
      tag("b").map(|_| B),
      tag("d").map(|_| D),
      tag("f").map(|_| F),
      tag("g").map(|_| G),
      tag("h").map(|_| H),
      tag("j").map(|_| Y),
      tag("k").map(|_| K),
      tag("l").map(|_| L),
      tag("m").map(|_| M),
      tag("n").map(|_| N),
      tag("p").map(|_| P),
    )),
    alt((
      tag("ɹ").map(|_| R),
      tag("s").map(|_| S),
      tag("ʃ").map(|_| Sh),
      tag("t").map(|_| T),
      tag("θ").map(|_| Th),
      tag("ð").map(|_| Dh),
      tag("v").map(|_| V),
      tag("w").map(|_| W),
      tag("z").map(|_| Z),
      tag("ʒ").map(|_| Zh),
      tag("ŋ").map(|_| Ng),
    )),
    alt((
      tag("i").map(|_| Iy),
      tag("ɪ").map(|_| Ih),
      tag("ɛ").map(|_| Eh),
      tag("æ").map(|_| Ae),
      tag("ɑ").map(|_| Aa),
      tag("ɔ").map(|_| Ao),
      tag("ʊ").map(|_| Uh),
      tag("u").map(|_| Uw),
      tag("ʌ").map(|_| Ah),
    )),
  ))(i)
}

/// A guess containing a word character that is not in the phone inventory.
/// Recovered by the caller, never propagated: such a guess can match nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedGuess {
  pub symbol: char,
}

impl fmt::Display for MalformedGuess {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "unrecognized IPA symbol: {}", self.symbol)
  }
}

/// Tokenizes raw guess text into phones, taking digraphs as single tokens.
/// Punctuation and whitespace are skipped; an alphanumeric character outside
/// the inventory makes the whole guess malformed.
pub fn tokenize(raw: &str) -> Result<Vec<Phone>, MalformedGuess> {
  let mut rest = raw;
  let mut phones = Vec::new();

  while let Some(c) = rest.chars().next() {
    match parse_phone(rest) {
      Ok((i, phone)) => {
        phones.push(phone);
        rest = i;
      },
      Err(_) => {
        if c.is_alphanumeric() {
          return Err(MalformedGuess { symbol: c });
        }
        rest = &rest[c.len_utf8()..];
      }
    }
  }

  Ok(phones)
}

#[cfg(test)]
mod tests {
  use super::*;
  use Phone::*;

  #[test]
  fn test_parse_single() {
    assert_eq!(parse_phone("tɛst"), Ok(("ɛst", T)));
  }

  #[test]
  fn test_digraph_beats_prefix() {
    assert_eq!(parse_phone("tʃɪn"), Ok(("ɪn", Ch)));
    assert_eq!(parse_phone("dʒʌdʒ"), Ok(("ʌdʒ", Jh)));
    assert_eq!(parse_phone("ɹ̩li"), Ok(("li", Er)));
  }

  #[test]
  fn test_tokenize_word() {
    assert_eq!(tokenize("tɛst"), Ok(vec![T, Eh, S, T]));
    assert_eq!(tokenize("skɛptɪk"), Ok(vec![S, K, Eh, P, T, Ih, K]));
  }

  #[test]
  fn test_tokenize_round_trip_all_digraphs() {
    let fixture = "aɪdʒeɪɔɪtʃoʊaʊɹ̩";
    let phones = tokenize(fixture).unwrap();
    assert_eq!(phones, vec![Ay, Jh, Ey, Oy, Ch, Ow, Aw, Er]);
    assert_eq!(render(&phones), fixture);
  }

  #[test]
  fn test_tokenize_skips_punctuation() {
    assert_eq!(tokenize(" tɛ st! "), Ok(vec![T, Eh, S, T]));
  }

  #[test]
  fn test_tokenize_rejects_unknown_letters() {
    assert_eq!(tokenize("txst"), Err(MalformedGuess { symbol: 'x' }));
  }

  #[test]
  fn test_phone_set_sorts_and_dedups() {
    assert_eq!(phone_set(&[T, Eh, S, T]), vec![S, T, Eh]);
  }

  #[test]
  fn test_ipa_round_trip_inventory() {
    for ipa in ["b", "tʃ", "dʒ", "ŋ", "ɹ̩", "aʊ", "æ", "u"] {
      let phone = Phone::from_ipa(ipa).unwrap();
      assert_eq!(phone.to_ipa(), ipa);
    }
  }
}
