//! Country name extraction by stripping known question phrasing.
//!
//! This is a rule-based stand-in for named-entity recognition: everything
//! that looks like question scaffolding is removed and whatever remains is
//! taken as the country name. No dictionary of countries is consulted, so
//! the result may not be a real country; the resolver reports that case.

use crate::classify::keywords;

/// Question scaffolding removed from the query, as whole-word sequences.
///
/// Ordered so that every fragment comes before any shorter fragment it
/// contains. The classifier's keywords are removed separately, see
/// [`remove_keyword`].
const FRAGMENTS: &[&str] = &[
  // Full interrogative phrases.
  "what is the capital city of",
  "what is the capital of",
  "what's the capital of",
  "tell me the capital of",
  "what is the population of",
  "what's the population of",
  "tell me the population of",
  "how many people live in",
  "what is the currency of",
  "what currency does",
  "which currency is used in",
  "what is the area of",
  "give me the area of",
  "how big is",
  "who are the languages spoken in",
  "what languages are spoken in",
  "what language is spoken in",
  "what is the timezone of",
  "what timezone is",
  "what time zone is",
  "what is the flag of",
  "what does the flag of",
  "look like",
  "which countries border",
  "what countries border",
  "what is the calling code of",
  "what is the dialing code for",
  // Category keywords beyond what the classifier rules cover.
  "capital city",
  // Filler.
  "what's",
  "what",
  "which",
  "who",
  "how",
  "is",
  "are",
  "does",
  "do",
  "tell",
  "me",
  "give",
  "show",
  "please",
  "the",
  "a",
  "an",
  "spoken",
  "speak",
  "use",
  "uses",
  "used",
  "live",
  "people",
  "many",
  "big",
  "countries",
];

const STOP_WORDS: &[&str] = &["of", "for", "about", "in", "on", "at", "with"];

/// Isolate the likely country name in `query`.
///
/// Returns the remaining words joined by single spaces, lowercased, or
/// `None` when nothing is left. Idempotent: feeding the output back in
/// returns it unchanged.
pub fn extract_country(query: &str) -> Option<String> {
  let lowered = query.to_lowercase();
  let mut words: Vec<&str> = lowered
    .split_whitespace()
    .map(trim_word)
    .filter(|w| !w.is_empty())
    .collect();

  // Removing one fragment can bring the words of another together, so
  // repeat until nothing changes.
  loop {
    let before = words.len();
    for fragment in FRAGMENTS {
      let pattern: Vec<&str> = fragment.split(' ').collect();
      remove_sequence(&mut words, &pattern);
    }
    for keyword in keywords() {
      remove_keyword(&mut words, keyword);
    }
    words.retain(|w| !STOP_WORDS.contains(w));
    if words.len() == before {
      break;
    }
  }

  (!words.is_empty()).then(|| words.join(" "))
}

/// Strip surrounding punctuation and a trailing possessive, repeatedly,
/// so `(kenya)'s` becomes `kenya`.
fn trim_word(mut word: &str) -> &str {
  loop {
    let trimmed = word.trim_matches(|c: char| {
      matches!(
        c,
        '?' | '!' | '.' | ',' | ';' | ':' | '"' | '\'' | '(' | ')' | '‘' | '’'
      )
    });
    let stripped = trimmed
      .strip_suffix("'s")
      .or_else(|| trimmed.strip_suffix("’s"))
      .unwrap_or(trimmed);
    if stripped == word {
      return word;
    }
    word = stripped;
  }
}

/// Remove every occurrence of `pattern` as a contiguous run of words.
fn remove_sequence(words: &mut Vec<&str>, pattern: &[&str]) {
  let n = pattern.len();
  let mut i = 0;
  while i + n <= words.len() {
    if words[i..i + n] == *pattern {
      words.drain(i..i + n);
    } else {
      i += 1;
    }
  }
}

/// Remove every occurrence of a classifier keyword.
///
/// Matches the way [`classify`](crate::classify::classify) does: leading
/// words must be equal and the last word need only start with the keyword's
/// last word, so `calling code` also removes "calling codes" and
/// `square kilomet` removes "square kilometres".
fn remove_keyword(words: &mut Vec<&str>, keyword: &str) {
  let pattern: Vec<&str> = keyword.split(' ').collect();
  let Some((last, leading)) = pattern.split_last() else {
    return;
  };
  let n = pattern.len();
  let mut i = 0;
  while i + n <= words.len() {
    let run = &words[i..i + n];
    if run[..n - 1] == *leading && run[n - 1].starts_with(*last) {
      words.drain(i..i + n);
    } else {
      i += 1;
    }
  }
}
