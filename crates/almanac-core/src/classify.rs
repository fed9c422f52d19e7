//! Fact category classification by keyword.
//!
//! An ordered list of rules, each a set of keywords. The first rule with a
//! keyword in the query wins, so the order here is the tie-break order.

use crate::intent::FactCategory;

struct Rule {
  category: FactCategory,
  keywords: &'static [&'static str],
}

const RULES: &[Rule] = &[
  Rule {
    category: FactCategory::Capital,
    keywords: &["capital"],
  },
  Rule {
    category: FactCategory::Population,
    keywords: &["population", "how many people", "inhabitants", "populous"],
  },
  Rule {
    category: FactCategory::Currency,
    keywords: &["currency", "currencies", "money"],
  },
  Rule {
    category: FactCategory::Area,
    keywords: &["area", "size", "how big", "square kilomet"],
  },
  Rule {
    category: FactCategory::Language,
    keywords: &["language", "spoken", "speak"],
  },
  Rule {
    category: FactCategory::Timezone,
    keywords: &["timezone", "time zone", "time-zone"],
  },
  Rule {
    category: FactCategory::Flag,
    keywords: &["flag"],
  },
  Rule {
    category: FactCategory::Borders,
    keywords: &["border", "neighbo"],
  },
  Rule {
    category: FactCategory::CallingCode,
    keywords: &[
      "calling code",
      "dialing code",
      "dialling code",
      "dial code",
      "phone code",
      "country code",
      "idd",
    ],
  },
  Rule {
    category: FactCategory::Region,
    keywords: &["region", "continent"],
  },
  Rule {
    category: FactCategory::Subregion,
    keywords: &["subregion"],
  },
];

/// Pick the fact category `query` asks about, or
/// [`FactCategory::General`] when no keyword matches.
pub fn classify(query: &str) -> FactCategory {
  let lowered = query.to_lowercase();
  RULES
    .iter()
    .find(|rule| rule.keywords.iter().any(|k| contains_at_word_start(&lowered, k)))
    .map(|rule| rule.category)
    .unwrap_or_default()
}

/// Every keyword of every rule, in rule order.
pub(crate) fn keywords() -> impl Iterator<Item = &'static str> {
  RULES.iter().flat_map(|rule| rule.keywords.iter().copied())
}

/// Substring containment, restricted to matches that begin a word.
///
/// "languages" matches `language`, but "subregion" does not match `region`.
fn contains_at_word_start(haystack: &str, keyword: &str) -> bool {
  haystack.match_indices(keyword).any(|(i, _)| {
    haystack[..i]
      .chars()
      .next_back()
      .is_none_or(|c| !c.is_alphanumeric())
  })
}
