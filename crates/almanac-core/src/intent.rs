//! What a question is asking for: which country, and which fact about it.

use strum::{Display, EnumIter};

use crate::{classify::classify, extract::extract_country};

/// The kind of information requested about a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum FactCategory {
  Capital,
  Population,
  Currency,
  Area,
  Language,
  Timezone,
  Flag,
  Borders,
  CallingCode,
  Region,
  Subregion,
  /// No specific fact was recognised; answer with a summary.
  #[default]
  General,
}

impl FactCategory {
  /// Human-readable field name used in "not available" messages.
  pub fn label(self) -> &'static str {
    match self {
      Self::Capital => "capital",
      Self::Population => "population",
      Self::Currency => "currency",
      Self::Area => "area",
      Self::Language => "language",
      Self::Timezone => "timezone",
      Self::Flag => "flag",
      Self::Borders => "borders",
      Self::CallingCode => "calling code",
      Self::Region => "region",
      Self::Subregion => "subregion",
      Self::General => "general information",
    }
  }
}

/// The result of reading a question: a candidate country name (not yet
/// checked against any data) and the requested fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedIntent {
  pub country_candidate: Option<String>,
  pub fact_category:     FactCategory,
}

impl ExtractedIntent {
  /// Derive the intent from a raw query. Deterministic; no I/O.
  pub fn from_query(query: &str) -> Self {
    Self {
      country_candidate: extract_country(query),
      fact_category:     classify(query),
    }
  }
}
