//! CountryRecord — the normalised view of one country from the data source.
//!
//! Every field is individually optional. A record with nothing but a name is
//! still a valid record; consumers treat absence as a normal state, not an
//! error.

use std::collections::BTreeMap;

// ─── Sub-types ───────────────────────────────────────────────────────────────

/// A currency in circulation, keyed by its ISO 4217 code in
/// [`CountryRecord::currencies`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Currency {
  /// Display name, e.g. "Kenyan shilling".
  pub name:   Option<String>,
  pub symbol: Option<String>,
}

/// International direct-dialling prefix, split the way the data source
/// reports it: a root ("+2") and one or more suffixes ("54").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallingCode {
  pub root:     Option<String>,
  pub suffixes: Vec<String>,
}

impl CallingCode {
  /// Every full dialling code (root + suffix). Empty if either part is
  /// missing.
  pub fn full_codes(&self) -> Vec<String> {
    match &self.root {
      Some(root) if !root.is_empty() => self
        .suffixes
        .iter()
        .map(|suffix| format!("{root}{suffix}"))
        .collect(),
      _ => Vec::new(),
    }
  }
}

// ─── CountryRecord ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryRecord {
  /// Common name, e.g. "Kenya".
  pub name:          String,
  /// Official name, e.g. "Republic of Kenya".
  pub official_name: Option<String>,
  /// Capital cities in source order; some countries list more than one.
  pub capital:       Vec<String>,
  pub population:    Option<u64>,
  /// ISO 4217 code → currency.
  pub currencies:    BTreeMap<String, Currency>,
  /// Area in square kilometres.
  pub area:          Option<f64>,
  /// ISO 639-3 code → display name.
  pub languages:     BTreeMap<String, String>,
  pub timezones:     Vec<String>,
  pub flag_emoji:    Option<String>,
  pub flag_url:      Option<String>,
  /// ISO 3166-1 alpha-3 codes of neighbouring countries. Empty means the
  /// country has no land borders, not that the data is missing.
  pub borders:       Vec<String>,
  pub calling_code:  CallingCode,
  pub region:        Option<String>,
  pub subregion:     Option<String>,
  pub continents:    Vec<String>,
}

impl CountryRecord {
  /// A record carrying only a common name.
  pub fn named(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Self::default()
    }
  }

  /// Display names of all currencies, falling back to the code when the
  /// source gives no name.
  pub fn currency_names(&self) -> Vec<String> {
    self
      .currencies
      .iter()
      .map(|(code, currency)| match &currency.name {
        Some(name) if !name.is_empty() => name.clone(),
        _ => code.clone(),
      })
      .collect()
  }

  pub fn first_capital(&self) -> Option<&str> {
    self
      .capital
      .iter()
      .map(String::as_str)
      .find(|c| !c.is_empty())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn currency_names_fall_back_to_code() {
    let mut record = CountryRecord::named("Zimbabwe");
    record.currencies.insert(
      "USD".into(),
      Currency {
        name:   Some("United States dollar".into()),
        symbol: Some("$".into()),
      },
    );
    record.currencies.insert("ZWL".into(), Currency::default());

    assert_eq!(
      record.currency_names(),
      vec!["United States dollar".to_string(), "ZWL".to_string()]
    );
  }

  #[test]
  fn calling_code_needs_a_root() {
    let code = CallingCode {
      root:     None,
      suffixes: vec!["54".into()],
    };
    assert!(code.full_codes().is_empty());

    let code = CallingCode {
      root:     Some("+2".into()),
      suffixes: vec!["54".into()],
    };
    assert_eq!(code.full_codes(), vec!["+254".to_string()]);
  }

  #[test]
  fn first_capital_skips_blank_entries() {
    let mut record = CountryRecord::named("Somewhere");
    assert_eq!(record.first_capital(), None);

    record.capital = vec![String::new(), "Pretoria".into()];
    assert_eq!(record.first_capital(), Some("Pretoria"));
  }
}
