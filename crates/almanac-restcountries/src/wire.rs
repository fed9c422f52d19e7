//! REST Countries v3.1 response shapes and their conversion into
//! [`CountryRecord`].
//!
//! Only the consumed fields are declared; everything else in the payload is
//! ignored. Every field is optional on the wire, so a sparse entry still
//! decodes.

use std::collections::BTreeMap;

use almanac_core::country::{CallingCode, CountryRecord, Currency};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireCountry {
  #[serde(default)]
  name:       WireName,
  #[serde(default)]
  capital:    Vec<String>,
  population: Option<u64>,
  #[serde(default)]
  currencies: BTreeMap<String, WireCurrency>,
  area:       Option<f64>,
  #[serde(default)]
  languages:  BTreeMap<String, String>,
  #[serde(default)]
  timezones:  Vec<String>,
  /// Flag emoji.
  flag:       Option<String>,
  #[serde(default)]
  flags:      WireFlags,
  #[serde(default)]
  borders:    Vec<String>,
  #[serde(default)]
  idd:        WireIdd,
  region:     Option<String>,
  subregion:  Option<String>,
  #[serde(default)]
  continents: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireName {
  #[serde(default)]
  common:   String,
  official: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireCurrency {
  name:   Option<String>,
  symbol: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireFlags {
  png: Option<String>,
  svg: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireIdd {
  root:     Option<String>,
  #[serde(default)]
  suffixes: Vec<String>,
}

impl From<WireCountry> for CountryRecord {
  fn from(w: WireCountry) -> Self {
    CountryRecord {
      name:          w.name.common,
      official_name: w.name.official,
      capital:       w.capital,
      population:    w.population,
      currencies:    w
        .currencies
        .into_iter()
        .map(|(code, c)| {
          (code, Currency {
            name:   c.name,
            symbol: c.symbol,
          })
        })
        .collect(),
      area:          w.area,
      languages:     w.languages,
      timezones:     w.timezones,
      flag_emoji:    w.flag,
      flag_url:      w.flags.png.or(w.flags.svg),
      borders:       w.borders,
      calling_code:  CallingCode {
        root:     w.idd.root,
        suffixes: w.idd.suffixes,
      },
      region:        w.region,
      subregion:     w.subregion,
      continents:    w.continents,
    }
  }
}
