//! Fact formatting: [`CountryRecord`] + [`FactCategory`] → answer sentence.
//!
//! [`render_fact`] reports a missing field as an error so callers can react
//! to it (the responder does); [`format_fact`] is the total version that
//! turns that error into its "not available" sentence.

use crate::{
  Error, Result,
  country::CountryRecord,
  intent::FactCategory,
};

/// Calling-code lists longer than this are summarised by their root.
const MAX_LISTED_CALLING_CODES: usize = 10;

/// Render the answer for `category`. Never fails; a missing field yields a
/// "not available" sentence scoped to that field.
pub fn format_fact(record: &CountryRecord, category: FactCategory) -> String {
  render_fact(record, category).unwrap_or_else(|e| e.to_string())
}

/// Render the answer for `category`, or report which field was missing.
///
/// Only ever returns [`Error::FieldNotAvailable`] or [`Error::LimitedData`].
pub fn render_fact(
  record: &CountryRecord,
  category: FactCategory,
) -> Result<String> {
  let name = display_name(record);
  let missing = || Error::FieldNotAvailable {
    country: name.to_string(),
    field:   category.label(),
  };

  match category {
    FactCategory::Capital => record
      .first_capital()
      .map(|capital| format!("The capital of {name} is {capital}."))
      .ok_or_else(missing),

    FactCategory::Population => record
      .population
      .map(|p| format!("The population of {name} is {}.", group_thousands(p)))
      .ok_or_else(missing),

    FactCategory::Currency => {
      let names = record.currency_names();
      match names.len() {
        0 => Err(missing()),
        1 => Ok(format!("The currency of {name} is {}.", names[0])),
        _ => Ok(format!(
          "The currencies of {name} are {}.",
          names.join(", ")
        )),
      }
    }

    FactCategory::Area => record
      .area
      .and_then(format_area)
      .map(|area| format!("The area of {name} is {area} sq km."))
      .ok_or_else(missing),

    FactCategory::Language => {
      let languages: Vec<&str> =
        record.languages.values().map(String::as_str).collect();
      match languages.len() {
        0 => Err(missing()),
        1 => Ok(format!(
          "The language spoken in {name} is {}.",
          languages[0]
        )),
        _ => Ok(format!(
          "The languages spoken in {name} are {}.",
          languages.join(", ")
        )),
      }
    }

    FactCategory::Timezone => match record.timezones.len() {
      0 => Err(missing()),
      1 => Ok(format!(
        "The timezone of {name} is {}.",
        record.timezones[0]
      )),
      _ => Ok(format!(
        "The timezones of {name} are {}.",
        record.timezones.join(", ")
      )),
    },

    FactCategory::Flag => {
      let emoji = non_blank(&record.flag_emoji);
      let url = non_blank(&record.flag_url);
      match (emoji, url) {
        (Some(emoji), Some(url)) => {
          Ok(format!("The flag of {name} is {emoji} (image: {url})."))
        }
        (Some(emoji), None) => Ok(format!("The flag of {name} is {emoji}.")),
        (None, Some(url)) => {
          Ok(format!("The flag of {name} can be seen at {url}."))
        }
        (None, None) => Err(missing()),
      }
    }

    // An empty list is a real answer (island nations), not missing data.
    FactCategory::Borders => {
      if record.borders.is_empty() {
        Ok(format!("{name} has no land borders."))
      } else {
        Ok(format!("{name} borders {}.", record.borders.join(", ")))
      }
    }

    FactCategory::CallingCode => {
      let codes = record.calling_code.full_codes();
      match codes.len() {
        0 => Err(missing()),
        1 => Ok(format!("The calling code of {name} is {}.", codes[0])),
        n if n <= MAX_LISTED_CALLING_CODES => Ok(format!(
          "The calling codes of {name} are {}.",
          codes.join(", ")
        )),
        n => Ok(format!(
          "The calling code of {name} is {} followed by one of {n} \
           area-specific suffixes.",
          record.calling_code.root.as_deref().unwrap_or_default()
        )),
      }
    }

    FactCategory::Region => non_blank(&record.region)
      .map(|region| format!("{name} is in {region}."))
      .ok_or_else(missing),

    FactCategory::Subregion => non_blank(&record.subregion)
      .map(|subregion| format!("{name} is in the {subregion} subregion."))
      .ok_or_else(missing),

    FactCategory::General => general_summary(record, name),
  }
}

fn general_summary(record: &CountryRecord, name: &str) -> Result<String> {
  let mut lines = Vec::new();
  if let Some(capital) = record.first_capital() {
    lines.push(format!("- Capital: {capital}"));
  }
  if let Some(population) = record.population {
    lines.push(format!("- Population: {}", group_thousands(population)));
  }
  if let Some(region) = non_blank(&record.region) {
    lines.push(format!("- Region: {region}"));
  }
  let currencies = record.currency_names();
  if !currencies.is_empty() {
    lines.push(format!("- Currency: {}", currencies.join(", ")));
  }
  if let Some(area) = record.area.and_then(format_area) {
    lines.push(format!("- Area: {area} sq km"));
  }

  if lines.is_empty() {
    return Err(Error::LimitedData(name.to_string()));
  }
  Ok(format!("Here is an overview of {name}:\n{}", lines.join("\n")))
}

/// Describe every present field of `record` in prose, for use as grounding
/// context in a language-model prompt.
pub fn context_summary(record: &CountryRecord) -> String {
  let name = display_name(record);
  let mut lines = match non_blank(&record.official_name) {
    Some(official) => vec![format!("Country: {name} (officially {official})")],
    None => vec![format!("Country: {name}")],
  };

  if !record.capital.is_empty() {
    lines.push(format!("Capital: {}", record.capital.join(", ")));
  }
  if let Some(population) = record.population {
    lines.push(format!("Population: {}", group_thousands(population)));
  }
  match (non_blank(&record.region), non_blank(&record.subregion)) {
    (Some(region), Some(subregion)) => {
      lines.push(format!("Region: {region} ({subregion})"))
    }
    (Some(region), None) => lines.push(format!("Region: {region}")),
    (None, Some(subregion)) => lines.push(format!("Subregion: {subregion}")),
    (None, None) => {}
  }
  if !record.continents.is_empty() {
    lines.push(format!("Continents: {}", record.continents.join(", ")));
  }
  if !record.currencies.is_empty() {
    let currencies: Vec<String> = record
      .currencies
      .iter()
      .map(|(code, c)| match (&c.name, &c.symbol) {
        (Some(n), Some(s)) => format!("{n} ({code}, {s})"),
        (Some(n), None) => format!("{n} ({code})"),
        _ => code.clone(),
      })
      .collect();
    lines.push(format!("Currencies: {}", currencies.join(", ")));
  }
  if let Some(area) = record.area.and_then(format_area) {
    lines.push(format!("Area: {area} sq km"));
  }
  if !record.languages.is_empty() {
    let languages: Vec<&str> =
      record.languages.values().map(String::as_str).collect();
    lines.push(format!("Languages: {}", languages.join(", ")));
  }
  if !record.timezones.is_empty() {
    lines.push(format!("Timezones: {}", record.timezones.join(", ")));
  }
  if record.borders.is_empty() {
    lines.push("Land borders: none".to_string());
  } else {
    lines.push(format!("Land borders: {}", record.borders.join(", ")));
  }
  let codes = record.calling_code.full_codes();
  if !codes.is_empty() && codes.len() <= MAX_LISTED_CALLING_CODES {
    lines.push(format!("Calling codes: {}", codes.join(", ")));
  } else if let Some(root) = non_blank(&record.calling_code.root) {
    lines.push(format!("Calling code prefix: {root}"));
  }
  if let Some(emoji) = non_blank(&record.flag_emoji) {
    lines.push(format!("Flag: {emoji}"));
  }

  lines.join("\n")
}

// ─── Number formatting ───────────────────────────────────────────────────────

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
  let digits = n.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}

/// Area with grouped thousands and at most two decimals, trailing zeros
/// dropped: `580367.0` → `"580,367"`, `0.44` → `"0.44"`.
///
/// `None` for negative or non-finite values.
pub fn format_area(area: f64) -> Option<String> {
  if !area.is_finite() || area < 0.0 {
    return None;
  }
  let rounded = (area * 100.0).round() / 100.0;
  let whole = rounded.trunc();
  let cents = ((rounded - whole) * 100.0).round() as u64;
  let whole = group_thousands(whole as u64);
  Some(match cents {
    0 => whole,
    c if c % 10 == 0 => format!("{whole}.{}", c / 10),
    c => format!("{whole}.{c:02}"),
  })
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn display_name(record: &CountryRecord) -> &str {
  match record.name.trim() {
    "" => "this country",
    name => name,
  }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
  value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;
  use crate::country::{CallingCode, Currency};

  fn kenya() -> CountryRecord {
    let mut record = CountryRecord::named("Kenya");
    record.official_name = Some("Republic of Kenya".into());
    record.capital = vec!["Nairobi".into()];
    record.population = Some(53_771_300);
    record.currencies.insert(
      "KES".into(),
      Currency {
        name:   Some("Kenyan shilling".into()),
        symbol: Some("Sh".into()),
      },
    );
    record.area = Some(580_367.0);
    record.languages.insert("eng".into(), "English".into());
    record.languages.insert("swa".into(), "Swahili".into());
    record.timezones = vec!["UTC+03:00".into()];
    record.flag_emoji = Some("🇰🇪".into());
    record.flag_url = Some("https://flagcdn.com/w320/ke.png".into());
    record.borders = vec!["ETH".into(), "SOM".into(), "SSD".into()];
    record.calling_code = CallingCode {
      root:     Some("+2".into()),
      suffixes: vec!["54".into()],
    };
    record.region = Some("Africa".into());
    record.subregion = Some("Eastern Africa".into());
    record.continents = vec!["Africa".into()];
    record
  }

  #[test]
  fn formats_each_category() {
    let k = kenya();
    let cases = [
      (FactCategory::Capital, "The capital of Kenya is Nairobi."),
      (FactCategory::Population, "The population of Kenya is 53,771,300."),
      (FactCategory::Currency, "The currency of Kenya is Kenyan shilling."),
      (FactCategory::Area, "The area of Kenya is 580,367 sq km."),
      (
        FactCategory::Language,
        "The languages spoken in Kenya are English, Swahili.",
      ),
      (FactCategory::Timezone, "The timezone of Kenya is UTC+03:00."),
      (
        FactCategory::Flag,
        "The flag of Kenya is 🇰🇪 (image: https://flagcdn.com/w320/ke.png).",
      ),
      (FactCategory::Borders, "Kenya borders ETH, SOM, SSD."),
      (FactCategory::CallingCode, "The calling code of Kenya is +254."),
      (FactCategory::Region, "Kenya is in Africa."),
      (FactCategory::Subregion, "Kenya is in the Eastern Africa subregion."),
    ];
    for (category, expected) in cases {
      assert_eq!(format_fact(&k, category), expected);
    }
  }

  #[test]
  fn general_summary_lists_present_fields() {
    let summary = format_fact(&kenya(), FactCategory::General);
    assert!(summary.starts_with("Here is an overview of Kenya:"));
    assert!(summary.contains("- Capital: Nairobi"));
    assert!(summary.contains("- Population: 53,771,300"));
    assert!(summary.contains("- Region: Africa"));
    assert!(summary.contains("- Currency: Kenyan shilling"));
    assert!(summary.contains("- Area: 580,367 sq km"));
  }

  #[test]
  fn general_summary_skips_absent_fields() {
    let mut record = CountryRecord::named("Tokelau");
    record.population = Some(1_411);
    let summary = format_fact(&record, FactCategory::General);
    assert_eq!(summary, "Here is an overview of Tokelau:\n- Population: 1,411");
  }

  #[test]
  fn every_category_is_total_over_an_empty_record() {
    let empty = CountryRecord::named("Nowhere");
    for category in FactCategory::iter() {
      let text = format_fact(&empty, category);
      assert!(!text.is_empty(), "{category}");
      match category {
        FactCategory::Borders => {
          assert_eq!(text, "Nowhere has no land borders.")
        }
        FactCategory::General => {
          assert_eq!(text, "Only limited data is available for Nowhere.")
        }
        _ => assert!(text.contains("not available"), "{category}: {text}"),
      }
    }
  }

  #[test]
  fn missing_field_is_reported_to_callers() {
    let empty = CountryRecord::named("Nowhere");
    let err = render_fact(&empty, FactCategory::Capital).unwrap_err();
    assert!(err.is_missing_data());
    assert_eq!(err.to_string(), "The capital of Nowhere is not available.");
  }

  #[test]
  fn no_borders_differs_from_not_found() {
    let island = CountryRecord::named("Iceland");
    let text = format_fact(&island, FactCategory::Borders);
    assert!(text.contains("no land borders"));
    assert_ne!(text, Error::CountryNotFound("Iceland".into()).to_string());
  }

  #[test]
  fn currency_without_name_uses_code() {
    let mut record = CountryRecord::named("Testland");
    record.currencies.insert("TST".into(), Currency::default());
    assert_eq!(
      format_fact(&record, FactCategory::Currency),
      "The currency of Testland is TST."
    );
  }

  #[test]
  fn flag_with_only_one_part() {
    let mut record = CountryRecord::named("France");
    record.flag_emoji = Some("🇫🇷".into());
    assert_eq!(
      format_fact(&record, FactCategory::Flag),
      "The flag of France is 🇫🇷."
    );

    record.flag_emoji = None;
    record.flag_url = Some("https://flagcdn.com/w320/fr.png".into());
    assert_eq!(
      format_fact(&record, FactCategory::Flag),
      "The flag of France can be seen at https://flagcdn.com/w320/fr.png."
    );
  }

  #[test]
  fn long_calling_code_lists_are_summarised() {
    let mut record = CountryRecord::named("United States");
    record.calling_code = CallingCode {
      root:     Some("+1".into()),
      suffixes: (201..=230).map(|n| n.to_string()).collect(),
    };
    assert_eq!(
      format_fact(&record, FactCategory::CallingCode),
      "The calling code of United States is +1 followed by one of 30 \
       area-specific suffixes."
    );

    record.calling_code.suffixes = vec!["242".into(), "246".into()];
    assert_eq!(
      format_fact(&record, FactCategory::CallingCode),
      "The calling codes of United States are +1242, +1246."
    );
  }

  #[test]
  fn calling_code_without_suffixes_is_missing() {
    let mut record = CountryRecord::named("Antarctica");
    record.calling_code.root = Some("+6".into());
    assert!(
      format_fact(&record, FactCategory::CallingCode).contains("not available")
    );
  }

  #[test]
  fn blank_name_still_reads() {
    let record = CountryRecord::default();
    assert_eq!(
      format_fact(&record, FactCategory::Capital),
      "The capital of this country is not available."
    );
  }

  #[test]
  fn thousands_grouping() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(214_300_000), "214,300,000");
  }

  #[test]
  fn area_formatting() {
    assert_eq!(format_area(923_768.0).as_deref(), Some("923,768"));
    assert_eq!(format_area(0.44).as_deref(), Some("0.44"));
    assert_eq!(format_area(2.5).as_deref(), Some("2.5"));
    assert_eq!(format_area(1_234.567).as_deref(), Some("1,234.57"));
    assert_eq!(format_area(-1.0), None);
    assert_eq!(format_area(f64::NAN), None);
  }

  #[test]
  fn context_summary_mentions_everything_present() {
    let summary = context_summary(&kenya());
    for needle in [
      "Country: Kenya (officially Republic of Kenya)",
      "Capital: Nairobi",
      "Population: 53,771,300",
      "Region: Africa (Eastern Africa)",
      "Currencies: Kenyan shilling (KES, Sh)",
      "Languages: English, Swahili",
      "Land borders: ETH, SOM, SSD",
      "Calling codes: +254",
    ] {
      assert!(summary.contains(needle), "missing {needle:?} in {summary}");
    }
  }
}
