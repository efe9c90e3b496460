//! Human-readable expansion: coded values become text, flags become
//! yes/no, and columns take their readable names.

use remedy_core::{Table, left_translate};

use crate::{CodeTables, Result, schema::*};

/// A translated copy of `enriched`; the input is left untouched.
///
/// Codes with no lookup entry are kept as they are. The column rename runs
/// last, so every earlier step addresses raw column identifiers.
pub fn expand_submissions(enriched: &Table, codes: &CodeTables) -> Result<Table> {
  let mut out = enriched.clone();

  let subtype_text =
    left_translate(out.column(COMPLAINT_SUBTYPE)?, &codes.complaint_subtype);
  out.add_column(COMPLAINT_SUBTYPE_TEXT, subtype_text)?;

  for column in FACILITY_COLUMNS {
    out.translate_column(column, &codes.facility)?;
  }
  out.translate_column(ORG_LEVEL, &codes.org_level)?;
  out.translate_column(STATUS, &codes.status)?;
  for column in STATUS_REASONS {
    out.translate_column(column, &codes.status_reason)?;
  }
  out.translate_column(PRIMARY_SUBJECT, &codes.primary_subject)?;

  out.map_column(DUE_DATE, |v| Some(v.unwrap_or(NO_DUE_DATE).to_owned()))?;

  let mut unexpected = 0usize;
  for column in BINARY_FLAGS {
    out.map_column(column, |v| {
      let v = v?;
      match yes_no(v) {
        Some(text) => Some(text.to_owned()),
        None => {
          unexpected += 1;
          Some(v.to_owned())
        }
      }
    })?;
  }
  if unexpected > 0 {
    tracing::warn!("{unexpected} flag values were neither 0 nor 1; kept as-is");
  }

  out.rename_columns(|c| codes.column_names.get(c).map(str::to_owned))?;
  Ok(out)
}

/// `0` → `no`, `1` → `yes`. Numeric spellings such as `1.0` are accepted.
fn yes_no(value: &str) -> Option<&'static str> {
  match value.parse::<f64>() {
    Ok(v) if v == 0.0 => Some("no"),
    Ok(v) if v == 1.0 => Some("yes"),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use remedy_core::{
    Lookup,
    testing::{table, values},
  };

  use super::*;

  fn enriched() -> Table {
    let mut columns = vec![
      "CASENBR", "CDFCLEVN", "CDFCLRCV", "CDOFCRCV", "ITERLVL", "CDSTATUS",
      "CDSUB1PR", "cdsub1cb", "sdtdue",
    ];
    columns.extend(STATUS_REASONS);
    columns.extend(BINARY_FLAGS);

    let mut first = vec![
      "C1", "F1", "F2", "F1", "I", "REJ", "10", "10A", "", "R1", "R2", "", "",
      "",
    ];
    first.extend(["1"; 19]);
    let mut second = vec![
      "C2", "FX", "F1", "", "Z", "ODD", "99", "ZZZ", "2023-04-01", "RX", "", "",
      "", "",
    ];
    second.extend(["0"; 19]);

    table(&columns, &[first.as_slice(), second.as_slice()])
  }

  fn codes() -> CodeTables {
    CodeTables {
      complaint_subtype: [("10A", "Medical - Dental")].into_iter().collect(),
      facility:          [("F1", "Brooklyn MDC"), ("F2", "Otisville FCI")]
        .into_iter()
        .collect(),
      status:            [("REJ", "Rejected")].into_iter().collect(),
      org_level:         [("I", "Institution")].into_iter().collect(),
      status_reason:     [("R1", "Untimely"), ("R2", "Wrong level")]
        .into_iter()
        .collect(),
      primary_subject:   [("10", "Medical")].into_iter().collect(),
      column_names:      Lookup::default(),
    }
  }

  #[test]
  fn codes_are_translated_where_mapped() {
    let out = expand_submissions(&enriched(), &codes()).unwrap();
    assert_eq!(values(&out, "CDFCLEVN"), [Some("Brooklyn MDC"), Some("FX")]);
    assert_eq!(values(&out, "CDFCLRCV"), [
      Some("Otisville FCI"),
      Some("Brooklyn MDC")
    ]);
    assert_eq!(values(&out, "CDOFCRCV"), [Some("Brooklyn MDC"), None]);
    assert_eq!(values(&out, "ITERLVL"), [Some("Institution"), Some("Z")]);
    assert_eq!(values(&out, "CDSTATUS"), [Some("Rejected"), Some("ODD")]);
    assert_eq!(values(&out, "CDSUB1PR"), [Some("Medical"), Some("99")]);
    assert_eq!(values(&out, "STATRSN1"), [Some("Untimely"), Some("RX")]);
    assert_eq!(values(&out, "STATRSN2"), [Some("Wrong level"), None]);
  }

  #[test]
  fn subtype_text_is_added_alongside_the_code() {
    let out = expand_submissions(&enriched(), &codes()).unwrap();
    assert_eq!(out.columns().last().map(String::as_str), Some("cdsub1cbTEXT"));
    assert_eq!(values(&out, "cdsub1cb"), [Some("10A"), Some("ZZZ")]);
    assert_eq!(values(&out, "cdsub1cbTEXT"), [
      Some("Medical - Dental"),
      Some("ZZZ")
    ]);
  }

  #[test]
  fn missing_due_date_means_rejected() {
    let out = expand_submissions(&enriched(), &codes()).unwrap();
    assert_eq!(values(&out, "sdtdue"), [Some("rejected"), Some("2023-04-01")]);
  }

  #[test]
  fn flags_become_yes_and_no() {
    let out = expand_submissions(&enriched(), &codes()).unwrap();
    for flag in BINARY_FLAGS {
      assert_eq!(values(&out, flag), [Some("yes"), Some("no")], "{flag}");
    }
  }

  #[test]
  fn flag_values_in_float_form() {
    assert_eq!(yes_no("1.0"), Some("yes"));
    assert_eq!(yes_no("0.0"), Some("no"));
    assert_eq!(yes_no("2"), None);
    assert_eq!(yes_no("Y"), None);
  }

  #[test]
  fn columns_are_renamed_last() {
    let mut codes = codes();
    codes.column_names = [("CDSTATUS", "Case Status"), ("CASENBR", "Case Number")]
      .into_iter()
      .collect();
    let out = expand_submissions(&enriched(), &codes).unwrap();
    assert_eq!(out.columns()[0], "Case Number");
    assert!(!out.has_column("CDSTATUS"));
    assert_eq!(values(&out, "Case Status"), [Some("Rejected"), Some("ODD")]);
  }

  #[test]
  fn input_table_is_untouched() {
    let input = enriched();
    let before = input.clone();
    expand_submissions(&input, &codes()).unwrap();
    assert_eq!(input, before);
  }

  #[test]
  fn missing_coded_column_fails() {
    let t = table(&["CASENBR"], &[&["C1"]]);
    assert!(expand_submissions(&t, &codes()).is_err());
  }
}
