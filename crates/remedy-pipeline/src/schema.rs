//! Column identifiers and status codes of the BOP Remedy extract.
//!
//! Every stage refers to raw column identifiers; the human-readable names
//! only appear after the final rename in the expansion stage.

// ─── Facility registry ───────────────────────────────────────────────────────

pub const FACILITY_CODE: &str = "Facility_Code";
pub const FACILITY_NAME: &str = "Facility_Name";
pub const FACILITY_STATE: &str = "State";

// ─── Submissions ─────────────────────────────────────────────────────────────

pub const CASE_NUMBER: &str = "CASENBR";
pub const FACILITY_OF_OCCURRENCE: &str = "CDFCLEVN";
pub const FACILITY_RECEIVED: &str = "CDFCLRCV";
pub const OFFICE_RECEIVED: &str = "CDOFCRCV";
pub const ORG_LEVEL: &str = "ITERLVL";
pub const STATUS: &str = "CDSTATUS";
pub const PRIMARY_SUBJECT: &str = "CDSUB1PR";
pub const COMPLAINT_SUBTYPE: &str = "cdsub1cb";
/// Submission received date.
pub const SUBMITTED: &str = "sitdtrcv";
/// Date the latest status was assigned.
pub const STATUS_DATE: &str = "sdtstat";
pub const DUE_DATE: &str = "sdtdue";

pub const STATUS_REASONS: [&str; 5] =
  ["STATRSN1", "STATRSN2", "STATRSN3", "STATRSN4", "STATRSN5"];

/// All three columns hold facility codes and share one lookup.
pub const FACILITY_COLUMNS: [&str; 3] =
  [FACILITY_OF_OCCURRENCE, FACILITY_RECEIVED, OFFICE_RECEIVED];

/// 0/1 outcome indicators.
pub const BINARY_FLAGS: [&str; 19] = [
  "accept",
  "reject",
  "deny",
  "grant",
  "other",
  "submit",
  "filed",
  "closed",
  "diffreg_filed",
  "diffinst",
  "timely",
  "diffreg_answer",
  "overdue",
  "untimely",
  "resubmit",
  "noinfres",
  "attachmt",
  "wronglvl",
  "otherrej",
];

// ─── Status codes ────────────────────────────────────────────────────────────

pub const REJECTED: &[&str] = &["REJ"];
pub const CLOSED_DENIED_OR_OTHER: &[&str] = &["CLD", "CLO"];
pub const CLOSED_GRANTED_OR_ACCEPTED: &[&str] = &["CLG", "ACC"];

// ─── Derived columns ─────────────────────────────────────────────────────────

pub const SUBCOUNT: &str = "subcount";
pub const REJCOUNT: &str = "rejcount";
pub const CLDCLOCOUNT: &str = "cldclocount";
pub const CLGACCCOUNT: &str = "clgacccount";
pub const EARLIEST_SUBMITTED: &str = "earliest_sitdtrcv";
pub const LATEST_STATUS_DATE: &str = "latest_sdtstat";
pub const DAYS_BETWEEN: &str = "days_between";

pub const COMPLAINT_SUBTYPE_TEXT: &str = "cdsub1cbTEXT";

/// Written in place of a missing due date.
pub const NO_DUE_DATE: &str = "rejected";

/// Columns the submissions file must carry for every stage to run.
pub fn required_submission_columns() -> Vec<&'static str> {
  let mut cols = vec![
    CASE_NUMBER,
    FACILITY_OF_OCCURRENCE,
    FACILITY_RECEIVED,
    OFFICE_RECEIVED,
    ORG_LEVEL,
    STATUS,
    PRIMARY_SUBJECT,
    COMPLAINT_SUBTYPE,
    SUBMITTED,
    STATUS_DATE,
    DUE_DATE,
  ];
  cols.extend(STATUS_REASONS);
  cols.extend(BINARY_FLAGS);
  cols
}
