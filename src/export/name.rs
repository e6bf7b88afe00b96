//! Artifact file names derived from the filter criteria and export date

use chrono::NaiveDate;

use crate::export::criteria::FilterCriteria;

/// Build the artifact name for one export call.
///
/// Deterministic in (criteria, date): the base token `pecas`, one segment
/// per supplied criterion in a fixed order, then the date and the `.csv`
/// extension. Identical criteria on the same day therefore re-export to
/// the same file.
pub fn artifact_name(criteria: &FilterCriteria, date: NaiveDate) -> String {
    let mut name = String::from("pecas");

    if let Some(ref manufacturer) = criteria.manufacturer {
        name.push('-');
        name.push_str(&collapse_whitespace(manufacturer));
    }
    if let Some(ref category) = criteria.category {
        name.push('-');
        name.push_str(&collapse_whitespace(category));
    }
    if let Some(ref vehicle) = criteria.vehicle {
        name.push('-');
        name.push_str(&collapse_whitespace(vehicle));
    }
    if let Some(min) = criteria.price_min {
        // truncation, not rounding: min25.90 -> min25
        name.push_str(&format!("-min{}", min.trunc()));
    }
    if let Some(max) = criteria.price_max {
        name.push_str(&format!("-max{}", max.trunc()));
    }
    if let Some(ref code) = criteria.code {
        name.push_str("-codigo");
        name.push_str(&collapse_whitespace(code));
    }

    name.push_str(&format!("-{}.csv", date.format("%Y-%m-%d")));
    name
}

/// Replace every run of whitespace with a single underscore.
///
/// Leading and trailing runs also become underscores, matching a
/// `\s+` -> `_` regex replacement.
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push('_');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}
