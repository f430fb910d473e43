//! Free-order prefix-tagged field scanner
//!
//! Command arguments are tagged with short markers (`a/12.50 c/food`), and
//! fields may appear in any order. A marker only counts when it sits at the
//! start of the string or right after whitespace, so marker-shaped substrings
//! inside a value are not misread as new fields.
//!
//! The note field (`n/`) is special: from its first occurrence to the end of
//! the string, the text belongs to the note verbatim and no marker scanning
//! happens inside it. The note must therefore come after every other field.

use std::collections::HashMap;

use crate::error::{TallyError, TallyResult};

/// Amount field marker
pub const AMOUNT: &str = "a/";
/// Category field marker
pub const CATEGORY: &str = "c/";
/// Date field marker
pub const DATE: &str = "d/";
/// Record index field marker
pub const INDEX: &str = "i/";
/// Month filter field marker
pub const MONTH: &str = "m/";
/// Note (free text) field marker
pub const NOTE: &str = "n/";
/// Export file name field marker
pub const FILE: &str = "f/";

/// The fields one command accepts
pub struct FieldSpec {
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
    /// The rest-of-line field, when the command takes one. Always listed in
    /// `optional` as well.
    pub note: Option<&'static str>,
}

impl FieldSpec {
    fn known(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.required.iter().chain(self.optional.iter()).copied()
    }

    fn is_known(&self, marker: &str) -> bool {
        self.known().any(|p| p == marker)
    }
}

/// Extracted field values, keyed by marker
#[derive(Debug, Default)]
pub struct Fields {
    values: HashMap<&'static str, String>,
}

impl Fields {
    /// Value of an optional field, if it was supplied
    pub fn get(&self, marker: &str) -> Option<&str> {
        self.values.get(marker).map(String::as_str)
    }

    /// Value of a required field
    pub fn require(&self, marker: &'static str) -> TallyResult<&str> {
        self.get(marker)
            .ok_or_else(|| TallyError::MissingField(marker.to_string()))
    }
}

/// Split argument text into tagged field values.
///
/// Rejects unknown markers, duplicate fields, text before the first marker,
/// missing or empty required fields, and a note that is not the last field.
pub fn scan(input: &str, spec: &FieldSpec) -> TallyResult<Fields> {
    // The note boundary: everything at and after the first note marker is
    // note territory and is excluded from marker scanning.
    let note_pos = spec.note.and_then(|marker| find_occurrence(input, marker, 0));
    let region_end = note_pos.unwrap_or(input.len());
    let region = &input[..region_end];

    check_unrecognized(region, spec)?;

    let occurrences = collect_occurrences(region, spec);
    check_duplicates(&occurrences)?;
    check_note_is_last(input, spec, note_pos, &occurrences)?;
    check_preamble(input, note_pos, &occurrences)?;

    let mut fields = Fields::default();
    for (k, &(pos, marker)) in occurrences.iter().enumerate() {
        let value_start = pos + marker.len();
        let value_end = occurrences
            .get(k + 1)
            .map(|&(next, _)| next)
            .unwrap_or(region_end);
        let value = input[value_start..value_end].trim();
        if value.is_empty() {
            return Err(TallyError::MissingField(marker.to_string()));
        }
        fields.values.insert(marker, value.to_string());
    }

    if let (Some(marker), Some(pos)) = (spec.note, note_pos) {
        let value = input[pos + marker.len()..].trim();
        if value.is_empty() {
            return Err(TallyError::MissingField(marker.to_string()));
        }
        fields.values.insert(marker, value.to_string());
    }

    for &marker in spec.required {
        if !fields.values.contains_key(marker) {
            return Err(TallyError::MissingField(marker.to_string()));
        }
    }

    Ok(fields)
}

/// Find the next occurrence of `marker` at or after `from` that sits at the
/// string start or right after whitespace.
fn find_occurrence(input: &str, marker: &str, from: usize) -> Option<usize> {
    let mut start = from;
    loop {
        let rel = input.get(start..)?.find(marker)?;
        let pos = start + rel;
        let at_boundary = pos == 0
            || input[..pos]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace);
        if at_boundary {
            return Some(pos);
        }
        // marker starts with an ASCII letter, so pos + 1 is a char boundary
        start = pos + 1;
    }
}

/// All recognized occurrences of the command's markers (note excluded) within
/// the scan region, in position order.
fn collect_occurrences(region: &str, spec: &FieldSpec) -> Vec<(usize, &'static str)> {
    let mut occurrences = Vec::new();
    for marker in spec.known() {
        if Some(marker) == spec.note {
            continue;
        }
        let mut from = 0;
        while let Some(pos) = find_occurrence(region, marker, from) {
            occurrences.push((pos, marker));
            from = pos + marker.len();
        }
    }
    occurrences.sort_unstable_by_key(|&(pos, _)| pos);
    occurrences
}

/// Reject marker-shaped tokens this command does not know.
fn check_unrecognized(region: &str, spec: &FieldSpec) -> TallyResult<()> {
    for token in region.split_whitespace() {
        let Some(slash) = token.find('/') else {
            continue;
        };
        let looks_like_marker =
            (1..=2).contains(&slash) && token[..slash].chars().all(|c| c.is_ascii_alphabetic());
        if looks_like_marker && !spec.is_known(&token[..=slash]) {
            return Err(TallyError::UnrecognizedField(token[..=slash].to_string()));
        }
    }
    Ok(())
}

fn check_duplicates(occurrences: &[(usize, &'static str)]) -> TallyResult<()> {
    let mut seen: Vec<&str> = Vec::new();
    for &(_, marker) in occurrences {
        if seen.contains(&marker) {
            return Err(TallyError::DuplicateField(marker.to_string()));
        }
        seen.push(marker);
    }
    Ok(())
}

/// A marker that occurs only after the note's start would be swallowed by the
/// note; reject the command instead of silently losing the field. A marker
/// already supplied before the note may reappear inside the note text freely.
fn check_note_is_last(
    input: &str,
    spec: &FieldSpec,
    note_pos: Option<usize>,
    occurrences: &[(usize, &'static str)],
) -> TallyResult<()> {
    let Some(note_pos) = note_pos else {
        return Ok(());
    };
    let tail_start = note_pos + spec.note.unwrap_or_default().len();
    for marker in spec.known() {
        if Some(marker) == spec.note {
            continue;
        }
        let supplied = occurrences.iter().any(|&(_, m)| m == marker);
        if !supplied && find_occurrence(input, marker, tail_start).is_some() {
            return Err(TallyError::DescriptionMisplaced);
        }
    }
    Ok(())
}

fn check_preamble(
    input: &str,
    note_pos: Option<usize>,
    occurrences: &[(usize, &'static str)],
) -> TallyResult<()> {
    let first_marker = occurrences
        .first()
        .map(|&(pos, _)| pos)
        .into_iter()
        .chain(note_pos)
        .min();
    match first_marker {
        Some(pos) => {
            let preamble = input[..pos].trim();
            if !preamble.is_empty() {
                return Err(TallyError::PreambleText(preamble.to_string()));
            }
        }
        None => {
            let text = input.trim();
            if !text.is_empty() {
                return Err(TallyError::PreambleText(text.to_string()));
            }
        }
    }
    Ok(())
}
