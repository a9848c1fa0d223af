//! Sorting uniform records by a named field
//!
//! Numeric fields compare as numbers; everything else compares as text under
//! a locale-aware collation, so `"éclair"` lands next to `"eclair"` rather
//! than after `"zebra"`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid sort order '{0}', expected 'asc' or 'desc'")]
pub struct SortOrderParseError(pub String);

impl FromStr for SortOrder {
    type Err = SortOrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(SortOrderParseError(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}

/// The value of a record field as seen by the sorter.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// The record has no such field
    Missing,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<FieldValue>),
    Object,
}

impl FieldValue {
    /// Text form used for collation; missing and null fields become empty text
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Missing | FieldValue::Null => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => number_to_text(*n),
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.iter().map(FieldValue::to_text).collect::<Vec<_>>().join(","),
            FieldValue::Object => "[object Object]".to_string(),
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&serde_json::Value> for FieldValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(*b),
            serde_json::Value::Number(n) => n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Null),
            serde_json::Value::String(s) => FieldValue::Text(s.clone()),
            serde_json::Value::Array(items) => FieldValue::List(items.iter().map(FieldValue::from).collect()),
            serde_json::Value::Object(_) => FieldValue::Object,
        }
    }
}

fn number_to_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n != 0.0 && (n.abs() >= 1e21 || n.abs() < 1e-6) {
        exponent_text(n)
    } else if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

/// Shortest exponent form with a signed exponent, e.g. `1e+21` or `2.5e-7`
fn exponent_text(n: f64) -> String {
    let text = format!("{:e}", n);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
        _ => text,
    }
}

/// A record whose fields can be looked up by name for sorting.
pub trait SortRecord {
    fn field(&self, name: &str) -> FieldValue;
}

impl SortRecord for serde_json::Value {
    fn field(&self, name: &str) -> FieldValue {
        self.get(name).map(FieldValue::from).unwrap_or(FieldValue::Missing)
    }
}

impl SortRecord for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> FieldValue {
        self.get(name).map(FieldValue::from).unwrap_or(FieldValue::Missing)
    }
}

/// Compare two field values in ascending order
///
/// Two numbers compare numerically (NaN compares equal to anything); any
/// other pair compares by collated text.
pub fn compare_fields(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => compare_text(&a.to_text(), &b.to_text()),
    }
}

/// Sort records in place by `field` and hand the same slice back
///
/// The sort is stable, so records with equal keys keep their relative order.
/// A column mixing numbers with number-like text can compare cyclically
/// (`2 < 10`, `10 < "1a"`, `"1a" < 2`); such columns still sort without
/// panicking, into an order that depends on the input order.
pub fn sort_by_field<'a, T: SortRecord>(records: &'a mut [T], field: &str, order: SortOrder) -> &'a mut [T] {
    log::trace!("Sorting {} records by '{}' ({})", records.len(), field, order);

    let keys: Vec<FieldValue> = records.iter().map(|record| record.field(field)).collect();
    let mut positions: Vec<usize> = (0..records.len()).collect();

    merge_sort_by(&mut positions, |a, b| {
        let ordering = compare_fields(&keys[*a], &keys[*b]);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    apply_permutation(records, positions);
    records
}

/// Bottom-up stable merge sort
///
/// Each comparison only decides which run's head is taken next, so an
/// inconsistent comparator yields some permutation rather than a panic.
fn merge_sort_by<F>(items: &mut Vec<usize>, compare: F)
where
    F: Fn(&usize, &usize) -> Ordering,
{
    let len = items.len();
    let mut buffer = items.clone();
    let mut width = 1;

    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right, mut out) = (start, mid, start);

            while left < mid && right < end {
                if compare(&items[right], &items[left]) == Ordering::Less {
                    buffer[out] = items[right];
                    right += 1;
                } else {
                    buffer[out] = items[left];
                    left += 1;
                }
                out += 1;
            }

            let rest_left = mid - left;
            buffer[out..out + rest_left].copy_from_slice(&items[left..mid]);
            out += rest_left;
            buffer[out..out + (end - right)].copy_from_slice(&items[right..end]);

            start = end;
        }

        std::mem::swap(items, &mut buffer);
        width *= 2;
    }
}

/// Reorder `records` so position `i` holds the record that was at `positions[i]`
fn apply_permutation<T>(records: &mut [T], mut positions: Vec<usize>) {
    for start in 0..positions.len() {
        let mut current = start;
        loop {
            let next = positions[current];
            positions[current] = current;
            if next == start || next == current {
                break;
            }
            records.swap(current, next);
            current = next;
        }
    }
}

#[derive(Debug, Default)]
struct CollationKey {
    primary: Vec<(u8, char)>,
    accents: Vec<Vec<char>>,
    uppercase: Vec<bool>,
}

/// Whitespace, punctuation and symbols, then digits, then letters
fn char_class(c: char) -> u8 {
    if c.is_numeric() {
        1
    } else if c.is_alphabetic() {
        2
    } else {
        0
    }
}

fn collation_key(text: &str) -> CollationKey {
    let mut key = CollationKey::default();

    for c in text.nfd() {
        if is_combining_mark(c) {
            if let Some(marks) = key.accents.last_mut() {
                marks.push(c);
            }
            continue;
        }

        let uppercase = c.is_uppercase();
        for lower in c.to_lowercase() {
            key.primary.push((char_class(lower), lower));
            key.accents.push(Vec::new());
            key.uppercase.push(uppercase);
        }
    }

    key
}

/// Locale-aware text comparison
///
/// Base letters decide first, ignoring accents and case; accents break ties
/// (unaccented first), then case (lowercase first), then raw code points.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let ka = collation_key(a);
    let kb = collation_key(b);

    ka.primary
        .cmp(&kb.primary)
        .then_with(|| ka.accents.cmp(&kb.accents))
        .then_with(|| ka.uppercase.cmp(&kb.uppercase))
        .then_with(|| a.cmp(b))
}
