//! Label input data: the `{text, size}` JSON records and the built-in
//! fallback set used when the data source is unavailable.

use crate::error::DataError;
use serde::Deserialize;

/// One weighted label as supplied by the data source.
///
/// The JSON field is called `size`; a missing or invalid weight reads as 0.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LabelItem {
    pub text: String,
    #[serde(rename = "size", default)]
    pub weight: f32,
}

impl LabelItem {
    pub fn new(text: impl Into<String>, weight: f32) -> Self {
        Self {
            text: text.into(),
            weight: sanitize_weight(weight),
        }
    }
}

#[inline]
fn sanitize_weight(w: f32) -> f32 {
    if w.is_finite() {
        w.max(0.0)
    } else {
        0.0
    }
}

/// Parse a JSON array of label records.
pub fn parse_items(json: &str) -> Result<Vec<LabelItem>, DataError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(DataError::NotAnArray);
    }
    let mut items: Vec<LabelItem> = serde_json::from_value(value)?;
    for item in &mut items {
        item.weight = sanitize_weight(item.weight);
    }
    Ok(items)
}

/// Resolve a load attempt to a usable label set, substituting the fallback
/// set on any failure.
pub fn items_or_fallback<E: std::fmt::Display>(loaded: Result<Vec<LabelItem>, E>) -> Vec<LabelItem> {
    match loaded {
        Ok(items) => {
            log::info!("[data] loaded {} labels", items.len());
            items
        }
        Err(e) => {
            log::warn!("[data] load failed, using fallback set: {}", e);
            fallback_items()
        }
    }
}

const FALLBACK: [(&str, f32); 20] = [
    ("JavaScript", 40.0),
    ("HTML5", 35.0),
    ("CSS3", 30.0),
    ("React", 28.0),
    ("Vue", 26.0),
    ("Node.js", 25.0),
    ("TypeScript", 22.0),
    ("Angular", 20.0),
    ("Webpack", 18.0),
    ("Git", 16.0),
    ("Docker", 15.0),
    ("Python", 14.0),
    ("Java", 13.0),
    ("PHP", 12.0),
    ("MongoDB", 11.0),
    ("MySQL", 10.0),
    ("Redis", 9.0),
    ("GraphQL", 8.0),
    ("REST API", 7.0),
    ("AWS", 6.0),
];

/// Built-in technology terms, weights descending from 40 to 6.
pub fn fallback_items() -> Vec<LabelItem> {
    FALLBACK
        .iter()
        .map(|&(text, weight)| LabelItem::new(text, weight))
        .collect()
}
