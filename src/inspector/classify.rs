//! Value classification and one-line summaries.
//!
//! [`classify`] is total: every [`Value`] maps to exactly one [`Tag`], and a
//! reference that does not resolve in the heap is treated as absent rather
//! than as an error. [`summarize`] never enumerates children, so its cost is
//! independent of the size of the value.

use super::types::{StyleToken, Tag};
use super::value::{Heap, HeapObject, Property, PropertyKey, Slot, Value};

/// Default cap on characters of host text shown inside a summary.
pub const DEFAULT_MAX_SUMMARY_CHARS: usize = 120;

/// Map a value to its tag.
pub fn classify(heap: &Heap, value: &Value) -> Tag {
    match value {
        Value::Null => Tag::Null,
        Value::Undefined => Tag::Absent,
        Value::BigInt(_) => Tag::BigInt,
        Value::String(_) => Tag::String,
        Value::Number(_) => Tag::Number,
        Value::Bool(_) => Tag::Boolean,
        Value::Ref(id) => match heap.get(*id) {
            None => Tag::Absent,
            Some(HeapObject::Array { .. }) => Tag::List,
            Some(HeapObject::Date(_)) => Tag::Date,
            Some(HeapObject::Pattern { .. }) => Tag::Pattern,
            Some(HeapObject::Error { .. }) => Tag::Exception,
            Some(HeapObject::Map { .. }) => Tag::Map,
            Some(HeapObject::Set { .. }) => Tag::Set,
            Some(HeapObject::Symbol { .. }) => Tag::Symbol,
            Some(HeapObject::Function { .. }) => Tag::Callable,
            Some(HeapObject::Object { .. }) => Tag::Object,
        },
    }
}

/// Semantic style for a tag.
pub fn style_of(tag: Tag) -> StyleToken {
    match tag {
        Tag::String => StyleToken::String,
        Tag::Number | Tag::BigInt => StyleToken::Number,
        Tag::Boolean => StyleToken::Boolean,
        Tag::Null | Tag::Absent => StyleToken::Null,
        Tag::Callable => StyleToken::Callable,
        Tag::Symbol => StyleToken::Symbol,
        Tag::Date => StyleToken::Date,
        Tag::Pattern => StyleToken::Pattern,
        Tag::Exception => StyleToken::Error,
        Tag::Object | Tag::List | Tag::Map | Tag::Set => StyleToken::Container,
    }
}

/// One-line summary of `value` using the default text cap.
pub fn summarize(heap: &Heap, value: &Value, tag: Tag) -> String {
    summarize_with_limit(heap, value, tag, DEFAULT_MAX_SUMMARY_CHARS)
}

/// One-line summary of `value`, truncating embedded host text past
/// `max_chars` characters.
///
/// `tag` should come from [`classify`]; a mismatched tag is corrected
/// rather than trusted.
pub fn summarize_with_limit(heap: &Heap, value: &Value, tag: Tag, max_chars: usize) -> String {
    let actual = classify(heap, value);
    if actual != tag {
        log::debug!("summarize: tag {tag} does not match value, using {actual}");
    }

    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => quote(&truncate(s, max_chars)),
        Value::BigInt(b) => format!("{}n", b.digits()),
        Value::Ref(id) => match heap.get(*id) {
            None => "undefined".to_string(),
            Some(object) => summarize_object(object, max_chars),
        },
    }
}

fn summarize_object(object: &HeapObject, max_chars: usize) -> String {
    match object {
        HeapObject::Array { elements } => format!("Array({})", elements.len()),
        HeapObject::Map { entries } => format!("Map({})", entries.len()),
        HeapObject::Set { values } => format!("Set({})", values.len()),
        HeapObject::Object { class_name, .. } => match class_name {
            Some(name) => format!("{} {{…}}", truncate(name, max_chars)),
            None => "{…}".to_string(),
        },
        HeapObject::Function { name, .. } => match name.as_deref() {
            Some(name) if !name.is_empty() => format!("ƒ {}()", truncate(name, max_chars)),
            _ => "ƒ (anonymous)".to_string(),
        },
        HeapObject::Symbol { description } => format!(
            "Symbol({})",
            truncate(description.as_deref().unwrap_or(""), max_chars)
        ),
        HeapObject::Error { kind, properties } => {
            let message = match properties.get(&PropertyKey::from("message")) {
                Some(Property {
                    slot: Slot::Data(Value::String(message)),
                    ..
                }) => message.as_str(),
                _ => "",
            };
            let text = if message.is_empty() {
                kind.clone()
            } else {
                format!("{kind}: {message}")
            };
            single_line(&truncate(&text, max_chars))
        }
        HeapObject::Date(at) => at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        HeapObject::Pattern { source, flags } => {
            format!("/{}/{}", truncate(source, max_chars), flags)
        }
    }
}

/// Number formatting matching the host runtime's `String(n)` for common
/// values: integers without a fraction, signed zero and non-finite names.
/// Magnitudes from `1e21` up and below `1e-6` use exponent form (`1e+21`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 && n.is_sign_negative() {
        "-0".to_string()
    } else if n.abs() >= 1e21 || (n != 0.0 && n.abs() < 1e-6) {
        exponent_form(n)
    } else if n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

/// Shortest round-trip mantissa with an explicitly signed exponent.
fn exponent_form(n: f64) -> String {
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

/// Keep the first `max_chars` characters, appending `…` when cut.
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

/// Escaped, double-quoted literal.
fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{text}\""))
}

pub(crate) fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
