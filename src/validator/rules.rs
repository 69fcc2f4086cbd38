//! Declarative field rules evaluated against a raw JSON body.
//!
//! A [`FieldRule`] is plain data: a field name, a default message, and an
//! ordered list of checks. [`evaluate`] walks every rule in declaration order
//! and reports at most one [`FieldError`] per field, the first check that
//! failed.
//!
//! Values are coerced the way form validators usually do: missing, `null`,
//! and `""` count as empty, and numbers or booleans are checked by their
//! string form. [`Check::IsString`] and [`Check::IsArray`] look at the JSON
//! type itself.

use serde_json::{Map, Value};
use validator::ValidateEmail;

use nomad_core::FieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    NotEmpty,
    IsString,
    /// A JSON integer, or a string that parses as one, within the range of
    /// an `i32` column.
    IsInt,
    /// An array of strings, or a comma-separated string.
    IsArray,
    /// ASCII letters only.
    IsAlpha,
    IsAlphanumeric,
    /// At least one ASCII letter, comma, hyphen, or period.
    ContainsLetter,
    /// Minimum number of characters in the string form.
    MinLength(usize),
    /// Maximum number of characters in the string form.
    MaxLength(usize),
    IsEmail,
    /// Integer lower bound (inclusive).
    Min(i64),
    OneOf(&'static [&'static str]),
}

/// A check plus the message reported when it fails. `None` falls back to the
/// rule's default message.
pub type Step = (Check, Option<&'static str>);

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub message: &'static str,
    /// Skip the whole rule when the field is empty.
    pub optional: bool,
    pub checks: &'static [Step],
}

/// Ties a request DTO to the rules that guard it.
pub trait RuleSet {
    const RULES: &'static [FieldRule];

    /// Reported with 422 when the body is missing or `{}`. `None` lets an
    /// empty body fall through to field-level rules.
    const EMPTY_BODY_MESSAGE: Option<&'static str> = None;
}

/// String form of a JSON value; `None` when the value is empty.
fn text_of(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    };

    (!text.is_empty()).then_some(text)
}

/// Missing, `null`, or `""`. Other values that stringify to nothing, like `[]`,
/// still go through the checks.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        _ => false,
    }
}

fn integer_of(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    }
}

fn passes(check: Check, value: Option<&Value>) -> bool {
    let text = text_of(value);

    match check {
        Check::NotEmpty => text.is_some(),
        Check::IsString => matches!(value, Some(Value::String(_))),
        Check::IsInt => integer_of(value).is_some_and(|n| i32::try_from(n).is_ok()),
        Check::IsArray => match value {
            Some(Value::Array(items)) => items.iter().all(Value::is_string),
            Some(Value::String(_)) => true,
            _ => false,
        },
        Check::IsAlpha => text.is_some_and(|t| t.chars().all(|c| c.is_ascii_alphabetic())),
        Check::IsAlphanumeric => {
            text.is_some_and(|t| t.chars().all(|c| c.is_ascii_alphanumeric()))
        }
        Check::ContainsLetter => text.is_some_and(|t| {
            t.chars()
                .any(|c| c.is_ascii_alphabetic() || matches!(c, ',' | '-' | '.'))
        }),
        Check::MinLength(min) => text.is_some_and(|t| t.chars().count() >= min),
        Check::MaxLength(max) => text.is_some_and(|t| t.chars().count() <= max),
        Check::IsEmail => text.is_some_and(|t| t.validate_email()),
        Check::Min(min) => integer_of(value).is_some_and(|n| n >= min),
        Check::OneOf(allowed) => text.is_some_and(|t| allowed.contains(&t.as_str())),
    }
}

/// Runs `rules` over `body`, returning one error per failing field in
/// declaration order.
pub fn evaluate(rules: &[FieldRule], body: &Map<String, Value>) -> Vec<FieldError> {
    rules
        .iter()
        .filter_map(|rule| {
            let value = body.get(rule.field);

            if rule.optional && is_blank(value) {
                return None;
            }

            rule.checks
                .iter()
                .find(|(check, _)| !passes(*check, value))
                .map(|(_, message)| FieldError::new(rule.field, message.unwrap_or(rule.message)))
        })
        .collect()
}
