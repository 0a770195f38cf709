//! Request Body Parsing
//!
//! Turns a raw `POST /fruits` body into a [`Fruit`] or the full list of
//! reasons it was rejected. Coercion is lax: `price` also accepts integral
//! floats, booleans and numeric strings, while `name` must be a string.

use super::models::{Fruit, IssueKind, LocSegment, ValidationIssue};
use serde_json::{json, Map, Value};
use std::num::IntErrorKind;

const BODY: &str = "body";

/// Parses and validates a request body into a new fruit.
///
/// Every failing field is reported, in declaration order (`name`, then
/// `price`). A body that is empty, `null`, not JSON, or not an object yields a
/// single issue located at `["body", ...]`.
pub fn parse_new_fruit(body: &[u8]) -> Result<Fruit, Vec<ValidationIssue>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(vec![ValidationIssue::new(
            IssueKind::Missing,
            vec![BODY.into()],
            Value::Null,
        )]);
    }

    let value: Value = serde_json::from_slice(body).map_err(|err| {
        let offset = error_offset(body, err.line(), err.column());
        vec![ValidationIssue::new(
            IssueKind::JsonInvalid,
            vec![BODY.into(), offset.into()],
            json!({}),
        )
        .with_ctx(json!({ "error": err.to_string() }))]
    })?;

    if value.is_null() {
        return Err(vec![ValidationIssue::new(
            IssueKind::Missing,
            vec![BODY.into()],
            Value::Null,
        )]);
    }

    let Value::Object(fields) = &value else {
        return Err(vec![ValidationIssue::new(
            IssueKind::ModelAttributesType,
            vec![BODY.into()],
            value,
        )]);
    };

    let name = extract(fields, "name", coerce_name);
    let price = extract(fields, "price", coerce_price);

    match (name, price) {
        (Ok(name), Ok(price)) => Ok(Fruit { name, price }),
        (name, price) => Err([name.err(), price.err()].into_iter().flatten().collect()),
    }
}

/// Looks up `key` and coerces it, locating any failure at `["body", key]`.
fn extract<T>(
    fields: &Map<String, Value>,
    key: &str,
    coerce: fn(&Value) -> Result<T, IssueKind>,
) -> Result<T, ValidationIssue> {
    let loc = || vec![LocSegment::from(BODY), LocSegment::from(key)];

    match fields.get(key) {
        None => Err(ValidationIssue::new(
            IssueKind::Missing,
            loc(),
            Value::Object(fields.clone()),
        )),
        Some(value) => coerce(value).map_err(|kind| ValidationIssue::new(kind, loc(), value.clone())),
    }
}

fn coerce_name(value: &Value) -> Result<String, IssueKind> {
    match value {
        Value::String(name) => Ok(name.clone()),
        _ => Err(IssueKind::StringType),
    }
}

fn coerce_price(value: &Value) -> Result<i64, IssueKind> {
    match value {
        Value::Number(number) => {
            if let Some(price) = number.as_i64() {
                Ok(price)
            } else if number.is_u64() {
                Err(IssueKind::IntParsingSize)
            } else {
                match number.as_f64() {
                    Some(price) => float_to_price(price),
                    None => Err(IssueKind::IntType),
                }
            }
        }
        Value::Bool(flag) => Ok(i64::from(*flag)),
        Value::String(text) => strip_decimal_zeros(text.trim())
            .parse::<i64>()
            .map_err(|err| match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => IssueKind::IntParsingSize,
                _ => IssueKind::IntParsing,
            }),
        _ => Err(IssueKind::IntType),
    }
}

/// Drops a fractional part made only of zeros: `"10.0"` and `"10."` become `"10"`.
fn strip_decimal_zeros(text: &str) -> &str {
    match text.split_once('.') {
        Some((whole, fraction)) if fraction.bytes().all(|byte| byte == b'0') => whole,
        _ => text,
    }
}

fn float_to_price(price: f64) -> Result<i64, IssueKind> {
    // i64::MAX is not representable as f64; 2^63 is the first value out of range.
    const UPPER: f64 = 9_223_372_036_854_775_808.0;

    if !price.is_finite() || price.fract() != 0.0 {
        Err(IssueKind::IntFromFloat)
    } else if price >= UPPER || price < -UPPER {
        Err(IssueKind::IntParsingSize)
    } else {
        Ok(price as i64)
    }
}

/// Converts serde_json's 1-based line/column into a byte offset into `body`.
fn error_offset(body: &[u8], line: usize, column: usize) -> usize {
    let preceding: usize = body
        .split(|byte| *byte == b'\n')
        .take(line.saturating_sub(1))
        .map(|line| line.len() + 1)
        .sum();
    (preceding + column.saturating_sub(1)).min(body.len())
}
