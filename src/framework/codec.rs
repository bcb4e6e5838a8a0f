//! # Codec
//!
//! Converts any [`Entity`] to and from its canonical encoded form (compact JSON).
//!
//! ## How it works
//!
//! Encoding is a two-step pipeline:
//!
//! 1. **Lower**: serde turns the entity into a [`serde_json::Value`] keyed by Rust field names.
//! 2. **Shape**: the entity's [`Field`] schema is walked in declared order. Each field is
//!    renamed, dropped if empty, or turned into a quoted integer as its directives say.
//!
//! Decoding runs the same schema backwards: external keys are mapped back to field names,
//! text-encoded integers are validated and parsed, and serde builds the entity from the result.
//! An omittable key that is present but `null` is treated like a missing one.
//!
//! ```text
//! Person { name: "Jane", age: 25, income: 0.0, title: "Data Scientist" }
//!   -> {"name":"Jane","age":"25","title":"Data Scientist"}
//! ```
//!
//! ## Emptiness
//!
//! `omit_if_empty` looks at the lowered value: `null`, `false`, `0`, `""` and `[]` are empty.
//! Objects are never empty, so a nested record is always written unless it is absent.

use crate::framework::entity::{Entity, Field};
use crate::framework::error::CodecError;
use serde::de::Error as _;
use serde_json::{Map, Number, Value};
use tracing::trace;

/// Encodes an entity into its canonical byte form.
pub fn encode<T: Entity>(entity: &T) -> Result<Vec<u8>, CodecError> {
    let shaped = shape::<T>(entity)?;
    let bytes = serde_json::to_vec(&shaped).map_err(|source| CodecError::Encode {
        entity: T::NAME,
        source,
    })?;
    trace!(entity = T::NAME, bytes = bytes.len(), "Encoded");
    Ok(bytes)
}

/// Encodes an entity into its canonical form as a `String`.
pub fn encode_to_string<T: Entity>(entity: &T) -> Result<String, CodecError> {
    let shaped = shape::<T>(entity)?;
    serde_json::to_string(&shaped).map_err(|source| CodecError::Encode {
        entity: T::NAME,
        source,
    })
}

/// Decodes an entity from its canonical byte form.
///
/// Every field not marked `omit_if_empty` must be present. Unknown keys are ignored.
pub fn decode<T: Entity>(bytes: &[u8]) -> Result<T, CodecError> {
    let raw: Value = serde_json::from_slice(bytes).map_err(|source| CodecError::Malformed {
        entity: T::NAME,
        source,
    })?;
    let Value::Object(map) = raw else {
        return Err(CodecError::Malformed {
            entity: T::NAME,
            source: serde_json::Error::custom("expected a JSON object"),
        });
    };

    let lowered = unshape(&map, T::FIELDS, "")?;
    let entity = serde_json::from_value(Value::Object(lowered)).map_err(|source| {
        CodecError::Malformed {
            entity: T::NAME,
            source,
        }
    })?;
    trace!(entity = T::NAME, bytes = bytes.len(), "Decoded");
    Ok(entity)
}

/// Decodes an entity from a string slice.
pub fn decode_str<T: Entity>(input: &str) -> Result<T, CodecError> {
    decode(input.as_bytes())
}

// =============================================================================
// ENCODE SIDE
// =============================================================================

fn shape<T: Entity>(entity: &T) -> Result<Value, CodecError> {
    let lowered = serde_json::to_value(entity).map_err(|source| CodecError::Encode {
        entity: T::NAME,
        source,
    })?;
    match lowered {
        Value::Object(map) => Ok(Value::Object(shape_object::<T>(&map, T::FIELDS)?)),
        _ => Err(CodecError::Encode {
            entity: T::NAME,
            source: serde_json::Error::custom("entity did not serialize to an object"),
        }),
    }
}

fn shape_object<T: Entity>(
    lowered: &Map<String, Value>,
    fields: &[Field],
) -> Result<Map<String, Value>, CodecError> {
    let mut out = Map::with_capacity(fields.len());
    for field in fields {
        let value = lowered.get(field.name).unwrap_or(&Value::Null);
        if field.omit_if_empty && is_empty(value) {
            continue;
        }
        let shaped = match (field.nested, value) {
            (Some(nested), Value::Object(inner)) => {
                Value::Object(shape_object::<T>(inner, nested)?)
            }
            (_, Value::Number(n)) if field.as_text => {
                if !(n.is_i64() || n.is_u64()) {
                    return Err(CodecError::Encode {
                        entity: T::NAME,
                        source: serde_json::Error::custom(format!(
                            "field `{}` is encoded as text but holds non-integer {n}",
                            field.name
                        )),
                    });
                }
                Value::String(n.to_string())
            }
            _ => value.clone(),
        };
        out.insert(field.key().to_owned(), shaped);
    }
    Ok(out)
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}

// =============================================================================
// DECODE SIDE
// =============================================================================

fn unshape(
    raw: &Map<String, Value>,
    fields: &[Field],
    path: &str,
) -> Result<Map<String, Value>, CodecError> {
    let mut lowered = Map::with_capacity(fields.len());
    for field in fields {
        let at = join(path, field.key());
        let value = match raw.get(field.key()) {
            Some(Value::Null) | None if field.omit_if_empty => continue,
            Some(value) => value,
            None => return Err(CodecError::decode(at, "missing required field")),
        };
        let value = match (field.nested, value) {
            (Some(nested), Value::Object(inner)) => Value::Object(unshape(inner, nested, &at)?),
            _ if field.as_text => parse_text(value, &at)?,
            _ => value.clone(),
        };
        lowered.insert(field.name.to_owned(), value);
    }
    Ok(lowered)
}

fn parse_text(value: &Value, at: &str) -> Result<Value, CodecError> {
    match value {
        Value::String(text) => parse_number(text).map(Value::Number).ok_or_else(|| {
            CodecError::decode(at, format!("expected a base-10 digit string, found {text:?}"))
        }),
        Value::Null => Ok(Value::Null),
        other => Err(CodecError::decode(
            at,
            format!("expected a quoted number, found {other}"),
        )),
    }
}

/// Accepts `-?[0-9]+` that fits in an `i64` or `u64`.
fn parse_number(text: &str) -> Option<Number> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match text.parse::<i64>() {
        Ok(n) => Some(Number::from(n)),
        Err(_) => text.parse::<u64>().ok().map(Number::from),
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}
