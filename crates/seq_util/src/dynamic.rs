//! The sequence helpers over untyped host values.
//!
//! `Value::Null` plays the role of an absent sequence. Any other non-array
//! value fails the type check with [`SequenceError::Type`].

use log::debug;
use serde_json::Value;

use crate::error::{Result, SequenceError};
use crate::sequence;

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn as_sequence(value: &Value) -> Result<Option<&Vec<Value>>> {
    validate_type(value)?;
    Ok(value.as_array())
}

fn as_sequence_mut(value: &mut Value) -> Result<Option<&mut Vec<Value>>> {
    validate_type(value)?;
    Ok(value.as_array_mut())
}

pub fn is_absent(value: &Value) -> bool {
    value.is_null()
}

/// Passes for arrays and for `null`; absence is reported by the absent checks.
pub fn validate_type(value: &Value) -> Result<()> {
    match value {
        Value::Null | Value::Array(_) => Ok(()),
        other => {
            let found = kind_name(other);
            debug!("rejected {found} where a sequence was expected");
            Err(SequenceError::Type { found })
        }
    }
}

pub fn is_empty(value: &Value) -> Result<bool> {
    Ok(sequence::is_empty(as_sequence(value)?))
}

pub fn is_not_empty(value: &Value) -> Result<bool> {
    is_empty(value).map(|empty| !empty)
}

pub fn require_not_absent(value: &Value) -> Result<()> {
    if is_absent(value) {
        debug!("rejected absent sequence");
        return Err(SequenceError::Absent);
    }
    Ok(())
}

pub fn require_not_empty(value: &Value) -> Result<()> {
    if is_empty(value)? {
        debug!("rejected empty sequence");
        return Err(SequenceError::Empty);
    }
    Ok(())
}

pub fn swap(value: &mut Value, idx0: usize, idx1: usize) -> Result<&mut Value> {
    require_not_absent(value)?;
    sequence::swap(as_sequence_mut(value)?, idx0, idx1)?;
    Ok(value)
}

pub fn move_up(value: &mut Value, idx: usize) -> Result<()> {
    if idx == 0 {
        return Ok(());
    }
    sequence::move_up(as_sequence_mut(value)?, idx)
}

pub fn move_down(value: &mut Value, idx: usize) -> Result<()> {
    sequence::move_down(as_sequence_mut(value)?, idx)
}
