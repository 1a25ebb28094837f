//! Conversion of untyped input into the data model.
//!
//! Documents authored as plain JSON or YAML describe blocks as objects with a
//! `block` path, an `attributes` map and nested `child` blocks. Two escape
//! markers are recognized inside attribute values: `{"$var": "name"}`
//! references the Terraform variable `var.name`, and `{"$func": "expr"}`
//! embeds raw expression text emitted verbatim.

use super::Block;
use crate::error::{Error, ErrorPath, Result};
use crate::number::Number;
use crate::value::{Map, RawExpression, Value, Variable};
use serde_json::Value as JsonValue;

const VAR_MARKER: &str = "$var";
const FUNC_MARKER: &str = "$func";

impl TryFrom<&JsonValue> for Value {
    type Error = Error;

    fn try_from(v: &JsonValue) -> Result<Self, Self::Error> {
        value_from_json(v, &mut ErrorPath::new())
    }
}

impl TryFrom<JsonValue> for Value {
    type Error = Error;

    fn try_from(v: JsonValue) -> Result<Self, Self::Error> {
        TryFrom::try_from(&v)
    }
}

impl TryFrom<&JsonValue> for Block {
    type Error = Error;

    fn try_from(v: &JsonValue) -> Result<Self, Self::Error> {
        block_from_json(v, &mut ErrorPath::new())
    }
}

impl TryFrom<JsonValue> for Block {
    type Error = Error;

    fn try_from(v: JsonValue) -> Result<Self, Self::Error> {
        TryFrom::try_from(&v)
    }
}

fn value_from_json(v: &JsonValue, path: &mut ErrorPath) -> Result<Value> {
    match v {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => number_from_json(n, path).map(Value::Number),
        JsonValue::String(s) => Ok(Value::String(s.clone())),
        JsonValue::Array(array) => {
            let mut values = Vec::with_capacity(array.len());

            for (index, element) in array.iter().enumerate() {
                path.push_index(index);
                values.push(value_from_json(element, path)?);
                path.pop();
            }

            Ok(Value::Array(values))
        }
        JsonValue::Object(object) => {
            if let Some(marker) = object.keys().find(|k| is_marker(k.as_str())) {
                if object.len() > 1 {
                    return Err(Error::unsupported_value_kind(
                        format!("object mixing the `{}` marker with other keys", marker),
                        path.clone(),
                    ));
                }

                return marker_from_json(marker, &object[marker], path);
            }

            let mut map = Map::with_capacity(object.len());

            for (key, value) in object {
                path.push_key(key.as_str());
                map.insert(key.clone(), value_from_json(value, path)?);
                path.pop();
            }

            Ok(Value::Object(map))
        }
    }
}

fn marker_from_json(marker: &str, payload: &JsonValue, path: &mut ErrorPath) -> Result<Value> {
    let expr = match payload {
        JsonValue::String(s) => s,
        other => {
            return Err(Error::unsupported_value_kind(
                format!("`{}` marker with {} payload", marker, json_kind(other)),
                path.clone(),
            ))
        }
    };

    if expr.is_empty() {
        return Err(Error::malformed_expression(marker, path.clone()));
    }

    match marker {
        VAR_MARKER => Ok(Value::Variable(Variable::new(expr))),
        FUNC_MARKER => Ok(Value::RawExpr(RawExpression::new(expr))),
        _ => unreachable!(),
    }
}

fn number_from_json(n: &serde_json::Number, path: &ErrorPath) -> Result<Number> {
    if let Some(pos) = n.as_u64() {
        Ok(pos.into())
    } else if let Some(neg) = n.as_i64() {
        Ok(neg.into())
    } else {
        n.as_f64().and_then(Number::from_f64).ok_or_else(|| {
            Error::unsupported_value_kind("non-finite number", path.clone())
        })
    }
}

fn block_from_json(v: &JsonValue, path: &mut ErrorPath) -> Result<Block> {
    let object = match v {
        JsonValue::Object(object) => object,
        other => {
            return Err(Error::unsupported_value_kind(
                format!("{} where a block object was expected", json_kind(other)),
                path.clone(),
            ))
        }
    };

    let block_path = match object.get("block") {
        Some(JsonValue::Array(array)) => {
            let mut elements = Vec::with_capacity(array.len());

            for element in array {
                match element {
                    JsonValue::String(s) => elements.push(s.clone()),
                    other => {
                        return Err(Error::invalid_block_path(
                            path.clone(),
                            format!("block path element is {}, not a string", json_kind(other)),
                        ))
                    }
                }
            }

            elements
        }
        Some(other) => {
            return Err(Error::invalid_block_path(
                path.clone(),
                format!("`block` is {}, not an array of strings", json_kind(other)),
            ))
        }
        None => {
            return Err(Error::invalid_block_path(
                path.clone(),
                "missing `block` key",
            ))
        }
    };

    for element in &block_path {
        path.push_key(element.clone());
    }

    let mut block = Block::new(block_path.clone());

    if let Some(attributes) = object.get("attributes") {
        match attributes {
            JsonValue::Object(attributes) => {
                for (key, value) in attributes {
                    path.push_key(key.as_str());
                    let value = value_from_json(value, path)?;
                    path.pop();
                    block = block.attribute(key.as_str(), value);
                }
            }
            other => {
                return Err(Error::unsupported_value_kind(
                    format!("`attributes` is {}, not an object", json_kind(other)),
                    path.clone(),
                ))
            }
        }
    }

    if let Some(children) = object.get("child") {
        match children {
            JsonValue::Array(children) => {
                for child in children {
                    block = block.child(block_from_json(child, path)?);
                }
            }
            other => {
                return Err(Error::unsupported_value_kind(
                    format!("`child` is {}, not an array", json_kind(other)),
                    path.clone(),
                ))
            }
        }
    }

    for _ in &block_path {
        path.pop();
    }

    Ok(block)
}

fn is_marker(key: &str) -> bool {
    key == VAR_MARKER || key == FUNC_MARKER
}

fn json_kind(v: &JsonValue) -> &'static str {
    match v {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
