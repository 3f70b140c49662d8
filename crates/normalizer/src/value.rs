//! Result-tree → host-value conversion.
//!
//! Walks an engine result tree and produces an independent
//! [`serde_json::Value`]. Conversion is total over all node variants, never
//! mutates the source tree, and never retains a reference into it — the tree
//! can be disposed immediately afterwards without affecting the output.

use serde_json::{Map, Number, Value};

use crate::engine::ResultNode;

/// Convert one result-tree node into an owned host value.
///
/// Structural recursion, depth bounded by the input tree:
/// - scalars are value-preserving (`i64` and `f64` without narrowing)
/// - string payloads are copied out of the engine buffer
/// - list order is preserved exactly
/// - maps keep the engine's insertion order; a duplicate key (impossible
///   under the engine's own invariants) overwrites the earlier entry
pub fn convert(node: &ResultNode) -> Value {
    match node {
        ResultNode::Null => Value::Null,
        ResultNode::Bool(b) => Value::Bool(*b),
        ResultNode::Int(i) => Value::Number((*i).into()),
        // The engine's numeric parser only emits finite floats; non-finite
        // values have no JSON form.
        ResultNode::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
        ResultNode::Str(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ResultNode::List(items) => Value::Array(items.iter().map(convert).collect()),
        ResultNode::Map(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, child) in entries {
                map.insert(key.clone(), convert(child));
            }
            Value::Object(map)
        }
    }
}
