//! Schema-agnostic tree rewriting.
//!
//! Theme documents are walked as plain JSON values so unknown fields survive
//! untouched. Keys, array order and non-string scalars are preserved; only
//! string scalars are handed to the rewrite function.

use std::convert::Infallible;

use serde_json::{Map, Value};

use crate::color::looks_like_color;

/// Rebuild `node` with every string scalar passed through `f`.
pub fn rewrite<F>(node: &Value, mut f: F) -> Value
where
    F: FnMut(&str) -> String,
{
    match try_rewrite(node, &mut |s: &str| Ok::<_, Infallible>(f(s))) {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Fallible [`rewrite`]: the first error aborts the walk.
pub fn try_rewrite<F, E>(node: &Value, f: &mut F) -> Result<Value, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    Ok(match node {
        Value::String(s) => Value::String(f(s)?),
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, value) in map {
                out.insert(key.clone(), try_rewrite(value, f)?);
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| try_rewrite(item, f))
                .collect::<Result<_, _>>()?,
        ),
        other => other.clone(),
    })
}

/// [`rewrite`] restricted to color candidates (strings starting with `#`).
pub fn rewrite_colors<F>(node: &Value, mut f: F) -> Value
where
    F: FnMut(&str) -> String,
{
    rewrite(node, |s| {
        if looks_like_color(s) {
            f(s)
        } else {
            s.to_string()
        }
    })
}
