//! Parameter handling shared by both API generations.
//!
//! Every request struct in this crate is a bag of `Option` fields. Before a
//! body or query string is built the serialized value goes through [`filter`],
//! so unset fields never reach Harvest.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{HarvestError, Result};

/// Paging knobs accepted by every v2 list endpoint. Flattened into filters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListOptions {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

fn is_empty(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        _ => false,
    }
}

/// Drop null and empty members, recursively. `false` and `0` survive.
pub fn filter(value: Value) -> Value {
    match value {
        Value::Object(obj) => {
            let out: Map<String, Value> = obj
                .into_iter()
                .map(|(k, v)| (k, filter(v)))
                .filter(|(_, v)| !is_empty(v))
                .collect();
            Value::Object(out)
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(filter).filter(|v| !is_empty(v)).collect()),
        other => other,
    }
}

/// Serialize and filter into a JSON object suitable as a request body.
pub fn body<T: Serialize + ?Sized>(params: &T) -> Result<Value> {
    match filter(serde_json::to_value(params)?) {
        v @ Value::Object(_) => Ok(v),
        Value::Null => Ok(Value::Object(Map::new())),
        other => Err(HarvestError::InvalidInput(format!("request parameters must be an object, got {}", other))),
    }
}

/// Legacy bodies are wrapped under the resource name, e.g. `{"client": {...}}`.
pub fn wrapped<T: Serialize + ?Sized>(root: &str, params: &T) -> Result<Value> {
    let inner = body(params)?;
    let mut obj = Map::new();
    obj.insert(root.to_string(), inner);
    Ok(Value::Object(obj))
}

fn scalar_to_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(scalar_to_string).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// Serialize and filter into query pairs. Arrays become comma separated lists.
pub fn query<T: Serialize + ?Sized>(params: &T) -> Result<Vec<(String, String)>> {
    let obj = match body(params)? {
        Value::Object(o) => o,
        _ => Map::new(),
    };
    Ok(obj.iter().map(|(k, v)| (k.clone(), scalar_to_string(v))).collect())
}

/// Fails with one message naming every missing field.
pub fn require(body: &Value, fields: &[&str]) -> Result<()> {
    let missing: Vec<&str> = fields
        .iter()
        .copied()
        .filter(|f| body.get(*f).map(is_empty).unwrap_or(true))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(HarvestError::InvalidInput(format!("missing required field(s): {}", missing.join(", "))))
    }
}

/// Serializes `Option<bool>` as the legacy API's `yes` / `no`.
pub(crate) fn yes_no<S: Serializer>(value: &Option<bool>, s: S) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(true) => s.serialize_str("yes"),
        Some(false) => s.serialize_str("no"),
        None => s.serialize_none(),
    }
}

/// Legacy `updated_since` timestamps are `YYYY-MM-DD HH:MM` in UTC.
pub(crate) fn legacy_timestamp<S: Serializer>(value: &Option<DateTime<Utc>>, s: S) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(t) => s.serialize_str(&t.format("%Y-%m-%d %H:%M").to_string()),
        None => s.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Default)]
    struct Sample {
        name: Option<String>,
        is_active: Option<bool>,
        hourly_rate: Option<f64>,
        ids: Option<Vec<u64>>,
        #[serde(flatten)]
        paging: ListOptions,
    }

    #[test]
    fn filter_drops_null_and_empty_but_keeps_false_and_zero() {
        let v = filter(json!({
            "a": null,
            "b": "",
            "c": false,
            "d": 0,
            "e": [],
            "f": {"g": null},
            "h": [null, "", 1],
            "i": "x"
        }));
        assert_eq!(v, json!({"c": false, "d": 0, "h": [1], "i": "x"}));
    }

    #[test]
    fn query_flattens_scalars_and_arrays() {
        let p = Sample {
            name: Some("Acme".into()),
            is_active: Some(false),
            ids: Some(vec![1, 2, 3]),
            paging: ListOptions { page: Some(2), per_page: None },
            ..Default::default()
        };
        let mut q = query(&p).unwrap();
        q.sort();
        assert_eq!(
            q,
            vec![
                ("ids".to_string(), "1,2,3".to_string()),
                ("is_active".to_string(), "false".to_string()),
                ("name".to_string(), "Acme".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn unit_params_yield_no_query() {
        assert!(query(&()).unwrap().is_empty());
    }

    #[test]
    fn require_reports_all_missing_fields() {
        let b = body(&Sample { name: Some(String::new()), ..Default::default() }).unwrap();
        let err = require(&b, &["name", "hourly_rate"]).unwrap_err();
        match err {
            HarvestError::InvalidInput(msg) => {
                assert!(msg.contains("name"), "message: {}", msg);
                assert!(msg.contains("hourly_rate"), "message: {}", msg);
            }
            other => panic!("unexpected error variant: {:?}", other),
        }
    }

    #[test]
    fn non_object_params_are_rejected() {
        assert!(matches!(body(&vec![1, 2]), Err(HarvestError::InvalidInput(_))));
    }

    #[test]
    fn wrapped_nests_under_root() {
        let b = wrapped("client", &Sample { name: Some("Acme".into()), ..Default::default() }).unwrap();
        assert_eq!(b, json!({"client": {"name": "Acme"}}));
    }
}
