use serde_json::{Number, Value};

/// Interpret value as str
#[macro_export(local_inner_macros)]
macro_rules! val_as_str {
    ($val:expr, $element:literal) => {
        $val
            .as_str()
            .ok_or(Error::LLMResponseError(std::concat!("can't extract ", $element, " from LLM API response.")))?
    }
}

pub fn set_i64_param(payload: &mut Value, key: &str, val: &Option<i64>) {
    if let Some(v) = val {
        payload[key] = Value::Number(Number::from_i128(*v as i128).unwrap());
    }
}

pub fn set_f64_param(payload: &mut Value, key: &str, val: &Option<f64>) {
    if let Some(v) = val {
        if v.is_finite() {
            payload[key] = Value::Number(Number::from_f64(*v).unwrap());
        }
    }
}
