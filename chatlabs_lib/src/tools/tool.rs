use serde::Serialize;
use serde_json::{json, Value};

/// Tool parameter data types.
pub enum ParamType {
    /// String.
    String,
    /// Integer.
    Integer,
    /// Number.
    Number,
    /// Boolean.
    Boolean,
}

impl Serialize for ParamType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        match &self {
            ParamType::String => serializer.serialize_str("string"),
            ParamType::Integer => serializer.serialize_str("integer"),
            ParamType::Number => serializer.serialize_str("number"),
            ParamType::Boolean => serializer.serialize_str("boolean"),
        }
    }
}

/// Tool parameter specification.
pub struct ToolParam {
    /// Parameter name.
    pub name: String,
    /// Parameter description.
    pub description: String,
    /// Parameter data type.
    pub data_type: ParamType,
    /// Value is required.
    pub required: bool,
}

/// Tool specification.
pub struct ToolSpec {
    /// Tool/function name.
    pub name: String,
    /// Tool description.
    pub description: String,
    /// Tool parameters.
    pub params: Vec<ToolParam>,
}

impl ToolSpec {

    /// JSON Schema shaped description of the tool parameters.
    pub fn params_schema(&self) -> Value {
        let mut required = Vec::with_capacity(self.params.len());

        let mut result = json!({
            "type": "object",
            "properties": {},
        });

        for param in &self.params {
            result["properties"][&param.name] = json!({
                "type": param.data_type,
                "description": param.description,
            });
            if param.required {
                required.push(Value::String(param.name.clone()));
            }
        }

        result["required"] = Value::Array(required);
        result["additionalProperties"] = Value::Bool(false);

        result
    }
}

/// Tool choice settings.
pub enum ToolChoice {
    /// Do not use tools.
    None,
    /// LLM decide whether to call any of provided tools or not.
    Auto,
    /// LLM must use any one of the provided tools.
    Required,
    /// LLM must call specified tool (name).
    Force(String),
}
