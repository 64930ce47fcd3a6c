use crate::domain::error::GatewayError;
use serde::Serialize;
use serde_json::{Map, Value};

pub const RESULT_CODE: &str = "RESULT_CODE";
pub const EXT_ORD_ID: &str = "EXT_ORD_ID";

pub type AnyError = Box<dyn std::error::Error + Send + Sync>;

/// Container for the outbound payload handed over by the payment command.
pub trait Transfer {
    fn body(&self) -> &Map<String, Value>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderRequest {
    body: Map<String, Value>,
}

impl OrderRequest {
    pub fn new(body: Map<String, Value>) -> Self {
        Self { body }
    }

    pub fn into_body(self) -> Map<String, Value> {
        self.body
    }
}

impl Transfer for OrderRequest {
    fn body(&self) -> &Map<String, Value> {
        &self.body
    }
}

impl From<Map<String, Value>> for OrderRequest {
    fn from(body: Map<String, Value>) -> Self {
        Self::new(body)
    }
}

impl TryFrom<Value> for OrderRequest {
    type Error = GatewayError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(body) => Ok(Self::new(body)),
            other => Err(GatewayError::InvalidRequest(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Outcome of an order authorization attempt.
///
/// `fields` always holds the complete decoded gateway response, `id` included.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AuthorizeResult {
    Accepted {
        order_id: Value,
        fields: Map<String, Value>,
    },
    Rejected {
        fields: Map<String, Value>,
    },
}

impl AuthorizeResult {
    /// Classifies a decoded gateway response. A null `id` counts as absent.
    pub fn from_response(fields: Map<String, Value>) -> Self {
        match fields.get("id") {
            Some(id) if !id.is_null() => AuthorizeResult::Accepted {
                order_id: id.clone(),
                fields,
            },
            _ => AuthorizeResult::Rejected { fields },
        }
    }

    pub fn result_code(&self) -> u8 {
        match self {
            AuthorizeResult::Accepted { .. } => 1,
            AuthorizeResult::Rejected { .. } => 0,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, AuthorizeResult::Accepted { .. })
    }

    pub fn order_id(&self) -> Option<&Value> {
        match self {
            AuthorizeResult::Accepted { order_id, .. } => Some(order_id),
            AuthorizeResult::Rejected { .. } => None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        match self {
            AuthorizeResult::Accepted { fields, .. }
            | AuthorizeResult::Rejected { fields } => fields,
        }
    }

    /// Flattens into the mapping the payment command layer reads:
    /// `RESULT_CODE`, `EXT_ORD_ID` when accepted, then every decoded field.
    /// Decoded fields override the synthesized defaults on key collision.
    pub fn into_result_map(self) -> Map<String, Value> {
        let result_code = self.result_code();
        let (order_id, fields) = match self {
            AuthorizeResult::Accepted { order_id, fields } => (Some(order_id), fields),
            AuthorizeResult::Rejected { fields } => (None, fields),
        };

        let mut map = Map::new();
        map.insert(RESULT_CODE.to_string(), Value::from(result_code));
        if let Some(order_id) = order_id {
            map.insert(EXT_ORD_ID.to_string(), order_id);
        }
        map.extend(fields);
        map
    }
}
