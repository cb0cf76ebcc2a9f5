//! Resource-agnostic description of one HTTP call.

use crate::HarnessError;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    #[default]
    Empty,
    Json(Value),
    /// Sent as `application/x-www-form-urlencoded`.
    Form(Vec<(String, String)>),
}

/// Method, path template and parameters of a request, before it is bound
/// to a base URL. Path templates use `{name}` placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    method: Method,
    path: String,
    path_params: Vec<(String, String)>,
    query: Vec<(String, String)>,
    payload: Payload,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            path_params: Vec::new(),
            query: Vec::new(),
            payload: Payload::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn path_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.path_params.push((name.into(), value.to_string()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Add a form field. Replaces a JSON body if one was set.
    pub fn form(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        let field = (name.into(), value.to_string());
        match &mut self.payload {
            Payload::Form(fields) => fields.push(field),
            payload => *payload = Payload::Form(vec![field]),
        }
        self
    }

    /// Serialize `body` as the JSON payload. Replaces form fields if any were set.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, HarnessError> {
        let value = serde_json::to_value(body)
            .map_err(|e| HarnessError::from_serialization_error(e, &self.describe()))?;
        self.payload = Payload::Json(value);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path_template(&self) -> &str {
        &self.path
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// `METHOD /template`, used as error and log context.
    pub fn describe(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    /// Substitute every `{name}` placeholder with its percent-encoded value.
    pub fn resolve_path(&self) -> Result<String, HarnessError> {
        let mut resolved = String::with_capacity(self.path.len());
        let mut rest = self.path.as_str();

        while let Some(open) = rest.find('{') {
            resolved.push_str(&rest[..open]);
            let after_open = &rest[open + 1..];
            let close = after_open
                .find('}')
                .ok_or_else(|| HarnessError::InvalidRequest {
                    context: self.describe(),
                    reason: "unterminated path placeholder".to_string(),
                })?;
            let name = &after_open[..close];
            let value = self
                .path_params
                .iter()
                .find(|(param, _)| param == name)
                .map(|(_, value)| value)
                .ok_or_else(|| HarnessError::InvalidRequest {
                    context: self.describe(),
                    reason: format!("no value for path parameter '{name}'"),
                })?;
            resolved.push_str(&urlencoding::encode(value));
            rest = &after_open[close + 1..];
        }
        resolved.push_str(rest);

        Ok(resolved)
    }
}
