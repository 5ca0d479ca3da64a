//! JSON-RPC Protocol definitions
//!
//! One message per line between a client and numsentence-server.

use crate::expr::{Expr, ExprError};
use serde::{Deserialize, Serialize};

/// Request from a client to numsentence-server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum Request {
    /// Evaluate an expression to a number
    #[serde(rename = "evaluate")]
    Evaluate { expr: String },

    /// Parse an expression and return its tree
    #[serde(rename = "parse")]
    Parse { expr: String },

    /// Shutdown the server
    #[serde(rename = "shutdown")]
    Shutdown,
}

/// Response from numsentence-server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    /// `value` is null when the result is not finite
    EvalResult { value: Option<f64>, display: String },
    Tree {
        tree: Expr,
        rendered: String,
        depth: usize,
    },
    Success { ok: bool },
    Error { error: String, kind: String },
}

impl Response {
    pub fn success() -> Self {
        Response::Success { ok: true }
    }

    pub fn error(msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Response::Error {
            error: msg.into(),
            kind: kind.into(),
        }
    }

    pub fn eval_result(value: f64, display: impl Into<String>) -> Self {
        Response::EvalResult {
            value: value.is_finite().then_some(value),
            display: display.into(),
        }
    }

    pub fn tree(tree: Expr) -> Self {
        Response::Tree {
            rendered: tree.to_string(),
            depth: tree.depth(),
            tree,
        }
    }
}

impl From<ExprError> for Response {
    fn from(err: ExprError) -> Self {
        Response::error(err.to_string(), err.kind())
    }
}

/// JSON-RPC message wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcMessage<T> {
    pub jsonrpc: String,
    pub id: Option<u64>,
    #[serde(flatten)]
    pub content: T,
}

impl<T> RpcMessage<T> {
    pub fn new(id: u64, content: T) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: Some(id),
            content,
        }
    }
}
