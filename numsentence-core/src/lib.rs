//! numsentence core library
//!
//! - Number sentence parsing and evaluation
//! - Configuration loading
//! - JSON line protocol shared with numsentence-server

pub mod config;
pub mod expr;
pub mod protocol;

pub use config::{Config, ConfigError};
pub use expr::{evaluate, evaluate_str, parse_expr, sanitize, Evaluator, Expr, ExprError, Parser};
pub use protocol::{Request, Response};
