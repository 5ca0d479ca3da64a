//! Request handler for numsentence-server

use numsentence_core::expr::{format_value, sanitize, Evaluator, Expr, ExprError, Parser};
use numsentence_core::{Config, Request, Response};
use tracing::{debug, info};

pub struct Handler {
    parser: Parser,
    evaluator: Evaluator,
    precision: usize,
}

impl Handler {
    pub fn new(config: Config) -> Self {
        Self {
            parser: Parser::from_config(&config),
            evaluator: Evaluator::new(),
            precision: config.precision,
        }
    }

    pub fn handle(&mut self, request: &Request) -> Response {
        match request {
            Request::Evaluate { expr } => self.handle_evaluate(expr),
            Request::Parse { expr } => self.handle_parse(expr),
            Request::Shutdown => {
                info!("Shutdown requested");
                Response::success()
            }
        }
    }

    fn handle_evaluate(&self, expr_str: &str) -> Response {
        debug!("Evaluate request: expr={}", expr_str);

        let result = self
            .parse(expr_str)
            .and_then(|tree| self.evaluator.eval(&tree));

        match result {
            Ok(value) => Response::eval_result(value, format_value(value, self.precision)),
            Err(e) => e.into(),
        }
    }

    fn handle_parse(&self, expr_str: &str) -> Response {
        debug!("Parse request: expr={}", expr_str);

        match self.parse(expr_str) {
            Ok(tree) => Response::tree(tree),
            Err(e) => e.into(),
        }
    }

    fn parse(&self, expr_str: &str) -> Result<Expr, ExprError> {
        let expression = sanitize(expr_str)?;
        self.parser.parse(&expression)
    }
}
