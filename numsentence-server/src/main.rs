//! numsentence Server
//!
//! JSON-RPC server that parses and evaluates number sentences.
//! Communicates via stdin/stdout for easy subprocess management.

use anyhow::{Context, Result};
use numsentence_core::protocol::RpcMessage;
use numsentence_core::{Config, Request, Response};
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info, Level};

mod handler;

fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is for JSON-RPC)
    let level = if std::env::var("NUMSENTENCE_DEBUG").is_ok() {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    info!("numsentence-server starting...");

    let config = Config::load().context("Failed to load configuration")?;
    debug!("Configuration: {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut handler = handler::Handler::new(config);

    serve(stdin.lock(), stdout.lock(), &mut handler)?;

    info!("numsentence-server shutting down");
    Ok(())
}

/// Answer one request per input line until EOF or shutdown
fn serve<R: BufRead, W: Write>(input: R, mut output: W, handler: &mut handler::Handler) -> Result<()> {
    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("Failed to read line: {}", e);
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        debug!("Received: {}", line);

        let mut shutdown = false;
        let response = match serde_json::from_str::<RpcMessage<Request>>(&line) {
            Ok(msg) => {
                shutdown = matches!(msg.content, Request::Shutdown);
                let result = handler.handle(&msg.content);
                RpcMessage::new(msg.id.unwrap_or(0), result)
            }
            Err(e) => RpcMessage::new(0, Response::error(format!("Parse error: {}", e), "protocol")),
        };

        // Send response
        let response_json = serde_json::to_string(&response)?;
        debug!("Sending: {}", response_json);
        writeln!(output, "{}", response_json)?;
        output.flush()?;

        if shutdown {
            break;
        }
    }

    Ok(())
}
