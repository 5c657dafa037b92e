//! # Toolkit CLI
//!
//! Command-line front end for `toolkit_core`. Running it without a
//! subcommand prints a short demo of every utility; the subcommands expose
//! each function individually.
//!
//! ```text
//! toolkit                        # demo
//! toolkit chunk --size 3 a b c d
//! toolkit capitalize "click me"
//! toolkit date 2024-03-10T01:30:00+05:00
//! toolkit calc / 7 2
//! toolkit --json calc divide 5 0
//! ```

mod logger;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use toolkit_core::calculator::Operation;
use toolkit_core::utils::{capitalize, chunk, chunk_signed, format_date, parse_instant, DATE_FORMAT};
use toolkit_core::{ToolkitError, ToolkitResult};

#[derive(Parser, Debug)]
#[command(name = "toolkit", version, about = "Shared utilities and calculator demo")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results (and errors) as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every utility on sample data
    Demo,

    /// Split items into groups of SIZE
    Chunk {
        #[arg(short, long, allow_negative_numbers = true)]
        size: i64,
        items: Vec<String>,
    },

    /// Upper-case the first character of TEXT
    Capitalize { text: String },

    /// Format an RFC 3339 timestamp (default: now) as a UTC calendar date
    Date { timestamp: Option<String> },

    /// Apply an operation (add, subtract, multiply, divide or + - * /)
    Calc {
        op: Operation,
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
}

/// A command's result in both human and JSON form
struct Output {
    text: String,
    json: Value,
}

fn run(command: &Command) -> ToolkitResult<Output> {
    match command {
        Command::Demo => demo(),
        Command::Chunk { size, items } => {
            let chunks = chunk_signed(items, *size)?;
            Ok(Output {
                text: format!("{:?}", chunks),
                json: json!({ "size": size, "chunks": chunks }),
            })
        }
        Command::Capitalize { text } => {
            let result = capitalize(text);
            Ok(Output {
                json: json!({ "input": text, "result": result }),
                text: result,
            })
        }
        Command::Date { timestamp } => {
            let instant = match timestamp {
                Some(ts) => parse_instant(ts)?,
                None => Utc::now(),
            };
            let formatted = format_date(&instant);
            Ok(Output {
                json: json!({
                    "instant": instant.to_rfc3339(),
                    "format": DATE_FORMAT,
                    "date": formatted,
                }),
                text: formatted,
            })
        }
        Command::Calc { op, a, b } => {
            let result = op.apply(*a, *b)?;
            Ok(Output {
                text: format!("{} {} {} = {}", a, op.symbol(), b, result),
                json: json!({ "operation": op, "a": a, "b": b, "result": result }),
            })
        }
    }
}

fn demo() -> ToolkitResult<Output> {
    let label = capitalize("click me");
    let generated_on = format_date(&Utc::now());
    let data: Vec<i32> = (1..=10).collect();
    let chunks = chunk(&data, 3)?;

    let mut text = String::new();
    text.push_str("Toolkit Demo\n");
    text.push_str("============\n\n");
    text.push_str("Text:\n");
    text.push_str(&format!("  capitalize(\"click me\") = {}\n\n", label));
    text.push_str("Dates:\n");
    text.push_str(&format!("  Generated on {}\n\n", generated_on));
    text.push_str("Chunking:\n");
    text.push_str(&format!("  Original:     {:?}\n", data));
    text.push_str(&format!("  Chunked by 3: {:?}\n\n", chunks));
    text.push_str("Calculator:\n");
    for op in Operation::ALL {
        match op.apply(8.0, 2.0) {
            Ok(v) => text.push_str(&format!("  8 {} 2 = {}\n", op.symbol(), v)),
            Err(e) => text.push_str(&format!("  8 {} 2 failed: {}\n", op.symbol(), e)),
        }
    }

    Ok(Output {
        json: json!({
            "label": label,
            "generated_on": generated_on,
            "data": data,
            "chunks": chunks,
        }),
        text,
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let command = cli.command.unwrap_or(Command::Demo);
    tracing::debug!(?command, "running command");

    match run(&command) {
        Ok(output) => {
            if cli.json {
                let rendered = serde_json::to_string_pretty(&output.json).context("failed to render result JSON")?;
                println!("{}", rendered);
            } else {
                println!("{}", output.text.trim_end());
            }
            Ok(())
        }
        Err(e) => {
            tracing::debug!(code = e.error_code(), "command failed: {}", e);
            eprintln!("{}", render_error(&e, cli.json)?);
            std::process::exit(1);
        }
    }
}

/// Error text for stderr; with `json` set this is the JSON document and nothing else.
fn render_error(e: &ToolkitError, json: bool) -> anyhow::Result<String> {
    if json {
        serde_json::to_string_pretty(e).context("failed to render error JSON")
    } else {
        Ok(format!("Error: {}", e))
    }
}
