use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value, json};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod analysis;
mod config;
mod input;
mod mcp;
mod store;
mod tools;

use config::Config;
use tools::ToolContext;

const METHOD_NOT_FOUND: i64 = -32601;

#[derive(Parser)]
#[command(name = "mcp-doc-analyzer")]
#[command(
    version,
    about = "Document analysis tools (sentiment, keywords, readability, search) over MCP"
)]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
#[command(
    group(
        clap::ArgGroup::new("input")
            .required(true)
            .multiple(false)
            .args(["text", "path"])
    )
)]
struct TextArgs {
    /// Text to analyze
    #[arg(long)]
    text: Option<String>,
    /// Path to a UTF-8 text file
    #[arg(long)]
    path: Option<String>,
}

#[derive(Args, Clone)]
struct SentimentArgs {
    #[command(flatten)]
    input: TextArgs,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct KeywordsArgs {
    #[command(flatten)]
    input: TextArgs,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
    /// Maximum keywords to return
    #[arg(long)]
    limit: Option<u64>,
}

#[derive(Args, Clone)]
struct ReadabilityArgs {
    #[command(flatten)]
    input: TextArgs,
    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP stdio server
    Serve {
        /// Serve MCP over stdio (NDJSON)
        #[arg(long)]
        stdio: bool,
    },
    /// Classify the sentiment of text
    Sentiment(SentimentArgs),
    /// Extract top keywords from text
    Keywords(KeywordsArgs),
    /// Flesch reading-ease score of text
    Readability(ReadabilityArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(&config)?;

    let ctx = ToolContext::new(&config);
    match cli.command {
        Commands::Serve { stdio } => {
            if stdio {
                run_stdio_server(&ctx)
            } else {
                anyhow::bail!("only --stdio transport is supported")
            }
        }
        Commands::Sentiment(args) => run_sentiment(&ctx, args),
        Commands::Keywords(args) => run_keywords(&ctx, args),
        Commands::Readability(args) => run_readability(&ctx, args),
    }
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .with_context(|| format!("invalid log_filter: {}", config.log_filter))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn run_sentiment(ctx: &ToolContext, args: SentimentArgs) -> Result<()> {
    let map = build_text_args(&args.input);
    let result = tools::get_sentiment::call(ctx, &Value::Object(map));
    print_tool_result(result, args.json)
}

fn run_keywords(ctx: &ToolContext, args: KeywordsArgs) -> Result<()> {
    let mut map = build_text_args(&args.input);
    if let Some(limit) = args.limit {
        map.insert("limit".to_string(), json!(limit));
    }
    let result = tools::extract_keywords::call(ctx, &Value::Object(map));
    print_tool_result(result, args.json)
}

fn run_readability(ctx: &ToolContext, args: ReadabilityArgs) -> Result<()> {
    let text = load_text(&args.input);
    let score = match ctx.analyzer.readability(&text) {
        Ok(score) => score,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    if args.json {
        let output = serde_json::to_string_pretty(&json!({
            "readability_score": score,
            "word_count": analysis::word_count(&text),
            "sentence_count": analysis::sentence_count(&text),
        }))?;
        println!("{output}");
    } else {
        println!("{score}");
    }
    Ok(())
}

fn load_text(args: &TextArgs) -> String {
    if let Some(text) = &args.text {
        return text.clone();
    }
    let path = args.path.as_deref().unwrap_or_default();
    match input::read_text_file(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{}", err.message);
            process::exit(1);
        }
    }
}

fn build_text_args(input: &TextArgs) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("text".to_string(), json!(load_text(input)));
    map
}

fn print_tool_result(result: Value, json_output: bool) -> Result<()> {
    let is_error = result
        .get("isError")
        .and_then(|value| value.as_bool())
        .unwrap_or(false);

    if is_error {
        let message = result
            .get("structuredContent")
            .and_then(|value| value.get("error"))
            .and_then(|value| value.get("message"))
            .and_then(|value| value.as_str())
            .unwrap_or("tool error");
        eprintln!("{message}");
        process::exit(1);
    }

    if json_output {
        let structured = result
            .get("structuredContent")
            .cloned()
            .unwrap_or_else(|| json!({}));
        let output = serde_json::to_string_pretty(&structured)?;
        println!("{output}");
        return Ok(());
    }

    let text = result
        .get("content")
        .and_then(|value| value.as_array())
        .and_then(|arr| arr.first())
        .and_then(|value| value.get("text"))
        .and_then(|value| value.as_str())
        .unwrap_or("");
    println!("{text}");
    Ok(())
}

fn run_stdio_server(ctx: &ToolContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let reader = stdin.lock().lines();
    let mut writer = io::BufWriter::new(stdout.lock());

    info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "serving MCP over stdio"
    );

    for line in reader {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let request: Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "skipping malformed request line");
                continue;
            }
        };

        if let Some(response) = handle_request(ctx, &request) {
            let serialized =
                serde_json::to_string(&response).context("failed to serialize response")?;
            writeln!(writer, "{serialized}").context("failed to write response")?;
            writer.flush().context("failed to flush response")?;
        }
    }

    if ctx.store.is_empty() {
        info!("stdin closed, shutting down");
    } else {
        info!(
            documents = ctx.store.len(),
            "stdin closed, shutting down; in-memory documents are discarded"
        );
    }
    Ok(())
}

/// Builds the JSON-RPC response for one request. Notifications (no `id`) get
/// none.
fn handle_request(ctx: &ToolContext, request: &Value) -> Option<Value> {
    let method = request.get("method").and_then(|value| value.as_str());
    let id = request.get("id").cloned()?;
    debug!(method = method.unwrap_or("<missing>"), %id, "request");

    let result = match method {
        Some("initialize") => json!({
            "protocolVersion": mcp::contracts::PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
        Some("tools/list") => json!({
            "tools": mcp::tool_definitions()
        }),
        Some("tools/call") => handle_tool_call(ctx, request),
        Some("ping") => json!({}),
        _ => {
            return Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": {
                    "code": METHOD_NOT_FOUND,
                    "message": format!("method not found: {}", method.unwrap_or(""))
                }
            }));
        }
    };

    Some(json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result
    }))
}

fn handle_tool_call(ctx: &ToolContext, request: &Value) -> Value {
    let params = request.get("params");
    let Some(params) = params.and_then(|value| value.as_object()) else {
        return tools::error_result(mcp::errors::INVALID_INPUT, "params must be an object", None);
    };

    let name = params.get("name").and_then(|value| value.as_str());
    let Some(name) = name else {
        return tools::error_result(
            mcp::errors::INVALID_INPUT,
            "params.name must be a string",
            None,
        );
    };

    let args = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| json!({}));

    let result = tools::call(ctx, name, &args);
    if result.get("isError").and_then(|value| value.as_bool()) == Some(true) {
        warn!(tool = name, error = %result["structuredContent"]["error"], "tool call failed");
    }
    result
}
