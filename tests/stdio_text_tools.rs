use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

fn send_request(
    stdin: &mut std::process::ChildStdin,
    stdout: &mut BufReader<std::process::ChildStdout>,
    request: serde_json::Value,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let serialized = serde_json::to_string(&request)?;
    writeln!(stdin, "{serialized}")?;
    stdin.flush()?;

    let mut line = String::new();
    stdout.read_line(&mut line)?;
    let response: serde_json::Value = serde_json::from_str(line.trim())?;
    Ok(response)
}

#[test]
fn sentiment_and_keywords_over_stdio() -> Result<(), Box<dyn std::error::Error>> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-doc-analyzer"))
        .args(["serve", "--stdio"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    let sentiment_request = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 40,
        "method": "tools/call",
        "params": {
            "name": "get_sentiment",
            "arguments": { "text": "The service was terrible and the food was awful." }
        }
    });
    let response = send_request(&mut stdin, &mut stdout, sentiment_request)?;
    let sentiment = response
        .get("result")
        .and_then(|value| value.get("structuredContent"))
        .and_then(|value| value.get("sentiment"))
        .and_then(|value| value.as_str());
    assert_eq!(sentiment, Some("negative"));

    let keywords_request = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 41,
        "method": "tools/call",
        "params": {
            "name": "extract_keywords",
            "arguments": {
                "text": "Cargo builds crates. Cargo tests crates. Cargo publishes.",
                "limit": 2
            }
        }
    });
    let response = send_request(&mut stdin, &mut stdout, keywords_request)?;
    let keywords = response
        .get("result")
        .and_then(|value| value.get("structuredContent"))
        .and_then(|value| value.get("keywords"))
        .cloned()
        .expect("keywords present");
    assert_eq!(keywords, serde_json::json!(["cargo", "crates"]));

    let negative_limit = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 42,
        "method": "tools/call",
        "params": {
            "name": "extract_keywords",
            "arguments": { "text": "anything", "limit": -1 }
        }
    });
    let response = send_request(&mut stdin, &mut stdout, negative_limit)?;
    let result = response.get("result").expect("result present");
    assert_eq!(result.get("isError").and_then(|v| v.as_bool()), Some(true));

    let _ = child.kill();
    Ok(())
}
