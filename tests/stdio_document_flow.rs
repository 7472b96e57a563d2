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

fn tool_call(id: u64, name: &str, arguments: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {
            "name": name,
            "arguments": arguments
        }
    })
}

#[test]
fn add_analyze_and_search_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-doc-analyzer"))
        .args(["serve", "--stdio"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    let add_response = send_request(
        &mut stdin,
        &mut stdout,
        tool_call(
            10,
            "add_document",
            serde_json::json!({
                "document_data": {
                    "title": "T",
                    "author": "A",
                    "content": "I love this great product. It is amazing!"
                }
            }),
        ),
    )?;
    let add_result = add_response.get("result").expect("result present");
    assert_eq!(add_result.get("isError").and_then(|v| v.as_bool()), Some(false));
    let document_id = add_result
        .get("structuredContent")
        .and_then(|value| value.get("id"))
        .and_then(|value| value.as_str())
        .expect("id present")
        .to_string();
    let text = add_result
        .get("content")
        .and_then(|value| value.get(0))
        .and_then(|value| value.get("text"))
        .and_then(|value| value.as_str())
        .expect("text present");
    assert_eq!(text, format!("Document added with ID: {document_id}"));

    let analyze_response = send_request(
        &mut stdin,
        &mut stdout,
        tool_call(
            11,
            "analyze_document",
            serde_json::json!({ "document_id": document_id }),
        ),
    )?;
    let analysis = analyze_response
        .get("result")
        .and_then(|value| value.get("structuredContent"))
        .expect("analysis present");
    assert_eq!(analysis.get("sentiment").and_then(|v| v.as_str()), Some("positive"));
    assert_eq!(analysis.get("word_count").and_then(|v| v.as_u64()), Some(8));
    assert_eq!(analysis.get("sentence_count").and_then(|v| v.as_u64()), Some(2));
    assert_eq!(analysis.get("title").and_then(|v| v.as_str()), Some("T"));
    assert_eq!(analysis.get("author").and_then(|v| v.as_str()), Some("A"));
    let keywords: Vec<&str> = analysis
        .get("keywords")
        .and_then(|v| v.as_array())
        .expect("keywords present")
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    for expected in ["love", "great", "product", "amazing"] {
        assert!(keywords.contains(&expected), "missing {expected}");
    }
    assert!(
        analysis
            .get("readability_score")
            .and_then(|v| v.as_f64())
            .is_some()
    );

    let search_response = send_request(
        &mut stdin,
        &mut stdout,
        tool_call(12, "search_documents", serde_json::json!({ "query": "PRODUCT" })),
    )?;
    let results = search_response
        .get("result")
        .and_then(|value| value.get("structuredContent"))
        .and_then(|value| value.get("results"))
        .and_then(|value| value.as_array())
        .expect("results present");
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].get("id").and_then(|v| v.as_str()),
        Some(document_id.as_str())
    );
    assert_eq!(results[0].get("title").and_then(|v| v.as_str()), Some("T"));

    let _ = child.kill();
    Ok(())
}

#[test]
fn unknown_document_is_reported_and_server_keeps_running() -> Result<(), Box<dyn std::error::Error>>
{
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-doc-analyzer"))
        .args(["serve", "--stdio"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    let response = send_request(
        &mut stdin,
        &mut stdout,
        tool_call(
            20,
            "analyze_document",
            serde_json::json!({ "document_id": "11111111-2222-4333-8444-555555555555" }),
        ),
    )?;
    let result = response.get("result").expect("result present");
    assert_eq!(result.get("isError").and_then(|v| v.as_bool()), Some(true));
    let error = result
        .get("structuredContent")
        .and_then(|value| value.get("error"))
        .expect("error present");
    assert_eq!(error.get("kind").and_then(|v| v.as_str()), Some("not_found"));
    assert_eq!(
        error.get("message").and_then(|v| v.as_str()),
        Some("Document not found")
    );

    // malformed line and a notification produce no output
    writeln!(stdin, "{{not json")?;
    writeln!(
        stdin,
        "{}",
        serde_json::json!({"jsonrpc": "2.0", "method": "notifications/initialized"})
    )?;

    let response = send_request(
        &mut stdin,
        &mut stdout,
        serde_json::json!({"jsonrpc": "2.0", "id": 21, "method": "ping"}),
    )?;
    assert_eq!(response.get("id").and_then(|v| v.as_i64()), Some(21));
    assert!(response.get("result").is_some());

    let _ = child.kill();
    Ok(())
}
