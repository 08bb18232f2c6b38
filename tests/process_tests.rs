use host2cidr::common::{OutputFormat, WriteMode};
use host2cidr::error::AppError;
use host2cidr::process::{ProcessOptions, ProcessSummary, process_file};
use std::path::PathBuf;
use tokio::fs;

/// テスト用の一意な入出力パスを作る
async fn temp_paths(name: &str) -> (PathBuf, PathBuf) {
    let dir = PathBuf::from("target/test-output");
    if let Err(e) = fs::create_dir_all(&dir).await {
        panic!("mkdir failed: {e}")
    }
    let id = rand::random::<u64>();
    (
        dir.join(format!("{name}_{id}_data.txt")),
        dir.join(format!("{name}_{id}_result.txt")),
    )
}

const SAMPLE: &str = "\
10.0.0.0 - 10.0.0.255\tJP\t256
10.0.1.0 - 10.0.1.127\tJP
10.0.2.0 - 10.0.5.255\tJP\t1,024
10.0.8.0 - 10.0.8.99\tJP\t100

0.0.0.0 - 1.255.255.255\tZZ\t33,554,432
";

#[tokio::test]
async fn processes_file_end_to_end() {
    let (input, output) = temp_paths("e2e").await;
    fs::write(&input, SAMPLE)
        .await
        .unwrap_or_else(|e| panic!("write input: {e}"));

    let opts = ProcessOptions {
        input: input.clone(),
        output: output.clone(),
        ..ProcessOptions::default()
    };
    let summary = process_file(&opts)
        .await
        .unwrap_or_else(|e| panic!("process failed: {e}"));

    assert_eq!(
        summary,
        ProcessSummary {
            lines_read: 6,
            records_written: 4,
            lines_skipped: 2,
        }
    );

    let result = fs::read_to_string(&output)
        .await
        .unwrap_or_else(|e| panic!("read output: {e}"));
    assert_eq!(
        result,
        "10.0.0.0 - 10.0.0.255/24\n\
         10.0.2.0 - 10.0.5.255/22\n\
         10.0.8.0 - 10.0.8.99/25\n\
         0.0.0.0 - 1.255.255.255Unknown\n"
    );

    let _ = fs::remove_file(&input).await;
    let _ = fs::remove_file(&output).await;
}

#[tokio::test]
async fn processes_cr_only_line_endings() {
    let (input, output) = temp_paths("cr").await;
    fs::write(&input, "10.0.0.0\tx\t256\r10.0.1.0\tx\t8\r")
        .await
        .unwrap_or_else(|e| panic!("write input: {e}"));

    let opts = ProcessOptions {
        input: input.clone(),
        output: output.clone(),
        ..ProcessOptions::default()
    };
    let summary = process_file(&opts)
        .await
        .unwrap_or_else(|e| panic!("process failed: {e}"));
    assert_eq!(summary.lines_read, 2);
    assert_eq!(summary.records_written, 2);

    let result = fs::read_to_string(&output)
        .await
        .unwrap_or_else(|e| panic!("read output: {e}"));
    assert_eq!(result, "10.0.0.0/24\n10.0.1.0/29\n");

    let _ = fs::remove_file(&input).await;
    let _ = fs::remove_file(&output).await;
}

#[tokio::test]
async fn appends_json_lines() {
    let (input, output) = temp_paths("json").await;
    fs::write(&input, "192.0.2.0\tx\t64\n")
        .await
        .unwrap_or_else(|e| panic!("write input: {e}"));

    let opts = ProcessOptions {
        input: input.clone(),
        output: output.clone(),
        mode: WriteMode::Append,
        format: OutputFormat::Json,
        header: true,
    };
    for _ in 0..2 {
        process_file(&opts)
            .await
            .unwrap_or_else(|e| panic!("process failed: {e}"));
    }

    let result = fs::read_to_string(&output)
        .await
        .unwrap_or_else(|e| panic!("read output: {e}"));
    let lines: Vec<&str> = result.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], r#"{"ip_range":"192.0.2.0","cidr":"/26"}"#);
    assert_eq!(lines[0], lines[1]);

    let _ = fs::remove_file(&input).await;
    let _ = fs::remove_file(&output).await;
}

#[tokio::test]
async fn txt_header_is_prepended() {
    let (input, output) = temp_paths("header").await;
    fs::write(&input, "192.0.2.0\tx\t8\n")
        .await
        .unwrap_or_else(|e| panic!("write input: {e}"));

    let opts = ProcessOptions {
        input: input.clone(),
        output: output.clone(),
        header: true,
        ..ProcessOptions::default()
    };
    process_file(&opts)
        .await
        .unwrap_or_else(|e| panic!("process failed: {e}"));

    let result = fs::read_to_string(&output)
        .await
        .unwrap_or_else(|e| panic!("read output: {e}"));
    assert!(result.starts_with("# Generated at: "));
    assert!(result.contains(&format!("# Source: {}\n", input.display())));
    assert!(result.ends_with("\n\n192.0.2.0/29\n"));

    let _ = fs::remove_file(&input).await;
    let _ = fs::remove_file(&output).await;
}

#[tokio::test]
async fn missing_input_is_io_error() {
    let (input, output) = temp_paths("missing").await;
    let opts = ProcessOptions {
        input,
        output: output.clone(),
        ..ProcessOptions::default()
    };

    let err = process_file(&opts).await;
    assert!(matches!(err, Err(AppError::Io(_))));
    assert!(fs::metadata(&output).await.is_err());
}

#[tokio::test]
async fn parse_error_aborts_without_writing() {
    let (input, output) = temp_paths("abort").await;
    fs::write(&input, "10.0.0.0\tx\t256\n10.0.1.0\tx\tmany\n")
        .await
        .unwrap_or_else(|e| panic!("write input: {e}"));

    let opts = ProcessOptions {
        input: input.clone(),
        output: output.clone(),
        ..ProcessOptions::default()
    };
    match process_file(&opts).await {
        Err(AppError::Line { line, .. }) => assert_eq!(line, 2),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(fs::metadata(&output).await.is_err());

    let _ = fs::remove_file(&input).await;
}
