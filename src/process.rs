use crate::common::{OutputFormat, WriteMode, debug_log};
use crate::constants::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use crate::convert::{batch_convert, split_lines};
use crate::error::AppError;
use crate::output_common::{make_header, render, write_content};
use chrono::Local;
use std::path::PathBuf;
use tokio::fs;

/// 1回の変換処理に必要な設定
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: WriteMode,
    pub format: OutputFormat,
    pub header: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            mode: WriteMode::default(),
            format: OutputFormat::default(),
            header: false,
        }
    }
}

/// 処理件数のまとめ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSummary {
    pub lines_read: usize,
    pub records_written: usize,
    pub lines_skipped: usize,
}

/// 入力ファイルを読み込み、変換して出力ファイルに書き出す。
/// 入力は処理前にすべて読み込んで閉じる。
pub async fn process_file(opts: &ProcessOptions) -> Result<ProcessSummary, AppError> {
    let text = fs::read_to_string(&opts.input).await?;

    let lines = split_lines(&text);
    let records = batch_convert(lines.iter().copied())?;

    let summary = ProcessSummary {
        lines_read: lines.len(),
        records_written: records.len(),
        lines_skipped: lines.len() - records.len(),
    };
    if summary.lines_skipped > 0 {
        debug_log(format!(
            "Skipped {} line(s) with fewer than 3 columns in {}",
            summary.lines_skipped,
            opts.input.display()
        ));
    }

    let header = match (opts.header, opts.format) {
        (true, OutputFormat::Txt) => {
            let now_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
            Some(make_header(&now_str, &opts.input.display().to_string()))
        }
        (true, OutputFormat::Json) => {
            debug_log("Header is not supported for JSON output; ignored");
            None
        }
        (false, _) => None,
    };

    let content = render(&records, opts.format, header.as_deref())?;
    write_content(&opts.output, &content, opts.mode).await?;

    debug_log(format!(
        "Wrote {} bytes to {} (mode={})",
        content.len(),
        opts.output.display(),
        opts.mode.as_str()
    ));

    Ok(summary)
}
