use crate::common::{OutputFormat, WriteMode};
use crate::convert::OutputRecord;
use crate::error::AppError;
use std::path::Path;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// 汎用ヘッダー生成
pub fn make_header(now_str: &str, source: &str) -> String {
    format!("# Generated at: {}\n# Source: {}\n\n", now_str, source)
}

/// TXT出力: 1レコード1行、ラベルとサフィックスは区切りなし
pub fn render_txt(records: &[OutputRecord], header: Option<&str>) -> String {
    let mut content = String::new();
    if let Some(h) = header {
        content.push_str(h);
    }
    for record in records {
        content.push_str(&record.to_string());
        content.push('\n');
    }
    content
}

/// JSON Lines出力: appendしても壊れないよう1行1オブジェクト
pub fn render_json(records: &[OutputRecord]) -> Result<String, AppError> {
    let mut content = String::new();
    for record in records {
        content.push_str(&serde_json::to_string(record)?);
        content.push('\n');
    }
    Ok(content)
}

/// 形式に応じて出力内容を組み立てる
pub fn render(
    records: &[OutputRecord],
    format: OutputFormat,
    header: Option<&str>,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Txt => Ok(render_txt(records, header)),
        OutputFormat::Json => render_json(records),
    }
}

/// 書き込みモードに応じてファイルへ書き出す
pub async fn write_content<P: AsRef<Path>>(
    path: P,
    content: &str,
    mode: WriteMode,
) -> Result<(), AppError> {
    match mode {
        WriteMode::Append => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .await?;
            file.write_all(content.as_bytes()).await?;
            file.flush().await?;
        }
        WriteMode::Overwrite => {
            // まるごと書き込む場合
            fs::write(path, content).await?;
        }
    }

    Ok(())
}
