use std::{io, num::ParseIntError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // IOまわりのエラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // 3列目が整数として解釈できない
    #[error("Invalid address count {value:?}: {source}")]
    InvalidCount {
        value: String,
        #[source]
        source: ParseIntError,
    },

    // 行番号付きのエラー (1始まり)
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<AppError>,
    },

    // JSON 出力時のエラー
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // 特定の入力が不正だった場合など
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
