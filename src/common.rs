use crate::constants::DEBUG_ENV_VAR;
use crate::error::AppError;
use std::fmt::Display;
use std::str::FromStr;

/// 出力形式を管理するためのenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// ラベルとサフィックスを連結した行
    #[default]
    Txt,
    /// 1行1オブジェクトの JSON Lines
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" => Ok(OutputFormat::Txt),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::InvalidInput(format!(
                "unknown format '{}'. Must be 'txt' or 'json'",
                other
            ))),
        }
    }
}

/// ファイル書き込みモード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    Append,
    #[default]
    Overwrite,
}

impl FromStr for WriteMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "append" => Ok(WriteMode::Append),
            "overwrite" => Ok(WriteMode::Overwrite),
            other => Err(AppError::InvalidInput(format!(
                "unknown mode '{}'. Must be 'append' or 'overwrite'",
                other
            ))),
        }
    }
}

impl WriteMode {
    /// ログ出力用のラベル
    pub fn as_str(self) -> &'static str {
        match self {
            WriteMode::Append => "append",
            WriteMode::Overwrite => "overwrite",
        }
    }
}

/// デバッグビルド、または HOST2CIDR_DEBUG が設定されている場合のみ stderr に出す
pub fn debug_log<S: Display>(msg: S) {
    if cfg!(debug_assertions) || std::env::var_os(DEBUG_ENV_VAR).is_some() {
        eprintln!("[debug] {}", msg);
    }
}
