use crate::constants::{
    DIGIT_GROUP_SEPARATOR, FIELD_SEPARATOR, MIN_FIELDS, RESERVED_ADDRESSES, THOUSANDS_SEPARATOR,
};
use crate::error::AppError;
use crate::table::resolve_cidr;
use serde::Serialize;
use std::fmt;
use std::num::IntErrorKind;

/// 1行分の変換結果 (IP範囲ラベル + CIDRサフィックス)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub ip_range: String,
    pub cidr: &'static str,
}

/// TXT出力ではラベルとサフィックスを区切りなしで連結する
impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.ip_range, self.cidr)
    }
}

/// テキストを行に分割する。"\n"、"\r\n"、単独の "\r" のいずれも行末として扱う。
/// 末尾の行末の後ろに空行は作らない。
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// "1,024" のような桁区切り付きの数値を整数に変換する。
/// i64 に収まらない値は飽和させる (大きすぎる値は "Unknown" に解決される)。
pub fn parse_address_count(raw: &str) -> Result<i64, AppError> {
    let stripped: Vec<char> = raw
        .trim()
        .chars()
        .filter(|c| *c != THOUSANDS_SEPARATOR)
        .collect();

    // 数字に挟まれた "_" (例: 1_024) は桁区切りとして読み飛ばす
    let digits: String = stripped
        .iter()
        .enumerate()
        .filter(|&(i, c)| {
            *c != DIGIT_GROUP_SEPARATOR
                || !(i > 0
                    && stripped[i - 1].is_ascii_digit()
                    && stripped.get(i + 1).is_some_and(|n| n.is_ascii_digit()))
        })
        .map(|(_, c)| *c)
        .collect();

    match digits.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(AppError::InvalidCount {
                value: raw.to_string(),
                source: e,
            }),
        },
    }
}

/// 1行を変換する。列が3未満の行は Ok(None) として読み飛ばす。
pub fn convert_line(line: &str) -> Result<Option<OutputRecord>, AppError> {
    let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
    if fields.len() < MIN_FIELDS {
        return Ok(None);
    }

    // 総アドレス数 → 利用可能ホスト数
    let total = parse_address_count(fields[2])?;
    let usable_hosts = total.saturating_sub(RESERVED_ADDRESSES);

    Ok(Some(OutputRecord {
        ip_range: fields[0].to_string(),
        cidr: resolve_cidr(usable_hosts),
    }))
}

/// 全行を順番に変換する。
/// 読み飛ばした行は結果に含めず、最初のパースエラーで行番号付きで中断する。
pub fn batch_convert<'a, I>(lines: I) -> Result<Vec<OutputRecord>, AppError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Vec::new();

    for (i, line) in lines.into_iter().enumerate() {
        let converted = convert_line(line).map_err(|e| AppError::Line {
            line: i + 1,
            source: Box::new(e),
        })?;
        if let Some(record) = converted {
            records.push(record);
        }
    }

    Ok(records)
}
