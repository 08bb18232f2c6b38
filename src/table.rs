//! 利用可能ホスト数 → CIDR サフィックスの対応表と、その検索。
//!
//! 表は /8 ～ /30 の 23 エントリで、キーは `2^(32 - prefix) - 2`。
//! 初回アクセス時に一度だけ構築し、以降はプロセス全体で共有する。
use crate::constants::{MAX_PREFIX_LEN, MIN_PREFIX_LEN, UNKNOWN_CIDR};
use once_cell::sync::Lazy;

/// 表の1エントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBucket {
    /// このプレフィックスで使えるホスト数 (ネットワーク/ブロードキャストを除く)
    pub usable_hosts: i64,
    pub prefix_len: u8,
    /// "/24" 形式
    pub suffix: String,
}

/// ホスト数の昇順に並んだグローバル表
static USABLE_HOSTS_TABLE: Lazy<Vec<HostBucket>> = Lazy::new(build_table);

fn build_table() -> Vec<HostBucket> {
    // プレフィックスが長いほどホスト数は少ないので、逆順で昇順になる
    (MIN_PREFIX_LEN..=MAX_PREFIX_LEN)
        .rev()
        .map(|prefix_len| HostBucket {
            usable_hosts: (1i64 << (32 - u32::from(prefix_len))) - 2,
            prefix_len,
            suffix: format!("/{}", prefix_len),
        })
        .collect()
}

/// 表全体をホスト数の昇順で返す
pub fn usable_hosts_table() -> &'static [HostBucket] {
    USABLE_HOSTS_TABLE.as_slice()
}

/// `usable_hosts` を収容できる最小のエントリを返す。
/// 一致するキーがあればそれを、なければ最初に大きくなるキーを選ぶ。
/// 最大キーを超える場合は None。
pub fn find_bucket(usable_hosts: i64) -> Option<&'static HostBucket> {
    let table = usable_hosts_table();
    let idx = table.partition_point(|bucket| bucket.usable_hosts < usable_hosts);
    table.get(idx)
}

/// 利用可能ホスト数から CIDR サフィックスを求める。
/// 表の範囲外 (16777214 超) の場合は "Unknown" を返し、失敗はしない。
pub fn resolve_cidr(usable_hosts: i64) -> &'static str {
    match find_bucket(usable_hosts) {
        Some(bucket) => bucket.suffix.as_str(),
        None => UNKNOWN_CIDR,
    }
}
