//! 定数の共通化

/// 入力ファイルの既定パス
pub const DEFAULT_INPUT_PATH: &str = "data.txt";

/// 出力ファイルの既定パス
pub const DEFAULT_OUTPUT_PATH: &str = "result.txt";

/// テーブルの最大値を超えた場合に返す値
pub const UNKNOWN_CIDR: &str = "Unknown";

/// 入力行の列区切り
pub const FIELD_SEPARATOR: char = '\t';

/// 数値列に含まれる桁区切り
pub const THOUSANDS_SEPARATOR: char = ',';

/// 数字の間にだけ置ける区切り (1_024)
pub const DIGIT_GROUP_SEPARATOR: char = '_';

/// 1行として扱うのに必要な最小の列数
pub const MIN_FIELDS: usize = 3;

/// ネットワークアドレスとブロードキャストアドレスの分
pub const RESERVED_ADDRESSES: i64 = 2;

/// テーブルに含めるプレフィックス長の範囲 (/8 ～ /30)
pub const MIN_PREFIX_LEN: u8 = 8;
pub const MAX_PREFIX_LEN: u8 = 30;

/// デバッグ出力を有効にする環境変数
pub const DEBUG_ENV_VAR: &str = "HOST2CIDR_DEBUG";
