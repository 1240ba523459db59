// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use line_tally_core::{DEFAULT_MARKER, Encoding, TallyConfig};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "line_tally",
    version = crate::VERSION,
    about = "拡張子ごとの行数と非推奨マーカー出現数の集計ツール"
)]
pub struct Args {
    /// 走査対象のルート（ファイルまたはディレクトリ）
    #[arg(value_hint = ValueHint::AnyPath)]
    pub root: PathBuf,

    /// 入力ファイルのエンコーディング (utf-8, utf-8-lossy, latin-1, utf-16le, utf-16be, utf-16)
    #[arg(long, default_value = "utf-8")]
    pub encoding: Encoding,

    /// 非推奨マーカーとして数えるリテラル部分文字列
    #[arg(long, default_value = DEFAULT_MARKER)]
    pub marker: String,
}

impl Args {
    pub fn into_config(self) -> TallyConfig {
        TallyConfig { root: self.root, encoding: self.encoding, marker: self.marker }
    }
}
