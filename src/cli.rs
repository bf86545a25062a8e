use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recycle-vision")]
#[command(about = "画像からリサイクル方法を調べてポイントを貯める", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 保存データのディレクトリ（デフォルト: ~/.config/recycle-vision）
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 画像をスキャンしてリサイクル方法を表示
    Scan {
        /// 画像ファイルのパス
        #[arg(required = true)]
        file: PathBuf,

        /// 処理待ち時間（ミリ秒、デフォルトは設定値）
        #[arg(long)]
        delay_ms: Option<u64>,

        /// 確認なしでリサイクル済みにする
        #[arg(short, long, conflicts_with = "no_prompt")]
        yes: bool,

        /// リサイクル済みの確認をしない（記録もしない）
        #[arg(long)]
        no_prompt: bool,
    },

    /// 統計を表示
    Stats,

    /// 特典一覧を表示
    Rewards,

    /// 特典を交換
    Redeem {
        /// 特典の番号（1始まり）またはタイトル
        #[arg(required = true)]
        reward: String,
    },

    /// 統計を初期状態に戻す
    Reset {
        /// 確認なしで実行
        #[arg(short, long)]
        yes: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 分類コマンドを設定
        #[arg(long)]
        set_classifier: Option<String>,

        /// 分類コマンドの引数（複数指定可、画像パスの前に渡す）
        #[arg(long = "classifier-arg", requires = "set_classifier", allow_hyphen_values = true)]
        classifier_args: Vec<String>,

        /// 処理待ち時間を設定（ミリ秒）
        #[arg(long)]
        set_delay_ms: Option<u64>,
    },
}
