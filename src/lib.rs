//! RecycleVision CLI
//!
//! 画像ファイルを外部の分類コマンドで解析し、リサイクル方法を表示してポイントを貯める。
//! 状態・統計・特典カタログは recycle_vision_common を使用

pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod rewards;
pub mod scan;
pub mod storage;
