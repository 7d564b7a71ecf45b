//! # batch 子命令 CLI 定义
//!
//! 一个模板 + 一个坐标文件目录，批量生成 .inp。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Template file applied to every structure
    #[arg(short, long)]
    pub template: PathBuf,

    /// Input directory containing coordinate files
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for generated .inp files
    #[arg(short, long)]
    pub output: PathBuf,

    /// Glob pattern for coordinate files
    #[arg(short, long, default_value = "*.xyz")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
