//! # import 子命令 CLI 定义
//!
//! 从现有 .inp 文件反向生成模板。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/import.rs`

use clap::Args;
use std::path::PathBuf;

/// import 子命令参数
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Existing ORCA .inp file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output template path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Template description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Overwrite an existing template file
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
