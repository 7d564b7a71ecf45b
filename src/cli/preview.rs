//! # preview 子命令 CLI 定义
//!
//! 渲染模板到 stdout，只读预览。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/preview.rs`

use clap::Args;
use std::path::PathBuf;

/// preview 子命令参数
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Template file to render
    #[arg(short, long)]
    pub template: PathBuf,

    /// Coordinate file overriding the template's coordinates (.xyz / .pdb)
    #[arg(short, long)]
    pub coords: Option<PathBuf>,
}
