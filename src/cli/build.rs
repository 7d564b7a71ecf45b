//! # build 子命令 CLI 定义
//!
//! 渲染模板并写出 .inp 文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/build.rs`

use clap::Args;
use std::path::PathBuf;

/// build 子命令参数
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Template file to render
    #[arg(short, long)]
    pub template: PathBuf,

    /// Coordinate file overriding the template's coordinates (.xyz / .pdb)
    #[arg(short, long)]
    pub coords: Option<PathBuf>,

    /// Output .inp path
    #[arg(short, long, default_value = "orca_input.inp")]
    pub output: PathBuf,

    /// Overwrite an existing output file
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
