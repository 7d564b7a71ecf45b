//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `new`: 生成起始模板
//! - `preview`: 渲染模板到终端
//! - `build`: 渲染模板并写出 .inp 文件
//! - `batch`: 一个模板 + 一目录坐标文件，批量生成 .inp
//! - `import`: 从现有 .inp 反向生成模板
//! - `list`: 列出已知方法 / 基组 / 溶剂 / 关键词
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: new, preview, build, batch, import, list

pub mod batch;
pub mod build;
pub mod import;
pub mod list;
pub mod new;
pub mod preview;

use clap::{Parser, Subcommand};

/// Orcagen - ORCA 输入文件生成工具箱
#[derive(Parser)]
#[command(name = "orcagen")]
#[command(version)]
#[command(about = "A unified ORCA input file generation toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter template file
    New(new::NewArgs),

    /// Render a template to stdout
    Preview(preview::PreviewArgs),

    /// Render a template into an ORCA .inp file
    Build(build::BuildArgs),

    /// Generate one .inp per coordinate file in a directory
    Batch(batch::BatchArgs),

    /// Convert an existing .inp file into a template
    Import(import::ImportArgs),

    /// List known job types, methods, basis sets, solvents and keywords
    List(list::ListArgs),
}
