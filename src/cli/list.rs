//! # list 子命令 CLI 定义
//!
//! 列出已知任务类型 / 方法 / 基组 / 溶剂 / 关键词。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/list.rs`

use clap::{Args, ValueEnum};

/// 可列出的类别
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ListCategory {
    /// Calculation job types
    JobTypes,
    /// DFT methods
    Methods,
    /// Basis sets
    BasisSets,
    /// Implicit solvents
    Solvents,
    /// Extra keyword toggles
    Keywords,
}

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Category to list (all categories when omitted)
    #[arg(value_enum)]
    pub category: Option<ListCategory>,
}
