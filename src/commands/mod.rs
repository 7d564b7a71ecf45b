//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `parsers/`, `generator.rs`, `template.rs`, `utils/`
//! - 子模块: new, preview, build, batch, import, list

pub mod batch;
pub mod build;
pub mod import;
pub mod list;
pub mod new;
pub mod preview;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::New(args) => new::execute(args),
        Commands::Preview(args) => preview::execute(args),
        Commands::Build(args) => build::execute(args),
        Commands::Batch(args) => batch::execute(args),
        Commands::Import(args) => import::execute(args),
        Commands::List(args) => list::execute(args),
    }
}
