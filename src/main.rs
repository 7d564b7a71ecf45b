//! # Orcagen - ORCA 输入文件生成工具箱
//!
//! 把图形界面时代的 ORCA 输入拼装流程重构成单一可执行文件：
//! 选项状态 (OptionSet) 与确定性渲染分离，模板可存盘复用。
//!
//! ## 子命令
//! - `new`     - 生成起始模板 (TOML)
//! - `preview` - 渲染模板到终端
//! - `build`   - 渲染模板并写出 .inp
//! - `batch`   - 模板 + 坐标目录，批量生成 .inp
//! - `import`  - 从现有 .inp 反向生成模板
//! - `list`    - 列出已知方法 / 基组 / 溶剂 / 关键词
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── models/     (OptionSet 数据模型)
//!   │     ├── parsers/    (XYZ/PDB/.inp 解析器)
//!   │     ├── generator.rs(确定性渲染)
//!   │     └── template.rs (模板持久化)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod generator;
mod models;
mod parsers;
mod template;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
