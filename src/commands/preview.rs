//! # preview 命令实现
//!
//! 渲染模板到 stdout。输出保持原始文本，方便重定向或复制，
//! 不加任何装饰。
//!
//! ## 依赖关系
//! - 使用 `cli/preview.rs` 定义的参数
//! - 使用 `generator.rs`, `parsers/`, `template.rs`

use crate::cli::preview::PreviewArgs;
use crate::error::Result;
use crate::generator::render_input;
use crate::parsers;
use crate::template;

/// 执行 preview 命令
pub fn execute(args: PreviewArgs) -> Result<()> {
    let mut opts = template::load_template(&args.template)?;

    if let Some(ref coords_path) = args.coords {
        let atoms = parsers::parse_coordinate_file(coords_path)?;
        opts.set_coordinates(atoms)?;
    }

    print!("{}", render_input(&opts));

    Ok(())
}
