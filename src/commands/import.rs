//! # import 命令实现
//!
//! 读入现有 .inp 文件，重建 OptionSet 并存为模板。
//!
//! ## 依赖关系
//! - 使用 `cli/import.rs` 定义的参数
//! - 使用 `parsers/inp.rs`, `template.rs`
//! - 使用 `utils/output.rs`

use crate::cli::import::ImportArgs;
use crate::error::{OrcagenError, Result};
use crate::parsers::inp;
use crate::template;
use crate::utils::output;

/// 执行 import 命令
pub fn execute(args: ImportArgs) -> Result<()> {
    if args.output.exists() && !args.overwrite {
        return Err(OrcagenError::InvalidArgument(format!(
            "'{}' already exists (use --overwrite to replace it)",
            args.output.display()
        )));
    }

    let opts = inp::parse_inp_file(&args.input)?;

    output::print_info(&format!(
        "Imported {}: {} / {}, {} atoms",
        args.input.display(),
        opts.method().keyword(),
        opts.basis_set().keyword(),
        opts.coordinates().len()
    ));

    template::save_template(&opts, args.description, &args.output)?;
    output::print_success(&format!("Template written to {}", args.output.display()));

    Ok(())
}
