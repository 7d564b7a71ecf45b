//! # build 命令实现
//!
//! 渲染模板并写出 .inp 文件。
//!
//! ## 依赖关系
//! - 使用 `cli/build.rs` 定义的参数
//! - 使用 `generator.rs`, `parsers/`, `template.rs`
//! - 使用 `utils/output.rs`

use crate::cli::build::BuildArgs;
use crate::error::{OrcagenError, Result};
use crate::generator::render_input;
use crate::parsers;
use crate::template;
use crate::utils::output;

use std::fs;
use std::path::Path;

/// 执行 build 命令
pub fn execute(args: BuildArgs) -> Result<()> {
    let mut opts = template::load_template(&args.template)?;

    if let Some(ref coords_path) = args.coords {
        let atoms = parsers::parse_coordinate_file(coords_path)?;
        opts.set_coordinates(atoms)?;
    }

    if opts.coordinates().is_empty() {
        output::print_warning("No coordinates present; writing an empty coordinate block");
    }

    if args.output.exists() && !args.overwrite {
        return Err(OrcagenError::InvalidArgument(format!(
            "'{}' already exists (use --overwrite to replace it)",
            args.output.display()
        )));
    }

    let content = render_input(&opts);
    write_input_file(&args.output, &content)?;

    output::print_success(&format!("Input written to {}", args.output.display()));

    Ok(())
}

/// 写出 .inp：先写同目录临时文件再重命名，失败不破坏已有文件
pub(crate) fn write_input_file(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("orca_input.inp");
    let tmp_path = path.with_file_name(format!("{}.tmp", file_name));

    fs::write(&tmp_path, content).map_err(|e| OrcagenError::FileWriteError {
        path: tmp_path.display().to_string(),
        source: e,
    })?;
    fs::rename(&tmp_path, path).map_err(|e| OrcagenError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
