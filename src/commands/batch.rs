//! # batch 命令实现
//!
//! 一个模板套用到一整个目录的坐标文件，批量生成 .inp。
//!
//! ## 功能
//! - 按 glob 模式收集坐标文件
//! - 并行渲染与写出
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的参数
//! - 使用 `generator.rs`, `parsers/`, `template.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::batch::BatchArgs;
use crate::commands::build::write_input_file;
use crate::error::{OrcagenError, Result};
use crate::generator::render_input;
use crate::parsers;
use crate::template;
use crate::utils::{output, progress};

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use walkdir::WalkDir;

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Batch Input Generation");

    // 模板只加载一次，对每个结构克隆使用
    let base_opts = template::load_template(&args.template)?;

    if !args.input.exists() {
        return Err(OrcagenError::DirectoryNotFound {
            path: args.input.display().to_string(),
        });
    }

    fs::create_dir_all(&args.output).map_err(|e| OrcagenError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let files = collect_coordinate_files(&args.input, &args.pattern, args.recursive)?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.pattern,
            args.input.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} coordinate files", files.len()));

    // 设置并行度
    let num_threads = if args.jobs == 0 {
        num_cpus::get()
    } else {
        args.jobs
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok();

    let pb = progress::create_progress_bar(files.len() as u64, "Generating");
    let success_count = AtomicUsize::new(0);
    let skip_count = AtomicUsize::new(0);
    let fail_count = AtomicUsize::new(0);

    files.par_iter().for_each(|coords_path| {
        match generate_one(&base_opts, coords_path, &args.output, args.overwrite) {
            Ok(GenerateStatus::Success) => {
                success_count.fetch_add(1, Ordering::SeqCst);
            }
            Ok(GenerateStatus::Skipped) => {
                skip_count.fetch_add(1, Ordering::SeqCst);
            }
            Err(e) => {
                fail_count.fetch_add(1, Ordering::SeqCst);
                pb.suspend(|| {
                    output::print_error(&format!("{}: {}", coords_path.display(), e));
                });
            }
        }
        pb.inc(1);
    });

    pb.finish_with_message("Done");

    output::print_separator();
    output::print_done(&format!(
        "Generated {} input(s) in '{}' ({} skipped, {} failed)",
        success_count.load(Ordering::SeqCst),
        args.output.display(),
        skip_count.load(Ordering::SeqCst),
        fail_count.load(Ordering::SeqCst)
    ));

    Ok(())
}

enum GenerateStatus {
    Success,
    Skipped,
}

/// 收集坐标文件
fn collect_coordinate_files(
    input_dir: &Path,
    pattern: &str,
    recursive: bool,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = if recursive {
        WalkDir::new(input_dir)
    } else {
        WalkDir::new(input_dir).max_depth(1)
    };

    let glob_pattern = glob::Pattern::new(pattern).map_err(|e| {
        OrcagenError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
    })?;

    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            if let Some(name) = entry.file_name().to_str() {
                if glob_pattern.matches(name) {
                    files.push(entry.path().to_path_buf());
                }
            }
        }
    }

    files.sort();
    Ok(files)
}

/// 为单个坐标文件生成 .inp
fn generate_one(
    base_opts: &crate::models::OptionSet,
    coords_path: &Path,
    output_dir: &Path,
    overwrite: bool,
) -> Result<GenerateStatus> {
    let stem = coords_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("structure");
    let output_path = output_dir.join(format!("{}.inp", stem));

    if output_path.exists() && !overwrite {
        return Ok(GenerateStatus::Skipped);
    }

    let atoms = parsers::parse_coordinate_file(coords_path)?;

    let mut opts = base_opts.clone();
    opts.set_coordinates(atoms)?;

    write_input_file(&output_path, &render_input(&opts))?;

    Ok(GenerateStatus::Success)
}
