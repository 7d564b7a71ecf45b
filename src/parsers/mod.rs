//! # 解析器模块
//!
//! 提供坐标文件 (XYZ/PDB) 与 ORCA 输入文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: xyz, pdb, inp

pub mod inp;
pub mod pdb;
pub mod xyz;

use crate::error::{OrcagenError, Result};
use crate::models::Atom;
use std::path::Path;

/// 从文件路径推断格式并解析坐标
pub fn parse_coordinate_file(path: &Path) -> Result<Vec<Atom>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "xyz" => xyz::parse_xyz_file(path),
        "pdb" | "ent" => pdb::parse_pdb_file(path),
        _ => Err(OrcagenError::UnsupportedFormat(format!(
            "Cannot determine coordinate format for: {}",
            path.display()
        ))),
    }
}
