//! # PDB 格式坐标解析器
//!
//! 从 PDB 文件的 ATOM/HETATM 记录中提取元素与笛卡尔坐标，
//! 其余字段（链、残基、占有率等）一律忽略。
//!
//! ## 列布局（PDB 固定列格式，1 起始）
//! ```text
//! 13-16  原子名
//! 31-38  x 坐标
//! 39-46  y 坐标
//! 47-54  z 坐标
//! 77-78  元素符号（可选，缺失时从原子名推断）
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/molecule.rs`

use crate::error::{OrcagenError, Result};
use crate::models::Atom;
use std::fs;
use std::path::Path;

/// 解析 .pdb 文件
pub fn parse_pdb_file(path: &Path) -> Result<Vec<Atom>> {
    let content = fs::read_to_string(path).map_err(|e| OrcagenError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_pdb_content(&content, &path.display().to_string())
}

/// 从字符串内容解析 PDB 的 ATOM/HETATM 记录。
///
/// 非坐标记录行跳过；格式错误的坐标记录报错并指明行号，
/// 而不是静默丢弃。
pub fn parse_pdb_content(content: &str, source: &str) -> Result<Vec<Atom>> {
    let mut atoms = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if !line.starts_with("ATOM") && !line.starts_with("HETATM") {
            continue;
        }
        atoms.push(parse_atom_record(line, idx + 1, source)?);
    }

    if atoms.is_empty() {
        return Err(OrcagenError::parse(
            "pdb",
            source,
            "no ATOM/HETATM records found",
        ));
    }

    Ok(atoms)
}

/// 解析单条 ATOM/HETATM 记录
fn parse_atom_record(line: &str, line_no: usize, source: &str) -> Result<Atom> {
    let x = coord_column(line, 30..38, "x", line_no, source)?;
    let y = coord_column(line, 38..46, "y", line_no, source)?;
    let z = coord_column(line, 46..54, "z", line_no, source)?;

    // 元素列缺失时退回到原子名推断
    let element = match line.get(76..78).map(str::trim) {
        Some(symbol) if !symbol.is_empty() => normalize_element(symbol),
        _ => {
            let name = column(line, 12..16, line_no, source)?;
            let stripped: String = name.chars().filter(|c| c.is_ascii_alphabetic()).collect();
            if stripped.is_empty() {
                return Err(OrcagenError::parse(
                    "pdb",
                    source,
                    format!("line {}: cannot determine element from atom name '{}'", line_no, name),
                ));
            }
            // 原子名如 "HB2" -> H, "CA" 默认取首字母 (alpha-碳等歧义不在处理范围)
            normalize_element(&stripped[..1])
        }
    };

    Ok(Atom::new(element, x, y, z))
}

/// 按列范围取字段，记录过短时报错
fn column<'a>(
    line: &'a str,
    range: std::ops::Range<usize>,
    line_no: usize,
    source: &str,
) -> Result<&'a str> {
    line.get(range.clone()).map(str::trim).ok_or_else(|| {
        OrcagenError::parse(
            "pdb",
            source,
            format!(
                "line {}: record too short (needs columns {}-{})",
                line_no,
                range.start + 1,
                range.end
            ),
        )
    })
}

/// 取坐标列并解析为数值
fn coord_column(
    line: &str,
    range: std::ops::Range<usize>,
    axis: &str,
    line_no: usize,
    source: &str,
) -> Result<f64> {
    let field = column(line, range, line_no, source)?;
    field.parse().map_err(|_| {
        OrcagenError::parse(
            "pdb",
            source,
            format!(
                "line {}: {} coordinate '{}' is not a number",
                line_no, axis, field
            ),
        )
    })
}

/// 元素符号规范化：首字母大写，其余小写
fn normalize_element(symbol: &str) -> String {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER_PDB: &str = "\
HEADER    TEST
ATOM      1  O   HOH A   1       0.000   0.000   0.000  1.00  0.00           O
ATOM      2  H1  HOH A   1       0.000   0.000   0.960  1.00  0.00           H
ATOM      3  H2  HOH A   1       0.930   0.000  -0.240  1.00  0.00           H
TER
END
";

    #[test]
    fn test_parse_water() {
        let atoms = parse_pdb_content(WATER_PDB, "test").unwrap();
        assert_eq!(atoms.len(), 3);
        assert_eq!(atoms[0].element, "O");
        assert_eq!(atoms[1].element, "H");
        assert!((atoms[2].x - 0.93).abs() < 1e-12);
        assert!((atoms[2].z + 0.24).abs() < 1e-12);
    }

    #[test]
    fn test_hetatm_records() {
        let content = "\
HETATM    1 CL   LIG A   1       1.000   2.000   3.000  1.00  0.00          CL
";
        let atoms = parse_pdb_content(content, "test").unwrap();
        assert_eq!(atoms.len(), 1);
        assert_eq!(atoms[0].element, "Cl");
    }

    #[test]
    fn test_element_inferred_from_atom_name() {
        // 无元素列的旧式 PDB：行在 z 坐标处截断
        let content = "ATOM      1  N   ALA A   1       1.000   2.000   3.000";
        let atoms = parse_pdb_content(content, "test").unwrap();
        assert_eq!(atoms[0].element, "N");
    }

    #[test]
    fn test_malformed_coordinate_reports_line() {
        let content = "\
ATOM      1  O   HOH A   1       0.000   xxxxx   0.000  1.00  0.00           O
";
        let err = parse_pdb_content(content, "test").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 1"));
        assert!(msg.contains("y coordinate"));
    }

    #[test]
    fn test_no_records_is_error() {
        let err = parse_pdb_content("REMARK nothing here\n", "test").unwrap_err();
        assert!(err.to_string().contains("no ATOM/HETATM"));
    }
}
