//! # XYZ 格式坐标解析器
//!
//! 解析 XYZ 格式的分子坐标文本。
//!
//! ## XYZ 格式说明
//! ```text
//! 3                      # 可选：原子数
//! water                  # 可选：注释行（仅当首行为原子数时）
//! O  0.000  0.000  0.000
//! H  0.000  0.000  0.960
//! H  0.930  0.000 -0.240
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/molecule.rs`

use crate::error::{OrcagenError, Result};
use crate::models::Atom;
use std::fs;
use std::path::Path;

/// 解析 .xyz 文件
pub fn parse_xyz_file(path: &Path) -> Result<Vec<Atom>> {
    let content = fs::read_to_string(path).map_err(|e| OrcagenError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_xyz_content(&content, &path.display().to_string())
}

/// 从字符串内容解析 XYZ 格式。
///
/// 首行若是纯数字则视为原子数头，连同其后的注释行一起跳过
/// （与粘贴进来的裸坐标体兼容）。格式错误的行报错并指明行号，
/// 不会部分返回。
pub fn parse_xyz_content(content: &str, source: &str) -> Result<Vec<Atom>> {
    let lines: Vec<&str> = content.lines().collect();

    // 检测原子数头
    let body_start = if lines.len() > 1 && lines[0].trim().parse::<usize>().is_ok() {
        2
    } else {
        0
    };

    let mut atoms = Vec::new();

    for (idx, line) in lines.iter().enumerate().skip(body_start) {
        if line.trim().is_empty() {
            continue;
        }
        atoms.push(parse_atom_line(line, idx + 1, source)?);
    }

    Ok(atoms)
}

/// 解析单条原子行：元素符号 + 三个坐标
pub(crate) fn parse_atom_line(line: &str, line_no: usize, source: &str) -> Result<Atom> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() < 4 {
        return Err(OrcagenError::parse(
            "xyz",
            source,
            format!(
                "line {}: expected 'element x y z', got '{}'",
                line_no,
                line.trim()
            ),
        ));
    }

    let element = fields[0];
    if !element
        .chars()
        .next()
        .map(|c| c.is_ascii_alphabetic())
        .unwrap_or(false)
    {
        return Err(OrcagenError::parse(
            "xyz",
            source,
            format!("line {}: invalid element symbol '{}'", line_no, element),
        ));
    }

    let mut coords = [0.0f64; 3];
    for (i, field) in fields[1..4].iter().enumerate() {
        coords[i] = field.parse().map_err(|_| {
            OrcagenError::parse(
                "xyz",
                source,
                format!("line {}: '{}' is not a number", line_no, field),
            )
        })?;
    }

    Ok(Atom::new(element, coords[0], coords[1], coords[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_body() {
        let content = "O 0.0 0.0 0.0\nH 0.0 0.0 0.96\nH 0.93 0.0 -0.24\n";
        let atoms = parse_xyz_content(content, "test").unwrap();

        assert_eq!(atoms.len(), 3);
        assert_eq!(atoms[0].element, "O");
        assert_eq!(atoms[1].element, "H");
        assert_eq!(atoms[2].element, "H");
        assert!((atoms[1].z - 0.96).abs() < 1e-12);
        assert!((atoms[2].x - 0.93).abs() < 1e-12);
    }

    #[test]
    fn test_parse_with_count_header() {
        let content = "2\nhydrogen molecule\nH 0.0 0.0 0.0\nH 0.0 0.0 0.74\n";
        let atoms = parse_xyz_content(content, "test").unwrap();
        assert_eq!(atoms.len(), 2);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let content = "O 0.0 0.0 0.0\n\nH 0.0 0.0 0.96\n";
        let atoms = parse_xyz_content(content, "test").unwrap();
        assert_eq!(atoms.len(), 2);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let content = "O 0.0 0.0 0.0\nH not_a_number 0.0 0.0\n";
        let err = parse_xyz_content(content, "test").unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("line 2"));
        assert!(msg.contains("not_a_number"));
    }

    #[test]
    fn test_missing_field_reports_line_number() {
        let content = "O 0.0 0.0\n";
        let err = parse_xyz_content(content, "test").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_extra_columns_ignored() {
        // 某些程序会在坐标后追加额外列
        let content = "C 1.0 2.0 3.0 0.0 extra\n";
        let atoms = parse_xyz_content(content, "test").unwrap();
        assert_eq!(atoms.len(), 1);
        assert!((atoms[0].z - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_content() {
        assert!(parse_xyz_content("", "test").unwrap().is_empty());
    }
}
