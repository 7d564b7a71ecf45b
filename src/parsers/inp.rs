//! # ORCA .inp 反向解析器
//!
//! 把已生成的 ORCA 输入文件读回 OptionSet，用于从现有 .inp
//! 建立模板。只认本工具输出的文件形状（关键词行、%maxcore、
//! %pal、%cpcm/SMD 块、其余 % 块、* xyz 坐标块）。
//!
//! 关键词行按位置分类：任务类型记号（可省略，缺省 SP）、方法、
//! 基组，其后是溶剂记号 / 开关 / 自定义关键词。无法识别的记号
//! 归入自定义关键词 —— 分类有损，但渲染结果保持一致。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 和 `commands/import.rs` 使用
//! - 使用 `models/`, `parsers/xyz.rs`

use crate::error::{OrcagenError, Result};
use crate::models::{ExtraKeyword, JobType, OptionSet, SolventModel};
use crate::parsers::xyz::parse_atom_line;
use regex::Regex;
use std::fs;
use std::path::Path;

/// 解析 .inp 文件
pub fn parse_inp_file(path: &Path) -> Result<OptionSet> {
    let content = fs::read_to_string(path).map_err(|e| OrcagenError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_inp_content(&content, &path.display().to_string())
}

/// 从字符串内容重建 OptionSet
pub fn parse_inp_content(content: &str, source: &str) -> Result<OptionSet> {
    let re_maxcore = Regex::new(r"(?i)^%maxcore\s+(\d+)\s*$").unwrap();
    let re_pal = Regex::new(r"(?i)^%pal\s+nprocs\s+(\d+)\s+end\s*$").unwrap();
    let re_coord_header = Regex::new(r"(?i)^\*\s*xyz\s+(-?\d+)\s+(\d+)\s*$").unwrap();
    let re_smd_solvent = Regex::new(r#"(?i)SMDsolvent\s+"([^"]+)""#).unwrap();

    let mut opts = OptionSet::new();
    opts.clear_keywords();

    let mut saw_keyword_line = false;
    let mut saw_coordinates = false;
    let mut saw_bare_cpcm = false;
    let mut smd_solvent: Option<String> = None;

    let lines: Vec<&str> = content.lines().collect();
    let mut i = 0;

    while i < lines.len() {
        let line_no = i + 1;
        let line = lines[i].trim();
        i += 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('!') {
            parse_keyword_tokens(rest, &mut opts, &mut saw_bare_cpcm)?;
            saw_keyword_line = true;
            continue;
        }

        if let Some(cap) = re_maxcore.captures(line) {
            let value: u32 = cap[1].parse().map_err(|_| {
                OrcagenError::parse(
                    "inp",
                    source,
                    format!("line {}: invalid %maxcore value", line_no),
                )
            })?;
            opts.set_maxcore_mb(value)?;
            continue;
        }

        if let Some(cap) = re_pal.captures(line) {
            let value: u32 = cap[1].parse().map_err(|_| {
                OrcagenError::parse(
                    "inp",
                    source,
                    format!("line {}: invalid %pal nprocs value", line_no),
                )
            })?;
            opts.set_nprocs(value)?;
            continue;
        }

        if line.starts_with('%') {
            // 多行块：收集到独立的 end 行为止
            let mut block_lines = vec![lines[i - 1].trim_end().to_string()];
            loop {
                if i >= lines.len() {
                    return Err(OrcagenError::parse(
                        "inp",
                        source,
                        format!("line {}: unterminated '%' block", line_no),
                    ));
                }
                let block_line = lines[i].trim_end();
                i += 1;
                block_lines.push(block_line.to_string());
                if block_line.trim().eq_ignore_ascii_case("end") {
                    break;
                }
            }

            let block = block_lines.join("\n");
            let is_cpcm = block_lines[0].trim().to_lowercase().starts_with("%cpcm");
            if is_cpcm && block.to_lowercase().contains("smd true") {
                match re_smd_solvent.captures(&block) {
                    Some(cap) => smd_solvent = Some(cap[1].to_string()),
                    None => {
                        return Err(OrcagenError::parse(
                            "inp",
                            source,
                            format!("line {}: %cpcm block enables SMD but names no solvent", line_no),
                        ))
                    }
                }
            } else {
                opts.add_custom_block(&block)?;
            }
            continue;
        }

        if line.starts_with('*') {
            if saw_coordinates {
                return Err(OrcagenError::parse(
                    "inp",
                    source,
                    format!("line {}: duplicate coordinate block", line_no),
                ));
            }
            let cap = re_coord_header.captures(line).ok_or_else(|| {
                OrcagenError::parse(
                    "inp",
                    source,
                    format!("line {}: expected '* xyz <charge> <multiplicity>'", line_no),
                )
            })?;

            let charge: i32 = cap[1].parse().map_err(|_| {
                OrcagenError::parse("inp", source, format!("line {}: invalid charge", line_no))
            })?;
            let mult: u32 = cap[2].parse().map_err(|_| {
                OrcagenError::parse(
                    "inp",
                    source,
                    format!("line {}: invalid multiplicity", line_no),
                )
            })?;
            opts.set_charge(charge);
            opts.set_multiplicity(mult)?;

            let mut atoms = Vec::new();
            let mut closed = false;
            while i < lines.len() {
                let atom_line_no = i + 1;
                let atom_line = lines[i].trim();
                i += 1;
                if atom_line == "*" {
                    closed = true;
                    break;
                }
                if atom_line.is_empty() {
                    continue;
                }
                atoms.push(parse_atom_line(atom_line, atom_line_no, source)?);
            }
            if !closed {
                return Err(OrcagenError::parse(
                    "inp",
                    source,
                    format!("line {}: coordinate block not closed with '*'", line_no),
                ));
            }
            opts.set_coordinates(atoms)?;
            saw_coordinates = true;
            continue;
        }

        return Err(OrcagenError::parse(
            "inp",
            source,
            format!("line {}: unexpected content '{}'", line_no, line),
        ));
    }

    if !saw_keyword_line {
        return Err(OrcagenError::parse(
            "inp",
            source,
            "no keyword line ('! ...') found",
        ));
    }

    if let Some(solvent) = smd_solvent {
        opts.set_solvent(Some(SolventModel::Smd(solvent)))?;
    } else if saw_bare_cpcm && opts.solvent().is_none() {
        // 孤立的 CPCM 记号：无块也无溶剂名，按自定义关键词透传
        opts.add_custom_keyword("CPCM")?;
    }

    Ok(opts)
}

/// 分类关键词行的记号
fn parse_keyword_tokens(
    rest: &str,
    opts: &mut OptionSet,
    saw_bare_cpcm: &mut bool,
) -> Result<()> {
    let re_cpcm_named = Regex::new(r"(?i)^CPCM\((.+)\)$").unwrap();

    let tokens: Vec<&str> = rest.split_whitespace().collect();
    let mut pos = 0;

    // 任务类型：优先匹配双记号组合 (Opt Freq / Opt Scan)
    if tokens.len() >= 2 {
        let pair = format!("{} {}", tokens[0], tokens[1]);
        if let Some(job) = match_job(&pair) {
            opts.set_job_type(job);
            pos = 2;
        }
    }
    if pos == 0 {
        if let Some(job) = tokens.first().and_then(|t| match_job(t)) {
            opts.set_job_type(job);
            pos = 1;
        }
    }

    // 方法与基组按位置取
    if pos < tokens.len() {
        opts.set_method(tokens[pos])?;
        pos += 1;
    }
    if pos < tokens.len() {
        opts.set_basis_set(tokens[pos])?;
        pos += 1;
    }

    for token in &tokens[pos..] {
        if let Some(cap) = re_cpcm_named.captures(token) {
            opts.set_solvent(Some(SolventModel::Cpcm(cap[1].to_string())))?;
        } else if token.eq_ignore_ascii_case("CPCM") {
            *saw_bare_cpcm = true;
        } else if let Ok(kw) = token.parse::<ExtraKeyword>() {
            opts.set_keyword(kw, true);
        } else {
            opts.add_custom_keyword(token)?;
        }
    }

    Ok(())
}

/// 匹配任务类型记号
fn match_job(token: &str) -> Option<JobType> {
    JobType::ALL
        .iter()
        .find(|j| j.keyword().eq_ignore_ascii_case(token))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::render_input;
    use crate::models::{Atom, Method};

    fn sample() -> OptionSet {
        let mut opts = OptionSet::new();
        opts.set_job_type(JobType::OptFreq);
        opts.set_method("PBE0").unwrap();
        opts.set_basis_set("def2-TZVP").unwrap();
        opts.set_charge(-1);
        opts.set_multiplicity(2).unwrap();
        opts.set_keyword(ExtraKeyword::D3Bj, true);
        opts.add_custom_keyword("MiniPrint").unwrap();
        opts.set_nprocs(8).unwrap();
        opts.set_maxcore_mb(4000).unwrap();
        opts.add_custom_block("%scf\n  maxiter 300\nend").unwrap();
        opts.set_coordinates(vec![
            Atom::new("O", 0.0, 0.0, 0.0),
            Atom::new("H", 0.0, 0.0, 0.96),
        ])
        .unwrap();
        opts
    }

    #[test]
    fn test_reimport_render_fidelity() {
        let original = sample();
        let text = render_input(&original);
        let reparsed = parse_inp_content(&text, "test").unwrap();

        // 往返后的渲染结果必须一致
        assert_eq!(render_input(&reparsed), text);
    }

    #[test]
    fn test_reimport_cpcm_solvent() {
        let mut opts = sample();
        opts.set_solvent(Some(SolventModel::Cpcm("Water".to_string())))
            .unwrap();
        let text = render_input(&opts);
        let reparsed = parse_inp_content(&text, "test").unwrap();

        assert_eq!(
            reparsed.solvent(),
            Some(&SolventModel::Cpcm("Water".to_string()))
        );
        assert_eq!(render_input(&reparsed), text);
    }

    #[test]
    fn test_reimport_smd_solvent() {
        let mut opts = sample();
        opts.set_solvent(Some(SolventModel::Smd("Toluene".to_string())))
            .unwrap();
        let text = render_input(&opts);
        let reparsed = parse_inp_content(&text, "test").unwrap();

        assert_eq!(
            reparsed.solvent(),
            Some(&SolventModel::Smd("Toluene".to_string()))
        );
        assert_eq!(render_input(&reparsed), text);
    }

    #[test]
    fn test_missing_job_keyword_defaults_to_sp() {
        let content = "! HF def2-SVP\n* xyz 0 1\n*\n";
        let opts = parse_inp_content(content, "test").unwrap();
        assert_eq!(opts.job_type(), JobType::Sp);
        assert_eq!(opts.method(), &Method::Known("HF"));
    }

    #[test]
    fn test_custom_method_positional() {
        let content = "! Opt XTB2 def2-SVP\n* xyz 0 1\n*\n";
        let opts = parse_inp_content(content, "test").unwrap();
        assert_eq!(opts.job_type(), JobType::Opt);
        assert_eq!(opts.method(), &Method::Custom("XTB2".to_string()));
    }

    #[test]
    fn test_unterminated_block_is_error() {
        let content = "! SP B3LYP def2-SVP\n%scf\n  maxiter 300\n";
        let err = parse_inp_content(content, "test").unwrap_err();
        assert!(err.to_string().contains("unterminated"));
    }

    #[test]
    fn test_unclosed_coordinates_is_error() {
        let content = "! SP B3LYP def2-SVP\n* xyz 0 1\nO 0.0 0.0 0.0\n";
        let err = parse_inp_content(content, "test").unwrap_err();
        assert!(err.to_string().contains("not closed"));
    }

    #[test]
    fn test_missing_keyword_line_is_error() {
        let err = parse_inp_content("%maxcore 100\n", "test").unwrap_err();
        assert!(err.to_string().contains("no keyword line"));
    }

    #[test]
    fn test_malformed_atom_line_reports_line_number() {
        let content = "! SP B3LYP def2-SVP\n* xyz 0 1\nO zero 0.0 0.0\n*\n";
        let err = parse_inp_content(content, "test").unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }
}
