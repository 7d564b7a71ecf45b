//! # ORCA 输入文件生成器
//!
//! 将 OptionSet 快照确定性地渲染为 `.inp` 文本。纯函数：
//! 相同输入永远产生字节一致的输出，无隐藏状态，无 I/O。
//!
//! ## 输出结构
//! ```text
//! ! <job> <method> <basis> [CPCM(...)] <toggles> <custom keywords>
//!
//! %maxcore 2000
//! %pal nprocs 4 end
//!
//! [%cpcm ... end]     # 仅 SMD 溶剂模型
//! [custom blocks]     # 原样透传，不做校验
//! * xyz <charge> <mult>
//! <atom lines>
//! *
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `parsers/inp.rs` (往返测试) 使用
//! - 使用 `models/`

use crate::models::{Atom, ExtraKeyword, OptionSet, SolventModel};
use std::fmt::Write;

/// 渲染完整的 ORCA 输入文件
pub fn render_input(opts: &OptionSet) -> String {
    let mut out = String::new();

    out.push_str(&keyword_line(opts));
    out.push_str("\n\n");

    let res = opts.resources();
    writeln!(out, "%maxcore {}", res.maxcore_mb).unwrap();
    writeln!(out, "%pal nprocs {} end", res.nprocs).unwrap();
    out.push('\n');

    if let Some(SolventModel::Smd(solvent)) = opts.solvent() {
        out.push_str(&smd_block(solvent));
        out.push('\n');
    }

    for block in opts.custom_blocks() {
        out.push_str(block);
        out.push_str("\n\n");
    }

    writeln!(out, "* xyz {} {}", opts.charge(), opts.multiplicity()).unwrap();
    for atom in opts.coordinates() {
        out.push_str(&atom_line(atom));
        out.push('\n');
    }
    out.push_str("*\n");

    out
}

/// 组装关键词行。
///
/// 固定顺序：任务类型、方法、基组、溶剂记号（如有）、
/// 开关关键词（声明顺序，与开启顺序无关）、自定义关键词（录入顺序）。
pub fn keyword_line(opts: &OptionSet) -> String {
    let mut parts: Vec<String> = vec![opts.job_type().keyword().to_string()];

    parts.push(opts.method().keyword().to_string());
    parts.push(opts.basis_set().keyword().to_string());

    if let Some(model) = opts.solvent() {
        parts.push(model.keyword());
    }

    for kw in ExtraKeyword::ALL {
        if opts.has_keyword(kw) {
            parts.push(kw.token().to_string());
        }
    }

    for kw in opts.custom_keywords() {
        parts.push(kw.clone());
    }

    format!("! {}", parts.join(" "))
}

/// SMD 溶剂模型的 %cpcm 块
fn smd_block(solvent: &str) -> String {
    format!("%cpcm\n  smd true\n  SMDsolvent \"{}\"\nend\n", solvent)
}

/// 单条原子记录的定宽行
fn atom_line(atom: &Atom) -> String {
    format!(
        "{:<3} {:>14.8} {:>14.8} {:>14.8}",
        atom.element, atom.x, atom.y, atom.z
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobType;

    fn water(opts: &mut OptionSet) {
        opts.set_coordinates(vec![
            Atom::new("O", 0.0, 0.0, 0.0),
            Atom::new("H", 0.0, 0.0, 0.96),
            Atom::new("H", 0.93, 0.0, -0.24),
        ])
        .unwrap();
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut opts = OptionSet::new();
        water(&mut opts);
        opts.set_keyword(ExtraKeyword::D3Bj, true);
        assert_eq!(render_input(&opts), render_input(&opts));
    }

    #[test]
    fn test_default_render_minimal() {
        let text = render_input(&OptionSet::new());

        assert!(text.starts_with("! SP B3LYP def2-SVP TightSCF\n"));
        assert!(text.contains("%maxcore 2000\n"));
        assert!(text.contains("%pal nprocs 4 end\n"));
        // 空坐标也要输出块头和结束符
        assert!(text.ends_with("* xyz 0 1\n*\n"));
    }

    #[test]
    fn test_keyword_line_mandatory_fields_only() {
        let mut opts = OptionSet::new();
        opts.clear_keywords();
        assert_eq!(keyword_line(&opts), "! SP B3LYP def2-SVP");
    }

    #[test]
    fn test_keyword_order_is_declared_not_insertion() {
        let mut opts = OptionSet::new();
        opts.clear_keywords();
        // 先开 D3BJ 再开 TightSCF，输出仍是声明顺序
        opts.set_keyword(ExtraKeyword::D3Bj, true);
        opts.set_keyword(ExtraKeyword::TightScf, true);
        assert_eq!(keyword_line(&opts), "! SP B3LYP def2-SVP TightSCF D3BJ");
    }

    #[test]
    fn test_custom_keywords_follow_toggles_in_entry_order() {
        let mut opts = OptionSet::new();
        opts.add_custom_keyword("NoAutoStart").unwrap();
        opts.add_custom_keyword("MiniPrint").unwrap();
        assert_eq!(
            keyword_line(&opts),
            "! SP B3LYP def2-SVP TightSCF NoAutoStart MiniPrint"
        );
    }

    #[test]
    fn test_cpcm_solvent_token() {
        let mut opts = OptionSet::new();
        opts.set_solvent(Some(SolventModel::Cpcm("Water".to_string())))
            .unwrap();
        assert_eq!(
            keyword_line(&opts),
            "! SP B3LYP def2-SVP CPCM(Water) TightSCF"
        );
        // CPCM 不产生 %cpcm 块
        assert!(!render_input(&opts).contains("%cpcm"));
    }

    #[test]
    fn test_smd_solvent_block() {
        let mut opts = OptionSet::new();
        opts.set_solvent(Some(SolventModel::Smd("Acetonitrile".to_string())))
            .unwrap();

        let text = render_input(&opts);
        assert!(keyword_line(&opts).contains(" CPCM "));
        assert!(text.contains("%cpcm\n  smd true\n  SMDsolvent \"Acetonitrile\"\nend\n"));
    }

    #[test]
    fn test_custom_blocks_pass_through_in_entry_order() {
        let mut opts = OptionSet::new();
        opts.add_custom_block("%scf\n  maxiter 300\nend").unwrap();
        opts.add_custom_block("%output\n  print[p_mos] 1\nend").unwrap();

        let text = render_input(&opts);
        let scf = text.find("%scf").unwrap();
        let output = text.find("%output").unwrap();
        assert!(scf < output);
        assert!(text.contains("%scf\n  maxiter 300\nend\n"));
    }

    #[test]
    fn test_coordinates_render_in_stored_order() {
        let mut opts = OptionSet::new();
        opts.set_job_type(JobType::OptFreq);
        opts.set_charge(-1);
        opts.set_multiplicity(2).unwrap();
        water(&mut opts);

        let text = render_input(&opts);
        assert!(text.starts_with("! Opt Freq B3LYP def2-SVP TightSCF\n"));
        assert!(text.contains("* xyz -1 2\n"));

        let o = text.find("O  ").unwrap();
        let h = text.find("H  ").unwrap();
        assert!(o < h);

        // 定宽原子行
        assert!(text.contains("O       0.00000000     0.00000000     0.00000000\n"));
    }
}
