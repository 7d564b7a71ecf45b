//! # 模板持久化
//!
//! 把 OptionSet 快照以 TOML 形式存盘、读回。模板是无损的结构化
//! 表示：`render(load(save(x))) == render(x)` 对一切合法 x 成立。
//!
//! 写入采用先写临时文件再原子替换，保存失败不会破坏已有模板。
//! 加载只在完全成功后才返回新状态，调用方据此整体替换，
//! 不存在半更新。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/options.rs`

use crate::error::{OrcagenError, Result};
use crate::models::OptionSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 当前模板格式版本
pub const TEMPLATE_VERSION: u32 = 1;

/// 磁盘上的模板文件结构
#[derive(Debug, Serialize, Deserialize)]
pub struct Template {
    pub version: u32,

    /// 可选的人类可读说明
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub options: OptionSet,
}

impl Template {
    pub fn new(options: OptionSet, description: Option<String>) -> Self {
        Template {
            version: TEMPLATE_VERSION,
            description,
            options,
        }
    }
}

/// 保存模板。失败时不触碰目标路径上已有的文件。
pub fn save_template(opts: &OptionSet, description: Option<String>, path: &Path) -> Result<()> {
    let template = Template::new(opts.clone(), description);

    let content = toml::to_string_pretty(&template).map_err(|e| {
        OrcagenError::parse("template", path.display().to_string(), e.to_string())
    })?;

    // 先写临时文件，再原子替换
    let tmp_path = path.with_extension("toml.tmp");
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

/// 加载模板并重建 OptionSet。
///
/// 文件缺失、TOML 语法错误、版本不符、字段非法都报错返回，
/// 绝不返回部分状态。
pub fn load_template(path: &Path) -> Result<OptionSet> {
    if !path.exists() {
        return Err(OrcagenError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| OrcagenError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let template: Template = toml::from_str(&content).map_err(|e| {
        // toml 的错误信息自带行列定位
        OrcagenError::parse("template", path.display().to_string(), e.to_string())
    })?;

    if template.version != TEMPLATE_VERSION {
        return Err(OrcagenError::parse(
            "template",
            path.display().to_string(),
            format!(
                "unsupported template version {} (expected {})",
                template.version, TEMPLATE_VERSION
            ),
        ));
    }

    // 反序列化绕过了 setter 校验，这里统一复查
    template.options.validate()?;

    Ok(template.options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::render_input;
    use crate::models::{Atom, ExtraKeyword, JobType, SolventModel};

    fn sample() -> OptionSet {
        let mut opts = OptionSet::new();
        opts.set_job_type(JobType::TdDft);
        opts.set_method("wB97X-D").unwrap();
        opts.set_basis_set("ma-def2-SVP").unwrap();
        opts.set_charge(1);
        opts.set_multiplicity(3).unwrap();
        opts.set_solvent(Some(SolventModel::Smd("Methanol".to_string())))
            .unwrap();
        opts.set_keyword(ExtraKeyword::RijCosx, true);
        opts.set_keyword(ExtraKeyword::DefGrid3, true);
        opts.add_custom_keyword("NoAutoStart").unwrap();
        opts.set_nprocs(16).unwrap();
        opts.set_maxcore_mb(3000).unwrap();
        opts.add_custom_block("%tddft\n  nroots 10\nend").unwrap();
        opts.set_coordinates(vec![
            Atom::new("N", 0.0, 0.0, 0.0),
            Atom::new("H", 0.94, 0.0, 0.0),
        ])
        .unwrap();
        opts
    }

    #[test]
    fn test_round_trip_through_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.toml");

        let original = sample();
        save_template(&original, Some("test template".to_string()), &path).unwrap();
        let loaded = load_template(&path).unwrap();

        assert_eq!(loaded, original);
        assert_eq!(render_input(&loaded), render_input(&original));
    }

    #[test]
    fn test_default_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");

        let original = OptionSet::new();
        save_template(&original, None, &path).unwrap();
        assert_eq!(load_template(&path).unwrap(), original);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_template(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, OrcagenError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "version = 1\n[options\n").unwrap();

        let err = load_template(&path).unwrap_err();
        assert!(matches!(err, OrcagenError::ParseError { .. }));
    }

    #[test]
    fn test_load_rejects_invalid_field_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero.toml");
        std::fs::write(
            &path,
            "version = 1\n[options]\nmultiplicity = 0\n",
        )
        .unwrap();

        let err = load_template(&path).unwrap_err();
        assert!(matches!(err, OrcagenError::ValidationError { .. }));
    }

    #[test]
    fn test_load_rejects_unknown_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("future.toml");
        std::fs::write(&path, "version = 99\n[options]\n").unwrap();

        let err = load_template(&path).unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn test_save_overwrites_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.toml");

        save_template(&OptionSet::new(), None, &path).unwrap();
        let mut changed = OptionSet::new();
        changed.set_charge(2);
        save_template(&changed, None, &path).unwrap();

        assert_eq!(load_template(&path).unwrap().charge(), 2);
        // 临时文件不残留
        assert!(!path.with_extension("toml.tmp").exists());
    }
}
