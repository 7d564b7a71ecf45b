//! # ORCA 计算选项数据模型
//!
//! 定义一次计算的全部用户选项 (OptionSet)，以及各字段的受控取值。
//! 所有修改都经过带校验的 setter：非法值被拒绝，原状态保持不变。
//!
//! ## 依赖关系
//! - 被 `generator.rs`, `template.rs`, `parsers/inp.rs`, `commands/` 使用
//! - 使用 `models/molecule.rs`

use crate::error::{OrcagenError, Result};
use crate::models::molecule::Atom;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// 常用 DFT 方法（允许自由文本覆盖）
pub const KNOWN_METHODS: &[&str] = &[
    "B3LYP", "PBE0", "wB97X-D", "PBE", "M06-2X", "HF", "B97-D3",
];

/// 常用基组（允许自由文本覆盖）
pub const KNOWN_BASIS_SETS: &[&str] = &[
    "def2-SVP",
    "def2-TZVP",
    "def2-QZVP",
    "6-31G*",
    "6-311G**",
    "cc-pVDZ",
    "cc-pVTZ",
];

/// 常用隐式溶剂名称（允许自由文本覆盖）
pub const KNOWN_SOLVENTS: &[&str] = &[
    "Water",
    "Methanol",
    "Ethanol",
    "Acetonitrile",
    "Dichloromethane",
    "Toluene",
];

// ─────────────────────────────────────────────────────────────
// 任务类型
// ─────────────────────────────────────────────────────────────

/// 计算任务类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    /// 单点能
    #[default]
    Sp,
    /// 几何优化
    Opt,
    /// 振动频率
    Freq,
    /// 优化 + 频率
    OptFreq,
    /// 激发态 (TD-DFT)
    TdDft,
    /// 坐标扫描
    Scan,
    /// 过渡态搜索
    Ts,
    /// 分子力学
    Mm,
    /// QM/MM 混合计算
    Qmmm,
}

impl JobType {
    /// 全部任务类型，声明顺序
    pub const ALL: [JobType; 9] = [
        JobType::Sp,
        JobType::Opt,
        JobType::Freq,
        JobType::OptFreq,
        JobType::TdDft,
        JobType::Scan,
        JobType::Ts,
        JobType::Mm,
        JobType::Qmmm,
    ];

    /// 关键词行上的 ORCA 记号
    pub fn keyword(&self) -> &'static str {
        match self {
            JobType::Sp => "SP",
            JobType::Opt => "Opt",
            JobType::Freq => "Freq",
            JobType::OptFreq => "Opt Freq",
            JobType::TdDft => "TDDFT",
            JobType::Scan => "Opt Scan",
            JobType::Ts => "OptTS",
            JobType::Mm => "MM",
            JobType::Qmmm => "QMMM",
        }
    }

    /// 人类可读名称
    pub fn label(&self) -> &'static str {
        match self {
            JobType::Sp => "Single Point (SP)",
            JobType::Opt => "Geometry Optimization (OPT)",
            JobType::Freq => "Vibrational Frequency (FREQ)",
            JobType::OptFreq => "OPT + FREQ",
            JobType::TdDft => "Excited States (TD-DFT)",
            JobType::Scan => "Scan",
            JobType::Ts => "Transition State (TS)",
            JobType::Mm => "Molecular Mechanics (MM)",
            JobType::Qmmm => "QM/MM",
        }
    }

    /// 命令行标识符
    pub fn id(&self) -> &'static str {
        match self {
            JobType::Sp => "sp",
            JobType::Opt => "opt",
            JobType::Freq => "freq",
            JobType::OptFreq => "opt-freq",
            JobType::TdDft => "td-dft",
            JobType::Scan => "scan",
            JobType::Ts => "ts",
            JobType::Mm => "mm",
            JobType::Qmmm => "qmmm",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for JobType {
    type Err = OrcagenError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        let found = JobType::ALL
            .iter()
            .find(|j| j.id() == normalized || j.id().replace('-', "") == normalized);
        found.copied().ok_or_else(|| {
            OrcagenError::InvalidArgument(format!(
                "Unknown job type '{}' (expected one of: {})",
                s,
                JobType::ALL.map(|j| j.id()).join(", ")
            ))
        })
    }
}

// ─────────────────────────────────────────────────────────────
// 方法与基组：已知值 / 自由文本
// ─────────────────────────────────────────────────────────────

/// DFT 方法：已知列表项或自由文本
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "String")]
pub enum Method {
    Known(&'static str),
    Custom(String),
}

impl<'de> Deserialize<'de> for Method {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(Method::from(String::deserialize(deserializer)?))
    }
}

impl Method {
    /// 关键词行上的记号
    pub fn keyword(&self) -> &str {
        match self {
            Method::Known(s) => s,
            Method::Custom(s) => s,
        }
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::Known(KNOWN_METHODS[0])
    }
}

impl From<String> for Method {
    fn from(s: String) -> Self {
        let trimmed = s.trim();
        match KNOWN_METHODS
            .iter()
            .find(|m| m.eq_ignore_ascii_case(trimmed))
        {
            Some(&canonical) => Method::Known(canonical),
            None => Method::Custom(trimmed.to_string()),
        }
    }
}

impl From<Method> for String {
    fn from(m: Method) -> Self {
        m.keyword().to_string()
    }
}

/// 基组：已知列表项或自由文本
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "String")]
pub enum BasisSet {
    Known(&'static str),
    Custom(String),
}

impl<'de> Deserialize<'de> for BasisSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(BasisSet::from(String::deserialize(deserializer)?))
    }
}

impl BasisSet {
    /// 关键词行上的记号
    pub fn keyword(&self) -> &str {
        match self {
            BasisSet::Known(s) => s,
            BasisSet::Custom(s) => s,
        }
    }
}

impl Default for BasisSet {
    fn default() -> Self {
        BasisSet::Known(KNOWN_BASIS_SETS[0])
    }
}

impl From<String> for BasisSet {
    fn from(s: String) -> Self {
        let trimmed = s.trim();
        match KNOWN_BASIS_SETS
            .iter()
            .find(|b| b.eq_ignore_ascii_case(trimmed))
        {
            Some(&canonical) => BasisSet::Known(canonical),
            None => BasisSet::Custom(trimmed.to_string()),
        }
    }
}

impl From<BasisSet> for String {
    fn from(b: BasisSet) -> Self {
        b.keyword().to_string()
    }
}

// ─────────────────────────────────────────────────────────────
// 溶剂模型
// ─────────────────────────────────────────────────────────────

/// 隐式溶剂模型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", content = "name", rename_all = "lowercase")]
pub enum SolventModel {
    /// CPCM 连续介质模型
    Cpcm(String),
    /// SMD 模型（通过 %cpcm 块启用）
    Smd(String),
}

impl SolventModel {
    /// 溶剂名称
    pub fn solvent(&self) -> &str {
        match self {
            SolventModel::Cpcm(s) | SolventModel::Smd(s) => s,
        }
    }

    /// 关键词行上的记号
    pub fn keyword(&self) -> String {
        match self {
            SolventModel::Cpcm(s) => format!("CPCM({})", s),
            // SMD 的溶剂名写在 %cpcm 块里，关键词行只开启 CPCM 模块
            SolventModel::Smd(_) => "CPCM".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 附加关键词开关
// ─────────────────────────────────────────────────────────────

/// 可开关的附加关键词。`ALL` 的声明顺序即关键词行上的固定输出顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExtraKeyword {
    #[serde(rename = "TightSCF")]
    TightScf,
    #[serde(rename = "D3BJ")]
    D3Bj,
    #[serde(rename = "RIJCOSX")]
    RijCosx,
    #[serde(rename = "Grid5")]
    Grid5,
    #[serde(rename = "VeryTightSCF")]
    VeryTightScf,
    #[serde(rename = "SlowConv")]
    SlowConv,
    #[serde(rename = "DefGrid3")]
    DefGrid3,
    #[serde(rename = "DefGridX")]
    DefGridX,
}

impl ExtraKeyword {
    /// 全部开关，声明顺序 = 渲染顺序
    pub const ALL: [ExtraKeyword; 8] = [
        ExtraKeyword::TightScf,
        ExtraKeyword::D3Bj,
        ExtraKeyword::RijCosx,
        ExtraKeyword::Grid5,
        ExtraKeyword::VeryTightScf,
        ExtraKeyword::SlowConv,
        ExtraKeyword::DefGrid3,
        ExtraKeyword::DefGridX,
    ];

    /// 关键词行上的 ORCA 记号
    pub fn token(&self) -> &'static str {
        match self {
            ExtraKeyword::TightScf => "TightSCF",
            ExtraKeyword::D3Bj => "D3BJ",
            ExtraKeyword::RijCosx => "RIJCOSX",
            ExtraKeyword::Grid5 => "Grid5",
            ExtraKeyword::VeryTightScf => "VeryTightSCF",
            ExtraKeyword::SlowConv => "SlowConv",
            ExtraKeyword::DefGrid3 => "DefGrid3",
            ExtraKeyword::DefGridX => "DefGridX",
        }
    }
}

impl fmt::Display for ExtraKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for ExtraKeyword {
    type Err = OrcagenError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        ExtraKeyword::ALL
            .iter()
            .find(|k| k.token().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| {
                OrcagenError::InvalidArgument(format!(
                    "Unknown keyword '{}' (expected one of: {})",
                    s,
                    ExtraKeyword::ALL.map(|k| k.token()).join(", ")
                ))
            })
    }
}

// ─────────────────────────────────────────────────────────────
// 资源配置
// ─────────────────────────────────────────────────────────────

/// 计算资源配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    /// 并行核数 (%pal nprocs)
    pub nprocs: u32,

    /// 每核内存 (MB, %maxcore)
    pub maxcore_mb: u32,
}

impl Default for Resources {
    fn default() -> Self {
        Resources {
            nprocs: 4,
            maxcore_mb: 2000,
        }
    }
}

// ─────────────────────────────────────────────────────────────
// OptionSet
// ─────────────────────────────────────────────────────────────

/// 一次计算的完整选项状态。
///
/// 扁平值对象：由当前会话独占持有，从模板加载时整体重建，
/// 不与其他实体共享。字段只能通过带校验的 setter 修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionSet {
    job_type: JobType,
    method: Method,
    basis_set: BasisSet,
    charge: i32,
    #[serde(rename = "multiplicity")]
    mult: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    solvent: Option<SolventModel>,
    keywords: BTreeSet<ExtraKeyword>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    custom_keywords: Vec<String>,
    resources: Resources,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    coordinates: Vec<Atom>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    custom_blocks: Vec<String>,
}

impl Default for OptionSet {
    /// 出厂默认：SP / B3LYP / def2-SVP，电荷 0，多重度 1，TightSCF 开启
    fn default() -> Self {
        OptionSet {
            job_type: JobType::default(),
            method: Method::default(),
            basis_set: BasisSet::default(),
            charge: 0,
            mult: 1,
            solvent: None,
            keywords: BTreeSet::from([ExtraKeyword::TightScf]),
            custom_keywords: Vec::new(),
            resources: Resources::default(),
            coordinates: Vec::new(),
            custom_blocks: Vec::new(),
        }
    }
}

impl OptionSet {
    pub fn new() -> Self {
        OptionSet::default()
    }

    // ── getter ──

    pub fn job_type(&self) -> JobType {
        self.job_type
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn basis_set(&self) -> &BasisSet {
        &self.basis_set
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    pub fn multiplicity(&self) -> u32 {
        self.mult
    }

    pub fn solvent(&self) -> Option<&SolventModel> {
        self.solvent.as_ref()
    }

    pub fn has_keyword(&self, kw: ExtraKeyword) -> bool {
        self.keywords.contains(&kw)
    }

    pub fn custom_keywords(&self) -> &[String] {
        &self.custom_keywords
    }

    pub fn resources(&self) -> Resources {
        self.resources
    }

    pub fn coordinates(&self) -> &[Atom] {
        &self.coordinates
    }

    pub fn custom_blocks(&self) -> &[String] {
        &self.custom_blocks
    }

    // ── 带校验的 setter ──

    pub fn set_job_type(&mut self, job_type: JobType) {
        self.job_type = job_type;
    }

    pub fn set_method(&mut self, method: &str) -> Result<()> {
        if method.trim().is_empty() {
            return Err(OrcagenError::validation("method", "must not be empty"));
        }
        self.method = Method::from(method.to_string());
        Ok(())
    }

    pub fn set_basis_set(&mut self, basis: &str) -> Result<()> {
        if basis.trim().is_empty() {
            return Err(OrcagenError::validation("basis_set", "must not be empty"));
        }
        self.basis_set = BasisSet::from(basis.to_string());
        Ok(())
    }

    pub fn set_charge(&mut self, charge: i32) {
        self.charge = charge;
    }

    pub fn set_multiplicity(&mut self, mult: u32) -> Result<()> {
        if mult == 0 {
            return Err(OrcagenError::validation(
                "multiplicity",
                "must be a positive integer",
            ));
        }
        self.mult = mult;
        Ok(())
    }

    pub fn set_solvent(&mut self, solvent: Option<SolventModel>) -> Result<()> {
        if let Some(ref model) = solvent {
            if model.solvent().trim().is_empty() {
                return Err(OrcagenError::validation(
                    "solvent",
                    "solvent name must not be empty",
                ));
            }
        }
        self.solvent = solvent;
        Ok(())
    }

    pub fn set_keyword(&mut self, kw: ExtraKeyword, enabled: bool) {
        if enabled {
            self.keywords.insert(kw);
        } else {
            self.keywords.remove(&kw);
        }
    }

    pub fn clear_keywords(&mut self) {
        self.keywords.clear();
    }

    pub fn add_custom_keyword(&mut self, keyword: &str) -> Result<()> {
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            return Err(OrcagenError::validation(
                "custom_keywords",
                "keyword must not be empty",
            ));
        }
        self.custom_keywords.push(trimmed.to_string());
        Ok(())
    }

    pub fn set_nprocs(&mut self, nprocs: u32) -> Result<()> {
        if nprocs == 0 {
            return Err(OrcagenError::validation(
                "nprocs",
                "must be a positive integer",
            ));
        }
        self.resources.nprocs = nprocs;
        Ok(())
    }

    pub fn set_maxcore_mb(&mut self, maxcore_mb: u32) -> Result<()> {
        if maxcore_mb == 0 {
            return Err(OrcagenError::validation(
                "maxcore_mb",
                "must be a positive integer (megabytes per core)",
            ));
        }
        self.resources.maxcore_mb = maxcore_mb;
        Ok(())
    }

    /// 整体替换坐标。任一原子记录非法则整体拒绝，原坐标保持不变。
    pub fn set_coordinates(&mut self, atoms: Vec<Atom>) -> Result<()> {
        for atom in &atoms {
            atom.validate()?;
        }
        self.coordinates = atoms;
        Ok(())
    }

    pub fn clear_coordinates(&mut self) {
        self.coordinates.clear();
    }

    pub fn add_custom_block(&mut self, block: &str) -> Result<()> {
        let trimmed = block.trim();
        if trimmed.is_empty() {
            return Err(OrcagenError::validation(
                "custom_blocks",
                "block must not be empty",
            ));
        }
        self.custom_blocks.push(trimmed.to_string());
        Ok(())
    }

    /// 恢复出厂默认
    pub fn reset(&mut self) {
        *self = OptionSet::new();
    }

    /// 全量校验。反序列化得到的状态绕过了 setter，入口处统一复查。
    pub fn validate(&self) -> Result<()> {
        if self.method.keyword().is_empty() {
            return Err(OrcagenError::validation("method", "must not be empty"));
        }
        if self.basis_set.keyword().is_empty() {
            return Err(OrcagenError::validation("basis_set", "must not be empty"));
        }
        if self.mult == 0 {
            return Err(OrcagenError::validation(
                "multiplicity",
                "must be a positive integer",
            ));
        }
        if self.resources.nprocs == 0 {
            return Err(OrcagenError::validation(
                "nprocs",
                "must be a positive integer",
            ));
        }
        if self.resources.maxcore_mb == 0 {
            return Err(OrcagenError::validation(
                "maxcore_mb",
                "must be a positive integer (megabytes per core)",
            ));
        }
        if let Some(ref model) = self.solvent {
            if model.solvent().trim().is_empty() {
                return Err(OrcagenError::validation(
                    "solvent",
                    "solvent name must not be empty",
                ));
            }
        }
        for kw in &self.custom_keywords {
            if kw.trim().is_empty() {
                return Err(OrcagenError::validation(
                    "custom_keywords",
                    "keyword must not be empty",
                ));
            }
        }
        for block in &self.custom_blocks {
            if block.trim().is_empty() {
                return Err(OrcagenError::validation(
                    "custom_blocks",
                    "block must not be empty",
                ));
            }
        }
        for atom in &self.coordinates {
            atom.validate()?;
        }
        Ok(())
    }
}
