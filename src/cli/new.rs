//! # new 子命令 CLI 定义
//!
//! 生成起始模板，字段可用选项覆盖。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/new.rs`

use clap::Args;
use std::path::PathBuf;

/// new 子命令参数
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Output template path
    #[arg(short, long, default_value = "template.toml")]
    pub output: PathBuf,

    /// Job type (sp, opt, freq, opt-freq, td-dft, scan, ts, mm, qmmm)
    #[arg(short, long, default_value = "sp")]
    pub job_type: String,

    /// DFT method (known name or free text)
    #[arg(short, long, default_value = "B3LYP")]
    pub method: String,

    /// Basis set (known name or free text)
    #[arg(short, long, default_value = "def2-SVP")]
    pub basis: String,

    /// Total charge
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub charge: i32,

    /// Spin multiplicity
    #[arg(long, default_value_t = 1)]
    pub multiplicity: u32,

    /// Use CPCM solvation with the given solvent
    #[arg(long, value_name = "SOLVENT", conflicts_with = "smd")]
    pub cpcm: Option<String>,

    /// Use SMD solvation with the given solvent
    #[arg(long, value_name = "SOLVENT")]
    pub smd: Option<String>,

    /// Enable an extra keyword toggle (repeatable), e.g. --keyword D3BJ
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Do not enable TightSCF by default
    #[arg(long, default_value_t = false)]
    pub no_tightscf: bool,

    /// Append a custom keyword to the keyword line (repeatable)
    #[arg(long = "custom-keyword", value_name = "KEYWORD")]
    pub custom_keywords: Vec<String>,

    /// Parallel processes (%pal nprocs)
    #[arg(long, default_value_t = 4)]
    pub nprocs: u32,

    /// Memory per core in MB (%maxcore)
    #[arg(long, default_value_t = 2000)]
    pub maxcore: u32,

    /// Coordinate file to embed (.xyz / .pdb)
    #[arg(short, long)]
    pub coords: Option<PathBuf>,

    /// Template description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Overwrite an existing template file
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
