//! # 数据模型模块
//!
//! 定义分子坐标和 ORCA 计算选项的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `generator.rs`, `template.rs`, `commands/` 使用
//! - 子模块: molecule, options

pub mod molecule;
pub mod options;

pub use molecule::Atom;
pub use options::{
    BasisSet, ExtraKeyword, JobType, Method, OptionSet, Resources, SolventModel,
    KNOWN_BASIS_SETS, KNOWN_METHODS, KNOWN_SOLVENTS,
};
