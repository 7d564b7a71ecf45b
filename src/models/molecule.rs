//! # 分子坐标数据模型
//!
//! 定义笛卡尔坐标下的原子记录。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `models/options.rs` 使用
//! - 无外部模块依赖

use crate::error::{OrcagenError, Result};
use serde::{Deserialize, Serialize};

/// 原子记录：元素符号 + 笛卡尔坐标 (Å)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// 元素符号
    pub element: String,

    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Atom {
    pub fn new(element: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Atom {
            element: element.into(),
            x,
            y,
            z,
        }
    }

    /// 校验原子记录是否合法（元素符号非空且以字母开头，坐标为有限数）
    pub fn validate(&self) -> Result<()> {
        let symbol_ok = self
            .element
            .chars()
            .next()
            .map(|c| c.is_ascii_alphabetic())
            .unwrap_or(false);
        if !symbol_ok {
            return Err(OrcagenError::validation(
                "element",
                format!("'{}' is not a valid element symbol", self.element),
            ));
        }

        for (axis, v) in [("x", self.x), ("y", self.y), ("z", self.z)] {
            if !v.is_finite() {
                return Err(OrcagenError::validation(
                    axis,
                    format!("coordinate of atom '{}' is not finite", self.element),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_validate_ok() {
        let atom = Atom::new("Cl", 0.1, -2.3, 4.5);
        assert!(atom.validate().is_ok());
    }

    #[test]
    fn test_atom_validate_empty_element() {
        let atom = Atom::new("", 0.0, 0.0, 0.0);
        assert!(atom.validate().is_err());
    }

    #[test]
    fn test_atom_validate_numeric_element() {
        let atom = Atom::new("12", 0.0, 0.0, 0.0);
        assert!(atom.validate().is_err());
    }

    #[test]
    fn test_atom_validate_non_finite_coordinate() {
        let atom = Atom::new("H", f64::NAN, 0.0, 0.0);
        assert!(atom.validate().is_err());
    }
}
