//! # list 命令实现
//!
//! 用终端表格列出已知任务类型 / 方法 / 基组 / 溶剂 / 关键词。
//! 列表只是常用项，方法与基组字段都接受自由文本。
//!
//! ## 依赖关系
//! - 使用 `cli/list.rs` 定义的参数
//! - 使用 `models/`
//! - 使用 `tabled` 渲染表格

use crate::cli::list::{ListArgs, ListCategory};
use crate::error::Result;
use crate::models::{ExtraKeyword, JobType, KNOWN_BASIS_SETS, KNOWN_METHODS, KNOWN_SOLVENTS};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 任务类型行
#[derive(Tabled)]
struct JobTypeRow {
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "ORCA Keyword")]
    keyword: &'static str,
    #[tabled(rename = "Description")]
    label: &'static str,
}

/// 单列名称行
#[derive(Tabled)]
struct NameRow {
    #[tabled(rename = "Name")]
    name: &'static str,
}

/// 关键词行
#[derive(Tabled)]
struct KeywordRow {
    #[tabled(rename = "Keyword")]
    token: &'static str,
}

/// 执行 list 命令
pub fn execute(args: ListArgs) -> Result<()> {
    let categories: Vec<ListCategory> = match args.category {
        Some(c) => vec![c],
        None => vec![
            ListCategory::JobTypes,
            ListCategory::Methods,
            ListCategory::BasisSets,
            ListCategory::Solvents,
            ListCategory::Keywords,
        ],
    };

    for category in categories {
        match category {
            ListCategory::JobTypes => {
                output::print_header("Job Types");
                let rows: Vec<JobTypeRow> = JobType::ALL
                    .iter()
                    .map(|j| JobTypeRow {
                        id: j.id(),
                        keyword: j.keyword(),
                        label: j.label(),
                    })
                    .collect();
                println!("{}", Table::new(&rows));
            }
            ListCategory::Methods => {
                output::print_header("DFT Methods");
                print_names(KNOWN_METHODS);
            }
            ListCategory::BasisSets => {
                output::print_header("Basis Sets");
                print_names(KNOWN_BASIS_SETS);
            }
            ListCategory::Solvents => {
                output::print_header("Solvents");
                print_names(KNOWN_SOLVENTS);
            }
            ListCategory::Keywords => {
                output::print_header("Extra Keywords");
                let rows: Vec<KeywordRow> = ExtraKeyword::ALL
                    .iter()
                    .map(|k| KeywordRow { token: k.token() })
                    .collect();
                println!("{}", Table::new(&rows));
            }
        }
    }

    Ok(())
}

/// 打印单列名称表
fn print_names(names: &[&'static str]) {
    let rows: Vec<NameRow> = names.iter().copied().map(|n| NameRow { name: n }).collect();
    println!("{}", Table::new(&rows));
}
