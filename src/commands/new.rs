//! # new 命令实现
//!
//! 从默认值和命令行覆盖生成起始模板。
//!
//! ## 依赖关系
//! - 使用 `cli/new.rs` 定义的参数
//! - 使用 `models/`, `parsers/`, `template.rs`
//! - 使用 `utils/output.rs`

use crate::cli::new::NewArgs;
use crate::error::{OrcagenError, Result};
use crate::models::{ExtraKeyword, OptionSet, SolventModel};
use crate::parsers;
use crate::template;
use crate::utils::output;

/// 执行 new 命令
pub fn execute(args: NewArgs) -> Result<()> {
    if args.output.exists() && !args.overwrite {
        return Err(OrcagenError::InvalidArgument(format!(
            "'{}' already exists (use --overwrite to replace it)",
            args.output.display()
        )));
    }

    let mut opts = OptionSet::new();

    opts.set_job_type(args.job_type.parse()?);
    opts.set_method(&args.method)?;
    opts.set_basis_set(&args.basis)?;
    opts.set_charge(args.charge);
    opts.set_multiplicity(args.multiplicity)?;
    opts.set_nprocs(args.nprocs)?;
    opts.set_maxcore_mb(args.maxcore)?;

    if args.no_tightscf {
        opts.set_keyword(ExtraKeyword::TightScf, false);
    }
    for kw in &args.keywords {
        opts.set_keyword(kw.parse()?, true);
    }
    for kw in &args.custom_keywords {
        opts.add_custom_keyword(kw)?;
    }

    if let Some(solvent) = args.cpcm {
        opts.set_solvent(Some(SolventModel::Cpcm(solvent)))?;
    } else if let Some(solvent) = args.smd {
        opts.set_solvent(Some(SolventModel::Smd(solvent)))?;
    }

    if let Some(ref coords_path) = args.coords {
        let atoms = parsers::parse_coordinate_file(coords_path)?;
        output::print_info(&format!(
            "Embedded {} atoms from {}",
            atoms.len(),
            coords_path.display()
        ));
        opts.set_coordinates(atoms)?;
    }

    template::save_template(&opts, args.description, &args.output)?;
    output::print_success(&format!("Template written to {}", args.output.display()));

    Ok(())
}
