use clap::Args;
use pay_admin::catalog::hold_category;
use pay_admin::error::AppError;
use pay_admin::service::AdminServiceError;
use pay_admin::uploads::{process_closure_data, process_hold_data, UploadError, UploadOutcome};
use pay_admin::validation::{ClosureSchema, FrnSchema};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ClosureFileArgs {
    /// Closure file with `frn,agreementNumber,closureDate` lines
    pub(crate) path: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct HoldFileArgs {
    /// File of FRNs separated by commas or line breaks
    pub(crate) path: PathBuf,
    /// Hold category the FRNs would be placed under
    #[arg(long)]
    pub(crate) category: u32,
}

pub(crate) fn run_closure_validation(args: ClosureFileArgs) -> Result<(), AppError> {
    let content = read_upload(&args.path)?;
    let result = process_closure_data(&content, &ClosureSchema);
    report(&mut std::io::stdout().lock(), result)
}

pub(crate) fn run_hold_validation(args: HoldFileArgs) -> Result<(), AppError> {
    if hold_category(args.category).is_none() {
        return Err(AdminServiceError::UnknownHoldCategory(args.category).into());
    }

    let content = read_upload(&args.path)?;
    let result = process_hold_data(&content, args.category, &FrnSchema);
    report(&mut std::io::stdout().lock(), result)
}

fn read_upload(path: &Path) -> Result<String, AppError> {
    Ok(std::fs::read_to_string(path)?)
}

/// Writes the outcome JSON to `out` and the record count to stderr; a
/// rejected file still exits with an error.
fn report<T, W>(out: &mut W, result: Result<Vec<T>, UploadError>) -> Result<(), AppError>
where
    T: Serialize + Clone,
    W: Write,
{
    let outcome = UploadOutcome::from(result.clone());
    writeln!(out, "{}", render(&outcome)?)?;

    match result {
        Ok(records) => {
            eprintln!("{} record(s) accepted", records.len());
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

fn render<T: Serialize>(outcome: &UploadOutcome<T>) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(outcome)?)
}
