//! Import command implementation.

use crate::cli::{ImportArgs, KindArg};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use cardsmith_io::{FileKind, ImportOutcome, Importer};
use std::path::Path;

/// Execute the import command.
pub async fn execute_import(
    args: ImportArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let importer = Importer::new(config.import.clone());
    let outcome = load(&importer, &args.path, args.kind).await?;

    for row in &outcome.skipped {
        eprintln!("{}", formatter.skipped_row(row));
    }
    println!("{}", formatter.format_card_set(&outcome.card_set)?);

    Ok(())
}

/// Import `path`, taking the kind from `kind` or the file extension.
pub async fn load(
    importer: &Importer,
    path: &Path,
    kind: Option<KindArg>,
) -> Result<ImportOutcome> {
    let kind = resolve_kind(path, kind)?;
    Ok(importer.import_file(path, kind).await?)
}

fn resolve_kind(path: &Path, kind: Option<KindArg>) -> Result<FileKind> {
    match kind {
        Some(kind) => Ok(kind.into()),
        None => FileKind::from_path(path).ok_or_else(|| {
            CliError::InvalidInput(format!(
                "Cannot tell the file kind of '{}'; use --kind json|csv",
                path.display()
            ))
        }),
    }
}
