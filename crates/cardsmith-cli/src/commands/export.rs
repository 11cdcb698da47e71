//! Export command implementation.

use crate::cli::ExportArgs;
use crate::commands::import::load;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use cardsmith_io::{export, FileKind, Importer};
use std::path::PathBuf;

/// Execute the export command.
pub async fn execute_export(
    args: ExportArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let importer = Importer::new(config.import.clone());
    let written = run_export(args, &importer).await?;
    println!("{}", formatter.success(&format!("Exported cards to {}", written.display())));
    Ok(())
}

/// Import the input file and write it out again; returns the written path.
pub async fn run_export(args: ExportArgs, importer: &Importer) -> Result<PathBuf> {
    let outcome = load(importer, &args.path, args.kind).await?;
    let set = outcome.card_set;

    let target_kind = args
        .as_kind
        .map(FileKind::from)
        .or_else(|| FileKind::from_path(&args.to))
        .unwrap_or(FileKind::Json);

    let target = if args.to.is_dir() {
        args.to.join(export::file_name(set.title(), target_kind))
    } else {
        args.to
    };

    tokio::fs::write(&target, export::render(&set, target_kind)?).await?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::KindArg;

    #[tokio::test]
    async fn test_export_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("deck.json");
        std::fs::write(
            &input,
            r#"{
                "title": "World Capitals",
                "cards": [{"question": "Capital of Chile?", "answer": "Santiago"}]
            }"#,
        )
            .unwrap();

        let written = run_export(
            ExportArgs {
                path: input,
                kind: None,
                to: dir.path().to_path_buf(),
                as_kind: Some(KindArg::Csv),
            },
            &Importer::default(),
        )
        .await
        .unwrap();

        assert_eq!(written, dir.path().join("World_Capitals_flashcards.csv"));
        assert_eq!(
            std::fs::read_to_string(written).unwrap(),
            "\"Question\",\"Answer\"\n\"Capital of Chile?\",\"Santiago\""
        );
    }

    #[tokio::test]
    async fn test_export_kind_from_target_extension() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("deck.csv");
        std::fs::write(&input, "Question,Answer\nQ,A\n").unwrap();
        let target = dir.path().join("out.json");

        run_export(
            ExportArgs {
                path: input,
                kind: None,
                to: target.clone(),
                as_kind: None,
            },
            &Importer::default(),
        )
        .await
        .unwrap();

        let written = std::fs::read_to_string(target).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["source"], "Imported CSV file");
    }
}
