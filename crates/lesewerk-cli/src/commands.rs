// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text-file commands: `analyze` and `export`.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use lesewerk_analysis::{AnalyzedImage, ExportDocument, analyze};
use lesewerk_core::error::Result;
use tracing::{error, info};

/// Name used for text read from stdin.
pub const STDIN_NAME: &str = "-";

/// A named piece of text to analyse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    pub name: String,
    pub text: String,
}

/// Read every file in order, or all of `stdin` when `files` is empty.
pub fn read_inputs(files: &[PathBuf], mut stdin: impl Read) -> Result<Vec<TextInput>> {
    if files.is_empty() {
        let mut text = String::new();
        stdin.read_to_string(&mut text)?;
        return Ok(vec![TextInput {
            name: STDIN_NAME.to_owned(),
            text,
        }]);
    }

    files
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path).map_err(|err| {
                error!(path = %path.display(), error = %err, "failed to read input");
                err
            })?;
            Ok(TextInput {
                name: display_name(path),
                text,
            })
        })
        .collect()
}

/// One pretty-printed report per input, each followed by a newline.
pub fn write_reports(inputs: &[TextInput], out: &mut impl Write) -> Result<()> {
    for input in inputs {
        let report = analyze(&input.text);
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    }
    Ok(())
}

/// Analyse every input and write the export document to `output`.
pub fn export(inputs: &[TextInput], output: &Path) -> Result<ExportDocument> {
    let results = inputs
        .iter()
        .map(|input| AnalyzedImage::analyze(input.name.clone(), input.text.clone()))
        .collect();
    write_export(ExportDocument::new(results), output)
}

/// Serialise `document` to `output`, logging the summary.
pub fn write_export(document: ExportDocument, output: &Path) -> Result<ExportDocument> {
    std::fs::write(output, document.to_json_pretty()?)?;
    info!(
        path = %output.display(),
        images = document.summary.total_images,
        issues = document.summary.total_issues,
        "export written"
    );
    Ok(document)
}

/// File name component of `path`, or the whole path if it has none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
