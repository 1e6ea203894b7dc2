//! Output files: `<stem>.json` (raw model text) and `<stem>.typ` (Typst markup).

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::AppError;
use crate::generation::generator::GeneratedContent;
use crate::render::typst::render_topic;

/// Longest stem kept, leaving room for the extension within a 255-byte name.
const MAX_STEM_BYTES: usize = 200;

/// Where the two outputs for a subject are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub json: PathBuf,
    pub typst: PathBuf,
}

impl OutputPaths {
    /// Resolves output paths for `subject` under `dir`.
    /// Fails with a config error if the subject has no usable file name.
    pub fn for_subject(dir: &Path, subject: &str) -> Result<Self, AppError> {
        let stem = file_stem(subject)?;
        Ok(Self {
            json: dir.join(format!("{stem}.json")),
            typst: dir.join(format!("{stem}.typ")),
        })
    }
}

/// Makes a subject usable as a file name: path separators, characters
/// reserved on common filesystems and control characters become `_`.
/// Trailing dots and whitespace are dropped and the result is capped at
/// [`MAX_STEM_BYTES`].
pub fn file_stem(subject: &str) -> Result<String, AppError> {
    let replaced: String = subject
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let mut stem = trim_stem(&replaced);
    if stem.len() > MAX_STEM_BYTES {
        let mut end = MAX_STEM_BYTES;
        while !stem.is_char_boundary(end) {
            end -= 1;
        }
        stem = trim_stem(&stem[..end]);
    }

    if stem.is_empty() {
        return Err(AppError::Config(format!(
            "subject {subject:?} does not yield a usable file name"
        )));
    }
    Ok(stem.to_string())
}

fn trim_stem(s: &str) -> &str {
    s.trim_start()
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace())
}

/// Writes the raw response verbatim and the rendered Typst document.
pub async fn write_outputs(
    paths: &OutputPaths,
    content: &GeneratedContent,
) -> Result<(), AppError> {
    // Both files share a directory.
    if let Some(dir) = paths.json.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| AppError::Output {
                path: dir.to_path_buf(),
                source,
            })?;
    }

    write_file(&paths.json, content.raw.as_bytes()).await?;
    write_file(&paths.typst, render_topic(&content.topic).as_bytes()).await?;

    info!(
        "Wrote {} and {}",
        paths.json.display(),
        paths.typst.display()
    );
    Ok(())
}

async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| AppError::Output {
            path: path.to_path_buf(),
            source,
        })
}
