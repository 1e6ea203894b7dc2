//! One run: resolve output paths → generate content → write both files.
//!
//! Nothing is written unless generation and decoding both succeed.

use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::generation::generator::ContentGenerator;
use crate::render::output::{write_outputs, OutputPaths};

pub async fn run(
    generator: &ContentGenerator,
    subject_name: &str,
    output_dir: &Path,
) -> Result<OutputPaths, AppError> {
    // Resolve file names first so a bad subject fails before any network call.
    let paths = OutputPaths::for_subject(output_dir, subject_name)?;
    info!("Generating content for {subject_name:?}");

    let content = generator.generate_content(subject_name).await?;
    info!(
        "Generated {:?}: {} tech stack items, {} methodology steps, {} future scope items",
        content.topic.title,
        content.topic.tech_stack.len(),
        content.topic.methodology.len(),
        content.topic.future_scope.len()
    );

    write_outputs(&paths, &content).await?;
    Ok(paths)
}
