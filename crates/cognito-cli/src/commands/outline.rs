//! Outline command implementation.

use crate::cli::OutlineArgs;
use crate::commands::read_input;
use crate::config::{Config, ProviderKind};
use crate::error::Result;
use crate::output::Formatter;
use crate::provider::Provider;
use cognito_domain::{FeatureExtractor, StyleExample};
use cognito_nlp::{
    batch_process_texts, style_analysis_from_document, text_analysis_from_document,
    HeuristicExtractor, DEFAULT_BATCH_LIMIT,
};
use cognito_outline::{OutlineGenerator, OutlineRequest};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Execute the outline command.
pub async fn execute_outline(
    args: OutlineArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_input(args.file.as_deref())?;

    let settings = config.provider.clone().with_overrides(
        args.provider.map(Into::into),
        args.model,
        args.endpoint,
    );
    let provider = Provider::from_settings(&settings, config.outline.generation_timeout())?;
    if settings.kind == ProviderKind::Mock {
        eprintln!(
            "{}",
            formatter.warning("Mock provider selected, the outline is built from topics alone")
        );
    }

    let extractor = Arc::new(HeuristicExtractor::default());
    let request = build_request(extractor.as_ref(), text, &args.style_examples)?;

    let generator =
        OutlineGenerator::from_shared(Arc::new(provider), extractor, config.outline.clone());
    let outline = generator.generate_outline(request).await?;

    println!("{}", formatter.format_outline(&outline)?);
    Ok(())
}

/// Attach text and style analysis of the notes, plus any style examples.
fn build_request(
    extractor: &HeuristicExtractor,
    text: String,
    style_example_paths: &[PathBuf],
) -> Result<OutlineRequest> {
    let doc = extractor.extract(&text)?;
    let text_analysis = text_analysis_from_document(&doc);
    let style_analysis = style_analysis_from_document(&doc);

    let style_examples = load_style_examples(extractor, style_example_paths)?;
    if !style_examples.is_empty() {
        info!("Loaded {} style examples", style_examples.len());
    }

    Ok(OutlineRequest::new(text)
        .with_text_analysis(text_analysis)
        .with_style_analysis(style_analysis)
        .with_style_examples(style_examples))
}

fn load_style_examples(
    extractor: &HeuristicExtractor,
    paths: &[PathBuf],
) -> Result<Vec<StyleExample>> {
    let texts = paths
        .iter()
        .map(fs::read_to_string)
        .collect::<std::io::Result<Vec<_>>>()?;
    Ok(batch_process_texts(extractor, &texts, DEFAULT_BATCH_LIMIT))
}
