//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::commands::read_input;
use crate::error::Result;
use crate::output::Formatter;
use cognito_domain::{FeatureExtractor, StructureAnalysis, StyleAnalysis, TextAnalysis};
use cognito_nlp::{
    structure_analysis_from_document, style_analysis_from_document, text_analysis_from_document,
    HeuristicExtractor,
};
use serde::Serialize;

/// Everything the analyze command reports about a text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Word statistics, frequent lemmas and entities
    pub text_analysis: TextAnalysis,
    /// Sentence length and verb tenses
    pub style_analysis: StyleAnalysis,
    /// Paragraphs, sentence types and transitions
    pub structure_analysis: StructureAnalysis,
}

impl AnalysisReport {
    /// Analyze `text` with a single extraction pass.
    pub fn from_text<E: FeatureExtractor>(
        extractor: &E,
        text: &str,
    ) -> std::result::Result<Self, E::Error> {
        let doc = extractor.extract(text)?;
        Ok(Self {
            text_analysis: text_analysis_from_document(&doc),
            style_analysis: style_analysis_from_document(&doc),
            structure_analysis: structure_analysis_from_document(text, &doc),
        })
    }
}

/// Execute the analyze command.
pub async fn execute_analyze(args: AnalyzeArgs, formatter: &Formatter) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    let report = AnalysisReport::from_text(&HeuristicExtractor::default(), &text)?;
    println!("{}", formatter.format_analysis(&report)?);
    Ok(())
}
