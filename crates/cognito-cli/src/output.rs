//! Output formatting for the CLI.

use crate::commands::AnalysisReport;
use crate::config::OutputFormat;
use crate::error::Result;
use cognito_domain::Outline;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an outline.
    pub fn format_outline(&self, outline: &Outline) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(outline)?),
            OutputFormat::Text => Ok(self.format_outline_text(outline)),
        }
    }

    /// Format an analysis report.
    pub fn format_analysis(&self, report: &AnalysisReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Text => Ok(self.format_analysis_text(report)),
        }
    }

    fn format_outline_text(&self, outline: &Outline) -> String {
        let mut builder = Builder::default();
        builder.push_record(["#", "Section", "Suggested Length", "Key Points"]);
        for (i, section) in outline.sections.iter().enumerate() {
            builder.push_record([
                (i + 1).to_string(),
                section.title.clone(),
                section.suggested_length.to_string(),
                section.key_points.len().to_string(),
            ]);
        }
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut out = String::new();
        out.push_str(&table.to_string());
        out.push('\n');

        for section in &outline.sections {
            out.push('\n');
            out.push_str(&self.colorize(&section.title, "cyan"));
            out.push_str(&format!(" ({} words)\n", section.suggested_length));
            for point in &section.key_points {
                out.push_str(&format!("  - {}\n", point));
            }
        }

        out.push('\n');
        out.push_str(&self.info(&format!(
            "Total suggested length: {} words",
            outline.total_suggested_length
        )));
        if let Some(style) = &outline.writing_style {
            out.push('\n');
            out.push_str(&self.info(&format!(
                "Writing style: about {:.1} words per sentence, {} tense",
                style.sentence_length, style.recommended_tense
            )));
        }
        out
    }

    fn format_analysis_text(&self, report: &AnalysisReport) -> String {
        let stats = &report.text_analysis.statistics;
        let style = &report.style_analysis.style_metrics;
        let structure = &report.structure_analysis;

        let avg_sentence = style
            .avg_sentence_length
            .map_or_else(|| "-".to_string(), |v| format!("{:.2}", v));

        let mut builder = Builder::default();
        builder.push_record(["Metric", "Value"]);
        let rows = [
            ("Words", stats.word_count.to_string()),
            ("Sentences", stats.sentence_count.to_string()),
            ("Avg word length", format!("{:.2}", stats.avg_word_length)),
            ("Avg sentence length", avg_sentence),
            ("Paragraphs", structure.num_paragraphs.to_string()),
            ("Avg paragraph length", format!("{:.2}", structure.avg_paragraph_length)),
            ("Statements", structure.sentence_types.statements.to_string()),
            ("Questions", structure.sentence_types.questions.to_string()),
            ("Complex sentences", structure.sentence_types.complex.to_string()),
            ("Transitions", structure.transitions.to_string()),
        ];
        for (metric, value) in rows {
            builder.push_record([metric.to_string(), value]);
        }
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut out = table.to_string();

        if !report.text_analysis.common_words.is_empty() {
            let words: Vec<String> = report
                .text_analysis
                .common_words
                .iter()
                .map(|(word, count)| format!("{} ({})", word, count))
                .collect();
            out.push('\n');
            out.push_str(&self.colorize("Common words: ", "cyan"));
            out.push_str(&words.join(", "));
        }

        if !report.text_analysis.named_entities.is_empty() {
            let entities: Vec<String> = report
                .text_analysis
                .named_entities
                .iter()
                .map(|(text, label)| format!("{} [{}]", text, label))
                .collect();
            out.push('\n');
            out.push_str(&self.colorize("Entities: ", "cyan"));
            out.push_str(&entities.join(", "));
        }

        if !style.verb_tenses.is_empty() {
            let tenses: Vec<String> = style
                .verb_tenses
                .iter()
                .map(|(tense, count)| format!("{} {}", tense, count))
                .collect();
            out.push('\n');
            out.push_str(&self.colorize("Verb tenses: ", "cyan"));
            out.push_str(&tenses.join(", "));
        }

        out
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cognito_domain::{
        OutlineSection, StructureAnalysis, StyleAnalysis, SuggestedLength, TextAnalysis,
        WritingStyle,
    };

    fn create_test_outline() -> Outline {
        Outline::from_sections(vec![
            OutlineSection::new("Introduction", SuggestedLength::FRAME)
                .with_key_points(["Why soil matters", "Scope"]),
            OutlineSection::new("Composting", SuggestedLength::BODY)
                .with_key_points(["Browns and greens"]),
        ])
        .with_writing_style(Some(WritingStyle {
            sentence_length: 11.5,
            recommended_tense: "Present".to_string(),
        }))
    }

    fn create_test_report() -> AnalysisReport {
        let mut text_analysis = TextAnalysis::with_word_count(42);
        text_analysis.common_words = vec![("soil".to_string(), 3)];
        text_analysis.named_entities = vec![("Alice".to_string(), "NAME".to_string())];
        AnalysisReport {
            text_analysis,
            style_analysis: StyleAnalysis::default(),
            structure_analysis: StructureAnalysis::default(),
        }
    }

    #[test]
    fn test_outline_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_outline(&create_test_outline()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["sections"][0]["suggested_length"], "150-200");
        assert_eq!(value["total_suggested_length"], 450);
        assert_eq!(value["writing_style"]["recommended_tense"], "Present");
    }

    #[test]
    fn test_outline_text_format() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_outline(&create_test_outline()).unwrap();
        assert!(output.contains("Suggested Length"));
        assert!(output.contains("Composting (300-400 words)"));
        assert!(output.contains("  - Why soil matters"));
        assert!(output.contains("Total suggested length: 450 words"));
        assert!(output.contains("about 11.5 words per sentence, Present tense"));
    }

    #[test]
    fn test_analysis_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_analysis(&create_test_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["text_analysis"]["statistics"]["word_count"], 42);
        assert!(value["style_analysis"]["style_metrics"].is_object());
        assert_eq!(value["structure_analysis"]["num_paragraphs"], 0);
    }

    #[test]
    fn test_analysis_text_format() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_analysis(&create_test_report()).unwrap();
        assert!(output.contains("Words"));
        assert!(output.contains("42"));
        assert!(output.contains("Common words: soil (3)"));
        assert!(output.contains("Entities: Alice [NAME]"));
        assert!(!output.contains("Verb tenses"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        assert_eq!(formatter.info("test"), "ℹ test");
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }
}
