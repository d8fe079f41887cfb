use crate::core::data::{DecisionMatrix, TopsisResult};
use colored::*;
use std::io::IsTerminal;

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn score(text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn header_separator(width: usize) -> String {
        "═".repeat(width)
    }

    pub fn print_header(title: &str, width: usize) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator(width));
    }

    /// Alternatives in rank order, one line each
    pub fn print_ranking(matrix: &DecisionMatrix, result: &TopsisResult, precision: Option<usize>) {
        let name_width = matrix
            .alternatives
            .iter()
            .map(|a| a.chars().count())
            .max()
            .unwrap_or(0)
            .max("Alternative".len());

        Self::print_header("🏆 TOPSIS Ranking", name_width + 24);
        println!(
            "{:>4}  {:<name_width$}  {}",
            Self::header("Rank"),
            Self::header("Alternative"),
            Self::header("Score"),
        );

        for i in result.order_by_rank() {
            println!(
                "{:>4}  {:<name_width$}  {}",
                Self::label(&result.ranks[i].to_string()),
                matrix.alternatives[i],
                Self::score(&format_score(result.scores[i], precision.or(Some(4)))),
            );
        }
    }
}

/// Render a score for the output table. Whole numbers keep a `.0` so the
/// column always reads as floating point.
pub fn format_score(score: f64, precision: Option<usize>) -> String {
    match precision {
        Some(places) => format!("{:.*}", places, score),
        None if score.fract() == 0.0 => format!("{:.1}", score),
        None => score.to_string(),
    }
}

/// Turn styling off when disabled in config or when stdout is piped, so
/// messages stay byte-exact for scripts.
pub fn configure_color(enabled: bool) {
    if !enabled || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

pub fn print_success(message: &str) {
    println!("{}", OutputStyle::success(message));
}
