// Output formatting and styling

use colored::Colorize;
use seqchamber_core::{format_number, AnalysisOutcome, HistoryStatistics, PatternResult};

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Plain output, for tests and piping
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format info message
    pub fn info(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "ℹ".blue(), msg)
        } else {
            format!("ℹ {}", msg)
        }
    }

    /// Format a label/value line
    pub fn field(&self, label: &str, value: &str) -> String {
        if self.use_colors {
            format!("  {} {}", format!("{}:", label).bold(), value)
        } else {
            format!("  {}: {}", label, value)
        }
    }

    /// Format a formula or other literal text
    pub fn code(&self, code: &str) -> String {
        if self.use_colors {
            code.cyan().to_string()
        } else {
            code.to_string()
        }
    }

    /// Render one analysis outcome as a block of lines
    pub fn outcome(&self, outcome: &AnalysisOutcome) -> String {
        let mut lines = Vec::new();
        let sequence = join_numbers(&outcome.sequence);

        if outcome.success {
            lines.push(self.success(&sequence));
        } else {
            lines.push(self.error(&sequence));
        }

        if let Some(pattern) = outcome.pattern.as_ref().filter(|p| !p.is_unknown()) {
            lines.push(self.field("Pattern", pattern.description()));
            if let Some(formula) = pattern.formula() {
                lines.push(self.field("Formula", &self.code(formula)));
            }
            if let PatternResult::Polynomial { differences, .. } = pattern {
                for (order, row) in differences.iter().enumerate().skip(1) {
                    lines.push(self.field(&format!("Δ{}", order), &join_numbers(row)));
                }
            }
        }

        if let Some(prediction) = outcome.prediction {
            lines.push(self.field("Next", &format_number(prediction)));
        }
        if let Some(error) = &outcome.error {
            lines.push(self.field("Error", error));
        }
        if let Some(suggestion) = &outcome.suggestion {
            lines.push(self.field("Suggestion", suggestion));
        }
        if let Some(id) = outcome.memory_id {
            lines.push(self.field("Stored", &format!("#{}", id)));
        }

        lines.join("\n")
    }

    /// Render history statistics
    pub fn statistics(&self, stats: &HistoryStatistics) -> String {
        let mut lines = vec![self.info(&format!("{} analyses", stats.total_analyses))];
        if stats.total_analyses == 0 {
            return lines.join("\n");
        }

        for count in &stats.pattern_counts {
            lines.push(self.field(count.pattern.as_str(), &count.count.to_string()));
        }
        lines.push(self.field("Average length", &format!("{:.2}", stats.average_length)));
        if let Some(kind) = stats.most_common_pattern {
            lines.push(self.field("Most common", kind.as_str()));
        }
        lines.push(self.field("Success rate", &format!("{:.1}%", stats.success_rate)));

        lines.join("\n")
    }
}

fn join_numbers(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_error(msg: &str) {
    let style = OutputStyle::default();
    eprintln!("{}", style.error(msg));
}
