//! CLI presenter for output formatting
//!
//! Purely presentational: receives resolved state and renders it. Results
//! go to stdout, status lines to stderr.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::health::HealthStatus;
use crate::domain::transcription::{EfficiencyMetrics, IntentScores, TranscriptionResult};

const SCORE_BAR_WIDTH: usize = 20;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key/value line
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{} = {}", key.bold(), value);
    }

    /// Selected-file info line
    pub fn render_file_info(&self, name: &str, size: &str) {
        self.info(&format!("Selected: {} ({})", name, size));
    }

    /// Render the full analysis: transcript, intents, efficiency
    pub fn render_result(&self, result: &TranscriptionResult) {
        self.render_transcript(&result.transcript);
        self.render_intents(&result.intents);
        self.render_efficiency(&result.efficiency);
        if let Some(secs) = result.processing_time {
            eprintln!();
            self.info(&format!("Processing time: {:.2}s", secs));
        }
    }

    /// Transcript card
    pub fn render_transcript(&self, transcript: &str) {
        println!("\n{}", "Transcript".bold().underline());
        println!("  \u{201c}{}\u{201d}", transcript);
    }

    /// Intent tags, ranked, with the top intent highlighted
    pub fn render_intents(&self, intents: &IntentScores) {
        println!("\n{}", "Intents".bold().underline());
        for (name, score) in intents.ranked() {
            let label = format!("{:<20}", name);
            let label = if name == intents.top_intent {
                label.green().bold().to_string()
            } else {
                label
            };
            println!("  {} {} {:>5.1}%", label, score_bar(score), score * 100.0);
        }
    }

    /// Efficiency gauge
    pub fn render_efficiency(&self, metrics: &EfficiencyMetrics) {
        println!("\n{}", "Efficiency".bold().underline());
        for (label, score) in [
            ("overall", metrics.overall_score),
            ("intent", metrics.intent_score),
            ("clarity", metrics.clarity_score),
            ("urgency", metrics.urgency_score),
        ] {
            println!("  {:<20} {} {:>5.1}%", label, score_bar(score), score * 100.0);
        }

        let status = if metrics.is_efficient() {
            metrics.status.green().to_string()
        } else {
            metrics.status.yellow().to_string()
        };
        println!("  {:<20} {}", "status", status);
        println!(
            "  {:<20} {} words, {} characters",
            "length", metrics.word_count, metrics.char_count
        );
    }

    /// Connection status line; the disconnected advisory names the backend
    /// origin the client expected to reach
    pub fn render_health(&self, status: HealthStatus, base_url: &str) {
        match status {
            HealthStatus::Unknown => self.info("Backend status unknown"),
            HealthStatus::Checking => self.info("Checking backend connection..."),
            HealthStatus::Connected => self.success("Backend connected"),
            HealthStatus::Disconnected => self.warn(&format!(
                "Backend disconnected - please ensure the backend server is running on {}",
                base_url
            )),
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-width bar for a score in [0, 1]
fn score_bar(score: f64) -> String {
    let filled = (score.clamp(0.0, 1.0) * SCORE_BAR_WIDTH as f64).round() as usize;
    let empty = SCORE_BAR_WIDTH - filled;
    format!("[{}{}]", "█".repeat(filled).cyan(), "░".repeat(empty))
}
