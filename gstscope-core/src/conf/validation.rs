use crate::conf::GstscopeConfig;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

const SUPPORTED_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Dotted path of the offending setting, e.g. `query.max_per_page`.
    pub field: String,
    pub message: String,
    pub help: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn error(&mut self, field: &str, message: String, help: Option<&str>) {
        self.errors.push(ValidationIssue {
            field: field.to_string(),
            message,
            help: help.map(str::to_string),
        });
    }

    pub fn render_json(&self) -> serde_json::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }

    pub fn render_plain(&self) {
        for issue in &self.errors {
            println!("{}: error: {}", issue.field, issue.message);
            if let Some(help) = &issue.help {
                println!("  help: {}", help);
            }
        }
    }

    pub fn render_pretty(&self) {
        if self.errors.is_empty() {
            return;
        }

        println!(
            "configuration validation failed ({} errors)\n",
            self.errors.len()
        );

        for issue in &self.errors {
            println!("  {} {}: {}", "error".red().bold(), issue.field.bold(), issue.message);
            if let Some(help) = &issue.help {
                println!("    {}: {}", "help".cyan(), help);
            }
            println!();
        }
    }
}

/// Semantic checks that the HCL schema itself cannot express.
pub fn validate(config: &GstscopeConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    let server = &config.server;
    if server.version != SUPPORTED_VERSION {
        report.error(
            "server.version",
            format!("unsupported version {}", server.version),
            Some("Set `version = 1`."),
        );
    }
    if server.listen.parse::<SocketAddr>().is_err() {
        report.error(
            "server.listen",
            format!("invalid listen address '{}'", server.listen),
            Some("Use an `ip:port` pair, e.g. \"0.0.0.0:3000\"."),
        );
    }
    if server.threads == Some(0) {
        report.error("server.threads", "threads must be at least 1".to_string(), None);
    }

    if config.ingest.max_upload_bytes == 0 {
        report.error(
            "ingest.max_upload_bytes",
            "max_upload_bytes must be greater than zero".to_string(),
            None,
        );
    }

    let query = &config.query;
    if query.max_per_page == 0 {
        report.error(
            "query.max_per_page",
            "max_per_page must be at least 1".to_string(),
            None,
        );
    }
    if query.default_per_page == 0 || query.default_per_page > query.max_per_page {
        report.error(
            "query.default_per_page",
            format!(
                "default_per_page {} must be between 1 and max_per_page ({})",
                query.default_per_page, query.max_per_page
            ),
            None,
        );
    }

    if EnvFilter::try_new(&config.logging.level).is_err() {
        report.error(
            "logging.level",
            format!("invalid log filter '{}'", config.logging.level),
            Some("Use a level such as \"info\" or a directive like \"gstscope_core=debug\"."),
        );
    }
    report
}
