use colored::Colorize;

use super::OutputFormatter;
use crate::status::CheckResult;

pub struct HumanFormatter {
    use_colors: bool,
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanFormatter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    fn success(&self, text: &str) -> String {
        if self.use_colors {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn error(&self, text: &str) -> String {
        if self.use_colors {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Friendly labels for well-known error codes; everything else gets the
/// numeric form.
fn down_reason(status_code: u16) -> String {
    match status_code {
        403 => "Forbidden".to_string(),
        404 => "Not Found".to_string(),
        500 => "Internal Server Error".to_string(),
        other => format!("Status Code: {}", other),
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, target: &str, result: &CheckResult) -> String {
        let mut output = Vec::new();

        let verdict = match (result.status_code, &result.error_detail) {
            (Some(200), _) => format!("{} {} is {}", self.success("✓"), target, self.success("Up")),
            (Some(code), _) => format!(
                "{} {} is {} ({})",
                self.error("✗"),
                target,
                self.error("Down"),
                down_reason(code)
            ),
            (None, Some(detail)) => format!(
                "{} {} is {} ({})",
                self.error("✗"),
                target,
                self.error("Down"),
                detail
            ),
            // Unreachable by construction; keep the rendering total anyway.
            (None, None) => format!("{} {} is {}", self.error("✗"), target, self.error("Down")),
        };
        output.push(verdict);

        if result.was_redirected() {
            output.push(self.dim(&format!(
                "  Redirected: {}",
                result.redirect_chain.join(" ➔ ")
            )));
        }

        output.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> HumanFormatter {
        HumanFormatter::new().without_colors()
    }

    #[test]
    fn test_up_without_redirects() {
        let result = CheckResult {
            reachable: true,
            status_code: Some(200),
            redirect_chain: Vec::new(),
            error_detail: None,
        };
        assert_eq!(
            formatter().format_check("example.com", &result),
            "✓ example.com is Up"
        );
    }

    #[test]
    fn test_up_with_redirect_chain() {
        let result = CheckResult {
            reachable: true,
            status_code: Some(200),
            redirect_chain: vec!["http://a.test/".to_string(), "https://a.test/".to_string()],
            error_detail: None,
        };
        let rendered = formatter().format_check("a.test", &result);
        assert_eq!(
            rendered,
            "✓ a.test is Up\n  Redirected: http://a.test/ ➔ https://a.test/"
        );
    }

    #[test]
    fn test_down_with_friendly_labels() {
        for (code, label) in [
            (404, "Not Found"),
            (403, "Forbidden"),
            (500, "Internal Server Error"),
        ] {
            let result = CheckResult {
                reachable: false,
                status_code: Some(code),
                redirect_chain: Vec::new(),
                error_detail: None,
            };
            assert_eq!(
                formatter().format_check("x.test", &result),
                format!("✗ x.test is Down ({})", label)
            );
        }
    }

    #[test]
    fn test_down_with_numeric_status() {
        let result = CheckResult {
            reachable: false,
            status_code: Some(503),
            redirect_chain: Vec::new(),
            error_detail: None,
        };
        assert_eq!(
            formatter().format_check("x.test", &result),
            "✗ x.test is Down (Status Code: 503)"
        );
    }

    #[test]
    fn test_down_with_transport_error() {
        let result = CheckResult {
            reachable: false,
            status_code: None,
            redirect_chain: Vec::new(),
            error_detail: Some("request failed: dns error".to_string()),
        };
        assert_eq!(
            formatter().format_check("badhost.invalid", &result),
            "✗ badhost.invalid is Down (request failed: dns error)"
        );
    }
}
