use super::OutputFormatter;
use crate::status::CheckResult;

pub struct JsonFormatter {
    pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    fn to_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value)
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        } else {
            serde_json::to_string(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_check(&self, _target: &str, result: &CheckResult) -> String {
        self.to_json(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_json_shape() {
        let result = CheckResult {
            reachable: false,
            status_code: Some(404),
            redirect_chain: Vec::new(),
            error_detail: None,
        };
        let rendered = JsonFormatter::new().compact().format_check("x.test", &result);
        assert_eq!(
            rendered,
            r#"{"reachable":false,"statusCode":404,"redirectChain":[],"errorDetail":null}"#
        );
    }
}
