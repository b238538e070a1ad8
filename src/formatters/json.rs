use crate::content::PageContent;
use crate::error::Result;

/// JSON formatter for the content model
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format content as pretty-printed JSON, loadable with `PageContent::from_json_str`.
    pub fn format(content: &PageContent) -> Result<String> {
        Ok(serde_json::to_string_pretty(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sample;

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["contact"]["methods"][0]["kind"], "Email");
        assert_eq!(value["about"]["paragraphs"][2]["inlines"][1]["type"], "accent");
    }
}
