use tracing::debug;

use super::registry::TransformRegistry;
use crate::error::TransformError;
use crate::params::TextToolParams;

/// Subject used when the input area is empty.
pub const DEFAULT_SUBJECT: &str = "<p style=\"color: #E97\">✿</p>";

/// Input/output state of the text tool.
#[derive(Clone, Debug, Default)]
pub struct TextTool {
    pub input: String,
    pub output: String,
    registry: TransformRegistry,
    load_error: Option<TransformError>,
}

impl TextTool {
    pub fn new(registry: TransformRegistry) -> TextTool {
        TextTool { input: String::new(), output: String::new(), registry, load_error: None }
    }

    /// Built-in transforms plus the `f` pipeline, if any. A pipeline that
    /// fails to compile leaves its message in the input area.
    pub fn from_query(query: &str) -> TextTool {
        let params = TextToolParams::from_query(query);
        let mut tool = TextTool::new(TransformRegistry::builtin());
        if let Err(e) = tool.registry.register_user_function(&params) {
            tool.input = format!("Failed to parse 'f' parameter: {}", e);
            tool.load_error = Some(e);
        }
        tool
    }

    pub fn registry(&self) -> &TransformRegistry { &self.registry }

    /// Why the user pipeline was rejected, if it was.
    pub fn load_error(&self) -> Option<&TransformError> { self.load_error.as_ref() }

    pub fn initial_key(&self) -> Option<&str> { self.registry.initial_key() }

    /// Runs `key` over the input and stores the result as output.
    pub fn apply(&mut self, key: &str, arg_input: &str) -> Result<&str, TransformError> {
        if self.input.is_empty() {
            self.input = DEFAULT_SUBJECT.to_string();
        }
        self.output = self.registry.apply(key, &self.input, arg_input)?;
        debug!(key, len = self.output.len(), "transformed input");
        Ok(&self.output)
    }

    pub fn move_output_to_input(&mut self) {
        self.input = std::mem::take(&mut self.output);
    }

    /// Stores the outcome of fetching input text from a URL.
    pub fn accept_fetch(&mut self, result: Result<String, String>) {
        self.input = match result {
            Ok(body) => body,
            Err(msg) => format!("Failed to retrieve input from URL. {}", msg),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gets_default_subject() {
        let mut t = TextTool::default();
        let out = t.apply("toQueryValue", "").unwrap().to_string();
        assert_eq!(t.input, DEFAULT_SUBJECT);
        assert_eq!(out, "%3Cp+style=%22color:+%23E97%22%3E%E2%9C%BF%3C/p%3E");
    }

    #[test]
    fn move_swaps_output_into_input() {
        let mut t = TextTool::default();
        t.input = "a\tb".into();
        t.apply("noIndentation", "").unwrap();
        t.move_output_to_input();
        assert_eq!(t.input, "ab");
        assert!(t.output.is_empty());
    }

    #[test]
    fn fetch_failure_message() {
        let mut t = TextTool::default();
        t.accept_fetch(Err("response status: 404".into()));
        assert_eq!(t.input, "Failed to retrieve input from URL. response status: 404");
        t.accept_fetch(Ok("body".into()));
        assert_eq!(t.input, "body");
    }

    #[test]
    fn bad_user_function_is_reported() {
        let t = TextTool::from_query("f=alert(1)");
        assert!(t.input.starts_with("Failed to parse 'f' parameter: invalid pipeline"));
        assert!(matches!(t.load_error(), Some(TransformError::InvalidPipeline { .. })));
        assert_eq!(t.initial_key(), Some("toQueryValue"));
    }
}
