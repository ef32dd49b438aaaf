//! User-defined transforms as pipelines of registered transforms.
//!
//! Grammar: `step ('|' step)*` where `step = key [':' literal]`. Whitespace
//! around keys is ignored; the literal is taken verbatim up to the next `|`.
//! The token `$arg` inside a literal is replaced by the argument the pipeline
//! was dispatched with. A step without a literal runs with its own default
//! argument. Example: `noIndentation | charSwap:$arg | toQueryValue`.
use super::registry::{TransformRegistry, USER_FUNCTION_KEY};
use crate::error::TransformError;

pub const ARG_TOKEN: &str = "$arg";

#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub key: String,
    pub literal: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    /// Parses `source`, checking every key against `registry`. The user
    /// transform key is never a valid step since the pipeline replaces it.
    pub fn compile(source: &str, registry: &TransformRegistry) -> Result<Pipeline, TransformError> {
        let invalid = |reason: String| TransformError::InvalidPipeline { reason };
        if source.trim().is_empty() {
            return Err(invalid("empty expression".to_string()));
        }
        let mut steps = Vec::new();
        for (i, raw) in source.split('|').enumerate() {
            let (key, literal) = match raw.split_once(':') {
                Some((k, lit)) => (k.trim(), Some(lit.to_string())),
                None => (raw.trim(), None),
            };
            if key.is_empty() {
                return Err(invalid(format!("step {} has no transform name", i + 1)));
            }
            if key == USER_FUNCTION_KEY {
                return Err(invalid(format!("step {} refers to the user transform itself", i + 1)));
            }
            if !registry.contains(key) {
                return Err(invalid(format!("step {} names unknown transform '{}'", i + 1, key)));
            }
            steps.push(Step { key: key.to_string(), literal });
        }
        Ok(Pipeline { steps })
    }

    pub fn steps(&self) -> &[Step] { &self.steps }

    pub fn run(&self, registry: &TransformRegistry, subject: &str, arg: &str) -> Result<String, TransformError> {
        let mut text = subject.to_string();
        for step in &self.steps {
            let step_arg = step.literal.as_deref().map(|l| l.replace(ARG_TOKEN, arg)).unwrap_or_default();
            text = registry.apply(&step.key, &text, &step_arg)?;
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TextToolParams;

    #[test]
    fn parses_steps() {
        let reg = TransformRegistry::builtin();
        let p = Pipeline::compile(" noIndentation |charSwap:ab| toQueryValue", &reg).unwrap();
        assert_eq!(p.steps().len(), 3);
        assert_eq!(p.steps()[1], Step { key: "charSwap".into(), literal: Some("ab".into()) });
        assert_eq!(p.steps()[2].literal, None);
    }

    #[test]
    fn rejects_bad_expressions() {
        let reg = TransformRegistry::builtin();
        assert!(matches!(Pipeline::compile("", &reg), Err(TransformError::InvalidPipeline { .. })));
        assert!(matches!(Pipeline::compile("charSwap||toQueryValue", &reg), Err(TransformError::InvalidPipeline { .. })));
        let err = Pipeline::compile("return this.toUpperCase()", &reg).unwrap_err();
        assert!(err.to_string().contains("unknown transform"));
    }

    #[test]
    fn rejects_user_transform_step() {
        let mut reg = TransformRegistry::builtin();
        let params = TextToolParams { function: Some("noIndentation".into()), ..Default::default() };
        reg.register_user_function(&params).unwrap();
        assert!(reg.contains(USER_FUNCTION_KEY));
        let err = Pipeline::compile("noIndentation | userFunction", &reg).unwrap_err();
        assert!(err.to_string().contains("user transform itself"));
    }

    #[test]
    fn substitutes_argument() {
        let reg = TransformRegistry::builtin();
        let p = Pipeline::compile("noIndentation|charSwap:$arg|toQueryValue", &reg).unwrap();
        assert_eq!(p.run(&reg, "a\tb c", "ab").unwrap(), "ba+c");
    }
}
