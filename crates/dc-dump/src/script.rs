//! User-defined sections
//!
//! Section names not in the dispatch table are handed to a [`SectionScript`],
//! which produces the text for them. The stock producer serves the
//! `section_text` entries of the options file.

use log::warn;
use thiserror::Error;

use dc_core::DumpOptions;

use crate::params::{DumpContext, DumpParams};

/// Errors from a section producer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("no section named '{0}'")]
    NotFound(String),

    #[error("{0}")]
    Failed(String),
}

impl ScriptError {
    /// Whether there is anything worth showing in the report
    fn has_message(&self) -> bool {
        match self {
            ScriptError::NotFound(_) => true,
            ScriptError::Failed(message) => !message.is_empty(),
        }
    }
}

/// Produces the text of sections by name
pub trait SectionScript {
    fn call(&self, name: &str) -> Result<String, ScriptError>;
}

/// Fixed text sections taken from the options file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSections {
    sections: Vec<(String, String)>,
}

impl TextSections {
    pub fn from_options(options: &DumpOptions) -> Self {
        Self {
            sections: options.section_texts.clone(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        let name = name.into();
        let text = text.into();
        match self.sections.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = text,
            None => self.sections.push((name, text)),
        }
    }
}

impl SectionScript for TextSections {
    fn call(&self, name: &str) -> Result<String, ScriptError> {
        self.sections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| ScriptError::NotFound(name.to_string()))
    }
}

/// Wildcard formatter: ask the script for the current section
pub fn dump_script(ctx: &DumpContext<'_>, par: &mut DumpParams<'_>) {
    let Some(script) = ctx.script else {
        return;
    };

    match script.call(&par.section) {
        Ok(text) => par.text.push_str(&text),
        Err(err) => {
            warn!("section '{}': {}", par.section, err);
            if err.has_message() {
                par.text.push_str(&format!("Script dump error: {}\n", err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dc_core::Character;

    struct Broken(&'static str);

    impl SectionScript for Broken {
        fn call(&self, _name: &str) -> Result<String, ScriptError> {
            Err(ScriptError::Failed(self.0.to_string()))
        }
    }

    fn dump(script: &dyn SectionScript, name: &str) -> String {
        let you = Character::new("Tester");
        let options = DumpOptions::default();
        let ctx = DumpContext::new(&you, &options).with_script(script);
        let mut par = DumpParams::new(false, false, None);
        par.section = name.to_string();
        dump_script(&ctx, &mut par);
        par.text
    }

    #[test]
    fn test_text_section() {
        let mut sections = TextSections::default();
        sections.insert("motto", "Carpe diem.\n");
        assert_eq!(dump(&sections, "motto"), "Carpe diem.\n");
    }

    #[test]
    fn test_insert_replaces() {
        let mut sections = TextSections::default();
        sections.insert("motto", "old");
        sections.insert("motto", "new");
        assert_eq!(sections.call("motto").unwrap(), "new");
    }

    #[test]
    fn test_unknown_section_is_reported() {
        let sections = TextSections::default();
        assert_eq!(
            dump(&sections, "nope"),
            "Script dump error: no section named 'nope'\n"
        );
    }

    #[test]
    fn test_failure_is_reported() {
        assert_eq!(
            dump(&Broken("stack overflow"), "x"),
            "Script dump error: stack overflow\n"
        );
    }

    #[test]
    fn test_empty_failure_is_silent() {
        assert_eq!(dump(&Broken(""), "x"), "");
    }

    #[test]
    fn test_from_options() {
        let options = DumpOptions::parse_config("section_text = motto: Hi\\nthere").unwrap();
        let sections = TextSections::from_options(&options);
        assert_eq!(sections.call("motto").unwrap(), "Hi\nthere");
    }

    #[test]
    fn test_no_script_writes_nothing() {
        let you = Character::new("Tester");
        let options = DumpOptions::default();
        let ctx = DumpContext::new(&you, &options);
        let mut par = DumpParams::new(false, false, None);
        par.section = "anything".to_string();
        dump_script(&ctx, &mut par);
        assert!(par.text.is_empty());
    }
}
