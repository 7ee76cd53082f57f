//! Interpreter options.
//!
//! Key bindings are fixed by design and deliberately absent here; options
//! cover the few numeric knobs an embedding may want to tune. TOML is the
//! wire format, with unknown keys rejected so typos fail loudly.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Line multiplier for the Backspace/Return jump motions.
    pub jump_lines: u32,
    /// Indent unit width applied by the reference view backend.
    pub indent_width: usize,
    /// Page height the reference view backend uses for page motions.
    pub page_lines: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            jump_lines: 5,
            indent_width: 4,
            page_lines: 20,
        }
    }
}

impl Options {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
