//! Parsing of per-field annotation strings.
//!
//! An annotation is a `;`-separated list of clauses, e.g. `key:DATABASE_URL;required`.

/// Clause prefix that introduces the environment variable name.
const KEY_PREFIX: &str = "key:";

/// Clause that marks a field as required.
const REQUIRED: &str = "required";

/// Parsed form of a field annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directive {
    /// Environment variable to read. Empty when the annotation has no `key:` clause.
    pub key: String,

    /// Whether an empty or unset value is an error.
    pub required: bool,
}

impl Directive {
    /// Parse an annotation string.
    ///
    /// Each clause is trimmed before matching. A clause starting with `key:`
    /// sets the key to the remainder as-is; when several are present the last
    /// one wins. The clause `required` sets [`Directive::required`]. Anything
    /// else is ignored, so parsing never fails.
    pub fn parse(annotation: &str) -> Self {
        let mut directive = Self::default();

        for clause in annotation.split(';').map(str::trim) {
            if let Some(key) = clause.strip_prefix(KEY_PREFIX) {
                directive.key = key.to_string();
            } else if clause == REQUIRED {
                directive.required = true;
            }
        }

        directive
    }
}
