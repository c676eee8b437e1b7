//! The field population walk

use crate::directive::Directive;
use crate::env::{Env, ProcessEnv};
use crate::error::Error;
use crate::field::{FieldDescriptor, FieldKind, Populate};

/// What to do with an annotated field whose type has no conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnsupportedPolicy {
    /// Fail with [`Error::UnsupportedType`].
    #[default]
    Error,
    /// Leave the field unmodified and continue.
    Skip,
}

/// Populates records from an [`Env`].
///
/// ```rust
/// use std::collections::HashMap;
/// use yaepl::{Populate, Populator};
///
/// #[derive(Default, Populate)]
/// struct Config {
///     #[yaepl = "key:WORKERS"]
///     pub workers: u32,
/// }
///
/// let env = HashMap::from([("WORKERS".to_string(), "4".to_string())]);
/// let mut config = Config::default();
/// Populator::with_env(env).populate(&mut config).unwrap();
/// assert_eq!(config.workers, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Populator<E = ProcessEnv> {
    env: E,
    unsupported: UnsupportedPolicy,
}

impl Populator {
    /// Populator reading the process environment.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Env> Populator<E> {
    /// Populator reading from `env`.
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            unsupported: UnsupportedPolicy::default(),
        }
    }

    /// Set how annotated fields of unsupported types are handled.
    pub fn unsupported(mut self, policy: UnsupportedPolicy) -> Self {
        self.unsupported = policy;
        self
    }

    /// Populate `record` in place.
    ///
    /// Fields are processed in declaration order. Non-`pub` fields and
    /// fields without a non-empty annotation are left untouched. The first
    /// failure aborts the walk; fields assigned before it keep their values.
    ///
    /// # Errors
    ///
    /// - An annotation has no key
    /// - A required variable is unset or empty
    /// - A value is not valid UTF-8 or cannot be converted into the field's type
    /// - A field's type is unsupported (unless [`UnsupportedPolicy::Skip`])
    pub fn populate<T: Populate>(&self, record: &mut T) -> Result<(), Error> {
        for field in T::fields() {
            self.populate_field(record, &field)?;
        }
        Ok(())
    }

    fn populate_field<T: Populate>(
        &self,
        record: &mut T,
        field: &FieldDescriptor<T>,
    ) -> Result<(), Error> {
        let Some(annotation) = field.active_annotation() else {
            tracing::trace!(field = field.name, "skipping field without active annotation");
            return Ok(());
        };

        let directive = Directive::parse(annotation);
        if directive.key.is_empty() {
            return Err(Error::InvalidDirective {
                field: field.name,
                annotation,
            });
        }

        let key = format!("{}{}", T::KEY_PREFIX, directive.key);
        let value = self.env.get(&key).map_err(|source| {
            Error::conversion(field.name, key.as_str(), field.type_name, source)
        })?;
        if directive.required && value.is_empty() {
            return Err(Error::missing(field.name, key));
        }

        // Both the kind and the mutator must agree that the type is supported.
        let assign = match field.assign {
            Some(assign) if field.kind != FieldKind::Unsupported => assign,
            _ => return self.unsupported_field(field),
        };

        assign(record, &value).map_err(|source| {
            Error::conversion(field.name, key.as_str(), field.type_name, source)
        })?;
        tracing::debug!(field = field.name, key = %key, kind = %field.kind, "populated field");
        Ok(())
    }

    fn unsupported_field<T>(&self, field: &FieldDescriptor<T>) -> Result<(), Error> {
        match self.unsupported {
            UnsupportedPolicy::Error => Err(Error::UnsupportedType {
                field: field.name,
                type_name: field.type_name,
            }),
            UnsupportedPolicy::Skip => {
                tracing::debug!(
                    field = field.name,
                    type_name = field.type_name,
                    "skipping field of unsupported type"
                );
                Ok(())
            }
        }
    }
}

/// Populate `record` from the process environment.
///
/// Shorthand for `Populator::new().populate(record)`.
///
/// # Errors
///
/// See [`Populator::populate`].
pub fn populate<T: Populate>(record: &mut T) -> Result<(), Error> {
    Populator::new().populate(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::EnvValue;
    use crate::ConversionError;
    use std::collections::HashMap;

    /// Hand-written table standing in for derive output.
    #[derive(Debug, Default, PartialEq)]
    struct Record {
        first: String,
        hidden: String,
        untagged: String,
        count: u8,
        tags: Vec<String>,
    }

    impl Populate for Record {
        fn fields() -> Vec<FieldDescriptor<Self>> {
            vec![
                FieldDescriptor {
                    name: "first",
                    kind: FieldKind::String,
                    type_name: "String",
                    exported: true,
                    annotation: Some("key:FIRST"),
                    assign: Some(|record: &mut Self, raw: &str| {
                        record.first = String::parse_env(raw)?;
                        Ok(())
                    }),
                },
                FieldDescriptor {
                    name: "hidden",
                    kind: FieldKind::String,
                    type_name: "String",
                    exported: false,
                    annotation: Some("key:HIDDEN"),
                    assign: Some(|record: &mut Self, raw: &str| {
                        record.hidden = String::parse_env(raw)?;
                        Ok(())
                    }),
                },
                FieldDescriptor {
                    name: "untagged",
                    kind: FieldKind::String,
                    type_name: "String",
                    exported: true,
                    annotation: None,
                    assign: Some(|record: &mut Self, raw: &str| {
                        record.untagged = String::parse_env(raw)?;
                        Ok(())
                    }),
                },
                FieldDescriptor {
                    name: "count",
                    kind: FieldKind::Unsigned,
                    type_name: "u8",
                    exported: true,
                    annotation: Some("key:COUNT"),
                    assign: Some(|record: &mut Self, raw: &str| {
                        record.count = u8::parse_env(raw)?;
                        Ok(())
                    }),
                },
                FieldDescriptor {
                    name: "tags",
                    kind: FieldKind::Unsupported,
                    type_name: "Vec<String>",
                    exported: true,
                    annotation: Some("key:TAGS"),
                    assign: None,
                },
            ]
        }
    }

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_unsupported_type_is_error_by_default() {
        let mut record = Record::default();
        let err = Populator::with_env(env(&[("FIRST", "a"), ("COUNT", "3")]))
            .populate(&mut record)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::UnsupportedType {
                field: "tags",
                type_name: "Vec<String>"
            }
        ));
        // Earlier fields keep their assignments.
        assert_eq!(record.first, "a");
        assert_eq!(record.count, 3);
    }

    #[test]
    fn test_unsupported_type_skipped_with_policy() {
        let mut record = Record {
            tags: vec!["keep".to_string()],
            ..Record::default()
        };
        Populator::with_env(env(&[("FIRST", "a"), ("COUNT", "3"), ("TAGS", "x,y")]))
            .unsupported(UnsupportedPolicy::Skip)
            .populate(&mut record)
            .unwrap();

        assert_eq!(record.tags, vec!["keep".to_string()]);
    }

    #[test]
    fn test_private_and_untagged_fields_untouched() {
        let mut record = Record {
            hidden: "before".to_string(),
            untagged: "before".to_string(),
            ..Record::default()
        };
        let result = Populator::with_env(env(&[
            ("FIRST", "a"),
            ("HIDDEN", "leak"),
            ("COUNT", "1"),
        ]))
        .unsupported(UnsupportedPolicy::Skip)
        .populate(&mut record);

        assert!(result.is_ok());
        assert_eq!(record.hidden, "before");
        assert_eq!(record.untagged, "before");
    }

    #[test]
    fn test_conversion_error_stops_walk() {
        let mut record = Record::default();
        let err = Populator::with_env(env(&[("FIRST", "a"), ("COUNT", "300")]))
            .populate(&mut record)
            .unwrap_err();

        match err {
            Error::Conversion {
                field,
                key,
                type_name,
                source,
            } => {
                assert_eq!(field, "count");
                assert_eq!(key, "COUNT");
                assert_eq!(type_name, "u8");
                assert_eq!(source, ConversionError::Range);
            }
            other => panic!("Expected Conversion error, got {other:?}"),
        }
        assert_eq!(record.first, "a");
    }

    #[derive(Debug, Default)]
    struct Unkeyed {
        name: String,
    }

    impl Populate for Unkeyed {
        fn fields() -> Vec<FieldDescriptor<Self>> {
            vec![FieldDescriptor {
                name: "name",
                kind: FieldKind::String,
                type_name: "String",
                exported: true,
                annotation: Some("required"),
                assign: Some(|record: &mut Self, raw: &str| {
                    record.name = String::parse_env(raw)?;
                    Ok(())
                }),
            }]
        }
    }

    #[derive(Debug, Default)]
    struct RequiredList {
        items: Vec<String>,
    }

    impl Populate for RequiredList {
        const KEY_PREFIX: &'static str = "APP_";

        fn fields() -> Vec<FieldDescriptor<Self>> {
            vec![FieldDescriptor {
                name: "items",
                kind: FieldKind::Unsupported,
                type_name: "Vec<String>",
                exported: true,
                annotation: Some("key:ITEMS;required"),
                assign: None,
            }]
        }
    }

    #[test]
    fn test_required_checked_before_type() {
        let mut record = RequiredList::default();
        let err = Populator::with_env(env(&[("ITEMS", "a,b")]))
            .populate(&mut record)
            .unwrap_err();
        assert!(matches!(err, Error::MissingRequired { ref key, .. } if key == "APP_ITEMS"));
        assert!(record.items.is_empty());
    }

    #[test]
    fn test_prefix_applied_to_key() {
        let mut record = RequiredList::default();
        let err = Populator::with_env(env(&[("APP_ITEMS", "a,b")]))
            .populate(&mut record)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedType { field: "items", .. }));
    }

    #[test]
    fn test_empty_key_is_invalid() {
        let mut record = Unkeyed::default();
        let err = Populator::with_env(env(&[("", "a")]))
            .populate(&mut record)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDirective {
                field: "name",
                annotation: "required"
            }
        ));
        assert!(record.name.is_empty());
    }

    #[derive(Debug, Default)]
    struct Mismatched {
        flag: bool,
        label: String,
    }

    impl Populate for Mismatched {
        fn fields() -> Vec<FieldDescriptor<Self>> {
            vec![
                FieldDescriptor {
                    name: "label",
                    kind: FieldKind::Unsupported,
                    type_name: "Label",
                    exported: true,
                    annotation: Some("key:LABEL"),
                    assign: Some(|record: &mut Self, raw: &str| {
                        record.label = String::parse_env(raw)?;
                        Ok(())
                    }),
                },
                FieldDescriptor {
                    name: "flag",
                    kind: FieldKind::Bool,
                    type_name: "bool",
                    exported: true,
                    annotation: Some("key:FLAG"),
                    assign: None,
                },
            ]
        }
    }

    #[test]
    fn test_unsupported_kind_with_mutator_is_not_assigned() {
        let mut record = Mismatched::default();
        let err = Populator::with_env(env(&[("LABEL", "x"), ("FLAG", "true")]))
            .populate(&mut record)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::UnsupportedType {
                field: "label",
                type_name: "Label"
            }
        ));
        assert!(record.label.is_empty());
    }

    #[test]
    fn test_missing_mutator_is_unsupported() {
        let mut record = Mismatched::default();
        Populator::with_env(env(&[("LABEL", "x"), ("FLAG", "true")]))
            .unsupported(UnsupportedPolicy::Skip)
            .populate(&mut record)
            .unwrap();

        assert!(record.label.is_empty());
        assert!(!record.flag);
    }
}
