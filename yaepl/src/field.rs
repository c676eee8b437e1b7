//! Static description of a record's fields

use std::fmt;

use crate::error::{ConversionError, Error};
use crate::populate::Populator;

/// Converts a raw environment value and stores it into one field of `T`.
pub type Assign<T> = fn(&mut T, &str) -> Result<(), ConversionError>;

/// Conversion family of a field's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `bool`
    Bool,
    /// `u8` through `u64` and `usize`
    Unsigned,
    /// `i8` through `i64` and `isize`
    Signed,
    /// `f32`
    Float32,
    /// `f64`
    Float64,
    /// `String`, assigned verbatim
    String,
    /// No conversion from a string exists for the declared type.
    Unsupported,
}

impl FieldKind {
    /// Human-readable name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Unsigned => "unsigned integer",
            Self::Signed => "signed integer",
            Self::Float32 => "32-bit float",
            Self::Float64 => "64-bit float",
            Self::String => "string",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a record's field table.
///
/// Tables are generated by `#[derive(Populate)]` in declaration order.
pub struct FieldDescriptor<T> {
    /// Field name as declared.
    pub name: &'static str,

    /// Conversion family of the declared type.
    pub kind: FieldKind,

    /// Declared type as written in the source.
    pub type_name: &'static str,

    /// Whether the field is `pub`. Other fields are never populated.
    pub exported: bool,

    /// Raw `#[yaepl = "..."]` annotation, if any.
    pub annotation: Option<&'static str>,

    /// Mutator for the field; `None` when `kind` is [`FieldKind::Unsupported`].
    ///
    /// A field is only assigned when this is `Some` and `kind` is not
    /// [`FieldKind::Unsupported`]; otherwise it is treated as unsupported.
    pub assign: Option<Assign<T>>,
}

impl<T> FieldDescriptor<T> {
    /// Annotation to act on, or `None` when the field must be skipped.
    pub fn active_annotation(&self) -> Option<&'static str> {
        if !self.exported {
            return None;
        }
        self.annotation.filter(|annotation| !annotation.is_empty())
    }
}

impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldDescriptor<T> {}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("type_name", &self.type_name)
            .field("exported", &self.exported)
            .field("annotation", &self.annotation)
            .finish_non_exhaustive()
    }
}

/// A record whose fields can be populated from environment variables.
///
/// Implement with `#[derive(Populate)]`:
///
/// ```rust
/// use yaepl::Populate;
///
/// #[derive(Debug, Default, Populate)]
/// struct Config {
///     #[yaepl = "key:APP_HOST;required"]
///     pub host: String,
///
///     #[yaepl = "key:APP_PORT"]
///     pub port: u16,
/// }
///
/// # fn main() -> Result<(), yaepl::Error> {
/// #     std::env::set_var("APP_HOST", "localhost");
/// #     std::env::set_var("APP_PORT", "8080");
/// let config = Config::from_env()?;
/// assert_eq!(config.host, "localhost");
/// assert_eq!(config.port, 8080);
/// #     Ok(())
/// # }
/// ```
pub trait Populate: Sized {
    /// Prepended to every key before lookup. Set with `#[yaepl(prefix = "...")]`.
    const KEY_PREFIX: &'static str = "";

    /// All fields of the record, in declaration order.
    fn fields() -> Vec<FieldDescriptor<Self>>;

    /// Build a default record and populate it from the process environment.
    fn from_env() -> Result<Self, Error>
    where
        Self: Default,
    {
        let mut record = Self::default();
        Populator::new().populate(&mut record)?;
        Ok(record)
    }
}
