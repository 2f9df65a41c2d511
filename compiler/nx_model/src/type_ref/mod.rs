//! Type references as they appear in method signatures.
//!
//! A [`TypeRef`] is a tagged variant over the categories the generator cares
//! about: fixed-width primitives, reference types (crossed as opaque handles),
//! unmanaged pointers, and every other value type.
//!
//! # Text form
//!
//! Snapshots spell type references with a small IL-flavoured grammar:
//!
//! ```text
//! System.Int32              primitive (looked up in the fixed table)
//! class System.Text.Encoder reference category
//! valuetype Demo.Point      value category (the default for unknown names)
//! System.Int64*             pointer; may repeat
//! ```
//!
//! `System.String` and `System.Object` are reference types even without the
//! `class` prefix, as is any name the model itself declares as a class.
//! `+` separates a nested type from its enclosing type.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Fixed-width primitives with a dedicated native spelling.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimitiveKind {
    Void,
    SByte,
    Int16,
    Int32,
    Int64,
    Byte,
    UInt16,
    UInt32,
    UInt64,
    Half,
    Single,
    Double,
    IntPtr,
    UIntPtr,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 14] = [
        PrimitiveKind::Void,
        PrimitiveKind::SByte,
        PrimitiveKind::Int16,
        PrimitiveKind::Int32,
        PrimitiveKind::Int64,
        PrimitiveKind::Byte,
        PrimitiveKind::UInt16,
        PrimitiveKind::UInt32,
        PrimitiveKind::UInt64,
        PrimitiveKind::Half,
        PrimitiveKind::Single,
        PrimitiveKind::Double,
        PrimitiveKind::IntPtr,
        PrimitiveKind::UIntPtr,
    ];

    /// Metadata name inside the `System` namespace.
    pub fn metadata_name(self) -> &'static str {
        match self {
            PrimitiveKind::Void => "Void",
            PrimitiveKind::SByte => "SByte",
            PrimitiveKind::Int16 => "Int16",
            PrimitiveKind::Int32 => "Int32",
            PrimitiveKind::Int64 => "Int64",
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::UInt16 => "UInt16",
            PrimitiveKind::UInt32 => "UInt32",
            PrimitiveKind::UInt64 => "UInt64",
            PrimitiveKind::Half => "Half",
            PrimitiveKind::Single => "Single",
            PrimitiveKind::Double => "Double",
            PrimitiveKind::IntPtr => "IntPtr",
            PrimitiveKind::UIntPtr => "UIntPtr",
        }
    }

    /// Look up a primitive by its dotted qualified name, e.g. `System.Int32`.
    pub fn from_qualified_name(name: &str) -> Option<Self> {
        let short = name.strip_prefix("System.")?;
        Self::ALL.into_iter().find(|kind| kind.metadata_name() == short)
    }
}

/// Dotted path of a named type, root to leaf.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct QualifiedPath(Vec<String>);

impl QualifiedPath {
    /// Build a path from its segments. Empty segments are dropped.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QualifiedPath(
            segments
                .into_iter()
                .map(Into::into)
                .filter(|s| !s.trim().is_empty())
                .collect(),
        )
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The type's own (leaf) name.
    pub fn short_name(&self) -> &str {
        self.0.last().map_or("", String::as_str)
    }

    pub fn join(&self, delimiter: &str) -> String {
        self.0.join(delimiter)
    }

    fn parse(text: &str) -> Result<Self, TypeRefParseError> {
        let mut segments = Vec::new();
        for segment in text.split(['.', '+']) {
            let valid = segment
                .chars()
                .next()
                .is_some_and(|c| c.is_alphabetic() || c == '_')
                && segment
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '_' || c == '`');
            if !valid {
                return Err(TypeRefParseError::InvalidName(text.to_string()));
            }
            segments.push(segment.to_string());
        }
        Ok(QualifiedPath(segments))
    }
}

impl fmt::Display for QualifiedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("."))
    }
}

/// A type as referenced from a signature.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeRef {
    Primitive(PrimitiveKind),
    /// Reference-category type; never dereferenced from native code.
    Reference(QualifiedPath),
    /// Unmanaged pointer. The pointee is never a reference type.
    Pointer(Box<TypeRef>),
    /// Any other value type.
    Value(QualifiedPath),
}

impl TypeRef {
    pub const VOID: TypeRef = TypeRef::Primitive(PrimitiveKind::Void);

    pub fn primitive(kind: PrimitiveKind) -> Self {
        TypeRef::Primitive(kind)
    }

    /// Reference type from a dotted name, e.g. `System.String`.
    pub fn reference(dotted: &str) -> Self {
        TypeRef::Reference(QualifiedPath::new(dotted.split(['.', '+'])))
    }

    /// Value type from a dotted name, e.g. `Demo.Point`.
    pub fn value(dotted: &str) -> Self {
        TypeRef::Value(QualifiedPath::new(dotted.split(['.', '+'])))
    }

    pub fn pointer_to(pointee: TypeRef) -> Self {
        TypeRef::Pointer(Box::new(pointee))
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, TypeRef::Reference(_))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Primitive(PrimitiveKind::Void))
    }

    /// The type's own name; pointers append `*` to the pointee's.
    pub fn short_name(&self) -> String {
        match self {
            TypeRef::Primitive(kind) => kind.metadata_name().to_string(),
            TypeRef::Reference(path) | TypeRef::Value(path) => path.short_name().to_string(),
            TypeRef::Pointer(pointee) => format!("{}*", pointee.short_name()),
        }
    }

    /// Segments of the qualified name joined with `delimiter`.
    pub fn qualified_name(&self, delimiter: &str) -> String {
        match self {
            TypeRef::Primitive(kind) => format!("System{delimiter}{}", kind.metadata_name()),
            TypeRef::Reference(path) | TypeRef::Value(path) => path.join(delimiter),
            TypeRef::Pointer(pointee) => format!("{}*", pointee.qualified_name(delimiter)),
        }
    }
}

/// Names that are reference types without an explicit `class` prefix.
const IMPLICIT_REFERENCES: [&str; 2] = ["System.String", "System.Object"];

impl FromStr for TypeRef {
    type Err = TypeRefParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let stars = trimmed.len() - trimmed.trim_end_matches('*').len();
        let base = trimmed.trim_end_matches('*').trim_end();

        let (explicit_reference, name) = if let Some(rest) = base.strip_prefix("class ") {
            (true, rest.trim())
        } else if let Some(rest) = base.strip_prefix("valuetype ") {
            (false, rest.trim())
        } else {
            (false, base)
        };

        if name.is_empty() {
            return Err(TypeRefParseError::Empty);
        }

        let is_reference = explicit_reference || IMPLICIT_REFERENCES.contains(&name);
        let mut ty = if is_reference {
            TypeRef::Reference(QualifiedPath::parse(name)?)
        } else if let Some(kind) = PrimitiveKind::from_qualified_name(name) {
            TypeRef::Primitive(kind)
        } else {
            TypeRef::Value(QualifiedPath::parse(name)?)
        };

        if stars > 0 && is_reference {
            return Err(TypeRefParseError::PointerToReference(name.to_string()));
        }
        for _ in 0..stars {
            ty = TypeRef::pointer_to(ty);
        }
        Ok(ty)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(kind) => write!(f, "System.{}", kind.metadata_name()),
            TypeRef::Reference(path) => write!(f, "class {path}"),
            TypeRef::Pointer(pointee) => write!(f, "{pointee}*"),
            TypeRef::Value(path) => write!(f, "{path}"),
        }
    }
}

/// Error parsing the text form of a [`TypeRef`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TypeRefParseError {
    #[error("empty type reference")]
    Empty,
    #[error("`{0}` is not a valid type name")]
    InvalidName(String),
    #[error("`{0}` is a reference type and cannot be pointed to")]
    PointerToReference(String),
}
