//! Static component metadata: default props and prop type declarations.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::selector::Props;

/// Expected JSON shape of a prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    Any,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl PropKind {
    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Bool => value.is_boolean(),
            Self::Number => value.is_number(),
            Self::String => value.is_string(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }
}

/// Declaration for one prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropType {
    pub kind: PropKind,
    pub required: bool,
}

impl PropType {
    pub fn optional(kind: PropKind) -> Self {
        Self {
            kind,
            required: false,
        }
    }

    pub fn required(kind: PropKind) -> Self {
        Self {
            kind,
            required: true,
        }
    }
}

/// A prop that failed its declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum PropViolation {
    Missing { prop: String },
    WrongKind { prop: String, expected: PropKind },
}

impl fmt::Display for PropViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { prop } => write!(f, "required prop '{}' is missing", prop),
            Self::WrongKind { prop, expected } => {
                write!(f, "prop '{}' should be {:?}", prop, expected)
            }
        }
    }
}

/// Metadata a presentational component declares about itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentMeta {
    /// Props applied beneath the parent's own props.
    pub default_props: Props,
    pub prop_types: BTreeMap<String, PropType>,
}

impl ComponentMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.default_props.insert(key, value);
        self
    }

    pub fn prop_type(mut self, key: impl Into<String>, ty: PropType) -> Self {
        self.prop_types.insert(key.into(), ty);
        self
    }

    /// Check `props` against the declarations. `null` counts as missing.
    pub fn validate(&self, props: &Props) -> Vec<PropViolation> {
        let mut violations = Vec::new();
        for (prop, ty) in &self.prop_types {
            match props.get(prop) {
                None | Some(Value::Null) => {
                    if ty.required {
                        violations.push(PropViolation::Missing { prop: prop.clone() });
                    }
                }
                Some(value) if !ty.kind.accepts(value) => {
                    violations.push(PropViolation::WrongKind {
                        prop: prop.clone(),
                        expected: ty.kind,
                    });
                }
                Some(_) => {}
            }
        }
        violations
    }
}
