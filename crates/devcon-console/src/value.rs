//! Typed argument values and per-kind parsing.
//!
//! Every command parameter declares one of a closed set of kinds. Each kind
//! has exactly one parse function and a zero value used when a token fails
//! to coerce under the permissive dispatch policy. Enumeration kinds carry
//! their member table, supplied by the registration source.

use std::fmt;
use std::sync::Arc;

/// Member table for an enumeration-kind parameter.
///
/// Members are `(name, ordinal)` pairs in declaration order. Names are
/// matched case-insensitively.
#[derive(Debug)]
pub struct EnumSpec {
    name: String,
    members: Vec<(String, i64)>,
}

impl EnumSpec {
    /// Build a member table. `name` is the enumeration's display name.
    pub fn new<N, M, I>(name: N, members: I) -> Arc<Self>
    where
        N: Into<String>,
        M: Into<String>,
        I: IntoIterator<Item = (M, i64)>,
    {
        Arc::new(Self {
            name: name.into(),
            members: members.into_iter().map(|(n, v)| (n.into(), v)).collect(),
        })
    }

    /// The enumeration's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a member ordinal by case-insensitive name.
    pub fn ordinal_of(&self, member: &str) -> Option<i64> {
        self.members
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(member))
            .map(|&(_, v)| v)
    }

    /// Look up a member name by ordinal.
    pub fn member_name(&self, ordinal: i64) -> Option<&str> {
        self.members
            .iter()
            .find(|&&(_, v)| v == ordinal)
            .map(|(n, _)| n.as_str())
    }
}

/// The closed set of parameter kinds.
#[derive(Debug, Clone)]
pub enum ArgKind {
    /// Signed integer (`i64`).
    Int,
    /// Unsigned integer (`u64`).
    UInt,
    /// Floating point (`f64`).
    Float,
    /// Boolean; accepts `true`/`false` in any letter case.
    Bool,
    /// Arbitrary string (one token).
    Str,
    /// Enumeration with a member table.
    Enum(Arc<EnumSpec>),
}

impl ArgKind {
    /// Parse a raw token into a value of this kind. `None` means the token
    /// does not coerce.
    ///
    /// Enumeration kinds try an integer ordinal first (any integer is
    /// accepted, declared member or not), then a case-insensitive member
    /// name.
    pub fn parse(&self, raw: &str) -> Option<ArgValue> {
        match self {
            Self::Int => raw.parse::<i64>().ok().map(ArgValue::Int),
            Self::UInt => raw.parse::<u64>().ok().map(ArgValue::UInt),
            Self::Float => raw.parse::<f64>().ok().map(ArgValue::Float),
            Self::Bool => match raw.to_ascii_lowercase().as_str() {
                "true" => Some(ArgValue::Bool(true)),
                "false" => Some(ArgValue::Bool(false)),
                _ => None,
            },
            Self::Str => Some(ArgValue::Str(raw.to_string())),
            Self::Enum(spec) => {
                if let Ok(ordinal) = raw.parse::<i64>() {
                    return Some(ArgValue::Enum(ordinal));
                }
                spec.ordinal_of(raw).map(ArgValue::Enum)
            },
        }
    }

    /// The kind's zero value, substituted for a token that failed to coerce.
    pub fn zero(&self) -> ArgValue {
        match self {
            Self::Int => ArgValue::Int(0),
            Self::UInt => ArgValue::UInt(0),
            Self::Float => ArgValue::Float(0.0),
            Self::Bool => ArgValue::Bool(false),
            Self::Str => ArgValue::Str(String::new()),
            Self::Enum(_) => ArgValue::Enum(0),
        }
    }

    /// Short name used in signature displays (`add(int a, int b)`).
    pub fn display_name(&self) -> &str {
        match self {
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Str => "string",
            Self::Enum(spec) => spec.name(),
        }
    }
}

/// A coerced argument value handed to a command's callable.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Str(String),
    /// Enumeration ordinal.
    Enum(i64),
}

impl ArgValue {
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Self::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match *self {
            Self::UInt(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Self::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<i64> {
        match *self {
            Self::Enum(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v}"),
            Self::Enum(v) => write!(f, "{v}"),
        }
    }
}
