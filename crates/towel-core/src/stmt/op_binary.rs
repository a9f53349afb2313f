use crate::{Error, Result};

use std::{fmt, str::FromStr};

/// A comparison operator usable in a filter.
///
/// The set is closed: anything else is rejected when parsing, so operators
/// never reach SQL text from untrusted input.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,
}

impl BinaryOp {
    /// Every operator, in the order they are listed in error messages.
    pub const ALL: [BinaryOp; 6] = [
        BinaryOp::Lt,
        BinaryOp::Gt,
        BinaryOp::Le,
        BinaryOp::Ge,
        BinaryOp::Eq,
        BinaryOp::Ne,
    ];

    pub fn is_eq(self) -> bool {
        matches!(self, Self::Eq)
    }

    pub fn is_ne(self) -> bool {
        matches!(self, Self::Ne)
    }

    /// The SQL spelling of the operator.
    pub fn as_str(self) -> &'static str {
        use BinaryOp::*;

        match self {
            Eq => "=",
            Ne => "<>",
            Ge => ">=",
            Gt => ">",
            Le => "<=",
            Lt => "<",
        }
    }
}

impl FromStr for BinaryOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BinaryOp::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| {
                let legal: Vec<_> = BinaryOp::ALL.iter().map(|op| op.as_str()).collect();
                Error::attribute(format!(
                    "{s} is illegal SQL operator ({})",
                    legal.join(" ")
                ))
            })
    }
}

impl TryFrom<&str> for BinaryOp {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
