//! Relational operators between two versions

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::VersionParserError;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (==)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
}

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
        }
    }

    /// Get all supported operator spellings
    pub fn supported_operators() -> &'static [&'static str] {
        &["=", "==", "!=", "<>", "<", "<=", ">", ">="]
    }

    /// Check whether an ordering between left and right operands satisfies this operator
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }
}

impl FromStr for Operator {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" | "==" => Ok(Operator::Equal),
            "!=" | "<>" => Ok(Operator::NotEqual),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            _ => Err(VersionParserError::InvalidOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
