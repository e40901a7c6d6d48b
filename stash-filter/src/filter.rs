//! Predicate types emitted by the filter compiler.
//!
//! A compiled filter is an ordered `Vec<Predicate>` that the executor
//! AND-combines. Each predicate targets one attribute path with one
//! [`Operator`]; the price group additionally carries an anchor clause
//! (the currency code) that must hold on the same record.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::path::AttributePath;

/// A scalar operand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// String value.
    String(String),
}

impl FilterValue {
    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// String view of the value, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::String(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

/// Membership set for bounded enumerations. Link counts fit inline.
pub type MemberSet = SmallVec<[i64; 7]>;

/// The comparison a clause applies to its attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum Operator {
    /// Equals the value.
    Equals(FilterValue),
    /// Contains the substring, case-insensitively.
    ContainsCi(String),
    /// Greater than or equal.
    Gte(FilterValue),
    /// Less than or equal.
    Lte(FilterValue),
    /// Inclusive range.
    Range {
        /// Lower bound.
        gte: FilterValue,
        /// Upper bound.
        lte: FilterValue,
    },
    /// Value is one of the set.
    InSet(MemberSet),
    /// The attribute exists, whatever its value.
    Exists,
}

impl Operator {
    /// Short operator name, as used in serialized output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Equals(_) => "equals",
            Self::ContainsCi(_) => "contains_ci",
            Self::Gte(_) => "gte",
            Self::Lte(_) => "lte",
            Self::Range { .. } => "range",
            Self::InSet(_) => "in_set",
            Self::Exists => "exists",
        }
    }
}

/// One attribute constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clause {
    /// The attribute the constraint applies to.
    pub path: AttributePath,
    /// The constraint.
    #[serde(flatten)]
    pub op: Operator,
}

impl Clause {
    /// Create a clause.
    pub fn new(path: AttributePath, op: Operator) -> Self {
        Self { path, op }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.op {
            Operator::Equals(v) => write!(f, "{} = {}", self.path, v),
            Operator::ContainsCi(s) => write!(f, "{} contains {:?} (case-insensitive)", self.path, s),
            Operator::Gte(v) => write!(f, "{} >= {}", self.path, v),
            Operator::Lte(v) => write!(f, "{} <= {}", self.path, v),
            Operator::Range { gte, lte } => write!(f, "{} <= {} <= {}", gte, self.path, lte),
            Operator::InSet(values) => {
                let values: Vec<String> = values.iter().map(ToString::to_string).collect();
                write!(f, "{} in [{}]", self.path, values.join(", "))
            }
            Operator::Exists => write!(f, "{} exists", self.path),
        }
    }
}

/// One atomic constraint destined for AND-combination by the executor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Predicate {
    #[serde(skip_serializing_if = "Option::is_none")]
    anchor: Option<Clause>,
    #[serde(flatten)]
    clause: Clause,
}

impl Predicate {
    /// A single-clause predicate.
    pub fn new(path: AttributePath, op: Operator) -> Self {
        Self {
            anchor: None,
            clause: Clause::new(path, op),
        }
    }

    /// A predicate whose clause only applies together with `anchor`.
    pub fn anchored(anchor: Clause, path: AttributePath, op: Operator) -> Self {
        Self {
            anchor: Some(anchor),
            clause: Clause::new(path, op),
        }
    }

    /// The attribute the predicate constrains.
    pub fn path(&self) -> &AttributePath {
        &self.clause.path
    }

    /// The predicate's operator.
    pub fn op(&self) -> &Operator {
        &self.clause.op
    }

    /// The primary clause.
    pub fn clause(&self) -> &Clause {
        &self.clause
    }

    /// The anchoring clause, if any.
    pub fn anchor(&self) -> Option<&Clause> {
        self.anchor.as_ref()
    }

    /// All clauses, anchor first.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.anchor.iter().chain(std::iter::once(&self.clause))
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.anchor {
            Some(anchor) => write!(f, "{} and {}", anchor, self.clause),
            None => write!(f, "{}", self.clause),
        }
    }
}
