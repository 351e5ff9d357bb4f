use std::fmt;

/// Comparison operators.
///
/// `BETWEEN` is reserved by the language but not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (`==`)
    Eq,
    /// Not equal (`!=`)
    Ne,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Less than or equal (`<=`)
    Le,
    /// Greater than or equal (`>=`)
    Ge,
    /// Set membership (`IN`)
    In,
}

impl Operator {
    /// Look up an operator by its source spelling.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "==" => Some(Operator::Eq),
            "!=" => Some(Operator::Ne),
            "<" => Some(Operator::Lt),
            ">" => Some(Operator::Gt),
            "<=" => Some(Operator::Le),
            ">=" => Some(Operator::Ge),
            "IN" => Some(Operator::In),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Le => "<=",
            Operator::Ge => ">=",
            Operator::In => "IN",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Boolean aggregators joining the groups of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregator {
    /// Logical AND (`AND`)
    And,
    /// Logical OR (`OR`)
    Or,
}

impl Aggregator {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "AND" => Some(Aggregator::And),
            "OR" => Some(Aggregator::Or),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Aggregator::And => "AND",
            Aggregator::Or => "OR",
        }
    }
}

impl fmt::Display for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
