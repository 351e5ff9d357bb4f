use crate::{
    ast::{Aggregator, Composite, Element, Operator},
    error::{QueryError, Result},
    filter::{Condition, Filter},
};

/// Compile a resolved group into a [`Filter`].
///
/// A leaf group (one key, one operator, one value) becomes a predicate. A
/// branch group (only groups, joined by one kind of aggregator) becomes an
/// `$and`/`$or` over its compiled children. Anything else is rejected.
pub fn compile(group: &Composite) -> Result<Filter> {
    let mut tally = Tally::default();

    for element in group {
        match element {
            Element::Key(name) => tally.keys.push(name),
            Element::Value(text) => tally.values.push(text),
            Element::Operator(op) => {
                if let Some(first) = tally.operator {
                    return Err(QueryError::MultipleOperatorsInGroup(format!(
                        "`{}` and `{}`",
                        first, op
                    )));
                }
                tally.operator = Some(*op);
            }
            Element::Aggregator(aggr) => {
                match tally.aggregator {
                    Some(first) if first != *aggr => {
                        return Err(QueryError::MixedAggregatorInGroup {
                            first,
                            second: *aggr,
                        });
                    }
                    _ => tally.aggregator = Some(*aggr),
                }
                tally.aggregators += 1;
            }
            Element::Composite(child) => tally.children.push(compile(child)?),
        }
    }

    tally.finish()
}

#[derive(Default)]
struct Tally<'a> {
    keys: Vec<&'a String>,
    values: Vec<&'a String>,
    operator: Option<Operator>,
    aggregator: Option<Aggregator>,
    aggregators: usize,
    children: Vec<Filter>,
}

impl Tally<'_> {
    fn finish(self) -> Result<Filter> {
        match (
            self.keys.as_slice(),
            self.values.as_slice(),
            self.operator,
            self.aggregator,
            self.children.is_empty(),
        ) {
            ([key], [value], Some(op), None, true) => Ok(Filter::Predicate {
                field: (*key).clone(),
                condition: condition(op, value),
            }),
            ([], [], None, Some(aggr), false) => Ok(match aggr {
                Aggregator::And => Filter::And(self.children),
                Aggregator::Or => Filter::Or(self.children),
            }),
            _ => Err(QueryError::InvalidGroupSyntax(self.describe())),
        }
    }

    fn describe(&self) -> String {
        format!(
            "group has {} key(s), {} value(s), {} operator(s), {} aggregator(s) and {} nested group(s); \
             expected key, operator and value, or nested groups joined by AND/OR",
            self.keys.len(),
            self.values.len(),
            usize::from(self.operator.is_some()),
            self.aggregators,
            self.children.len()
        )
    }
}

fn condition(op: Operator, text: &str) -> Condition {
    match op {
        Operator::Eq => Condition::Eq(literal(text)),
        Operator::Ne => Condition::Ne(literal(text)),
        Operator::Lt => Condition::Lt(literal(text)),
        Operator::Gt => Condition::Gt(literal(text)),
        Operator::Le => Condition::Le(literal(text)),
        Operator::Ge => Condition::Ge(literal(text)),
        Operator::In => Condition::In(members(text)),
    }
}

/// Value text with quote characters removed. Values are always text here.
fn literal(text: &str) -> String {
    text.replace('"', "")
}

/// Comma-separated members of a set value.
fn members(text: &str) -> Vec<String> {
    text.split(',').map(|member| literal(member.trim())).collect()
}

#[test]
fn test_members_trim_around_commas() {
    assert_eq!(
        members(r#""2018", "2022" ,"2020""#),
        vec!["2018".to_string(), "2022".to_string(), "2020".to_string()]
    );
}
