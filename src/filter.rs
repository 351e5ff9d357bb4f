//! The compiled filter and its document rendering.
//!
//! A [`Filter`] renders to the conventional document-store query shape:
//!
//! ```text
//! {"year": {"$ne": "2018"}}
//! {"$or": [{"artist": "John Coltrane"}, {"year": {"$in": ["2018", "2019"]}}]}
//! ```

use serde::{Serialize, Serializer};
use serde_json::{Map, Value as Json};

/// Condition applied to a single field. All operands are text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Eq(String),
    Ne(String),
    Lt(String),
    Gt(String),
    Le(String),
    Ge(String),
    In(Vec<String>),
}

impl Condition {
    /// Query directive name, `None` for plain equality.
    pub fn directive(&self) -> Option<&'static str> {
        match self {
            Condition::Eq(_) => None,
            Condition::Ne(_) => Some("$ne"),
            Condition::Lt(_) => Some("$lt"),
            Condition::Gt(_) => Some("$gt"),
            Condition::Le(_) => Some("$lte"),
            Condition::Ge(_) => Some("$gte"),
            Condition::In(_) => Some("$in"),
        }
    }

    fn operand(&self) -> Json {
        match self {
            Condition::Eq(v)
            | Condition::Ne(v)
            | Condition::Lt(v)
            | Condition::Gt(v)
            | Condition::Le(v)
            | Condition::Ge(v) => Json::String(v.clone()),
            Condition::In(members) => {
                Json::Array(members.iter().cloned().map(Json::String).collect())
            }
        }
    }
}

/// A compiled filter tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `field → condition`
    Predicate { field: String, condition: Condition },
    /// `$and` over the children, in source order
    And(Vec<Filter>),
    /// `$or` over the children, in source order
    Or(Vec<Filter>),
}

impl Filter {
    /// Render as a query document.
    pub fn to_document(&self) -> Json {
        let mut doc = Map::new();
        match self {
            Filter::Predicate { field, condition } => {
                let value = match condition.directive() {
                    None => condition.operand(),
                    Some(directive) => {
                        let mut inner = Map::new();
                        inner.insert(directive.to_string(), condition.operand());
                        Json::Object(inner)
                    }
                };
                doc.insert(field.clone(), value);
            }
            Filter::And(children) => {
                doc.insert("$and".to_string(), Self::documents(children));
            }
            Filter::Or(children) => {
                doc.insert("$or".to_string(), Self::documents(children));
            }
        }
        Json::Object(doc)
    }

    fn documents(children: &[Filter]) -> Json {
        Json::Array(children.iter().map(Filter::to_document).collect())
    }

    /// Field names referenced by the filter, in order of first appearance.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        self.collect_fields(&mut fields);
        fields
    }

    fn collect_fields<'a>(&'a self, fields: &mut Vec<&'a str>) {
        match self {
            Filter::Predicate { field, .. } => {
                if !fields.contains(&field.as_str()) {
                    fields.push(field);
                }
            }
            Filter::And(children) | Filter::Or(children) => {
                for child in children {
                    child.collect_fields(fields);
                }
            }
        }
    }

    /// Check the referenced fields against the columns a store recognizes.
    ///
    /// Returns the first field that is not a known column.
    pub fn check_columns<S: AsRef<str>>(&self, columns: &[S]) -> Result<(), String> {
        match self
            .fields()
            .into_iter()
            .find(|field| !columns.iter().any(|c| c.as_ref() == *field))
        {
            Some(missing) => Err(missing.to_string()),
            None => Ok(()),
        }
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}
