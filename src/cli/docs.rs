//! Documentation content for the dbquery CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" => Some(Self::Syntax),
            "operators" | "ops" | "aggregators" => Some(Self::Operators),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"DBQUERY DOCUMENTATION

dbquery translates filter expressions into document-store query filters.
Fields are written [[name]], values {...}, and groups are parenthesized.

DOCUMENTATION CATEGORIES

  syntax            Fields, values, escaping and grouping
  operators         Comparison operators and boolean aggregators
  errors            What each error means

QUICK REFERENCE

  [[year]] != {"2018"}                      {"year":{"$ne":"2018"}}
  [[year]] IN {"2018", "2020"}              {"year":{"$in":["2018","2020"]}}
  ([[a]] == {"x"}) AND ([[b]] > {"1"})      {"$and":[{"a":"x"},{"b":{"$gt":"1"}}]}

Run 'dbquery doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX

FIELDS
  [[name]]          Field reference; letters, digits, underscores and dots
  [ [name] ]        Whitespace between the brackets is allowed
  [[album.year]]    Dots address nested fields

VALUES
  {"text"}          Literal value; quotes are stripped
  {"a", "b"}        Comma-separated members, used with IN
  {"a\{b\}"}        \{ \} \[ \] keep literal braces and brackets in a value

All values are text. No numeric coercion is applied.

GROUPING
  ( ... )           A group is either one comparison or several groups
                    joined by a single kind of aggregator
  A AND B OR C      Invalid: mixing AND and OR in one group
  (A AND B) OR C    Valid

Tokens are separated by whitespace.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS

COMPARISON                                   DIRECTIVE
  ==                equal                    (bare value)
  !=                not equal                $ne
  <                 less than                $lt
  >                 greater than             $gt
  <=                less than or equal       $lte
  >=                greater than or equal    $gte
  IN                member of set            $in

AGGREGATORS
  AND               all groups match         $and
  OR                any group matches        $or

BETWEEN is reserved and currently rejected.
"#;

const ERRORS_DOC: &str = r#"ERRORS

  invalid syntax                 nested {..{, stray [ ] { }, text between two
                                 opening or closing brackets, unbalanced or
                                 empty parentheses
  invalid operator or aggregator a bare word that is not an operator or AND/OR
  group mixes aggregators        AND and OR in the same group
  more than one operator         two comparisons in one group
  invalid group syntax           a group that is neither a comparison nor
                                 groups joined by AND/OR
  incomplete expression          the expression is empty or is not a group
"#;
