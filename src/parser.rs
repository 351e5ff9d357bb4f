use crate::{
    ast::{Aggregator, Composite, Element, Operator, Token},
    error::{QueryError, Result},
    lexer::Lexer,
    symbols::SymbolTable,
};

/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Map a bare token to the operator or aggregator it spells.
///
/// Surrounding whitespace is ignored. `BETWEEN` is reserved and rejected
/// like any other unknown token.
pub fn classify(token: &str) -> Result<Element> {
    let token = token.trim();
    if let Some(aggregator) = Aggregator::from_keyword(token) {
        return Ok(Element::Aggregator(aggregator));
    }
    if let Some(operator) = Operator::from_symbol(token) {
        return Ok(Element::Operator(operator));
    }
    Err(QueryError::InvalidOperatorOrAggregator(token.to_string()))
}

/// Resolves parenthesized groups into [`Composite`] nodes.
///
/// Every group is read as a whitespace-separated list of items. An item is a
/// placeholder already bound in the symbol table, a nested group, or a bare
/// operator/aggregator which is classified and bound on the spot. A group
/// made of a single existing item collapses to that item; any other group
/// becomes a new [`Composite`] bound to a fresh placeholder. The top level
/// is read the same way, without the parentheses.
pub struct Parser<'a> {
    tokens: std::vec::IntoIter<Token>,
    current_token: Token,
    symbols: &'a mut SymbolTable,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Lex the working string up front so syntax errors anywhere in it are
    /// reported before any group is resolved.
    pub fn new(lexer: Lexer, symbols: &'a mut SymbolTable) -> Result<Self> {
        let mut tokens = lexer.tokenize()?.into_iter();
        let current_token = tokens.next().unwrap_or(Token::Eof);
        Ok(Parser {
            tokens,
            current_token,
            symbols,
            max_depth: DEFAULT_MAX_DEPTH,
        })
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn advance(&mut self) {
        self.current_token = self.tokens.next().unwrap_or(Token::Eof);
    }

    fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(&self.current_token) == std::mem::discriminant(token)
    }

    fn expect(&mut self, expected: Token) -> Result<()> {
        if !self.check(&expected) {
            return Err(QueryError::InvalidSyntax(format!(
                "expected {:?}, got {:?}",
                expected, self.current_token
            )));
        }
        self.advance();
        Ok(())
    }

    /// Resolve the whole expression into its root group.
    pub fn parse(&mut self) -> Result<Composite> {
        let root = self.parse_group(0)?;
        self.expect(Token::Eof)?;

        let Some(root) = root else {
            return Err(QueryError::IncompleteExpression(
                "expression is empty".to_string(),
            ));
        };
        tracing::debug!(%root, "resolved root placeholder");

        match self.symbols.get(&root) {
            Some(Element::Composite(composite)) => Ok(composite.clone()),
            Some(other) => Err(QueryError::IncompleteExpression(format!(
                "expression resolves to a lone {} instead of a group",
                other.kind()
            ))),
            None => Err(QueryError::IncompleteExpression(format!(
                "root placeholder {} is unbound",
                root
            ))),
        }
    }

    /// Read items up to the closing parenthesis (or end of input) and return
    /// the placeholder standing for the group, or `None` if it was empty.
    fn parse_group(&mut self, depth: usize) -> Result<Option<String>> {
        let mut placeholders = Vec::new();
        let mut elements = Vec::new();
        let mut classified = false;

        loop {
            match &self.current_token {
                Token::LParen => {
                    if depth >= self.max_depth {
                        return Err(QueryError::InvalidSyntax(format!(
                            "groups nested deeper than {} levels",
                            self.max_depth
                        )));
                    }
                    self.advance();
                    let inner = self.parse_group(depth + 1)?;
                    self.expect(Token::RParen)?;

                    let Some(inner) = inner else {
                        return Err(QueryError::InvalidSyntax("empty group `()`".to_string()));
                    };
                    elements.push(self.resolve(&inner)?);
                    placeholders.push(inner);
                }
                Token::Word(word) => {
                    let word = word.clone();
                    self.advance();

                    if self.symbols.contains(&word) {
                        elements.push(self.resolve(&word)?);
                        placeholders.push(word);
                    } else {
                        let element = classify(&word)?;
                        classified = true;
                        elements.push(element.clone());
                        placeholders.push(self.symbols.bind(element));
                    }
                }
                Token::RParen | Token::Eof => break,
            }
        }

        if placeholders.is_empty() {
            return Ok(None);
        }
        if placeholders.len() == 1 && !classified {
            return Ok(placeholders.pop());
        }
        Ok(Some(self.symbols.bind(Element::Composite(Composite::new(elements)))))
    }

    fn resolve(&self, placeholder: &str) -> Result<Element> {
        self.symbols.get(placeholder).cloned().ok_or_else(|| {
            QueryError::IncompleteExpression(format!("placeholder {} is unbound", placeholder))
        })
    }
}

#[test]
fn test_classify() {
    assert_eq!(classify("AND").unwrap(), Element::Aggregator(Aggregator::And));
    assert_eq!(classify(" >= ").unwrap(), Element::Operator(Operator::Ge));
    assert!(matches!(
        classify("BETWEEN"),
        Err(QueryError::InvalidOperatorOrAggregator(t)) if t == "BETWEEN"
    ));
}
