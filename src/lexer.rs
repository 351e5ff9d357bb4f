use crate::{
    ast::Token,
    error::{QueryError, Result},
};

/// Characters that must not survive value and key extraction.
const MARKERS: [char; 4] = ['{', '}', '[', ']'];

/// Splits the working string into parentheses and whitespace-separated words.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    depth: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            depth: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> Result<String> {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() || ch == '(' || ch == ')' {
                break;
            }
            if MARKERS.contains(&ch) {
                return Err(QueryError::InvalidSyntax(format!(
                    "stray `{}` (values are written {{...}}, keys [[...]])",
                    ch
                )));
            }
            result.push(ch);
            self.advance();
        }
        Ok(result)
    }

    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        match self.current_char() {
            None => {
                if self.depth > 0 {
                    return Err(QueryError::InvalidSyntax(format!(
                        "{} unclosed `(` at end of input",
                        self.depth
                    )));
                }
                Ok(Token::Eof)
            }
            Some('(') => {
                self.depth += 1;
                self.advance();
                Ok(Token::LParen)
            }
            Some(')') => {
                if self.depth == 0 {
                    return Err(QueryError::InvalidSyntax("unmatched `)`".to_string()));
                }
                self.depth -= 1;
                self.advance();
                Ok(Token::RParen)
            }
            Some(_) => self.read_word().map(Token::Word),
        }
    }

    /// Lex the whole input, ending with [`Token::Eof`].
    ///
    /// Every syntax error in the string is found here, before any group is
    /// resolved.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token == Token::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }
}

#[test]
fn test_words_and_parens() {
    let tokens = Lexer::new("(@@ELEM00 == @@ELEM01)").tokenize().unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::LParen,
            Token::Word("@@ELEM00".to_string()),
            Token::Word("==".to_string()),
            Token::Word("@@ELEM01".to_string()),
            Token::RParen,
            Token::Eof,
        ]
    );
}
