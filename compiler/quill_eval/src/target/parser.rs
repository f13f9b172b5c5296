//! Recursive-descent parser for target expressions.
//!
//! ```text
//! expr     := unary (('+' | '-') unary)*
//! unary    := '-' unary | '!' unary | '(' ('double' | 'long') ')' unary | postfix
//! postfix  := primary ('.' IDENT args?)*
//! primary  := LONG | DOUBLE | STRING | BOOL | IDENT | 'new' IDENT args | '(' expr ')'
//! args     := '(' (expr (',' expr)*)? ')'
//! ```

use quill_stack::ensure_sufficient_stack;

use super::lexer::{tokenize, Token};
use crate::{ExecError, ExecResult};

/// Native primitive types that can appear in a cast.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Prim {
    Long,
    Double,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Arith {
    Add,
    Sub,
}

#[derive(Clone, Debug, PartialEq)]
pub(super) enum Term {
    Long(i64),
    Double(f64),
    Str(String),
    Bool(bool),
    /// Bare identifier: a class name or `env`.
    Name(String),
    Field {
        target: Box<Term>,
        name: String,
    },
    Call {
        receiver: Box<Term>,
        method: String,
        args: Vec<Term>,
    },
    New {
        class: String,
        args: Vec<Term>,
    },
    Neg(Box<Term>),
    Not(Box<Term>),
    Cast {
        to: Prim,
        operand: Box<Term>,
    },
    Binary {
        op: Arith,
        left: Box<Term>,
        right: Box<Term>,
    },
}

pub(super) fn parse(source: &str) -> ExecResult<Term> {
    let tokens = tokenize(source)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        end: source.len(),
    };
    let term = parser.expr()?;
    if parser.pos < parser.tokens.len() {
        return Err(parser.unexpected("end of input"));
    }
    Ok(term)
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    /// Offset reported for errors at end of input.
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn peek_at(&self, ahead: usize) -> Option<&Token> {
        self.tokens.get(self.pos + ahead).map(|(token, _)| token)
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: &Token, what: &'static str) -> ExecResult<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn ident(&mut self, what: &'static str) -> ExecResult<String> {
        match self.peek() {
            Some(Token::Ident(name)) => {
                let name = name.clone();
                self.pos += 1;
                Ok(name)
            }
            _ => Err(self.unexpected(what)),
        }
    }

    fn unexpected(&self, expected: &'static str) -> ExecError {
        let (found, offset) = match self.tokens.get(self.pos) {
            Some((token, offset)) => (format!("{token:?}"), *offset),
            None => ("end of input".to_string(), self.end),
        };
        ExecError::Unexpected {
            expected,
            found,
            offset,
        }
    }

    fn expr(&mut self) -> ExecResult<Term> {
        let mut left = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => Arith::Add,
                Some(Token::Minus) => Arith::Sub,
                _ => return Ok(left),
            };
            self.pos += 1;
            let right = self.unary()?;
            left = Term::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
    }

    fn unary(&mut self) -> ExecResult<Term> {
        ensure_sufficient_stack(|| {
            if self.eat(&Token::Minus) {
                return Ok(Term::Neg(Box::new(self.unary()?)));
            }
            if self.eat(&Token::Bang) {
                return Ok(Term::Not(Box::new(self.unary()?)));
            }
            if let Some(to) = self.cast_prefix() {
                self.pos += 3;
                let operand = self.unary()?;
                return Ok(Term::Cast {
                    to,
                    operand: Box::new(operand),
                });
            }
            self.postfix()
        })
    }

    /// `(double)` or `(long)` starting at the current token.
    fn cast_prefix(&self) -> Option<Prim> {
        if self.peek() != Some(&Token::LParen) || self.peek_at(2) != Some(&Token::RParen) {
            return None;
        }
        match self.peek_at(1) {
            Some(Token::Ident(name)) if name == "double" => Some(Prim::Double),
            Some(Token::Ident(name)) if name == "long" => Some(Prim::Long),
            _ => None,
        }
    }

    fn postfix(&mut self) -> ExecResult<Term> {
        let mut term = self.primary()?;
        while self.eat(&Token::Dot) {
            let name = self.ident("member name")?;
            term = if self.peek() == Some(&Token::LParen) {
                let args = self.args()?;
                Term::Call {
                    receiver: Box::new(term),
                    method: name,
                    args,
                }
            } else {
                Term::Field {
                    target: Box::new(term),
                    name,
                }
            };
        }
        Ok(term)
    }

    fn primary(&mut self) -> ExecResult<Term> {
        match self.peek() {
            Some(Token::LParen) => {
                self.pos += 1;
                let inner = self.expr()?;
                self.expect(&Token::RParen, "`)`")?;
                Ok(inner)
            }
            Some(Token::New) => {
                self.pos += 1;
                let class = self.ident("class name")?;
                let args = self.args()?;
                Ok(Term::New { class, args })
            }
            _ => {
                let term = match self.peek() {
                    Some(Token::Long(n)) => Term::Long(*n),
                    Some(Token::Double(d)) => Term::Double(*d),
                    Some(Token::Str(s)) => Term::Str(s.clone()),
                    Some(Token::Bool(b)) => Term::Bool(*b),
                    Some(Token::Ident(name)) => Term::Name(name.clone()),
                    _ => return Err(self.unexpected("expression")),
                };
                self.pos += 1;
                Ok(term)
            }
        }
    }

    fn args(&mut self) -> ExecResult<Vec<Term>> {
        self.expect(&Token::LParen, "`(`")?;
        let mut args = Vec::new();
        if self.eat(&Token::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.expr()?);
            if self.eat(&Token::RParen) {
                return Ok(args);
            }
            self.expect(&Token::Comma, "`,` or `)`")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn name(s: &str) -> Box<Term> {
        Box::new(Term::Name(s.to_string()))
    }

    #[test]
    fn method_chain() {
        assert_eq!(
            parse(r#"env.getValue("x").neg()"#),
            Ok(Term::Call {
                receiver: Box::new(Term::Call {
                    receiver: name("env"),
                    method: "getValue".to_string(),
                    args: vec![Term::Str("x".to_string())],
                }),
                method: "neg".to_string(),
                args: vec![],
            })
        );
    }

    #[test]
    fn cast_binds_tighter_than_addition() {
        assert_eq!(
            parse("((double) 5L) + 1.5"),
            Ok(Term::Binary {
                op: Arith::Add,
                left: Box::new(Term::Cast {
                    to: Prim::Double,
                    operand: Box::new(Term::Long(5)),
                }),
                right: Box::new(Term::Double(1.5)),
            })
        );
    }

    #[test]
    fn parenthesized_negation() {
        assert_eq!(
            parse("(-(-5L))"),
            Ok(Term::Neg(Box::new(Term::Neg(Box::new(Term::Long(5))))))
        );
    }

    #[test]
    fn field_access() {
        assert_eq!(
            parse("Long.MIN_VALUE"),
            Ok(Term::Field {
                target: name("Long"),
                name: "MIN_VALUE".to_string(),
            })
        );
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        assert!(matches!(
            parse("5L 6L"),
            Err(ExecError::Unexpected {
                expected: "end of input",
                offset: 3,
                ..
            })
        ));
    }

    #[test]
    fn unclosed_call() {
        assert!(matches!(
            parse("env.getValue(\"x\""),
            Err(ExecError::Unexpected { offset: 16, .. })
        ));
    }
}
