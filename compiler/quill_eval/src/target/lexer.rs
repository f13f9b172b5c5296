//! Target-text tokens.

use logos::Logos;

use crate::{ExecError, ExecResult};

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub(super) enum Token {
    // `long` literal; the magnitude must fit, negatives are `-` applied to it
    #[regex(r"[0-9]+L", |lex| {
        let s = lex.slice();
        s[..s.len() - 1].parse::<i64>().ok()
    })]
    Long(i64),

    // `double` literal, with a fraction or an exponent
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Double(f64),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        unescape(&s[1..s.len() - 1])
    })]
    Str(String),

    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),

    #[token("new")]
    New,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token("!")]
    Bang,
}

/// Split `source` into tokens paired with their byte offsets.
pub(super) fn tokenize(source: &str) -> ExecResult<Vec<(Token, usize)>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let offset = lexer.span().start;
        match result {
            Ok(token) => tokens.push((token, offset)),
            Err(()) => {
                return Err(ExecError::Lex {
                    offset,
                    text: lexer.slice().to_string(),
                })
            }
        }
    }
    Ok(tokens)
}

/// Resolve Java escapes; `None` on a malformed escape.
fn unescape(s: &str) -> Option<String> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next()? {
            'n' => result.push('\n'),
            'r' => result.push('\r'),
            't' => result.push('\t'),
            '\\' => result.push('\\'),
            '"' => result.push('"'),
            '\'' => result.push('\''),
            'u' => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.len() != 4 {
                    return None;
                }
                result.push(char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?);
            }
            _ => return None,
        }
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .unwrap_or_else(|e| panic!("lex failed: {e}"))
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn literals() {
        assert_eq!(
            kinds(r#"5L 3.5 1e300 "a\"b" true"#),
            vec![
                Token::Long(5),
                Token::Double(3.5),
                Token::Double(1e300),
                Token::Str("a\"b".to_string()),
                Token::Bool(true),
            ]
        );
    }

    #[test]
    fn calls_and_keywords() {
        assert_eq!(
            kinds("new VarExpr(env.getValue(\"x\"))"),
            vec![
                Token::New,
                Token::Ident("VarExpr".to_string()),
                Token::LParen,
                Token::Ident("env".to_string()),
                Token::Dot,
                Token::Ident("getValue".to_string()),
                Token::LParen,
                Token::Str("x".to_string()),
                Token::RParen,
                Token::RParen,
            ]
        );
    }

    #[test]
    fn unicode_escape() {
        assert_eq!(kinds(r#""\u0001""#), vec![Token::Str("\u{1}".to_string())]);
    }

    #[test]
    fn rejects_unknown_input() {
        assert_eq!(
            tokenize("5L # 6L"),
            Err(ExecError::Lex {
                offset: 3,
                text: "#".to_string(),
            })
        );
    }

    #[test]
    fn rejects_oversized_long() {
        assert!(tokenize("9223372036854775808L").is_err());
    }
}
