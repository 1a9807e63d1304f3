//! Restricted arithmetic evaluator behind the calculator capability.
//!
//! The grammar covers `+ - * /`, unary sign and parentheses over f64 —
//! nothing else tokenizes, so nothing resembling code can execute. Input
//! is first filtered through a character allow-list; whatever survives
//! must parse completely or the evaluation fails.

use thiserror::Error;

/// Uniform failure for the calculator surface. Malformed input,
/// unsupported constructs and division by zero are deliberately
/// indistinguishable to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("calc_error")]
pub struct CalcError;

/// Strip every character outside the arithmetic allow-list. This filters
/// rather than validates: disallowed characters vanish silently.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || "+-*/(). ".contains(*c))
        .collect()
}

/// Sanitize and evaluate an arithmetic expression.
pub fn evaluate(raw: &str) -> Result<f64, CalcError> {
    let expr = sanitize(raw);
    if expr.trim().is_empty() {
        return Err(CalcError);
    }

    let tokens = tokenize(&expr)?;
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expression()?;
    // Trailing tokens mean the input was not a single expression.
    if parser.pos != parser.tokens.len() {
        return Err(CalcError);
    }
    if !value.is_finite() {
        return Err(CalcError);
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

fn tokenize(expr: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            ' ' => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                // Rejects malformed literals like `1.2.3` or a bare `.`
                let number: f64 = literal.parse().map_err(|_| CalcError)?;
                tokens.push(Token::Number(number));
            }
            _ => return Err(CalcError),
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<f64, CalcError> {
        let mut acc = self.term()?;
        while let Some(token) = self.peek() {
            match token {
                Token::Plus => {
                    self.pos += 1;
                    acc += self.term()?;
                }
                Token::Minus => {
                    self.pos += 1;
                    acc -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    // term := unary (('*' | '/') unary)*
    fn term(&mut self) -> Result<f64, CalcError> {
        let mut acc = self.unary()?;
        while let Some(token) = self.peek() {
            match token {
                Token::Star => {
                    self.pos += 1;
                    acc *= self.unary()?;
                }
                Token::Slash => {
                    self.pos += 1;
                    let rhs = self.unary()?;
                    if rhs == 0.0 {
                        return Err(CalcError);
                    }
                    acc /= rhs;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    // unary := ('+' | '-') unary | primary
    fn unary(&mut self) -> Result<f64, CalcError> {
        match self.peek() {
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(-self.unary()?)
            }
            _ => self.primary(),
        }
    }

    // primary := number | '(' expression ')'
    fn primary(&mut self) -> Result<f64, CalcError> {
        match self.next() {
            Some(Token::Number(number)) => Ok(number),
            Some(Token::LParen) => {
                let inner = self.expression()?;
                match self.next() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(CalcError),
                }
            }
            _ => Err(CalcError),
        }
    }
}
