//! # Expression Evaluator
//!
//! Restricted arithmetic-expression evaluator for operator-typed quantities.
//!
//! Delivery quantities are entered as arithmetic ("three trucks of 50 plus
//! two of 30" becomes `50 + 30*2`), so the quantity field accepts a tiny
//! expression language instead of a bare number.
//!
//! ## Security Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     THIS IS NOT A SCRIPT ENGINE                         │
//! │                                                                         │
//! │  Raw input ──► character whitelist [0-9+-*/().\s]                      │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │                lexer ──► recursive-descent parser ──► typed AST        │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │                Decimal evaluation (no NaN, no infinity possible)       │
//! │                                                                         │
//! │  No identifiers, no function calls, no access to program scope.        │
//! │  "50; alert(1)" and "a+1" fail at the whitelist, before parsing.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Grammar
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := ('-' | '+') factor | '(' expr ')' | number
//! number := digits ['.' digits]
//! ```
//! Equal-precedence operators evaluate left to right; `*` and `/` bind
//! tighter than `+` and `-`; unary minus is supported.
//!
//! ## Usage
//! ```rust
//! use cartage_core::expr::{evaluate, quantity_or_zero};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(evaluate("50 + 30 * 2").unwrap(), Decimal::from(110));
//! assert_eq!(evaluate("(4-1)*3").unwrap(), Decimal::from(9));
//!
//! // Blank input is "no quantity", not an error
//! assert_eq!(quantity_or_zero("  ").unwrap(), Decimal::ZERO);
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};
use crate::MAX_EXPRESSION_LEN;

// =============================================================================
// Public Entry Points
// =============================================================================

/// Evaluates a restricted arithmetic expression to a decimal value.
///
/// ## Errors
/// Returns [`CoreError::InvalidExpression`] for:
/// - empty input (use [`quantity_or_zero`] when blank means zero)
/// - any character outside `[0-9 + - * / ( ) . whitespace]`
/// - malformed syntax (`"5 + * 2"`, `"(1"`)
/// - division by zero
///
/// The result is always a finite decimal; it may be negative or fractional.
/// Rejecting negative *quantities* is the pricing layer's business rule,
/// not the evaluator's.
pub fn evaluate(text: &str) -> CoreResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::invalid_expression("empty expression"));
    }
    if trimmed.len() > MAX_EXPRESSION_LEN {
        return Err(CoreError::invalid_expression("expression too long"));
    }

    // Hard security boundary: reject anything outside the arithmetic
    // character class before the parser ever sees it.
    if let Some(bad) = trimmed
        .chars()
        .find(|c| !matches!(c, '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')' | '.') && !c.is_whitespace())
    {
        return Err(CoreError::invalid_expression(format!(
            "disallowed character '{bad}'"
        )));
    }

    let tokens = tokenize(trimmed)?;
    let mut parser = Parser::new(&tokens);
    let ast = parser.parse_expr()?;
    parser.expect_end()?;
    ast.eval()
}

/// Evaluates a quantity field where blank input means "no quantity".
///
/// Empty or whitespace-only text yields `0` without touching the error
/// path; anything else goes through [`evaluate`].
pub fn quantity_or_zero(text: &str) -> CoreResult<Decimal> {
    if text.trim().is_empty() {
        return Ok(Decimal::ZERO);
    }
    evaluate(text)
}

// =============================================================================
// Lexer
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(Decimal),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

fn tokenize(text: &str) -> CoreResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
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
                let mut end = start;
                while let Some(&(i, d)) = chars.peek() {
                    if matches!(d, '0'..='9' | '.') {
                        end = i + d.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let literal = &text[start..end];
                let value = Decimal::from_str(literal).map_err(|_| {
                    CoreError::invalid_expression(format!("malformed number '{literal}'"))
                })?;
                tokens.push(Token::Number(value));
            }
            // Unreachable: the whitelist in evaluate() runs first
            other => {
                return Err(CoreError::invalid_expression(format!(
                    "disallowed character '{other}'"
                )));
            }
        }
    }

    Ok(tokens)
}

// =============================================================================
// Abstract Syntax Tree
// =============================================================================

/// A parsed arithmetic expression.
///
/// Producing a typed tree before evaluating removes the code-injection risk
/// class entirely: there is nothing here but numbers and four operators.
#[derive(Debug, Clone, PartialEq)]
enum Expr {
    Number(Decimal),
    Negate(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    fn eval(&self) -> CoreResult<Decimal> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Negate(inner) => Ok(-inner.eval()?),
            Expr::Add(a, b) => Ok(a.eval()? + b.eval()?),
            Expr::Sub(a, b) => Ok(a.eval()? - b.eval()?),
            Expr::Mul(a, b) => Ok(a.eval()? * b.eval()?),
            Expr::Div(a, b) => {
                let divisor = b.eval()?;
                a.eval()?
                    .checked_div(divisor)
                    .ok_or_else(|| CoreError::invalid_expression("division by zero"))
            }
        }
    }
}

// =============================================================================
// Parser
// =============================================================================

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// expr := term (('+' | '-') term)*
    fn parse_expr(&mut self) -> CoreResult<Expr> {
        let mut lhs = self.parse_term()?;

        while let Some(op) = self.peek() {
            match op {
                Token::Plus => {
                    self.advance();
                    let rhs = self.parse_term()?;
                    lhs = Expr::Add(Box::new(lhs), Box::new(rhs));
                }
                Token::Minus => {
                    self.advance();
                    let rhs = self.parse_term()?;
                    lhs = Expr::Sub(Box::new(lhs), Box::new(rhs));
                }
                _ => break,
            }
        }

        Ok(lhs)
    }

    /// term := factor (('*' | '/') factor)*
    fn parse_term(&mut self) -> CoreResult<Expr> {
        let mut lhs = self.parse_factor()?;

        while let Some(op) = self.peek() {
            match op {
                Token::Star => {
                    self.advance();
                    let rhs = self.parse_factor()?;
                    lhs = Expr::Mul(Box::new(lhs), Box::new(rhs));
                }
                Token::Slash => {
                    self.advance();
                    let rhs = self.parse_factor()?;
                    lhs = Expr::Div(Box::new(lhs), Box::new(rhs));
                }
                _ => break,
            }
        }

        Ok(lhs)
    }

    /// factor := '-' factor | '(' expr ')' | number
    fn parse_factor(&mut self) -> CoreResult<Expr> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(Expr::Number(*n)),
            Some(Token::Minus) => {
                let inner = self.parse_factor()?;
                Ok(Expr::Negate(Box::new(inner)))
            }
            Some(Token::Plus) => {
                // Unary plus: tolerated, no-op
                self.parse_factor()
            }
            Some(Token::LParen) => {
                let inner = self.parse_expr()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(CoreError::invalid_expression("expected ')'")),
                }
            }
            Some(token) => Err(CoreError::invalid_expression(format!(
                "unexpected token {token:?}"
            ))),
            None => Err(CoreError::invalid_expression("unexpected end of expression")),
        }
    }

    fn expect_end(&mut self) -> CoreResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(CoreError::invalid_expression(format!(
                "trailing input at token {token:?}"
            ))),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_number() {
        assert_eq!(evaluate("50").unwrap(), dec!(50));
        assert_eq!(evaluate("  12.5 ").unwrap(), dec!(12.5));
        assert_eq!(evaluate("0.5").unwrap(), dec!(0.5));
    }

    #[test]
    fn test_precedence() {
        // Multiplication binds tighter than addition
        assert_eq!(evaluate("50 + 30 * 2").unwrap(), dec!(110));
        assert_eq!(evaluate("2 * 3 + 4").unwrap(), dec!(10));
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(evaluate("(4-1)*3").unwrap(), dec!(9));
        assert_eq!(evaluate("((2))").unwrap(), dec!(2));
        assert_eq!(evaluate("2 * (3 + 4)").unwrap(), dec!(14));
    }

    #[test]
    fn test_left_to_right_at_equal_precedence() {
        assert_eq!(evaluate("10 - 4 - 3").unwrap(), dec!(3));
        assert_eq!(evaluate("24 / 4 / 2").unwrap(), dec!(3));
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(evaluate("-5").unwrap(), dec!(-5));
        assert_eq!(evaluate("-5 + 10").unwrap(), dec!(5));
        assert_eq!(evaluate("3 * -2").unwrap(), dec!(-6));
        assert_eq!(evaluate("--4").unwrap(), dec!(4));
    }

    #[test]
    fn test_division() {
        assert_eq!(evaluate("50 / 4").unwrap(), dec!(12.5));
    }

    #[test]
    fn test_division_by_zero_is_error() {
        assert!(matches!(
            evaluate("1 / 0"),
            Err(CoreError::InvalidExpression { .. })
        ));
        assert!(evaluate("1 / (2 - 2)").is_err());
    }

    #[test]
    fn test_disallowed_characters_rejected() {
        // Classic injection attempts fail at the whitelist
        assert!(evaluate("50; alert(1)").is_err());
        assert!(evaluate("a+1").is_err());
        assert!(evaluate("1 + process").is_err());
    }

    #[test]
    fn test_no_exponent_operator() {
        // No exponents in the grammar: the second '*' has no operand
        assert!(evaluate("2**3").is_err());
    }

    #[test]
    fn test_malformed_syntax_rejected() {
        assert!(evaluate("").is_err());
        assert!(evaluate("5 +").is_err());
        assert!(evaluate("(1").is_err());
        assert!(evaluate("1)").is_err());
        assert!(evaluate("5 + * 2").is_err());
        assert!(evaluate("1.2.3").is_err());
        assert!(evaluate("1 2").is_err());
    }

    #[test]
    fn test_negative_results_are_valid_output() {
        // The evaluator accepts negative results; quantity policy lives in
        // the pricing layer.
        assert_eq!(evaluate("10 - 25").unwrap(), dec!(-15));
    }

    #[test]
    fn test_quantity_or_zero() {
        assert_eq!(quantity_or_zero("").unwrap(), Decimal::ZERO);
        assert_eq!(quantity_or_zero("   ").unwrap(), Decimal::ZERO);
        assert_eq!(quantity_or_zero("50+30*2").unwrap(), dec!(110));
        assert!(quantity_or_zero("oops").is_err());
    }
}
