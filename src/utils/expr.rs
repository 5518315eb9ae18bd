//! Restricted arithmetic evaluator
//!
//! Accepts numbers, `+ - * / // % **`, parentheses, the constant `pi` and the
//! one-argument functions `sin`, `cos`, `tan`, `sqrt`. Any other name is
//! rejected at parse time, so nothing outside this grammar can run.

use crate::error::ExprError;

/// Deepest nesting of parentheses, calls and signs accepted
const MAX_DEPTH: usize = 100;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    FloorDiv,
    Percent,
    Pow,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>, ExprError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' => i += 1,
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ExprError::UnexpectedChar(c))?;
                tokens.push(Token::Num(value));
            }
            'a'..='z' | 'A'..='Z' | '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push(Token::Ident(chars[start..i].iter().collect()));
            }
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' if chars.get(i + 1) == Some(&'*') => {
                tokens.push(Token::Pow);
                i += 2;
            }
            '*' => {
                tokens.push(Token::Star);
                i += 1;
            }
            '/' if chars.get(i + 1) == Some(&'/') => {
                tokens.push(Token::FloorDiv);
                i += 2;
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '%' => {
                tokens.push(Token::Percent);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            other => return Err(ExprError::UnexpectedChar(other)),
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn expect(&mut self, wanted: Token) -> Result<(), ExprError> {
        match self.next() {
            Some(t) if t == wanted => Ok(()),
            Some(_) => Err(ExprError::Trailing),
            None => Err(ExprError::UnexpectedEnd),
        }
    }

    // expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<f64, ExprError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    // term := unary (('*' | '/' | '//' | '%') unary)*
    fn term(&mut self) -> Result<f64, ExprError> {
        let mut value = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => Token::Star,
                Some(Token::Slash) => Token::Slash,
                Some(Token::FloorDiv) => Token::FloorDiv,
                Some(Token::Percent) => Token::Percent,
                _ => return Ok(value),
            };
            self.pos += 1;
            let rhs = self.unary()?;
            value = match op {
                Token::Star => value * rhs,
                _ if rhs == 0.0 => return Err(ExprError::DivisionByZero),
                Token::Slash => value / rhs,
                Token::FloorDiv => (value / rhs).floor(),
                // Result takes the sign of the divisor
                _ => value - rhs * (value / rhs).floor(),
            };
        }
    }

    /// Every recursive path (parentheses, function calls, sign runs,
    /// exponents) passes through here, so this bounds the stack depth
    fn unary(&mut self) -> Result<f64, ExprError> {
        if self.depth >= MAX_DEPTH {
            return Err(ExprError::TooDeep);
        }
        self.depth += 1;
        let value = self.signed();
        self.depth -= 1;
        value
    }

    // unary := ('+' | '-') unary | power
    fn signed(&mut self) -> Result<f64, ExprError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(-self.unary()?)
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    // power := atom ('**' unary)?
    fn power(&mut self) -> Result<f64, ExprError> {
        let base = self.atom()?;
        if matches!(self.peek(), Some(Token::Pow)) {
            self.pos += 1;
            let exponent = self.unary()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<f64, ExprError> {
        match self.next() {
            Some(Token::Num(n)) => Ok(n),
            Some(Token::LParen) => {
                let value = self.expr()?;
                self.expect(Token::RParen)?;
                Ok(value)
            }
            Some(Token::Ident(name)) => self.name(name),
            Some(_) => Err(ExprError::Trailing),
            None => Err(ExprError::UnexpectedEnd),
        }
    }

    fn name(&mut self, name: String) -> Result<f64, ExprError> {
        let func: fn(f64) -> f64 = match name.as_str() {
            "pi" => return Ok(std::f64::consts::PI),
            "sin" => f64::sin,
            "cos" => f64::cos,
            "tan" => f64::tan,
            "sqrt" => {
                self.expect(Token::LParen)?;
                let arg = self.expr()?;
                self.expect(Token::RParen)?;
                if arg < 0.0 {
                    return Err(ExprError::Domain);
                }
                return Ok(arg.sqrt());
            }
            _ => return Err(ExprError::UnknownName(name)),
        };
        self.expect(Token::LParen)?;
        let arg = self.expr()?;
        self.expect(Token::RParen)?;
        Ok(func(arg))
    }
}

/// Evaluate an arithmetic expression
pub(crate) fn evaluate(input: &str) -> Result<f64, ExprError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ExprError::UnexpectedEnd);
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;
    if parser.pos != parser.tokens.len() {
        return Err(ExprError::Trailing);
    }
    if !value.is_finite() {
        return Err(ExprError::Domain);
    }
    Ok(value)
}

/// Integral results print without a fractional part
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn precedence_and_parentheses() {
        assert_eq!(evaluate("2 + 2").unwrap(), 4.0);
        assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
        assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
        assert_eq!(evaluate("10 / 4").unwrap(), 2.5);
    }

    #[test]
    fn power_binds_tighter_than_unary_minus() {
        assert_eq!(evaluate("-2 ** 2").unwrap(), -4.0);
        assert_eq!(evaluate("2 ** 3 ** 2").unwrap(), 512.0);
        assert_eq!(evaluate("2 ** -1").unwrap(), 0.5);
    }

    #[test]
    fn floor_division_and_modulo_follow_divisor_sign() {
        assert_eq!(evaluate("7 // 2").unwrap(), 3.0);
        assert_eq!(evaluate("-7 // 2").unwrap(), -4.0);
        assert_eq!(evaluate("7 % 3").unwrap(), 1.0);
        assert_eq!(evaluate("-7 % 3").unwrap(), 2.0);
    }

    #[test]
    fn allowed_functions() {
        assert_eq!(evaluate("sqrt(16)").unwrap(), 4.0);
        assert!((evaluate("sin(pi / 2)").unwrap() - 1.0).abs() < 1e-12);
        assert!((evaluate("cos(0)").unwrap() - 1.0).abs() < 1e-12);
        assert!(evaluate("tan(0)").unwrap().abs() < 1e-12);
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            evaluate("import os"),
            Err(ExprError::UnknownName("import".to_string()))
        );
        assert!(matches!(evaluate("exp(1)"), Err(ExprError::UnknownName(_))));
        assert!(evaluate("__import__('os')").is_err());
        assert!(matches!(
            evaluate("__import__(1)"),
            Err(ExprError::UnknownName(_))
        ));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(evaluate(""), Err(ExprError::UnexpectedEnd));
        assert_eq!(evaluate("2 +"), Err(ExprError::UnexpectedEnd));
        assert_eq!(evaluate("(2 + 3"), Err(ExprError::UnexpectedEnd));
        assert_eq!(evaluate("2 3"), Err(ExprError::Trailing));
        assert_eq!(evaluate("2 ; 3"), Err(ExprError::UnexpectedChar(';')));
        assert_eq!(evaluate("1..2"), Err(ExprError::UnexpectedChar('1')));
    }

    #[test]
    fn deep_nesting_is_rejected_not_overflowed() {
        let nested = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        assert_eq!(evaluate(&nested), Err(ExprError::TooDeep));
        assert_eq!(evaluate(&"(".repeat(10_000)), Err(ExprError::TooDeep));
        assert_eq!(evaluate(&format!("{}1", "-".repeat(10_000))), Err(ExprError::TooDeep));
        assert_eq!(evaluate(&"2 ** ".repeat(10_000)), Err(ExprError::TooDeep));

        let shallow = format!("{}1{}", "(".repeat(50), ")".repeat(50));
        assert_eq!(evaluate(&shallow).unwrap(), 1.0);
        assert_eq!(evaluate(&format!("sqrt({}16{})", "(".repeat(40), ")".repeat(40))).unwrap(), 4.0);
    }

    #[test]
    fn arithmetic_errors() {
        assert_eq!(evaluate("1 / 0"), Err(ExprError::DivisionByZero));
        assert_eq!(evaluate("5 % 0"), Err(ExprError::DivisionByZero));
        assert_eq!(evaluate("sqrt(-1)"), Err(ExprError::Domain));
        assert_eq!(evaluate("10 ** 400"), Err(ExprError::Domain));
    }

    #[test]
    fn format_number_drops_integral_fraction() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(2.5), "2.5");
    }
}
