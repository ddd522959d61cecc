use super::{LiteralKind, ParseError, ParseErrorKind, ParseResult, Parser};
use crate::ast::*;
use crate::token::*;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Prec {
    Lowest,

    Term,
    Factor,
}

fn should_parse_binop_in_prec(binop: BinOp, in_prec: Prec) -> bool {
    binop_prec(binop) > in_prec
}

fn binop_prec(binop: BinOp) -> Prec {
    match binop {
        BinOp::Add | BinOp::Sub => Prec::Term,
        BinOp::Mul | BinOp::Div | BinOp::Mod => Prec::Factor,
    }
}

fn binop_from_token(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Add => Some(BinOp::Add),
        TokenKind::Sub => Some(BinOp::Sub),
        TokenKind::Mul => Some(BinOp::Mul),
        TokenKind::Div => Some(BinOp::Div),
        TokenKind::Mod => Some(BinOp::Mod),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses a required expression. A failed parse is reported once and
    /// leaves an [`Expr::Error`] in its place; the enclosing statement carries
    /// on from wherever the expression stopped.
    pub(super) fn parse_expr_or_recover(&mut self) -> Expr {
        match self.parse_expr() {
            Ok(expr) => expr,
            Err(error) => {
                self.report(error);
                Expr::Error
            }
        }
    }

    pub(super) fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_prec(Prec::Lowest)
    }

    fn parse_prec(&mut self, prec: Prec) -> ParseResult<Expr> {
        let mut expr = self.parse_primary()?;

        while let Some(op) = self.peek_bin_op(prec) {
            self.tokens.advance();

            let rhs = self.parse_prec(binop_prec(op))?;
            expr = Expr::binary(op, expr, rhs);
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let token = self.tokens.peek();

        // an operator where an operand should start has nothing on its left
        if let Some(op) = binop_from_token(token.kind) {
            self.tokens.advance();
            return Err(ParseError::new(
                ParseErrorKind::MissingLeftOperand { op },
                token,
            ));
        }

        let literal = match token.kind {
            TokenKind::Keyword(Keyword::True) => Ok(Expr::Bool(true)),
            TokenKind::Keyword(Keyword::False) => Ok(Expr::Bool(false)),

            TokenKind::Integer => token
                .text
                .parse()
                .map(Expr::Int)
                .map_err(|_| invalid_literal(token, LiteralKind::Int)),

            TokenKind::Float => token
                .text
                .parse()
                .map(Expr::Float)
                .map_err(|_| invalid_literal(token, LiteralKind::Float)),

            TokenKind::String => Ok(Expr::String(token.text.clone())),

            TokenKind::Char => {
                let mut chars = token.text.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Ok(Expr::Char(ch)),
                    _ => Err(invalid_literal(token, LiteralKind::Char)),
                }
            }

            found => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedExpression { found },
                    token,
                ))
            }
        };

        // a malformed literal is still consumed
        self.tokens.advance();

        literal
    }

    fn peek_bin_op(&self, prec: Prec) -> Option<BinOp> {
        let op = binop_from_token(self.tokens.peek().kind)?;
        should_parse_binop_in_prec(op, prec).then_some(op)
    }
}

fn invalid_literal(token: &Token, kind: LiteralKind) -> ParseError {
    ParseError::new(
        ParseErrorKind::InvalidLiteral {
            kind,
            text: token.text.clone(),
        },
        token,
    )
}
