use crate::ast::{Expr, InfixOp, PrefixOp};
use crate::interpreter::lexer::TokenKind;
use crate::interpreter::parser::core::{Parser, Precedence};

impl Parser<'_> {
    /// Dispatches on the current token to the expression form it can start.
    ///
    /// This is the prefix half of the Pratt parser: literals, identifiers,
    /// unary operators, grouped expressions, `if`, function literals, and
    /// slice literals all begin here. A token with no rule records a
    /// [`NoPrefixFn`](crate::error::ParseError::NoPrefixFn) error.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> Option<Expr> {
        match self.current.kind() {
            TokenKind::Ident => Some(Expr::Ident(self.current.literal().to_string())),
            TokenKind::Int => match self.current.literal().parse::<i64>() {
                Ok(value) => Some(Expr::Integer(value)),
                Err(_) => {
                    self.bad_int_literal();
                    None
                }
            },
            TokenKind::Bool => Some(Expr::Bool(self.current.literal() == "true")),
            TokenKind::String => Some(Expr::Str(self.current.literal().to_string())),
            TokenKind::Bang => self.parse_prefix_op(PrefixOp::Bang),
            TokenKind::Minus => self.parse_prefix_op(PrefixOp::Minus),
            TokenKind::LParen => self.parse_group(),
            TokenKind::If => self.parse_if(),
            TokenKind::Fn => self.parse_function(),
            TokenKind::LBracket => {
                Some(Expr::Slice(self.parse_expression_list(TokenKind::RBracket)?))
            }
            found => {
                self.no_prefix_fn(found);
                None
            }
        }
    }

    fn parse_prefix_op(&mut self, op: PrefixOp) -> Option<Expr> {
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix { op, right: Box::new(right) })
    }

    /// Grammar: `group := "(" expression ")"`. The parentheses only steer
    /// precedence; no node is built for them.
    fn parse_group(&mut self) -> Option<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    /// Grammar: `if := "if" "(" expression ")" block ("else" block)?`.
    fn parse_if(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block();

        let alternative = if self.next.kind() == TokenKind::Else {
            self.advance();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::If { condition: Box::new(condition), consequence, alternative })
    }

    /// Grammar: `function := "fn" "(" params ")" block`.
    fn parse_function(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let params = self.parse_fn_params()?;
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        Some(Expr::Function { params, body: self.parse_block() })
    }

    /// Grammar: `params := "" | Ident ("," Ident)*`. The current token is
    /// the opening parenthesis; the closing one is consumed.
    fn parse_fn_params(&mut self) -> Option<Vec<String>> {
        let mut params = Vec::new();
        if self.next.kind() == TokenKind::RParen {
            self.advance();
            return Some(params);
        }

        self.advance();
        params.push(self.current.literal().to_string());
        while self.next.kind() == TokenKind::Comma {
            self.advance();
            self.advance();
            params.push(self.current.literal().to_string());
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(params)
    }

    /// Builds the infix node for the operator sitting at the current token,
    /// with `left` as its finished left operand. The right operand is
    /// parsed at the operator's own precedence, which is what makes the
    /// binary operators left-associative.
    pub(in crate::interpreter::parser) fn parse_infix(&mut self, op: InfixOp, left: Expr) -> Option<Expr> {
        let precedence = Precedence::of(self.current.kind());
        self.advance();
        let right = self.parse_expression(precedence)?;
        Some(Expr::Infix { left: Box::new(left), op, right: Box::new(right) })
    }

    /// A call is parsed like an infix operator whose "operator" is the
    /// opening parenthesis, e.g. `blah(1, 2, 3)`. The current token is that
    /// parenthesis.
    pub(in crate::interpreter::parser) fn parse_call(&mut self, callee: Expr) -> Option<Expr> {
        let args = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expr::Call { callee: Box::new(callee), args })
    }

    /// Indexing is parsed like an infix operator whose "operator" is the
    /// opening bracket, e.g. `blah[1]`. The current token is that bracket.
    pub(in crate::interpreter::parser) fn parse_index(&mut self, left: Expr) -> Option<Expr> {
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }
        Some(Expr::Index { left: Box::new(left), index: Box::new(index) })
    }

    /// Parses a comma-separated expression list terminated by `end` — the
    /// closing parenthesis for calls, the closing bracket for slices. An
    /// immediately encountered `end` produces an empty list, so `f()` and
    /// `[]` both work.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        if self.next.kind() == end {
            self.advance();
            return Some(Vec::new());
        }

        self.advance();
        let mut values = vec![self.parse_expression(Precedence::Lowest)?];
        while self.next.kind() == TokenKind::Comma {
            self.advance();
            self.advance();
            values.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }
        Some(values)
    }
}

/// The binary operator `kind` stands for in infix position, if any.
pub(in crate::interpreter::parser) fn infix_op(kind: TokenKind) -> Option<InfixOp> {
    match kind {
        TokenKind::Plus => Some(InfixOp::Plus),
        TokenKind::Minus => Some(InfixOp::Minus),
        TokenKind::Star => Some(InfixOp::Star),
        TokenKind::Slash => Some(InfixOp::Slash),
        TokenKind::LT => Some(InfixOp::LT),
        TokenKind::GT => Some(InfixOp::GT),
        TokenKind::EQ => Some(InfixOp::EQ),
        TokenKind::NotEQ => Some(InfixOp::NotEQ),
        _ => None,
    }
}
