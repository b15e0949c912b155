use crate::ast::{Block, Statement};
use crate::interpreter::lexer::TokenKind;
use crate::interpreter::parser::core::{Parser, Precedence};

impl Parser<'_> {
    /// Parses one statement starting at the current token.
    ///
    /// Grammar:
    /// ```text
    /// statement := "let" Ident "=" expression ";"?
    ///            | "return" expression ";"?
    ///            | expression ";"?
    /// ```
    ///
    /// The trailing semicolon is optional in every form, which is what lets
    /// a REPL line like `5 + 5` work. Returns `None` when the statement
    /// cannot be built; the errors explaining what went wrong have already
    /// been recorded.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind() {
            TokenKind::Let => {
                if !self.expect_peek(TokenKind::Ident) {
                    return None;
                }
                let name = self.current.literal().to_string();
                if !self.expect_peek(TokenKind::Assign) {
                    return None;
                }
                self.advance();
                let value = self.parse_expression(Precedence::Lowest)?;
                self.eat_optional_semicolon();
                Some(Statement::Let { name, value })
            }
            TokenKind::Return => {
                self.advance();
                let value = self.parse_expression(Precedence::Lowest)?;
                self.eat_optional_semicolon();
                Some(Statement::Return(value))
            }
            _ => {
                let expr = self.parse_expression(Precedence::Lowest)?;
                self.eat_optional_semicolon();
                Some(Statement::Expr(expr))
            }
        }
    }

    /// Parses a `{ ... }` block. The current token is the opening brace;
    /// on return the current token is the closing brace (or EOF for an
    /// unterminated block).
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> Block {
        self.advance();
        let mut statements = Vec::new();
        while self.current.kind() != TokenKind::RBrace && self.current.kind() != TokenKind::Eof {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }
        Block { statements }
    }

    fn eat_optional_semicolon(&mut self) {
        if self.next.kind() == TokenKind::Semicolon {
            self.advance();
        }
    }
}
