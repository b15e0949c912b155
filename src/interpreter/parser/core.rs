use crate::ast::{Expr, Program};
use crate::error::ParseError;
use crate::interpreter::lexer::{Lexer, Token, TokenKind};

/// Binding strength of an operator, lowest first.
///
/// `parse_expression` keeps extending the expression to its left while the
/// upcoming token binds more tightly than the level it was invoked with.
/// This ordering is what turns `5 * 3 + 2` into `((5 * 3) + 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(in crate::interpreter::parser) enum Precedence {
    /// Accepts any expression.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Unary `!` and `-`
    Prefix,
    /// Call arguments, `f(x)`
    Call,
    /// Slice indexing, `xs[i]`
    Index,
}

impl Precedence {
    /// The precedence `kind` has when it appears in infix position.
    /// Kinds that cannot continue an expression sit at [`Lowest`](Self::Lowest).
    pub(in crate::interpreter::parser) fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::EQ | TokenKind::NotEQ => Self::Equals,
            TokenKind::LT | TokenKind::GT => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Slash | TokenKind::Star => Self::Product,
            TokenKind::LParen => Self::Call,
            TokenKind::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

/// Parses the token stream of a [`Lexer`] into a [`Program`].
///
/// Parsing never fails outright: problems are recorded as
/// [`ParseError`]s, the offending statement is dropped, and parsing
/// continues with the next one. Callers must check [`Parser::errors`]
/// before trusting the returned program.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    /// The token currently being parsed.
    pub(in crate::interpreter::parser) current: Token,
    /// One token of lookahead, consulted whenever `current` alone cannot
    /// decide how to continue.
    pub(in crate::interpreter::parser) next: Token,
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `lexer`, priming both lookahead slots.
    #[must_use]
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next_token();
        let next = lexer.next_token();
        Self { lexer, current, next, errors: Vec::new() }
    }

    /// Parses statements until end of input.
    ///
    /// Statements that fail to parse are left out of the program; the
    /// corresponding errors are available from [`Parser::errors`].
    pub fn parse(&mut self) -> Program {
        let mut program = Program::default();
        while self.current.kind() != TokenKind::Eof {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.advance();
        }
        program
    }

    /// The errors collected so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its collected errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses one expression at the given precedence level.
    ///
    /// The Pratt loop: parse a prefix for `current`, then, while the
    /// upcoming token binds tighter than `precedence` (and is not a
    /// statement-ending `;`), fold the expression so far into the infix,
    /// call, or index construct that token introduces.
    pub(in crate::interpreter::parser) fn parse_expression(
        &mut self,
        precedence: Precedence,
    ) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while self.next.kind() != TokenKind::Semicolon
            && precedence < Precedence::of(self.next.kind())
        {
            left = match self.next.kind() {
                TokenKind::LParen => {
                    self.advance();
                    self.parse_call(left)?
                }
                TokenKind::LBracket => {
                    self.advance();
                    self.parse_index(left)?
                }
                kind => match crate::interpreter::parser::expr::infix_op(kind) {
                    Some(op) => {
                        self.advance();
                        self.parse_infix(op, left)?
                    }
                    None => return Some(left),
                },
            };
        }

        Some(left)
    }

    /// Moves both lookahead slots forward by one token.
    pub(in crate::interpreter::parser) fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.next, self.lexer.next_token());
    }

    /// Advances past the upcoming token if it has the wanted kind.
    ///
    /// On a mismatch the parser stays put, records an
    /// [`ParseError::UnexpectedToken`], and returns `false`; the caller is
    /// expected to abandon the construct it was building.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self, want: TokenKind) -> bool {
        if self.next.kind() == want {
            self.advance();
            true
        } else {
            self.errors.push(ParseError::UnexpectedToken { want, got: self.next.kind() });
            false
        }
    }

    /// Records an error for `kind` appearing where an expression must start.
    pub(in crate::interpreter::parser) fn no_prefix_fn(&mut self, found: TokenKind) {
        self.errors.push(ParseError::NoPrefixFn { found });
    }

    /// Records an out-of-range integer literal.
    pub(in crate::interpreter::parser) fn bad_int_literal(&mut self) {
        self.errors.push(ParseError::BadIntLiteral);
    }
}
