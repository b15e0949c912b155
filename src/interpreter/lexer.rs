use logos::Logos;

/// The kind of a lexical token in mmm source text.
///
/// This is the closed set of token kinds the parser dispatches on. Keywords
/// are resolved here rather than in a separate lookup pass: the fixed
/// `#[token]` rows take priority over the identifier regex, so `let` becomes
/// [`TokenKind::Let`] while `letter` stays an [`TokenKind::Ident`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `<`
    #[token("<")]
    LT,
    /// `>`
    #[token(">")]
    GT,
    /// `==`
    #[token("==")]
    EQ,
    /// `!=`
    #[token("!=")]
    NotEQ,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `fn`
    #[token("fn")]
    Fn,
    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `true` or `false`; the literal tells them apart.
    #[token("true")]
    #[token("false")]
    Bool,
    /// Identifiers are runs of ASCII letters and underscores. Digits are not
    /// part of an identifier, so `foo1` lexes as `foo` followed by `1`.
    #[regex(r"[a-zA-Z_]+")]
    Ident,
    /// Integer literals; base-10 digit runs.
    #[regex(r"[0-9]+")]
    Int,
    /// String literals. No escape sequences are recognized, and the closing
    /// quote is optional so an unterminated string runs to end of input.
    #[regex(r#""[^"]*"?"#)]
    String,

    /// Any input the rows above reject, one token per offending slice.
    #[regex(r"[ \t\n\r]+", logos::skip)]
    #[error]
    Illegal,
    /// Synthesized by [`Lexer::next_token`] once the input is exhausted;
    /// never produced by the logos machinery itself.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Illegal => "Illegal",
            Self::Eof => "EOF",
            Self::Ident => "Ident",
            Self::Int => "Int",
            Self::Assign => "Assign",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Star => "Star",
            Self::Slash => "Slash",
            Self::Comma => "Comma",
            Self::Semicolon => "Semicolon",
            Self::LParen => "LParen",
            Self::RParen => "RParen",
            Self::LBrace => "LBrace",
            Self::RBrace => "RBrace",
            Self::LBracket => "LBracket",
            Self::RBracket => "RBracket",
            Self::Fn => "Fn",
            Self::Let => "Let",
            Self::Bang => "Bang",
            Self::LT => "LT",
            Self::GT => "GT",
            Self::If => "If",
            Self::Else => "Else",
            Self::Bool => "Bool",
            Self::EQ => "EQ",
            Self::NotEQ => "NotEQ",
            Self::Return => "Return",
            Self::String => "String",
        };
        write!(f, "{name}")
    }
}

/// A token: its kind plus the exact source text it was read from.
///
/// For string literals the surrounding quotes are stripped, so the literal is
/// the string's content. The EOF token carries an empty literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    literal: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, literal: String) -> Self {
        Self { kind, literal }
    }

    /// The token's kind.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The source text of the token (quotes excluded for strings).
    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }
}

/// Turns mmm source text into a stream of [`Token`]s, one call at a time.
///
/// The lexer never fails: bytes it does not recognize come back as
/// [`TokenKind::Illegal`] tokens, and once the input is exhausted every
/// further call returns an EOF token.
pub struct Lexer<'src> {
    tokens: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { tokens: TokenKind::lexer(source) }
    }

    /// Returns the next token in the input.
    ///
    /// Whitespace is skipped. Safe to call repeatedly beyond end of input;
    /// every call after the last real token yields [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Token {
        let Some(kind) = self.tokens.next() else {
            return Token::new(TokenKind::Eof, String::new());
        };

        let slice = self.tokens.slice();
        let literal = if kind == TokenKind::String {
            let content = slice.strip_prefix('"').unwrap_or(slice);
            content.strip_suffix('"').unwrap_or(content).to_string()
        } else {
            slice.to_string()
        };

        Token::new(kind, literal)
    }
}
