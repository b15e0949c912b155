use std::fmt;

/// A parsed mmm program: the ordered statements of the source text.
///
/// The canonical rendering of a program is the concatenation of its
/// statements' renderings, which is what the parser tests compare against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// A statement node.
///
/// mmm has only three statement forms; everything else is an expression.
/// Expression statements exist because it is legal to write
///
/// ```text
/// let foo = 1;
/// foo + 20;
/// ```
///
/// where the second line is an expression evaluated purely for its value.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let` binding: `let <name> = <value>;`.
    Let {
        /// The name being bound.
        name: String,
        /// The bound expression.
        value: Expr,
    },
    /// A `return` statement: `return <value>;`.
    Return(Expr),
    /// A bare expression evaluated for its value.
    Expr(Expr),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return(value) => write!(f, "return {value};"),
            Self::Expr(value) => write!(f, "{value}"),
        }
    }
}

/// A brace-delimited sequence of statements, as used by `if` consequences
/// and function bodies. Renders as the concatenation of its statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A name, e.g. the `foobar` in `let foobar = 5;`.
    Ident(String),
    /// An integer literal.
    Integer(i64),
    /// A boolean literal.
    Bool(bool),
    /// A string literal; the text excludes the quotes.
    Str(String),
    /// A prefix operation, e.g. `-x` or `!ok`.
    Prefix {
        /// The operator.
        op: PrefixOp,
        /// The operand.
        right: Box<Expr>,
    },
    /// A binary operation, e.g. `a + b`.
    Infix {
        /// Left operand.
        left: Box<Expr>,
        /// The operator.
        op: InfixOp,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A conditional expression with an optional `else` block.
    If {
        /// The tested condition.
        condition: Box<Expr>,
        /// Evaluated when the condition is truthy.
        consequence: Block,
        /// Evaluated when the condition is falsy, if present.
        alternative: Option<Block>,
    },
    /// A function literal: `fn(x, y) { ... }`.
    Function {
        /// Parameter names in declaration order.
        params: Vec<String>,
        /// The function body.
        body: Block,
    },
    /// A call: `callee(a, b)`. The callee is any expression, so both
    /// `add(1, 2)` and `fn(x) { x }(1)` are calls.
    Call {
        /// The expression being called.
        callee: Box<Expr>,
        /// Arguments in source order.
        args: Vec<Expr>,
    },
    /// A slice literal: `[a, b, c]`.
    Slice(Vec<Expr>),
    /// An index operation: `left[index]`.
    Index {
        /// The indexed expression.
        left: Box<Expr>,
        /// The index expression.
        index: Box<Expr>,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => write!(f, "{name}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Prefix { op, right } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::If { condition, consequence, alternative } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            }
            Self::Function { params, body } => {
                write!(f, "fn({}) {body}", params.join(", "))
            }
            Self::Call { callee, args } => {
                let args = args.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{callee}({})", args.join(", "))
            }
            Self::Slice(values) => {
                let values = values.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "[{}]", values.join(", "))
            }
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
        }
    }
}

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    /// Logical negation (`!`).
    Bang,
    /// Arithmetic negation (`-`).
    Minus,
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bang => write!(f, "!"),
            Self::Minus => write!(f, "-"),
        }
    }
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Star,
    /// Division (`/`)
    Slash,
    /// Less than (`<`)
    LT,
    /// Greater than (`>`)
    GT,
    /// Equal to (`==`)
    EQ,
    /// Not equal to (`!=`)
    NotEQ,
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::LT => "<",
            Self::GT => ">",
            Self::EQ => "==",
            Self::NotEQ => "!=",
        };
        write!(f, "{operator}")
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, Expr, InfixOp, PrefixOp, Program, Statement};

    #[test]
    fn let_statement_renders_canonically() {
        let program = Program {
            statements: vec![Statement::Let {
                name: "myVar".to_string(),
                value: Expr::Ident("anotherVar".to_string()),
            }],
        };
        assert_eq!(program.to_string(), "let myVar = anotherVar;");
    }

    #[test]
    fn nested_expressions_render_parenthesized() {
        let expr = Expr::Infix {
            left: Box::new(Expr::Prefix {
                op: PrefixOp::Minus,
                right: Box::new(Expr::Integer(1)),
            }),
            op: InfixOp::Star,
            right: Box::new(Expr::Integer(2)),
        };
        assert_eq!(expr.to_string(), "((-1) * 2)");
    }

    #[test]
    fn index_and_call_renderings() {
        let index = Expr::Index {
            left: Box::new(Expr::Slice(vec![Expr::Integer(1), Expr::Integer(2)])),
            index: Box::new(Expr::Integer(0)),
        };
        assert_eq!(index.to_string(), "([1, 2][0])");

        let call = Expr::Call {
            callee: Box::new(Expr::Ident("add".to_string())),
            args: vec![Expr::Integer(1), index],
        };
        assert_eq!(call.to_string(), "add(1, ([1, 2][0]))");
    }

    #[test]
    fn function_rendering_includes_params_and_body() {
        let function = Expr::Function {
            params: vec!["x".to_string(), "y".to_string()],
            body: Block {
                statements: vec![Statement::Return(Expr::Infix {
                    left: Box::new(Expr::Ident("x".to_string())),
                    op: InfixOp::Plus,
                    right: Box::new(Expr::Ident("y".to_string())),
                })],
            },
        };
        assert_eq!(function.to_string(), "fn(x, y) return (x + y);");
    }
}
