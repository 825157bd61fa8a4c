use std::collections::HashMap;

use crate::interpreter::lexer::{Token, TokenKind};

/// Whether an operation produces a truth value or a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorClass {
    /// Comparisons: the result is `0` or `1`.
    Bool,
    /// Arithmetic: the result is the computed integer.
    Math,
}

/// Binary operators, in the order the scanner knows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `==`
    Equal,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Maps an operator token to its operator, or `None` for any other token.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
                 TokenKind::EqualEqual => Self::Equal,
                 TokenKind::Less => Self::Less,
                 TokenKind::LessEqual => Self::LessEqual,
                 TokenKind::Greater => Self::Greater,
                 TokenKind::GreaterEqual => Self::GreaterEqual,
                 TokenKind::Plus => Self::Add,
                 TokenKind::Minus => Self::Sub,
                 TokenKind::Star => Self::Mul,
                 TokenKind::Slash => Self::Div,
                 _ => return None,
             })
    }

    /// Comparison operators are `Bool`, arithmetic operators are `Math`.
    #[must_use]
    pub const fn class(self) -> OperatorClass {
        match self {
            Self::Equal | Self::Less | Self::LessEqual | Self::Greater | Self::GreaterEqual => {
                OperatorClass::Bool
            },
            Self::Add | Self::Sub | Self::Mul | Self::Div => OperatorClass::Math,
        }
    }

    /// The operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

/// An abstract syntax tree (AST) node.
///
/// Leaves borrow their tokens from the source; every child is owned by
/// exactly one parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr<'src> {
    /// An integer, a string or a bare identifier reference. Keyword tokens
    /// also appear here when they are passed as call arguments.
    Literal(Token<'src>),
    /// A parenthesized expression. Transparent to evaluation.
    Grouped(Box<Self>),
    /// A comparison or arithmetic operation.
    Operation {
        /// Left operand.
        lhs:   Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        rhs:   Box<Self>,
        /// Derived from `op`.
        class: OperatorClass,
        /// Line number of the operator.
        line:  usize,
        /// Nesting of this operation, see [`Expr::nesting`].
        depth: usize,
    },
    /// `var name = value`: creates the variable or overwrites it.
    VarSet {
        /// The variable name.
        name:  Token<'src>,
        /// The value expression.
        value: Box<Self>,
    },
    /// `name = value`: the variable must already exist.
    VarReassign {
        /// The variable name.
        name:  Token<'src>,
        /// The value expression.
        value: Box<Self>,
    },
    /// A keyword followed by its arguments, such as `print "hi" x`.
    FunctionCall {
        /// The keyword token that opened the call.
        keyword:   Token<'src>,
        /// Arguments in source order.
        arguments: Vec<Self>,
    },
}

impl<'src> Expr<'src> {
    /// Builds an operation, deriving its class from the operator and its
    /// nesting from the operands.
    #[must_use]
    pub fn operation(lhs: Self, op: BinaryOperator, rhs: Self, line: usize) -> Self {
        let depth = lhs.nesting().max(rhs.nesting()) + 1;
        Self::Operation { lhs: Box::new(lhs),
                          op,
                          rhs: Box::new(rhs),
                          class: op.class(),
                          line,
                          depth }
    }

    /// Wraps an expression in a group.
    #[must_use]
    pub fn grouped(inner: Self) -> Self {
        Self::Grouped(Box::new(inner))
    }

    /// Strips any number of enclosing groups.
    #[must_use]
    pub fn unwrap_groups(&self) -> &Self {
        let mut expr = self;
        while let Self::Grouped(inner) = expr {
            expr = inner;
        }
        expr
    }

    /// Number of groups and operations on the longest path from this
    /// expression down to a leaf. Reducing the expression recurses this deep.
    ///
    /// Runs in time proportional to the enclosing groups only: operations
    /// carry their own nesting.
    ///
    /// # Example
    /// ```
    /// use frosting::{
    ///     ast::Expr,
    ///     interpreter::{lexer::lex, parser::parse},
    /// };
    ///
    /// let lexed = lex("print ((1 + 2) + 3)\n");
    /// let parsed = parse(&lexed.tokens);
    /// let Expr::FunctionCall { arguments, .. } = &parsed.program.expressions[0] else {
    ///     unreachable!();
    /// };
    ///
    /// assert_eq!(arguments[0].nesting(), 4);
    /// ```
    #[must_use]
    pub fn nesting(&self) -> usize {
        let mut groups = 0;
        let mut expr = self;
        while let Self::Grouped(inner) = expr {
            groups += 1;
            expr = inner;
        }

        match expr {
            Self::Operation { depth, .. } => groups + depth,
            _ => groups,
        }
    }

    /// Best-effort source line of the expression.
    #[must_use]
    pub fn line(&self) -> usize {
        let mut expr = self;
        loop {
            match expr {
                Self::Grouped(inner) => expr = inner,
                Self::Literal(token) => return token.line,
                Self::Operation { line, .. } => return *line,
                Self::VarSet { name, .. } | Self::VarReassign { name, .. } => return name.line,
                Self::FunctionCall { keyword, .. } => return keyword.line,
            }
        }
    }
}

/// A user function defined with `func name params... \n body \n end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function<'src> {
    /// The function name.
    pub name:       Token<'src>,
    /// Parameter names in declaration order.
    pub parameters: Vec<Token<'src>>,
    /// The statements of the body.
    pub body:       Vec<Expr<'src>>,
}

/// The output of the builder: the top-level statements and the function
/// table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program<'src> {
    /// Statements outside of any function, in source order.
    pub expressions: Vec<Expr<'src>>,
    /// Function definitions in source order.
    pub functions:   Vec<Function<'src>>,
    index:           HashMap<&'src str, usize>,
}

impl<'src> Program<'src> {
    /// Looks up a function by exact name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&Function<'src>> {
        self.index.get(name).map(|&i| &self.functions[i])
    }

    /// Adds a function to the table. Returns `false` and leaves the table
    /// unchanged when the name is taken.
    pub fn define(&mut self, function: Function<'src>) -> bool {
        if self.index.contains_key(function.name.text) {
            return false;
        }
        self.index.insert(function.name.text, self.functions.len());
        self.functions.push(function);
        true
    }
}
