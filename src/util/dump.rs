use std::fmt;

use crate::{
    ast::{Expr, Program},
    interpreter::lexer::{Token, TokenKind},
};

/// Renders a token list, one token per line, as `line kind text`.
///
/// # Example
/// ```
/// use frosting::{interpreter::lexer::lex, util::dump};
///
/// let lexed = lex("print \"hi\"\n");
/// assert_eq!(dump::tokens(&lexed.tokens),
///            "   1 Print print\n   1 String \"hi\"\n   1 NewLine\n");
/// ```
#[must_use]
pub fn tokens(tokens: &[Token<'_>]) -> String {
    TokenDump(tokens).to_string()
}

/// Renders the expression tree of a program: the top-level statements, then
/// each function with its parameters and body.
///
/// # Example
/// ```
/// use frosting::{
///     interpreter::{lexer::lex, parser::parse},
///     util::dump,
/// };
///
/// let lexed = lex("var x = 1 + 2\n");
/// let parsed = parse(&lexed.tokens);
///
/// assert_eq!(dump::program(&parsed.program),
///            "toplevel:\n  VarSet x\n    Operation + (Math)\n      Integer 1\n      Integer 2\n");
/// ```
#[must_use]
pub fn program(program: &Program<'_>) -> String {
    ProgramDump(program).to_string()
}

struct TokenDump<'a, 'src>(&'a [Token<'src>]);

impl fmt::Display for TokenDump<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.0 {
            match token.kind {
                TokenKind::NewLine => writeln!(f, "{:>4} {:?}", token.line, token.kind)?,
                TokenKind::String => {
                    writeln!(f, "{:>4} {:?} \"{}\"", token.line, token.kind, token.text)?;
                },
                _ => writeln!(f, "{:>4} {:?} {}", token.line, token.kind, token.text)?,
            }
        }
        Ok(())
    }
}

struct ProgramDump<'a, 'src>(&'a Program<'src>);

impl fmt::Display for ProgramDump<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "toplevel:")?;
        for expr in &self.0.expressions {
            write_expr(f, expr, 1)?;
        }

        for function in &self.0.functions {
            let parameters: Vec<_> = function.parameters.iter().map(|p| p.text).collect();
            writeln!(f, "function {}({}):", function.name.text, parameters.join(", "))?;
            for expr in &function.body {
                write_expr(f, expr, 1)?;
            }
        }
        Ok(())
    }
}

fn write_expr(f: &mut fmt::Formatter<'_>, expr: &Expr<'_>, depth: usize) -> fmt::Result {
    let indent = depth * 2;

    match expr {
        Expr::Literal(token) if token.kind == TokenKind::String => {
            writeln!(f, "{:indent$}String \"{}\"", "", token.text)
        },
        Expr::Literal(token) => writeln!(f, "{:indent$}{:?} {}", "", token.kind, token.text),
        Expr::Grouped(inner) => {
            writeln!(f, "{:indent$}Grouped", "")?;
            write_expr(f, inner, depth + 1)
        },
        Expr::Operation { lhs, op, rhs, class, .. } => {
            writeln!(f, "{:indent$}Operation {} ({class:?})", "", op.symbol())?;
            write_expr(f, lhs, depth + 1)?;
            write_expr(f, rhs, depth + 1)
        },
        Expr::VarSet { name, value } => {
            writeln!(f, "{:indent$}VarSet {}", "", name.text)?;
            write_expr(f, value, depth + 1)
        },
        Expr::VarReassign { name, value } => {
            writeln!(f, "{:indent$}VarReassign {}", "", name.text)?;
            write_expr(f, value, depth + 1)
        },
        Expr::FunctionCall { keyword, arguments } => {
            writeln!(f, "{:indent$}Call {}", "", keyword.text)?;
            arguments.iter()
                     .try_for_each(|argument| write_expr(f, argument, depth + 1))
        },
    }
}
