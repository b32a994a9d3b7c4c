use crate::lexer::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed S-expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    /// Leaf atom, keeping the token it was read from
    Atom(Token),
    /// Parenthesized list of child expressions
    List(Vec<Expression>),
}

impl Expression {
    /// Returns true for an atom
    pub fn is_atom(&self) -> bool {
        matches!(self, Expression::Atom(_))
    }

    /// Returns true for a list
    pub fn is_list(&self) -> bool {
        matches!(self, Expression::List(_))
    }

    /// The atom's token, if this is an atom
    pub fn as_atom(&self) -> Option<&Token> {
        match self {
            Expression::Atom(token) => Some(token),
            Expression::List(_) => None,
        }
    }

    /// The list's children, if this is a list
    pub fn as_list(&self) -> Option<&[Expression]> {
        match self {
            Expression::List(items) => Some(items),
            Expression::Atom(_) => None,
        }
    }

    /// Number of children for a list, 0 for an atom
    pub fn len(&self) -> usize {
        self.as_list().map_or(0, <[Expression]>::len)
    }

    /// True for atoms and for `()`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Structural equality that ignores token positions
    pub fn same_shape(&self, other: &Expression) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Expression::Atom(a), Expression::Atom(b)) => {
                    if a.text != b.text {
                        return false;
                    }
                }
                (Expression::List(a), Expression::List(b)) if a.len() == b.len() => {
                    pending.extend(a.iter().zip(b));
                }
                _ => return false,
            }
        }
        true
    }
}

// Nested lists are torn down with a work list instead of recursive drop glue,
// so arbitrarily deep trees can be dropped.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = match self {
            Expression::List(items) => std::mem::take(items),
            Expression::Atom(_) => return,
        };
        while let Some(mut expr) = pending.pop() {
            if let Expression::List(items) = &mut expr {
                pending.append(items);
            }
        }
    }
}

enum PrintStep<'a> {
    Expr(&'a Expression),
    Space,
    Close,
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut steps = vec![PrintStep::Expr(self)];
        while let Some(step) = steps.pop() {
            match step {
                PrintStep::Expr(Expression::Atom(token)) => write!(f, "{}", token)?,
                PrintStep::Expr(Expression::List(items)) => {
                    write!(f, "(")?;
                    steps.push(PrintStep::Close);
                    for (i, item) in items.iter().enumerate().rev() {
                        steps.push(PrintStep::Expr(item));
                        if i > 0 {
                            steps.push(PrintStep::Space);
                        }
                    }
                }
                PrintStep::Space => write!(f, " ")?,
                PrintStep::Close => write!(f, ")")?,
            }
        }
        Ok(())
    }
}
