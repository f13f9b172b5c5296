//! Node payloads, operators and node kinds.

use std::fmt;

use smallvec::SmallVec;

use crate::{ExprId, Name};

/// Constant payload of a literal node.
///
/// Floats are stored as raw bits so the whole tree is `Eq + Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(u64),
    Str(Name),
}

impl Literal {
    /// Build a float literal from its value.
    #[inline]
    pub fn float(value: f64) -> Self {
        Literal::Float(value.to_bits())
    }

    /// The float value, if this is a float literal.
    #[inline]
    pub fn as_float(self) -> Option<f64> {
        match self {
            Literal::Float(bits) => Some(f64::from_bits(bits)),
            _ => None,
        }
    }
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    /// Loose equality (`==`).
    Eq,
    /// Loose inequality (`!=`).
    NotEq,
    Add,
    Sub,
}

impl BinaryOp {
    /// Source-level symbol, used when printing trees.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Add => "+",
            Self::Sub => "-",
        }
    }

    pub const fn node_kind(self) -> NodeKind {
        match self {
            Self::Eq => NodeKind::Equals,
            Self::NotEq => NodeKind::NotEquals,
            Self::Add => NodeKind::Add,
            Self::Sub => NodeKind::Sub,
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Arithmetic negation (`-`).
    Neg,
    /// Logical not (`!`).
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
        }
    }

    pub const fn node_kind(self) -> NodeKind {
        match self {
            Self::Neg => NodeKind::UnaryMinus,
            Self::Not => NodeKind::Not,
        }
    }
}

/// Node variant with its payload and operand ids.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Literal(Literal),
    /// Variable read (`$name`).
    Var(Name),
    /// Assignment to a variable; evaluates to the assigned value.
    Assign { target: Name, value: ExprId },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Unary { op: UnaryOp, operand: ExprId },
}

impl ExprKind {
    pub const fn node_kind(&self) -> NodeKind {
        match self {
            ExprKind::Literal(_) => NodeKind::Literal,
            ExprKind::Var(_) => NodeKind::Var,
            ExprKind::Assign { .. } => NodeKind::Assign,
            ExprKind::Binary { op, .. } => op.node_kind(),
            ExprKind::Unary { op, .. } => op.node_kind(),
        }
    }

    /// Operand ids in source order (left before right).
    pub fn operands(&self) -> SmallVec<[ExprId; 2]> {
        match *self {
            ExprKind::Literal(_) | ExprKind::Var(_) => SmallVec::new(),
            ExprKind::Assign { value, .. } => smallvec::smallvec![value],
            ExprKind::Unary { operand, .. } => smallvec::smallvec![operand],
            ExprKind::Binary { left, right, .. } => smallvec::smallvec![left, right],
        }
    }
}

/// Discriminant identifying which expression variant a node is.
///
/// The generator registry is keyed on this; [`NodeKind::ALL`] is the full
/// grammar the registry must cover.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum NodeKind {
    Literal,
    Var,
    Assign,
    Equals,
    NotEquals,
    UnaryMinus,
    Not,
    Add,
    Sub,
}

impl NodeKind {
    /// Every node kind the grammar defines.
    pub const ALL: [NodeKind; 9] = [
        NodeKind::Literal,
        NodeKind::Var,
        NodeKind::Assign,
        NodeKind::Equals,
        NodeKind::NotEquals,
        NodeKind::UnaryMinus,
        NodeKind::Not,
        NodeKind::Add,
        NodeKind::Sub,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Literal => "literal",
            NodeKind::Var => "variable",
            NodeKind::Assign => "assignment",
            NodeKind::Equals => "equality",
            NodeKind::NotEquals => "inequality",
            NodeKind::UnaryMinus => "unary minus",
            NodeKind::Not => "logical not",
            NodeKind::Add => "addition",
            NodeKind::Sub => "subtraction",
        }
    }

    /// Number of operands every node of this kind has.
    pub const fn arity(self) -> usize {
        match self {
            NodeKind::Literal | NodeKind::Var => 0,
            NodeKind::Assign | NodeKind::UnaryMinus | NodeKind::Not => 1,
            NodeKind::Equals | NodeKind::NotEquals | NodeKind::Add | NodeKind::Sub => 2,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
