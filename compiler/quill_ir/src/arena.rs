//! Flat expression storage.

use std::fmt;

use quill_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

use crate::{BinaryOp, ExprId, ExprKind, Literal, Location, Name, NodeKind, StringInterner, UnaryOp};

/// One expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub location: Location,
}

/// Owner of every node in a compilation unit.
///
/// Nodes are immutable once pushed. A node may only refer to operands that
/// are already in the arena, which keeps every tree acyclic.
#[derive(Clone, Default, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    interner: StringInterner,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node.
    ///
    /// # Panics
    /// Panics if an operand id does not refer to an existing node.
    pub fn push(&mut self, kind: ExprKind, location: Location) -> ExprId {
        for operand in kind.operands() {
            assert!(
                operand.index() < self.exprs.len(),
                "operand {operand:?} must be allocated before its parent"
            );
        }
        let raw = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded {} nodes", u32::MAX));
        self.exprs.push(Expr { kind, location });
        ExprId::new(raw)
    }

    pub fn intern(&mut self, s: &str) -> Name {
        self.interner.intern(s)
    }

    #[inline]
    pub fn resolve(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.exprs[id.index()].kind
    }

    #[inline]
    pub fn location(&self, id: ExprId) -> Location {
        self.exprs[id.index()].location
    }

    /// Borrowed view of a node.
    #[inline]
    pub fn node(&self, id: ExprId) -> ExprRef<'_> {
        ExprRef { arena: self, id }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    // Builders

    pub fn literal(&mut self, literal: Literal, location: Location) -> ExprId {
        self.push(ExprKind::Literal(literal), location)
    }

    pub fn null(&mut self, location: Location) -> ExprId {
        self.literal(Literal::Null, location)
    }

    pub fn bool(&mut self, value: bool, location: Location) -> ExprId {
        self.literal(Literal::Bool(value), location)
    }

    pub fn int(&mut self, value: i64, location: Location) -> ExprId {
        self.literal(Literal::Int(value), location)
    }

    pub fn float(&mut self, value: f64, location: Location) -> ExprId {
        self.literal(Literal::float(value), location)
    }

    pub fn string(&mut self, value: &str, location: Location) -> ExprId {
        let name = self.intern(value);
        self.literal(Literal::Str(name), location)
    }

    pub fn var(&mut self, name: &str, location: Location) -> ExprId {
        let name = self.intern(name);
        self.push(ExprKind::Var(name), location)
    }

    pub fn assign(&mut self, target: &str, value: ExprId, location: Location) -> ExprId {
        let target = self.intern(target);
        self.push(ExprKind::Assign { target, value }, location)
    }

    pub fn binary(
        &mut self,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
        location: Location,
    ) -> ExprId {
        self.push(ExprKind::Binary { op, left, right }, location)
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId, location: Location) -> ExprId {
        self.push(ExprKind::Unary { op, operand }, location)
    }

    /// Compare two trees by shape and payload, ignoring locations.
    ///
    /// `other` may be a different arena; interned strings are compared by
    /// content and floats by bit pattern.
    pub fn structurally_eq(&self, a: ExprId, other: &ExprArena, b: ExprId) -> bool {
        let (left, right) = (self.kind(a), other.kind(b));
        ensure_sufficient_stack(|| match (*left, *right) {
            (ExprKind::Literal(x), ExprKind::Literal(y)) => match (x, y) {
                (Literal::Str(x), Literal::Str(y)) => self.resolve(x) == other.resolve(y),
                (x, y) => x == y,
            },
            (ExprKind::Var(x), ExprKind::Var(y)) => self.resolve(x) == other.resolve(y),
            (
                ExprKind::Assign { target: tx, value: vx },
                ExprKind::Assign { target: ty, value: vy },
            ) => self.resolve(tx) == other.resolve(ty) && self.structurally_eq(vx, other, vy),
            (
                ExprKind::Binary { op: ox, left: lx, right: rx },
                ExprKind::Binary { op: oy, left: ly, right: ry },
            ) => {
                ox == oy
                    && self.structurally_eq(lx, other, ly)
                    && self.structurally_eq(rx, other, ry)
            }
            (
                ExprKind::Unary { op: ox, operand: x },
                ExprKind::Unary { op: oy, operand: y },
            ) => ox == oy && self.structurally_eq(x, other, y),
            _ => false,
        })
    }
}

/// Borrowed view of one node: the capability surface generators consume.
#[derive(Copy, Clone)]
pub struct ExprRef<'a> {
    arena: &'a ExprArena,
    id: ExprId,
}

impl<'a> ExprRef<'a> {
    #[inline]
    pub fn id(self) -> ExprId {
        self.id
    }

    #[inline]
    pub fn arena(self) -> &'a ExprArena {
        self.arena
    }

    #[inline]
    pub fn data(self) -> &'a ExprKind {
        self.arena.kind(self.id)
    }

    #[inline]
    pub fn kind(self) -> NodeKind {
        self.data().node_kind()
    }

    #[inline]
    pub fn location(self) -> Location {
        self.arena.location(self.id)
    }

    /// The `index`-th operand, in source order.
    pub fn operand(self, index: usize) -> Option<ExprRef<'a>> {
        self.data()
            .operands()
            .get(index)
            .map(|&id| self.arena.node(id))
    }

    pub fn operands(self) -> SmallVec<[ExprRef<'a>; 2]> {
        self.data()
            .operands()
            .into_iter()
            .map(|id| self.arena.node(id))
            .collect()
    }

    #[inline]
    pub fn resolve(self, name: Name) -> &'a str {
        self.arena.resolve(name)
    }
}

impl fmt::Debug for ExprRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} `{}` @ {:?}", self.id, self, self.location())
    }
}

/// Prints the node back in source syntax, fully parenthesized.
impl fmt::Display for ExprRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match *self.data() {
            ExprKind::Literal(literal) => match literal {
                Literal::Null => f.write_str("null"),
                Literal::Bool(b) => write!(f, "{b}"),
                Literal::Int(n) => write!(f, "{n}"),
                Literal::Float(bits) => write!(f, "{:?}", f64::from_bits(bits)),
                Literal::Str(name) => write!(f, "{:?}", self.resolve(name)),
            },
            ExprKind::Var(name) => write!(f, "${}", self.resolve(name)),
            ExprKind::Assign { target, value } => {
                write!(f, "(${} = {})", self.resolve(target), self.arena.node(value))
            }
            ExprKind::Binary { op, left, right } => write!(
                f,
                "({} {} {})",
                self.arena.node(left),
                op.as_symbol(),
                self.arena.node(right)
            ),
            ExprKind::Unary { op, operand } => {
                write!(f, "({}{})", op.as_symbol(), self.arena.node(operand))
            }
        })
    }
}
