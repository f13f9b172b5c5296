//! Emission contexts.

use std::fmt;

/// Which specialized output a generator is asked for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EmitContext {
    /// Boxed dynamic `Value`.
    Value,
    /// Native `boolean`.
    Boolean,
    /// Native `long`.
    Long,
    /// Native `double`.
    Double,
    /// Expression that rebuilds the node at runtime.
    SelfExpr,
}

impl EmitContext {
    pub const ALL: [EmitContext; 5] = [
        EmitContext::Value,
        EmitContext::Boolean,
        EmitContext::Long,
        EmitContext::Double,
        EmitContext::SelfExpr,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            EmitContext::Value => "value",
            EmitContext::Boolean => "boolean",
            EmitContext::Long => "long",
            EmitContext::Double => "double",
            EmitContext::SelfExpr => "self-expression",
        }
    }

    /// The single-bit context set for this context.
    pub const fn flag(self) -> Contexts {
        match self {
            EmitContext::Value => Contexts::VALUE,
            EmitContext::Boolean => Contexts::BOOLEAN,
            EmitContext::Long => Contexts::LONG,
            EmitContext::Double => Contexts::DOUBLE,
            EmitContext::SelfExpr => Contexts::SELF_EXPR,
        }
    }

    /// Target-language type of an expression emitted in this context.
    pub const fn target_type(self) -> &'static str {
        match self {
            EmitContext::Value => "Value",
            EmitContext::Boolean => "boolean",
            EmitContext::Long => "long",
            EmitContext::Double => "double",
            EmitContext::SelfExpr => "Expr",
        }
    }
}

impl fmt::Display for EmitContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Set of contexts a generator can serve.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Contexts: u8 {
        const VALUE = 1 << 0;
        const BOOLEAN = 1 << 1;
        const LONG = 1 << 2;
        const DOUBLE = 1 << 3;
        const SELF_EXPR = 1 << 4;

        /// Contexts every node kind supports.
        const BOXED = Self::VALUE.bits() | Self::BOOLEAN.bits() | Self::SELF_EXPR.bits();
        /// Native numeric contexts.
        const NUMERIC = Self::LONG.bits() | Self::DOUBLE.bits();
    }
}

impl Contexts {
    #[inline]
    pub fn supports(self, context: EmitContext) -> bool {
        self.contains(context.flag())
    }
}
