//! Generators for the standard node kinds.
//!
//! One factory per generator type. Kinds that differ only by operator
//! (`Equals`/`NotEquals`, `Add`/`Sub`) share a generator that reads the
//! operator from the node payload.

mod arithmetic;
mod equality;
mod literal;
mod unary;
mod variable;

use std::io;

use quill_ir::NodeKind;
use quill_stack::ensure_sufficient_stack;

use crate::{Bound, Contexts, EmitContext, EmitError, EmitResult, Emitter, Folded, Generator, GeneratorFactory};

use arithmetic::ArithmeticGen;
use equality::EqualityGen;
use literal::LiteralGen;
use unary::{MinusGen, NotGen};
use variable::{AssignGen, VarGen};

fn literal<'a>(bound: Bound<'a>) -> Box<dyn Generator + 'a> {
    Box::new(LiteralGen { bound })
}

fn var<'a>(bound: Bound<'a>) -> Box<dyn Generator + 'a> {
    Box::new(VarGen { bound })
}

fn assign<'a>(bound: Bound<'a>) -> Box<dyn Generator + 'a> {
    Box::new(AssignGen { bound })
}

fn equality<'a>(bound: Bound<'a>) -> Box<dyn Generator + 'a> {
    Box::new(EqualityGen { bound })
}

fn minus<'a>(bound: Bound<'a>) -> Box<dyn Generator + 'a> {
    Box::new(MinusGen { bound })
}

fn not<'a>(bound: Bound<'a>) -> Box<dyn Generator + 'a> {
    Box::new(NotGen { bound })
}

fn arithmetic<'a>(bound: Bound<'a>) -> Box<dyn Generator + 'a> {
    Box::new(ArithmeticGen { bound })
}

/// The factory for every kind in [`NodeKind::ALL`].
pub(crate) fn standard_factories() -> [(NodeKind, GeneratorFactory); 9] {
    [
        (NodeKind::Literal, literal),
        (NodeKind::Var, var),
        (NodeKind::Assign, assign),
        (NodeKind::Equals, equality),
        (NodeKind::NotEquals, equality),
        (NodeKind::UnaryMinus, minus),
        (NodeKind::Not, not),
        (NodeKind::Add, arithmetic),
        (NodeKind::Sub, arithmetic),
    ]
}

/// Native form of an operand under the stack guard.
fn native_operand(
    operand: &dyn Generator,
    context: EmitContext,
    out: &mut Emitter<'_>,
) -> EmitResult<Option<Folded>> {
    ensure_sufficient_stack(|| {
        tracing::trace!(id = ?operand.node().id(), kind = %operand.kind(), %context, "emit native");
        operand.emit_native(context, out)
    })
}

/// Keep a folded step only while its native and boxed results agree.
fn agreeing(generator: &dyn Generator, context: EmitContext, folded: Folded) -> EmitResult<Option<Folded>> {
    if folded.agrees() {
        Ok(Some(folded))
    } else {
        Err(generator.unsupported(context))
    }
}

/// Boxed contexts plus whichever native forms emit successfully.
fn native_contexts(generator: &dyn Generator) -> EmitResult<Contexts> {
    let mut contexts = Contexts::BOXED;
    for context in [EmitContext::Long, EmitContext::Double] {
        let mut sink = io::sink();
        match generator.emit_native(context, &mut Emitter::new(&mut sink)) {
            Ok(_) => contexts |= context.flag(),
            Err(EmitError::Unsupported { .. }) => {}
            Err(err) => return Err(err),
        }
    }
    Ok(contexts)
}
