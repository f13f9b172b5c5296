//! Compilation units.

use std::io;

use quill_codegen::{EmitContext, EmitResult, Emitter, Registry};
use quill_ir::{ExprArena, ExprId};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::{CompileError, UnitOptions};

/// One generated method: `public static <type> <name>(Env env)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub root: ExprId,
    /// Context the body is emitted in; determines the return type.
    pub context: EmitContext,
}

/// Expression trees to be generated together into one class.
#[derive(Debug, Clone, Default)]
pub struct CompileUnit {
    arena: ExprArena,
    functions: Vec<Function>,
}

impl CompileUnit {
    pub fn new(arena: ExprArena) -> Self {
        CompileUnit {
            arena,
            functions: Vec::new(),
        }
    }

    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    /// Arena for building further trees. Existing nodes cannot change.
    pub fn arena_mut(&mut self) -> &mut ExprArena {
        &mut self.arena
    }

    pub fn add_function(&mut self, name: impl Into<String>, root: ExprId, context: EmitContext) {
        self.functions.push(Function {
            name: name.into(),
            root,
            context,
        });
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// Generate `unit` into a string.
pub fn compile_unit(
    unit: &CompileUnit,
    registry: &Registry,
    options: &UnitOptions,
) -> Result<String, CompileError> {
    let mut buf = Vec::new();
    write_unit(unit, registry, options, &mut buf)?;
    String::from_utf8(buf).map_err(|e| CompileError::Sink(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Generate `unit` and write the class to `sink`.
///
/// Nothing is written unless every function generates successfully.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(class = %options.class_name, functions = unit.len(), parallel = options.parallel)
)]
pub fn write_unit(
    unit: &CompileUnit,
    registry: &Registry,
    options: &UnitOptions,
    sink: &mut dyn io::Write,
) -> Result<(), CompileError> {
    validate(unit, registry, options)?;

    let render = |function: &Function| render_function(unit.arena(), registry, options, function);
    let bodies: Vec<Vec<u8>> = if options.parallel {
        unit.functions().par_iter().map(render).collect::<Result<_, _>>()?
    } else {
        unit.functions().iter().map(render).collect::<Result<_, _>>()?
    };

    let mut out = Emitter::new(sink);
    if let Some(package) = &options.package {
        out.println(&format!("package {package};"))?;
        out.newline()?;
    }
    out.println(&format!("public final class {} {{", options.class_name))?;
    for (i, body) in bodies.iter().enumerate() {
        if i > 0 {
            out.newline()?;
        }
        // Bodies are already indented for the class scope.
        out.print(&String::from_utf8_lossy(body))?;
    }
    out.println("}")?;
    out.flush()?;
    Ok(())
}

fn validate(unit: &CompileUnit, registry: &Registry, options: &UnitOptions) -> Result<(), CompileError> {
    let missing = registry.missing_kinds();
    if !missing.is_empty() {
        return Err(CompileError::IncompleteRegistry { missing });
    }
    if !is_identifier(&options.class_name) {
        return Err(CompileError::InvalidName {
            name: options.class_name.clone(),
            what: "class",
        });
    }
    if let Some(package) = &options.package {
        if !package.split('.').all(is_identifier) {
            return Err(CompileError::InvalidName {
                name: package.clone(),
                what: "package",
            });
        }
    }
    let mut seen = FxHashSet::default();
    for function in unit.functions() {
        if !is_identifier(&function.name) {
            return Err(CompileError::InvalidName {
                name: function.name.clone(),
                what: "function",
            });
        }
        if !seen.insert(function.name.as_str()) {
            return Err(CompileError::DuplicateFunction(function.name.clone()));
        }
        if function.root.index() >= unit.arena().len() {
            return Err(CompileError::UnknownRoot {
                function: function.name.clone(),
                root: function.root,
            });
        }
    }
    Ok(())
}

/// Words the target language reserves; none may name a class, package
/// segment or method.
const RESERVED: &[&str] = &[
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        && !RESERVED.contains(&s)
}

/// Render one method into a private buffer, one level inside the class.
fn render_function(
    arena: &ExprArena,
    registry: &Registry,
    options: &UnitOptions,
    function: &Function,
) -> Result<Vec<u8>, CompileError> {
    tracing::debug!(name = %function.name, context = %function.context, "generating function");
    let mut buf = Vec::new();
    let mut out = Emitter::with_indent(&mut buf, 1);
    emit_function(arena, registry, options, function, &mut out)
        .map_err(|e| CompileError::emit(&function.name, e))?;
    Ok(buf)
}

fn emit_function(
    arena: &ExprArena,
    registry: &Registry,
    options: &UnitOptions,
    function: &Function,
    out: &mut Emitter<'_>,
) -> EmitResult {
    let generator = registry.resolve(arena, function.root)?;
    let location = generator.location();
    if options.emit_location_comments && !location.is_dummy() {
        out.println(&format!("// {location}"))?;
    }
    out.println(&format!(
        "public static {} {}(Env env) {{",
        function.context.target_type(),
        function.name
    ))?;
    out.scope(|out| -> EmitResult {
        out.print("return ")?;
        generator.emit(function.context, out)?;
        out.println(";")?;
        Ok(())
    })?;
    out.println("}")?;
    Ok(())
}
