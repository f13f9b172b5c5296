//! Unit generation options.

/// Options for generating one compilation unit, parsed from command line
/// style arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOptions {
    /// Name of the generated class (--class=<name>)
    pub class_name: String,
    /// Package declaration, if any (--package=<name>)
    pub package: Option<String>,
    /// Generate functions on the rayon pool (--parallel / --no-parallel)
    pub parallel: bool,
    /// Precede each function with its source location (--location-comments)
    pub emit_location_comments: bool,
}

impl Default for UnitOptions {
    fn default() -> Self {
        Self {
            class_name: "Unit".to_string(),
            package: None,
            parallel: true,
            emit_location_comments: false,
        }
    }
}

/// Parse unit options from command line arguments.
///
/// Unknown arguments are ignored with a warning.
pub fn parse_unit_options(args: &[String]) -> UnitOptions {
    let mut options = UnitOptions::default();

    for arg in args {
        if let Some(class) = arg.strip_prefix("--class=") {
            options.class_name = class.to_string();
        } else if let Some(package) = arg.strip_prefix("--package=") {
            options.package = if package.is_empty() {
                None
            } else {
                Some(package.to_string())
            };
        } else if arg == "--parallel" {
            options.parallel = true;
        } else if arg == "--no-parallel" {
            options.parallel = false;
        } else if arg == "--location-comments" {
            options.emit_location_comments = true;
        } else {
            tracing::warn!(%arg, "ignoring unknown unit option");
        }
    }

    options
}
