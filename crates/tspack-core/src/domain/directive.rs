//! The fixed directive table: which compiler options get activated and the
//! values they take.
//!
//! Values live in a deliberately closed grammar (string, boolean,
//! single-line array, single-line object of string arrays) so every
//! rendered value fits on one document line and the activation pass never
//! has to reason about multi-line JSON.

/// Path-alias table shared by the base document's `paths` directive and the
/// test overlay.
pub const PATH_ALIASES: &[(&str, &[&str])] = &[
    ("@/*", &["src/*"]),
    ("@utils/*", &["src/utils/*"]),
];

/// A value in the closed directive grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveValue {
    Str(&'static str),
    Bool(bool),
    Array(&'static [&'static str]),
    Object(&'static [(&'static str, &'static [&'static str])]),
}

impl DirectiveValue {
    /// Render as a single-line JSON value.
    pub fn render(&self) -> String {
        match self {
            Self::Str(s) => format!("\"{s}\""),
            Self::Bool(b) => b.to_string(),
            Self::Array(items) => format!("[{}]", join_quoted(items)),
            Self::Object(entries) => {
                let body = entries
                    .iter()
                    .map(|(key, values)| format!("\"{key}\": [{}]", join_quoted(values)))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{{body}}}")
            }
        }
    }
}

fn join_quoted(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("\"{item}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One key-activation instruction: set `key` to `value` in the base
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub key: &'static str,
    pub value: DirectiveValue,
}

impl Directive {
    pub const fn new(key: &'static str, value: DirectiveValue) -> Self {
        Self { key, value }
    }
}

/// The full activation set, in application order. Each key appears once;
/// order only affects determinism of the pass, not the result.
pub const DIRECTIVE_SET: &[Directive] = &[
    Directive::new("declaration", DirectiveValue::Bool(true)),
    Directive::new("declarationMap", DirectiveValue::Bool(true)),
    Directive::new("sourceMap", DirectiveValue::Bool(true)),
    Directive::new("module", DirectiveValue::Str("NodeNext")),
    Directive::new("target", DirectiveValue::Str("ES2017")),
    Directive::new("moduleResolution", DirectiveValue::Str("Node16")),
    Directive::new("esModuleInterop", DirectiveValue::Bool(true)),
    Directive::new("skipLibCheck", DirectiveValue::Bool(true)),
    Directive::new("resolveJsonModule", DirectiveValue::Bool(true)),
    Directive::new("outDir", DirectiveValue::Str("./dist")),
    Directive::new("rootDir", DirectiveValue::Str("./src")),
    Directive::new("baseUrl", DirectiveValue::Str(".")),
    Directive::new("paths", DirectiveValue::Object(PATH_ALIASES)),
    Directive::new("removeComments", DirectiveValue::Bool(true)),
];
