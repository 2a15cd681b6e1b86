//! The mutable compiler-configuration document and the key-activation and
//! finalization passes that run over it.
//!
//! `tsc --init` emits a JSON object whose option lines are mostly commented
//! out, each annotated with a trailing `/* description */`:
//!
//! ```text
//!     // "declaration": true,                           /* Generate .d.ts files... */
//!     "module": "commonjs",                             /* Specify what module code is generated. */
//! ```
//!
//! Rather than pattern-matching across adjacent lines, the document is held
//! as an ordered line sequence and each candidate line is tokenized into
//! `{comment-state, key, value, comma, trailing-comment}`. Activation is a
//! lookup-and-flip: the matched line is rewritten as a canonical two-space
//! indented active assignment, preserving the comma and the trailing
//! annotation so later passes see an unchanged shape. No other line is
//! touched, and applying the same directive twice is byte-stable.

use crate::domain::{Directive, DomainError};

/// Lines injected by [`ConfigDocument::finalize`] between the
/// compiler-options close and the root close.
const FINAL_SECTION: &[&str] = &[
    "  },",
    "  \"include\": [\"src/**/*\"],",
    "  \"exclude\": [",
    "    \"node_modules\",",
    "    \"dist\",",
    "    \"test\"",
    "  ]",
];

/// The compiler-configuration text, carrying both active and
/// template-commented keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    lines: Vec<String>,
}

impl ConfigDocument {
    /// Wrap raw template text. No validation happens here; structural
    /// problems surface from [`activate`](Self::activate) and
    /// [`finalize`](Self::finalize).
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            lines: text.into().split('\n').map(str::to_owned).collect(),
        }
    }

    /// Build a fully activated and finalized document from a template in one
    /// call: every directive applied in order, then the closing structure
    /// expanded.
    pub fn build(template: impl Into<String>, directives: &[Directive]) -> Result<Self, DomainError> {
        let mut doc = Self::new(template);
        doc.apply(directives)?;
        doc.finalize()?;
        Ok(doc)
    }

    /// Apply every directive in order. Order matters only for determinism;
    /// each directive touches a disjoint key.
    pub fn apply(&mut self, directives: &[Directive]) -> Result<(), DomainError> {
        for directive in directives {
            self.activate(directive)?;
        }
        Ok(())
    }

    /// Activate one key: find the single line carrying `directive.key`
    /// (commented-out template default or already active) and rewrite it as
    /// an active assignment of the directive's value.
    ///
    /// The rewrite preserves the line's comma and trailing `/* ... */`
    /// annotation verbatim, so the operation is idempotent and cannot
    /// disturb the lines later directives will match.
    pub fn activate(&mut self, directive: &Directive) -> Result<(), DomainError> {
        let matches: Vec<(usize, bool, String)> = self
            .lines
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                parse_key_line(line)
                    .filter(|kl| kl.key == directive.key)
                    .map(|kl| (idx, kl.comma, kl.trailing.to_owned()))
            })
            .collect();

        match matches.as_slice() {
            [] => Err(DomainError::KeyNotFound {
                key: directive.key.to_owned(),
            }),
            [(idx, comma, trailing)] => {
                self.lines[*idx] = format!(
                    "  \"{}\": {}{}{}",
                    directive.key,
                    directive.value.render(),
                    if *comma { "," } else { "" },
                    trailing,
                );
                Ok(())
            }
            many => Err(DomainError::AmbiguousKey {
                key: directive.key.to_owned(),
                found: many.len(),
            }),
        }
    }

    /// Expand the document's closing structure: the unique adjacent pair of
    /// closing braces (compiler-options `}` followed by the root `}`)
    /// becomes `},` plus top-level `include` and `exclude` lists.
    ///
    /// Zero or multiple occurrences of the pair mean the template shape
    /// changed; that is a hard error, never a silently malformed document.
    pub fn finalize(&mut self) -> Result<(), DomainError> {
        let hits: Vec<usize> = (0..self.lines.len().saturating_sub(1))
            .filter(|&i| self.lines[i].trim() == "}" && self.lines[i + 1].trim() == "}")
            .collect();

        let [at] = hits.as_slice() else {
            return Err(DomainError::StructuralMismatch {
                pattern: "}\\n}".to_owned(),
                found: hits.len(),
            });
        };

        self.lines
            .splice(*at..=*at, FINAL_SECTION.iter().map(|s| (*s).to_owned()));
        Ok(())
    }

    /// Reassemble the document text.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Iterate over the document's lines (used by tests and diagnostics).
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

// ── line tokenizer ────────────────────────────────────────────────────────────

/// One tokenized key line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct KeyLine<'a> {
    commented: bool,
    key: &'a str,
    value: &'a str,
    comma: bool,
    trailing: &'a str,
}

/// Tokenize a line of the form
/// `[indent] [//] "key" : value [,] [trailing-comment]` where `value` is in
/// the closed grammar. Returns `None` for anything else (section headers,
/// braces, prose comments).
fn parse_key_line(line: &str) -> Option<KeyLine<'_>> {
    let mut rest = line.trim_start();
    let commented = rest.starts_with("//");
    if commented {
        rest = rest[2..].trim_start();
    }

    let rest = rest.strip_prefix('"')?;
    let key_end = rest.find('"')?;
    let key = &rest[..key_end];
    let rest = rest[key_end + 1..].trim_start();
    let rest = rest.strip_prefix(':')?.trim_start();

    let value_len = scan_value(rest)?;
    let (value, mut rest) = rest.split_at(value_len);
    let comma = rest.starts_with(',');
    if comma {
        rest = &rest[1..];
    }

    Some(KeyLine {
        commented,
        key,
        value,
        comma,
        trailing: rest,
    })
}

/// Length of a value in the closed grammar at the start of `s`:
/// quoted string, boolean, single-line bracketed array, or single-line
/// braced object. `None` if `s` starts with anything else (for example the
/// `{` opening a multi-line block, which has no closing brace on the line).
fn scan_value(s: &str) -> Option<usize> {
    match s.as_bytes().first()? {
        b'"' => s[1..].find('"').map(|i| i + 2),
        b'[' => s.find(']').map(|i| i + 1),
        b'{' => s.find('}').map(|i| i + 1),
        _ => ["true", "false"]
            .into_iter()
            .find(|lit| s.starts_with(lit))
            .map(str::len),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DIRECTIVE_SET, DirectiveValue};

    /// Shape-faithful excerpt of a `tsc --init` template.
    const TEMPLATE: &str = "\
{\n\
  \"compilerOptions\": {\n\
    /* Language and Environment */\n\
    \"target\": \"es2016\",                                  /* Set the JavaScript language version for emitted JavaScript. */\n\
    /* Modules */\n\
    \"module\": \"commonjs\",                                /* Specify what module code is generated. */\n\
    // \"rootDir\": \"./\",                                  /* Specify the root folder within your source files. */\n\
    // \"moduleResolution\": \"node10\",                     /* Specify how TypeScript looks up a file from a given module specifier. */\n\
    // \"baseUrl\": \"./\",                                  /* Specify the base directory to resolve non-relative module names. */\n\
    // \"paths\": {},                                        /* Specify a set of entries that re-map imports to additional lookup locations. */\n\
    // \"resolveJsonModule\": true,                          /* Enable importing .json files. */\n\
    /* Emit */\n\
    // \"declaration\": true,                                /* Generate .d.ts files from TypeScript and JavaScript files in your project. */\n\
    // \"declarationMap\": true,                             /* Create sourcemaps for d.ts files. */\n\
    // \"sourceMap\": true,                                  /* Create source map files for emitted JavaScript files. */\n\
    // \"outDir\": \"./\",                                   /* Specify an output folder for all emitted files. */\n\
    // \"removeComments\": true,                             /* Disable emitting comments. */\n\
    /* Interop Constraints */\n\
    \"esModuleInterop\": true,                               /* Emit additional JavaScript to ease support for importing CommonJS modules. */\n\
    /* Type Checking */\n\
    \"strict\": true,                                        /* Enable all strict type-checking options. */\n\
    // \"skipLibCheck\": true,                               /* Skip type checking all .d.ts files. */\n\
    \"forceConsistentCasingInFileNames\": true               /* Ensure that casing is correct in imports. */\n\
  }\n\
}\n";

    fn module_directive() -> Directive {
        Directive::new("module", DirectiveValue::Str("NodeNext"))
    }

    // ── tokenizer ─────────────────────────────────────────────────────────

    #[test]
    fn tokenizes_commented_line() {
        let kl = parse_key_line("    // \"declaration\": true,    /* Generate .d.ts files */").unwrap();
        assert!(kl.commented);
        assert_eq!(kl.key, "declaration");
        assert_eq!(kl.value, "true");
        assert!(kl.comma);
        assert_eq!(kl.trailing, "    /* Generate .d.ts files */");
    }

    #[test]
    fn tokenizes_active_line() {
        let kl = parse_key_line("    \"module\": \"commonjs\",  /* Specify */").unwrap();
        assert!(!kl.commented);
        assert_eq!(kl.key, "module");
        assert_eq!(kl.value, "\"commonjs\"");
    }

    #[test]
    fn tokenizes_empty_object_value() {
        let kl = parse_key_line("    // \"paths\": {},   /* re-map imports */").unwrap();
        assert_eq!(kl.key, "paths");
        assert_eq!(kl.value, "{}");
    }

    #[test]
    fn rejects_non_key_lines() {
        assert!(parse_key_line("{").is_none());
        assert!(parse_key_line("  \"compilerOptions\": {").is_none());
        assert!(parse_key_line("    /* Modules */").is_none());
        assert!(parse_key_line("  }").is_none());
        assert!(parse_key_line("").is_none());
    }

    // ── activation ────────────────────────────────────────────────────────

    #[test]
    fn activates_commented_key_and_touches_nothing_else() {
        // The concrete scenario: a commented-out module line flips to the
        // directive's value; every other line is unchanged.
        let before = "{\n// \"module\": \"commonjs\",\n\"strict\": true\n}";
        let mut doc = ConfigDocument::new(before);
        doc.activate(&module_directive()).unwrap();

        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines[0], "{");
        assert_eq!(lines[1], "  \"module\": \"NodeNext\",");
        assert_eq!(lines[2], "\"strict\": true");
        assert_eq!(lines[3], "}");
    }

    #[test]
    fn activation_preserves_trailing_annotation() {
        let mut doc = ConfigDocument::new(TEMPLATE);
        doc.activate(&Directive::new("declaration", DirectiveValue::Bool(true)))
            .unwrap();
        let line = doc
            .lines()
            .find(|l| l.contains("\"declaration\""))
            .unwrap();
        assert!(line.starts_with("  \"declaration\": true,"));
        assert!(line.ends_with("/* Generate .d.ts files from TypeScript and JavaScript files in your project. */"));
    }

    #[test]
    fn activation_updates_already_active_key() {
        let mut doc = ConfigDocument::new(TEMPLATE);
        doc.activate(&Directive::new("target", DirectiveValue::Str("ES2017")))
            .unwrap();
        let line = doc.lines().find(|l| l.contains("\"target\"")).unwrap();
        assert!(line.starts_with("  \"target\": \"ES2017\","));
    }

    #[test]
    fn activation_is_idempotent() {
        let mut doc = ConfigDocument::new(TEMPLATE);
        doc.apply(DIRECTIVE_SET).unwrap();
        let first = doc.to_text();
        doc.apply(DIRECTIVE_SET).unwrap();
        assert_eq!(doc.to_text(), first);
    }

    #[test]
    fn every_directive_leaves_exactly_one_active_line() {
        let mut doc = ConfigDocument::new(TEMPLATE);
        doc.apply(DIRECTIVE_SET).unwrap();
        let text = doc.to_text();

        for directive in DIRECTIVE_SET {
            let needle = format!("\"{}\": {}", directive.key, directive.value.render());
            assert_eq!(
                text.matches(&needle).count(),
                1,
                "expected exactly one active line for {}",
                directive.key
            );
            let commented: Vec<&str> = doc
                .lines()
                .filter(|l| {
                    parse_key_line(l)
                        .map(|kl| kl.commented && kl.key == directive.key)
                        .unwrap_or(false)
                })
                .collect();
            assert!(commented.is_empty(), "{} still commented out", directive.key);
        }
    }

    #[test]
    fn absent_key_is_a_hard_error() {
        let mut doc = ConfigDocument::new(TEMPLATE);
        let err = doc
            .activate(&Directive::new("noSuchOption", DirectiveValue::Bool(true)))
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::KeyNotFound {
                key: "noSuchOption".into()
            }
        );
    }

    #[test]
    fn duplicate_key_lines_are_ambiguous() {
        let text = "{\n// \"module\": \"commonjs\",\n\"module\": \"es2015\",\n}";
        let mut doc = ConfigDocument::new(text);
        let err = doc.activate(&module_directive()).unwrap_err();
        assert_eq!(
            err,
            DomainError::AmbiguousKey {
                key: "module".into(),
                found: 2
            }
        );
    }

    // ── finalizer ─────────────────────────────────────────────────────────

    #[test]
    fn finalize_expands_closing_structure() {
        let mut doc = ConfigDocument::new(TEMPLATE);
        doc.finalize().unwrap();
        let text = doc.to_text();
        assert!(text.contains("  },\n  \"include\": [\"src/**/*\"],\n  \"exclude\": ["));
        assert!(text.contains("\"node_modules\""));
        assert!(text.contains("\"dist\""));
        assert!(text.ends_with("  ]\n}\n"));
    }

    #[test]
    fn finalize_without_anchor_is_structural_mismatch() {
        let mut doc = ConfigDocument::new("{\n  \"compilerOptions\": {\n  }\n");
        let err = doc.finalize().unwrap_err();
        assert!(matches!(
            err,
            DomainError::StructuralMismatch { found: 0, .. }
        ));
    }

    #[test]
    fn finalize_with_two_anchors_is_structural_mismatch() {
        let mut doc = ConfigDocument::new("{\n  {\n  }\n}\n  {\n  }\n}");
        let err = doc.finalize().unwrap_err();
        assert!(matches!(
            err,
            DomainError::StructuralMismatch { found: 2, .. }
        ));
    }

    // ── whole pipeline ────────────────────────────────────────────────────

    #[test]
    fn build_runs_activation_then_finalization() {
        let doc = ConfigDocument::build(TEMPLATE, DIRECTIVE_SET).unwrap();
        let text = doc.to_text();
        assert!(text.contains("  \"module\": \"NodeNext\","));
        assert!(text.contains("  \"outDir\": \"./dist\","));
        assert!(text.contains(
            "  \"paths\": {\"@/*\": [\"src/*\"], \"@utils/*\": [\"src/utils/*\"]},"
        ));
        assert!(text.contains("\"include\": [\"src/**/*\"]"));
        // Untouched template keys survive as-is.
        assert!(text.contains("\"strict\": true,"));
    }
}
