//! Derived configuration documents: one overlay per build/test variant.
//!
//! Overlays are never mutated after construction. Each one `extends` the
//! finalized base document and overrides only the fields its variant
//! changes. Serialization goes through serde with declaration-ordered
//! fields and two-space indentation, so repeated runs are byte-identical.

use serde::Serialize;

use crate::domain::{DomainError, directive::PATH_ALIASES};

/// Relative reference from every overlay back to the base document.
pub const BASE_DOCUMENT: &str = "./tsconfig.json";

/// The fixed set of overlay targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildVariant {
    /// CommonJS build output (`dist/cjs`).
    CommonJs,
    /// ES-module build output (`dist/esm`).
    Esm,
    /// Test execution under mocha/ts-node (`dist/test`, emit enabled).
    Test,
}

impl BuildVariant {
    /// Every variant, in emission order.
    pub const CATALOG: [BuildVariant; 3] = [Self::CommonJs, Self::Esm, Self::Test];

    /// File name the overlay is persisted under, next to the base document.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::CommonJs => "tsconfig.commonjs.json",
            Self::Esm => "tsconfig.esm.json",
            Self::Test => "tsconfig.test.json",
        }
    }

    /// Build this variant's overlay document.
    pub fn compose(&self) -> OverlayDocument {
        match self {
            Self::CommonJs => OverlayDocument {
                extends: BASE_DOCUMENT,
                compiler_options: CompilerOverrides {
                    module: Some("CommonJS"),
                    module_resolution: Some("Node10"),
                    target: Some("ES2015"),
                    out_dir: Some("./dist/cjs"),
                    declaration_dir: Some("./dist/cjs"),
                    ..CompilerOverrides::default()
                },
                include: vec!["src/**/*"],
                exclude: None,
            },
            Self::Esm => OverlayDocument {
                extends: BASE_DOCUMENT,
                compiler_options: CompilerOverrides {
                    target: Some("ES2020"),
                    out_dir: Some("./dist/esm"),
                    declaration_dir: Some("./dist/esm"),
                    ..CompilerOverrides::default()
                },
                include: vec!["src/**/*"],
                exclude: None,
            },
            Self::Test => OverlayDocument {
                extends: BASE_DOCUMENT,
                compiler_options: CompilerOverrides {
                    module: Some("CommonJS"),
                    target: Some("ES2020"),
                    out_dir: Some("./dist/test"),
                    root_dir: Some("./"),
                    no_emit: Some(false),
                    types: Some(vec!["node", "mocha"]),
                    source_map: Some(true),
                    base_url: Some("."),
                    paths: Some(PathAliases::standard()),
                    es_module_interop: Some(true),
                    ..CompilerOverrides::default()
                },
                include: vec!["src/**/*.ts", "tests/**/*.ts"],
                exclude: Some(vec!["node_modules", "dist"]),
            },
        }
    }
}

/// A derived configuration referencing the base document through an
/// inheritance pointer and carrying only the overridden fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayDocument {
    pub extends: &'static str,
    #[serde(rename = "compilerOptions")]
    pub compiler_options: CompilerOverrides,
    pub include: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<&'static str>>,
}

impl OverlayDocument {
    /// Serialize as two-space-indented JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self)
            .map(|json| format!("{json}\n"))
            .map_err(|e| DomainError::Serialization {
                document: "overlay document".into(),
                reason: e.to_string(),
            })
    }
}

/// The named subset of compiler fields an overlay may override. `None`
/// fields are omitted from the serialized document, so each variant carries
/// exactly its own overrides and nothing leaks between variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_resolution: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration_dir: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_emit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_map: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathAliases>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub es_module_interop: Option<bool>,
}

/// The `paths` alias block, sourced from the same table as the base
/// document's `paths` directive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathAliases {
    #[serde(rename = "@/*")]
    pub src: &'static [&'static str],
    #[serde(rename = "@utils/*")]
    pub utils: &'static [&'static str],
}

impl PathAliases {
    pub fn standard() -> Self {
        Self {
            src: PATH_ALIASES[0].1,
            utils: PATH_ALIASES[1].1,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(variant: BuildVariant) -> Value {
        serde_json::from_str(&variant.compose().to_json().unwrap()).unwrap()
    }

    // serde_json::Value sorts object keys, so assertions compare sorted sets.
    fn override_keys(doc: &Value) -> Vec<String> {
        doc["compilerOptions"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn every_overlay_extends_the_base_document() {
        for variant in BuildVariant::CATALOG {
            assert_eq!(parse(variant)["extends"], BASE_DOCUMENT);
        }
    }

    #[test]
    fn commonjs_overlay_overrides_only_its_fields() {
        let doc = parse(BuildVariant::CommonJs);
        assert_eq!(
            override_keys(&doc),
            ["declarationDir", "module", "moduleResolution", "outDir", "target"]
        );
        assert_eq!(doc["compilerOptions"]["module"], "CommonJS");
        assert_eq!(doc["compilerOptions"]["moduleResolution"], "Node10");
        assert_eq!(doc["compilerOptions"]["outDir"], "./dist/cjs");
        assert_eq!(doc["compilerOptions"]["target"], "ES2015");
        assert!(doc.get("exclude").is_none());
    }

    #[test]
    fn esm_overlay_overrides_only_its_fields() {
        let doc = parse(BuildVariant::Esm);
        assert_eq!(override_keys(&doc), ["declarationDir", "outDir", "target"]);
        assert_eq!(doc["compilerOptions"]["outDir"], "./dist/esm");
        assert_eq!(doc["compilerOptions"]["declarationDir"], "./dist/esm");
        assert_eq!(doc["compilerOptions"]["target"], "ES2020");
    }

    #[test]
    fn test_overlay_covers_sources_and_tests() {
        let doc = parse(BuildVariant::Test);
        let include: Vec<&str> = doc["include"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(include, ["src/**/*.ts", "tests/**/*.ts"]);
        assert_eq!(doc["compilerOptions"]["noEmit"], false);
        assert_eq!(doc["compilerOptions"]["outDir"], "./dist/test");
        assert_eq!(doc["compilerOptions"]["types"][1], "mocha");
        assert_eq!(doc["compilerOptions"]["paths"]["@/*"][0], "src/*");
        assert_eq!(doc["exclude"][0], "node_modules");
    }

    #[test]
    fn overlays_do_not_leak_overrides_between_variants() {
        let cjs = parse(BuildVariant::CommonJs);
        let esm = parse(BuildVariant::Esm);
        assert!(cjs["compilerOptions"].get("noEmit").is_none());
        assert!(cjs["compilerOptions"].get("paths").is_none());
        assert!(esm["compilerOptions"].get("module").is_none());
        assert!(esm["compilerOptions"].get("moduleResolution").is_none());
    }

    #[test]
    fn serialization_is_deterministic() {
        let a = BuildVariant::Test.compose().to_json().unwrap();
        let b = BuildVariant::Test.compose().to_json().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn serialization_uses_two_space_indent() {
        let json = BuildVariant::CommonJs.compose().to_json().unwrap();
        assert!(json.contains("\n  \"extends\": \"./tsconfig.json\","));
        assert!(json.contains("\n    \"module\": \"CommonJS\","));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn file_names_are_stable() {
        assert_eq!(BuildVariant::CommonJs.file_name(), "tsconfig.commonjs.json");
        assert_eq!(BuildVariant::Esm.file_name(), "tsconfig.esm.json");
        assert_eq!(BuildVariant::Test.file_name(), "tsconfig.test.json");
    }
}
