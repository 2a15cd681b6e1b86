//! Sidecar tool configuration: linter and test-runner documents written
//! next to the compiler configuration.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::DomainError;

/// ESLint configuration for a TypeScript package (`.eslintrc`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EslintConfig {
    pub root: bool,
    pub parser: &'static str,
    pub plugins: Vec<&'static str>,
    pub extends: Vec<&'static str>,
    /// BTreeMap keeps rule order stable across runs.
    pub rules: BTreeMap<&'static str, u8>,
}

impl Default for EslintConfig {
    fn default() -> Self {
        Self {
            root: true,
            parser: "@typescript-eslint/parser",
            plugins: vec!["@typescript-eslint"],
            extends: vec![
                "eslint:recommended",
                "plugin:@typescript-eslint/eslint-recommended",
                "plugin:@typescript-eslint/recommended",
            ],
            rules: BTreeMap::from([("no-console", 0), ("no-shadow", 1)]),
        }
    }
}

impl EslintConfig {
    pub fn to_json(&self) -> Result<String, DomainError> {
        to_pretty_json(self, ".eslintrc")
    }
}

/// Contents of `.eslintignore`.
pub fn eslint_ignore() -> &'static str {
    "node_modules\ndist\n"
}

/// Mocha test-runner configuration (`.mocharc.json`). Registers ts-node and
/// path-alias resolution so the starter test runs without a build step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MochaConfig {
    pub extension: Vec<&'static str>,
    pub spec: &'static str,
    pub require: Vec<&'static str>,
    pub recursive: bool,
}

impl Default for MochaConfig {
    fn default() -> Self {
        Self {
            extension: vec!["ts"],
            spec: "tests/**/*.ts",
            require: vec!["ts-node/register", "tsconfig-paths/register"],
            recursive: true,
        }
    }
}

impl MochaConfig {
    pub fn to_json(&self) -> Result<String, DomainError> {
        to_pretty_json(self, ".mocharc.json")
    }
}

fn to_pretty_json<T: Serialize>(value: &T, document: &str) -> Result<String, DomainError> {
    serde_json::to_string_pretty(value)
        .map(|json| format!("{json}\n"))
        .map_err(|e| DomainError::Serialization {
            document: document.into(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn eslint_config_shape() {
        let json = EslintConfig::default().to_json().unwrap();
        let doc: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(doc["root"], true);
        assert_eq!(doc["parser"], "@typescript-eslint/parser");
        assert_eq!(doc["plugins"][0], "@typescript-eslint");
        assert_eq!(doc["extends"].as_array().unwrap().len(), 3);
        assert_eq!(doc["extends"][0], "eslint:recommended");
        assert_eq!(doc["rules"]["no-console"], 0);
        assert_eq!(doc["rules"]["no-shadow"], 1);
    }

    #[test]
    fn eslint_ignore_lists_build_outputs() {
        assert_eq!(eslint_ignore(), "node_modules\ndist\n");
    }

    #[test]
    fn mocha_config_registers_ts_node_and_path_aliases() {
        let json = MochaConfig::default().to_json().unwrap();
        let doc: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(doc["extension"][0], "ts");
        assert_eq!(doc["spec"], "tests/**/*.ts");
        assert_eq!(doc["require"][0], "ts-node/register");
        assert_eq!(doc["require"][1], "tsconfig-paths/register");
        assert_eq!(doc["recursive"], true);
    }

    #[test]
    fn sidecars_end_with_newline() {
        assert!(EslintConfig::default().to_json().unwrap().ends_with("}\n"));
        assert!(MochaConfig::default().to_json().unwrap().ends_with("}\n"));
    }
}
