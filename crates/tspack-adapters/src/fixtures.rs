//! Embedded template fixture for tests.
//!
//! A shape-faithful `tsc --init` output: a commented-out option catalog with
//! trailing annotations, a handful of active defaults, and the two-line
//! closing structure. Used by [`crate::command::ScriptedRunner`] to stand in
//! for the real TypeScript CLI.

pub const TSC_INIT_TEMPLATE: &str = r#"{
  "compilerOptions": {
    /* Visit https://aka.ms/tsconfig to read more about this file */

    /* Language and Environment */
    "target": "es2016",                                  /* Set the JavaScript language version for emitted JavaScript and include compatible library declarations. */
    // "lib": [],                                        /* Specify a set of bundled library declaration files that describe the target runtime environment. */
    // "experimentalDecorators": true,                   /* Enable experimental support for legacy experimental decorators. */

    /* Modules */
    "module": "commonjs",                                /* Specify what module code is generated. */
    // "rootDir": "./",                                  /* Specify the root folder within your source files. */
    // "moduleResolution": "node10",                     /* Specify how TypeScript looks up a file from a given module specifier. */
    // "baseUrl": "./",                                  /* Specify the base directory to resolve non-relative module names. */
    // "paths": {},                                      /* Specify a set of entries that re-map imports to additional lookup locations. */
    // "types": [],                                      /* Specify type package names to be included without being referenced in a source file. */
    // "resolveJsonModule": true,                        /* Enable importing .json files. */

    /* JavaScript Support */
    // "allowJs": true,                                  /* Allow JavaScript files to be a part of your program. */

    /* Emit */
    // "declaration": true,                              /* Generate .d.ts files from TypeScript and JavaScript files in your project. */
    // "declarationMap": true,                           /* Create sourcemaps for d.ts files. */
    // "sourceMap": true,                                /* Create source map files for emitted JavaScript files. */
    // "outDir": "./",                                   /* Specify an output folder for all emitted files. */
    // "removeComments": true,                           /* Disable emitting comments. */
    // "noEmit": true,                                   /* Disable emitting files from a compilation. */
    // "declarationDir": "./",                           /* Specify the output directory for generated declaration files. */

    /* Interop Constraints */
    "esModuleInterop": true,                             /* Emit additional JavaScript to ease support for importing CommonJS modules. */
    "forceConsistentCasingInFileNames": true,            /* Ensure that casing is correct in imports. */

    /* Type Checking */
    "strict": true,                                      /* Enable all strict type-checking options. */
    // "noImplicitAny": true,                            /* Enable error reporting for expressions and declarations with an implied 'any' type. */

    /* Completeness */
    // "skipDefaultLibCheck": true,                      /* Skip type checking .d.ts files that are included with TypeScript. */
    "skipLibCheck": true                                 /* Skip type checking all .d.ts files. */
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tspack_core::domain::{ConfigDocument, DIRECTIVE_SET};

    #[test]
    fn fixture_satisfies_the_full_directive_set() {
        let doc = ConfigDocument::build(TSC_INIT_TEMPLATE, DIRECTIVE_SET).unwrap();
        let text = doc.to_text();
        assert!(text.contains("  \"module\": \"NodeNext\","));
        assert!(text.contains("  \"skipLibCheck\": true"));
        assert!(text.contains("\"include\": [\"src/**/*\"]"));
    }
}
