//! tagenum
//!
//! Generates enum types from struct declarations whose fields carry
//! `#[tag = r#"enum:"<name>[,<description>]""#]` annotations.
//!
//! - `Builder` drives a whole run from a `build.rs` script
//! - `load_package` reads a directory or a list of source files
//! - The compiler pipeline and `TagEnumError` are re-exported
//!
//! ```no_run
//! // build.rs
//! let out_dir = std::path::PathBuf::from(std::env::var_os("OUT_DIR").unwrap());
//! tagenum::Builder::new()
//!     .input("enums")
//!     .types(["ColorEnum"])
//!     .output(out_dir.join("enum.rs"))
//!     .write()
//!     .unwrap();
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

pub use tagenum_compiler::{
    compile, generate_source, parse_source, Normalize, Options, Package, Rustfmt, SourceFile,
    TagEnumError, Verbatim, DEFAULT_PACKAGE,
};

/// File written next to the sources when no output path is given.
pub const DEFAULT_OUTPUT: &str = "enum.rs";

/// Loads every input into one package. A directory contributes each `*.rs`
/// file directly inside it, sorted by name; a file contributes itself.
/// `exclude` skips a previously generated output.
pub fn load_package<P: AsRef<Path>>(inputs: &[P], exclude: Option<&Path>) -> Result<Package, TagEnumError> {
    let excluded = exclude.and_then(|path| fs::canonicalize(path).ok());

    let mut paths = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if input.is_dir() {
            paths.extend(rust_files(input)?);
        } else {
            paths.push(input.to_path_buf());
        }
    }

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        if excluded.is_some() && fs::canonicalize(&path).ok() == excluded {
            debug!(path = %path.display(), "skipping generated output");
            continue;
        }
        let text = fs::read_to_string(&path)?;
        files.push(parse_source(&path, &text)?);
    }
    Ok(Package::new(files))
}

fn rust_files(dir: &Path) -> Result<Vec<PathBuf>, TagEnumError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "rs") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Configures and runs one generation.
#[derive(Debug, Clone)]
pub struct Builder {
    inputs:  Vec<PathBuf>,
    types:   Vec<String>,
    options: Options,
    output:  Option<PathBuf>,
    format:  bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            inputs:  Vec::new(),
            types:   Vec::new(),
            options: Options::default(),
            output:  None,
            format:  true,
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source directory or file. Defaults to `.` when none is given.
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.inputs.push(path.into());
        self
    }

    /// Adds type names to generate, in order.
    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.extend(types.into_iter().map(Into::into));
        self
    }

    /// Module name wrapping the generated code (`enums` by default).
    pub fn package(mut self, name: impl Into<String>) -> Self {
        self.options.package = name.into();
        self
    }

    /// Arguments recorded in the provenance comment.
    pub fn invocation(mut self, args: impl Into<String>) -> Self {
        self.options.invocation = args.into();
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Whether to run `rustfmt` over the result (on by default).
    pub fn format(mut self, enabled: bool) -> Self {
        self.format = enabled;
        self
    }

    /// `<dir>/enum.rs` for a single directory input, `enum.rs` otherwise.
    pub fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        match self.inputs.as_slice() {
            [dir] if dir.is_dir() => dir.join(DEFAULT_OUTPUT),
            [] => PathBuf::from(".").join(DEFAULT_OUTPUT),
            _ => PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    /// Runs the pipeline and returns the generated source.
    pub fn generate(&self) -> Result<String, TagEnumError> {
        let inputs = if self.inputs.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.inputs.clone()
        };
        let package = load_package(&inputs, Some(&self.output_path()))?;

        let mut options = self.options.clone();
        if options.invocation.is_empty() {
            options.invocation = format!("--types {}", self.types.join(","));
        }

        if self.format {
            compile(&package, &self.types, &options, &Rustfmt::from_env())
        } else {
            compile(&package, &self.types, &options, &Verbatim)
        }
    }

    /// Runs the pipeline and writes the result to `output_path`.
    pub fn write(&self) -> Result<PathBuf, TagEnumError> {
        let code = self.generate()?;
        let path = self.output_path();
        fs::write(&path, code)?;
        info!(path = %path.display(), "generated enum code written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: &str = r##"
pub struct ColorEnum {
    #[tag = r#"enum:"-""#]
    Red: (),
    #[tag = r#"enum:"blue,primary color""#]
    Blue: (),
}
"##;

    const SHAPES: &str = r##"
pub struct ShapeEnum {
    #[tag = r#"enum:"circle""#]
    Circle: (),
}
"##;

    fn source_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("colors.rs"), COLORS).unwrap();
        fs::write(dir.path().join("shapes.rs"), SHAPES).unwrap();
        fs::write(dir.path().join("notes.txt"), "not rust").unwrap();
        dir
    }

    #[test]
    fn test_load_directory_sorted() {
        let dir = source_dir();
        let package = load_package(&[dir.path()], None).unwrap();
        let names: Vec<_> = package
            .files
            .iter()
            .map(|file| file.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["colors.rs", "shapes.rs"]);
    }

    #[test]
    fn test_load_excludes_output() {
        let dir = source_dir();
        let output = dir.path().join(DEFAULT_OUTPUT);
        fs::write(&output, "pub mod enums {}").unwrap();

        let package = load_package(&[dir.path()], Some(&output)).unwrap();
        assert_eq!(package.files.len(), 2);
    }

    #[test]
    fn test_load_files() {
        let dir = source_dir();
        let package = load_package(&[dir.path().join("shapes.rs")], None).unwrap();
        assert_eq!(package.files.len(), 1);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.rs"), "pub struct {").unwrap();
        let err = load_package(&[dir.path()], None).unwrap_err();
        assert!(matches!(err, TagEnumError::ParseError { .. }), "got {:?}", err);
    }

    #[test]
    fn test_builder_default_output_path() {
        let dir = source_dir();
        let builder = Builder::new().input(dir.path());
        assert_eq!(builder.output_path(), dir.path().join(DEFAULT_OUTPUT));

        let builder = Builder::new()
            .input(dir.path().join("colors.rs"))
            .input(dir.path().join("shapes.rs"));
        assert_eq!(builder.output_path(), PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_builder_write() {
        let dir = source_dir();
        let path = Builder::new()
            .input(dir.path())
            .types(["ColorEnum", "ShapeEnum"])
            .format(false)
            .write()
            .unwrap();
        assert_eq!(path, dir.path().join(DEFAULT_OUTPUT));

        let code = fs::read_to_string(&path).unwrap();
        assert!(code.starts_with("// Code generated by \"tagenum --types ColorEnum,ShapeEnum\"; DO NOT EDIT.\n"));
        assert!(code.contains("pub struct Color {"));
        assert!(code.contains("pub struct Shape {"));

        // A second run ignores the file it wrote and produces the same text.
        let again = Builder::new()
            .input(dir.path())
            .types(["ColorEnum", "ShapeEnum"])
            .format(false)
            .generate()
            .unwrap();
        assert_eq!(code, again);
    }

    #[test]
    fn test_builder_unknown_type() {
        let dir = source_dir();
        let err = Builder::new()
            .input(dir.path())
            .types(["MissingEnum"])
            .format(false)
            .generate()
            .unwrap_err();
        assert!(matches!(err, TagEnumError::EmptyEnum(ref name) if name == "MissingEnum"));
    }
}
