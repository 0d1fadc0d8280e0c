//! Module specifiers for the user-supplied imports file.
//!
//! Paths are resolved lexically so generation stays free of filesystem
//! access: the schema location and output directory are expected to share a
//! base (both absolute, or both relative to the same working directory).

const VERBATIM_PREFIX: &str = r"\\?\";
const NODE_MODULES: &str = "/node_modules/";

///
/// ModelPaths
///
/// Locations used only to relativize the custom imports specifier.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ModelPaths {
    /// Location of the schema definition the model was parsed from.
    pub schema_path: String,

    /// Directory that receives the generated source units.
    pub output_path: String,
}

impl ModelPaths {
    #[must_use]
    pub fn new(schema_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            schema_path: schema_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Specifier importing `imports` (relative to the schema file) from the
    /// output directory.
    #[must_use]
    pub fn import_specifier(&self, imports: &str) -> String {
        let schema_dir = parent(&self.schema_path);
        let target = resolve(&schema_dir, imports);

        dot_slash(&relative(&self.output_path, &target))
    }
}

/// Normalize a path into a module specifier.
///
/// Backslashes become forward slashes and repeated slashes collapse. Paths
/// under `node_modules` become the package-relative suffix; paths that do not
/// already climb out with `../` get a `./` prefix.
#[must_use]
pub fn dot_slash(input: &str) -> String {
    let stripped = input.strip_prefix(VERBATIM_PREFIX).unwrap_or(input);
    let converted = collapse_slashes(&stripped.replace('\\', "/"));

    if let Some(index) = converted.rfind(NODE_MODULES) {
        return converted[index + NODE_MODULES.len()..].to_string();
    }
    if converted.starts_with("../") {
        return converted;
    }

    format!("./{converted}")
}

fn collapse_slashes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_slash = false;

    for c in input.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }

    out
}

///
/// Lexical path helpers
///

#[derive(Debug, Default, Eq, PartialEq)]
struct Lexical {
    absolute: bool,
    parts: Vec<String>,
}

impl Lexical {
    fn parse(path: &str) -> Self {
        let path = path.replace('\\', "/");
        let mut lexical = Self {
            absolute: path.starts_with('/'),
            parts: Vec::new(),
        };
        lexical.push_all(&path);

        lexical
    }

    fn push_all(&mut self, path: &str) {
        for part in path.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    if self.parts.last().is_some_and(|last| last != "..") {
                        self.parts.pop();
                    } else if !self.absolute {
                        // an absolute path cannot climb above `/`
                        self.parts.push(part.to_string());
                    }
                }
                _ => self.parts.push(part.to_string()),
            }
        }
    }

    fn render(&self) -> String {
        let joined = self.parts.join("/");
        if self.absolute {
            format!("/{joined}")
        } else {
            joined
        }
    }
}

fn parent(path: &str) -> String {
    let mut lexical = Lexical::parse(path);
    lexical.push_all("..");

    lexical.render()
}

fn resolve(base: &str, path: &str) -> String {
    let normalized = path.replace('\\', "/");
    if normalized.starts_with('/') {
        return Lexical::parse(&normalized).render();
    }

    let mut lexical = Lexical::parse(base);
    lexical.push_all(&normalized);

    lexical.render()
}

// relative
// path from `from` to `to`, both normalized lexically
fn relative(from: &str, to: &str) -> String {
    let from = Lexical::parse(from);
    let to = Lexical::parse(to);

    let common = from
        .parts
        .iter()
        .zip(&to.parts)
        .take_while(|(a, b)| a == b)
        .count();

    let ups = std::iter::repeat_n("..", from.parts.len() - common);
    let downs = to.parts[common..].iter().map(String::as_str);

    ups.chain(downs).collect::<Vec<_>>().join("/")
}

///
/// TESTS
///
