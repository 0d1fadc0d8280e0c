use serde::Serialize;

const PRETTY_NAME: &str = "NestJS Zod Schemas";
const DEFAULT_OUTPUT: &str = "./src/zod";

///
/// Manifest
///
/// Self-description reported to the host schema tool.
///

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub version: &'static str,
    pub pretty_name: &'static str,
    pub default_output: &'static str,
}

impl Manifest {
    #[must_use]
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            pretty_name: PRETTY_NAME,
            default_output: DEFAULT_OUTPUT,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&Manifest::current())?);

    Ok(())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_uses_camel_case_keys() {
        let value = serde_json::to_value(Manifest::current()).unwrap();

        assert_eq!(value["prettyName"], "NestJS Zod Schemas");
        assert_eq!(value["defaultOutput"], "./src/zod");
        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    }
}
