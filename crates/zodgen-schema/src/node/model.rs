use crate::{Error, prelude::*};

///
/// Model
///
/// Resolved data model for one generation run. Entity and enum order is the
/// declaration order of the source schema and is preserved by every consumer.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Model {
    #[serde(default)]
    pub models: Vec<Entity>,

    #[serde(default)]
    pub enums: Vec<Enum>,
}

impl Model {
    #[must_use]
    pub const fn new(models: Vec<Entity>, enums: Vec<Enum>) -> Self {
        Self { models, enums }
    }

    /// Parse a DMMF datamodel document.
    ///
    /// Accepts either the bare datamodel (`{ "models": [...], "enums": [...] }`)
    /// or a full DMMF document wrapping it under `datamodel`.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let datamodel = match value {
            serde_json::Value::Object(mut map) if map.contains_key("datamodel") => map
                .remove("datamodel")
                .unwrap_or(serde_json::Value::Null),
            other => other,
        };

        Ok(serde_json::from_value(datamodel)?)
    }

    #[must_use]
    pub fn get_entity(&self, name: &str) -> Option<&Entity> {
        self.models.iter().find(|e| e.name == name)
    }

    #[must_use]
    pub fn get_enum(&self, name: &str) -> Option<&Enum> {
        self.enums.iter().find(|e| e.name == name)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_accepts_wrapped_datamodel() {
        let json = r#"{
            "datamodel": {
                "models": [{ "name": "User", "fields": [] }],
                "enums": [{ "name": "Role", "values": [{ "name": "ADMIN" }, { "name": "USER" }] }]
            }
        }"#;

        let model = Model::from_json(json).unwrap();

        assert_eq!(model.models[0].name, "User");
        let role = model.get_enum("Role").unwrap();
        assert_eq!(role.members().collect::<Vec<_>>(), ["ADMIN", "USER"]);
    }

    #[test]
    fn from_json_accepts_bare_datamodel() {
        let model = Model::from_json(r#"{ "models": [{ "name": "Post" }] }"#).unwrap();

        assert!(model.get_entity("Post").is_some());
        assert!(model.enums.is_empty());
    }

    #[test]
    fn from_json_reports_malformed_documents() {
        let err = Model::from_json("{ \"models\": 3 }").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
