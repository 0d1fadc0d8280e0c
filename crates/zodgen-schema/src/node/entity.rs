use crate::prelude::*;

///
/// Entity
///
/// A named record type with an ordered field list. The name is the entity's
/// identity within a model.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<Field>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Entity {
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
            documentation: None,
        }
    }

    /// Fields that carry plain values, in declaration order.
    pub fn value_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_relation())
    }

    /// Fields that reference another entity, in declaration order.
    pub fn relation_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_relation())
    }

    pub fn enum_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_enum())
    }

    #[must_use]
    pub fn has_relations(&self) -> bool {
        self.fields.iter().any(Field::is_relation)
    }

    #[must_use]
    pub fn has_decimal(&self) -> bool {
        self.fields.iter().any(Field::is_decimal)
    }

    #[must_use]
    /// Module name of this entity's generated source unit.
    pub fn module_name(&self) -> String {
        self.name.to_lowercase()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Entity {
        Entity::new(
            "Post",
            vec![
                Field::scalar("id", "Int"),
                Field::relation("author", "User"),
                Field::enumeration("status", "Status"),
                Field::relation("tags", "Tag").list(),
                Field::scalar("body", "String").optional(),
            ],
        )
    }

    #[test]
    fn value_and_relation_fields_partition_in_order() {
        let post = post();

        let values: Vec<_> = post.value_fields().map(|f| f.name.as_str()).collect();
        let relations: Vec<_> = post.relation_fields().map(|f| f.name.as_str()).collect();

        assert_eq!(values, ["id", "status", "body"]);
        assert_eq!(relations, ["author", "tags"]);
        assert!(post.has_relations());
    }

    #[test]
    fn module_name_is_lower_cased_entity_name() {
        assert_eq!(Entity::new("BlogPost", vec![]).module_name(), "blogpost");
    }

    #[test]
    fn deserializes_dmmf_field_shape() {
        let json = r#"{
            "name": "User",
            "fields": [
                { "name": "id", "kind": "scalar", "type": "Int", "isList": false, "isRequired": true },
                { "name": "posts", "kind": "object", "type": "Post", "isList": true, "isRequired": true },
                { "name": "bio", "kind": "scalar", "type": "String", "isRequired": false,
                  "documentation": "About me\n@z.string().max(280)" }
            ]
        }"#;

        let user: Entity = serde_json::from_str(json).unwrap();

        assert_eq!(user.fields.len(), 3);
        assert!(user.fields[1].is_relation());
        assert!(user.fields[1].is_list);
        assert!(user.fields[2].is_optional());
        assert_eq!(
            user.fields[2].documentation.as_deref(),
            Some("About me\n@z.string().max(280)")
        );
    }
}
