use zodgen_config::Config;

const DEFAULT_NAMING_PREFIX: &str = "_";
const RELATED_PREFIX: &str = "Related";
const COMPLETE_PREFIX: &str = "Complete";

///
/// Naming
///
/// Exported symbol names for an entity's artifacts. Borrowed from the run's
/// configuration and never cached across runs.
///

#[derive(Clone, Copy, Debug)]
pub struct Naming<'a> {
    config: &'a Config,
}

impl<'a> Naming<'a> {
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Name of the base (relation-free) schema.
    #[must_use]
    pub fn model_name(&self, entity: &str) -> String {
        let prefix = if self.config.relation_model.is_default_naming() {
            DEFAULT_NAMING_PREFIX
        } else {
            ""
        };

        format!("{prefix}{}", self.format_model(entity))
    }

    #[must_use]
    pub fn dto_name(&self, entity: &str) -> String {
        format!("{}{}", self.config.dto_case.apply(entity), self.config.dto_suffix)
    }

    /// Name of the relation-inclusive schema. In default-naming mode it takes
    /// the unprefixed model name, superseding the base schema's public name.
    #[must_use]
    pub fn related_name(&self, entity: &str) -> String {
        if self.config.relation_model.is_default_naming() {
            self.format_model(entity)
        } else {
            self.format_model(&format!("{RELATED_PREFIX}{entity}"))
        }
    }

    fn format_model(&self, name: &str) -> String {
        format!("{}{}", self.config.model_case.apply(name), self.config.model_suffix)
    }
}

/// Structural type carrying an entity together with its relations.
#[must_use]
pub fn complete_name(entity: &str) -> String {
    format!("{COMPLETE_PREFIX}{entity}")
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use zodgen_config::{Case, RelationModel};

    fn config(f: impl FnOnce(&mut Config)) -> Config {
        let mut config = Config::default();
        f(&mut config);
        config
    }

    #[test]
    fn defaults_are_pascal_case_with_suffixes() {
        let config = Config::default();
        let naming = Naming::new(&config);

        assert_eq!(naming.model_name("User"), "UserModel");
        assert_eq!(naming.dto_name("User"), "UserDto");
        assert_eq!(naming.related_name("User"), "RelatedUserModel");
    }

    #[test]
    fn camel_case_model_names() {
        let config = config(|c| {
            c.model_case = Case::Camel;
            c.model_suffix = "Model".into();
        });
        let naming = Naming::new(&config);

        assert_eq!(naming.model_name("User"), "userModel");
        assert_eq!(naming.related_name("User"), "relatedUserModel");
    }

    #[test]
    fn dto_casing_is_independent_of_model_casing() {
        let config = config(|c| {
            c.model_case = Case::Camel;
            c.dto_case = Case::Pascal;
            c.dto_suffix = "Dto".into();
        });

        assert_eq!(Naming::new(&config).dto_name("User"), "UserDto");
    }

    #[test]
    fn default_naming_prefixes_the_base_schema_only() {
        let config = config(|c| {
            c.relation_model = RelationModel::DefaultNaming;
            c.model_case = Case::Camel;
        });
        let naming = Naming::new(&config);

        assert_eq!(naming.model_name("Post"), "_postModel");
        assert_eq!(naming.related_name("Post"), "postModel");
        assert_eq!(naming.dto_name("Post"), "PostDto");
        assert!(!naming.related_name("Post").contains("Related"));
    }

    #[test]
    fn disabled_relations_keep_plain_names() {
        let config = config(|c| c.relation_model = RelationModel::Disabled);
        assert_eq!(Naming::new(&config).model_name("Post"), "PostModel");
    }

    proptest! {
        #[test]
        fn names_end_with_their_suffix(
            entity in "[A-Z][A-Za-z0-9]{0,12}",
            suffix in "[A-Za-z]{0,6}",
            camel in any::<bool>(),
            default_naming in any::<bool>(),
        ) {
            let config = config(|c| {
                c.model_suffix = suffix.clone();
                c.dto_suffix = suffix.clone();
                c.model_case = if camel { Case::Camel } else { Case::Pascal };
                c.relation_model = if default_naming {
                    RelationModel::DefaultNaming
                } else {
                    RelationModel::Enabled
                };
            });
            let naming = Naming::new(&config);

            prop_assert!(naming.model_name(&entity).ends_with(&suffix));
            prop_assert!(naming.dto_name(&entity).ends_with(&suffix));
            prop_assert!(naming.related_name(&entity).ends_with(&suffix));
            prop_assert_eq!(naming.model_name(&entity).starts_with('_'), default_naming);
            prop_assert!(!naming.dto_name(&entity).starts_with('_'));
        }
    }
}
