//! In-memory source units handed to a sink.
//!
//! Units are plain data: synthesis builds them, sinks print and persist
//! them. Equality is structural so two runs can be compared directly.

///
/// SourceUnit
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SourceUnit {
    /// Logical name: an entity's lower-cased name, `index` or `enums`.
    pub name: String,
    pub declarations: Vec<Declaration>,
}

impl SourceUnit {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    pub fn push(&mut self, declaration: impl Into<Declaration>) {
        self.declarations.push(declaration.into());
    }

    pub fn imports(&self) -> impl Iterator<Item = &Import> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Import(import) => Some(import),
            _ => None,
        })
    }

    /// Find an import by module specifier.
    #[must_use]
    pub fn import(&self, module: &str) -> Option<&Import> {
        self.imports().find(|i| i.module == module)
    }

    /// Find a variable statement by name.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.declarations.iter().find_map(|d| match d {
            Declaration::Variable(v) if v.name == name => Some(v),
            _ => None,
        })
    }

    #[must_use]
    pub fn class(&self, name: &str) -> Option<&Class> {
        self.declarations.iter().find_map(|d| match d {
            Declaration::Class(c) if c.name == name => Some(c),
            _ => None,
        })
    }

    #[must_use]
    pub fn interface(&self, name: &str) -> Option<&Interface> {
        self.declarations.iter().find_map(|d| match d {
            Declaration::Interface(i) if i.name == name => Some(i),
            _ => None,
        })
    }
}

///
/// Declaration
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Declaration {
    Import(Import),
    ExportAll(ExportAll),
    Variable(Variable),
    Class(Class),
    Interface(Interface),
    Enum(EnumDecl),
}

macro_rules! impl_into_declaration {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Declaration {
                fn from(decl: $ty) -> Self {
                    Self::$variant(decl)
                }
            }
        )*
    };
}

impl_into_declaration!(
    Import => Import,
    ExportAll => ExportAll,
    Variable => Variable,
    Class => Class,
    Interface => Interface,
    EnumDecl => Enum,
);

///
/// Import
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Import {
    pub module: String,
    pub binding: ImportBinding,
}

impl Import {
    #[must_use]
    pub fn namespace(alias: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            binding: ImportBinding::Namespace(alias.into()),
        }
    }

    #[must_use]
    pub fn named<I, S>(names: I, module: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            module: module.into(),
            binding: ImportBinding::Named(names.into_iter().map(Into::into).collect()),
        }
    }

    /// Names bound by a named import; empty for namespace imports.
    #[must_use]
    pub fn names(&self) -> &[String] {
        match &self.binding {
            ImportBinding::Named(names) => names,
            ImportBinding::Namespace(_) => &[],
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ImportBinding {
    Namespace(String),
    Named(Vec<String>),
}

///
/// ExportAll
/// `export * from '<module>'`
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExportAll {
    pub module: String,
}

///
/// Variable
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Variable {
    pub name: String,
    pub exported: bool,
    pub docs: Vec<String>,
    pub type_annotation: Option<String>,
    pub initializer: Initializer,
}

impl Variable {
    #[must_use]
    pub fn new(name: impl Into<String>, initializer: Initializer) -> Self {
        Self {
            name: name.into(),
            exported: false,
            docs: Vec::new(),
            type_annotation: None,
            initializer,
        }
    }

    #[must_use]
    pub const fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    #[must_use]
    pub fn with_docs<I, S>(mut self, docs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.docs = docs.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.type_annotation = Some(ty.into());
        self
    }
}

///
/// Initializer
///
/// `Object` renders as `<open>{ ...properties }<close>`, which covers both
/// `z.object({...})` and `z.lazy(() => X.extend({...}))`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Initializer {
    Expr(String),
    Object {
        open: String,
        properties: Vec<Property>,
        close: String,
    },
}

impl Initializer {
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        match self {
            Self::Object { properties, .. } => properties,
            Self::Expr(_) => &[],
        }
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties().iter().find(|p| p.name == name)
    }
}

///
/// Property
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Property {
    pub docs: Vec<String>,
    pub name: String,
    pub value: String,
}

///
/// Class
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Class {
    pub name: String,
    pub exported: bool,
    pub extends: Option<String>,
}

///
/// Interface
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Interface {
    pub name: String,
    pub exported: bool,
    pub extends: Vec<String>,
    pub members: Vec<InterfaceMember>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InterfaceMember {
    pub name: String,
    pub optional: bool,
    pub ty: String,
}

///
/// EnumDecl
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumDecl {
    pub name: String,
    pub exported: bool,
    pub members: Vec<EnumMember>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumMember {
    pub name: String,
    pub value: String,
}
