use crate::unit::{
    Class, Declaration, EnumDecl, ExportAll, Import, ImportBinding, Initializer, Interface,
    Property, SourceUnit, Variable,
};
const INDENT: &str = "  ";

///
/// Printer
///
/// Renders a source unit as TypeScript text: two-space indentation, no
/// statement terminators, single-quoted module specifiers and a trailing
/// newline. Declarations are separated by a blank line, except runs of
/// imports and runs of re-exports which stay packed together.
///

#[derive(Debug, Default)]
pub struct Printer {
    out: String,
}

impl Printer {
    #[must_use]
    pub fn print(unit: &SourceUnit) -> String {
        let mut printer = Self::default();
        let mut previous: Option<&Declaration> = None;

        for decl in &unit.declarations {
            if let Some(prev) = previous
                && !packed(prev, decl)
            {
                printer.out.push('\n');
            }
            printer.declaration(decl);
            previous = Some(decl);
        }

        printer.out
    }

    fn declaration(&mut self, decl: &Declaration) {
        match decl {
            Declaration::Import(import) => self.import(import),
            Declaration::ExportAll(export) => self.export_all(export),
            Declaration::Variable(var) => self.variable(var),
            Declaration::Class(class) => self.class(class),
            Declaration::Interface(interface) => self.interface(interface),
            Declaration::Enum(decl) => self.enumeration(decl),
        }
    }

    fn import(&mut self, import: &Import) {
        let module = quote(&import.module);

        match &import.binding {
            ImportBinding::Namespace(alias) => {
                self.line(0, &format!("import * as {alias} from {module}"));
            }
            ImportBinding::Named(names) => {
                self.line(
                    0,
                    &format!("import {{ {} }} from {module}", names.join(", ")),
                );
            }
        }
    }

    fn export_all(&mut self, export: &ExportAll) {
        self.line(0, &format!("export * from {}", quote(&export.module)));
    }

    fn variable(&mut self, var: &Variable) {
        self.docs(0, &var.docs);

        let mut head = format!("{}const {}", export_prefix(var.exported), var.name);
        if let Some(ty) = &var.type_annotation {
            head.push_str(": ");
            head.push_str(ty);
        }

        match &var.initializer {
            Initializer::Expr(expr) => self.line(0, &format!("{head} = {expr}")),
            Initializer::Object {
                open,
                properties,
                close,
            } if properties.is_empty() => self.line(0, &format!("{head} = {open}{{}}{close}")),
            Initializer::Object {
                open,
                properties,
                close,
            } => {
                self.line(0, &format!("{head} = {open}{{"));
                for property in properties {
                    self.property(property);
                }
                self.line(0, &format!("}}{close}"));
            }
        }
    }

    fn property(&mut self, property: &Property) {
        self.docs(1, &property.docs);
        self.line(1, &format!("{}: {},", property.name, property.value));
    }

    fn class(&mut self, class: &Class) {
        let mut line = format!("{}class {}", export_prefix(class.exported), class.name);
        if let Some(base) = &class.extends {
            line.push_str(" extends ");
            line.push_str(base);
        }
        line.push_str(" {}");

        self.line(0, &line);
    }

    fn interface(&mut self, interface: &Interface) {
        let mut head = format!(
            "{}interface {}",
            export_prefix(interface.exported),
            interface.name
        );
        if !interface.extends.is_empty() {
            head.push_str(" extends ");
            head.push_str(&interface.extends.join(", "));
        }

        if interface.members.is_empty() {
            self.line(0, &format!("{head} {{}}"));
            return;
        }

        self.line(0, &format!("{head} {{"));
        for member in &interface.members {
            let optional = if member.optional { "?" } else { "" };
            self.line(1, &format!("{}{optional}: {}", member.name, member.ty));
        }
        self.line(0, "}");
    }

    fn enumeration(&mut self, decl: &EnumDecl) {
        let export = export_prefix(decl.exported);

        if decl.members.is_empty() {
            self.line(0, &format!("{export}enum {} {{}}", decl.name));
            return;
        }

        self.line(0, &format!("{export}enum {} {{", decl.name));
        for member in &decl.members {
            self.line(1, &format!("{} = {},", member.name, quote(&member.value)));
        }
        self.line(0, "}");
    }

    // JSDoc block; empty lines keep their leading star
    fn docs(&mut self, depth: usize, docs: &[String]) {
        if docs.is_empty() {
            return;
        }

        self.line(depth, "/**");
        for doc in docs {
            if doc.is_empty() {
                self.line(depth, " *");
            } else {
                self.line(depth, &format!(" * {doc}"));
            }
        }
        self.line(depth, " */");
    }

    // Multi-line text is indented line by line; continuation lines already
    // carry their own relative indentation.
    fn line(&mut self, depth: usize, text: &str) {
        for line in text.lines() {
            if !line.is_empty() {
                for _ in 0..depth {
                    self.out.push_str(INDENT);
                }
                self.out.push_str(line);
            }
            self.out.push('\n');
        }
    }
}

// consecutive imports, and consecutive re-exports, share a block
const fn packed(prev: &Declaration, next: &Declaration) -> bool {
    matches!(
        (prev, next),
        (Declaration::Import(_), Declaration::Import(_))
            | (Declaration::ExportAll(_), Declaration::ExportAll(_))
    )
}

const fn export_prefix(exported: bool) -> &'static str {
    if exported { "export " } else { "" }
}

fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");

    format!("'{escaped}'")
}

///
/// TESTS
///
