use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Validation errors grouped by route (entity, then field). Messages at one
/// route keep insertion order; child routes are kept sorted so rendering is
/// deterministic.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    messages: Vec<String>,
    children: BTreeMap<String, Self>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message at this route.
    pub fn add(&mut self, message: impl ToString) {
        self.messages.push(message.to_string());
    }

    /// Merge a child tree under `route`, ignoring empty trees.
    pub fn add_child(&mut self, route: impl Into<String>, child: Self) {
        if child.is_empty() {
            return;
        }

        self.children.entry(route.into()).or_default().merge(child);
    }

    pub fn merge(&mut self, other: Self) {
        self.messages.extend(other.messages);
        for (route, child) in other.children {
            self.add_child(route, child);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of messages in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    // flatten
    // (route, message) pairs with routes joined by '.'
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.flatten_into(String::new(), &mut out);

        out
    }

    fn flatten_into(&self, prefix: String, out: &mut Vec<(String, String)>) {
        for message in &self.messages {
            out.push((prefix.clone(), message.clone()));
        }

        for (route, child) in &self.children {
            let path = if prefix.is_empty() {
                route.clone()
            } else {
                format!("{prefix}.{route}")
            };
            child.flatten_into(path, out);
        }
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (route, message)) in self.flatten().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if route.is_empty() {
                write!(f, "{message}")?;
            } else {
                write!(f, "{route}: {message}")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

// err
// format a message straight into an ErrorTree
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_ok() {
        assert!(ErrorTree::new().result().is_ok());
    }

    #[test]
    fn empty_children_are_not_recorded() {
        let mut errs = ErrorTree::new();
        errs.add_child("User", ErrorTree::new());

        assert!(errs.is_empty());
        assert_eq!(errs.len(), 0);
    }

    #[test]
    fn display_renders_routes_depth_first() {
        let mut field = ErrorTree::new();
        field.add("unknown relation target 'Ghost'");

        let mut entity = ErrorTree::new();
        entity.add("duplicate field 'id'");
        entity.add_child("author", field);

        let mut errs = ErrorTree::new();
        err!(errs, "duplicate entity name '{}'", "User");
        errs.add_child("Post", entity);

        assert_eq!(errs.len(), 3);
        assert_eq!(
            errs.to_string(),
            "duplicate entity name 'User'\n\
             Post: duplicate field 'id'\n\
             Post.author: unknown relation target 'Ghost'"
        );
    }
}
