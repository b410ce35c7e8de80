//! The permission strings reported by the server.

use std::collections::HashSet;

const PERM_SEP: char = ' ';

/// A single named permission, e.g. `edit`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permission(pub String);

impl From<&str> for Permission {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The set of permissions granted to a user.
///
/// The server reports permissions as one space-separated string; this type
/// parses it into a set for membership checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Permissions {
    perms: HashSet<Permission>,
}

impl Permissions {
    /// Parses a space-separated permission string. Surrounding whitespace is
    /// trimmed and empty tokens are dropped, so the empty string parses to
    /// the empty set.
    pub fn from_string(permstr: &str) -> Self {
        let perms = permstr
            .trim()
            .split(PERM_SEP)
            .filter(|p| !p.is_empty())
            .map(Permission::from)
            .collect();
        Self { perms }
    }

    /// True if `perm` was granted.
    pub fn has_permission(&self, perm: &Permission) -> bool {
        self.perms.contains(perm)
    }

    /// True if no permissions were granted.
    pub fn is_empty(&self) -> bool {
        self.perms.is_empty()
    }

    /// Number of granted permissions.
    pub fn len(&self) -> usize {
        self.perms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_space_separated_permissions() {
        let perms = Permissions::from_string("edit root");
        assert_eq!(perms.len(), 2);
        assert!(perms.has_permission(&Permission::from("edit")));
        assert!(perms.has_permission(&Permission::from("root")));
        assert!(!perms.has_permission(&Permission::from("admin")));
    }

    #[test]
    fn empty_string_is_the_empty_set() {
        assert!(Permissions::from_string("").is_empty());
        assert!(Permissions::from_string("   ").is_empty());
    }

    #[test]
    fn extra_separators_are_dropped() {
        let perms = Permissions::from_string("  edit   root ");
        assert_eq!(perms.len(), 2);
        assert!(perms.has_permission(&Permission::from("edit")));
    }
}
