use std::{fmt::Display, ops::Deref};

use serde::Serialize;

use super::format_abbreviated;

/// The name of a repository.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(pub String);

impl Deref for RepositoryName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The login of the account that owns a repository.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OwnerLogin(pub String);

impl Deref for OwnerLogin {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for OwnerLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The number of stars a repository has.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarsCounter(pub u64);

impl StarsCounter {
    /// Returns the star count abbreviated with a magnitude suffix, e.g. `1.5k`.
    pub fn abbreviated(&self) -> String {
        format_abbreviated(self.0)
    }
}

impl Deref for StarsCounter {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for StarsCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recently created repository returned by the search endpoint.
///
/// Items are never modified once fetched.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryItem {
    /// The name of the repository.
    name: RepositoryName,

    /// The description of the repository, absent when the owner did not set one.
    description: Option<String>,

    /// The number of stars at fetch time.
    stars: StarsCounter,

    /// The login of the owner.
    username: OwnerLogin,

    /// The avatar image URL of the owner.
    avatar: String,
}

impl RepositoryItem {
    /// Creates a new `RepositoryItem` instance.
    pub fn new(
        name: &str,
        description: Option<&str>,
        stars: u64,
        username: &str,
        avatar: &str,
    ) -> Self {
        Self {
            name: RepositoryName(name.to_string()),
            description: description.map(|description| description.to_string()),
            stars: StarsCounter(stars),
            username: OwnerLogin(username.to_string()),
            avatar: avatar.to_string(),
        }
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// Retrieves the repository description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Retrieves the star count.
    pub fn stars(&self) -> &StarsCounter {
        &self.stars
    }

    /// Retrieves the owner login.
    pub fn username(&self) -> &OwnerLogin {
        &self.username
    }

    /// Retrieves the owner avatar URL.
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Computes the key of the item at `index` in a rendered list.
    ///
    /// The key is positional: the same owner commonly appears several times in a list.
    pub fn list_key(&self, index: usize) -> String {
        format!("{}-{index}", self.username)
    }

    /// Creates a dummy `RepositoryItem` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(name: &str) -> Self {
        Self::new(
            name,
            Some("A dummy repository"),
            1500,
            "owner-1",
            "https://avatars.example.com/u/1",
        )
    }
}

impl Display for RepositoryItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} | \u{2605} {}",
            self.name,
            self.description.as_deref().unwrap_or_default(),
            self.username,
            self.stars.abbreviated()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_key_combines_username_and_index() {
        let item = RepositoryItem::dummy("repository-1");

        assert_eq!("owner-1-0", item.list_key(0));
        assert_eq!("owner-1-7", item.list_key(7));
    }

    #[test]
    fn display_renders_abbreviated_stars() {
        let item = RepositoryItem::dummy("repository-1");

        assert_eq!(
            "repository-1 | A dummy repository | owner-1 | \u{2605} 1.5k",
            item.to_string()
        );
    }

    #[test]
    fn display_renders_missing_description_as_empty() {
        let item = RepositoryItem::new("repository-2", None, 12000, "owner-2", "avatar");

        assert_eq!(None, item.description());
        assert_eq!("repository-2 |  | owner-2 | \u{2605} 12k", item.to_string());
    }

    #[test]
    fn serializes_nullable_description() {
        let item = RepositoryItem::new("repository-2", None, 3, "owner-2", "avatar");

        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(
            serde_json::json!({
                "name": "repository-2",
                "description": null,
                "stars": 3,
                "username": "owner-2",
                "avatar": "avatar"
            }),
            value
        );
    }
}
