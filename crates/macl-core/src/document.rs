//! In-memory ACL document and its mutation API.
//!
//! A [`Document`] is what [`parse`](crate::parse) produces and what
//! [`serialize`](crate::serialize) consumes. Users are kept in declaration
//! order; every mutation either succeeds completely or leaves the document
//! untouched.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grant::{Capabilities, Grant};

/// A user section: the `user` line and the `topic` lines under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAcl {
    /// Username as written after `user`.
    pub username: String,
    /// Grants in file order.
    pub grants: Vec<Grant>,
}

impl UserAcl {
    /// Creates a user with no grants.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            grants: Vec::new(),
        }
    }

    fn remove_matching(&mut self, capabilities: Capabilities, topic: &str) -> usize {
        let before = self.grants.len();
        self.grants.retain(|grant| !grant.matches(capabilities, topic));
        before - self.grants.len()
    }
}

/// A parsed ACL file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    top_level_directives: Vec<String>,
    users: Vec<UserAcl>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines kept verbatim ahead of the first user section.
    pub fn top_level_directives(&self) -> &[String] {
        &self.top_level_directives
    }

    /// Users in declaration order.
    pub fn users(&self) -> impl Iterator<Item = &UserAcl> {
        self.users.iter()
    }

    /// Usernames in declaration order.
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.users.iter().map(|user| user.username.as_str())
    }

    /// Looks up a user's grants.
    pub fn user(&self, username: &str) -> Option<&[Grant]> {
        self.find(username).map(|user| user.grants.as_slice())
    }

    /// Returns true if the user is declared.
    pub fn contains_user(&self, username: &str) -> bool {
        self.find(username).is_some()
    }

    /// Returns true if there are no directives and no users.
    pub fn is_empty(&self) -> bool {
        self.top_level_directives.is_empty() && self.users.is_empty()
    }

    /// Declares a new user with no grants, after all existing users.
    pub fn add_user(&mut self, username: &str) -> Result<()> {
        if self.contains_user(username) {
            return Err(Error::user_exists(username));
        }
        self.users.push(UserAcl::new(username));
        Ok(())
    }

    /// Removes a user and all of its grants.
    pub fn remove_user(&mut self, username: &str) -> Result<()> {
        let index = self
            .users
            .iter()
            .position(|user| user.username == username)
            .ok_or_else(|| Error::user_not_found(username))?;
        self.users.remove(index);
        Ok(())
    }

    /// Appends a grant to a user, declaring the user first if needed.
    pub fn add_grant(&mut self, username: &str, capabilities: Capabilities, topic: &str) {
        self.open_user(username)
            .grants
            .push(Grant::new(capabilities, topic));
    }

    /// Removes every grant of `username` with exactly these capabilities and
    /// topic. Returns how many were removed.
    pub fn remove_grant(
        &mut self,
        username: &str,
        capabilities: Capabilities,
        topic: &str,
    ) -> Result<usize> {
        let user = self
            .find_mut(username)
            .ok_or_else(|| Error::user_not_found(username))?;
        Ok(user.remove_matching(capabilities, topic))
    }

    /// Removes every grant with exactly these capabilities and topic from all
    /// users. Returns how many were removed.
    pub fn remove_grant_all_users(&mut self, capabilities: Capabilities, topic: &str) -> usize {
        self.users
            .iter_mut()
            .map(|user| user.remove_matching(capabilities, topic))
            .sum()
    }

    pub(crate) fn push_directive(&mut self, line: impl Into<String>) {
        self.top_level_directives.push(line.into());
    }

    /// Returns the user's section, appending an empty one if it is new.
    pub(crate) fn open_user(&mut self, username: &str) -> &mut UserAcl {
        let index = match self.users.iter().position(|u| u.username == username) {
            Some(index) => index,
            None => {
                self.users.push(UserAcl::new(username));
                self.users.len() - 1
            }
        };
        &mut self.users[index]
    }

    fn find(&self, username: &str) -> Option<&UserAcl> {
        self.users.iter().find(|user| user.username == username)
    }

    fn find_mut(&mut self, username: &str) -> Option<&mut UserAcl> {
        self.users.iter_mut().find(|user| user.username == username)
    }
}
