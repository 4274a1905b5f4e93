//! JSON shapes printed by the `users` commands.

use ud_directory::DirectoryUser;

use serde::Serialize;

/// One row of the user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserListItem {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl From<&DirectoryUser> for UserListItem {
    fn from(user: &DirectoryUser) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Detail card for a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDetails {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub contact: ContactInfo,
    pub location: String,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub website: String,
}

impl From<&DirectoryUser> for UserDetails {
    fn from(user: &DirectoryUser) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            username: format!("@{}", user.username),
            contact: ContactInfo {
                email: user.email.clone(),
                phone: user.phone.clone(),
                website: user.website.clone(),
            },
            location: user.address.one_line(),
            company: user.company.name.clone(),
        }
    }
}
