use serde::{Deserialize, Serialize};

/// User record as served by the directory. Never cached or persisted.
///
/// Every field is required; unknown fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub username: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zipcode: String,
}

impl Address {
    /// `"{street}, {city}, {zipcode}"`
    pub fn one_line(&self) -> String {
        format!("{}, {}, {}", self.street, self.city, self.zipcode)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}
