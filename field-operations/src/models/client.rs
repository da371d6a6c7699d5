//! Client model.

use domain_core::query::Searchable;
use domain_core::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateClient {
    #[validate(length(min = 1, message = "Client name cannot be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Client {
    pub fn try_new(input: CreateClient) -> Result<Self> {
        input.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            address: input.address,
        })
    }
}

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        [Some(&self.name), self.email.as_ref(), self.phone.as_ref(), self.address.as_ref()]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}
