//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Salted Argon2 hash, never the plaintext
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Apply the non-empty names of `update`. Empty or missing fields keep
    /// the stored value.
    pub fn apply_names(&mut self, update: UpdateUser) {
        if let Some(first_name) = update.first_name.filter(|n| !n.is_empty()) {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name.filter(|n| !n.is_empty()) {
            self.last_name = last_name;
        }
    }

    /// Replace the stored password hash
    pub fn set_password_hash(&mut self, hash: String) {
        self.password_hash = hash;
    }

    /// Replace the email address
    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    /// Refresh the last-update timestamp
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// User creation data transfer object (plaintext password)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "John"))]
    pub first_name: String,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "Doe"))]
    pub last_name: String,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "john.doe@example.com"))]
    pub email: String,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "password"))]
    pub password: String,
}

/// Record handed to the store on creation. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewUser {
    /// Attach a store-assigned id
    pub fn into_user(self, id: Uuid) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Name update data transfer object
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateUser {
    /// New first name (ignored when empty)
    #[cfg_attr(feature = "openapi", schema(example = "Jane"))]
    pub first_name: Option<String>,
    /// New last name (ignored when empty)
    pub last_name: Option<String>,
}

/// Password change data transfer object
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdatePassword {
    #[serde(default)]
    pub password: String,
}

/// Email change data transfer object
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateEmail {
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "jane.doe@example.com"))]
    pub email: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_apply_names_only_non_empty() {
        let mut user = sample_user();
        user.apply_names(UpdateUser {
            first_name: Some("Jane".to_string()),
            last_name: Some(String::new()),
        });

        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.last_name, "Doe");
    }

    #[test]
    fn test_apply_names_none_keeps_values() {
        let mut user = sample_user();
        user.apply_names(UpdateUser::default());

        assert_eq!(user.first_name, "John");
        assert_eq!(user.last_name, "Doe");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let json = serde_json::to_value(sample_user()).unwrap();

        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["firstName"], "John");
    }

    #[test]
    fn test_create_user_reads_camel_case() {
        let input: CreateUser = serde_json::from_str(
            r#"{"firstName":"John","lastName":"Doe","email":"john.doe@example.com","password":"password"}"#,
        )
        .unwrap();

        assert_eq!(input.first_name, "John");
        assert_eq!(input.last_name, "Doe");
        assert_eq!(input.password, "password");
    }

    #[test]
    fn test_new_user_into_user_keeps_fields() {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let new_user = NewUser {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            password_hash: "hash".to_string(),
            created_at: now,
            updated_at: now,
        };

        let user = new_user.into_user(id);
        assert_eq!(user.id, id);
        assert_eq!(user.created_at, now);
        assert_eq!(user.password_hash, "hash");
    }
}
