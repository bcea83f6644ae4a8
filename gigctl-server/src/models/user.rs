//! User entity
//!
//! Every column except `id` is nullable. Input bodies must still name each
//! key, but any of them may be `null`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record as stored and rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
    /// Short role code, e.g. `customer` or `executor`.
    pub role: Option<String>,
    pub phone: Option<String>,
}

/// Writable user fields (POST and PUT bodies, fixtures).
///
/// `Option::deserialize` keeps a missing key an error while letting an
/// explicit `null` through as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserFields {
    #[serde(deserialize_with = "Option::deserialize")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub age: Option<i64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub email: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub role: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub phone: Option<String>,
}

impl User {
    /// The user's writable fields, without the identity.
    pub fn fields(&self) -> UserFields {
        UserFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            email: self.email.clone(),
            role: self.role.clone(),
            phone: self.phone.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fields_reject_unknown_key() {
        let err = serde_json::from_value::<UserFields>(json!({
            "first_name": "Ann",
            "last_name": "Lee",
            "age": 30,
            "email": "a@x.com",
            "role": "customer",
            "phone": "555",
            "nickname": "annie"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("unknown field `nickname`"));
    }

    #[test]
    fn fields_reject_id() {
        let result = serde_json::from_value::<UserFields>(json!({
            "id": 7,
            "first_name": "Ann",
            "last_name": "Lee",
            "age": 30,
            "email": "a@x.com",
            "role": "customer",
            "phone": "555"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn fields_require_every_key() {
        let err = serde_json::from_value::<UserFields>(json!({
            "first_name": "Ann",
            "last_name": "Lee",
            "age": 30,
            "email": "a@x.com",
            "role": "customer"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("missing field `phone`"));
    }

    #[test]
    fn explicit_null_is_accepted() {
        let fields: UserFields = serde_json::from_value(json!({
            "first_name": "Ann",
            "last_name": null,
            "age": null,
            "email": null,
            "role": "customer",
            "phone": "555"
        }))
        .unwrap();
        assert_eq!(fields.first_name.as_deref(), Some("Ann"));
        assert_eq!(fields.last_name, None);
        assert_eq!(fields.age, None);
        assert_eq!(fields.email, None);
    }

    #[test]
    fn age_wider_than_32_bits_is_kept() {
        let fields: UserFields = serde_json::from_value(json!({
            "first_name": "Ann",
            "last_name": "Lee",
            "age": 4_294_967_296_i64,
            "email": "a@x.com",
            "role": "customer",
            "phone": "555"
        }))
        .unwrap();
        assert_eq!(fields.age, Some(4_294_967_296));
    }

    #[test]
    fn user_renders_all_keys() {
        let user = User {
            id: 1,
            first_name: Some("Ann".into()),
            last_name: Some("Lee".into()),
            age: Some(30),
            email: None,
            role: Some("customer".into()),
            phone: Some("555".into()),
        };
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({
                "id": 1,
                "first_name": "Ann",
                "last_name": "Lee",
                "age": 30,
                "email": null,
                "role": "customer",
                "phone": "555"
            })
        );
    }
}
