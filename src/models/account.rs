//! Account data models and input validation.
//!
//! This module defines:
//! - `Account`: database entity, also the response body returned to clients
//! - `AccountCandidate`: untrusted request body for creating accounts
//! - `NewAccount`: normalized, validated input ready for insertion

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

use super::validation::{FieldError, ValidationError};

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. `id` comes from a sequence and
/// `created_at` from `DEFAULT NOW()`, so both are assigned exactly once by
/// the database at insertion.
///
/// # Balance Storage
///
/// Balances are `NUMERIC` in PostgreSQL and [`Decimal`] in Rust. They are
/// serialized as JSON strings (`"10.50"`) so clients never see a float.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Surrogate identity assigned by the database
    pub id: i64,

    /// Reference to an external user; not checked against any user table
    pub user_id: i64,

    /// Current balance
    pub balance: Decimal,

    /// Insertion timestamp
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a new account, before validation.
///
/// Built from a JSON object only. Fields are kept as raw JSON values so
/// that missing and mistyped fields are reported per field instead of
/// failing the whole body at once. Unknown keys are dropped.
///
/// # JSON Example
///
/// ```json
/// {
///   "user_id": 42,
///   "balance": "100.25"
/// }
/// ```
#[derive(Debug, Default)]
pub struct AccountCandidate {
    pub user_id: Option<Value>,
    pub balance: Option<Value>,
}

impl From<Map<String, Value>> for AccountCandidate {
    fn from(mut object: Map<String, Value>) -> Self {
        Self {
            user_id: object.remove("user_id"),
            balance: object.remove("balance"),
        }
    }
}

/// Validated input for the insert. Carries no `id` or `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub user_id: i64,
    pub balance: Decimal,
}

impl AccountCandidate {
    /// Validate the candidate into a [`NewAccount`].
    ///
    /// # Rules
    ///
    /// - `user_id`: required JSON integer within `i64`
    /// - `balance`: required JSON number or decimal string, parsed exactly
    ///
    /// All failing fields are reported together.
    pub fn validate(&self) -> Result<NewAccount, ValidationError> {
        let (user_id, balance) = ValidationError::zip(
            parse_user_id(self.user_id.as_ref()),
            parse_balance(self.balance.as_ref()),
        )?;

        Ok(NewAccount { user_id, balance })
    }
}

/// Raw `?user_id=` filter for account listings.
#[derive(Debug, Default, Deserialize)]
pub struct AccountFilterParams {
    pub user_id: Option<String>,
}

/// Equality filters applied to a listing. `None` matches every account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountFilter {
    pub user_id: Option<i64>,
}

impl AccountFilterParams {
    pub fn validate(&self) -> Result<AccountFilter, FieldError> {
        let user_id = self
            .user_id
            .as_deref()
            .map(|raw| {
                raw.parse::<i64>()
                    .map_err(|_| FieldError::new("user_id", "must be an integer"))
            })
            .transpose()?;

        Ok(AccountFilter { user_id })
    }
}

impl AccountFilter {
    /// Whether `account` passes every filter that is set.
    pub fn matches(&self, account: &Account) -> bool {
        self.user_id.is_none_or(|user_id| account.user_id == user_id)
    }
}

fn parse_user_id(value: Option<&Value>) -> Result<i64, FieldError> {
    match value {
        None | Some(Value::Null) => Err(FieldError::new("user_id", "field required")),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| FieldError::new("user_id", "must be an integer")),
        Some(_) => Err(FieldError::new("user_id", "must be an integer")),
    }
}

fn parse_balance(value: Option<&Value>) -> Result<Decimal, FieldError> {
    let invalid = || FieldError::new("balance", "must be a decimal number");

    let literal = match value {
        None | Some(Value::Null) => return Err(FieldError::new("balance", "field required")),
        // arbitrary_precision keeps the literal exactly as the client sent it
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(invalid()),
    };

    Decimal::from_str(&literal)
        .or_else(|_| Decimal::from_scientific(&literal))
        .map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidate(body: Value) -> AccountCandidate {
        match body {
            Value::Object(object) => object.into(),
            other => panic!("expected an object, got {other}"),
        }
    }

    fn candidate_from_str(body: &str) -> AccountCandidate {
        serde_json::from_str::<Map<String, Value>>(body).unwrap().into()
    }

    #[test]
    fn accepts_integer_user_and_string_balance() {
        let new = candidate(json!({"user_id": 42, "balance": "100.25"}))
            .validate()
            .unwrap();

        assert_eq!(new.user_id, 42);
        assert_eq!(new.balance, Decimal::from_str("100.25").unwrap());
    }

    #[test]
    fn accepts_numeric_balance_without_float_drift() {
        let new = candidate(json!({"user_id": 1, "balance": 0.1}))
            .validate()
            .unwrap();
        assert_eq!(new.balance.to_string(), "0.1");

        let new = candidate(json!({"user_id": 1, "balance": 250}))
            .validate()
            .unwrap();
        assert_eq!(new.balance, Decimal::from(250));
    }

    #[test]
    fn numeric_balance_keeps_every_digit() {
        let new = candidate_from_str(r#"{"user_id": 1, "balance": 12345678901234567.89}"#)
            .validate()
            .unwrap();
        assert_eq!(new.balance.to_string(), "12345678901234567.89");

        let new = candidate_from_str(r#"{"user_id": 1, "balance": 0.30000000000000000001}"#)
            .validate()
            .unwrap();
        assert_eq!(new.balance.to_string(), "0.30000000000000000001");
    }

    #[test]
    fn array_body_is_not_an_object() {
        assert!(serde_json::from_str::<Map<String, Value>>(r#"[42, "10.00"]"#).is_err());
    }

    #[test]
    fn filter_parses_optional_user_id() {
        let none = AccountFilterParams::default().validate().unwrap();
        assert_eq!(none, AccountFilter { user_id: None });

        let params = AccountFilterParams {
            user_id: Some("42".to_string()),
        };
        assert_eq!(params.validate().unwrap().user_id, Some(42));

        let params = AccountFilterParams {
            user_id: Some("abc".to_string()),
        };
        assert_eq!(params.validate().unwrap_err().field, "user_id");
    }

    #[test]
    fn filter_matches_on_user_id() {
        let account = Account {
            id: 1,
            user_id: 5,
            balance: Decimal::ZERO,
            created_at: Utc::now(),
        };

        assert!(AccountFilter::default().matches(&account));
        assert!(AccountFilter { user_id: Some(5) }.matches(&account));
        assert!(!AccountFilter { user_id: Some(6) }.matches(&account));
    }

    #[test]
    fn accepts_negative_balance() {
        let new = candidate(json!({"user_id": 1, "balance": "-5.00"}))
            .validate()
            .unwrap();
        assert!(new.balance.is_sign_negative());
    }

    #[test]
    fn missing_user_id_is_reported() {
        let err = candidate(json!({"balance": "1.00"})).validate().unwrap_err();

        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].field, "user_id");
        assert_eq!(err.errors()[0].message, "field required");
    }

    #[test]
    fn non_numeric_balance_is_reported() {
        let err = candidate(json!({"user_id": 3, "balance": "lots"}))
            .validate()
            .unwrap_err();

        assert_eq!(err.errors()[0].field, "balance");
        assert_eq!(err.errors()[0].message, "must be a decimal number");
    }

    #[test]
    fn wrong_types_are_rejected() {
        for body in [
            json!({"user_id": "7", "balance": "1"}),
            json!({"user_id": 7.5, "balance": "1"}),
            json!({"user_id": true, "balance": "1"}),
        ] {
            let err = candidate(body).validate().unwrap_err();
            assert_eq!(err.errors()[0].field, "user_id");
        }

        let err = candidate(json!({"user_id": 1, "balance": [1]}))
            .validate()
            .unwrap_err();
        assert_eq!(err.errors()[0].field, "balance");
    }

    #[test]
    fn every_failing_field_is_reported() {
        let err = candidate(json!({})).validate().unwrap_err();
        let fields: Vec<_> = err.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["user_id", "balance"]);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let new = candidate(json!({"user_id": 9, "balance": "2", "id": 100}))
            .validate()
            .unwrap();
        assert_eq!(new.user_id, 9);
    }

    #[test]
    fn balance_serializes_as_string() {
        let account = Account {
            id: 1,
            user_id: 2,
            balance: Decimal::from_str("10.50").unwrap(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["balance"], json!("10.50"));
        assert_eq!(json["id"], json!(1));
    }
}
