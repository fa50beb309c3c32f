//! Local account registry and session.
//!
//! Accounts live entirely in the key-value store: the registry is one
//! JSON array under `ff.users`, the active session is one JSON record
//! under `ff.currentUser`. There is no trust boundary here -- credentials
//! gate the UI, nothing more.
//!
//! `register` and `authenticate` are async: the password digest runs on a
//! blocking worker and suspends the caller until it completes. Callers
//! are expected not to overlap calls for the same credential form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::{AuthError, CoreError, Result};
use crate::storage::{keys, Loaded, Store};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// A registered user.
///
/// Never updated or deleted after creation. `email` is stored in
/// normalized form; `pass_hash` is a one-way digest, the plaintext
/// password is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub pass_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Lowercase and trim an email for equality comparisons.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Lowercase hex SHA-256 of the password.
///
/// Deterministic and unsalted: the stored hash must be reproducible from
/// the password alone, so authentication can compare digests exactly.
fn digest_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Run the digest on a blocking worker.
async fn hash_password(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || digest_password(&password))
        .await
        .map_err(|e| CoreError::Custom(format!("hashing task failed: {e}")))
}

/// Durable registry of users plus the current session pointer.
pub struct AccountStore<'a> {
    store: &'a Store,
}

impl<'a> AccountStore<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create an account and open a session for it.
    ///
    /// # Errors
    /// [`AuthError::EmailInUse`] if another account has the same
    /// normalized email; [`AuthError::WeakPassword`] if the password is
    /// shorter than [`MIN_PASSWORD_LEN`] characters.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let email = normalize_email(email);
        let users = self.users()?;

        if users.iter().any(|u| normalize_email(&u.email) == email) {
            return Err(AuthError::EmailInUse.into());
        }

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword.into());
        }

        let pass_hash = hash_password(password.to_string()).await?;

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            email,
            pass_hash,
            created_at: Utc::now(),
        };

        let mut users = users;
        users.push(user.clone());
        self.store.set_json(keys::USERS, &users)?;
        self.store.set_json(keys::CURRENT_USER, &user)?;

        Ok(user)
    }

    /// Look up an account by email and verify the password, opening a
    /// session on success.
    ///
    /// # Errors
    /// [`AuthError::InvalidCredentials`] for an unknown email or a digest
    /// mismatch; the session is left untouched on failure.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let email = normalize_email(email);
        let users = self.users()?;

        let Some(user) = users
            .into_iter()
            .find(|u| normalize_email(&u.email) == email)
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let pass_hash = hash_password(password.to_string()).await?;
        if user.pass_hash != pass_hash {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.store.set_json(keys::CURRENT_USER, &user)?;
        Ok(user)
    }

    /// Clear the session pointer. User and task data stays persisted.
    pub fn end_session(&self) -> Result<()> {
        self.store.remove(keys::CURRENT_USER)?;
        Ok(())
    }

    /// The active user, or `None` when logged out.
    ///
    /// A corrupt session record is cleared and reads as logged out.
    pub fn current_session(&self) -> Result<Option<User>> {
        match self.store.get_json::<User>(keys::CURRENT_USER)? {
            Loaded::Present(user) => Ok(Some(user)),
            Loaded::Missing => Ok(None),
            Loaded::Corrupt => {
                self.store.remove(keys::CURRENT_USER)?;
                Ok(None)
            }
        }
    }

    /// All registered users. Corrupt or missing registry reads as empty.
    fn users(&self) -> Result<Vec<User>> {
        Ok(self.store.get_json(keys::USERS)?.or_default())
    }
}
