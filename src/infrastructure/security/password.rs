use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id with the crate defaults. Hashing and verification both run on
/// the blocking pool.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

async fn off_executor<T, F>(work: F) -> ApplicationResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> ApplicationResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| ApplicationError::infrastructure(format!("password task failed: {err}")))?
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        off_executor(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))
        })
        .await
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        off_executor(move || {
            let parsed = PasswordHash::new(&expected_hash)
                .map_err(|err| ApplicationError::infrastructure(format!("stored hash unreadable: {err}")))?;
            match Argon2::default().verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(()),
                Err(password_hash::Error::Password) => {
                    Err(ApplicationError::unauthorized("invalid credentials"))
                }
                Err(err) => Err(ApplicationError::infrastructure(err.to_string())),
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify() {
        let hasher = Argon2PasswordHasher;
        let hash = hasher.hash("rahasia123").await.unwrap();
        assert!(hash.starts_with("$argon2"));
        hasher.verify("rahasia123", &hash).await.unwrap();

        let err = hasher.verify("salah", &hash).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));

        let err = hasher.verify("rahasia123", "bukan-hash").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Infrastructure(_)));
    }
}
