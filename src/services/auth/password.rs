//! bcrypt hashing / verification.
//!
//! bcrypt is deliberately slow, so both operations run on the blocking pool.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Clone, Copy, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub async fn hash(&self, plain: &str) -> Result<String, PasswordError> {
        let plain = plain.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost)).await??;
        Ok(hashed)
    }

    // bcrypt::verify compares digests in constant time.
    pub async fn verify(&self, plain: &str, hashed: &str) -> Result<bool, PasswordError> {
        let plain = plain.to_owned();
        let hashed = hashed.to_owned();
        let ok = tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hashed)).await??;
        Ok(ok)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
