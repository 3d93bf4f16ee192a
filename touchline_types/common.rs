use uuid::Uuid;

/// Login account. Club membership lives in the profile, not here.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    password_hash: String,
}

impl User {
    pub fn new(id: Uuid, email: String, password_hash: String) -> Self {
        Self {
            id,
            email,
            password_hash,
        }
    }

    /// Argon2 PHC string.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}
