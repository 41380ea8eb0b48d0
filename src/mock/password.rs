use bcrypt::{hash, verify};

use crate::mock::error::MockError;

// Fixture logins hash on every boot; keep the work factor low.
const MOCK_COST: u32 = 4;

pub fn hash_password(password: &str) -> Result<String, MockError> {
    Ok(hash(password, MOCK_COST)?)
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_the_original_password() {
        let hashed = hash_password("password123").unwrap();
        assert!(verify_password("password123", &hashed));
        assert!(!verify_password("password124", &hashed));
        assert!(!verify_password("password123", "not-a-bcrypt-hash"));
    }
}
