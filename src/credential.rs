use crate::defaults::Defaults;
use crate::types::Role;

/// Maps a secret entered by the reserved identity to a role.
pub trait CredentialCheck {
    fn verify(&self, secret: &str) -> Role;
}

/// Two fixed plaintext PINs. Not a security boundary.
pub struct FixedPins {
    admin: String,
    regular: String,
}

impl FixedPins {
    pub fn new(admin: impl Into<String>, regular: impl Into<String>) -> Self {
        Self { admin: admin.into(), regular: regular.into() }
    }
}

impl Default for FixedPins {
    fn default() -> Self {
        Self::new(Defaults::ADMIN_PIN, Defaults::REGULAR_PIN)
    }
}

impl CredentialCheck for FixedPins {
    fn verify(&self, secret: &str) -> Role {
        // Exact match, no trimming or case folding.
        if secret == self.admin {
            Role::Admin
        } else if secret == self.regular {
            Role::Regular
        } else {
            Role::Denied
        }
    }
}
