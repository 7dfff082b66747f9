//! Credential material returned by the provider's service-key API

use serde_json::{Map, Value};

/// Raw credentials of one service key: field name to arbitrary JSON value
pub type CredentialBundle = Map<String, Value>;

/// The public and private halves of an instance's service keys.
///
/// Either half is empty when no key name was configured for it or when no
/// returned key belongs to the resolved instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedKeyPair {
    pub public: CredentialBundle,
    pub private: CredentialBundle,
}

impl ResolvedKeyPair {
    pub fn new(public: CredentialBundle, private: CredentialBundle) -> Self {
        Self { public, private }
    }

    /// True when neither half carries any credentials
    pub fn is_empty(&self) -> bool {
        self.public.is_empty() && self.private.is_empty()
    }

    /// The bundle credential fields are read from: the public half, or the
    /// private half when no public key was found.
    pub fn primary(&self) -> &CredentialBundle {
        if self.public.is_empty() {
            &self.private
        } else {
            &self.public
        }
    }
}
