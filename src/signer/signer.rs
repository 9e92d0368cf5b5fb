//! Request signing for the INDX trade API
//!
//! Every request is authenticated by a signature computed as
//! `base64(sha256(fields.join(";")))`. The field list always starts with
//! login, password and culture; all endpoints except Tools then add the
//! WMID, followed by endpoint-specific values in a fixed order.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::signer::Config;
use crate::types::{ApiContext, INDX_API_CULTURE, SIGNATURE_SEPARATOR};

/// INDX request signer
///
/// Holds the account credentials and derives the per-request
/// [`ApiContext`]. Credentials never change after construction.
#[derive(Clone)]
pub struct IndxSigner {
    login: String,
    password: String,
    wmid: String,
}

impl IndxSigner {
    /// Create a new signer from credentials
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        wmid: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            wmid: wmid.into(),
        }
    }

    /// Create a signer from the credentials in a [`Config`]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.login.clone(),
            config.password.clone(),
            config.wmid.clone(),
        )
    }

    /// Account login
    pub fn login(&self) -> &str {
        &self.login
    }

    /// WMID of the trading account
    pub fn wmid(&self) -> &str {
        &self.wmid
    }

    /// Hash the semicolon-joined fields and base64 encode the digest
    pub fn sign(fields: &[&str]) -> String {
        let payload = fields.join(SIGNATURE_SEPARATOR);
        let digest = Sha256::digest(payload.as_bytes());
        BASE64.encode(digest)
    }

    /// Signature over `login;password;culture`, used only by Tools
    pub fn public_signature(&self) -> String {
        Self::sign(&[self.login.as_str(), self.password.as_str(), INDX_API_CULTURE])
    }

    /// Signature over `login;password;culture;wmid` followed by `extra`
    pub fn account_signature(&self, extra: &[&str]) -> String {
        let mut fields: Vec<&str> = Vec::with_capacity(4 + extra.len());
        fields.extend([
            self.login.as_str(),
            self.password.as_str(),
            INDX_API_CULTURE,
            self.wmid.as_str(),
        ]);
        fields.extend_from_slice(extra);
        Self::sign(&fields)
    }

    /// Build the authentication context for a request
    pub fn context(&self, signature: String) -> ApiContext {
        ApiContext {
            login: self.login.clone(),
            wmid: self.wmid.clone(),
            culture: INDX_API_CULTURE.to_string(),
            signature,
        }
    }
}

impl fmt::Debug for IndxSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndxSigner")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("wmid", &self.wmid)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_signer() -> IndxSigner {
        IndxSigner::new("login", "pass", "wmid")
    }

    #[test]
    fn test_sign_known_vectors() {
        // sha256("") and sha256("abc"), base64 encoded
        assert_eq!(
            IndxSigner::sign(&[""]),
            "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
        assert_eq!(
            IndxSigner::sign(&["abc"]),
            "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0="
        );
    }

    #[test]
    fn test_sign_joins_with_semicolons() {
        assert_eq!(IndxSigner::sign(&["a", "b", "c"]), IndxSigner::sign(&["a;b;c"]));
        assert_ne!(IndxSigner::sign(&["a", "b"]), IndxSigner::sign(&["b", "a"]));
    }

    #[test]
    fn test_public_signature_omits_wmid() {
        let signer = create_test_signer();
        assert_eq!(
            signer.public_signature(),
            IndxSigner::sign(&["login;pass;en-EN"])
        );
    }

    #[test]
    fn test_account_signature_field_order() {
        let signer = create_test_signer();
        assert_eq!(
            signer.account_signature(&[]),
            IndxSigner::sign(&["login;pass;en-EN;wmid"])
        );
        assert_eq!(
            signer.account_signature(&["60", "20240101", "20240201"]),
            IndxSigner::sign(&["login;pass;en-EN;wmid;60;20240101;20240201"])
        );
    }

    #[test]
    fn test_context_fields() {
        let signer = create_test_signer();
        let context = signer.context("sig".to_string());
        assert_eq!(context.login, "login");
        assert_eq!(context.wmid, "wmid");
        assert_eq!(context.culture, "en-EN");
        assert_eq!(context.signature, "sig");
    }

    #[test]
    fn test_from_config() {
        let config = Config::new("user", "secret", "123");
        let signer = IndxSigner::from_config(&config);
        assert_eq!(signer.login(), "user");
        assert_eq!(signer.wmid(), "123");
        assert!(!format!("{:?}", signer).contains("secret"));
    }
}
