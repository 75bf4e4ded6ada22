use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Admin session claims: a single boolean capability plus expiry.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub admin: bool,
    pub exp: usize,
}

/// Sign a new admin session token, valid for 7 days.
pub fn sign(secret: &str) -> Result<String> {
    let expiration = (Utc::now() + Duration::days(7)).timestamp();

    let claims = Claims {
        admin: true,
        exp: expiration as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verify and decode an admin session token.
pub fn verify(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
