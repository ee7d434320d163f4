//! JWT issuing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::{AppError, AppResult, JwtConfig};
use domain::TOKEN_TYPE_BEARER;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TokenResponse {
    /// JWT access token
    pub access_token: String,
    /// Token type (always "Bearer")
    #[cfg_attr(feature = "openapi", schema(example = "Bearer"))]
    pub token_type: String,
    /// Token expiration time in seconds
    #[cfg_attr(feature = "openapi", schema(example = 3600))]
    pub expires_in: i64,
}

/// Signs and checks HS256 access tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in_seconds: i64,
}

impl TokenIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret_bytes()),
            expires_in_seconds: config.expires_in_seconds,
        }
    }

    /// Token lifetime in seconds
    pub fn expires_in(&self) -> i64 {
        self.expires_in_seconds
    }

    /// Issue a token for the given user id.
    pub fn issue(&self, user_id: Uuid) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = Duration::try_seconds(self.expires_in_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::token(format!(
                    "token lifetime of {}s is out of range",
                    self.expires_in_seconds
                ))
            })?;

        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::token(e.to_string()))?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.expires_in_seconds,
        })
    }

    /// Verify signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )?;

        Ok(token_data.claims)
    }
}
