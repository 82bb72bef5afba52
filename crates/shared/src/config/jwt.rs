use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub is_admin: bool,
    pub exp: usize,
    pub iat: usize,
    pub token_type: String,
}

/// Identity carried through request extensions after token verification.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub is_admin: bool,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(
        &self,
        user_id: i32,
        is_admin: bool,
        token_type: &str,
    ) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = match token_type {
            "access" => (now + Duration::minutes(60)).timestamp() as usize,
            "refresh" => (now + Duration::days(7)).timestamp() as usize,
            _ => return Err(ServiceError::InvalidTokenType),
        };

        let claims = Claims {
            user_id,
            is_admin,
            exp,
            iat,
            token_type: token_type.to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(
        &self,
        token: &str,
        expected_type: &str,
    ) -> Result<AuthenticatedUser, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(ServiceError::Jwt)?;

        let current_time = Utc::now().timestamp() as usize;

        if token_data.claims.exp < current_time {
            return Err(ServiceError::TokenExpired);
        }

        if token_data.claims.token_type != expected_type {
            return Err(ServiceError::InvalidTokenType);
        }

        Ok(AuthenticatedUser {
            id: token_data.claims.user_id,
            is_admin: token_data.claims.is_admin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_round_trip() {
        let jwt = JwtConfig::new("segredo-de-teste");
        let token = jwt.generate_token(42, true, "access").unwrap();
        let user = jwt.verify_token(&token, "access").unwrap();

        assert_eq!(user.id, 42);
        assert!(user.is_admin);
    }

    #[test]
    fn refresh_token_is_not_accepted_as_access() {
        let jwt = JwtConfig::new("segredo-de-teste");
        let token = jwt.generate_token(7, false, "refresh").unwrap();

        assert!(matches!(
            jwt.verify_token(&token, "access"),
            Err(ServiceError::InvalidTokenType)
        ));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let jwt = JwtConfig::new("segredo-de-teste");
        let other = JwtConfig::new("outro-segredo");
        let token = other.generate_token(7, false, "access").unwrap();

        assert!(matches!(
            jwt.verify_token(&token, "access"),
            Err(ServiceError::Jwt(_))
        ));
    }

    #[test]
    fn unknown_token_type_is_rejected_on_generation() {
        let jwt = JwtConfig::new("segredo-de-teste");

        assert!(matches!(
            jwt.generate_token(1, false, "session"),
            Err(ServiceError::InvalidTokenType)
        ));
    }
}
