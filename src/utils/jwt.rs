//! JWT 签发与验证
//!
//! access token 走 Authorization 头，refresh token 走 http-only cookie。
//! 两类 token 共用同一密钥，靠 Claims.token_type 区分，验证时强制匹配。

use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

const TOKEN_TYPE_ACCESS: &str = "access";
const TOKEN_TYPE_REFRESH: &str = "refresh";
const REFRESH_COOKIE_NAME: &str = "refresh_token";

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // 用户 ID
    pub role: String,       // 用户角色
    pub token_type: String, // "access" 或 "refresh"
    pub exp: usize,         // 过期时间戳
    pub iat: usize,         // 签发时间戳
}

impl Claims {
    /// 解析 sub 中携带的用户 ID
    pub fn user_id(&self) -> Result<i64, jsonwebtoken::errors::Error> {
        self.sub
            .parse::<i64>()
            .map_err(|_| jsonwebtoken::errors::ErrorKind::InvalidToken.into())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    fn secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    fn sign(
        user_id: i64,
        role: &str,
        token_type: &str,
        lifetime: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            token_type: token_type.to_string(),
            exp: (now + lifetime).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let encoding_key = EncodingKey::from_secret(Self::secret().as_ref());
        encode(&Header::default(), &claims, &encoding_key)
    }

    fn verify_typed(
        token: &str,
        expected_type: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(Self::secret().as_ref());
        let claims = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map(|data| data.claims)?;
        if claims.token_type != expected_type {
            return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
        }
        Ok(claims)
    }

    fn generate_access_token(
        user_id: i64,
        role: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::sign(
            user_id,
            role,
            TOKEN_TYPE_ACCESS,
            chrono::Duration::minutes(config.jwt.access_token_expiry),
        )
    }

    /// 签发 access + refresh token 对
    ///
    /// refresh_token_expiry 用于"记住我"等场景覆盖默认的 refresh 有效期。
    pub fn generate_token_pair(
        user_id: i64,
        role: &str,
        refresh_token_expiry: Option<chrono::Duration>,
    ) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        let refresh_lifetime = refresh_token_expiry
            .unwrap_or_else(|| chrono::Duration::days(config.jwt.refresh_token_expiry));

        Ok(TokenPair {
            access_token: Self::generate_access_token(user_id, role)?,
            refresh_token: Self::sign(user_id, role, TOKEN_TYPE_REFRESH, refresh_lifetime)?,
        })
    }

    /// 验证 access token，refresh token 在此会被拒绝
    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_typed(token, TOKEN_TYPE_ACCESS)
    }

    /// 用有效的 refresh token 换发新的 access token
    pub fn refresh_access_token(
        refresh_token: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Self::verify_typed(refresh_token, TOKEN_TYPE_REFRESH)?;
        Self::generate_access_token(claims.user_id()?, &claims.role)
    }

    /// 创建 Refresh Token Cookie
    pub fn create_refresh_token_cookie(refresh_token: &str) -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(REFRESH_COOKIE_NAME, refresh_token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::days(
                config.jwt.refresh_token_expiry,
            ))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production()) // 生产环境下使用 HTTPS
            .finish()
    }

    /// 创建空的 Refresh Token Cookie（用于注销）
    pub fn create_empty_refresh_token_cookie() -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(REFRESH_COOKIE_NAME, "")
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production())
            .finish()
    }

    /// 从请求中提取 Refresh Token
    pub fn extract_refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(REFRESH_COOKIE_NAME)
            .map(|cookie| cookie.value().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_round_trip() {
        let pair = JwtUtils::generate_token_pair(42, "teacher", None).unwrap();
        let claims = JwtUtils::verify_access_token(&pair.access_token).unwrap();
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.role, "teacher");
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let pair = JwtUtils::generate_token_pair(7, "admin", None).unwrap();
        assert!(JwtUtils::verify_access_token(&pair.refresh_token).is_err());
    }

    #[test]
    fn test_refresh_issues_new_access_token() {
        let pair = JwtUtils::generate_token_pair(7, "admin", None).unwrap();
        let access = JwtUtils::refresh_access_token(&pair.refresh_token).unwrap();
        let claims = JwtUtils::verify_access_token(&access).unwrap();
        assert_eq!(claims.user_id().unwrap(), 7);
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(JwtUtils::verify_access_token("not-a-token").is_err());
        assert!(JwtUtils::refresh_access_token("not-a-token").is_err());
    }
}
