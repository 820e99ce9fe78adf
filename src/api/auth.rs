//! Pre-authentication endpoints
//!
//! The login flow is: request a verification email, exchange the emailed code
//! for a login token, then exchange the login token for an access token.
//! None of these calls send an Authorization header.

use serde::Serialize;
use serde_json::{json, Value};

use super::client::{Host, ProntoClient};
use crate::error::Result;
use crate::models::DeviceInfo;

const VERIFY: &str = "api/v1/user.verify";
const CODE_LOGIN: &str = "api/v3/user.login";
const TOKEN_LOGIN: &str = "api/v1/user.tokenlogin";

#[derive(Debug, Serialize)]
struct CodeLoginRequest<'a> {
    email: &'a str,
    code: &'a str,
    device: &'a DeviceInfo,
}

#[derive(Debug, Serialize)]
struct TokenLoginRequest<'a> {
    logintokens: [&'a str; 1],
    device: DeviceInfo,
}

impl ProntoClient {
    /// Ask the accounts service to email a verification code.
    pub async fn request_verification_email(&self, email: &str) -> Result<Value> {
        self.public_post(Host::Accounts, VERIFY, &json!({ "email": email }))
            .await
    }

    /// Exchange an emailed verification code for a login token.
    pub async fn exchange_verification_code(&self, email: &str, code: &str) -> Result<Value> {
        self.exchange_verification_code_with_device(email, code, &DeviceInfo::code_login())
            .await
    }

    /// Same as [`exchange_verification_code`](Self::exchange_verification_code)
    /// with a caller-chosen device descriptor.
    pub async fn exchange_verification_code_with_device(
        &self,
        email: &str,
        code: &str,
        device: &DeviceInfo,
    ) -> Result<Value> {
        let body = CodeLoginRequest {
            email,
            code,
            device,
        };
        self.public_post(Host::Accounts, CODE_LOGIN, &body).await
    }

    /// Exchange a login token for a long-lived access token.
    ///
    /// The returned JSON is handed back as-is; binding the access token to a
    /// client is up to the caller.
    pub async fn exchange_login_token(&self, login_token: &str) -> Result<Value> {
        let body = TokenLoginRequest {
            logintokens: [login_token],
            device: DeviceInfo::token_login(),
        };
        self.public_post(Host::Api, TOKEN_LOGIN, &body).await
    }
}
