//! Device descriptors sent with login requests

use serde::{Deserialize, Serialize};

/// Client device description attached to login calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub browsername: String,
    pub browserversion: String,
    pub osname: String,
    #[serde(rename = "type")]
    pub device_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osversion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appversion: Option<String>,
}

impl DeviceInfo {
    /// Descriptor used when exchanging an emailed verification code.
    pub fn code_login() -> Self {
        Self {
            browsername: "Firefox".to_string(),
            browserversion: "130.0.0".to_string(),
            osname: "Windows".to_string(),
            device_type: "WEB".to_string(),
            uuid: None,
            osversion: None,
            appversion: None,
        }
    }

    /// Descriptor used when exchanging a login token for an access token.
    pub fn token_login() -> Self {
        Self {
            browsername: "firefox".to_string(),
            browserversion: "130.0.0".to_string(),
            osname: "macOS".to_string(),
            device_type: "WEB".to_string(),
            uuid: Some("314c9314-d5e5-4ae4-84e2-9f2f3938ca28".to_string()),
            osversion: Some("10.15.6".to_string()),
            appversion: Some("1.0.0".to_string()),
        }
    }
}
