use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

/// Profile fields returned by Google's userinfo endpoint. The frontend sends
/// the access token it got from the Google popup; the backend exchanges it
/// for the profile server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleProfile {
    pub email: String,
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub picture: Option<String>,
}

#[async_trait]
pub trait GoogleClient: Send + Sync {
    /// Exchange a caller-supplied access token for profile info. Any failure
    /// (network, non-2xx, malformed body) is an invalid-token failure from
    /// the login flow's point of view.
    async fn fetch_profile(&self, access_token: &str) -> anyhow::Result<GoogleProfile>;
}

pub struct HttpGoogleClient {
    http: reqwest::Client,
    userinfo_url: String,
}

impl HttpGoogleClient {
    pub fn new(userinfo_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            userinfo_url: userinfo_url.to_string(),
        })
    }
}

#[async_trait]
impl GoogleClient for HttpGoogleClient {
    async fn fetch_profile(&self, access_token: &str) -> anyhow::Result<GoogleProfile> {
        let res = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?;
        if !res.status().is_success() {
            warn!(status = %res.status(), "google userinfo exchange rejected");
            anyhow::bail!("userinfo request failed with status {}", res.status());
        }
        Ok(res.json::<GoogleProfile>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_deserializes_full_payload() {
        let json = r#"{
            "sub": "1099234",
            "email": "jane@example.com",
            "given_name": "Jane",
            "family_name": "Smith",
            "picture": "https://lh3.googleusercontent.com/a/photo"
        }"#;
        let p: GoogleProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.email, "jane@example.com");
        assert_eq!(p.given_name, "Jane");
        assert_eq!(p.picture.as_deref(), Some("https://lh3.googleusercontent.com/a/photo"));
    }

    #[test]
    fn profile_tolerates_missing_name_fields() {
        let p: GoogleProfile = serde_json::from_str(r#"{"email":"x@y.z"}"#).unwrap();
        assert_eq!(p.given_name, "");
        assert_eq!(p.family_name, "");
        assert!(p.picture.is_none());
    }
}
