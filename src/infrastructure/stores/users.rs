#[cfg(test)]
#[path = "users_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::SignInProfile;
use crate::domain::models::TokenLedger;
use crate::domain::models::UserDirectory;
use crate::domain::models::UserProfile;

#[derive(Debug, Clone, Serialize)]
struct UpdateTokensRequest {
    token: i64,
}

/// HTTP client for the per-user token budget. The call sets the absolute
/// remaining balance; concurrent writers are last-write-wins by design.
pub struct HttpTokenLedger {
    url: String,
}

impl Default for HttpTokenLedger {
    fn default() -> HttpTokenLedger {
        return HttpTokenLedger {
            url: Config::get(ConfigKey::StoreURL),
        };
    }
}

#[async_trait]
impl TokenLedger for HttpTokenLedger {
    async fn update_tokens(&self, user_id: &str, token: i64) -> Result<()> {
        let res = reqwest::Client::new()
            .post(format!("{url}/users/{user_id}/tokens", url = self.url))
            .json(&UpdateTokensRequest { token })
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "failed to update tokens");
            bail!("failed to update tokens for user {user_id}");
        }

        return Ok(());
    }
}

/// HTTP client for the user directory backing the external sign-in flow. The
/// server creates missing records with the initial token grant and returns
/// the stored record either way.
pub struct HttpUserDirectory {
    url: String,
}

impl Default for HttpUserDirectory {
    fn default() -> HttpUserDirectory {
        return HttpUserDirectory {
            url: Config::get(ConfigKey::StoreURL),
        };
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn get_or_create(&self, profile: &SignInProfile) -> Result<UserProfile> {
        let res = reqwest::Client::new()
            .post(format!("{url}/users/signin", url = self.url))
            .json(profile)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "sign-in lookup failed");
            bail!("failed to look up user for {email}", email = profile.email);
        }

        let user = res.json::<UserProfile>().await?;
        return Ok(user);
    }
}
