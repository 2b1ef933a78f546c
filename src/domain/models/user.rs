use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Tokens granted when a user record is first created by the directory.
pub const INITIAL_TOKEN_GRANT: i64 = 50_000;

/// Profile handed over by the external sign-in flow. This core only consumes
/// it; the consent screen itself lives elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInProfile {
    pub uid: String,
    pub email: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "pictureUrl")]
    pub picture_url: String,
}

/// A user as stored by the directory. The balance is signed: debits are not
/// clamped, so it can go negative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "pictureUrl")]
    pub picture_url: String,
    #[serde(rename = "tokenBalance")]
    pub token_balance: i64,
}
