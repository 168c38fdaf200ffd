use crate::{normalize_display_name, normalize_email};

use serde::{Deserialize, Serialize};

/// Profile handed back by the external identity provider after login.
///
/// Deserializes directly from an OpenID userinfo document. Providers that
/// still return the legacy `id` field are accepted too; `sub` wins when a
/// document carries both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserInfoDocument")]
pub struct ExternalProfile {
    #[serde(rename = "sub")]
    pub external_id: String,
    pub email: Option<String>,
    #[serde(rename = "name")]
    pub display_name: Option<String>,
}

/// Wire shape of a userinfo response
#[derive(Deserialize)]
struct UserInfoDocument {
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl TryFrom<UserInfoDocument> for ExternalProfile {
    type Error = String;

    fn try_from(doc: UserInfoDocument) -> Result<Self, Self::Error> {
        let external_id = doc
            .sub
            .or(doc.id)
            .ok_or_else(|| "userinfo document has neither `sub` nor `id`".to_string())?;

        Ok(Self {
            external_id,
            email: doc.email,
            display_name: doc.name,
        })
    }
}

impl ExternalProfile {
    pub fn new(
        external_id: impl Into<String>,
        email: Option<&str>,
        display_name: Option<&str>,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            email: email.map(str::to_string),
            display_name: display_name.map(str::to_string),
        }
    }

    pub fn normalized_email(&self) -> Option<String> {
        normalize_email(self.email.as_deref())
    }

    pub fn normalized_display_name(&self) -> Option<String> {
        normalize_display_name(self.display_name.as_deref())
    }
}
