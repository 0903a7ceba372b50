//! Lead capture: validate and forward `{email, zip}` to the subscription
//! endpoint. Irrelevant to calculation correctness; failures never affect
//! the calculator.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use truerate_error::{ServerError, ServerErrorKind};

/// A captured lead from the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    /// Subscriber email address.
    pub email: String,
    /// 5-digit zip code.
    pub zip: String,
}

impl Lead {
    /// Minimal shape check; the storage service does real validation.
    pub fn is_well_formed(&self) -> bool {
        let email = self.email.trim();
        let has_at = email.split('@').filter(|part| !part.is_empty()).count() == 2;
        let zip_ok = self.zip.len() == 5 && self.zip.bytes().all(|b| b.is_ascii_digit());
        has_at && zip_ok
    }
}

/// Forward a lead to the configured subscription endpoint, form-encoded.
///
/// With no endpoint configured the lead is logged and dropped, which keeps
/// local development working without the third-party service.
///
/// # Errors
///
/// `Forward` when the endpoint rejects the request or is unreachable.
pub async fn forward_lead(
    client: &reqwest::Client,
    subscribe_url: Option<&str>,
    lead: &Lead,
) -> Result<(), ServerError> {
    let Some(url) = subscribe_url else {
        warn!(zip = %lead.zip, "no subscription endpoint configured, dropping lead");
        return Ok(());
    };

    let response = client
        .post(url)
        .form(lead)
        .send()
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Forward(e.to_string())))?;

    if !response.status().is_success() {
        return Err(ServerError::new(ServerErrorKind::Forward(format!(
            "subscription endpoint returned {}",
            response.status()
        ))));
    }

    info!(zip = %lead.zip, "lead forwarded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Lead;

    #[test]
    fn well_formed_lead_passes() {
        let lead = Lead {
            email: "someone@example.com".into(),
            zip: "75201".into(),
        };
        assert!(lead.is_well_formed());
    }

    #[test]
    fn bad_email_or_zip_fails() {
        let no_at = Lead {
            email: "someone.example.com".into(),
            zip: "75201".into(),
        };
        assert!(!no_at.is_well_formed());

        let short_zip = Lead {
            email: "someone@example.com".into(),
            zip: "7520".into(),
        };
        assert!(!short_zip.is_well_formed());

        let empty_local = Lead {
            email: "@example.com".into(),
            zip: "75201".into(),
        };
        assert!(!empty_local.is_well_formed());
    }
}
