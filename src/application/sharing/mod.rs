// src/application/sharing/mod.rs
//! Share links for an article and the fallback chain that delivers them.

use crate::application::ports::share::{ShareChannel, ShareOutcome};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};
use utoipa::ToSchema;

const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";
const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";
const LINKEDIN_SHARE: &str = "https://www.linkedin.com/sharing/share-offsite/";

/// Canonical public address of an article.
pub fn canonical_url(base_url: &str, slug: &str) -> String {
    format!("{}/blog/{slug}", base_url.trim_end_matches('/'))
}

fn encode(value: &str) -> String {
    serde_urlencoded::to_string(vec![("", value)])
        .map(|pair| pair.trim_start_matches('=').to_string())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SharePayload {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShareLinks {
    pub url: String,
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
}

impl ShareLinks {
    /// Twitter gets the title as tweet text; LinkedIn gets the description
    /// as its summary when there is one.
    pub fn build(title: &str, url: &str, description: &str) -> Self {
        let url_param = encode(url);
        let mut linkedin = format!("{LINKEDIN_SHARE}?url={url_param}");
        if !description.is_empty() {
            linkedin.push_str("&summary=");
            linkedin.push_str(&encode(description));
        }
        Self {
            url: url.to_string(),
            facebook: format!("{FACEBOOK_SHARER}?u={url_param}"),
            twitter: format!("{TWITTER_INTENT}?url={url_param}&text={}", encode(title)),
            linkedin,
        }
    }

    pub fn for_payload(payload: &SharePayload) -> Self {
        Self::build(&payload.title, &payload.url, &payload.description)
    }
}

/// Result reported back to the reader after a share attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShareNotice {
    pub success: bool,
    /// Channel that completed the share, when one did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    pub message: String,
}

/// Tries each channel in order until one shares, the user aborts, or all fail.
///
/// The crate ships no [`ShareChannel`] of its own. Native share sheets and
/// clipboard access live in the embedding client, which registers them here;
/// the HTTP surface only hands out [`ShareLinks`].
pub struct ShareService {
    channels: Vec<Arc<dyn ShareChannel>>,
}

impl ShareService {
    pub fn new(channels: Vec<Arc<dyn ShareChannel>>) -> Self {
        Self { channels }
    }

    pub async fn share(&self, payload: &SharePayload) -> ShareNotice {
        for channel in &self.channels {
            match channel.share(payload).await {
                ShareOutcome::Shared => {
                    debug!(channel = channel.name(), "article shared");
                    return ShareNotice {
                        success: true,
                        channel: Some(channel.name().to_string()),
                        message: "Link berhasil dibagikan".into(),
                    };
                }
                ShareOutcome::Aborted => {
                    return ShareNotice {
                        success: false,
                        channel: None,
                        message: "Berbagi dibatalkan".into(),
                    };
                }
                ShareOutcome::Unavailable => {}
                ShareOutcome::Failed(reason) => {
                    warn!(channel = channel.name(), %reason, "share channel failed");
                }
            }
        }
        ShareNotice {
            success: false,
            channel: None,
            message: "Gagal membagikan link".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Scripted {
        name: &'static str,
        outcome: ShareOutcome,
        calls: Mutex<u32>,
    }

    impl Scripted {
        fn new(name: &'static str, outcome: ShareOutcome) -> Arc<Self> {
            Arc::new(Self {
                name,
                outcome,
                calls: Mutex::new(0),
            })
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl ShareChannel for Scripted {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn share(&self, _payload: &SharePayload) -> ShareOutcome {
            *self.calls.lock().unwrap() += 1;
            self.outcome.clone()
        }
    }

    fn payload() -> SharePayload {
        SharePayload {
            title: "Tips & Trik".into(),
            url: "http://localhost:8080/blog/tips-trik".into(),
            description: String::new(),
        }
    }

    #[test]
    fn builds_intent_urls() {
        let links = ShareLinks::for_payload(&payload());
        assert_eq!(links.url, "http://localhost:8080/blog/tips-trik");
        assert_eq!(
            links.facebook,
            "https://www.facebook.com/sharer/sharer.php?u=http%3A%2F%2Flocalhost%3A8080%2Fblog%2Ftips-trik"
        );
        assert!(links.twitter.ends_with("&text=Tips+%26+Trik"));
        assert_eq!(
            links.linkedin,
            "https://www.linkedin.com/sharing/share-offsite/?url=http%3A%2F%2Flocalhost%3A8080%2Fblog%2Ftips-trik"
        );
    }

    #[test]
    fn description_becomes_the_linkedin_summary() {
        let payload = SharePayload {
            description: "Cara cepat & praktis".into(),
            ..payload()
        };
        let links = ShareLinks::for_payload(&payload);
        assert!(links
            .linkedin
            .ends_with("tips-trik&summary=Cara+cepat+%26+praktis"));
        assert!(!links.facebook.contains("summary"));
        assert!(!links.twitter.contains("Cara"));
    }

    #[test]
    fn canonical_url_tolerates_trailing_slash() {
        assert_eq!(canonical_url("https://a.id/", "x"), "https://a.id/blog/x");
    }

    #[tokio::test]
    async fn falls_back_to_next_channel() {
        let native = Scripted::new("native", ShareOutcome::Unavailable);
        let clipboard = Scripted::new("clipboard", ShareOutcome::Failed("denied".into()));
        let manual = Scripted::new("manual", ShareOutcome::Shared);
        let service = ShareService::new(vec![native.clone(), clipboard.clone(), manual.clone()]);

        let notice = service.share(&payload()).await;
        assert!(notice.success);
        assert_eq!(notice.channel.as_deref(), Some("manual"));
        assert_eq!((native.calls(), clipboard.calls(), manual.calls()), (1, 1, 1));
    }

    #[tokio::test]
    async fn abort_stops_the_chain() {
        let native = Scripted::new("native", ShareOutcome::Aborted);
        let clipboard = Scripted::new("clipboard", ShareOutcome::Shared);
        let service = ShareService::new(vec![native.clone(), clipboard.clone()]);

        let notice = service.share(&payload()).await;
        assert!(!notice.success);
        assert_eq!(clipboard.calls(), 0);
    }

    #[tokio::test]
    async fn reports_failure_when_every_channel_fails() {
        let service = ShareService::new(vec![Scripted::new(
            "clipboard",
            ShareOutcome::Failed("denied".into()),
        )]);
        let notice = service.share(&payload()).await;
        assert!(!notice.success);
        assert_eq!(notice.message, "Gagal membagikan link");
    }
}
