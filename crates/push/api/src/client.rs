//! Backend subscription API client.

use color_eyre::eyre::WrapErr as _;
use push_core::{Subscription, SubscriptionKeys};
use serde::{Deserialize, Serialize};

/// Remote endpoints consumed by the subscription manager.
#[trait_variant::make(Send)]
pub trait SubscriptionApi: Send + Sync {
    /// Fetch the server's VAPID public key (base64url).
    async fn vapid_public_key(&self) -> color_eyre::eyre::Result<String>;

    /// Persist a subscription server-side, tagged with the device's
    /// user-agent string.
    async fn persist_subscription(
        &self,
        subscription: &Subscription,
        user_agent: &str,
    ) -> color_eyre::eyre::Result<()>;

    /// Remove a subscription server-side by its endpoint.
    async fn remove_subscription(&self, endpoint: &str) -> color_eyre::eyre::Result<()>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VapidKeyResponse {
    public_key: String,
}

#[derive(Debug, Serialize)]
struct SubscriptionBody<'a> {
    endpoint: &'a str,
    keys: &'a SubscriptionKeys,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubscribeRequest<'a> {
    subscription: SubscriptionBody<'a>,
    user_agent: &'a str,
    expiration_time: Option<i64>,
}

#[derive(Debug, Serialize)]
struct UnsubscribeRequest<'a> {
    endpoint: &'a str,
}

/// reqwest-backed [`SubscriptionApi`] implementation.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            bearer_token: None,
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.get(format!("{}{path}", self.base_url)))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.post(format!("{}{path}", self.base_url)))
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.bearer_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

impl SubscriptionApi for BackendClient {
    async fn vapid_public_key(&self) -> color_eyre::eyre::Result<String> {
        let response: VapidKeyResponse = self
            .get("/push/vapidPublicKey")
            .send()
            .await
            .wrap_err("VAPID key request failed")?
            .error_for_status()
            .wrap_err("VAPID key request rejected")?
            .json()
            .await
            .wrap_err("VAPID key response is not valid JSON")?;

        tracing::debug!("VAPID key received");
        Ok(response.public_key)
    }

    async fn persist_subscription(
        &self,
        subscription: &Subscription,
        user_agent: &str,
    ) -> color_eyre::eyre::Result<()> {
        let body = SubscribeRequest {
            subscription: SubscriptionBody {
                endpoint: &subscription.endpoint,
                keys: &subscription.keys,
            },
            user_agent,
            expiration_time: subscription.expiration_time,
        };

        self.post("/push/subscribe")
            .json(&body)
            .send()
            .await
            .wrap_err("subscribe request failed")?
            .error_for_status()
            .wrap_err("subscribe request rejected")?;

        tracing::debug!(endpoint = %subscription.endpoint, "subscription persisted");
        Ok(())
    }

    async fn remove_subscription(&self, endpoint: &str) -> color_eyre::eyre::Result<()> {
        self.post("/push/unsubscribe")
            .json(&UnsubscribeRequest { endpoint })
            .send()
            .await
            .wrap_err("unsubscribe request failed")?
            .error_for_status()
            .wrap_err("unsubscribe request rejected")?;

        tracing::debug!(endpoint = %endpoint, "subscription removed server-side");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription() -> Subscription {
        Subscription {
            endpoint: "https://push.example/abc123".into(),
            keys: SubscriptionKeys {
                p256dh: "p256dh-material".into(),
                auth: "auth-material".into(),
            },
            expiration_time: None,
        }
    }

    #[tokio::test]
    async fn fetches_vapid_key() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/push/vapidPublicKey")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"publicKey":"BBy-public-key"}"#)
            .create_async()
            .await;

        let client = BackendClient::new(server.url());
        let key = client.vapid_public_key().await.unwrap();

        assert_eq!(key, "BBy-public-key");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn persists_subscription_with_metadata() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/push/subscribe")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "subscription": {
                    "endpoint": "https://push.example/abc123",
                    "keys": {"p256dh": "p256dh-material", "auth": "auth-material"},
                },
                "userAgent": "test-agent/1.0",
                "expirationTime": null,
            })))
            .with_status(201)
            .create_async()
            .await;

        let client = BackendClient::new(server.url());
        client
            .persist_subscription(&subscription(), "test-agent/1.0")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn removes_subscription_by_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/push/unsubscribe")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "endpoint": "https://push.example/abc123",
            })))
            .with_status(200)
            .create_async()
            .await;

        let client = BackendClient::new(server.url());
        client
            .remove_subscription("https://push.example/abc123")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn attaches_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/push/vapidPublicKey")
            .match_header("authorization", "Bearer secret-token")
            .with_body(r#"{"publicKey":"BKey"}"#)
            .create_async()
            .await;

        let client = BackendClient::new(server.url()).with_bearer_token("secret-token");
        client.vapid_public_key().await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn surfaces_http_errors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/push/subscribe")
            .with_status(500)
            .create_async()
            .await;

        let client = BackendClient::new(server.url());
        let result = client
            .persist_subscription(&subscription(), "test-agent/1.0")
            .await;

        assert!(result.is_err());
    }
}
