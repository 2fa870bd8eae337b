//! Webhook Dispatcher
//!
//! Posts the rendered card to the Teams / Power Automate webhook.
//!
//! An HTTP error status from the webhook is logged and reported as
//! [`Delivery::Rejected`]; it does not fail the run. Transport failures
//! (DNS, refused connection, timeout, bad URL) are returned as errors.

use std::borrow::Cow;

use crate::card::AdaptiveCard;
use crate::config::Config;
use crate::constants::REQUEST_TIMEOUT;
use crate::error::DispatchError;

/// Outcome of a POST that reached the webhook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Accepted { status: u16 },
    Rejected { status: u16, body: String },
}

impl Delivery {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Delivery::Accepted { .. })
    }

    pub fn status(&self) -> u16 {
        match self {
            Delivery::Accepted { status } | Delivery::Rejected { status, .. } => *status,
        }
    }
}

/// Undo HTML entity escaping applied to the URL upstream (`&amp;` → `&`)
pub fn decode_webhook_url(raw: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(raw)
}

/// Single-shot card sender
pub struct Dispatcher {
    agent: ureq::Agent,
    log_payloads: bool,
}

impl Dispatcher {
    pub fn new(config: &Config) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
            log_payloads: config.log_payloads,
        }
    }

    /// Serialize the card and POST it once
    pub fn send(&self, card: &AdaptiveCard, webhook_url: &str) -> Result<Delivery, DispatchError> {
        let webhook = decode_webhook_url(webhook_url);
        let payload = serde_json::to_string(card)?;

        if self.log_payloads {
            tracing::info!("Sending message to Power Automate: {}", payload);
            tracing::info!("Using webhook URL: {}", webhook);
        } else {
            tracing::info!("Sending message to Power Automate ({} bytes)", payload.len());
        }

        let response = self
            .agent
            .post(&webhook)
            .set("Content-Type", "application/json")
            .send_string(&payload);

        match response {
            Ok(resp) => {
                tracing::info!("Successfully sent message to Power Automate");
                Ok(Delivery::Accepted { status: resp.status() })
            }
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp
                    .into_string()
                    .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
                tracing::error!("Failed to send message!");
                tracing::error!("Response code: {}, response body: {}", status, body);
                Ok(Delivery::Rejected { status, body })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(DispatchError::Transport(Box::new(transport)))
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::Alert;
    use crate::card;
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use serde_json::Value;

    fn card() -> AdaptiveCard {
        card::render(&Alert {
            rule_id: 31101,
            rule_level: 5,
            rule_description: "Web server 400 error code.".to_string(),
            agent_id: 7,
            agent_name: "nginx-02".to_string(),
            full_log: "10.1.1.1 - - \"GET /admin HTTP/1.1\" 404".to_string(),
        })
    }

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(&Config::default())
    }

    #[test]
    fn test_decode_webhook_url() {
        let raw = "https://prod.westeurope.logic.azure.com/workflows/abc/triggers/manual/paths/invoke?api-version=2016-06-01&amp;sp=%2Ftriggers%2Fmanual%2Frun&amp;sv=1.0&amp;sig=XyZ";
        assert_eq!(
            decode_webhook_url(raw),
            "https://prod.westeurope.logic.azure.com/workflows/abc/triggers/manual/paths/invoke?api-version=2016-06-01&sp=%2Ftriggers%2Fmanual%2Frun&sv=1.0&sig=XyZ"
        );
        assert_eq!(decode_webhook_url("https://h/x?a=1&#38;b=2"), "https://h/x?a=1&b=2");
    }

    #[test]
    fn test_decode_is_idempotent() {
        let urls = [
            "https://example.webhook.office.com/webhookb2/a@b/IncomingWebhook/c/d",
            "https://h/invoke?api-version=2016-06-01&sp=%2Ftriggers&sv=1.0&sig=abc",
            "https://prod.logic.azure.com/x?a=1&amp;b=2",
        ];

        for url in urls {
            let once = decode_webhook_url(url).into_owned();
            let twice = decode_webhook_url(&once).into_owned();
            assert_eq!(once, twice, "{}", url);
        }
    }

    #[test]
    fn test_send_posts_card() {
        let server = Server::run();
        let expected: Value = serde_json::to_value(card()).unwrap();
        server.expect(
            Expectation::matching(httptest::all_of![
                request::method_path("POST", "/workflows/abc/invoke"),
                request::query(url_decoded(contains(("sig", "s3cr3t")))),
                request::query(url_decoded(contains(("sv", "1.0")))),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(expected))),
            ])
            .respond_with(status_code(202)),
        );

        // Upstream escaped the ampersands
        let url = format!("{}?sv=1.0&amp;sig=s3cr3t", server.url_str("/workflows/abc/invoke"));
        let delivery = dispatcher().send(&card(), &url).unwrap();

        assert_eq!(delivery, Delivery::Accepted { status: 202 });
        assert!(delivery.is_accepted());
    }

    #[test]
    fn test_http_error_is_not_fatal() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/hook"))
                .respond_with(status_code(500).body("flow is disabled")),
        );

        let delivery = dispatcher().send(&card(), &server.url_str("/hook")).unwrap();

        assert_eq!(
            delivery,
            Delivery::Rejected { status: 500, body: "flow is disabled".to_string() }
        );
        assert_eq!(delivery.status(), 500);
    }

    #[test]
    fn test_client_error_is_not_fatal() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/hook"))
                .respond_with(status_code(400).body("{\"error\":\"bad card\"}")),
        );

        let delivery = dispatcher().send(&card(), &server.url_str("/hook")).unwrap();
        assert!(!delivery.is_accepted());
        assert_eq!(delivery.status(), 400);
    }

    #[test]
    fn test_connection_refused_is_fatal() {
        // Bind then drop to get a port nothing listens on
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let result = dispatcher().send(&card(), &format!("http://127.0.0.1:{}/hook", port));
        assert!(matches!(result, Err(DispatchError::Transport(_))));
    }

    #[test]
    fn test_invalid_url_is_fatal() {
        let result = dispatcher().send(&card(), "not a url");
        assert!(matches!(result, Err(DispatchError::Transport(_))));
    }
}
