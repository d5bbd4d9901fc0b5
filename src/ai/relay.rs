use crate::ai::client::OpenRouterClient;
use crate::logger;

/// Shown when the credential is missing; no request is attempted.
pub const MISSING_KEY_REPLY: &str =
    "API key not configured. Set the OPENROUTER_API_KEY environment variable to enable chat.";
/// Shown for any failed request; the real error only goes to the log.
pub const FAILURE_REPLY: &str = "Sorry, I couldn't retrieve the information at this moment.";
/// Shown when the call succeeded but the model returned nothing.
pub const EMPTY_REPLY: &str = "No response generated.";

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Stateless bridge between the chat UI and the text-generation API. Every
/// outcome is a displayable string; errors never cross this boundary.
#[derive(Debug)]
pub struct ChatRelay {
    api_key: Option<String>,
}

impl ChatRelay {
    pub fn new(api_key: Option<String>) -> Self {
        ChatRelay {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    /// Read the credential once at startup.
    pub fn from_env() -> Self {
        ChatRelay::new(std::env::var(API_KEY_ENV).ok())
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn ask(&self, element_name: &str, question: &str) -> String {
        if !self.is_configured() {
            return MISSING_KEY_REPLY.to_string();
        }

        let client = match OpenRouterClient::new() {
            Ok(client) => client,
            Err(e) => {
                logger::log(&format!("chat client construction failed: {}", e));
                return FAILURE_REPLY.to_string();
            }
        };

        reply_or_fallback(client.element_insights(element_name, question, None).await)
    }
}

/// Map a raw completion result to the string the chat panel displays.
pub fn reply_or_fallback(
    result: Result<String, Box<dyn std::error::Error + Send + Sync>>,
) -> String {
    match result {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => EMPTY_REPLY.to_string(),
        Err(e) => {
            logger::log(&format!("chat request failed: {}", e));
            FAILURE_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_credential_short_circuits() {
        let relay = ChatRelay::new(None);
        assert!(!relay.is_configured());
        let reply = relay.ask("Helium", "Why is it inert?").await;
        assert_eq!(reply, MISSING_KEY_REPLY);
    }

    #[tokio::test]
    async fn test_blank_credential_counts_as_missing() {
        let relay = ChatRelay::new(Some("   ".to_string()));
        assert!(!relay.is_configured());
        let reply = relay.ask("Helium", "Why is it inert?").await;
        assert_eq!(reply, MISSING_KEY_REPLY);
    }

    #[test]
    fn test_reply_passes_text_through() {
        let reply = reply_or_fallback(Ok("**Helium** is a noble gas.".to_string()));
        assert_eq!(reply, "**Helium** is a noble gas.");
    }

    #[test]
    fn test_empty_reply_maps_to_placeholder() {
        assert_eq!(reply_or_fallback(Ok(String::new())), EMPTY_REPLY);
        assert_eq!(reply_or_fallback(Ok("   \n".to_string())), EMPTY_REPLY);
    }

    #[test]
    fn test_failure_maps_to_fallback_without_panicking() {
        let reply = reply_or_fallback(Err("connection reset".into()));
        assert_eq!(reply, FAILURE_REPLY);
    }
}
