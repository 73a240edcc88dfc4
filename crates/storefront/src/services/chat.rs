//! Scripted assistance chat.
//!
//! The assistant answers from a fixed, ordered rule table: the shopper's
//! message is lowercased and the first rule with a keyword hit wins; with
//! no hit a generic reply points at the contact page. The service wraps
//! the rule table with the session transcript and the typing delay the
//! widget shows before a reply appears.

use tokio::time::sleep;
use tracing::instrument;

use crate::config::StorefrontConfig;
use crate::models::chat::{ChatError, ChatMessage, ChatSession};

/// One entry of the rule table.
struct Rule {
    /// Lowercase keywords; any substring hit selects this rule.
    keywords: &'static [&'static str],
    reply: String,
}

/// The keyword-to-reply table, rendered once from configuration.
pub struct Responder {
    rules: Vec<Rule>,
    fallback: String,
}

impl Responder {
    /// Build the rule table with the shop's contact details filled in.
    ///
    /// Order matters: earlier rules shadow later ones.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let countries = join_countries(&config.delivery_countries);
        let rules = vec![
            Rule {
                keywords: &["bonjour", "salut", "hello"],
                reply: "Bonjour! Comment puis-je vous aider aujourd'hui?".to_string(),
            },
            Rule {
                keywords: &["prix", "tarif", "coût"],
                reply: "Nos prix varient selon les produits. Vous pouvez consulter notre page \
                        Boutique pour voir tous nos produits et leurs prix."
                    .to_string(),
            },
            Rule {
                keywords: &["contact", "joindre", "appeler"],
                reply: format!(
                    "Vous pouvez nous contacter par téléphone au {} ou via notre formulaire \
                     de contact sur la page Contact.",
                    config.contact_phone
                ),
            },
            Rule {
                keywords: &["adresse", "localisation", "situer"],
                reply: format!(
                    "Nous sommes situés à {}. Notre adresse exacte: {}",
                    config.shop_city, config.shop_address
                ),
            },
            Rule {
                keywords: &["livraison", "délai"],
                reply: "Nous proposons la livraison dans tous les pays où nous opérons. Le \
                        délai de livraison varie généralement de 2 à 5 jours ouvrables selon \
                        votre localisation."
                    .to_string(),
            },
            Rule {
                keywords: &["pays", "international"],
                reply: format!("Nous opérons {countries}."),
            },
            Rule {
                keywords: &["merci"],
                reply: "Je vous en prie! N'hésitez pas si vous avez d'autres questions."
                    .to_string(),
            },
        ];

        let fallback = format!(
            "Merci pour votre message. Pour une assistance plus personnalisée, n'hésitez \
             pas à nous contacter directement via notre page Contact ou par téléphone au {}.",
            config.contact_phone
        );

        Self { rules, fallback }
    }

    /// Pick the reply for a shopper message.
    ///
    /// Total over all inputs: matching is case-insensitive, first match
    /// wins, and the fallback guarantees exactly one non-empty reply.
    #[must_use]
    pub fn reply(&self, message: &str) -> &str {
        let lowered = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| lowered.contains(k)))
            .map_or(self.fallback.as_str(), |rule| rule.reply.as_str())
    }
}

/// The assistant's opening message.
fn greeting(config: &StorefrontConfig) -> String {
    format!(
        "Bonjour! Je suis l'assistant virtuel de {}. Comment puis-je vous aider aujourd'hui?",
        config.shop_name
    )
}

/// Join country phrases the French way: "a, b, c et d".
fn join_countries(countries: &[String]) -> String {
    match countries {
        [] => "dans la sous-région".to_string(),
        [only] => only.clone(),
        [rest @ .., last] => format!("{} et {last}", rest.join(", ")),
    }
}

/// One shopper's chat widget: transcript, rule table and typing delay.
pub struct ChatService {
    session: ChatSession,
    responder: Responder,
    typing_delay: std::time::Duration,
}

impl ChatService {
    /// Open a widget seeded with the assistant greeting.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            session: ChatSession::new(greeting(config)),
            responder: Responder::new(config),
            typing_delay: config.typing_delay,
        }
    }

    /// Submit a shopper message and wait for the assistant's reply.
    ///
    /// The typing delay runs between the submission and the reply; while
    /// it runs the session rejects further submissions.
    ///
    /// # Errors
    ///
    /// Returns `ChatError` for blank input or while a reply is pending.
    #[instrument(skip(self, text))]
    pub async fn send(&mut self, text: &str) -> Result<&ChatMessage, ChatError> {
        self.session.submit(text)?;
        sleep(self.typing_delay).await;

        let reply = self.responder.reply(text).to_owned();
        Ok(self.session.push_bot_reply(reply))
    }

    /// The full transcript, oldest first.
    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        self.session.transcript()
    }

    /// Whether the typing indicator should show.
    #[must_use]
    pub const fn is_typing(&self) -> bool {
        self.session.awaiting_reply()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbc_core::ChatSender;
    use std::time::Duration;

    fn responder() -> Responder {
        Responder::new(&StorefrontConfig::default())
    }

    fn fast_config() -> StorefrontConfig {
        StorefrontConfig {
            typing_delay: Duration::from_millis(1),
            ..StorefrontConfig::default()
        }
    }

    #[test]
    fn test_reply_is_total_and_non_empty() {
        let responder = responder();
        for input in ["", "   ", "xyzzy", "??!", "je cherche un truc", "émoji 🙂"] {
            assert!(!responder.reply(input).is_empty(), "no reply for {input:?}");
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let responder = responder();
        assert_eq!(responder.reply("BONJOUR"), responder.reply("bonjour"));
        assert_eq!(responder.reply("Coût d'un PC?"), responder.reply("coût d'un pc?"));
    }

    #[test]
    fn test_first_match_wins_over_later_rules() {
        let responder = responder();
        // Contains both a greeting and a pricing keyword; greeting is
        // checked first, so it wins.
        let reply = responder.reply("Bonjour, quel est le prix?");
        assert_eq!(reply, "Bonjour! Comment puis-je vous aider aujourd'hui?");
    }

    #[test]
    fn test_price_question_refers_to_shop_page() {
        let responder = responder();
        let reply = responder.reply("Quel est le prix?");
        assert!(reply.contains("page Boutique"));
    }

    #[test]
    fn test_greeting_message() {
        let responder = responder();
        let reply = responder.reply("Bonjour, ça va?");
        assert_eq!(reply, "Bonjour! Comment puis-je vous aider aujourd'hui?");
    }

    #[test]
    fn test_contact_reply_quotes_configured_phone() {
        let config = StorefrontConfig {
            contact_phone: "+228 90 11 22 33".to_string(),
            ..StorefrontConfig::default()
        };
        let reply = Responder::new(&config).reply("comment vous joindre?").to_owned();
        assert!(reply.contains("+228 90 11 22 33"));
    }

    #[test]
    fn test_countries_reply_lists_them_all() {
        let responder = responder();
        let reply = responder.reply("Livrez-vous à l'international?");
        assert!(reply.contains("au Togo"));
        assert!(reply.contains("et au Sénégal"));
    }

    #[test]
    fn test_unmatched_input_gets_the_fallback() {
        let responder = responder();
        let reply = responder.reply("ma commande 1234");
        assert!(reply.starts_with("Merci pour votre message."));
    }

    #[test]
    fn test_join_countries_shapes() {
        assert_eq!(join_countries(&[]), "dans la sous-région");
        assert_eq!(join_countries(&["au Togo".to_string()]), "au Togo");
        assert_eq!(
            join_countries(&["au Togo".to_string(), "au Mali".to_string()]),
            "au Togo et au Mali"
        );
    }

    #[tokio::test]
    async fn test_send_appends_user_and_bot_messages() {
        let mut chat = ChatService::new(&fast_config());
        let reply = chat.send("Merci beaucoup!").await.expect("send");

        assert_eq!(reply.sender, ChatSender::Bot);
        assert_eq!(reply.content, "Je vous en prie! N'hésitez pas si vous avez d'autres questions.");
        // Greeting + user message + reply.
        assert_eq!(chat.transcript().len(), 3);
        assert!(!chat.is_typing());
    }

    #[tokio::test]
    async fn test_send_blank_is_rejected_without_transcript_growth() {
        let mut chat = ChatService::new(&fast_config());
        let result = chat.send("  ").await;
        assert!(matches!(result, Err(ChatError::EmptyMessage)));
        assert_eq!(chat.transcript().len(), 1);
    }
}
