//! Keyword chatbot.
//!
//! Replies come from an ordered rule table: the first rule with a keyword contained in the
//! lowercased message wins, otherwise the fallback is returned. Rules overlap ("help with
//! diabetes" hits two), so the order of the table is part of the behaviour.
//!
//! The NAMASTE and ICD-11 codes quoted in the replies are fixed text. They are not looked up
//! in the catalogue, and the prepared data file no longer carries an `icd11` column at all.

use namaste_types::ChatMessage;

/// A canned reply triggered by any one of its keywords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatRule {
    keywords: Vec<String>,
    response: String,
}

impl ChatRule {
    /// Keywords are lowercased so they compare against lowercased messages.
    pub fn new<I, S>(keywords: I, response: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            response: response.into(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    fn matches(&self, message: &ChatMessage) -> bool {
        self.keywords.iter().any(|k| message.contains(k))
    }
}

pub const DIABETES_RESPONSE: &str =
    "Diabetes Mellitus has NAMASTE code NAM-DM-001 and ICD-11 code EE90.0.";
pub const VATA_RESPONSE: &str = "Vata Vyadhi has NAMASTE code NAM-VV-101 and ICD-11 code QD85.0.";
pub const HYPERTENSION_RESPONSE: &str =
    "Hypertension has NAMASTE code NAM-HTN-002 and ICD-11 code EE91.1.";
pub const ASTHMA_RESPONSE: &str = "Asthma has NAMASTE code 1234 and ICD-11 code ABCD.";
pub const HELP_RESPONSE: &str = "I can help you find NAMASTE and ICD-11 codes for diseases. Try asking about specific conditions like diabetes, hypertension, vata vyadhi, or asthma.";
pub const FALLBACK_RESPONSE: &str = "I understand you're asking about medical codes. Please specify a disease name, and I'll provide the corresponding NAMASTE and ICD-11 codes.";

/// Ordered keyword-to-reply table with a fallback. Stateless between calls.
#[derive(Clone, Debug)]
pub struct Chatbot {
    rules: Vec<ChatRule>,
    fallback: String,
}

impl Chatbot {
    pub fn new(rules: Vec<ChatRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// Returns the reply for `message`.
    pub fn reply(&self, message: &ChatMessage) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.matches(message))
            .map(ChatRule::response)
            .unwrap_or(self.fallback.as_str())
    }

    pub fn rules(&self) -> &[ChatRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for Chatbot {
    fn default() -> Self {
        Self::new(
            vec![
                ChatRule::new(["diabetes"], DIABETES_RESPONSE),
                ChatRule::new(["vata"], VATA_RESPONSE),
                ChatRule::new(["hypertension"], HYPERTENSION_RESPONSE),
                ChatRule::new(["asthma"], ASTHMA_RESPONSE),
                ChatRule::new(["help", "what"], HELP_RESPONSE),
            ],
            FALLBACK_RESPONSE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(message: &str) -> String {
        Chatbot::default().reply(&ChatMessage::new(message)).to_string()
    }

    #[test]
    fn test_diabetes_reply_is_exact() {
        assert_eq!(
            reply("Tell me about diabetes"),
            "Diabetes Mellitus has NAMASTE code NAM-DM-001 and ICD-11 code EE90.0."
        );
    }

    #[test]
    fn test_empty_message_gets_fallback() {
        assert_eq!(
            reply(""),
            "I understand you're asking about medical codes. Please specify a disease name, and I'll provide the corresponding NAMASTE and ICD-11 codes."
        );
    }

    #[test]
    fn test_what_triggers_help() {
        assert_eq!(reply("what can you do"), HELP_RESPONSE);
        assert_eq!(reply("HELP"), HELP_RESPONSE);
    }

    #[test]
    fn test_rule_order_decides_overlaps() {
        assert_eq!(reply("help me with diabetes"), DIABETES_RESPONSE);
        assert_eq!(reply("asthma or hypertension?"), HYPERTENSION_RESPONSE);
        assert_eq!(reply("vata and diabetes"), DIABETES_RESPONSE);
        assert_eq!(reply("what is vata vyadhi"), VATA_RESPONSE);
        assert_eq!(reply("raktagata vata hypertension"), VATA_RESPONSE);
        assert_eq!(reply("hypertension with asthma"), HYPERTENSION_RESPONSE);
        assert_eq!(reply("what about asthma"), ASTHMA_RESPONSE);
    }

    #[test]
    fn test_matching_is_substring_based() {
        // "whatever" contains "what".
        assert_eq!(reply("whatever"), HELP_RESPONSE);
        assert_eq!(reply("Hypertensions"), HYPERTENSION_RESPONSE);
    }

    #[test]
    fn test_unknown_message_gets_fallback() {
        assert_eq!(reply("tell me about migraine"), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_custom_rules_are_lowercased() {
        let bot = Chatbot::new(vec![ChatRule::new(["Migraine"], "ardhavabhedaka")], "none");
        assert_eq!(bot.rules()[0].keywords(), ["migraine"]);
        assert_eq!(bot.reply(&ChatMessage::new("MIGRAINE again")), "ardhavabhedaka");
        assert_eq!(bot.reply(&ChatMessage::new("")), bot.fallback());
    }
}
