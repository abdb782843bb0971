//! Bot-mention stripping.
//!
//! A bot that quotes user text back into a thread must not re-trigger itself on
//! its own `@mention`. [`BotIdentity::redact`] turns every `@<bot>` (any casing)
//! into the bare configured name, so the text stays readable but no longer pings.

use log::debug;
use regex::{NoExpand, Regex, RegexBuilder};

use crate::errors::BotguardError;

/// A configured bot handle together with its compiled mention matcher.
#[derive(Debug, Clone)]
pub struct BotIdentity {
    display: String,
    mention: Regex,
}

impl BotIdentity {
    /// Builds an identity from a raw configuration value.
    ///
    /// Leading `@` characters are treated as decoration and removed, as is
    /// surrounding whitespace. Returns `Ok(None)` when nothing is left, which
    /// callers treat as "identity redaction disabled". A name with an `@` past
    /// the prefix is rejected.
    pub fn parse(raw: Option<&str>) -> Result<Option<Self>, BotguardError> {
        let Some(raw) = raw else { return Ok(None) };
        let display = raw.trim().trim_start_matches('@').trim();
        if display.is_empty() {
            debug!("Bot identity is empty after normalization; mention stripping disabled.");
            return Ok(None);
        }
        if display.contains('@') {
            return Err(BotguardError::InvalidBotName(display.to_string()));
        }

        // The whole run of `@` belongs to the match, so a replacement can never
        // leave a mention behind.
        let mention = RegexBuilder::new(&format!("@+{}", regex::escape(display)))
            .case_insensitive(true)
            .build()
            .map_err(|e| BotguardError::IdentityPattern(display.to_string(), e))?;

        debug!("Compiled mention matcher for bot identity '{}'.", display);
        Ok(Some(Self {
            display: display.to_string(),
            mention,
        }))
    }

    /// The canonical form: configured casing, without the `@`.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Replaces every `@<bot>` mention in `text` with the canonical bare name.
    pub fn redact(&self, text: &str) -> String {
        self.mention.replace_all(text, NoExpand(&self.display)).into_owned()
    }
}

/// Strips bot self-mentions from optional text.
///
/// Absent text stays absent; without an identity the text is returned unchanged.
pub fn strip_bot_mentions(text: Option<&str>, identity: Option<&BotIdentity>) -> Option<String> {
    let text = text?;
    match identity {
        Some(identity) => Some(identity.redact(text)),
        None => Some(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(raw: &str) -> BotIdentity {
        BotIdentity::parse(Some(raw)).unwrap().unwrap()
    }

    #[test]
    fn test_parse_strips_leading_at() {
        assert_eq!(identity("@ClaudeBot").display(), "ClaudeBot");
        assert_eq!(identity("ClaudeBot").display(), "ClaudeBot");
        assert_eq!(identity(" @@ClaudeBot ").display(), "ClaudeBot");
    }

    #[test]
    fn test_parse_rejects_inner_at() {
        let err = BotguardError::InvalidBotName("a@b".to_string());
        assert_eq!(
            BotIdentity::parse(Some("@a@b")).unwrap_err().to_string(),
            err.to_string()
        );
    }

    #[test]
    fn test_parse_empty_or_bare_at_disables() {
        assert!(BotIdentity::parse(None).unwrap().is_none());
        assert!(BotIdentity::parse(Some("")).unwrap().is_none());
        assert!(BotIdentity::parse(Some("@")).unwrap().is_none());
        assert!(BotIdentity::parse(Some("@@@")).unwrap().is_none());
        assert!(BotIdentity::parse(Some("   ")).unwrap().is_none());
    }

    #[test]
    fn test_redact_normalizes_all_casings() {
        let bot = identity("@ClaudeBot");
        let out = bot.redact("Hey @claudebot and @CLAUDEBOT, also @ClaudeBot!");
        assert_eq!(out, "Hey ClaudeBot and ClaudeBot, also ClaudeBot!");
        assert!(!out.to_lowercase().contains("@claudebot"));
    }

    #[test]
    fn test_redact_leaves_other_mentions() {
        let bot = identity("bot");
        assert_eq!(bot.redact("@alice ping @Bot"), "@alice ping bot");
    }

    #[test]
    fn test_regex_metacharacters_in_name_are_literal() {
        let bot = identity("my.bot$");
        assert_eq!(bot.redact("@my.bot$ vs @myxbot$"), "my.bot$ vs @myxbot$");
    }

    #[test]
    fn test_replacement_is_not_expanded() {
        let bot = identity("$1bot");
        assert_eq!(bot.redact("hi @$1BOT"), "hi $1bot");
    }

    #[test]
    fn test_strip_bot_mentions_absent_and_unconfigured() {
        let bot = identity("bot");
        assert_eq!(strip_bot_mentions(None, Some(&bot)), None);
        assert_eq!(strip_bot_mentions(Some("@bot hi"), None), Some("@bot hi".to_string()));
        assert_eq!(strip_bot_mentions(Some(""), Some(&bot)), Some(String::new()));
    }

    #[test]
    fn test_redact_repeated_at_signs() {
        let bot = identity("bot");
        assert_eq!(bot.redact("@@bot and @@@BOT"), "bot and bot");
    }

    #[test]
    fn test_redact_long_at_run_in_one_pass() {
        let bot = identity("bot");
        let input = format!("{}bot", "@".repeat(100_000));
        assert_eq!(bot.redact(&input), "bot");

        let unmatched = format!("{}bo", "@".repeat(100_000));
        assert_eq!(bot.redact(&unmatched), unmatched);
    }

    #[test]
    fn test_redact_is_idempotent() {
        let bot = identity("Bot");
        let once = bot.redact("@bot @BOT text");
        assert_eq!(bot.redact(&once), once);
    }
}
