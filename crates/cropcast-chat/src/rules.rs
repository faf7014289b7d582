//! Canned reply selection.
//!
//! Replies come from a fixed, priority-ordered rule table. Rules are
//! evaluated top-down against the lowercased input; the first rule whose
//! keyword set matches wins, and input matching no rule receives
//! [`FALLBACK_REPLY`]. Selection is therefore a total function over input
//! text, and deterministic: the same input always yields the same reply.

/// One entry of the reply table.
#[derive(Debug)]
pub struct ReplyRule {
    /// Short name for logging and diagnostics.
    pub name: &'static str,
    /// Lowercase keywords matched as substrings of the input.
    pub keywords: &'static [&'static str],
    /// Canned reply returned when the rule matches.
    pub reply: &'static str,
}

impl ReplyRule {
    /// Whether any keyword occurs in the lowercased input.
    fn matches(&self, input_lower: &str) -> bool {
        self.keywords.iter().any(|kw| input_lower.contains(kw))
    }
}

/// The reply table, in precedence order: earlier rules beat later ones when
/// several match.
pub static REPLY_RULES: &[ReplyRule] = &[
    ReplyRule {
        name: "weather",
        keywords: &["weather"],
        reply: "Based on current weather data, expect partly cloudy conditions with \
                temperatures around 28°C. There's a 30% chance of rain in the next 3 days. \
                Would you like detailed weather forecasts for your specific location?",
    },
    ReplyRule {
        name: "pests",
        keywords: &["pest", "bug", "insect"],
        reply: "I can help identify pests! You can upload images through the Pest Detection \
                feature. Common pests this season include aphids, leaf miners, and bollworms. \
                Would you like specific treatment recommendations?",
    },
    ReplyRule {
        name: "market",
        keywords: &["price", "market"],
        reply: "Current market prices: Wheat ₹2,150/quintal, Rice ₹3,200/quintal, Cotton \
                ₹5,800/quintal. Prices are trending upward this week. Would you like prices \
                for specific crops or mandis?",
    },
    ReplyRule {
        name: "soil",
        keywords: &["fertilizer", "soil"],
        reply: "For optimal soil health, I recommend getting a soil test first. Generally, \
                NPK 10-26-26 works well for most crops during planting. Organic options \
                include vermicompost and neem cake. What crop are you planning to grow?",
    },
    ReplyRule {
        name: "yield",
        keywords: &["yield", "production"],
        reply: "Yield predictions depend on crop type, soil condition, weather, and farming \
                practices. Our AI model can predict yields with 95% accuracy. Would you like \
                to run a yield prediction for your specific crop?",
    },
];

/// Reply for input that matches no rule.
pub const FALLBACK_REPLY: &str =
    "That's a great question! I'm here to help with farming advice, crop management, \
     pest control, weather updates, and market prices. Could you please be more specific \
     about what you'd like to know?";

/// Find the first rule matching the input, if any.
pub fn match_rule(input: &str) -> Option<&'static ReplyRule> {
    let lower = input.to_lowercase();
    REPLY_RULES.iter().find(|rule| rule.matches(&lower))
}

/// Select the canned reply for raw user input.
pub fn select_reply(input: &str) -> &'static str {
    match match_rule(input) {
        Some(rule) => rule.reply,
        None => FALLBACK_REPLY,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Rule matching ----

    #[test]
    fn test_weather_keyword_matches() {
        let reply = select_reply("What's the weather like?");
        assert!(reply.contains("partly cloudy"));
        assert!(reply.contains("28°C"));
    }

    #[test]
    fn test_pest_keywords_match() {
        for input in ["any pests around?", "there's a bug on my leaves", "insect damage"] {
            let reply = select_reply(input);
            assert!(reply.contains("aphids"), "no pest reply for {:?}", input);
        }
    }

    #[test]
    fn test_market_keywords_match() {
        assert!(select_reply("wheat price today").contains("₹2,150/quintal"));
        assert!(select_reply("how is the market").contains("₹2,150/quintal"));
    }

    #[test]
    fn test_soil_keywords_match() {
        assert!(select_reply("which fertilizer should I use").contains("NPK 10-26-26"));
        assert!(select_reply("my soil looks dry").contains("soil test"));
    }

    #[test]
    fn test_yield_keywords_match() {
        assert!(select_reply("predict my yield").contains("95% accuracy"));
        assert!(select_reply("rice production estimate").contains("95% accuracy"));
    }

    // ---- Case and substring behavior ----

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(select_reply("WEATHER"), select_reply("weather"));
        assert_eq!(select_reply("Tell me about the WeAtHeR"), select_reply("weather"));
    }

    #[test]
    fn test_keyword_matches_inside_words() {
        // Substring semantics: "debug" contains "bug".
        assert!(select_reply("debug").contains("aphids"));
    }

    // ---- Precedence ----

    #[test]
    fn test_first_rule_wins_when_several_match() {
        // "weather" is rule 1 and beats the later soil and yield rules.
        let reply = select_reply("how does weather affect soil and yield?");
        assert!(reply.contains("partly cloudy"));
    }

    #[test]
    fn test_pests_beat_market() {
        let reply = select_reply("pest treatment price");
        assert!(reply.contains("aphids"));
    }

    #[test]
    fn test_weather_wins_with_unrelated_words() {
        let reply = select_reply("random filler words weather more filler");
        assert!(reply.contains("partly cloudy"));
    }

    #[test]
    fn test_rule_order_is_stable() {
        let names: Vec<&str> = REPLY_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["weather", "pests", "market", "soil", "yield"]);
    }

    // ---- Fallback ----

    #[test]
    fn test_unmatched_input_gets_fallback() {
        assert_eq!(select_reply("hello there"), FALLBACK_REPLY);
        assert_eq!(select_reply("how do tractors work"), FALLBACK_REPLY);
    }

    #[test]
    fn test_fallback_is_idempotent() {
        // Any two keyword-free inputs produce the same fallback text.
        assert_eq!(select_reply("completely unrelated"), select_reply("also unrelated"));
    }

    #[test]
    fn test_match_rule_none_for_unmatched() {
        assert!(match_rule("hello there").is_none());
    }

    // ---- Determinism ----

    #[test]
    fn test_selection_is_deterministic() {
        let input = "what's the weather like today?";
        let first = select_reply(input);
        for _ in 0..10 {
            assert_eq!(select_reply(input), first);
        }
    }

    #[test]
    fn test_every_rule_is_reachable() {
        for rule in REPLY_RULES {
            let representative = rule.keywords[0];
            let matched = match_rule(representative).expect("keyword should match its own rule");
            assert_eq!(matched.name, rule.name);
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        // Matching lowercases the input only, so table keywords must already
        // be lowercase.
        for rule in REPLY_RULES {
            for kw in rule.keywords {
                assert_eq!(*kw, kw.to_lowercase());
            }
        }
    }
}
