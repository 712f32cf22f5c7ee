//! Local replies used when the gateway cannot answer.
//!
//! Rules are evaluated in order against the lower-cased last user message;
//! the first rule with a matching keyword wins. The output depends only on
//! the message and the wallet context.

use crate::chat::format::to_fixed;
use crate::chat::types::WalletContext;

/// Which canned reply a message maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Holdings,
    Strategy,
}

struct Rule {
    topic: Topic,
    keywords: &'static [&'static str],
}

const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Holdings,
        keywords: &["balance", "sol"],
    },
    Rule {
        topic: Topic::Strategy,
        keywords: &["strategy", "invest", "defi"],
    },
];

pub const CONNECT_WALLET_REPLY: &str =
    "Connect your wallet to see your SOL balance and get AI-powered insights.";

pub const STRATEGY_REPLY: &str = "To get DeFi strategy analysis, start the OpenClaw gateway:

```
npm install -g openclaw
openclaw onboard
openclaw gateway run
```

Once running, I can analyze your holdings and suggest Marinade staking, Jupiter swaps, or Kamino vault strategies.";

pub const UNAVAILABLE_REPLY: &str = "OpenClaw gateway is not running. Start it with:

```bash
npm install -g openclaw
openclaw onboard --auth-choice apiKey --token-provider openrouter --token $OPENROUTER_API_KEY
openclaw gateway run
```

Default port: **18789**. Then refresh and ask me anything about your Solana portfolio.";

const HOLDINGS_SETUP: &str = "For full AI analysis, start the OpenClaw gateway:
```
npm install -g openclaw
openclaw gateway run
```";

/// First matching topic for `message`, if any.
pub fn classify(message: &str) -> Option<Topic> {
    let lower = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .map(|rule| rule.topic)
}

/// Build the fallback reply for the last user message and optional context.
pub fn fallback_reply(message: &str, context: Option<&WalletContext>) -> String {
    match classify(message) {
        Some(Topic::Holdings) => holdings_reply(context),
        Some(Topic::Strategy) => STRATEGY_REPLY.to_string(),
        None => UNAVAILABLE_REPLY.to_string(),
    }
}

fn holdings_reply(context: Option<&WalletContext>) -> String {
    let Some(ctx) = context else {
        return CONNECT_WALLET_REPLY.to_string();
    };
    let Some(balance) = ctx.sol_balance else {
        return CONNECT_WALLET_REPLY.to_string();
    };

    let value = ctx
        .portfolio_value
        .map(|v| to_fixed(v, 2))
        .unwrap_or_else(|| "—".to_string());

    format!(
        "Your SOL balance is {} SOL (~${value} USD).\n\n{HOLDINGS_SETUP}",
        to_fixed(balance, 4)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_balance(balance: f64, value: Option<f64>) -> WalletContext {
        WalletContext {
            wallet_address: Some("addr".into()),
            sol_balance: Some(balance),
            portfolio_value: value,
        }
    }

    #[test]
    fn test_classify_order_and_case() {
        assert_eq!(classify("What is my BALANCE?"), Some(Topic::Holdings));
        assert_eq!(classify("Best DeFi strategies?"), Some(Topic::Strategy));
        assert_eq!(classify("How should I Invest?"), Some(Topic::Strategy));
        // holdings rule is checked first
        assert_eq!(classify("balance strategy"), Some(Topic::Holdings));
        assert_eq!(classify("hello there"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_substring_match() {
        // "solana" contains "sol"
        assert_eq!(classify("tell me about solana"), Some(Topic::Holdings));
    }

    #[test]
    fn test_balance_with_context() {
        let reply = fallback_reply("what's my balance", Some(&with_balance(2.5, Some(310.0))));
        assert!(reply.starts_with("Your SOL balance is 2.5000 SOL (~$310.00 USD)."));
        assert!(reply.contains("openclaw gateway run"));
        assert!(!reply.contains("Connect your wallet"));
    }

    #[test]
    fn test_balance_without_portfolio_value() {
        let reply = fallback_reply("balance", Some(&with_balance(2.5, None)));
        assert!(reply.contains("2.5000 SOL (~$— USD)"));
    }

    #[test]
    fn test_balance_midpoint_rounding() {
        let reply = fallback_reply("balance", Some(&with_balance(0.03125, Some(12.625))));
        assert!(reply.starts_with("Your SOL balance is 0.0313 SOL (~$12.63 USD)."));
    }

    #[test]
    fn test_balance_without_wallet() {
        assert_eq!(fallback_reply("balance?", None), CONNECT_WALLET_REPLY);

        let no_balance = WalletContext {
            wallet_address: Some("addr".into()),
            sol_balance: None,
            portfolio_value: Some(10.0),
        };
        assert_eq!(fallback_reply("balance?", Some(&no_balance)), CONNECT_WALLET_REPLY);
    }

    #[test]
    fn test_strategy_ignores_context() {
        let a = fallback_reply("any strategy ideas?", None);
        let b = fallback_reply("any strategy ideas?", Some(&with_balance(99.0, Some(1.0))));
        assert_eq!(a, STRATEGY_REPLY);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generic_reply() {
        assert_eq!(fallback_reply("hi", Some(&with_balance(1.0, None))), UNAVAILABLE_REPLY);
    }

    #[test]
    fn test_deterministic() {
        let ctx = with_balance(0.123456, Some(7.0));
        assert_eq!(
            fallback_reply("Balance please", Some(&ctx)),
            fallback_reply("Balance please", Some(&ctx))
        );
    }
}
