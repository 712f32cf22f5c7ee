//! System prompt construction.

use crate::chat::format::to_fixed;
use crate::chat::types::WalletContext;

/// Persona and domain knowledge sent as the first message of every upstream call.
pub const SYSTEM_PROMPT: &str = "You are an expert Solana investment advisor with deep knowledge of DeFi, tokenomics, on-chain analytics, and the Solana ecosystem. You help investors understand their portfolio and make informed decisions.

Protocols you know well: Marinade Finance, Jupiter, Orca, Raydium, Kamino, Drift.

Be concise, data-driven, and practical. Use bullet points for lists. Explain jargon in plain language.";

/// Header of the per-request context block.
pub const CONTEXT_HEADER: &str = "Current user context:";

/// Derive one line per present context value, in fixed order.
pub fn context_lines(context: &WalletContext) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);

    if let Some(address) = context.wallet_address.as_deref().filter(|a| !a.is_empty()) {
        lines.push(format!("Wallet: {address}"));
    }
    if let Some(balance) = context.sol_balance {
        lines.push(format!("SOL Balance: {} SOL", to_fixed(balance, 4)));
    }
    if let Some(value) = context.portfolio_value {
        lines.push(format!("Portfolio Value: ${} USD", to_fixed(value, 2)));
    }

    lines
}

/// Build the system prompt, appending the context block only when it has lines.
pub fn build_system_prompt(context: Option<&WalletContext>) -> String {
    let lines = context.map(context_lines).unwrap_or_default();

    if lines.is_empty() {
        return SYSTEM_PROMPT.to_string();
    }

    format!("{SYSTEM_PROMPT}\n\n{CONTEXT_HEADER}\n{}", lines.join("\n"))
}
