//! Attendee directory fixture.

use crate::domain::Attendant;

fn attendant(id: u32, name: &str, role: &str, company: &str, interests: [&str; 2]) -> Attendant {
    Attendant {
        id,
        name: name.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        interests: interests.iter().map(ToString::to_string).collect(),
    }
}

#[must_use]
pub fn attendants() -> Vec<Attendant> {
    vec![
        attendant(1, "Alex Johnson", "Developer", "Ethereum Foundation", ["Smart Contracts", "Layer 2"]),
        attendant(2, "Maria Garcia", "Researcher", "Chainlink Labs", ["Oracles", "ZK Proofs"]),
        attendant(3, "James Wilson", "Founder", "ZK Solutions", ["Privacy", "Scaling"]),
        attendant(4, "Sarah Ahmed", "Designer", "Polygon", ["UX Design", "NFTs"]),
        attendant(5, "Michael Patel", "Engineer", "Arbitrum", ["Optimistic Rollups", "DeFi"]),
        attendant(6, "Emma Rodriguez", "Product Manager", "Uniswap", ["DEX", "Tokenomics"]),
        attendant(7, "David Kim", "Community Lead", "Optimism", ["DAOs", "Community Building"]),
        attendant(8, "Nina Chen", "Protocol Engineer", "Scroll", ["ZK Rollups", "EVM"]),
    ]
}
