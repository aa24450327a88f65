use flavorforge_core::domain::competitor::MarketPosition;
use flavorforge_core::scoring::classify_position;
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct ClassifyReport {
    market_share: f64,
    average_score: f64,
    growth_trend: f64,
    market_position: MarketPosition,
}

pub fn run(market_share: f64, average_score: f64, growth_trend: f64) -> CommandResult {
    CommandResult::report(
        "classify",
        ClassifyReport {
            market_share,
            average_score,
            growth_trend,
            market_position: classify_position(market_share, average_score, growth_trend),
        },
    )
}
