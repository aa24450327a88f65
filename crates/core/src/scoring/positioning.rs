use crate::domain::competitor::{Competitor, MarketPosition, PositionedCompetitor};

/// Classifies a competitor from market share, average product score and
/// growth trend. Branches are evaluated in order; the first match wins.
pub fn classify_position(market_share: f64, average_score: f64, growth_trend: f64) -> MarketPosition {
    if market_share > 15.0 && average_score > 85.0 {
        MarketPosition::MarketLeader
    } else if growth_trend > 10.0 && average_score > 80.0 {
        MarketPosition::RisingStar
    } else if market_share > 10.0 {
        MarketPosition::EstablishedPlayer
    } else if growth_trend > 8.0 {
        MarketPosition::EmergingCompetitor
    } else if average_score > 85.0 {
        MarketPosition::QualityFocused
    } else {
        MarketPosition::NichePlayer
    }
}

pub fn position_competitor(competitor: Competitor) -> PositionedCompetitor {
    let market_position = classify_position(
        competitor.market_share,
        competitor.avg_product_score,
        competitor.growth_trend,
    );
    PositionedCompetitor { competitor, market_position }
}
