use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub competitor_name: String,
    pub category: String,
    pub region: String,
    /// Percent of the category held by this competitor.
    pub market_share: f64,
    pub avg_product_score: f64,
    /// Signed year-over-year growth, in percent.
    pub growth_trend: f64,
    #[serde(default)]
    pub product_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketPosition {
    #[serde(rename = "Market Leader")]
    MarketLeader,
    #[serde(rename = "Rising Star")]
    RisingStar,
    #[serde(rename = "Established Player")]
    EstablishedPlayer,
    #[serde(rename = "Emerging Competitor")]
    EmergingCompetitor,
    #[serde(rename = "Quality Focused")]
    QualityFocused,
    #[serde(rename = "Niche Player")]
    NichePlayer,
}

impl MarketPosition {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MarketLeader => "Market Leader",
            Self::RisingStar => "Rising Star",
            Self::EstablishedPlayer => "Established Player",
            Self::EmergingCompetitor => "Emerging Competitor",
            Self::QualityFocused => "Quality Focused",
            Self::NichePlayer => "Niche Player",
        }
    }
}

impl std::fmt::Display for MarketPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A competitor row together with its classified market position.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PositionedCompetitor {
    #[serde(flatten)]
    pub competitor: Competitor,
    pub market_position: MarketPosition,
}
