use tracing::{debug, warn};

use super::matcher::match_trend;
use super::{clamp_score, ensure_finite, mean, round_one_decimal};
use crate::domain::concept::{
    AnalysisBreakdown, AnalysisResult, IngredientInsight, IngredientScoreSummary, ProductConcept,
    ScoreComponents, SimilarProductsSummary,
};
use crate::domain::same_text;
use crate::domain::template::AnalysisTemplate;
use crate::domain::trend::TrendRecord;
use crate::errors::ScoringError;

/// Popularity and growth assumed for ingredients with no trend data. These
/// intentionally differ from the single-score path's fallback.
pub const FALLBACK_POPULARITY: f64 = 60.0;
pub const FALLBACK_GROWTH_RATE: f64 = 5.0;

const TRENDING_POPULARITY: f64 = 80.0;
const TRENDING_GROWTH: f64 = 10.0;

const DEFAULT_SIMILAR_MARKET_DEMAND: f64 = 75.0;
const DEFAULT_SIMILAR_COMPETITION: f64 = 80.0;

const SIMILAR_NAME_TOKENS: usize = 3;
const UNFILTERED_SIMILAR_LIMIT: usize = 10;

const INNOVATION_BASE: f64 = 70.0;
const INNOVATION_GROWTH_CAP: f64 = 15.0;
const CROWDED_SIMILAR_COUNT: usize = 15;

const LOW_GROWTH_THRESHOLD: f64 = 5.0;
const HIGH_COMPETITION_THRESHOLD: f64 = 85.0;

pub const RECOMMEND_EXCELLENT: &str =
    "Excellent market opportunity with strong potential for success. Recommend immediate development.";
pub const RECOMMEND_DIFFERENTIATE: &str =
    "Good market potential but high competition. Focus on differentiation strategy.";
pub const RECOMMEND_PROCEED: &str =
    "Strong market opportunity with manageable competition. Proceed with development.";
pub const RECOMMEND_REFORMULATE: &str =
    "Moderate potential. Consider reformulation with more trending ingredients.";
pub const RECOMMEND_TEST_MARKET: &str =
    "Decent opportunity with innovation potential. Conduct market testing.";
pub const RECOMMEND_REPOSITION: &str =
    "Limited market potential. Significant reformulation or repositioning recommended.";

pub const STANDARD_RISK: &str = "Low risk profile. Standard market entry risks apply.";
const DEFAULT_RECOMMENDATION: &str =
    "Analysis completed with default parameters. Conduct additional market research before development.";
const DEFAULT_RISK: &str = "Standard market risks apply. Detailed risk analysis was unavailable.";

/// Full multi-factor analysis of a product concept. Never fails: any
/// [`ScoringError`] is logged and replaced by [`default_analysis`].
pub fn analyze_concept(
    concept: &ProductConcept,
    trends: &[TrendRecord],
    templates: &[AnalysisTemplate],
) -> AnalysisResult {
    match try_analyze_concept(concept, trends, templates) {
        Ok(result) => result,
        Err(error) => {
            warn!(
                event_name = "scoring.analysis.fallback",
                concept = %concept.name,
                category = %concept.category,
                region = %concept.region,
                error = %error,
                "concept analysis fell back to default report"
            );
            default_analysis()
        }
    }
}

/// The fixed report returned when an analysis cannot be computed.
pub fn default_analysis() -> AnalysisResult {
    AnalysisResult {
        overall_score: 75.0,
        market_demand: 75.0,
        ingredient_trends: 70.0,
        competition_level: 80.0,
        innovation_factor: 75.0,
        recommendation: DEFAULT_RECOMMENDATION.to_string(),
        risk_factor: DEFAULT_RISK.to_string(),
        analysis_breakdown: AnalysisBreakdown { used_default: true, ..AnalysisBreakdown::default() },
    }
}

pub fn try_analyze_concept(
    concept: &ProductConcept,
    trends: &[TrendRecord],
    templates: &[AnalysisTemplate],
) -> Result<AnalysisResult, ScoringError> {
    let (summary, insights) = summarize_ingredients(concept, trends)?;
    let similar = similar_analyses(concept, templates);
    let similar_summary = summarize_similar(&similar)?;

    let trending_bonus = (f64::from(summary.trending_count) * 3.0).min(10.0);
    let match_bonus = f64::from(summary.regional_matches + summary.category_matches) * 2.0;
    let market_demand = clamp_score(ensure_finite(
        "market_demand",
        summary.avg_popularity * 0.4
            + similar_summary.avg_market_demand * 0.4
            + trending_bonus
            + match_bonus,
    )?);

    let category_count =
        templates.iter().filter(|template| same_text(&template.category, &concept.category)).count();
    let category_saturation = if templates.is_empty() {
        0.0
    } else {
        100.0 * category_count as f64 / templates.len() as f64
    };
    let similarity_competition = (similar.len() as f64 * 2.0).min(50.0);
    let competition_level = clamp_score(ensure_finite(
        "competition_level",
        category_saturation * 0.3
            + similarity_competition * 0.3
            + similar_summary.avg_competition_level * 0.4,
    )?);

    let crowded_penalty = if similar.len() > CROWDED_SIMILAR_COUNT { 5.0 } else { 0.0 };
    let innovation_factor = clamp_score(ensure_finite(
        "innovation_factor",
        INNOVATION_BASE
            + summary.avg_growth_rate.min(INNOVATION_GROWTH_CAP)
            + f64::from(summary.trending_count) * 5.0
            + 10usize.saturating_sub(similar.len()) as f64
            - crowded_penalty,
    )?);

    let ingredient_trends = clamp_score(summary.avg_popularity);
    let overall_score = clamp_score(ensure_finite(
        "overall_score",
        market_demand * 0.25
            + summary.avg_popularity * 0.25
            + (100.0 - competition_level) * 0.20
            + innovation_factor * 0.30,
    )?);

    let overall_score = round_one_decimal(overall_score);
    let competition_level = round_one_decimal(competition_level);
    let innovation_factor = round_one_decimal(innovation_factor);

    debug!(
        event_name = "scoring.analysis.completed",
        concept = %concept.name,
        overall_score,
        similar_count = similar.len(),
        trending_count = summary.trending_count,
        "concept analysis completed"
    );

    Ok(AnalysisResult {
        overall_score,
        market_demand: round_one_decimal(market_demand),
        ingredient_trends: round_one_decimal(ingredient_trends),
        competition_level,
        innovation_factor,
        recommendation: recommendation_for(overall_score, competition_level, innovation_factor)
            .to_string(),
        risk_factor: risk_assessment(&summary, competition_level),
        analysis_breakdown: AnalysisBreakdown {
            ingredient_summary: summary,
            ingredients: insights,
            similar_products: similar_summary,
            score_components: ScoreComponents {
                trending_bonus,
                match_bonus,
                category_saturation: round_one_decimal(category_saturation),
                similarity_competition,
            },
            used_default: false,
        },
    })
}

fn summarize_ingredients(
    concept: &ProductConcept,
    trends: &[TrendRecord],
) -> Result<(IngredientScoreSummary, Vec<IngredientInsight>), ScoringError> {
    let mut summary = IngredientScoreSummary::default();
    let mut insights = Vec::new();

    for ingredient in concept.ingredient_list() {
        let found = match_trend(ingredient, &concept.region, &concept.category, trends);
        let (popularity, growth_rate) = match &found {
            Some(found) => (found.record.popularity_score, found.record.growth_rate),
            None => (FALLBACK_POPULARITY, FALLBACK_GROWTH_RATE),
        };
        let popularity = ensure_finite("ingredient_popularity", popularity)?;
        let growth_rate = ensure_finite("ingredient_growth_rate", growth_rate)?;

        let tier = found.map(|found| found.tier);
        if tier.is_some_and(|tier| tier.matches_region()) {
            summary.regional_matches += 1;
        }
        if tier.is_some_and(|tier| tier.matches_category()) {
            summary.category_matches += 1;
        }

        let trending = popularity > TRENDING_POPULARITY && growth_rate > TRENDING_GROWTH;
        if trending {
            summary.trending_count += 1;
        }

        insights.push(IngredientInsight {
            ingredient: ingredient.to_string(),
            popularity,
            growth_rate,
            matched_tier: tier,
            trending,
        });
    }

    summary.total_ingredients = insights.len() as u32;
    summary.avg_popularity = mean(insights.iter().map(|insight| insight.popularity))
        .ok_or_else(|| ScoringError::computation("ingredient_summary", "no ingredients"))?;
    summary.avg_growth_rate = mean(insights.iter().map(|insight| insight.growth_rate))
        .ok_or_else(|| ScoringError::computation("ingredient_summary", "no ingredients"))?;

    Ok((summary, insights))
}

/// Benchmark analyses for the concept: same category, else templates whose
/// name mentions one of the first three ingredients, else the first ten.
fn similar_analyses<'a>(
    concept: &ProductConcept,
    templates: &'a [AnalysisTemplate],
) -> Vec<&'a AnalysisTemplate> {
    let by_category: Vec<&AnalysisTemplate> = templates
        .iter()
        .filter(|template| same_text(&template.category, &concept.category))
        .collect();
    if !by_category.is_empty() {
        return by_category;
    }

    let tokens: Vec<String> = concept
        .ingredient_list()
        .into_iter()
        .take(SIMILAR_NAME_TOKENS)
        .map(str::to_lowercase)
        .collect();
    let by_name: Vec<&AnalysisTemplate> = templates
        .iter()
        .filter(|template| {
            let name = template.product_name.to_lowercase();
            tokens.iter().any(|token| name.contains(token.as_str()))
        })
        .collect();
    if !by_name.is_empty() {
        return by_name;
    }

    templates.iter().take(UNFILTERED_SIMILAR_LIMIT).collect()
}

fn summarize_similar(similar: &[&AnalysisTemplate]) -> Result<SimilarProductsSummary, ScoringError> {
    let avg_market_demand = mean(similar.iter().map(|template| template.market_demand))
        .unwrap_or(DEFAULT_SIMILAR_MARKET_DEMAND);
    let avg_competition_level = mean(similar.iter().map(|template| template.competition_level))
        .unwrap_or(DEFAULT_SIMILAR_COMPETITION);

    Ok(SimilarProductsSummary {
        count: similar.len() as u32,
        avg_market_demand: ensure_finite("similar_market_demand", avg_market_demand)?,
        avg_competition_level: ensure_finite("similar_competition", avg_competition_level)?,
        examples: similar.iter().take(3).map(|template| template.product_name.clone()).collect(),
    })
}

pub fn recommendation_for(
    overall_score: f64,
    competition_level: f64,
    innovation_factor: f64,
) -> &'static str {
    if overall_score >= 85.0 {
        RECOMMEND_EXCELLENT
    } else if overall_score >= 75.0 {
        if competition_level > 85.0 {
            RECOMMEND_DIFFERENTIATE
        } else {
            RECOMMEND_PROCEED
        }
    } else if overall_score >= 65.0 {
        if innovation_factor < 70.0 {
            RECOMMEND_REFORMULATE
        } else {
            RECOMMEND_TEST_MARKET
        }
    } else {
        RECOMMEND_REPOSITION
    }
}

pub fn risk_assessment(summary: &IngredientScoreSummary, competition_level: f64) -> String {
    let checks = [
        (summary.trending_count == 0, "no trending ingredients identified"),
        (competition_level > HIGH_COMPETITION_THRESHOLD, "high market competition"),
        (summary.regional_matches == 0, "limited regional market data"),
        (summary.avg_growth_rate < LOW_GROWTH_THRESHOLD, "low ingredient growth momentum"),
    ];
    let risks: Vec<&str> =
        checks.iter().filter(|(triggered, _)| *triggered).map(|(_, risk)| *risk).collect();

    match risks.len() {
        0 => STANDARD_RISK.to_string(),
        1 | 2 => format!("Moderate risks: {}.", risks.join(", ")),
        _ => format!("High risks: {}.", risks.join(", ")),
    }
}
