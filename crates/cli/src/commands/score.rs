use flavorforge_core::config::LoadOptions;
use flavorforge_core::scoring::{market_score, MarketScoreInput};
use flavorforge_data::TabularDataProvider;
use serde::Serialize;

use crate::commands::{block_on, load_config, open_provider, CommandResult};

#[derive(Clone, Debug, Default)]
pub struct ScoreArgs {
    pub ingredients: String,
    pub category: String,
    pub region: String,
    pub demographic: String,
}

#[derive(Debug, Serialize)]
struct ScoreReport<'a> {
    ingredients: &'a str,
    market_score: f64,
    trends_loaded: bool,
}

pub fn run(args: &ScoreArgs, options: LoadOptions) -> CommandResult {
    let config = match load_config("score", options) {
        Ok(config) => config,
        Err(result) => return result,
    };
    let provider = match open_provider("score", &config) {
        Ok(provider) => provider,
        Err(result) => return result,
    };

    let trends = match block_on("score", provider.market_trends()) {
        Ok(trends) => trends.ok(),
        Err(result) => return result,
    };

    let input = MarketScoreInput {
        ingredients: &args.ingredients,
        category: &args.category,
        region: &args.region,
        demographic: &args.demographic,
    };
    let score = market_score(input, trends.as_deref());

    CommandResult::report(
        "score",
        ScoreReport {
            ingredients: &args.ingredients,
            market_score: score,
            trends_loaded: trends.is_some(),
        },
    )
}
