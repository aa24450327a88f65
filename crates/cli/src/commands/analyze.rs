use flavorforge_core::config::LoadOptions;
use flavorforge_core::domain::concept::{AnalysisResult, ProductConcept};
use flavorforge_core::scoring::{analyze_concept, default_analysis};
use flavorforge_data::{missing_as_empty, TabularDataProvider};
use serde::Serialize;

use crate::commands::{block_on, load_config, open_provider, CommandResult};

#[derive(Debug, Serialize)]
struct AnalyzeReport<'a> {
    concept: &'a str,
    analysis: AnalysisResult,
}

pub fn run(concept: &ProductConcept, options: LoadOptions) -> CommandResult {
    let config = match load_config("analyze", options) {
        Ok(config) => config,
        Err(result) => return result,
    };
    let provider = match open_provider("analyze", &config) {
        Ok(provider) => provider,
        Err(result) => return result,
    };

    let tables = block_on("analyze", async {
        let trends = missing_as_empty(provider.market_trends().await);
        let templates = missing_as_empty(provider.analysis_templates().await);
        (trends, templates)
    });
    let analysis = match tables {
        Ok((Ok(trends), Ok(templates))) => analyze_concept(concept, &trends, &templates),
        // Unreadable rows make the analysis incomputable rather than empty.
        Ok((Err(_), _) | (_, Err(_))) => default_analysis(),
        Err(result) => return result,
    };

    CommandResult::report("analyze", AnalyzeReport { concept: &concept.name, analysis })
}
