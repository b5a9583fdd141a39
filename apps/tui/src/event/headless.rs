use crate::config::TuiConfig;
use crate::source::FsDataSource;
use color_eyre::Result;
use food_map_core::cities::position;
use food_map_core::loader::load_all;
use food_map_core::locale::translate;
use food_map_core::{Language, UiKey, CITIES};

#[derive(Debug, serde::Serialize)]
pub struct CitySummary {
    pub key: &'static str,
    pub name: &'static str,
    pub loaded: bool,
    pub dishes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(serde::Serialize)]
struct HeadlessReport<'a> {
    language: Language,
    loaded: usize,
    total: usize,
    cities: &'a [CitySummary],
}

/// Loads every city once and summarizes the outcome in registry order.
pub async fn build_summary(source: &FsDataSource, lang: Language) -> Vec<CitySummary> {
    let mut summaries = Vec::with_capacity(CITIES.len());
    load_all(source, &CITIES, |city, result| {
        let summary = match result {
            Ok(foods) => CitySummary {
                key: city.key,
                name: city.name(lang),
                loaded: true,
                dishes: foods
                    .foods
                    .iter()
                    .map(|dish| dish.name.get(lang).to_string())
                    .collect(),
                error: None,
            },
            Err(err) => {
                tracing::warn!(city = city.key, error = %err, "city data unavailable");
                CitySummary {
                    key: city.key,
                    name: city.name(lang),
                    loaded: false,
                    dishes: Vec::new(),
                    error: Some(err.to_string()),
                }
            }
        };
        summaries.push(summary);
    })
    .await;

    summaries.sort_by_key(|summary| position(summary.key));
    summaries
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(config: &TuiConfig, json: bool) -> Result<()> {
    let source = FsDataSource::new(config.data_dir.clone());
    let lang = config.map.initial_language;
    let summaries = build_summary(&source, lang).await;
    let loaded = summaries.iter().filter(|summary| summary.loaded).count();

    if json {
        let report = HeadlessReport {
            language: lang,
            loaded,
            total: summaries.len(),
            cities: &summaries,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n{}", translate(lang, UiKey::MainTitle));
    println!("=================");
    println!("Loaded {loaded}/{} cities from {}", summaries.len(), config.data_dir.display());

    for summary in &summaries {
        if summary.loaded {
            println!("- {} ({}): {}", summary.name, summary.key, summary.dishes.join(", "));
        } else {
            println!(
                "- {} ({}): unavailable, {}",
                summary.name,
                summary.key,
                summary.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}
