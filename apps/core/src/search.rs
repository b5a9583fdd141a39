use crate::locale::Language;
use crate::model::FoodCollection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub city: &'static str,
    pub city_name: &'static str,
    pub dish_id: String,
    pub dish_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was empty after trimming; nothing should be shown.
    NoQuery,
    Hits(Vec<SearchHit>),
}

/// Case-insensitive substring match over every loaded dish name in `lang`.
/// Hits come in registry order, then in each city's dish order.
pub fn search(foods: &FoodCollection, lang: Language, query: &str) -> SearchOutcome {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchOutcome::NoQuery;
    }

    let mut hits = Vec::new();
    for (city, data) in foods.iter() {
        for dish in &data.foods {
            let name = dish.name.get(lang);
            if name.to_lowercase().contains(&needle) {
                hits.push(SearchHit {
                    city: city.key,
                    city_name: city.name(lang),
                    dish_id: dish.id.clone(),
                    dish_name: name.to_string(),
                });
            }
        }
    }

    SearchOutcome::Hits(hits)
}
