use crate::cities::{City, CITIES};
use crate::locale::Language;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A string carried in both locales.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    pub ko: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(ko: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ko: ko.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Ko => &self.ko,
            Language::En => &self.en,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    /// Unique within its city.
    pub id: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub origin: LocalizedText,
    pub history: LocalizedText,
    pub geography: LocalizedText,
}

/// Payload of one city data file: `{ "foods": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CityFoods {
    pub foods: Vec<Dish>,
}

impl CityFoods {
    pub fn dish(&self, id: &str) -> Option<&Dish> {
        self.foods.iter().find(|dish| dish.id == id)
    }
}

/// Dishes per city, filled in as loads settle. A missing city means its data
/// has not arrived yet or never will.
#[derive(Debug, Default)]
pub struct FoodCollection {
    by_city: HashMap<&'static str, CityFoods>,
}

impl FoodCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, city: &'static str, foods: CityFoods) {
        self.by_city.insert(city, foods);
    }

    pub fn get(&self, city: &str) -> Option<&CityFoods> {
        self.by_city.get(city)
    }

    pub fn dish(&self, city: &str, dish_id: &str) -> Option<&Dish> {
        self.get(city).and_then(|foods| foods.dish(dish_id))
    }

    pub fn is_loaded(&self, city: &str) -> bool {
        self.by_city.contains_key(city)
    }

    pub fn loaded_cities(&self) -> usize {
        self.by_city.len()
    }

    /// Loaded cities in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static City, &CityFoods)> + '_ {
        CITIES
            .iter()
            .filter_map(|city| self.by_city.get(city.key).map(|foods| (city, foods)))
    }
}
