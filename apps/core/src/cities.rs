use crate::locale::Language;

/// A city on the map. The registry below is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub key: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub name_ko: &'static str,
    pub name_en: &'static str,
}

impl City {
    const fn new(
        key: &'static str,
        lat: f64,
        lng: f64,
        name_ko: &'static str,
        name_en: &'static str,
    ) -> Self {
        Self {
            key,
            lat,
            lng,
            name_ko,
            name_en,
        }
    }

    pub const fn name(&self, lang: Language) -> &'static str {
        match lang {
            Language::Ko => self.name_ko,
            Language::En => self.name_en,
        }
    }
}

/// Every supported city, in the order markers are created and search results
/// are reported.
pub static CITIES: [City; 16] = [
    City::new("seoul", 37.5665, 126.9780, "서울", "Seoul"),
    City::new("busan", 35.1796, 129.0756, "부산", "Busan"),
    City::new("jeonju", 35.8242, 127.1480, "전주", "Jeonju"),
    City::new("gangneung", 37.7519, 128.8761, "강릉", "Gangneung"),
    City::new("andong", 36.5684, 128.7294, "안동", "Andong"),
    City::new("jeju", 33.4996, 126.5312, "제주", "Jeju"),
    City::new("daegu", 35.8714, 128.6014, "대구", "Daegu"),
    City::new("gwangju", 35.1595, 126.8526, "광주", "Gwangju"),
    City::new("suwon", 37.2636, 127.0286, "수원", "Suwon"),
    City::new("incheon", 37.4563, 126.7052, "인천", "Incheon"),
    City::new("chuncheon", 37.8813, 127.7298, "춘천", "Chuncheon"),
    City::new("mokpo", 34.8118, 126.3922, "목포", "Mokpo"),
    City::new("daejeon", 36.3504, 127.3845, "대전", "Daejeon"),
    City::new("ansan", 37.3236, 126.8219, "안산", "Ansan"),
    City::new("hupo", 36.6789, 129.4167, "후포", "Hupo"),
    City::new("uijeongbu", 37.7384, 127.0408, "의정부", "Uijeongbu"),
];

pub fn find(key: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.key == key)
}

/// Position of a city in registry order.
pub fn position(key: &str) -> Option<usize> {
    CITIES.iter().position(|city| city.key == key)
}

#[cfg(test)]
mod tests {
    use super::{find, position, CITIES};
    use crate::locale::Language;
    use std::collections::HashSet;

    #[test]
    fn registry_keys_are_unique() {
        let keys: HashSet<_> = CITIES.iter().map(|city| city.key).collect();
        assert_eq!(keys.len(), CITIES.len());
        assert_eq!(CITIES.len(), 16);
    }

    #[test]
    fn cities_lie_within_the_peninsula() {
        for city in &CITIES {
            assert!((33.0..39.0).contains(&city.lat), "{} lat", city.key);
            assert!((124.0..132.0).contains(&city.lng), "{} lng", city.key);
        }
    }

    #[test]
    fn find_returns_localized_names() {
        let hupo = find("hupo").unwrap();
        assert_eq!(hupo.name(Language::Ko), "후포");
        assert_eq!(hupo.name(Language::En), "Hupo");
        assert!(find("pyongyang").is_none());
        assert_eq!(position("seoul"), Some(0));
        assert_eq!(position("uijeongbu"), Some(15));
    }
}
