/// Doctor search parameters. Repeated keys keep their first value.
#[derive(Debug, Default, PartialEq)]
pub struct SearchDoctorQuery {
    pub search: Option<String>,
    pub specialty: Option<String>,
    pub city: Option<String>,
}

impl SearchDoctorQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "search" => &mut query.search,
                "specialty" => &mut query.specialty,
                "city" => &mut query.city,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_value_wins_and_unknown_keys_are_ignored() {
        let query = SearchDoctorQuery::from_pairs(pairs(&[
            ("city", "Oran"),
            ("page", "2"),
            ("city", "Alger"),
            ("search", "cardio"),
        ]));
        assert_eq!(
            query,
            SearchDoctorQuery {
                search: Some("cardio".to_string()),
                specialty: None,
                city: Some("Oran".to_string()),
            }
        );
    }
}
