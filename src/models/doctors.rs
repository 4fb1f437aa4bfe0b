use serde::Serialize;

use crate::store::Record;

#[derive(Clone, Debug, Serialize)]
pub struct Doctor {
    pub id: u64,
    pub name: String,
    pub name_ar: String,
    pub specialty: String,
    pub specialty_ar: String,
    pub city: String,
    pub address: String,
    pub address_ar: String,
    pub rating: f64,
    pub reviews_count: u32,
}

impl Record for Doctor {
    fn id(&self) -> u64 {
        self.id
    }
}

macro_rules! doctors {
    ( $( {
        $id:expr, $name:expr, $name_ar:expr, $specialty:expr, $specialty_ar:expr,
        $city:expr, $address:expr, $address_ar:expr, $rating:expr, $reviews:expr $(,)?
    } ),+ $(,)? ) => {
        vec![
            $(
                Doctor {
                    id: $id,
                    name: $name.to_string(),
                    name_ar: $name_ar.to_string(),
                    specialty: $specialty.to_string(),
                    specialty_ar: $specialty_ar.to_string(),
                    city: $city.to_string(),
                    address: $address.to_string(),
                    address_ar: $address_ar.to_string(),
                    rating: $rating,
                    reviews_count: $reviews,
                },
            )+
        ]
    };
}

/// The directory loaded at startup.
pub fn seed() -> Vec<Doctor> {
    doctors! {
        {
            1, "Dr. Ahmed Benali", "د. أحمد بن علي", "Cardiologue", "طبيب قلب",
            "Alger", "15 Rue Didouche Mourad, Alger Centre", "15 شارع ديدوش مراد، الجزائر الوسطى",
            4.8, 124,
        },
        {
            2, "Dr. Fatima Zohra Mansouri", "د. فاطمة الزهراء منصوري", "Pédiatre", "طبيبة أطفال",
            "Oran", "8 Boulevard de la Soummam, Oran", "8 شارع الصومام، وهران",
            4.9, 98,
        },
        {
            3, "Dr. Karim Haddad", "د. كريم حداد", "Dermatologue", "طبيب جلدية",
            "Constantine", "22 Rue Abane Ramdane, Constantine", "22 شارع عبان رمضان، قسنطينة",
            4.6, 76,
        },
        {
            4, "Dr. Amina Khelifi", "د. أمينة خليفي", "Gynécologue", "طبيبة نساء وتوليد",
            "Alger", "3 Chemin Mackley, Ben Aknoun, Alger", "3 طريق ماكلي، بن عكنون، الجزائر",
            4.7, 152,
        },
        {
            5, "Dr. Youcef Brahimi", "د. يوسف براهيمي", "Cardiologue", "طبيب قلب",
            "Oran", "41 Rue Larbi Ben M'hidi, Oran", "41 شارع العربي بن مهيدي، وهران",
            4.5, 63,
        },
        {
            6, "Dr. Nadia Boumediene", "د. نادية بومدين", "Ophtalmologue", "طبيبة عيون",
            "Annaba", "12 Cours de la Révolution, Annaba", "12 شارع الثورة، عنابة",
            4.4, 41,
        },
        {
            7, "Dr. Samir Ouali", "د. سمير والي", "Médecin généraliste", "طبيب عام",
            "Tizi Ouzou", "5 Avenue Abane Ramdane, Tizi Ouzou", "5 شارع عبان رمضان، تيزي وزو",
            4.3, 210,
        },
    }
}

/// Doctor search filters; `None` or an empty string disables a filter.
#[derive(Default)]
pub struct DoctorFilter<'a> {
    pub search: Option<&'a str>,
    pub specialty: Option<&'a str>,
    pub city: Option<&'a str>,
}

fn active(filter: Option<&str>) -> Option<&str> {
    filter.filter(|s| !s.is_empty())
}

impl DoctorFilter<'_> {
    pub fn matches(&self, doctor: &Doctor) -> bool {
        if let Some(search) = active(self.search) {
            let search = search.to_lowercase();
            if !doctor.name.to_lowercase().contains(&search)
                && !doctor.specialty.to_lowercase().contains(&search)
            {
                return false;
            }
        }
        if let Some(specialty) = active(self.specialty) {
            if doctor.specialty != specialty {
                return false;
            }
        }
        if let Some(city) = active(self.city) {
            if doctor.city != city {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(filter: &DoctorFilter) -> Vec<u64> {
        seed()
            .iter()
            .filter(|d| filter.matches(d))
            .map(|d| d.id)
            .collect()
    }

    #[test]
    fn seed_ids_are_unique() {
        let ids: HashSet<u64> = seed().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), seed().len());
    }

    #[test]
    fn no_filter_keeps_seed_order() {
        let all: Vec<u64> = seed().iter().map(|d| d.id).collect();
        assert_eq!(ids(&DoctorFilter::default()), all);
        let empty = DoctorFilter {
            search: Some(""),
            specialty: Some(""),
            city: Some(""),
        };
        assert_eq!(ids(&empty), all);
    }

    #[test]
    fn search_is_case_insensitive_on_name_or_specialty() {
        let cardio = DoctorFilter {
            search: Some("CARDIO"),
            ..Default::default()
        };
        assert_eq!(ids(&cardio), vec![1, 5]);

        let by_name = DoctorFilter {
            search: Some("haddad"),
            ..Default::default()
        };
        assert_eq!(ids(&by_name), vec![3]);
    }

    #[test]
    fn exact_filters_combine() {
        let filter = DoctorFilter {
            specialty: Some("Cardiologue"),
            city: Some("Oran"),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![5]);

        // exact match, not substring
        let partial = DoctorFilter {
            city: Some("Alg"),
            ..Default::default()
        };
        assert!(ids(&partial).is_empty());
    }
}
