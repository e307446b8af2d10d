//! Table sort order.
//!
//! Sorting reorders the whole sample sequence, shown and hidden rows
//! alike; it never interacts with filtering, which only toggles
//! visibility.

use super::dataset::Sample;

/// Sortable table columns. A closed enum instead of column-name strings,
/// so adding a column forces a comparator decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Identifier,
    Site,
    Locality,
    CollectedDate,
}

impl SortKey {
    /// The field a key compares on. Absent values (an empty locality or
    /// collection date) compare as the empty string and therefore sort
    /// first under ascending order; no comparison ever fails.
    pub fn field(self, sample: &Sample) -> &str {
        match self {
            SortKey::Identifier => &sample.name,
            SortKey::Site => &sample.parent_area_name,
            SortKey::Locality => &sample.area_name,
            SortKey::CollectedDate => &sample.event_begin,
        }
    }
}

/// Stable ascending sort of the order vector by the keyed field.
/// Lexical, locale-naive comparison; ISO dates sort chronologically under
/// it. Equal keys keep their relative input order.
pub fn sort_order(samples: &[Sample], order: &mut [usize], key: SortKey) {
    order.sort_by(|&a, &b| key.field(&samples[a]).cmp(key.field(&samples[b])));
}

/// The identity order for a freshly loaded sequence.
pub fn initial_order(len: usize) -> Vec<usize> {
    (0..len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::SampleStatus;

    fn sample(name: &str, site: &str, locality: &str, collected: &str) -> Sample {
        Sample {
            name: name.into(),
            parent_area_plutof_id: "1".into(),
            parent_area_name: site.into(),
            area_name: locality.into(),
            area_latitude: None,
            area_longitude: None,
            event_begin: collected.into(),
            size: None,
            blank: false,
            status: SampleStatus::Registered,
            dnas: Vec::new(),
        }
    }

    fn names(samples: &[Sample], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| samples[i].name.clone()).collect()
    }

    #[test]
    fn sorts_by_identifier_ascending() {
        let samples = vec![
            sample("EE0003", "", "", ""),
            sample("EE0001", "", "", ""),
            sample("EE0002", "", "", ""),
        ];
        let mut order = initial_order(samples.len());
        sort_order(&samples, &mut order, SortKey::Identifier);
        assert_eq!(names(&samples, &order), ["EE0001", "EE0002", "EE0003"]);
    }

    #[test]
    fn sorts_by_collection_date() {
        let samples = vec![
            sample("b", "", "", "2023-02-01"),
            sample("a", "", "", "2022-11-15"),
            sample("c", "", "", "2023-01-20"),
        ];
        let mut order = initial_order(samples.len());
        sort_order(&samples, &mut order, SortKey::CollectedDate);
        assert_eq!(names(&samples, &order), ["a", "c", "b"]);
    }

    #[test]
    fn resorting_by_the_same_key_changes_nothing() {
        let samples = vec![
            sample("EE0002", "Wadden Sea", "", ""),
            sample("EE0001", "Wadden Sea", "", ""),
            sample("EE0003", "Aldabra Atoll", "", ""),
        ];
        let mut order = initial_order(samples.len());
        sort_order(&samples, &mut order, SortKey::Site);
        let once = order.to_vec();
        sort_order(&samples, &mut order, SortKey::Site);
        assert_eq!(order, once);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let samples = vec![
            sample("first", "Wadden Sea", "", ""),
            sample("second", "Wadden Sea", "", ""),
            sample("third", "Aldabra Atoll", "", ""),
        ];
        let mut order = initial_order(samples.len());
        sort_order(&samples, &mut order, SortKey::Site);
        assert_eq!(names(&samples, &order), ["third", "first", "second"]);
    }

    #[test]
    fn absent_fields_sort_first_without_panicking() {
        let samples = vec![
            sample("a", "", "Pilsum", ""),
            sample("b", "", "", ""),
            sample("c", "", "Norddeich", ""),
        ];
        let mut order = initial_order(samples.len());
        sort_order(&samples, &mut order, SortKey::Locality);
        assert_eq!(names(&samples, &order), ["b", "c", "a"]);
    }
}
