use crate::core::domain::{HistoricalDataset, QueryPoint, BZ_SCALE_NT, SPEED_SCALE_KM_S};
use crate::error::{ForecastError, ForecastResult};

/// Non-dimensionalized distance between the query and one observation.
///
/// Speed (hundreds of km/s) and Bz (tens of nT) live on very different
/// numeric ranges, so each difference is divided by its scale constant
/// before the Euclidean combination. Without this, speed alone would
/// decide every ranking.
pub fn condition_distance(query: &QueryPoint, speed_km_s: f64, bz_nt: f64) -> f64 {
    let ds = (speed_km_s - query.speed_km_s) / SPEED_SCALE_KM_S;
    let db = (bz_nt - query.bz_nt) / BZ_SCALE_NT;
    (ds * ds + db * db).sqrt()
}

/// Kp values of the `n` observations closest to the query, ascending by
/// distance.
///
/// The sort is stable over archive indices, so equal distances resolve to
/// earlier rows deterministically. Returns fewer than `n` values only when
/// the corpus itself is smaller; an empty corpus is an error, not an empty
/// forecast.
pub fn nearest_kp(
    query: &QueryPoint,
    dataset: &HistoricalDataset,
    n: usize,
) -> ForecastResult<Vec<f64>> {
    if dataset.is_empty() {
        return Err(ForecastError::EmptyCorpus);
    }

    let distances: Vec<f64> = dataset
        .rows()
        .map(|(speed, bz, _)| condition_distance(query, speed, bz))
        .collect();

    let mut order: Vec<usize> = (0..dataset.len()).collect();
    order.sort_by(|&a, &b| {
        distances[a]
            .partial_cmp(&distances[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(order
        .into_iter()
        .take(n)
        .map(|i| dataset.kp3()[i])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::Provenance;

    fn query(speed_km_s: f64, bz_nt: f64) -> QueryPoint {
        QueryPoint {
            speed_km_s,
            bz_nt,
            provenance: Provenance::ManualInput,
        }
    }

    #[test]
    fn test_condition_distance_value() {
        // ds = 600/1000 = 0.6, db = -20/100 = -0.2
        let d = condition_distance(&query(300.0, 0.0), 900.0, -20.0);
        assert!((d - 0.4f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_distance_is_symmetric_in_sign() {
        let q = query(400.0, 0.0);
        assert_eq!(
            condition_distance(&q, 500.0, 10.0),
            condition_distance(&q, 300.0, -10.0)
        );
    }

    #[test]
    fn test_nearest_two_of_three() {
        let dataset = HistoricalDataset::from_rows(vec![
            (300.0, 0.0, 2.0),
            (305.0, 1.0, 2.0),
            (900.0, -20.0, 7.0),
        ]);

        let analogs = nearest_kp(&query(300.0, 0.0), &dataset, 2).unwrap();
        assert_eq!(analogs, vec![2.0, 2.0]);
    }

    #[test]
    fn test_full_ordering_by_distance() {
        let dataset = HistoricalDataset::from_rows(vec![
            (900.0, -20.0, 7.0),
            (305.0, 1.0, 3.0),
            (300.0, 0.0, 2.0),
        ]);

        let analogs = nearest_kp(&query(300.0, 0.0), &dataset, 3).unwrap();
        assert_eq!(analogs, vec![2.0, 3.0, 7.0]);
    }

    #[test]
    fn test_ties_keep_archive_order() {
        // Rows 0 and 2 are equidistant from the query; row 0 must come first
        let dataset = HistoricalDataset::from_rows(vec![
            (500.0, 0.0, 1.0),
            (400.0, 0.0, 2.0),
            (300.0, 0.0, 3.0),
        ]);

        let analogs = nearest_kp(&query(400.0, 0.0), &dataset, 3).unwrap();
        assert_eq!(analogs, vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_n_larger_than_corpus_returns_all() {
        let dataset = HistoricalDataset::from_rows(vec![(300.0, 0.0, 2.0), (400.0, 1.0, 3.0)]);

        let analogs = nearest_kp(&query(350.0, 0.0), &dataset, 100).unwrap();
        assert_eq!(analogs.len(), 2);
    }

    #[test]
    fn test_empty_corpus_is_an_error() {
        let empty = HistoricalDataset::from_rows(Vec::new());
        let err = nearest_kp(&query(400.0, 0.0), &empty, 100).unwrap_err();
        assert!(matches!(err, ForecastError::EmptyCorpus));
    }

    #[test]
    fn test_n_zero_returns_empty() {
        let dataset = HistoricalDataset::from_rows(vec![(300.0, 0.0, 2.0)]);
        let analogs = nearest_kp(&query(300.0, 0.0), &dataset, 0).unwrap();
        assert!(analogs.is_empty());
    }
}
