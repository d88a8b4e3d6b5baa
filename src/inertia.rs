use crate::distance::squared_euclidean;


/// Within-cluster sum of squared distances.
///
/// Observations whose label has no centroid, or whose dimensionality differs from it,
/// contribute nothing.
pub fn calculate_inertia(data: &[Vec<f64>], centroids: &[Vec<f64>], labels: &[usize]) -> f64 {
    return data
        .iter()
        .zip(labels.iter())
        .filter_map(|(point, &label)| {
            let centroid = centroids.get(label)?;
            squared_euclidean(point, centroid).ok()
        })
        .sum();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inertia_sums_squared_distances() {
        let data = vec![vec![0.0, 0.0], vec![2.0, 0.0], vec![10.0, 10.0]];
        let centroids = vec![vec![1.0, 0.0], vec![10.0, 10.0]];
        assert_eq!(calculate_inertia(&data, &centroids, &[0, 0, 1]), 2.0);
    }

    #[test]
    fn test_inertia_zero_at_points() {
        let data = vec![vec![4.0], vec![-4.0]];
        assert_eq!(calculate_inertia(&data, &data, &[0, 1]), 0.0);
    }
}
