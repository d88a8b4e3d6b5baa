use lloyd_kmeans::logger::init_logger;
use lloyd_kmeans::{Convergence, KMeans};

fn main() {
    init_logger().expect("Failed to initialize logger");

    let test_dataset = vec![
        vec![34.0, 118.0],
        vec![34.0, 118.0],
        vec![34.0, 118.0],
        vec![34.0, 118.0],

        vec![40.0, 74.0],
        vec![40.0, 74.0],
        vec![40.0, 74.0],
        vec![40.0, 74.0],

        vec![37.0, 122.0],
        vec![37.0, 122.0],
        vec![37.0, 122.0],
        vec![37.0, 122.0],
    ];

    log::info!("Starting KMeans with L2 (Euclidian) distance");
    let fit = KMeans::new(3)
        .with_convergence(Convergence::Exact)
        .with_n_init(10)
        .fit(&test_dataset)
        .expect("error during kmeans");

    log::info!(
        "Finished KMeans: {:?} after {} iterations - Inertia: {}",
        fit.status,
        fit.iterations,
        fit.inertia
    );
    println!("centroids: {:?}", fit.centroids);
    println!("labels: {:?}", fit.memberships);
}
