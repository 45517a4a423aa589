//! DBSCAN on a simple 1D dataset.

use dbscan1d::{Dbscan1D, NOISE};

fn main() {
    // Two dense groups and one outlier.
    let data = vec![1.0, 1.1, 1.2, 1.05, 5.0, 5.1, 5.2, 5.15, 42.0];

    let mut model = Dbscan1D::new(0.3, 3);
    let labels = model.fit_predict(&data, None).unwrap();

    println!("=== DBSCAN1D (eps=0.3, min_samples=3) ===");
    for (i, label) in labels.iter().enumerate() {
        let tag = if *label == NOISE {
            "NOISE".to_string()
        } else {
            format!("cluster {}", label)
        };
        println!("  point {:2} ({:6.2}) => {}", i, data[i], tag);
    }
    println!("core samples: {:?}", model.core_sample_indices().unwrap());

    // Weighted variant: the outlier now carries enough weight to be its own
    // dense region.
    let weights = vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 3.0];
    let labels = model.fit_predict(&data, Some(&weights)).unwrap();
    println!("\n=== DBSCAN1D weighted (min_samples=3) ===");
    for (i, label) in labels.iter().enumerate() {
        let tag = if *label == NOISE {
            "NOISE".to_string()
        } else {
            format!("cluster {}", label)
        };
        println!("  point {:2} ({:6.2}, w={}) => {}", i, data[i], weights[i], tag);
    }
}
