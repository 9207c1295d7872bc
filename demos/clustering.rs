//! PAM k-medoids on a simple 2D dataset.

use exemplar::Pam;

fn main() {
    // Three well-separated clusters in 2D.
    let data: Vec<Vec<f32>> = vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
    ];

    let pam = Pam::new(3).with_seed(42);
    let fit = pam.fit(&data).unwrap();

    println!("=== PAM (k=3) ===");
    for (i, &label) in fit.labels.iter().enumerate() {
        println!(
            "  point {:2} ({:5.1}, {:5.1}) => cluster {} (medoid {})",
            i, data[i][0], data[i][1], label, fit.medoids[label]
        );
    }
    println!(
        "  total cost {:.3} after {} pass(es), converged: {}",
        fit.cost, fit.passes, fit.converged
    );

    // Invalid input comes back as a typed error; observing it is the
    // caller's job, not the library's.
    if let Err(err) = Pam::new(0).fit(&data) {
        eprintln!("rejected: {err}");
    }
}
