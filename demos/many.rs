use driver_arrangement::{greedy, hungarian_max, Allocations};

const ASSIGNMENT_SIZE: usize = 64;
const N: usize = 100;

fn main() {
    let mut assignments = Allocations::default();
    let mut exact_total = 0.;
    let mut greedy_total = 0.;
    for _ in 0..N {
        let weights = nalgebra::DMatrix::<f64>::new_random(ASSIGNMENT_SIZE, ASSIGNMENT_SIZE / 2);

        hungarian_max(&weights, &mut assignments);
        exact_total += assignments.assignment().map(|a| weights[a]).sum::<f64>();

        greedy(&weights, &mut assignments);
        greedy_total += assignments.assignment().map(|a| weights[a]).sum::<f64>();
    }

    println!("exact: {exact_total}");
    println!("greedy: {greedy_total}");
}
