use nn_math::Perceptron;

fn main() {
    let neuron = Perceptron::new(vec![4.0, 5.0], -9.0);
    let points = vec![
        vec![1.0, 1.0],
        vec![2.0, 4.0],
        vec![5.0, -5.0],
        vec![-4.0, 5.0],
    ];

    for point in &points {
        let score = neuron.score(point);
        let sig = neuron.output(point);
        println!("X: {:?}  Score: {}  Sigmoid: {}", point, score, sig);
    }
}
