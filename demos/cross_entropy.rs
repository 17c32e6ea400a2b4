use nn_math::CrossEntropyLoss;

fn main() {
    let labels = vec![1.0, 1.0, 0.0];
    let probabilities = vec![0.8, 0.7, 0.1];
    println!("{}", CrossEntropyLoss::loss(&labels, &probabilities));

    let labels = vec![1.0, 0.0, 1.0, 1.0];
    let probabilities = vec![0.4, 0.6, 0.1, 0.5];
    let loss = CrossEntropyLoss::loss(&labels, &probabilities);
    println!("{loss}");
    assert_eq!(loss, 4.828313737302301);
}
