use nn_math::softmax;

fn main() {
    let scores = vec![5.0, 6.0, 7.0];
    println!("{:?}", softmax(&scores));
}
