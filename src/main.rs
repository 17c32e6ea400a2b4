// This binary crate is intentionally minimal.
// All of the math lives in the library (src/lib.rs and its modules).
// Run the demos with:
//   cargo run --example perceptron
fn main() {
    println!("nn-math: elementary neural-network math in Rust.");
    println!("Run `cargo run --example cross_entropy`, `--example perceptron` or `--example softmax`.");
}
