pub mod activation;
pub mod layers;
pub mod loss;

// Convenience re-exports
pub use activation::sigmoid::{sigmoid, sigmoid_derivative};
pub use activation::softmax::softmax;
pub use layers::perceptron::Perceptron;
pub use loss::cross_entropy::CrossEntropyLoss;
