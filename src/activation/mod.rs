pub mod sigmoid;
pub mod softmax;

pub use sigmoid::{sigmoid, sigmoid_derivative};
pub use softmax::softmax;
