mod reader;

pub use reader::{EmptyInput, InputReader};
