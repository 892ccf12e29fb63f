pub mod error;
pub mod outputs;
pub mod terraform;

pub use error::OutputError;
pub use outputs::{OutputSet, OutputSource};
pub use terraform::TerraformOutputs;
