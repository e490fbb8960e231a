pub mod compiler;

pub use compiler::Compiler;
