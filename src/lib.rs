// Lookup
mod catalog;
pub use catalog::{example_lines, Catalog, Form, Group, Instruction, LC3_TABLE};
mod resolve;
pub use resolve::{strip_condition_codes, Payload, Resolver};

// Host side
pub mod lexer;
pub mod popup;
pub use popup::{on_text_changed, PopupHost, RenderInstruction};
pub mod render;
pub mod scope;

// Simulating
mod sim;
pub use sim::{Completion, SimConfig, Simulation};

pub mod env;
pub mod error;
pub mod output;
