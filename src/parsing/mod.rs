pub mod ast;
pub mod javascript;
pub mod parser;

pub use ast::Module;
pub use javascript::{JavaScriptParser, extract_exports};
pub use parser::{ModuleParser, ParseError};
