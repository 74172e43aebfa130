mod document;
mod error;
pub mod fields;
mod lexer;
mod node;
mod parser;
mod resolve;
pub mod structures;
mod tags;
mod tokens;

pub use document::Attached;
pub use document::Document;
pub use document::NodeRef;
pub use document::Target;
pub use document::DOCUMENT_PARENT;
pub use error::MalformedReason;
pub use error::ParseError;
pub use fields::Fields;
pub use fields::Records;
pub use lexer::tokenize;
pub use lexer::Lexer;
pub use node::Node;
pub use node::NodeId;
pub use node::Reference;
pub use parser::parse;
pub use parser::Parser;
pub use structures::Structure;
pub use tags::Kind;
pub use tags::Tag;
pub use tokens::is_pointer;
pub use tokens::Line;
