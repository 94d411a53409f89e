//! MCP tools advertised by the server: static catalog, typed requests, and
//! the dispatch boundary.

pub mod catalog;
pub mod dispatch;
pub mod request;

pub use catalog::{
    descriptors, tools, ToolDescriptor, COWSAY_TOOL, COWTHINK_TOOL, GET_VERSION_TOOL,
    LIST_COWS_TOOL,
};
pub use dispatch::Dispatcher;
pub use request::RenderRequest;
