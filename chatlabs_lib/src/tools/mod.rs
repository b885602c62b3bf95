//! Tool declarations.

mod tool;

pub use tool::ParamType;
pub use tool::ToolSpec;
pub use tool::ToolParam;
pub use tool::ToolChoice;
