pub mod options;
pub mod parameter_bag;
pub mod path_config;
pub mod resolved_path;

pub use options::*;
pub use parameter_bag::*;
pub use path_config::*;
pub use resolved_path::*;
