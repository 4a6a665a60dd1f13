pub mod cmd_header;
pub mod error;
pub mod file_header;
pub mod media_type;
pub mod props;
pub mod sample_header;

pub use cmd_header::*;
pub use error::*;
pub use file_header::*;
pub use media_type::*;
pub use props::*;
pub use sample_header::*;
