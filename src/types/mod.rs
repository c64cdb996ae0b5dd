pub mod architecture;
pub mod directory;
pub mod error;
pub mod file;
pub mod project;
pub mod signals;
pub mod utils;

pub use architecture::*;
pub use directory::*;
pub use error::{InputError, InputErrorKind, Result, ResultExt, ShapeError};
pub use file::*;
pub use project::*;
pub use signals::*;
pub use utils::{Casing, ROOT_DIR, casing_of, log_filter_error};
