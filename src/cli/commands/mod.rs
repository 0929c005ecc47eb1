pub mod check;
mod command_result;
pub mod edit;
pub mod helper;
pub mod init;
pub mod keys;
pub mod lookup;
pub mod usages;
pub mod watch;

pub use command_result::*;
