pub mod clipboard;
pub mod device;
pub mod dom;
pub mod error;
pub mod toast;
