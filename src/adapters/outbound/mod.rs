pub mod console;
pub mod filesystem;
pub mod network;
pub mod process;
