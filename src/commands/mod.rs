pub mod configure;
pub mod generate;
pub mod init;
pub mod interactive;
pub mod show;
pub mod topics;
