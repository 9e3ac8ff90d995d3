pub mod dashboard;
pub mod init;
pub mod seed;
