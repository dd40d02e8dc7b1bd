pub mod auth;
pub mod dog_add;
pub mod dog_list;
pub mod dog_stats;
pub mod init;
pub mod stats;
