pub mod entries;
pub mod files;
pub mod keys;
pub mod logout;
pub mod misc;
