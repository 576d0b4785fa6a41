//! Filesystem and path utilities shared by the config loader and the CLI.

pub mod fs;
pub mod paths;

pub use fs::{atomic_write, read_text_file, write_json_file};
pub use paths::{absolutize, absolutize_from, get_home_dir, normalize_path, path_to_string};
