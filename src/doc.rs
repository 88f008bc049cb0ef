//! Background reading, compiled only under `--cfg doc` so it never ships
//! in the normal build but still gets linked into `cargo doc` output.

pub mod encryption;
pub mod gcm;
pub mod sm4;
