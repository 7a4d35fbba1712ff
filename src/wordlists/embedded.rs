//! Embedded word lists
//!
//! Compiled into the binary by the build script.

include!(concat!(env!("OUT_DIR"), "/words_5.rs"));
