//! Enums generated by `build.rs` from the declarations in `enums/`.

include!(concat!(env!("OUT_DIR"), "/enum.rs"));
