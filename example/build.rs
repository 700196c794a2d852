use std::{env, path::PathBuf};

fn main() -> Result<(), tagenum::TagEnumError> {
    println!("cargo:rerun-if-changed=enums");
    println!("cargo:rerun-if-env-changed=TAGENUM_RUSTFMT");

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or_else(|| {
        tagenum::TagEnumError::Usage("OUT_DIR is not set".to_string())
    })?);

    tagenum::Builder::new()
        .input("enums")
        .types(["ColorEnum", "Status"])
        .package("enums")
        .output(out_dir.join("enum.rs"))
        .write()?;
    Ok(())
}
