// Declarations read by build.rs. This file is not compiled.

pub struct ColorEnum {
    #[tag = r#"enum:"-""#]
    Red: (),
    #[tag = r#"enum:"blue,primary color""#]
    Blue: (),
}
