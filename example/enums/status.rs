// Declarations read by build.rs. This file is not compiled.

/// Lifecycle of a job.
pub struct Status {
    #[tag = r#"enum:"pending,waiting for a worker""#]
    Pending: (),
    #[tag = r#"enum:"running""#]
    Running: (),
    #[tag = r#"json:"done" enum:"-""#]
    Done: (),
    attempts: u32,
}
