use thiserror::Error;

/// Failures raised while aligning a hologram to a sampled orientation.
#[derive(Error, Debug)]
pub enum AlignmentError {
    /// A probe scroll produced no measurable rotation, so the scroll step
    /// cannot be discovered. The probe has already been undone by the time
    /// this is returned.
    #[error("scroll step could not be measured: probe scroll produced no rotation")]
    DegenerateStepSize,

    /// A recipe library file could not be read or parsed.
    #[error("recipe import failed: {0}")]
    RecipeImport(String),
}

pub type AlignmentResult<T> = Result<T, AlignmentError>;
