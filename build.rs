use vergen::EmitBuilder;

// Emits VERGEN_* build and git metadata, logged at start-up.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .all_build() // Emit build-related instructions (timestamp, etc.)
        .all_git() // Emit git-related instructions (sha, commit timestamp, etc.)
        .emit()?;

    Ok(())
}
