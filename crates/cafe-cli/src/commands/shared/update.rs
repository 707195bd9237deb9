/// Reject update commands that would change nothing.
pub fn require_any_field(provided: &[bool], options: &str) -> anyhow::Result<()> {
    if provided.iter().any(|set| *set) {
        Ok(())
    } else {
        anyhow::bail!("At least one of {options} must be provided")
    }
}
