//! `viewgen verify`: check the signature of a generated file.

use std::path::Path;

use anyhow::{bail, Context, Result};
use viewgen_signedsource::SignError;

/// Run the `viewgen verify <file>` workflow.
pub fn run(path: &Path) -> Result<()> {
    let data =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    match viewgen_signedsource::verify_signature(&data) {
        Ok(true) => {
            println!("Signature valid: {}", path.display());
            Ok(())
        }
        Ok(false) => bail!(
            "signature mismatch in {}: the file was edited after it was generated",
            path.display()
        ),
        Err(SignError::NotSigned) => bail!("{} is not signed", path.display()),
        Err(e) => Err(e).with_context(|| format!("verifying {}", path.display())),
    }
}
