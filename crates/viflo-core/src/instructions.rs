use crate::error::{Result, VifloError};
use crate::io::{self, WriteOutcome};
use crate::paths;
use crate::sentinel::{self, render_block};
use std::path::Path;

/// Merge the sentinel block into `<root>/CLAUDE.md`.
///
/// - Creates the file with the block alone if it doesn't exist.
/// - Replaces the block in place if one is present.
/// - Appends the block after existing text otherwise.
pub fn write_instructions(root: &Path, inner: &str) -> Result<WriteOutcome> {
    let path = paths::instructions_path(root)?;
    let content = match io::read_optional(&path)? {
        None => sentinel::render_new_document(inner),
        Some(existing) => sentinel::merge_sentinel_block(&existing, inner)
            .map_err(|e| VifloError::sentinel(&path, e))?,
    };
    io::write_if_changed(&path, &content)
}

/// Like [`write_instructions`], but a missing `CLAUDE.md` gets the starter
/// template with the sentinel block as its tail.
pub fn write_instructions_template(root: &Path, inner: &str) -> Result<WriteOutcome> {
    let path = paths::instructions_path(root)?;
    if path.exists() {
        return write_instructions(root, inner);
    }
    io::write_if_changed(&path, &starter_template(inner))
}

pub fn starter_template(inner: &str) -> String {
    format!(
        "# Project\n\n\
        A brief description of this project.\n\n\
        ## Tech Stack\n\n\
        - Language:\n\
        - Framework:\n\
        - Database:\n\n\
        ## Development Workflow\n\n\
        This project uses [GSD methodology](https://github.com/olivermonberg/viflo) with `/gsd:` commands.\n\n\
        Key commands:\n\
        - `/gsd:new-project` \u{2014} plan and start a new project milestone\n\
        - `/gsd:plan-phase N` \u{2014} plan a specific phase\n\
        - `/gsd:execute-phase N` \u{2014} execute a planned phase\n\n\
        {}\n",
        render_block(inner)
    )
}
