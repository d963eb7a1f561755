//! Marker-delimited block merging for free-form text files.
//!
//! A document is viewed as `(prefix, block, suffix)`. viflo owns the block
//! and rewrites it wholesale; prefix and suffix belong to the user and are
//! carried through byte-for-byte.

use thiserror::Error;

/// Opening marker of the viflo-managed block.
pub const SENTINEL_START: &str = "<!-- BEGIN VIFLO -->";
/// Closing marker of the viflo-managed block.
pub const SENTINEL_END: &str = "<!-- END VIFLO -->";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SentinelError {
    #[error("{starts} start and {ends} end markers found")]
    Multiple { starts: usize, ends: usize },

    #[error("{detail}")]
    Unbalanced { detail: &'static str },
}

/// A document split around its sentinel block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentinelSplit<'a> {
    pub prefix: &'a str,
    /// The block including both markers, if present.
    pub block: Option<&'a str>,
    pub suffix: &'a str,
}

impl<'a> SentinelSplit<'a> {
    /// Split `text` around its single sentinel block.
    ///
    /// Without a block the whole text is the prefix and the suffix is empty.
    pub fn parse(text: &'a str) -> Result<Self, SentinelError> {
        let starts = text.matches(SENTINEL_START).count();
        let ends = text.matches(SENTINEL_END).count();

        if starts > 1 || ends > 1 {
            return Err(SentinelError::Multiple { starts, ends });
        }

        match (text.find(SENTINEL_START), text.find(SENTINEL_END)) {
            (None, None) => Ok(Self {
                prefix: text,
                block: None,
                suffix: "",
            }),
            (Some(_), None) => Err(SentinelError::Unbalanced {
                detail: "start marker without end marker",
            }),
            (None, Some(_)) => Err(SentinelError::Unbalanced {
                detail: "end marker without start marker",
            }),
            (Some(start), Some(end)) if end < start + SENTINEL_START.len() => {
                Err(SentinelError::Unbalanced {
                    detail: "end marker precedes start marker",
                })
            }
            (Some(start), Some(end)) => {
                let block_end = end + SENTINEL_END.len();
                Ok(Self {
                    prefix: &text[..start],
                    block: Some(&text[start..block_end]),
                    suffix: &text[block_end..],
                })
            }
        }
    }
}

/// Render the block: start marker, inner content, end marker. No trailing newline.
pub fn render_block(inner: &str) -> String {
    format!("{SENTINEL_START}\n{inner}\n{SENTINEL_END}")
}

/// Document body for a file that does not exist yet.
pub fn render_new_document(inner: &str) -> String {
    format!("{}\n", render_block(inner))
}

/// Merge `inner` into `existing`, replacing or appending the sentinel block.
///
/// An empty or whitespace-only `existing` yields exactly what
/// [`render_new_document`] gives a missing file: the block alone, with no
/// leading blank lines. Only a document with real content gets the
/// blank-line separator before the appended block.
pub fn merge_sentinel_block(existing: &str, inner: &str) -> Result<String, SentinelError> {
    let split = SentinelSplit::parse(existing)?;
    let block = render_block(inner);

    if split.block.is_some() {
        return Ok(format!("{}{block}{}", split.prefix, split.suffix));
    }

    let before = split.prefix.trim_end();
    if before.is_empty() {
        Ok(format!("{block}\n"))
    } else {
        Ok(format!("{before}\n\n{block}\n"))
    }
}
