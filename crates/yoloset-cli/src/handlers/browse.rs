//! Browse command handler.
//!
//! Terminal counterpart of the gallery routes: the page argument goes
//! through the same redirect rules, and a redirect is followed once.

use anyhow::Result;
use yoloset_core::{BrowseOutcome, Gallery, GalleryKind};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_gallery;

/// Resolve `page` to a renderable gallery page.
pub async fn resolve(
    ctx: &CliContext,
    name: &str,
    kind: GalleryKind,
    page: Option<&str>,
) -> Result<Gallery, CliError> {
    let galleries = ctx.app().galleries();
    let target = match galleries.browse(name, kind, page).await? {
        BrowseOutcome::Page(gallery) => return Ok(gallery),
        BrowseOutcome::Redirect { page: target } => target,
    };

    tracing::info!(target: "yoloset.pager", requested = ?page, page = target, "showing nearest valid page");
    let token = target.to_string();
    match galleries.browse(name, kind, Some(&token)).await? {
        BrowseOutcome::Page(gallery) => Ok(gallery),
        BrowseOutcome::Redirect { .. } => Err(CliError::Core(format!(
            "Folder of '{name}' changed while listing, try again"
        ))),
    }
}

pub async fn execute(
    ctx: &CliContext,
    name: &str,
    annotated: bool,
    page: Option<&str>,
) -> Result<()> {
    let kind = if annotated {
        GalleryKind::Annotated
    } else {
        GalleryKind::Uploaded
    };
    let gallery = resolve(ctx, name, kind, page).await?;
    print_gallery(&gallery);
    Ok(())
}
