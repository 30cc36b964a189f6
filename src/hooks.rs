//! Page lifecycle hooks.
//!
//! The wiki fires `PageSaveComplete` after an edit is stored and
//! `PageDeleteComplete` after a page is removed. Both purge the page's
//! canonical URL once. Errors are returned to the caller untouched, so a
//! strict purger can fail the triggering request.

// Standard library
use std::fmt;

// 3rd party crates
use tracing::debug;

// Project imports
use crate::providers::CachePurger;

/// A page as handed over by the host platform.
pub trait Page {
    /// Canonical, fully-qualified URL of the page.
    fn full_url(&self) -> String;
}

impl Page for str {
    fn full_url(&self) -> String {
        self.to_string()
    }
}

impl Page for String {
    fn full_url(&self) -> String {
        self.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    SaveComplete,
    DeleteComplete,
}

impl fmt::Display for PageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageEvent::SaveComplete => write!(f, "PageSaveComplete"),
            PageEvent::DeleteComplete => write!(f, "PageDeleteComplete"),
        }
    }
}

/// Purges the saved page.
pub async fn on_page_save_complete<C, P>(purger: &C, page: &P) -> Result<(), C::Error>
where
    C: CachePurger + ?Sized,
    P: Page + ?Sized,
{
    dispatch(purger, PageEvent::SaveComplete, page).await
}

/// Purges the URL the deleted page used to live at.
pub async fn on_page_delete_complete<C, P>(purger: &C, page: &P) -> Result<(), C::Error>
where
    C: CachePurger + ?Sized,
    P: Page + ?Sized,
{
    dispatch(purger, PageEvent::DeleteComplete, page).await
}

pub async fn dispatch<C, P>(purger: &C, event: PageEvent, page: &P) -> Result<(), C::Error>
where
    C: CachePurger + ?Sized,
    P: Page + ?Sized,
{
    let url: String = page.full_url();
    debug!(
        event = %event,
        provider = purger.get_name(),
        url = %url,
        "Handling page event"
    );
    purger.purge(&url).await
}
