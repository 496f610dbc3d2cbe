use log::debug;
use serde::de::DeserializeOwned;

use crate::{error::Result, spotify::Requester, types::Page};

/// Retrieves every item of a paginated collection starting at `url`.
///
/// Pages are requested one after another, following the `next` URL of each
/// response, and their `items` are concatenated in page order.
///
/// # Termination
///
/// - A page whose `next` is absent, null or empty is the last one.
/// - A page without `items` ends the traversal early. Items gathered from
///   earlier pages are still returned.
///
/// # Errors
///
/// The first failed request aborts the traversal and its error is returned;
/// items fetched so far are discarded.
pub async fn fetch_all<R, T>(requester: &R, url: &str) -> Result<Vec<T>>
where
    R: Requester,
    T: DeserializeOwned + Send,
{
    let mut items: Vec<T> = Vec::new();
    let mut next = Some(url.to_string());
    let mut pages = 0;

    while let Some(page_url) = next {
        let page: Page<T> = requester.get_json(&page_url).await?;
        pages += 1;

        next = page.next_page().map(str::to_string);
        let Some(page_items) = page.items else {
            debug!("page {} of {} has no items, stopping", pages, url);
            break;
        };

        items.extend(page_items);
        debug!(
            "fetched page {} of {} ({} items so far)",
            pages,
            url,
            items.len()
        );
    }

    Ok(items)
}
