//! Paged list queries.
//!
//! Every list endpoint takes `size` and `position` query parameters and reports the number of
//! matching records in an `X-Total-Count` response header. [`paginate`] walks such an endpoint
//! until the reported total is reached or the server hands back a short page.

use std::{fmt, future::Future};

use serde::de;

/// Page size used when fetching every record of a list.
pub const PAGE_SIZE: u32 = 200;

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Records on this page.
    pub items: Vec<T>,

    /// Total number of matching records, from the `X-Total-Count` header. Zero when absent.
    pub total_count: u32,
}

/// Query string pairs, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn push(&mut self, key: &'static str, value: impl ToString) {
        self.pairs.push((key, value.to_string()));
    }

    /// Push `value` only when it is set and not blank.
    pub fn push_opt<T: Filter + ?Sized>(&mut self, key: &'static str, value: Option<&T>) {
        if let Some(value) = value.filter(|value| !value.is_blank()) {
            self.push(key, value.to_string());
        }
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Value of the first pair with this key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Filter value with a blank form that the API reads as "no filter".
pub trait Filter: fmt::Display {
    fn is_blank(&self) -> bool;
}

impl Filter for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Filter for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_filter_for_int {
    ($($ty:ty),*) => {
        $(
            impl Filter for $ty {
                fn is_blank(&self) -> bool {
                    *self < 1
                }
            }
        )*
    };
}

impl_filter_for_int!(i32, i64, u16, u32);

/// Parameters of a paged list endpoint.
pub trait ListQuery: Clone {
    /// Record type returned by the endpoint.
    type Item: de::DeserializeOwned;

    /// Endpoint path, relative to the API base URL.
    fn path(&self) -> String;

    /// Set the `position` and `size` of the next request.
    fn set_window(&mut self, position: u32, size: u32);

    /// Append the query parameters, window included.
    fn query(&self, query: &mut Query);

    /// Collected query parameters.
    fn to_query(&self) -> Query {
        let mut query = Query::default();
        self.query(&mut query);
        query
    }
}

/// Fetch pages of [`PAGE_SIZE`] records until all of them have been collected.
///
/// Stops after a page shorter than [`PAGE_SIZE`], or once `position + size` reaches the total
/// count reported by the server. A missing total count therefore ends the walk after the
/// first page.
pub(crate) async fn paginate<P, T, F, Fut>(mut params: P, mut fetch: F) -> eyre::Result<Vec<T>>
where
    P: ListQuery,
    F: FnMut(P) -> Fut,
    Fut: Future<Output = eyre::Result<Page<T>>>,
{
    let mut all = Vec::new();
    let mut position = 0_u32;

    loop {
        params.set_window(position, PAGE_SIZE);

        let page = fetch(params.clone()).await?;
        let short_page = page.items.len() < PAGE_SIZE as usize;
        let next = position.saturating_add(PAGE_SIZE);

        log::trace!(
            "Fetched {} records at position {position} of {}",
            page.items.len(),
            page.total_count
        );

        all.extend(page.items);

        if short_page || next >= page.total_count {
            break;
        }

        position = next;
    }

    Ok(all)
}
