//! Fan-out/fan-in page loading.
//!
//! A page load is one list request followed by one detail request per listed
//! item. The host performs the requests concurrently and reports completions
//! in any order; [`PageLoader`] reassembles them by index and commits the
//! page only once every detail has arrived. The first failure abandons the
//! whole batch.
//!
//! ```text
//! begin(url) ──► list response ──► Dispatch(N detail requests)
//!                    │                        │
//!                    ▼                        ▼
//!                 Failed          detail responses (any order)
//!                                   │        │           │
//!                                   ▼        ▼           ▼
//!                                Failed   Pending   Completed(page)
//! ```
//!
//! Every load gets a new generation. Responses carrying an older generation
//! are reported as [`LoadOutcome::Stale`] and never touch the current batch.

use std::mem;

use crate::domain::{FetchError, ItemDetail, ItemSummary, ListPage};
use crate::fetch::request::{FetchRequest, RequestKind, RequestTag};

/// A fully assembled page: details in list order plus the list cursors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPage {
    pub items: Vec<ItemDetail>,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

/// Result of feeding one response into the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response belongs to an abandoned or finished load.
    Stale,
    /// The response duplicates one already received or names no known slot.
    Ignored,
    /// The load failed; nothing of it should be shown.
    Failed(FetchError),
    /// The list arrived; these detail requests must all be issued.
    Dispatch(Vec<FetchRequest>),
    /// A detail arrived and others are still outstanding.
    Pending { received: usize, expected: usize },
    /// Every detail arrived.
    Completed(LoadedPage),
}

#[derive(Debug)]
struct DetailBatch {
    summaries: Vec<ItemSummary>,
    slots: Vec<Option<ItemDetail>>,
    received: usize,
    previous: Option<String>,
    next: Option<String>,
    total: Option<u64>,
}

#[derive(Debug, Default)]
enum Stage {
    #[default]
    Idle,
    AwaitingList {
        url: String,
    },
    AwaitingDetails(DetailBatch),
}

/// Drives page loads from host completions.
#[derive(Debug, Default)]
pub struct PageLoader {
    generation: u64,
    stage: Stage,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

impl PageLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation of the most recent load.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a load is waiting on responses.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        !matches!(self.stage, Stage::Idle)
    }

    /// Starts a new load of the list page at `url`.
    ///
    /// Any load still in flight is abandoned: its responses will come back
    /// as [`LoadOutcome::Stale`].
    pub fn begin(&mut self, url: &str) -> FetchRequest {
        self.generation += 1;
        if self.is_loading() {
            tracing::debug!(
                generation = self.generation,
                "abandoning in-flight page load"
            );
        }
        self.stage = Stage::AwaitingList {
            url: url.to_string(),
        };
        tracing::debug!(generation = self.generation, url = %url, "page load started");
        FetchRequest::new(url, RequestTag::list(self.generation))
    }

    /// Feeds one host response into the current load.
    pub fn on_response(&mut self, tag: RequestTag, status: u16, body: &[u8]) -> LoadOutcome {
        if tag.generation != self.generation || !self.is_loading() {
            tracing::debug!(
                response_generation = tag.generation,
                current_generation = self.generation,
                "discarding stale response"
            );
            return LoadOutcome::Stale;
        }

        match tag.kind {
            RequestKind::List => self.on_list(status, body),
            RequestKind::Detail { index } => self.on_detail(index, status, body),
        }
    }

    fn on_list(&mut self, status: u16, body: &[u8]) -> LoadOutcome {
        let url = match mem::take(&mut self.stage) {
            Stage::AwaitingList { url } => url,
            other => {
                self.stage = other;
                tracing::debug!("ignoring repeated list response");
                return LoadOutcome::Ignored;
            }
        };

        if !is_success(status) {
            tracing::debug!(url = %url, status, "list request failed");
            return LoadOutcome::Failed(FetchError::Status { url, status });
        }

        let page = match ListPage::from_json(body) {
            Ok(page) => page,
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "list response did not decode");
                return LoadOutcome::Failed(FetchError::Decode {
                    url,
                    reason: e.to_string(),
                });
            }
        };

        if page.items.is_empty() {
            tracing::debug!(url = %url, "list page is empty");
            return LoadOutcome::Completed(LoadedPage {
                items: Vec::new(),
                previous: page.previous,
                next: page.next,
                total: page.total,
            });
        }

        let requests: Vec<FetchRequest> = page
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                FetchRequest::new(
                    item.detail_url.as_str(),
                    RequestTag::detail(self.generation, index),
                )
            })
            .collect();

        tracing::debug!(
            generation = self.generation,
            detail_count = requests.len(),
            "dispatching detail requests"
        );

        self.stage = Stage::AwaitingDetails(DetailBatch {
            slots: vec![None; page.items.len()],
            summaries: page.items,
            received: 0,
            previous: page.previous,
            next: page.next,
            total: page.total,
        });

        LoadOutcome::Dispatch(requests)
    }

    fn on_detail(&mut self, index: usize, status: u16, body: &[u8]) -> LoadOutcome {
        let Stage::AwaitingDetails(batch) = &mut self.stage else {
            tracing::debug!(index, "detail response before list");
            return LoadOutcome::Ignored;
        };

        let Some(summary) = batch.summaries.get(index) else {
            tracing::debug!(index, "detail index out of range");
            return LoadOutcome::Ignored;
        };
        if batch.slots[index].is_some() {
            tracing::debug!(index, "duplicate detail response");
            return LoadOutcome::Ignored;
        }

        if !is_success(status) {
            let url = summary.detail_url.clone();
            tracing::debug!(url = %url, status, "detail request failed, abandoning page");
            self.stage = Stage::Idle;
            return LoadOutcome::Failed(FetchError::Status { url, status });
        }

        let detail = match ItemDetail::from_json(body) {
            Ok(detail) => detail,
            Err(e) => {
                let url = summary.detail_url.clone();
                tracing::debug!(
                    url = %url,
                    error = %e,
                    "detail response did not decode, abandoning page"
                );
                self.stage = Stage::Idle;
                return LoadOutcome::Failed(FetchError::Decode {
                    url,
                    reason: e.to_string(),
                });
            }
        };

        batch.slots[index] = Some(detail);
        batch.received += 1;
        let expected = batch.slots.len();

        if batch.received < expected {
            return LoadOutcome::Pending {
                received: batch.received,
                expected,
            };
        }

        let Stage::AwaitingDetails(batch) = mem::take(&mut self.stage) else {
            return LoadOutcome::Ignored;
        };
        tracing::debug!(
            generation = self.generation,
            item_count = expected,
            "page load completed"
        );
        LoadOutcome::Completed(LoadedPage {
            items: batch.slots.into_iter().flatten().collect(),
            previous: batch.previous,
            next: batch.next,
            total: batch.total,
        })
    }
}
