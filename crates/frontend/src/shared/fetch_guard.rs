/// Stale-response guard for filter-driven refetches
///
/// Filter changes fire a new request without cancelling the one in flight.
/// Each request takes a ticket from a page-level sequence; when the response
/// lands, only the holder of the newest ticket may write state, so a slow
/// older response can no longer overwrite a newer one.

/// Ticket identifying one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Per-page monotonic fetch sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchSequence {
    current: u64,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, invalidating all earlier tickets.
    pub fn begin(&mut self) -> FetchTicket {
        self.current += 1;
        FetchTicket(self.current)
    }

    /// Whether `ticket` still belongs to the newest fetch.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.current == ticket.0
    }
}
