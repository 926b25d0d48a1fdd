//! Debounced search state for the dashboard's selectors.
//!
//! Users, roles and channels each have their own lookup. Every keystroke bumps the
//! lookup's generation and hands out a ticket; a timer or response holding an older
//! ticket is ignored. The channel lookup is shared by the three log channel
//! selectors, and its results land in the selector the ticket was issued for.

use crate::model::search::SelectOptionDto;

/// Idle time after the last keystroke before a lookup is sent.
pub const DEBOUNCE_DELAY_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupKind {
    Users,
    Roles,
    Channels,
}

impl LookupKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            LookupKind::Users => "/api/users/search",
            LookupKind::Roles => "/api/roles/search",
            LookupKind::Channels => "/api/channels/search",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A selector on the dashboard form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupSlot {
    TrustedUsers,
    MuteRole,
    JoinLog,
    ExitLog,
    ModLog,
}

impl LookupSlot {
    const COUNT: usize = 5;

    pub fn kind(&self) -> LookupKind {
        match self {
            LookupSlot::TrustedUsers => LookupKind::Users,
            LookupSlot::MuteRole => LookupKind::Roles,
            LookupSlot::JoinLog | LookupSlot::ExitLog | LookupSlot::ModLog => {
                LookupKind::Channels
            }
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Issued for one keystroke; valid until the next keystroke of the same lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupTicket {
    pub slot: LookupSlot,
    pub query: String,
    generation: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lookups {
    generations: [u64; 3],
    options: [Vec<SelectOptionDto>; LookupSlot::COUNT],
    loading: [bool; LookupSlot::COUNT],
}

impl Lookups {
    /// Registers a keystroke in `slot`'s selector.
    ///
    /// Any earlier ticket of the same lookup goes stale, including one already in
    /// flight for another selector sharing the lookup.
    ///
    /// # Returns
    /// - `Some(LookupTicket)` - Wait [`DEBOUNCE_DELAY_MS`], then start the lookup
    /// - `None` - The query is blank and nothing is scheduled
    pub fn input(&mut self, slot: LookupSlot, query: &str) -> Option<LookupTicket> {
        let kind = slot.kind();
        self.generations[kind.index()] += 1;
        self.clear_loading(kind);

        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        Some(LookupTicket {
            slot,
            query: query.to_string(),
            generation: self.generations[kind.index()],
        })
    }

    pub fn is_current(&self, ticket: &LookupTicket) -> bool {
        self.generations[ticket.slot.kind().index()] == ticket.generation
    }

    /// Marks the ticket's selector as loading once its timer has elapsed.
    ///
    /// Returns `false` for a superseded ticket, which must not send a request.
    pub fn begin(&mut self, ticket: &LookupTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.loading[ticket.slot.index()] = true;
        true
    }

    /// Replaces the selector's options with a response, unless the ticket is stale.
    pub fn resolve(&mut self, ticket: &LookupTicket, options: Vec<SelectOptionDto>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.options[ticket.slot.index()] = options;
        self.loading[ticket.slot.index()] = false;
        true
    }

    /// Ends a failed lookup, keeping the previous options.
    pub fn fail(&mut self, ticket: &LookupTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.loading[ticket.slot.index()] = false;
        true
    }

    /// Sets options outside of a lookup, e.g. labels for the saved selection.
    pub fn seed(&mut self, slot: LookupSlot, options: Vec<SelectOptionDto>) {
        self.options[slot.index()] = options;
    }

    pub fn options(&self, slot: LookupSlot) -> &[SelectOptionDto] {
        &self.options[slot.index()]
    }

    pub fn is_loading(&self, slot: LookupSlot) -> bool {
        self.loading[slot.index()]
    }

    fn clear_loading(&mut self, kind: LookupKind) {
        for slot in [
            LookupSlot::TrustedUsers,
            LookupSlot::MuteRole,
            LookupSlot::JoinLog,
            LookupSlot::ExitLog,
            LookupSlot::ModLog,
        ] {
            if slot.kind() == kind {
                self.loading[slot.index()] = false;
            }
        }
    }
}
