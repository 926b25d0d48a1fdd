//! Local editing state of the dashboard form.
//!
//! The page keeps two copies of a guild's config: the authoritative copy last
//! returned by the server and the draft bound to the form fields. The form is dirty
//! whenever the two differ anywhere in the document, including nested sections.

use crate::model::config::GuildConfigDto;

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigDraft {
    authoritative: GuildConfigDto,
    draft: GuildConfigDto,
    /// Authoritative copy from before an unacknowledged save, restored on failure.
    pending_save: Option<GuildConfigDto>,
}

impl ConfigDraft {
    pub fn new(config: GuildConfigDto) -> Self {
        Self {
            draft: config.clone(),
            authoritative: config,
            pending_save: None,
        }
    }

    pub fn authoritative(&self) -> &GuildConfigDto {
        &self.authoritative
    }

    pub fn draft(&self) -> &GuildConfigDto {
        &self.draft
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.authoritative
    }

    pub fn is_saving(&self) -> bool {
        self.pending_save.is_some()
    }

    pub fn edit(&mut self, edit: impl FnOnce(&mut GuildConfigDto)) {
        edit(&mut self.draft);
    }

    /// Reverts every unsaved edit.
    pub fn reset(&mut self) {
        self.draft = self.authoritative.clone();
    }

    /// Starts a save of the current draft.
    ///
    /// The draft is taken as authoritative right away so the form leaves the dirty
    /// state before the server answers.
    ///
    /// # Returns
    /// - `Some(GuildConfigDto)` - The document to send
    /// - `None` - Nothing to save
    pub fn begin_save(&mut self) -> Option<GuildConfigDto> {
        if !self.is_dirty() {
            return None;
        }

        let previous = std::mem::replace(&mut self.authoritative, self.draft.clone());
        if self.pending_save.is_none() {
            self.pending_save = Some(previous);
        }

        Some(self.draft.clone())
    }

    /// Applies the stored document from a save acknowledgement.
    ///
    /// Edits made while the save was in flight are kept in the draft.
    pub fn acknowledge(&mut self, stored: GuildConfigDto) {
        if self.draft == self.authoritative {
            self.draft = stored.clone();
        }
        self.authoritative = stored;
        self.pending_save = None;
    }

    /// Undoes the optimistic switch of a failed save so the edits show as unsaved.
    pub fn reject(&mut self) {
        if let Some(previous) = self.pending_save.take() {
            self.authoritative = previous;
        }
    }

    /// Replaces both copies with a freshly loaded document.
    pub fn reload(&mut self, config: GuildConfigDto) {
        *self = Self::new(config);
    }
}
