use td_core::TranscriptEntry;

use crate::SessionUpdate;

#[derive(Debug, Default)]
pub(crate) struct TuiUiState {
    pub(crate) rendered_entries: Vec<TranscriptEntry>,
    pub(crate) pending_entries: Vec<TranscriptEntry>,
    pub(crate) typing_entry: Option<TranscriptEntry>,
    pub(crate) typing_chars: usize,
    pub(crate) input_buffer: String,
    pub(crate) completed: bool,
    pub(crate) help_visible: bool,
    pub(crate) status: String,
}

impl TuiUiState {
    pub(crate) fn typing_in_progress(&self) -> bool {
        self.typing_entry.is_some() || !self.pending_entries.is_empty()
    }

    pub(crate) fn apply_update(&mut self, update: SessionUpdate, completed: bool) {
        if update.replaced {
            self.replace_entries(update.entries);
        } else {
            self.pending_entries.extend(update.entries);
        }
        self.completed = completed;
    }

    pub(crate) fn replace_entries(&mut self, entries: Vec<TranscriptEntry>) {
        self.rendered_entries.clear();
        self.pending_entries = entries;
        self.typing_entry = None;
        self.typing_chars = 0;
        self.input_buffer.clear();
    }

    /// Reveals up to `chars` more characters. Returns false once nothing is
    /// left to animate.
    pub(crate) fn advance_typewriter(&mut self, chars: usize) -> bool {
        let Some(entry) = self.typing_entry.as_ref() else {
            if self.pending_entries.is_empty() {
                return false;
            }
            let next_entry = self.pending_entries.remove(0);
            if next_entry.text.is_empty() {
                self.rendered_entries.push(next_entry);
                return true;
            }
            self.typing_entry = Some(next_entry);
            self.typing_chars = chars.max(1);
            return true;
        };

        let total_chars = entry.text.chars().count();
        if self.typing_chars >= total_chars {
            self.rendered_entries.push(entry.clone());
            self.typing_entry = None;
            self.typing_chars = 0;
            return true;
        }
        self.typing_chars = (self.typing_chars + chars.max(1)).min(total_chars);
        true
    }

    pub(crate) fn skip_typewriter(&mut self) {
        if let Some(entry) = self.typing_entry.take() {
            self.rendered_entries.push(entry);
        }
        self.rendered_entries.append(&mut self.pending_entries);
        self.typing_chars = 0;
    }

    /// Entries to draw, with the one being typed cut to its revealed prefix.
    pub(crate) fn visible_entries(&self) -> Vec<TranscriptEntry> {
        let mut out = self.rendered_entries.clone();
        if let Some(typing) = &self.typing_entry {
            out.push(TranscriptEntry::new(
                typing.kind,
                typing.text.chars().take(self.typing_chars).collect::<String>(),
            ));
        }
        out
    }
}
