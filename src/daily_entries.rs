//! The list of entries shown for one day, kept in sync with save and delete results

use log::{debug, info, warn};

use crate::api::EntryApi;
use crate::form::SnackbarMessage;
use crate::model::{DayDate, FoodItem};
use crate::summary::NutritionSummary;

pub const LOAD_FAILED_MESSAGE: &str = "An error occurred when getting the entries";
pub const DELETE_FAILED_MESSAGE: &str = "An error occurred when deleting the entry";

/// Entries of one day plus the selection and dialog flags around them
///
/// The list keeps fetch order, then append order for new entries. It is
/// never re-sorted and never re-fetched after a save or delete.
#[derive(Debug, Clone)]
pub struct DailyEntries {
    date: DayDate,
    entries: Vec<FoodItem>,
    selected: Option<FoodItem>,
    entry_dialog_open: bool,
    delete_dialog_open: bool,
    message: SnackbarMessage,
}

impl DailyEntries {
    pub fn new(date: DayDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
            selected: None,
            entry_dialog_open: false,
            delete_dialog_open: false,
            message: SnackbarMessage::default(),
        }
    }

    pub fn date(&self) -> DayDate {
        self.date
    }

    pub fn entries(&self) -> &[FoodItem] {
        &self.entries
    }

    pub fn selected(&self) -> Option<&FoodItem> {
        self.selected.as_ref()
    }

    pub fn entry_dialog_open(&self) -> bool {
        self.entry_dialog_open
    }

    pub fn delete_dialog_open(&self) -> bool {
        self.delete_dialog_open
    }

    pub fn message(&self) -> &SnackbarMessage {
        &self.message
    }

    pub fn dismiss_message(&mut self) {
        self.message.dismiss();
    }

    /// Replace the list with the entries stored for the current day
    pub async fn load<A: EntryApi + ?Sized>(&mut self, api: &A) {
        match api.list_entries(&self.date).await {
            Ok(entries) => {
                debug!("Loaded {} entries for {}", entries.len(), self.date);
                self.entries = entries;
            }
            Err(e) => {
                warn!("Listing entries for {} failed: {}", self.date, e);
                self.entries.clear();
                self.message = SnackbarMessage::error(LOAD_FAILED_MESSAGE);
            }
        }
    }

    /// Switch to `date` and fetch its entries
    pub async fn change_date<A: EntryApi + ?Sized>(&mut self, date: DayDate, api: &A) {
        self.date = date;
        self.entries.clear();
        self.selected = None;
        self.entry_dialog_open = false;
        self.delete_dialog_open = false;
        self.load(api).await;
    }

    pub fn open_create(&mut self) {
        self.selected = None;
        self.entry_dialog_open = true;
    }

    pub fn open_edit(&mut self, item: &FoodItem) {
        self.selected = Some(item.clone());
        self.entry_dialog_open = true;
    }

    /// Replace the entry with the same id in place, or append it
    pub fn on_entry_saved(&mut self, item: FoodItem) {
        match self.entries.iter_mut().find(|e| e.id == item.id) {
            Some(existing) => *existing = item,
            None => self.entries.push(item),
        }
    }

    pub fn close_entry_dialog(&mut self) {
        self.selected = None;
        self.entry_dialog_open = false;
    }

    /// First step of a deletion: select `item` and ask for confirmation
    pub fn request_delete(&mut self, item: &FoodItem) {
        self.selected = Some(item.clone());
        self.delete_dialog_open = true;
    }

    /// Second step of a deletion. Returns `true` when the entry was removed.
    ///
    /// On failure the list, selection and dialog are left as they are.
    pub async fn confirm_delete<A: EntryApi + ?Sized>(&mut self, api: &A) -> bool {
        let id = match (&self.selected, self.delete_dialog_open) {
            (Some(item), true) => item.id,
            _ => return false,
        };

        match api.delete_entry(id).await {
            Ok(()) => {
                info!("Removed entry {} from {}", id, self.date);
                self.entries.retain(|e| e.id != id);
                self.selected = None;
                self.delete_dialog_open = false;
                true
            }
            Err(e) => {
                warn!("Deleting entry {} failed: {}", id, e);
                self.message = SnackbarMessage::error(DELETE_FAILED_MESSAGE);
                false
            }
        }
    }

    pub fn close_delete_dialog(&mut self) {
        self.selected = None;
        self.delete_dialog_open = false;
    }

    pub fn summary(&self, daily_kcal_goal: u32) -> NutritionSummary {
        NutritionSummary::with_goal(&self.entries, daily_kcal_goal)
    }
}
