//! One day of the diary: the entry list together with its add/edit dialog

use crate::api::{EntryApi, FoodApi};
use crate::daily_entries::DailyEntries;
use crate::entry_form::EntryForm;
use crate::model::{DayDate, FoodItem};
use crate::summary::NutritionSummary;

/// Wires the entry dialog to the day's list
#[derive(Debug, Clone)]
pub struct DayView {
    entries: DailyEntries,
    form: EntryForm,
    daily_kcal_goal: u32,
}

impl DayView {
    pub fn new(date: DayDate, daily_kcal_goal: u32) -> Self {
        Self {
            entries: DailyEntries::new(date),
            form: EntryForm::new(date),
            daily_kcal_goal,
        }
    }

    /// Build the view for `date` and fetch its entries
    pub async fn open<A: EntryApi + ?Sized>(date: DayDate, daily_kcal_goal: u32, api: &A) -> Self {
        let mut view = Self::new(date, daily_kcal_goal);
        view.entries.load(api).await;
        view
    }

    pub fn entries(&self) -> &DailyEntries {
        &self.entries
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EntryForm {
        &mut self.form
    }

    pub async fn change_date<A: EntryApi + ?Sized>(&mut self, date: DayDate, api: &A) {
        self.form.close();
        self.form.set_date(date);
        self.entries.change_date(date, api).await;
    }

    pub fn open_create(&mut self) {
        self.entries.open_create();
        self.form.open_create();
    }

    pub fn open_edit(&mut self, item: &FoodItem) {
        self.entries.open_edit(item);
        self.form.open_edit(item);
    }

    /// Look up an entry of this day by id
    pub fn find(&self, id: i64) -> Option<&FoodItem> {
        self.entries.entries().iter().find(|e| e.id == id)
    }

    pub fn close_entry_dialog(&mut self) {
        self.form.close();
        self.entries.close_entry_dialog();
    }

    pub async fn search_food<A: FoodApi + ?Sized>(&mut self, api: &A, query: &str) -> bool {
        self.form.search_food(api, query).await
    }

    /// Submit the dialog and fold a saved entry into the list
    pub async fn submit_entry<A: EntryApi + ?Sized>(&mut self, api: &A) -> Option<FoodItem> {
        let saved = self.form.submit(api).await?;
        self.entries.on_entry_saved(saved.clone());
        self.entries.close_entry_dialog();
        Some(saved)
    }

    pub fn request_delete(&mut self, item: &FoodItem) {
        self.entries.request_delete(item);
    }

    pub async fn confirm_delete<A: EntryApi + ?Sized>(&mut self, api: &A) -> bool {
        self.entries.confirm_delete(api).await
    }

    pub fn close_delete_dialog(&mut self) {
        self.entries.close_delete_dialog();
    }

    pub fn summary(&self) -> NutritionSummary {
        self.entries.summary(self.daily_kcal_goal)
    }
}
