//! Add/edit dialog for a single diary entry

use log::{debug, warn};

use crate::api::{EntryApi, FoodApi};
use crate::error::Error;
use crate::form::{Field, FormErrors, SnackbarMessage};
use crate::model::{DayDate, EntryPayload, Food, FoodItem};
use crate::validation::validate_entry_form;

pub const CREATED_MESSAGE: &str = "Entry successfully created";
pub const CREATE_FAILED_MESSAGE: &str = "An error occurred when creating entry";
pub const UPDATED_MESSAGE: &str = "Entry successfully updated";
pub const UPDATE_FAILED_MESSAGE: &str = "An error occurred when updating entry";
pub const QUANTITY_TOO_LARGE_MESSAGE: &str = "The quantity is too large";

/// Dialog state
#[derive(Debug, Clone, PartialEq)]
pub enum DialogMode {
    Closed,
    Create,
    /// Editing the given entry; its timestamp is sent back unchanged
    Edit(FoodItem),
}

/// Handle for one issued food search
///
/// Only the handle carrying the latest sequence number may update the
/// candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

/// Draft state of the entry dialog
#[derive(Debug, Clone)]
pub struct EntryForm {
    date: DayDate,
    mode: DialogMode,
    food_search: String,
    candidates: Vec<Food>,
    selected_food: Option<Food>,
    quantity: String,
    errors: FormErrors,
    message: SnackbarMessage,
    latest_search: u64,
}

impl EntryForm {
    /// Closed dialog for entries logged on `date`
    pub fn new(date: DayDate) -> Self {
        Self {
            date,
            mode: DialogMode::Closed,
            food_search: String::new(),
            candidates: Vec::new(),
            selected_food: None,
            quantity: String::new(),
            errors: FormErrors::new(),
            message: SnackbarMessage::default(),
            latest_search: 0,
        }
    }

    pub fn set_date(&mut self, date: DayDate) {
        self.date = date;
    }

    /// Drop all drafts; responses to searches issued before this point are ignored
    fn clear(&mut self) {
        self.food_search.clear();
        self.candidates.clear();
        self.selected_food = None;
        self.quantity.clear();
        self.errors = FormErrors::new();
        self.latest_search += 1;
    }

    pub fn open_create(&mut self) {
        self.clear();
        self.mode = DialogMode::Create;
    }

    /// Open seeded from `item`
    pub fn open_edit(&mut self, item: &FoodItem) {
        self.clear();
        self.food_search = item.name.clone();
        self.selected_food = Some(item.food());
        self.quantity = item.quantity.to_string();
        self.mode = DialogMode::Edit(item.clone());
    }

    /// Close, discarding unsaved drafts
    pub fn close(&mut self) {
        self.clear();
        self.mode = DialogMode::Closed;
    }

    pub fn is_open(&self) -> bool {
        self.mode != DialogMode::Closed
    }

    pub fn mode(&self) -> &DialogMode {
        &self.mode
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            DialogMode::Edit(_) => "Update entry",
            _ => "Add entry",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self.mode {
            DialogMode::Edit(_) => "Update",
            _ => "Add",
        }
    }

    pub fn food_search(&self) -> &str {
        &self.food_search
    }

    pub fn candidates(&self) -> &[Food] {
        &self.candidates
    }

    pub fn selected_food(&self) -> Option<&Food> {
        self.selected_food.as_ref()
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn message(&self) -> &SnackbarMessage {
        &self.message
    }

    pub fn dismiss_message(&mut self) {
        self.message.dismiss();
    }

    /// Record `query` as the search text and issue a new search handle
    pub fn begin_search(&mut self, query: &str) -> SearchRequest {
        self.latest_search += 1;
        self.food_search = query.to_string();

        SearchRequest {
            seq: self.latest_search,
            query: query.to_string(),
        }
    }

    /// Apply a search result if it answers the latest request. Returns whether it was applied.
    ///
    /// Lookup failures leave the candidates as they are.
    pub fn finish_search(&mut self, request: &SearchRequest, result: Result<Vec<Food>, Error>) -> bool {
        if request.seq != self.latest_search {
            debug!("Dropping stale food search for {:?}", request.query);
            return false;
        }

        match result {
            Ok(foods) => {
                self.candidates = foods;
                true
            }
            Err(e) => {
                debug!("Food search for {:?} failed: {}", request.query, e);
                false
            }
        }
    }

    /// Issue a search and apply its result
    pub async fn search_food<A: FoodApi + ?Sized>(&mut self, api: &A, query: &str) -> bool {
        let request = self.begin_search(query);
        let result = api.search_foods(&request.query).await;
        self.finish_search(&request, result)
    }

    /// Choose one of the current candidates, or clear the choice with `None`
    ///
    /// A food that is not among the candidates clears the choice.
    pub fn select_food(&mut self, candidate: Option<&Food>) {
        self.selected_food =
            candidate.and_then(|c| self.candidates.iter().find(|f| f.id == c.id).cloned());
    }

    /// Keep only the digits of `text`
    pub fn set_quantity(&mut self, text: &str) {
        self.quantity = text.chars().filter(|c| c.is_ascii_digit()).collect();
    }

    /// Validate, then create or update the entry
    ///
    /// Returns the saved entry and closes the dialog on success. On a
    /// validation failure nothing is sent; on a remote failure the dialog
    /// stays open with an error message.
    pub async fn submit<A: EntryApi + ?Sized>(&mut self, api: &A) -> Option<FoodItem> {
        let errors = validate_entry_form(self.selected_food.as_ref(), &self.quantity);
        self.errors = errors;

        if !self.errors.is_empty() {
            return None;
        }

        let quantity = match self.quantity.parse::<u32>() {
            Ok(quantity) => quantity,
            Err(_) => {
                self.errors = self.errors.with(Field::Quantity, QUANTITY_TOO_LARGE_MESSAGE);
                return None;
            }
        };

        let food_id = self.selected_food.as_ref()?.id;

        let (result, success, failure) = match &self.mode {
            DialogMode::Closed => return None,
            DialogMode::Create => {
                let payload = EntryPayload {
                    food_id,
                    quantity,
                    timestamp: self.date.timestamp_filter(),
                };
                (api.create_entry(&payload).await, CREATED_MESSAGE, CREATE_FAILED_MESSAGE)
            }
            DialogMode::Edit(item) => {
                let payload = EntryPayload {
                    food_id,
                    quantity,
                    timestamp: item.timestamp.clone(),
                };
                (api.update_entry(item.id, &payload).await, UPDATED_MESSAGE, UPDATE_FAILED_MESSAGE)
            }
        };

        match result {
            Ok(item) => {
                self.message = SnackbarMessage::success(success);
                self.close();
                Some(item)
            }
            Err(e) => {
                warn!("{}: {}", failure, e);
                self.message = SnackbarMessage::error(failure);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{entry, food, Call, FakeApi};
    use crate::form::Severity;
    use crate::validation::REQUIRED_MESSAGE;

    fn date() -> DayDate {
        DayDate::parse("2024-10-08").unwrap()
    }

    fn catalog() -> Vec<Food> {
        vec![
            food(1, "Rice", 130.0, 100.0),
            food(2, "Brown rice", 110.0, 100.0),
            food(3, "Bread", 265.0, 100.0),
        ]
    }

    #[test]
    fn test_open_create_clears_drafts() {
        let mut form = EntryForm::new(date());
        form.open_edit(&entry(5, 1, 200));
        form.close();
        form.open_create();

        assert_eq!(form.mode(), &DialogMode::Create);
        assert_eq!(form.food_search(), "");
        assert!(form.selected_food().is_none());
        assert_eq!(form.quantity(), "");
        assert!(form.errors().is_empty());
        assert_eq!(form.title(), "Add entry");
        assert_eq!(form.action_label(), "Add");
    }

    #[test]
    fn test_open_edit_seeds_from_entry() {
        let item = entry(5, 40, 250);
        let mut form = EntryForm::new(date());
        form.open_edit(&item);

        assert_eq!(form.food_search(), "food 40");
        assert_eq!(form.selected_food().map(|f| f.id), Some(40));
        assert_eq!(form.quantity(), "250");
        assert_eq!(form.title(), "Update entry");
        assert_eq!(form.action_label(), "Update");
    }

    #[test]
    fn test_quantity_keeps_only_digits() {
        let mut form = EntryForm::new(date());
        form.set_quantity("1a2b3");
        assert_eq!(form.quantity(), "123");
        form.set_quantity("-5.5g");
        assert_eq!(form.quantity(), "55");
        form.set_quantity("abc");
        assert_eq!(form.quantity(), "");
    }

    #[test]
    fn test_stale_search_is_dropped() {
        let mut form = EntryForm::new(date());
        form.open_create();

        let first = form.begin_search("ri");
        let second = form.begin_search("rice");

        assert!(form.finish_search(&second, Ok(vec![food(1, "Rice", 130.0, 100.0)])));
        assert!(!form.finish_search(&first, Ok(catalog())));

        assert_eq!(form.candidates().len(), 1);
        assert_eq!(form.food_search(), "rice");
    }

    #[test]
    fn test_search_issued_before_close_is_dropped() {
        let mut form = EntryForm::new(date());
        form.open_create();
        let request = form.begin_search("bread");
        form.close();
        form.open_create();

        assert!(!form.finish_search(&request, Ok(catalog())));
        assert!(form.candidates().is_empty());
    }

    #[test]
    fn test_failed_search_keeps_candidates() {
        let mut form = EntryForm::new(date());
        form.open_create();
        let request = form.begin_search("rice");
        form.finish_search(&request, Ok(catalog()));

        let request = form.begin_search("rice b");
        assert!(!form.finish_search(&request, Err(Error::general("offline"))));
        assert_eq!(form.candidates().len(), 3);
    }

    #[test]
    fn test_select_food_only_from_candidates() {
        let mut form = EntryForm::new(date());
        form.open_create();
        let request = form.begin_search("r");
        form.finish_search(&request, Ok(catalog()));

        form.select_food(Some(&food(2, "Brown rice", 110.0, 100.0)));
        assert_eq!(form.selected_food().map(|f| f.id), Some(2));

        form.select_food(Some(&food(99, "Unknown", 1.0, 1.0)));
        assert!(form.selected_food().is_none());

        form.select_food(Some(&food(3, "Bread", 265.0, 100.0)));
        form.select_food(None);
        assert!(form.selected_food().is_none());
    }

    #[tokio::test]
    async fn test_search_food_uses_api() {
        let api = FakeApi::new().with_foods(catalog());
        let mut form = EntryForm::new(date());
        form.open_create();

        assert!(form.search_food(&api, "rice").await);
        assert_eq!(form.candidates().len(), 2);
        assert_eq!(api.calls(), vec![Call::Search("rice".to_string())]);
    }

    #[tokio::test]
    async fn test_submit_without_food_is_blocked() {
        let api = FakeApi::new();
        let mut form = EntryForm::new(date());
        form.open_create();
        form.set_quantity("100");

        assert!(form.submit(&api).await.is_none());
        assert_eq!(form.errors().get(Field::Food), Some(REQUIRED_MESSAGE));
        assert!(!form.errors().has(Field::Quantity));
        assert!(api.calls().is_empty());
        assert!(form.is_open());
    }

    #[tokio::test]
    async fn test_submit_without_quantity_is_blocked() {
        let api = FakeApi::new().with_foods(catalog());
        let mut form = EntryForm::new(date());
        form.open_create();
        form.search_food(&api, "bread").await;
        form.select_food(Some(&catalog()[2]));

        assert!(form.submit(&api).await.is_none());
        assert_eq!(form.errors().get(Field::Quantity), Some(REQUIRED_MESSAGE));
        assert!(!form.errors().has(Field::Food));
        assert_eq!(api.calls(), vec![Call::Search("bread".to_string())]);
    }

    #[tokio::test]
    async fn test_errors_are_rebuilt_each_pass() {
        let api = FakeApi::failing();
        let mut form = EntryForm::new(date());
        form.open_edit(&entry(5, 40, 250));
        form.set_quantity("");
        form.submit(&api).await;
        assert!(form.errors().has(Field::Quantity));

        form.set_quantity("10");
        form.submit(&api).await;
        assert!(form.errors().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_quantity_is_rejected() {
        let api = FakeApi::new();
        let mut form = EntryForm::new(date());
        form.open_edit(&entry(5, 40, 250));
        form.set_quantity("99999999999");

        assert!(form.submit(&api).await.is_none());
        assert_eq!(form.errors().get(Field::Quantity), Some(QUANTITY_TOO_LARGE_MESSAGE));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_sends_day_timestamp() {
        let api = FakeApi::new().with_foods(catalog());
        let mut form = EntryForm::new(date());
        form.open_create();
        form.search_food(&api, "rice").await;
        form.select_food(Some(&catalog()[0]));
        form.set_quantity("150");

        let created = form.submit(&api).await.expect("entry created");

        assert_eq!(created.food_id, 1);
        assert_eq!(created.quantity, 150);
        assert_eq!(
            api.calls().last(),
            Some(&Call::Create(EntryPayload {
                food_id: 1,
                quantity: 150,
                timestamp: "2024-10-08T00:00:00.000Z".to_string(),
            }))
        );
        assert!(!form.is_open());
        assert_eq!(form.message(), &SnackbarMessage::success(CREATED_MESSAGE));
        assert_eq!(form.quantity(), "");
    }

    #[tokio::test]
    async fn test_update_keeps_original_timestamp() {
        let api = FakeApi::new();
        let item = entry(7, 40, 250);
        let mut form = EntryForm::new(date());
        form.open_edit(&item);
        form.set_quantity("300");

        let updated = form.submit(&api).await.expect("entry updated");

        assert_eq!(updated.id, 7);
        assert_eq!(
            api.calls(),
            vec![Call::Update(
                7,
                EntryPayload {
                    food_id: 40,
                    quantity: 300,
                    timestamp: "2024-10-08T21:00:00-03:00".to_string(),
                }
            )]
        );
        assert_eq!(form.message().text, UPDATED_MESSAGE);
        assert!(!form.is_open());
    }

    #[tokio::test]
    async fn test_create_failure_keeps_dialog_open() {
        let api = FakeApi::failing().with_foods(catalog());
        let mut form = EntryForm::new(date());
        form.open_create();
        let request = form.begin_search("rice");
        form.finish_search(&request, Ok(catalog()));
        form.select_food(Some(&catalog()[0]));
        form.set_quantity("80");

        assert!(form.submit(&api).await.is_none());
        assert!(form.is_open());
        assert_eq!(form.quantity(), "80");
        assert_eq!(form.message().text, CREATE_FAILED_MESSAGE);
        assert_eq!(form.message().severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_update_failure_message() {
        let api = FakeApi::failing();
        let mut form = EntryForm::new(date());
        form.open_edit(&entry(7, 40, 250));

        assert!(form.submit(&api).await.is_none());
        assert_eq!(form.message(), &SnackbarMessage::error(UPDATE_FAILED_MESSAGE));
        assert!(form.is_open());
    }
}
