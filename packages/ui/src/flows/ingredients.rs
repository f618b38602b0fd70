//! Pantry list: fetch, add, delete.
//!
//! Every successful mutation is followed by a full refetch. There is no
//! optimistic update and no local patching of the list.

use api::{Ingredient, NewIngredient};

use super::IngredientGateway;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch ingredients";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to add ingredient";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete ingredient";

/// Raw text of the "Add Ingredient" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientDraft {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub calories_per_unit: String,
}

impl IngredientDraft {
    /// Build the create request. Blank optional fields become `None`.
    pub fn to_new_ingredient(&self) -> Result<NewIngredient, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }

        let calories_per_unit = match self.calories_per_unit.trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
                _ => return Err("Calories per unit must be a non-negative number".to_string()),
            },
        };

        Ok(NewIngredient {
            category: blank_to_none(&self.category),
            unit: blank_to_none(&self.unit),
            calories_per_unit,
            ..NewIngredient::named(name)
        })
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// What the list area should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListPresentation<'a> {
    Loading,
    /// No ingredients yet: show the "add your first" prompt.
    Empty,
    Grid(&'a [Ingredient]),
}

/// Outcome of a create or delete.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// The user backed out; nothing was sent.
    Cancelled,
    /// Validation or the server refused. The list is untouched.
    Rejected(String),
    /// The server accepted; `refetch` is the reloaded list.
    Applied {
        refetch: Result<Vec<Ingredient>, String>,
    },
}

/// State of the "Add Ingredient" dialog.
///
/// Keeps its own error so failures from the page (fetch, delete) never show
/// up inside the dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddIngredientForm {
    pub draft: IngredientDraft,
    pub open: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl AddIngredientForm {
    pub fn show(&mut self) {
        self.open = true;
        self.error = None;
    }

    /// Close the dialog. The draft is kept for the next opening.
    pub fn hide(&mut self) {
        self.open = false;
        self.error = None;
    }

    /// Start a submission. Returns `None` while one is already in flight.
    pub fn begin_submit(&mut self) -> Option<IngredientDraft> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(self.draft.clone())
    }

    /// Record the outcome of a create.
    ///
    /// On success the dialog closes and resets, and the reloaded list is
    /// returned for the page.
    pub fn finish(&mut self, mutation: Mutation) -> Option<Result<Vec<Ingredient>, String>> {
        self.submitting = false;
        match mutation {
            Mutation::Applied { refetch } => {
                *self = Self::default();
                Some(refetch)
            }
            Mutation::Rejected(message) => {
                self.error = Some(message);
                None
            }
            Mutation::Cancelled => None,
        }
    }
}

/// Local state of the ingredients page.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientsPage {
    pub items: Vec<Ingredient>,
    pub loading: bool,
    pub error: Option<String>,
    /// A delete and its refetch are in flight.
    pub deleting: bool,
}

impl Default for IngredientsPage {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            deleting: false,
        }
    }
}

impl IngredientsPage {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_fetch(&mut self, result: Result<Vec<Ingredient>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Claim the single delete slot. Returns `false` if a delete is already
    /// running, in which case nothing may be sent.
    pub fn begin_delete(&mut self) -> bool {
        if self.deleting {
            return false;
        }
        self.deleting = true;
        true
    }

    /// Release the delete slot and fold in the outcome.
    pub fn finish_delete(&mut self, mutation: Mutation) -> bool {
        self.deleting = false;
        self.apply_mutation(mutation)
    }

    /// Fold a mutation into the page. Returns `true` if the server accepted it.
    pub fn apply_mutation(&mut self, mutation: Mutation) -> bool {
        match mutation {
            Mutation::Cancelled => false,
            Mutation::Rejected(message) => {
                self.error = Some(message);
                false
            }
            Mutation::Applied { refetch } => {
                self.apply_fetch(refetch);
                true
            }
        }
    }

    pub fn presentation(&self) -> ListPresentation<'_> {
        if self.loading {
            ListPresentation::Loading
        } else if self.items.is_empty() {
            ListPresentation::Empty
        } else {
            ListPresentation::Grid(&self.items)
        }
    }
}

/// Text of the delete confirmation.
pub fn delete_prompt(name: &str) -> String {
    format!("Are you sure you want to delete \"{name}\"?")
}

pub async fn fetch_ingredients<G: IngredientGateway>(
    gateway: &G,
) -> Result<Vec<Ingredient>, String> {
    gateway.list().await.map_err(|e| {
        tracing::warn!("fetching ingredients failed: {}", e);
        e.message_or(FETCH_FAILED_MESSAGE).to_string()
    })
}

/// Validate and create an ingredient, then refetch the list.
pub async fn create_ingredient<G: IngredientGateway>(
    gateway: &G,
    draft: &IngredientDraft,
) -> Mutation {
    let ingredient = match draft.to_new_ingredient() {
        Ok(ingredient) => ingredient,
        Err(message) => return Mutation::Rejected(message),
    };

    match gateway.create(&ingredient).await {
        Ok(created) => {
            tracing::info!("added ingredient {}", created.name);
            Mutation::Applied {
                refetch: fetch_ingredients(gateway).await,
            }
        }
        Err(e) => {
            tracing::warn!("adding ingredient failed: {}", e);
            Mutation::Rejected(e.message_or(CREATE_FAILED_MESSAGE).to_string())
        }
    }
}

/// Delete an ingredient the user has confirmed, then refetch the list.
///
/// Without confirmation nothing is sent.
pub async fn delete_ingredient<G: IngredientGateway>(
    gateway: &G,
    ingredient: &Ingredient,
    confirmed: bool,
) -> Mutation {
    if !confirmed {
        return Mutation::Cancelled;
    }

    match gateway.delete(&ingredient.id).await {
        Ok(()) => {
            tracing::info!("deleted ingredient {}", ingredient.name);
            Mutation::Applied {
                refetch: fetch_ingredients(gateway).await,
            }
        }
        Err(e) => {
            tracing::warn!("deleting ingredient failed: {}", e);
            Mutation::Rejected(e.message_or(DELETE_FAILED_MESSAGE).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::ApiError;
    use serde_json::Map;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Create(NewIngredient),
        Delete(String),
    }

    #[derive(Default)]
    struct FakePantry {
        calls: RefCell<Vec<Call>>,
        items: RefCell<Vec<Ingredient>>,
        fail_create: Option<ApiError>,
    }

    impl IngredientGateway for FakePantry {
        async fn list(&self) -> Result<Vec<Ingredient>, ApiError> {
            self.calls.borrow_mut().push(Call::List);
            Ok(self.items.borrow().clone())
        }

        async fn create(&self, ingredient: &NewIngredient) -> Result<Ingredient, ApiError> {
            self.calls.borrow_mut().push(Call::Create(ingredient.clone()));
            if let Some(e) = &self.fail_create {
                return Err(e.clone());
            }
            let created = ingredient_named(&ingredient.name);
            self.items.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn delete(&self, id: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Delete(id.to_string()));
            self.items.borrow_mut().retain(|i| i.id != id);
            Ok(())
        }
    }

    fn ingredient_named(name: &str) -> Ingredient {
        Ingredient {
            id: format!("id-{}", name.to_lowercase()),
            name: name.to_string(),
            category: None,
            unit: None,
            calories_per_unit: None,
            additional_data: Map::new(),
            created_at: None,
            updated_at: None,
        }
    }

    fn draft(name: &str, category: &str, unit: &str, calories: &str) -> IngredientDraft {
        IngredientDraft {
            name: name.to_string(),
            category: category.to_string(),
            unit: unit.to_string(),
            calories_per_unit: calories.to_string(),
        }
    }

    #[test]
    fn test_empty_optionals_become_null() {
        let request = draft("Tomato", "", "", "").to_new_ingredient().unwrap();
        assert_eq!(request, NewIngredient::named("Tomato"));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "name": "Tomato",
                "category": null,
                "unit": null,
                "calories_per_unit": null,
                "additional_data": {}
            })
        );
    }

    #[test]
    fn test_filled_draft_parses_calories() {
        let request = draft("Tomato", "Vegetable", "kg", "18.5")
            .to_new_ingredient()
            .unwrap();
        assert_eq!(request.category.as_deref(), Some("Vegetable"));
        assert_eq!(request.unit.as_deref(), Some("kg"));
        assert_eq!(request.calories_per_unit, Some(18.5));
    }

    #[test]
    fn test_draft_validation() {
        assert!(draft("  ", "", "", "").to_new_ingredient().is_err());
        assert!(draft("Salt", "", "", "-1").to_new_ingredient().is_err());
        assert!(draft("Salt", "", "", "lots").to_new_ingredient().is_err());
        assert!(draft("Salt", "", "", "NaN").to_new_ingredient().is_err());
        assert!(draft("Salt", "", "", "0").to_new_ingredient().is_ok());
    }

    #[test]
    fn test_presentation_states() {
        let mut page = IngredientsPage::default();
        assert_eq!(page.presentation(), ListPresentation::Loading);

        page.apply_fetch(Ok(Vec::new()));
        assert_eq!(page.presentation(), ListPresentation::Empty);

        let items = vec![ingredient_named("Basil")];
        page.apply_fetch(Ok(items.clone()));
        assert_eq!(page.presentation(), ListPresentation::Grid(&items));
    }

    #[test]
    fn test_fetch_error_keeps_previous_items() {
        let mut page = IngredientsPage::default();
        page.apply_fetch(Ok(vec![ingredient_named("Basil")]));
        page.begin_load();
        page.apply_fetch(Err(FETCH_FAILED_MESSAGE.to_string()));

        assert!(!page.loading);
        assert_eq!(page.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_create_refetches_full_list() {
        let pantry = FakePantry::default();

        let mutation = create_ingredient(&pantry, &draft("Tomato", "", "", "")).await;
        let mut page = IngredientsPage::default();
        assert!(page.apply_mutation(mutation));

        assert_eq!(
            *pantry.calls.borrow(),
            vec![Call::Create(NewIngredient::named("Tomato")), Call::List]
        );
        assert_eq!(page.items, vec![ingredient_named("Tomato")]);
    }

    #[tokio::test]
    async fn test_invalid_draft_sends_nothing() {
        let pantry = FakePantry::default();

        let mutation = create_ingredient(&pantry, &draft("", "", "", "")).await;
        assert_eq!(mutation, Mutation::Rejected("Name is required".to_string()));
        assert!(pantry.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_create_does_not_refetch() {
        let pantry = FakePantry {
            fail_create: Some(ApiError::new(
                "Ingredient with name 'Tomato' already exists",
                Some(400),
            )),
            ..Default::default()
        };

        let mutation = create_ingredient(&pantry, &draft("Tomato", "", "", "")).await;
        let mut page = IngredientsPage::default();
        page.apply_fetch(Ok(Vec::new()));
        assert!(!page.apply_mutation(mutation));
        assert_eq!(
            page.error.as_deref(),
            Some("Ingredient with name 'Tomato' already exists")
        );
        assert_eq!(pantry.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let pantry = FakePantry::default();
        pantry.items.borrow_mut().push(ingredient_named("Basil"));
        let basil = ingredient_named("Basil");

        let declined = delete_ingredient(&pantry, &basil, false).await;
        assert_eq!(declined, Mutation::Cancelled);
        assert!(pantry.calls.borrow().is_empty());

        let confirmed = delete_ingredient(&pantry, &basil, true).await;
        assert_eq!(confirmed, Mutation::Applied { refetch: Ok(Vec::new()) });
        assert_eq!(
            *pantry.calls.borrow(),
            vec![Call::Delete("id-basil".to_string()), Call::List]
        );
    }

    #[tokio::test]
    async fn test_overlapping_deletes_send_one_request() {
        let pantry = FakePantry::default();
        pantry.items.borrow_mut().push(ingredient_named("Basil"));
        pantry.items.borrow_mut().push(ingredient_named("Thyme"));
        let mut page = IngredientsPage::default();
        page.apply_fetch(Ok(pantry.items.borrow().clone()));

        assert!(page.begin_delete());
        let basil = ingredient_named("Basil");
        let first = delete_ingredient(&pantry, &basil, true);

        // Second confirmation while the first is still pending.
        assert!(!page.begin_delete());

        let refetched = page.finish_delete(first.await);
        assert!(refetched);
        assert!(!page.deleting);
        assert_eq!(
            *pantry.calls.borrow(),
            vec![Call::Delete("id-basil".to_string()), Call::List]
        );
        assert_eq!(page.items, vec![ingredient_named("Thyme")]);

        assert!(page.begin_delete());
    }

    #[test]
    fn test_failed_delete_releases_slot() {
        let mut page = IngredientsPage::default();
        page.apply_fetch(Ok(Vec::new()));
        assert!(page.begin_delete());

        assert!(!page.finish_delete(Mutation::Rejected(DELETE_FAILED_MESSAGE.to_string())));
        assert!(!page.deleting);
        assert_eq!(page.error.as_deref(), Some(DELETE_FAILED_MESSAGE));
    }

    #[test]
    fn test_page_errors_stay_out_of_add_dialog() {
        let mut page = IngredientsPage::default();
        page.apply_fetch(Err(FETCH_FAILED_MESSAGE.to_string()));

        let mut form = AddIngredientForm::default();
        form.show();
        assert!(form.open);
        assert_eq!(form.error, None);
        assert_eq!(page.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
    }

    #[test]
    fn test_add_dialog_rejection_stays_in_dialog() {
        let mut form = AddIngredientForm::default();
        form.show();
        form.draft.name = "Tomato".to_string();

        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());

        let refetch = form.finish(Mutation::Rejected("Name is required".to_string()));
        assert_eq!(refetch, None);
        assert!(form.open);
        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("Name is required"));
        assert_eq!(form.draft.name, "Tomato");

        // Reopening starts clean.
        form.hide();
        form.show();
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_add_dialog_success_resets() {
        let mut form = AddIngredientForm::default();
        form.show();
        form.draft.name = "Tomato".to_string();
        form.begin_submit();

        let refetch = form.finish(Mutation::Applied {
            refetch: Ok(vec![ingredient_named("Tomato")]),
        });
        assert_eq!(refetch, Some(Ok(vec![ingredient_named("Tomato")])));
        assert_eq!(form, AddIngredientForm::default());
    }

    #[test]
    fn test_delete_prompt_names_ingredient() {
        assert_eq!(
            delete_prompt("Basil"),
            "Are you sure you want to delete \"Basil\"?"
        );
    }
}
