use dioxus::prelude::*;

use api::Ingredient;

use crate::components::{Alert, Button, ButtonVariant, Input, Label, Modal, Spinner};
use crate::flows::ingredients::{
    create_ingredient, delete_ingredient, delete_prompt, fetch_ingredients, AddIngredientForm,
    IngredientsPage, ListPresentation,
};
use crate::use_api;

use super::VIEWS_CSS;

/// Pantry inventory: list, add and delete ingredients.
#[component]
pub fn IngredientsView(on_back: EventHandler<()>) -> Element {
    let client = use_api();
    let pantry = use_hook(|| client.ingredients());

    let mut page = use_signal(IngredientsPage::default);
    let mut add = use_signal(AddIngredientForm::default);
    let mut pending_delete = use_signal(|| Option::<Ingredient>::None);

    let loader_pantry = pantry.clone();
    let _loader = use_resource(move || {
        let pantry = loader_pantry.clone();
        async move {
            page.write().begin_load();
            let result = fetch_ingredients(&pantry).await;
            page.write().apply_fetch(result);
        }
    });

    let create_pantry = pantry.clone();
    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(draft) = add.write().begin_submit() else {
            return;
        };
        let pantry = create_pantry.clone();
        spawn(async move {
            let mutation = create_ingredient(&pantry, &draft).await;
            let refetch = add.write().finish(mutation);
            if let Some(refetch) = refetch {
                page.write().apply_fetch(refetch);
            }
        });
    };

    // Both buttons of the confirmation modal go through the flow; only a
    // confirmed request reaches the server, and only one at a time.
    let resolve_delete = use_callback(move |confirmed: bool| {
        let Some(ingredient) = pending_delete() else {
            return;
        };
        if confirmed && !page.write().begin_delete() {
            return;
        }
        pending_delete.set(None);
        let pantry = pantry.clone();
        spawn(async move {
            let mutation = delete_ingredient(&pantry, &ingredient, confirmed).await;
            if confirmed {
                page.write().finish_delete(mutation);
            } else {
                page.write().apply_mutation(mutation);
            }
        });
    });

    let state = page();
    let dialog = add();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            header {
                class: "app-header",
                div {
                    class: "app-header-inner",
                    div {
                        class: "header-left",
                        Button {
                            variant: ButtonVariant::Link,
                            onclick: move |_| on_back.call(()),
                            "← Back"
                        }
                        h1 { class: "page-title", "Ingredients" }
                    }
                    Button {
                        onclick: move |_| add.write().show(),
                        "+ Add Ingredient"
                    }
                }
            }

            main {
                class: "app-main",
                if let Some(error) = state.error.clone() {
                    div { class: "mb-4", Alert { message: error } }
                }

                {match state.presentation() {
                    ListPresentation::Loading => rsx! {
                        Spinner {}
                    },
                    ListPresentation::Empty => rsx! {
                        div {
                            class: "empty-state",
                            div { class: "empty-icon", "🥕" }
                            h3 { class: "feature-title", "No ingredients yet" }
                            p { class: "muted mb-4", "Get started by adding your first ingredient" }
                            Button {
                                onclick: move |_| add.write().show(),
                                "Add Your First Ingredient"
                            }
                        }
                    },
                    ListPresentation::Grid(items) => rsx! {
                        div {
                            class: "card-grid",
                            for ingredient in items.iter() {
                                IngredientCard {
                                    key: "{ingredient.id}",
                                    ingredient: ingredient.clone(),
                                    deleting: state.deleting,
                                    on_delete: move |ingredient| pending_delete.set(Some(ingredient)),
                                }
                            }
                        }
                    },
                }}
            }

            Modal {
                open: dialog.open,
                title: "Add New Ingredient",
                on_close: move |_| add.write().hide(),
                form {
                    class: "stack",
                    onsubmit: handle_create,

                    if let Some(error) = dialog.error.clone() {
                        Alert { message: error }
                    }

                    div {
                        Label {
                            html_for: "ingredient-name",
                            "Name "
                            span { class: "required", "*" }
                        }
                        Input {
                            id: "ingredient-name",
                            required: true,
                            value: dialog.draft.name.clone(),
                            placeholder: "e.g., Tomato",
                            oninput: move |evt: FormEvent| add.write().draft.name = evt.value(),
                        }
                    }
                    div {
                        Label { html_for: "ingredient-category", "Category" }
                        Input {
                            id: "ingredient-category",
                            value: dialog.draft.category.clone(),
                            placeholder: "e.g., Vegetable",
                            oninput: move |evt: FormEvent| add.write().draft.category = evt.value(),
                        }
                    }
                    div {
                        Label { html_for: "ingredient-unit", "Unit" }
                        Input {
                            id: "ingredient-unit",
                            value: dialog.draft.unit.clone(),
                            placeholder: "e.g., kg, pieces, cups",
                            oninput: move |evt: FormEvent| add.write().draft.unit = evt.value(),
                        }
                    }
                    div {
                        Label { html_for: "ingredient-calories", "Calories per Unit" }
                        Input {
                            id: "ingredient-calories",
                            input_type: "number",
                            step: "0.01".to_string(),
                            value: dialog.draft.calories_per_unit.clone(),
                            placeholder: "e.g., 18.0",
                            oninput: move |evt: FormEvent| add.write().draft.calories_per_unit = evt.value(),
                        }
                    }

                    div {
                        class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: dialog.submitting,
                            onclick: move |_| add.write().hide(),
                            "Cancel"
                        }
                        Button {
                            button_type: "submit",
                            disabled: dialog.submitting,
                            if dialog.submitting { "Adding..." } else { "Add Ingredient" }
                        }
                    }
                }
            }

            Modal {
                open: pending_delete().is_some(),
                title: "Delete Ingredient",
                on_close: move |_| resolve_delete.call(false),
                if let Some(ingredient) = pending_delete() {
                    p { class: "muted mb-4", {delete_prompt(&ingredient.name)} }
                }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| resolve_delete.call(false),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        disabled: state.deleting,
                        onclick: move |_| resolve_delete.call(true),
                        if state.deleting { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}

#[component]
fn IngredientCard(
    ingredient: Ingredient,
    /// Another delete is in flight.
    deleting: bool,
    on_delete: EventHandler<Ingredient>,
) -> Element {
    let to_delete = ingredient.clone();
    let unit_label = ingredient.unit.clone().unwrap_or_else(|| "unit".to_string());

    rsx! {
        div {
            class: "card ingredient-card",
            div {
                class: "ingredient-head",
                h3 { class: "feature-title", "{ingredient.name}" }
                Button {
                    variant: ButtonVariant::Link,
                    class: "danger-link",
                    disabled: deleting,
                    onclick: move |_| on_delete.call(to_delete.clone()),
                    "Delete"
                }
            }
            if let Some(category) = &ingredient.category {
                span { class: "category-badge", "{category}" }
            }
            div {
                class: "ingredient-facts",
                if let Some(unit) = &ingredient.unit {
                    p {
                        span { class: "font-medium", "Unit: " }
                        "{unit}"
                    }
                }
                if let Some(calories) = ingredient.calories_per_unit {
                    p {
                        span { class: "font-medium", "Calories: " }
                        "{calories} per {unit_label}"
                    }
                }
            }
        }
    }
}
