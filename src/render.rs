//! Text presentation of the two views. Pure functions from view state to
//! display strings; nothing here mutates state or talks to the network.

use std::fmt::Write;

use crate::detail::DetailView;
use crate::model::RecipeDetail;
use crate::search::SearchView;

/// Render the recipe list page: a loading indicator while a fetch is in
/// flight, an empty-state message when there is nothing to show, otherwise
/// the summaries in API order plus the pagination controls.
pub fn render_search(view: &SearchView) -> String {
    if view.loading() {
        return "Loading Recipes...".to_string();
    }
    if view.recipes().is_empty() {
        return "Search for delicious recipes!\n\
                Sorry, no match found with the searched keyword"
            .to_string();
    }

    let mut out = String::new();
    for tag in [view.cuisine(), view.query()] {
        if !tag.is_empty() {
            let _ = write!(out, "[{}] ", tag);
        }
    }
    if !out.is_empty() {
        out.push('\n');
    }

    for recipe in view.recipes() {
        let _ = writeln!(out, "{:>8}  {}", recipe.id, recipe.title);
    }

    let _ = write!(
        out,
        "\n{}  Page {}  {}",
        control("Previous", view.has_previous()),
        view.page(),
        control("Next", view.has_next()),
    );
    out
}

/// Render the detail page for whatever record the view currently holds.
pub fn render_detail(view: &DetailView) -> String {
    if view.loading() {
        return "Loading Recipe..".to_string();
    }
    match view.recipe() {
        Some(recipe) => render_recipe(recipe),
        None => "No recipe loaded. Use `open <id>` from the recipe list.".to_string(),
    }
}

fn render_recipe(recipe: &RecipeDetail) -> String {
    let mut out = String::new();

    if !recipe.dish_types.is_empty() {
        let _ = writeln!(out, "{}", tag_line(&recipe.dish_types));
    }
    let _ = writeln!(out, "{}", recipe.title);
    if !recipe.image.is_empty() {
        let _ = writeln!(out, "{}", recipe.image);
    }

    let mut metadata = Vec::new();
    if let Some(minutes) = recipe.ready_in_minutes {
        metadata.push(format_metadata("readyInMinutes", minutes));
    }
    if let Some(servings) = recipe.servings {
        metadata.push(format_metadata("servings", servings));
    }
    if !metadata.is_empty() {
        let _ = writeln!(out, "{}", metadata.join("    "));
    }
    if !recipe.diets.is_empty() {
        let _ = writeln!(out, "Important Tags: {}", tag_line(&recipe.diets));
    }

    if !recipe.summary.is_empty() {
        let _ = writeln!(out, "\n{}", render_summary(&recipe.summary));
    }

    if !recipe.extended_ingredients.is_empty() {
        let _ = writeln!(out, "\nIngredients");
        for ingredient in &recipe.extended_ingredients {
            let _ = writeln!(out, "- {}", ingredient.original);
        }
    }

    let _ = writeln!(out, "\nInstructions");
    for step in recipe.flattened_steps() {
        let _ = writeln!(out, "{:>3}. {}", step.number, step.step);
    }
    out
}

/// Format a metadata field for display: a space goes before each internal
/// capital of the field name, the name is uppercased, and fields named with
/// `Minutes` carry a `min` unit suffix. `readyInMinutes` with value 45
/// becomes `READY IN MINUTES: 45 min`.
pub fn format_metadata(name: &str, value: u32) -> String {
    let unit = if name.contains("Minutes") { " min" } else { "" };
    format!("{}: {}{}", format_metadata_label(name), value, unit)
}

fn format_metadata_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.chars() {
        if prev_lower && ch.is_uppercase() {
            label.push(' ');
        }
        prev_lower = ch.is_lowercase();
        label.push(ch);
    }
    label.to_uppercase()
}

/// The API serves the summary as an HTML fragment. The model keeps the raw
/// string; this strips the tags and decodes entities for terminal display.
pub fn render_summary(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut in_tag = false;
    for ch in raw.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    html_escape::decode_html_entities(&text).into_owned()
}

fn tag_line(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("[{}]", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pagination controls render differently when disabled so the two states
/// are distinguishable: `[Next]` is interactive, `(Next)` is not.
fn control(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{}]", label)
    } else {
        format!("({})", label)
    }
}
