//! Plain-text rendering of the view model. Everything here is presentation;
//! the core never depends on it.

use url::Url;

use recetario_core::{AppViewModel, CollectionView, RequestState};
use recetario_engine::pdf_download_url;

pub fn render(view: &AppViewModel, base_url: &Url) {
    println!();
    println!("== Recetas ==");
    render_section(&view.recipes, |recipe| {
        println!(
            "  [{}] {} ({} ingredientes)",
            recipe.category,
            recipe.title,
            recipe.ingredients.len()
        );
    });

    println!("== Recetas en PDF ==");
    render_section(&view.pdfs, |pdf| {
        let link = pdf_download_url(base_url, pdf.id)
            .map(|url| url.to_string())
            .unwrap_or_default();
        match pdf.description.as_deref() {
            Some(description) if !description.is_empty() => {
                println!("  {} — {} [{link}]", pdf.title, description)
            }
            _ => println!("  {} [{link}]", pdf.title),
        }
    });

    println!(
        "Borrador: título={:?} descripción={:?} archivo={}",
        view.draft.title,
        view.draft.description,
        view.draft
            .file
            .as_ref()
            .map(|f| f.name.as_str())
            .unwrap_or("(ninguno)")
    );
    match &view.upload {
        RequestState::InFlight => println!("Subiendo..."),
        RequestState::Failed(reason) => println!("Error: {reason}"),
        RequestState::Idle | RequestState::Succeeded => {}
    }
    if let Some(notice) = &view.notice {
        println!("* {notice}");
    }
}

/// A failed reload keeps showing the last committed items; the error is an
/// extra line, never a replacement for the list.
fn render_section<T>(collection: &CollectionView<T>, mut row: impl FnMut(&T)) {
    if collection.initial_load {
        println!("  cargando...");
        return;
    }
    if let Some(error) = &collection.error {
        println!("  (error: {error})");
    }
    if collection.items.is_empty() {
        println!("  (vacío)");
        return;
    }
    for item in &collection.items {
        row(item);
    }
}

pub fn print_help() {
    println!("comandos: list | refresh | title <texto> | desc <texto> | file <ruta> | submit | quit");
}
