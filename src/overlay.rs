use crate::constants::{LOADER_LINE_SELECTOR, LOADING_CLASS, PRELOADER_SELECTOR};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.class_list().add_1(LOADING_CLASS);
    }
    if let Some(el) = dom::query(document, PRELOADER_SELECTOR) {
        _ = el.style().set_property("transform", "translateY(0)");
    }
    if let Some(line) = dom::query(document, LOADER_LINE_SELECTOR) {
        _ = line.style().set_property("width", "0%");
    }
}

/// Slide the intro overlay out and fill the loader line.
#[inline]
pub fn hide(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.class_list().remove_1(LOADING_CLASS);
    }
    if let Some(el) = dom::query(document, PRELOADER_SELECTOR) {
        _ = el.style().set_property("transform", "translateY(-100%)");
    }
    if let Some(line) = dom::query(document, LOADER_LINE_SELECTOR) {
        _ = line.style().set_property("width", "100%");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .body()
        .map(|b| !b.class_list().contains(LOADING_CLASS))
        .unwrap_or(true)
}
