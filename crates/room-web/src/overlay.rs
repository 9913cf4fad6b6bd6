use crate::constants::{
    HERO_DELAY_MS, HERO_FADE_MS, HERO_PLACEHOLDER_ID, LOADER_BAR_FILL_ID, LOADER_COMPLETE_EVENT,
    LOADER_FADE_MS, LOADER_ID, LOADER_LOGO_ID, LOADER_PCT_ID, LOADER_TAGLINE_ID,
};
use crate::dom;
use crate::layout;
use web_sys as web;

/// Optional DOM pieces around the loader canvas. Every element may be missing;
/// updates to a missing element are skipped.
pub struct LoaderOverlay {
    document: web::Document,
    root: Option<web::HtmlElement>,
    bar_fill: Option<web::HtmlElement>,
    pct: Option<web::HtmlElement>,
    logo: Option<web::HtmlElement>,
    tagline: Option<web::HtmlElement>,
    hero: Option<web::HtmlElement>,
    last_percent: Option<u32>,
}

impl LoaderOverlay {
    pub fn from_document(document: &web::Document) -> Self {
        let find = |id| dom::html_element_by_id(document, id);
        Self {
            document: document.clone(),
            root: find(LOADER_ID),
            bar_fill: find(LOADER_BAR_FILL_ID),
            pct: find(LOADER_PCT_ID),
            logo: find(LOADER_LOGO_ID),
            tagline: find(LOADER_TAGLINE_ID),
            hero: find(HERO_PLACEHOLDER_ID),
            last_percent: None,
        }
    }

    /// Bar width, percentage text and cue opacities for one frame.
    pub fn update(&mut self, progress: f32, logo_opacity: f32, tagline_opacity: f32) {
        let percent = layout::percent(progress);
        if self.last_percent != Some(percent) {
            self.last_percent = Some(percent);
            let label = layout::percent_label(progress);
            if let Some(bar) = &self.bar_fill {
                dom::set_style(bar, "width", &label);
            }
            if let Some(pct) = &self.pct {
                pct.set_text_content(Some(&label));
            }
        }
        if let Some(logo) = &self.logo {
            dom::set_style(logo, "opacity", &format!("{:.3}", logo_opacity));
        }
        if let Some(tagline) = &self.tagline {
            dom::set_style(tagline, "opacity", &format!("{:.3}", tagline_opacity));
        }
    }

    /// Fade the overlay out, reveal the hero and announce completion.
    pub fn finish(&self) {
        if let Some(root) = &self.root {
            dom::set_style(
                root,
                "transition",
                &format!("opacity {}ms ease-in-out", LOADER_FADE_MS),
            );
            dom::set_style(root, "opacity", "0");
            let root = root.clone();
            dom::after(LOADER_FADE_MS, move || {
                dom::set_style(&root, "display", "none");
            });
        }
        if let Some(hero) = &self.hero {
            dom::set_style(
                hero,
                "transition",
                &format!("opacity {}ms ease-out {}ms", HERO_FADE_MS, HERO_DELAY_MS),
            );
            dom::set_style(hero, "opacity", "1");
        }
        dom::dispatch(&self.document, LOADER_COMPLETE_EVENT, false);
        log::info!("[loader] overlay dismissed");
    }

    /// Without a loader canvas the page is shown immediately.
    pub fn skip(&self) {
        if let Some(root) = &self.root {
            dom::set_style(root, "display", "none");
        }
        if let Some(hero) = &self.hero {
            dom::set_style(hero, "opacity", "1");
        }
        dom::dispatch(&self.document, LOADER_COMPLETE_EVENT, false);
    }
}
