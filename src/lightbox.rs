//! Modal viewer for one project.

use crate::core::Project;
use crate::dom::{self, Listener};
use crate::events::{handle_lightbox_keydown, LightboxKey};
use crate::widget::{Action, Dispatch};
use web_sys as web;

/// An open lightbox. Dropping it closes the dialog: the DOM is removed,
/// page scrolling is restored and focus returns to where it was.
pub struct Lightbox {
    backdrop: web::HtmlElement,
    restore_focus: Option<web::HtmlElement>,
    prev_overflow: String,
    _listeners: Vec<Listener>,
}

impl Lightbox {
    pub fn open(
        document: &web::Document,
        project: &Project,
        reduced_motion: bool,
        dispatch: &Dispatch,
    ) -> anyhow::Result<Self> {
        let restore_focus = dom::active_html_element(document);
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no document body"))?;

        let motion = if reduced_motion { " no-motion" } else { "" };
        let backdrop = dom::el(document, "div", &format!("lightbox-backdrop{}", motion))?;
        dom::set_attrs(&backdrop, &[("data-testid", "lightbox")]);

        let dialog = dom::el(document, "div", &format!("lightbox-dialog{}", motion))?;
        dom::set_attrs(
            &dialog,
            &[
                ("role", "dialog"),
                ("aria-modal", "true"),
                ("aria-labelledby", "lightbox-title"),
                ("aria-describedby", "lightbox-desc"),
            ],
        );

        let close = dom::el(document, "button", "lightbox-close")?;
        dom::set_attrs(
            &close,
            &[
                ("type", "button"),
                ("data-testid", "lightbox-close"),
                ("aria-label", "Close dialog (Escape key)"),
            ],
        );
        close.set_text_content(Some("✕"));
        dom::append(&dialog, &close)?;

        let title = dom::el(document, "h2", "sr-only")?;
        dom::set_attrs(&title, &[("id", "lightbox-title")]);
        title.set_text_content(Some(project.title.as_str()));
        dom::append(&dialog, &title)?;

        let desc = dom::el(document, "div", "sr-only")?;
        dom::set_attrs(&desc, &[("id", "lightbox-desc")]);
        let desc_text = format!("Project preview image for {}", project.title);
        desc.set_text_content(Some(desc_text.as_str()));
        dom::append(&dialog, &desc)?;

        let img = dom::el(document, "img", "lightbox-image")?;
        dom::set_attrs(
            &img,
            &[
                ("src", project.thumb_src.as_str()),
                ("alt", project.alt_text()),
                ("loading", "eager"),
            ],
        );
        dom::append(&dialog, &img)?;

        let caption = dom::el(document, "div", "lightbox-caption")?;
        let heading = dom::el(document, "h3", "")?;
        heading.set_text_content(Some(project.title.as_str()));
        dom::append(&caption, &heading)?;
        let link = dom::el(document, "a", "lightbox-link")?;
        dom::set_attrs(&link, &[("href", project.href.as_str()), ("rel", "noopener noreferrer")]);
        link.set_text_content(Some("View Project →"));
        dom::append(&caption, &link)?;
        dom::append(&dialog, &caption)?;

        dom::append(&backdrop, &dialog)?;
        dom::append(&body, &backdrop)?;

        let prev_overflow = body.style().get_property_value("overflow").unwrap_or_default();
        dom::set_style(&body, "overflow", "hidden");

        let mut listeners = Vec::with_capacity(3);
        {
            let d = dispatch.clone();
            listeners.push(Listener::new(&close, "click", move |_: web::MouseEvent| {
                d(Action::Close)
            }));
        }
        {
            let d = dispatch.clone();
            let backdrop_target: web::EventTarget = backdrop.clone().into();
            listeners.push(Listener::new(&backdrop, "click", move |ev: web::MouseEvent| {
                // only clicks on the backdrop itself, not bubbled from the dialog
                if ev.target().as_ref() == Some(&backdrop_target) {
                    d(Action::Close);
                }
            }));
        }
        {
            let d = dispatch.clone();
            let doc = document.clone();
            let dialog_el: web::Element = dialog.clone().into();
            listeners.push(Listener::new(document, "keydown", move |ev: web::KeyboardEvent| {
                if handle_lightbox_keydown(&ev, &doc, &dialog_el) == LightboxKey::Close {
                    ev.prevent_default();
                    d(Action::Close);
                }
            }));
        }

        _ = close.focus();
        log::info!("[lightbox] opened {}", project.title);

        Ok(Self {
            backdrop,
            restore_focus,
            prev_overflow,
            _listeners: listeners,
        })
    }
}

impl Drop for Lightbox {
    fn drop(&mut self) {
        self.backdrop.remove();
        if let Some(body) = dom::window_document().and_then(|d| d.body()) {
            if self.prev_overflow.is_empty() {
                dom::clear_style(&body, "overflow");
            } else {
                dom::set_style(&body, "overflow", &self.prev_overflow);
            }
        }
        if let Some(el) = self.restore_focus.take() {
            if el.is_connected() {
                _ = el.focus();
            }
        }
        log::info!("[lightbox] closed");
    }
}
