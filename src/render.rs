//! DOM construction for the widget shell and both views.

use crate::core::{layout, EffectiveFx, LabState, Project, TileHint, ViewMode};
use crate::dom::{self, Listener};
use crate::events::{self, InputWiring};
use crate::frame::Clock;
use crate::widget::{Action, Dispatch};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const SKIP_TARGET_ID: &str = "lab-after-carousel";

/// Section, view toggle and the slot the current view is rendered into.
pub struct Shell {
    pub section: web::HtmlElement,
    toggle: web::HtmlElement,
    stage: web::HtmlElement,
    _listeners: Vec<Listener>,
}

impl Shell {
    pub fn build(
        document: &web::Document,
        mount: &web::Element,
        dispatch: &Dispatch,
    ) -> anyhow::Result<Self> {
        let section = dom::el(document, "section", "lab-section")?;
        let bar = dom::el(document, "div", "mb-6")?;
        let toggle = dom::el(document, "button", "lab-view-toggle")?;
        dom::set_attrs(&toggle, &[("type", "button")]);
        dom::append(&bar, &toggle)?;
        dom::append(&section, &bar)?;
        let stage = dom::el(document, "div", "lab-stage")?;
        dom::append(&section, &stage)?;
        dom::append(mount, &section)?;

        let d = dispatch.clone();
        let listeners = vec![Listener::new(&toggle, "click", move |_: web::MouseEvent| {
            d(Action::ToggleView)
        })];

        Ok(Self {
            section,
            toggle,
            stage,
            _listeners: listeners,
        })
    }

    pub fn stage(&self) -> &web::HtmlElement {
        &self.stage
    }

    pub fn sync_toggle(&self, mode: ViewMode) {
        dom::set_attrs(
            &self.toggle,
            &[
                ("aria-pressed", if mode.is_grid() { "true" } else { "false" }),
                ("aria-label", mode.toggle_label()),
            ],
        );
        self.toggle.set_text_content(Some(mode.toggle_text()));
    }

    pub fn apply_fx(&self, fx: &EffectiveFx) {
        dom::set_class(&self.section, "lab-fx--on", fx.active);
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        self.section.remove();
    }
}

pub struct CarouselDom {
    container: web::HtmlElement,
    root: web::HtmlElement,
    ring: web::HtmlElement,
    tiles: Vec<web::HtmlElement>,
    _listeners: Vec<Listener>,
}

pub struct GridDom {
    region: web::HtmlElement,
    _listeners: Vec<Listener>,
}

pub enum ViewDom {
    Carousel(CarouselDom),
    Grid(GridDom),
}

impl ViewDom {
    pub fn build(
        document: &web::Document,
        stage: &web::HtmlElement,
        state: &Rc<RefCell<LabState>>,
        clock: Clock,
        dispatch: &Dispatch,
    ) -> anyhow::Result<Self> {
        let (mode, projects, radius, label) = {
            let st = state.borrow();
            (st.view(), st.projects().to_vec(), st.radius_px(), st.grid_label())
        };
        match mode {
            ViewMode::Carousel => {
                build_carousel(document, stage, &projects, radius, state, clock, dispatch)
                    .map(ViewDom::Carousel)
            }
            ViewMode::Grid => {
                build_grid(document, stage, &projects, label, dispatch).map(ViewDom::Grid)
            }
        }
    }

    pub fn apply_fx(&self, fx: &EffectiveFx) {
        if let ViewDom::Carousel(c) = self {
            dom::set_class(&c.root, "lab-scanlines", fx.scanlines);
            dom::set_class(&c.root, "lab-rgb-split", fx.rgb_split_on_hover);
            if !fx.depth_fade {
                for tile in &c.tiles {
                    dom::clear_style(tile, "--depthFactor");
                    dom::clear_style(tile, "opacity");
                }
            }
        }
    }

    pub fn apply_frame(
        &self,
        angle_deg: f64,
        radius_px: f64,
        hints: &[TileHint],
        depth_fade: bool,
    ) {
        let ViewDom::Carousel(c) = self else {
            return;
        };
        dom::set_style(&c.ring, "transform", &layout::ring_transform(angle_deg, radius_px));
        for (tile, hint) in c.tiles.iter().zip(hints) {
            dom::set_style(tile, "z-index", &hint.z_index.to_string());
            if depth_fade {
                dom::set_style(tile, "--depthFactor", &format!("{:.3}", hint.depth));
                dom::set_style(tile, "opacity", &format!("{:.3}", hint.opacity));
            }
        }
    }
}

impl Drop for ViewDom {
    fn drop(&mut self) {
        match self {
            ViewDom::Carousel(c) => c.container.remove(),
            ViewDom::Grid(g) => g.region.remove(),
        }
    }
}

fn build_carousel(
    document: &web::Document,
    stage: &web::HtmlElement,
    projects: &[Project],
    radius: f64,
    state: &Rc<RefCell<LabState>>,
    clock: Clock,
    dispatch: &Dispatch,
) -> anyhow::Result<CarouselDom> {
    let container = dom::el(document, "div", "lab-view lab-view--carousel")?;

    let skip = dom::el(document, "a", "sr-only lab-skip")?;
    let skip_href = format!("#{}", SKIP_TARGET_ID);
    dom::set_attrs(&skip, &[("href", skip_href.as_str())]);
    skip.set_text_content(Some("Skip 3D view"));
    dom::append(&container, &skip)?;

    let root = dom::el(document, "div", "lab-root")?;
    let ring = dom::el(document, "div", "lab-carousel")?;
    dom::set_attrs(
        &ring,
        &[
            ("data-testid", "lab-carousel"),
            ("role", "group"),
            ("aria-roledescription", "carousel"),
            ("aria-label", "Project carousel"),
        ],
    );
    dom::set_style(&ring, "transform", &layout::ring_transform(0.0, radius));

    let count = projects.len();
    let mut tiles = Vec::with_capacity(count);
    let mut listeners = Vec::with_capacity(count + 8);
    for (i, p) in projects.iter().enumerate() {
        let tile = dom::el(document, "div", "lab-tile")?;
        dom::set_attrs(&tile, &[("data-testid", "lab-tile")]);
        dom::set_style(&tile, "transform", &layout::tile_transform(i, count, radius));
        let (button, listener) = tile_button(document, p, i, Some(state.clone()), dispatch)?;
        dom::append(&tile, &button)?;
        dom::append(&ring, &tile)?;
        listeners.push(listener);
        tiles.push(tile);
    }
    dom::append(&root, &ring)?;
    dom::append(&container, &root)?;

    let after = dom::el(document, "span", "sr-only")?;
    dom::set_attrs(&after, &[("id", SKIP_TARGET_ID), ("tabindex", "-1")]);
    dom::append(&container, &after)?;
    dom::append(stage, &container)?;

    listeners.extend(events::wire_input_handlers(&InputWiring {
        root: root.clone(),
        state: state.clone(),
        clock,
    }));

    Ok(CarouselDom {
        container,
        root,
        ring,
        tiles,
        _listeners: listeners,
    })
}

fn build_grid(
    document: &web::Document,
    stage: &web::HtmlElement,
    projects: &[Project],
    label: &str,
    dispatch: &Dispatch,
) -> anyhow::Result<GridDom> {
    let region = dom::el(document, "div", "lab-grid")?;
    dom::set_attrs(&region, &[("role", "region"), ("aria-label", label)]);
    let mut listeners = Vec::with_capacity(projects.len());
    for (i, p) in projects.iter().enumerate() {
        let cell = dom::el(document, "div", "lab-grid-item")?;
        let (button, listener) = tile_button(document, p, i, None, dispatch)?;
        dom::append(&cell, &button)?;
        dom::append(&region, &cell)?;
        listeners.push(listener);
    }
    dom::append(stage, &region)?;
    Ok(GridDom {
        region,
        _listeners: listeners,
    })
}

/// Thumbnail button that opens the lightbox. In the carousel, clicks that
/// end a drag are swallowed; keyboard activation (`detail == 0`) always
/// opens.
fn tile_button(
    document: &web::Document,
    project: &Project,
    index: usize,
    drag_guard: Option<Rc<RefCell<LabState>>>,
    dispatch: &Dispatch,
) -> anyhow::Result<(web::HtmlElement, Listener)> {
    let button = dom::el(document, "button", "lab-link")?;
    dom::set_attrs(&button, &[("type", "button"), ("aria-label", project.title.as_str())]);
    let img = dom::el(document, "img", "lab-img")?;
    dom::set_attrs(
        &img,
        &[
            ("src", project.thumb_src.as_str()),
            ("alt", project.alt_text()),
            ("loading", "lazy"),
            ("draggable", "false"),
        ],
    );
    dom::append(&button, &img)?;

    let d = dispatch.clone();
    let listener = Listener::new(&button, "click", move |ev: web::MouseEvent| {
        let allowed = ev.detail() == 0
            || drag_guard
                .as_ref()
                .map_or(true, |s| s.borrow().activation_allowed());
        if allowed {
            d(Action::Open(index));
        }
    });
    Ok((button, listener))
}
