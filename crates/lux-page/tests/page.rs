//! Browser tests: build a DOM fixture, install the controller, dispatch real events.
//!
//! Run with `wasm-pack test --headless --chrome crates/lux-page`.

use lux_page::{Page, PageController};
use lux_page_core::anchor::parse_css_length;
use lux_page_core::scroll::progress_width;
use lux_page_core::settings::DEFAULT_ACKNOWLEDGMENT;
use lux_page_core::{OverlayState, Rotation, Settings};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Element, Event, EventInit, EventTarget, HtmlElement, KeyboardEvent, KeyboardEventInit,
    MouseEvent, MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

/// Replace the contents of a `#fixture` container. The rest of the body
/// belongs to the test runner and is left alone.
fn fixture(html: &str) -> Page {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let body = document.body().unwrap();
    let container = match document.get_element_by_id("fixture") {
        Some(container) => container,
        None => {
            let container = document.create_element("div").unwrap();
            container.set_id("fixture");
            body.append_child(&container).unwrap();
            container
        }
    };
    container.set_inner_html(html);
    body.style().remove_property("overflow").unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);
    Page::new(window, document, Settings::default())
}

fn element(page: &Page, selector: &str) -> Element {
    page.document.query_selector(selector).unwrap().unwrap()
}

fn style(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value(property)
        .unwrap()
}

fn mouse_event(event_type: &str, client_x: i32, client_y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(client_x);
    init.set_client_y(client_y);
    MouseEvent::new_with_mouse_event_init_dict(event_type, &init).unwrap()
}

/// Dispatch a click; returns `false` when a listener prevented the default.
fn click(target: &EventTarget) -> bool {
    target.dispatch_event(&mouse_event("click", 0, 0)).unwrap()
}

fn press(page: &Page, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_bubbles(true);
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    page.document.dispatch_event(&event).unwrap();
}

fn root_style(page: &Page) -> web_sys::CssStyleDeclaration {
    page.document
        .document_element()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1.0, "{actual} != {expected}");
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

const OVERLAY_HTML: &str = r##"
    <button class="lux-menu-btn" aria-expanded="false">Menu</button>
    <div class="overlay" aria-hidden="true">
        <nav class="overlay__content">
            <button class="overlay__close">Close</button>
            <a class="overlay__link" href="#services">Services</a>
        </nav>
    </div>
    <section id="services">Services</section>
"##;

fn assert_overlay(page: &Page, open: bool) {
    let overlay = element(page, ".overlay");
    let button = element(page, ".lux-menu-btn");
    let body: Element = page.document.body().unwrap().into();
    assert_eq!(overlay.class_list().contains("overlay--open"), open);
    assert_eq!(
        overlay.get_attribute("aria-hidden").as_deref(),
        Some(if open { "false" } else { "true" })
    );
    assert_eq!(
        button.get_attribute("aria-expanded").as_deref(),
        Some(if open { "true" } else { "false" })
    );
    assert_eq!(style(&body, "overflow"), if open { "hidden" } else { "" });
}

#[wasm_bindgen_test]
fn test_missing_targets_install_nothing() {
    let page = fixture("<p>Nothing interactive here</p>");
    let controller = PageController::install(&page);
    for event_type in ["scroll", "click", "keydown", "mousemove", "mouseleave", "submit"] {
        assert_eq!(controller.listener_count(event_type), 0, "{event_type}");
    }
    assert_eq!(controller.overlay_state(), None);
    assert!(!controller.has_reveal_observer());
}

#[wasm_bindgen_test]
fn test_year_stamp() {
    let page = fixture(r#"<footer>© <span id="year"></span></footer>"#);
    let _controller = PageController::install(&page);
    let year = js_sys::Date::new_0().get_full_year().to_string();
    assert_eq!(element(&page, "#year").text_content(), Some(year));
}

#[wasm_bindgen_test]
fn test_progress_bar_is_initialized() {
    let page = fixture(
        r#"<div class="scroll-bar"><div class="scroll-bar__fill"></div></div>
           <div style="height: 4000px"></div>"#,
    );
    let controller = PageController::install(&page);
    assert_eq!(controller.listener_count("scroll"), 1);

    let metrics = lux_page::progress::current_metrics(&page.document).unwrap();
    let fill = element(&page, ".scroll-bar__fill");
    assert_eq!(style(&fill, "width"), progress_width(metrics.percent()));
}

#[wasm_bindgen_test]
fn test_progress_bar_follows_scroll() {
    let page = fixture(
        r#"<div class="scroll-bar"><div class="scroll-bar__fill"></div></div>
           <div style="height: 4000px"></div>"#,
    );
    let _controller = PageController::install(&page);
    let fill = element(&page, ".scroll-bar__fill");
    assert_eq!(style(&fill, "width"), "0%");

    page.window.scroll_to_with_x_and_y(0.0, 500.0);
    page.window
        .dispatch_event(&Event::new("scroll").unwrap())
        .unwrap();

    let root = page.document.document_element().unwrap();
    assert_eq!(root.scroll_top(), 500);
    let max = f64::from(root.scroll_height() - root.client_height()).max(1.0);
    let expected = 100.0 * 500.0 / max;

    let width = style(&fill, "width");
    assert_ne!(width, "0%");
    // The browser may shorten the serialized percentage.
    let percent = parse_css_length(&width).unwrap();
    assert!((percent - expected).abs() < 0.01, "{width} vs {}", progress_width(expected));
}

#[wasm_bindgen_test]
fn test_overlay_open_and_close_button() {
    let page = fixture(OVERLAY_HTML);
    let controller = PageController::install(&page);
    assert_eq!(controller.overlay_state(), Some(OverlayState::Closed));

    click(&element(&page, ".lux-menu-btn"));
    assert_eq!(controller.overlay_state(), Some(OverlayState::Open));
    assert_overlay(&page, true);

    // Opening again changes nothing.
    click(&element(&page, ".lux-menu-btn"));
    assert_overlay(&page, true);

    click(&element(&page, ".overlay__close"));
    assert_eq!(controller.overlay_state(), Some(OverlayState::Closed));
    assert_overlay(&page, false);

    // Closing again changes nothing.
    click(&element(&page, ".overlay__close"));
    assert_overlay(&page, false);
}

#[wasm_bindgen_test]
fn test_overlay_escape_key() {
    let page = fixture(OVERLAY_HTML);
    let controller = PageController::install(&page);

    press(&page, "Escape");
    assert_eq!(controller.overlay_state(), Some(OverlayState::Closed));
    assert_overlay(&page, false);

    click(&element(&page, ".lux-menu-btn"));
    press(&page, "Enter");
    assert_overlay(&page, true);

    press(&page, "Escape");
    assert_overlay(&page, false);
}

#[wasm_bindgen_test]
fn test_overlay_backdrop_click_only() {
    let page = fixture(OVERLAY_HTML);
    let controller = PageController::install(&page);
    click(&element(&page, ".lux-menu-btn"));

    click(&element(&page, ".overlay__content"));
    assert_eq!(controller.overlay_state(), Some(OverlayState::Open));
    assert_overlay(&page, true);

    click(&element(&page, ".overlay"));
    assert_eq!(controller.overlay_state(), Some(OverlayState::Closed));
    assert_overlay(&page, false);
}

#[wasm_bindgen_test]
fn test_overlay_link_closes_and_scrolls() {
    let page = fixture(OVERLAY_HTML);
    let controller = PageController::install(&page);
    click(&element(&page, ".lux-menu-btn"));

    let not_prevented = click(&element(&page, ".overlay__link"));
    assert!(!not_prevented);
    assert_eq!(controller.overlay_state(), Some(OverlayState::Closed));
    assert_overlay(&page, false);
}

#[wasm_bindgen_test]
fn test_overlay_needs_menu_button() {
    let page = fixture(r#"<div class="overlay" aria-hidden="true"></div>"#);
    let controller = PageController::install(&page);
    assert_eq!(controller.overlay_state(), None);
    assert_eq!(controller.listener_count("keydown"), 0);
}

#[wasm_bindgen_test]
fn test_fragment_links() {
    let page = fixture(
        r##"<a id="to-contact" href="#contact">Contact</a>
            <a id="to-missing" href="#missing">Missing</a>
            <a id="to-top" href="#">Top</a>
            <a id="to-invalid" href="#1-invalid">Invalid</a>
            <div style="height: 2000px"></div>
            <section id="contact">Contact</section>"##,
    );
    let _controller = PageController::install(&page);

    assert!(!click(&element(&page, "#to-contact")));
    assert!(click(&element(&page, "#to-missing")));
    assert!(click(&element(&page, "#to-top")));
    assert!(click(&element(&page, "#to-invalid")));
}

#[wasm_bindgen_test]
fn test_scroll_top_uses_header_height_property() {
    let page = fixture(
        r#"<div style="height: 1500px"></div>
           <section id="contact">Contact</section>
           <div style="height: 3000px"></div>"#,
    );
    let target = element(&page, "#contact");
    let natural_top = || {
        target.get_bounding_client_rect().top() + page.window.page_y_offset().unwrap()
    };

    root_style(&page).remove_property("--header-h").unwrap();
    let top = lux_page::anchor::scroll_top_for(&page, &target).unwrap();
    assert_close(top, natural_top() - 88.0);

    root_style(&page).set_property("--header-h", "64px").unwrap();
    let top = lux_page::anchor::scroll_top_for(&page, &target).unwrap();
    assert_close(top, natural_top() - 74.0);

    root_style(&page).set_property("--header-h", "auto").unwrap();
    let top = lux_page::anchor::scroll_top_for(&page, &target).unwrap();
    assert_close(top, natural_top() - 88.0);

    root_style(&page).remove_property("--header-h").unwrap();
}

#[wasm_bindgen_test]
async fn test_scroll_target_buttons() {
    let page = fixture(
        r##"<button id="go" data-scroll-target="#contact">Go</button>
            <button id="empty" data-scroll-target="">Nowhere</button>
            <button id="lost" data-scroll-target="#missing">Lost</button>
            <div style="height: 1500px"></div>
            <section id="contact">Contact</section>
            <div style="height: 3000px"></div>"##,
    );
    let controller = PageController::install(&page);
    assert_eq!(controller.listener_count("click"), 3);

    click(&element(&page, "#empty"));
    click(&element(&page, "#lost"));
    sleep(300).await;
    assert_eq!(page.window.page_y_offset().unwrap(), 0.0);

    let expected = lux_page::anchor::scroll_top_for(&page, &element(&page, "#contact")).unwrap();
    assert!(expected > 0.0);
    click(&element(&page, "#go"));
    sleep(1500).await;
    assert_close(page.window.page_y_offset().unwrap(), expected);
}

#[wasm_bindgen_test]
fn test_tilt_follows_cursor_and_resets() {
    let page = fixture(
        r#"<div id="card" data-tilt
                style="position: fixed; left: 0; top: 0; width: 100px; height: 100px"></div>
           <div id="strong" data-tilt data-tilt-intensity="strong"
                style="position: fixed; left: 200px; top: 0; width: 100px; height: 100px"></div>"#,
    );
    let _controller = PageController::install(&page);

    let card = element(&page, "#card");
    card.dispatch_event(&mouse_event("mousemove", 50, 50)).unwrap();
    assert_eq!(
        style(&card, "transform"),
        "perspective(900px) rotateX(0deg) rotateY(0deg) translateY(-1px)"
    );

    card.dispatch_event(&mouse_event("mouseleave", 50, 50)).unwrap();
    assert_eq!(style(&card, "transform"), "");

    let strong = element(&page, "#strong");
    strong.dispatch_event(&mouse_event("mousemove", 300, 0)).unwrap();
    assert_eq!(
        style(&strong, "transform"),
        "perspective(900px) rotateX(6deg) rotateY(6deg) translateY(-1px)"
    );
}

#[wasm_bindgen_test]
fn test_tilt_rotation_at_center_is_flat() {
    let page = fixture(
        r#"<div id="card"
                style="position: fixed; left: 10px; top: 20px; width: 200px; height: 100px">
           </div>"#,
    );
    let card = element(&page, "#card");
    let rotation = lux_page::tilt::rotation_at(&card, 110.0, 70.0, 8.0).unwrap();
    assert_eq!(rotation, Rotation::default());
}

#[wasm_bindgen_test]
fn test_form_submission_is_acknowledged() {
    let page = fixture(
        r#"<form class="contact-form" action="/never"><input name="email"></form>"#,
    );
    let recorder = js_sys::Function::new_with_args("message", "window.__luxAck = message;");
    js_sys::Reflect::set(&page.window, &"alert".into(), &recorder).unwrap();
    let _controller = PageController::install(&page);

    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let submit = Event::new_with_event_init_dict("submit", &init).unwrap();
    let not_prevented = element(&page, ".contact-form").dispatch_event(&submit).unwrap();

    assert!(!not_prevented);
    let acknowledgment = js_sys::Reflect::get(&page.window, &"__luxAck".into()).unwrap();
    assert_eq!(acknowledgment.as_string().as_deref(), Some(DEFAULT_ACKNOWLEDGMENT));
}

#[wasm_bindgen_test]
async fn test_reveal_marks_visible_elements_only() {
    let page = fixture(
        r#"<div id="near" class="reveal" style="height: 50px">Near</div>
           <div id="far" class="reveal"
                style="position: absolute; top: 20000px; height: 50px">Far</div>"#,
    );
    let controller = PageController::install(&page);
    assert!(controller.has_reveal_observer());

    sleep(300).await;

    assert!(element(&page, "#near").class_list().contains("in-view"));
    assert!(!element(&page, "#far").class_list().contains("in-view"));
    drop(controller);
}

#[wasm_bindgen_test]
fn test_dropping_controller_detaches_listeners() {
    let page = fixture(OVERLAY_HTML);
    let controller = PageController::install(&page);
    drop(controller);

    click(&element(&page, ".lux-menu-btn"));
    let button = element(&page, ".lux-menu-btn");
    assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn test_config_overrides() {
    let page = fixture(
        r#"<script type="application/json" id="lux-page-config">
               { "acknowledgment": "Thanks!", "tilt_base_deg": 4 }
           </script>"#,
    );
    let settings = lux_page::config::load(&page.document);
    assert_eq!(settings.acknowledgment, "Thanks!");
    assert_eq!(settings.tilt_base_deg, 4.0);
    assert_eq!(settings.reveal_threshold, 0.12);

    let page = fixture(
        r#"<script type="application/json" id="lux-page-config">{ not json</script>"#,
    );
    assert_eq!(lux_page::config::load(&page.document), Settings::default());
}

#[wasm_bindgen_test]
fn test_bootstrap_runs_once_and_tears_down() {
    let page = fixture(OVERLAY_HTML);
    lux_page::bootstrap::teardown();

    lux_page::bootstrap::run().unwrap();
    assert!(lux_page::bootstrap::is_installed());
    lux_page::bootstrap::run().unwrap();

    click(&element(&page, ".lux-menu-btn"));
    assert_overlay(&page, true);

    lux_page::bootstrap::teardown();
    assert!(!lux_page::bootstrap::is_installed());
    press(&page, "Escape");
    assert_overlay(&page, true);
}
