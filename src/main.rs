//! Keypad Calc entry point
//!
//! Browser: builds the keypad into `#calculator` and wires pointer and
//! keyboard events to the store. Native: reads keys from stdin.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

    use keypad_calc::keymap::action_for_key;
    use keypad_calc::layout::{ButtonSpec, keypad};
    use keypad_calc::{Action, Settings, Store};

    const PREVIOUS_ID: &str = "previous-operand";
    const CURRENT_ID: &str = "current-operand";

    /// App instance shared with every listener
    struct App {
        store: Store,
    }

    impl App {
        fn new() -> Self {
            Self {
                store: Store::new(),
            }
        }

        fn dispatch(&mut self, action: Action) {
            if self.store.dispatch(action) {
                self.render();
            }
        }

        /// Write both display lines into the DOM
        fn render(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let text = self.store.display();

            if let Some(el) = document.get_element_by_id(PREVIOUS_ID) {
                el.set_text_content(Some(&text.previous));
            }
            if let Some(el) = document.get_element_by_id(CURRENT_ID) {
                el.set_text_content(Some(&text.current));
            }
        }
    }

    pub fn run() {
        let settings = Settings::load();

        console_error_panic_hook::set_once();
        console_log::init_with_level(settings.verbosity.level()).expect("Failed to init logger");

        log::info!("Keypad Calc starting...");
        log::info!(
            "Settings: keyboard={} hints={} verbosity={}",
            settings.keyboard_enabled,
            settings.show_key_hints,
            settings.verbosity.as_str()
        );

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let Some(grid) = document.get_element_by_id("calculator") else {
            log::error!("No #calculator element, nothing to mount");
            return;
        };

        let app = Rc::new(RefCell::new(App::new()));

        if let Err(e) = build_display(&document, &grid) {
            log::error!("Failed to build display: {:?}", e);
            return;
        }
        if let Err(e) = build_keypad(&document, &grid, app.clone(), settings.show_key_hints) {
            log::error!("Failed to build keypad: {:?}", e);
            return;
        }

        if settings.keyboard_enabled {
            setup_keyboard(app.clone());
        }

        app.borrow().render();

        log::info!("Keypad Calc running!");
    }

    fn build_display(document: &Document, grid: &Element) -> Result<(), JsValue> {
        let output = document.create_element("div")?;
        output.set_class_name("output");

        for id in [PREVIOUS_ID, CURRENT_ID] {
            let line = document.create_element("div")?;
            line.set_id(id);
            line.set_class_name(id);
            output.append_child(&line)?;
        }

        grid.append_child(&output)?;
        Ok(())
    }

    fn build_keypad(
        document: &Document,
        grid: &Element,
        app: Rc<RefCell<App>>,
        show_hints: bool,
    ) -> Result<(), JsValue> {
        for spec in keypad() {
            let button = create_button(document, &spec, show_hints)?;

            let app = app.clone();
            let action = spec.action;
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().dispatch(action);
            });
            let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();

            grid.append_child(&button)?;
        }
        Ok(())
    }

    fn create_button(document: &Document, spec: &ButtonSpec, show_hint: bool) -> Result<Element, JsValue> {
        let button = document.create_element("button")?;
        let _ = button.set_attribute("type", "button");
        if spec.span_two {
            button.set_class_name(spec.css_class());
        }
        button.set_text_content(Some(spec.label));

        if let Some(hint) = spec.hint.filter(|_| show_hint) {
            let caption = document.create_element("h6")?;
            caption.set_text_content(Some(hint));
            button.append_child(&caption)?;
        }
        Ok(button)
    }

    /// Single keydown listener for every mirrored key
    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            // Leave browser shortcuts (Ctrl+-, Cmd+R, ...) alone
            if event.ctrl_key() || event.meta_key() || event.alt_key() {
                return;
            }
            if let Some(action) = action_for_key(&event.key()) {
                // Stops Enter re-clicking a focused button and `/` opening quick-find
                event.prevent_default();
                app.borrow_mut().dispatch(action);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io::BufRead;

    use keypad_calc::keymap::actions_for_line;
    use keypad_calc::{Settings, Store};

    let settings = Settings::load();
    env_logger::Builder::new()
        .filter_level(settings.verbosity.level_filter())
        .parse_default_env()
        .init();
    log::info!("Keypad Calc (native) starting...");
    log::info!("Type keys separated by spaces, e.g. `12 + 3 Enter`; Ctrl-D quits");

    let mut store = Store::new();
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                break;
            }
        };

        for action in actions_for_line(&line) {
            store.dispatch(action);
        }

        let text = store.display();
        println!("{:>24}", text.previous);
        println!("{:>24}", text.current);
    }

    log::info!("{} actions dispatched", store.dispatched());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
