use crate::mount::Mount;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An attached event listener, removed from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn wire_input_handlers(mount: &Rc<RefCell<Mount>>) -> anyhow::Result<Vec<Listener>> {
    let container = mount.borrow().container.clone();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    Ok(vec![
        wire_pointermove(&container, mount)?,
        wire_pointerenter(&container, mount)?,
        wire_pointerleave(&container, mount)?,
        wire_resize(&window, mount)?,
    ])
}

fn wire_pointermove(
    container: &web::HtmlElement,
    mount: &Rc<RefCell<Mount>>,
) -> anyhow::Result<Listener> {
    let mount = mount.clone();
    let surface = container.clone();
    Listener::attach(container, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let rect = surface.get_bounding_client_rect();
        let x = ev.client_x() as f64 - rect.left();
        let y = ev.client_y() as f64 - rect.top();
        mount.borrow_mut().engine.pointer_move(x, y);
    })
}

fn wire_pointerenter(
    container: &web::HtmlElement,
    mount: &Rc<RefCell<Mount>>,
) -> anyhow::Result<Listener> {
    let mount = mount.clone();
    Listener::attach(container, "pointerenter", move |_| {
        mount.borrow_mut().engine.pointer_enter();
    })
}

fn wire_pointerleave(
    container: &web::HtmlElement,
    mount: &Rc<RefCell<Mount>>,
) -> anyhow::Result<Listener> {
    let mount = mount.clone();
    Listener::attach(container, "pointerleave", move |_| {
        mount.borrow_mut().engine.pointer_leave();
    })
}

fn wire_resize(window: &web::Window, mount: &Rc<RefCell<Mount>>) -> anyhow::Result<Listener> {
    let mount = mount.clone();
    Listener::attach(window, "resize", move |_| {
        mount.borrow_mut().measure();
    })
}
