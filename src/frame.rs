use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` driver.
///
/// The callback re-arms itself after each frame. `stop` cancels the pending
/// request and drops the callback, which also breaks the callback's
/// reference to its own slot.
#[derive(Default)]
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some()
    }

    pub fn start(&mut self, mut on_frame: impl FnMut() + 'static) -> anyhow::Result<()> {
        if self.is_running() {
            return Ok(());
        }
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

        let tick_clone = self.tick.clone();
        let pending = self.pending.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending.set(None);
            on_frame();
            let Some(w) = web::window() else { return };
            if let Some(cb) = tick_clone.borrow().as_ref() {
                match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => pending.set(Some(id)),
                    Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
                }
            }
        }) as Box<dyn FnMut()>));

        let first = match self.tick.borrow().as_ref() {
            Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref()),
            None => return Ok(()),
        };
        match first {
            Ok(id) => {
                self.pending.set(Some(id));
                Ok(())
            }
            Err(e) => {
                self.tick.borrow_mut().take();
                Err(anyhow::anyhow!("requestAnimationFrame failed: {:?}", e))
            }
        }
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
