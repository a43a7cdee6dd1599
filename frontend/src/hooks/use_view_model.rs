use std::cell::{Ref, RefCell};
use std::rc::Rc;

use yew::prelude::*;

/// A `shared` state machine held across renders.
///
/// Timers and async tasks mutate the model through [`ViewModel::update`],
/// which always sees the latest state (unlike a captured `use_state` value)
/// and re-renders the component afterwards.
#[derive(Clone)]
pub struct ViewModel<T> {
    inner: Rc<RefCell<T>>,
    refresh: UseForceUpdateHandle,
}

impl<T> ViewModel<T> {
    pub fn read(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.inner.borrow_mut());
        self.refresh.force_update();
        result
    }
}

#[hook]
pub fn use_view_model<T, F>(init: F) -> ViewModel<T>
where
    T: 'static,
    F: FnOnce() -> T,
{
    let inner = use_mut_ref(init);
    let refresh = use_force_update();
    ViewModel { inner, refresh }
}
