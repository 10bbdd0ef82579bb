use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Observer = Box<dyn Fn(f64)>;

#[derive(Default)]
struct Inner {
    value: Cell<f64>,
    observers: RefCell<Vec<Observer>>,
}

/// Shared handle to the wheel's total rotation in radians.
///
/// Clones point at the same value. Only the selector writes it; renderers
/// read it or register an observer. Observers run synchronously on every
/// `set` and must not register further observers from inside the callback.
#[derive(Clone, Default)]
pub struct RotationValue {
    inner: Rc<Inner>,
}

impl RotationValue {
    pub fn new(value: f64) -> Self {
        let rotation = Self::default();
        rotation.inner.value.set(value);
        rotation
    }

    pub fn get(&self) -> f64 {
        self.inner.value.get()
    }

    pub fn set(&self, value: f64) {
        self.inner.value.set(value);
        for observer in self.inner.observers.borrow().iter() {
            observer(value);
        }
    }

    pub fn observe(&self, observer: impl Fn(f64) + 'static) {
        self.inner.observers.borrow_mut().push(Box::new(observer));
    }
}

impl fmt::Debug for RotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotationValue")
            .field("value", &self.get())
            .field("observers", &self.inner.observers.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_value() {
        let a = RotationValue::new(1.5);
        let b = a.clone();
        b.set(-4.0);
        assert_eq!(a.get(), -4.0);
    }

    #[test]
    fn test_observers_see_every_write() {
        let rotation = RotationValue::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        rotation.observe(move |v| sink.borrow_mut().push(v));

        rotation.set(0.25);
        rotation.set(0.5);

        assert_eq!(*seen.borrow(), vec![0.25, 0.5]);
    }
}
