//! In-memory intersection host for exercising the observer without a DOM

use crate::error::HeaderError;
use crate::stickiness::{IntersectionCallback, IntersectionEntry, IntersectionSource};
use std::cell::RefCell;
use std::rc::Rc;

/// Stand-in for a mounted element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub id: String,
}

impl Anchor {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

struct Observation {
    id: u64,
    anchor: Anchor,
    threshold: f64,
    callback: Rc<RefCell<IntersectionCallback>>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    active: Vec<Observation>,
    released: usize,
    failure: Option<String>,
}

/// Intersection source driven by hand from tests
///
/// Clones share the same registry, so a test can keep one handle and give
/// another to the observer.
#[derive(Clone, Default)]
pub struct ManualIntersectionSource {
    inner: Rc<RefCell<Inner>>,
}

impl ManualIntersectionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose `observe` always fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        let source = Self::default();
        source.inner.borrow_mut().failure = Some(message.into());
        source
    }

    /// Deliver one batch to every live observation
    pub fn emit(&self, entries: &[IntersectionEntry]) {
        let callbacks: Vec<_> = self
            .inner
            .borrow()
            .active
            .iter()
            .map(|o| Rc::clone(&o.callback))
            .collect();

        for callback in callbacks {
            let mut callback = callback.borrow_mut();
            (*callback)(entries);
        }
    }

    pub fn active_count(&self) -> usize {
        self.inner.borrow().active.len()
    }

    pub fn released_count(&self) -> usize {
        self.inner.borrow().released
    }

    /// Anchors currently observed, in attach order
    pub fn observed_anchors(&self) -> Vec<Anchor> {
        self.inner
            .borrow()
            .active
            .iter()
            .map(|o| o.anchor.clone())
            .collect()
    }

    pub fn thresholds(&self) -> Vec<f64> {
        self.inner
            .borrow()
            .active
            .iter()
            .map(|o| o.threshold)
            .collect()
    }
}

impl IntersectionSource for ManualIntersectionSource {
    type Target = Anchor;
    type Handle = u64;

    fn observe(
        &self,
        target: &Anchor,
        threshold: f64,
        callback: IntersectionCallback,
    ) -> Result<u64, HeaderError> {
        let mut inner = self.inner.borrow_mut();
        if let Some(message) = &inner.failure {
            return Err(HeaderError::ObserveFailed {
                message: message.clone(),
            });
        }

        let id = inner.next_id;
        inner.next_id += 1;
        inner.active.push(Observation {
            id,
            anchor: target.clone(),
            threshold,
            callback: Rc::new(RefCell::new(callback)),
        });
        Ok(id)
    }

    fn unobserve(&self, handle: u64) {
        let mut inner = self.inner.borrow_mut();
        let before = inner.active.len();
        inner.active.retain(|o| o.id != handle);
        if inner.active.len() < before {
            inner.released += 1;
        }
    }
}
