//! Scripted backend for exercising `System` without a display.

use crate::config::{Config, Rgba};
use crate::error::InitError;
use crate::platform::{Backend, IoEvent, Viewport};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Init,
    CreateWindow(u32, u32),
    CreateContext,
    LoadFunctions,
    SetViewport(Viewport),
    SetClearColor(Rgba),
    Poll(Option<IoEvent>),
    Clear,
    Present,
    DeleteContext,
    DestroyWindow,
    Shutdown,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FailAt {
    Init,
    Window,
    Context,
    Functions,
}

#[derive(Default)]
struct JournalInner {
    calls: RefCell<Vec<Call>>,
    windows: Cell<i32>,
    contexts: Cell<i32>,
}

/// Shared record of every call made against mock resources.
#[derive(Default, Clone)]
pub struct Journal(Rc<JournalInner>);

impl Journal {
    fn push(&self, call: Call) {
        self.0.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.0.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn live_windows(&self) -> i32 {
        self.0.windows.get()
    }

    pub fn live_contexts(&self) -> i32 {
        self.0.contexts.get()
    }

    pub fn balanced(&self) -> bool {
        self.live_windows() == 0 && self.live_contexts() == 0
    }
}

pub struct MockWindow {
    journal: Journal,
}

impl Drop for MockWindow {
    fn drop(&mut self) {
        self.journal.0.windows.set(self.journal.live_windows() - 1);
        self.journal.push(Call::DestroyWindow);
    }
}

pub struct MockContext {
    journal: Journal,
}

impl Drop for MockContext {
    fn drop(&mut self) {
        self.journal.0.contexts.set(self.journal.live_contexts() - 1);
        self.journal.push(Call::DeleteContext);
    }
}

/// Events arrive in per-frame batches: the first batch is pending right
/// after init, each `present` queues the next one. An exhausted script
/// delivers `Quit` so a broken loop cannot hang the test run.
pub struct MockBackend {
    journal: Journal,
    fail_at: Option<FailAt>,
    script: VecDeque<Vec<IoEvent>>,
    pending: VecDeque<IoEvent>,
    viewport: Viewport,
}

impl MockBackend {
    pub fn init(
        journal: &Journal,
        fail_at: Option<FailAt>,
        script: Vec<Vec<IoEvent>>,
    ) -> Result<MockBackend, InitError> {
        journal.push(Call::Init);
        if fail_at == Some(FailAt::Init) {
            return Err(InitError::Subsystem("no video device".to_string()));
        }
        let mut backend = MockBackend {
            journal: journal.clone(),
            fail_at,
            script: script.into(),
            pending: VecDeque::new(),
            viewport: Viewport {
                x: 0,
                y: 0,
                width: 0,
                height: 0,
            },
        };
        backend.next_batch();
        Ok(backend)
    }

    fn next_batch(&mut self) {
        self.pending = match self.script.pop_front() {
            Some(batch) => batch.into(),
            None => VecDeque::from([IoEvent::Quit]),
        };
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.journal.push(Call::Shutdown);
    }
}

impl Backend for MockBackend {
    type Window = MockWindow;
    type Context = MockContext;

    fn create_window(&mut self, config: &Config) -> Result<MockWindow, InitError> {
        self.journal
            .push(Call::CreateWindow(config.width, config.height));
        if self.fail_at == Some(FailAt::Window) {
            return Err(InitError::Window("window rejected".to_string()));
        }
        self.journal.0.windows.set(self.journal.live_windows() + 1);
        Ok(MockWindow {
            journal: self.journal.clone(),
        })
    }

    fn create_context(&mut self, _window: &MockWindow) -> Result<MockContext, InitError> {
        self.journal.push(Call::CreateContext);
        if self.fail_at == Some(FailAt::Context) {
            return Err(InitError::Context("no GL".to_string()));
        }
        self.journal.0.contexts.set(self.journal.live_contexts() + 1);
        Ok(MockContext {
            journal: self.journal.clone(),
        })
    }

    fn load_functions(&mut self, _ctx: &MockContext) -> Result<(), InitError> {
        self.journal.push(Call::LoadFunctions);
        if self.fail_at == Some(FailAt::Functions) {
            return Err(InitError::Functions("unresolved glClear".to_string()));
        }
        Ok(())
    }

    fn set_viewport(&mut self, _ctx: &MockContext, viewport: Viewport) {
        self.journal.push(Call::SetViewport(viewport));
        self.viewport = viewport;
    }

    fn viewport(&self, _ctx: &MockContext) -> Viewport {
        self.viewport
    }

    fn set_clear_color(&mut self, _ctx: &MockContext, color: Rgba) {
        self.journal.push(Call::SetClearColor(color));
    }

    fn poll_event(&mut self) -> Option<IoEvent> {
        let event = self.pending.pop_front();
        self.journal.push(Call::Poll(event));
        event
    }

    fn clear(&mut self, _ctx: &MockContext) {
        self.journal.push(Call::Clear);
    }

    fn present(&mut self, _window: &MockWindow) {
        self.journal.push(Call::Present);
        self.next_batch();
    }
}
