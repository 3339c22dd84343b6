//=========================================================================
// Shared Test Fixtures
//=========================================================================

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use aetheric_ui::prelude::*;

pub type Journal = Arc<Mutex<Vec<String>>>;
pub type Parked = Arc<Mutex<Vec<Completion>>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

//--- Screens -------------------------------------------------------------

/// How a [`Probe`] settles its completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// Calls `finish` inside the hook.
    Immediately,
    /// Parks the completion for the test to finish.
    Parked,
    /// Finishes from a freshly spawned thread.
    Thread,
}

/// Screen that records each hook into a shared journal as "<name>:<hook>".
pub struct Probe {
    name: String,
    journal: Journal,
    parked: Parked,
    settle: Settle,
    options: ScreenOptions,
}

impl Probe {
    fn note(&self, hook: &str) {
        self.journal.lock().unwrap().push(format!("{}:{}", self.name, hook));
    }

    fn settle(&self, completion: Completion) {
        match self.settle {
            Settle::Immediately => completion.finish(),
            Settle::Parked => self.parked.lock().unwrap().push(completion),
            Settle::Thread => {
                std::thread::spawn(move || completion.finish());
            }
        }
    }
}

impl Screen for Probe {
    fn on_setup(&mut self, context: &ScreenContext) {
        self.name = context.id().name().to_string();
        self.note("setup");
    }

    fn on_push(&mut self, data: ScreenData, completion: Completion) {
        self.note("push");
        if data.contains_key("message") {
            let message: String = data.get("message", String::new());
            self.note(&format!("message={}", message));
        }
        self.settle(completion);
    }

    fn on_pop(&mut self, completion: Completion) {
        self.note("pop");
        self.settle(completion);
    }

    fn on_focus(&mut self) {
        self.note("focus");
    }

    fn on_focus_lost(&mut self) {
        self.note("blur");
    }

    fn options(&self) -> ScreenOptions {
        self.options
    }
}

//--- Harness -------------------------------------------------------------

pub struct Harness {
    pub navigator: Navigator<HeadlessContainer, TemplateRegistry>,
    pub journal: Journal,
    pub parked: Parked,
}

impl Harness {
    /// Navigator with templates "Plain", "Cached", "Parked" and "Threaded".
    pub fn new() -> Self {
        init_logger();

        let journal: Journal = Arc::default();
        let parked: Parked = Arc::default();
        let mut templates = TemplateRegistry::new();

        for (template, settle, options) in [
            ("Plain", Settle::Immediately, ScreenOptions::default()),
            ("Cached", Settle::Immediately, ScreenOptions::cached()),
            ("Parked", Settle::Parked, ScreenOptions::default()),
            ("Threaded", Settle::Thread, ScreenOptions::default()),
        ] {
            let journal = journal.clone();
            let parked = parked.clone();
            templates.register(template, move || Probe {
                name: String::new(),
                journal: journal.clone(),
                parked: parked.clone(),
                settle,
                options,
            });
        }

        Self {
            navigator: NavigatorBuilder::new()
                .with_drain_interval(1)
                .build(HeadlessContainer::new(), templates),
            journal,
            parked,
        }
    }

    pub fn push(&mut self, name: &str, template: &str) {
        self.navigator
            .push(PushRequest::new(ScreenId::new(name)).with_template(template))
            .unwrap();
    }

    pub fn names(&self) -> Vec<String> {
        self.navigator
            .stack()
            .iter()
            .map(|id| id.name().to_string())
            .collect()
    }

    pub fn take_journal(&self) -> Vec<String> {
        std::mem::take(&mut *self.journal.lock().unwrap())
    }

    /// Finishes every parked completion and lets the navigator react.
    pub fn release_parked(&mut self) -> aetheric_ui::Result<()> {
        let parked: Vec<Completion> = std::mem::take(&mut *self.parked.lock().unwrap());
        for completion in parked {
            completion.finish();
        }
        self.navigator.process_signals()
    }

    pub fn parked_len(&self) -> usize {
        self.parked.lock().unwrap().len()
    }
}
