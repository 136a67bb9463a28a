//! Stub backends shared by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::backend::{GenerationParams, ModelBackend, TranslationModel, TranslationOutput};
use crate::error::BackendError;

#[derive(Debug, Clone)]
pub enum Reply {
    Echo,
    Fixed(String),
    Empty,
    Fail,
}

type RunLog = Rc<RefCell<Vec<(String, String, GenerationParams)>>>;

pub struct StubBackend {
    pub loads: RefCell<Vec<String>>,
    pub runs: RunLog,
    unavailable: Vec<String>,
    reply: Reply,
}

impl StubBackend {
    pub fn new(reply: Reply) -> Self {
        Self {
            loads: RefCell::new(Vec::new()),
            runs: Rc::default(),
            unavailable: Vec::new(),
            reply,
        }
    }

    pub fn echo() -> Self {
        Self::new(Reply::Echo)
    }

    pub fn without(mut self, model_id: &str) -> Self {
        self.unavailable.push(model_id.to_string());
        self
    }

    pub fn load_count(&self) -> usize {
        self.loads.borrow().len()
    }

    pub fn run_count(&self) -> usize {
        self.runs.borrow().len()
    }
}

#[async_trait(?Send)]
impl ModelBackend for StubBackend {
    async fn load(&self, model_id: &str) -> Result<Rc<dyn TranslationModel>, BackendError> {
        self.loads.borrow_mut().push(model_id.to_string());
        if self.unavailable.iter().any(|m| m == model_id) {
            return Err(BackendError::NotFound(model_id.to_string()));
        }
        Ok(Rc::new(StubModel {
            id: model_id.to_string(),
            reply: self.reply.clone(),
            runs: Rc::clone(&self.runs),
        }))
    }
}

struct StubModel {
    id: String,
    reply: Reply,
    runs: RunLog,
}

#[async_trait(?Send)]
impl TranslationModel for StubModel {
    fn model_id(&self) -> &str {
        &self.id
    }

    async fn run(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<Vec<TranslationOutput>, BackendError> {
        self.runs
            .borrow_mut()
            .push((self.id.clone(), text.to_string(), params.clone()));
        let translation_text = match &self.reply {
            Reply::Echo => text.to_string(),
            Reply::Fixed(s) => s.clone(),
            Reply::Empty => return Ok(Vec::new()),
            Reply::Fail => return Err(BackendError::Http(500)),
        };
        Ok(vec![TranslationOutput { translation_text }])
    }
}
