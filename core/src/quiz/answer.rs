use std::{
    collections::VecDeque,
    io::{self, BufRead, BufReader, Stdin},
    sync::{Arc, Mutex, PoisonError},
    thread,
    time::Duration,
};

use tokio::sync::oneshot;

/// Source of the user's answers.
pub trait AnswerReader {
    /// Starts collecting one answer for the question that was just prompted.
    ///
    /// Every call starts a fresh collection. The receiver yields the trimmed line, or is
    /// closed without a value when the collection could not be started. Nobody waits on a collection
    /// whose question timed out, so it must finish without blocking on its receiver.
    fn begin_read(&self) -> oneshot::Receiver<String>;
}

/// Reads each answer as one line of a shared source, on its own detached thread.
///
/// A thread left behind by a timed-out question keeps the source locked until it has read
/// its line, so a late answer is swallowed by that thread and never reaches the next
/// question. At EOF, or when the read fails, an empty answer is delivered.
#[derive(Debug)]
pub struct LineAnswerReader<B> {
    source: Arc<Mutex<B>>,
}

pub type StdinAnswerReader = LineAnswerReader<BufReader<Stdin>>;

impl LineAnswerReader<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<B> LineAnswerReader<B>
where
    B: BufRead + Send + 'static,
{
    pub fn new(source: B) -> Self {
        Self {
            source: Arc::new(Mutex::new(source)),
        }
    }

    fn read_answer(source: &Mutex<B>) -> String {
        let mut source = source.lock().unwrap_or_else(PoisonError::into_inner);
        let mut line = String::new();
        match source.read_line(&mut line) {
            Ok(0) => log::debug!("Answer source reached EOF"),
            Ok(_) => {}
            Err(e) => log::warn!("Failed to read answer: {}", e),
        }
        line.trim().to_owned()
    }
}

impl<B> Clone for LineAnswerReader<B> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<B> AnswerReader for LineAnswerReader<B>
where
    B: BufRead + Send + 'static,
{
    fn begin_read(&self) -> oneshot::Receiver<String> {
        let (tx, rx) = oneshot::channel();
        let source = Arc::clone(&self.source);

        let spawned = thread::Builder::new()
            .name("answer-reader".into())
            .spawn(move || {
                let answer = Self::read_answer(&source);
                if let Err(late) = tx.send(answer) {
                    log::debug!("Discarded late answer {:?}", late);
                }
            });

        if let Err(e) = spawned {
            log::warn!("Failed to spawn answer reader: {}", e);
        }
        rx
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedAnswer {
    pub delay: Duration,
    pub text: Option<String>,
}

impl ScriptedAnswer {
    /// Answers `text` once `delay` has passed since the collection started.
    pub fn after(delay: Duration, text: impl Into<String>) -> Self {
        Self {
            delay,
            text: Some(text.into()),
        }
    }

    /// Closes the collection after `delay` without answering, as when no reader
    /// thread could be started. The question can then only time out.
    pub fn silent(delay: Duration) -> Self {
        Self { delay, text: None }
    }
}

/// Replays canned answers on tokio tasks, one entry per collection.
///
/// Delays are measured with `tokio::time`, so a paused test clock drives them.
/// Must be used from within a tokio runtime. Once the script runs out, every
/// further collection is closed immediately.
#[derive(Debug, Default)]
pub struct ScriptedAnswerReader {
    script: Mutex<VecDeque<ScriptedAnswer>>,
}

impl ScriptedAnswerReader {
    pub fn new(script: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl AnswerReader for ScriptedAnswerReader {
    fn begin_read(&self) -> oneshot::Receiver<String> {
        let (tx, rx) = oneshot::channel();
        let next = self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        if let Some(ScriptedAnswer { delay, text }) = next {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                if let Some(text) = text {
                    let _ = tx.send(text.trim().to_owned());
                }
            });
        }
        rx
    }
}
